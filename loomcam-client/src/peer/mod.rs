/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! The signaling/transport collaborator, wrapped behind a fixed set of
//! named events.
//!
//! `js` holds the raw foreign bindings; `endpoint` is the safe surface the
//! rest of the crate uses.  Peer discovery, negotiation, and media transport
//! all happen inside the external library; nothing in this crate touches the
//! wire.

mod endpoint;
pub(crate) mod js;

pub use endpoint::{ActiveCall, CallCallbacks, EndpointCallbacks, IncomingCall, PeerEndpoint};
