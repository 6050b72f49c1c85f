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

//! Framework-agnostic event types for the LoomCam client.
//!
//! One variant per named collaborator event, plus the two media-permission
//! outcomes.  Events are emitted via the event bus and can be subscribed to
//! by any frontend framework.

/// Events emitted by the peer endpoint and media layers.
#[derive(Clone, Debug)]
pub enum PeerEvent {
    // === Endpoint Events ===
    /// The endpoint is registered with the signaling system under this
    /// identifier.
    Opened(String),

    /// A remote peer is calling this endpoint.
    CallIncoming(String),

    // === Call Events ===
    /// A remote media stream arrived from the given peer.
    StreamReceived(String),

    /// The active call was closed by the remote side.
    CallClosed,

    /// The endpoint or an active call failed.
    Errored(String),

    // === Device Events ===
    /// Camera/microphone permission was granted.
    PermissionGranted,

    /// Camera/microphone permission was denied.
    PermissionDenied(String),
}
