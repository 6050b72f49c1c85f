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

//! This crate provides the client-side (browser) half of the LoomCam
//! bridge: it relays a phone's camera feed to a PC browser tab over a
//! peer-to-peer media connection, so the PC tab can be captured as a
//! virtual webcam.
//!
//! Peer discovery, negotiation, and media transport are delegated to an
//! external signaling/transport library the host page loads; this crate
//! wraps it behind a fixed set of named events and drives the two roles.
//!
//! This crate intends to make no assumptions about the UI or the HTML of
//! the client app.  The only DOM data it needs is the id of the
//! `HtmlVideoElement` each role renders into.
//!
//! # Outline of usage
//!
//! ## Camera (phone) role:
//! ```ignore
//! let sender = CameraSender::new(CameraOptions {
//!     target_id,      // identifier shown on the monitor
//!     video_elem_id,  // local preview element
//!     on_status,      // callback for each status transition
//! });
//! sender.start();
//! // dropping the sender releases the call, registration and tracks
//! ```
//!
//! ## Monitor (PC) role:
//! ```ignore
//! let receiver = MonitorReceiver::start(MonitorOptions {
//!     video_elem_id,  // surface for the remote feed
//!     on_registered,  // identifier is ready to display
//!     on_stream,      // remote feed attached
//!     on_error,       // registration or call failure
//! })?;
//! // dropping the receiver releases the registration
//! ```
//!
//! ## Event bus:
//! ```ignore
//! let mut rx = subscribe_peer_events();
//! // every PeerEvent is also broadcast here, for UIs that prefer
//! // subscription over callbacks
//! ```

mod camera;
mod constants;
mod event_bus;
mod events;
mod media_devices;
mod monitor;
mod peer;
mod session_id;
mod utils;
mod video_sink;

pub use camera::{CameraOptions, CameraSender, StreamStatus};
pub use constants::{
    CAMERA_FACING_MODE, SESSION_ID_PREFIX, SESSION_ID_SPAN, VIDEO_HEIGHT, VIDEO_WIDTH,
};
pub use event_bus::{emit_peer_event, subscribe_peer_events};
pub use events::PeerEvent;
pub use media_devices::CameraAccess;
pub use monitor::{MonitorOptions, MonitorReceiver};
pub use peer::{ActiveCall, CallCallbacks, EndpointCallbacks, IncomingCall, PeerEndpoint};
pub use session_id::{generate_session_id, has_monitor_prefix};
pub use video_sink::VideoSink;
