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

//! The camera role: acquire the local camera, connect to the monitor's
//! identifier, and offer the stream for transport.

use log::{debug, error};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{MediaStream, MediaStreamTrack};

use crate::media_devices::CameraAccess;
use crate::peer::{ActiveCall, CallCallbacks, EndpointCallbacks, PeerEndpoint};
use crate::utils::js_error_message;
use crate::video_sink::VideoSink;

/// Display-only status of the camera role, in transition order.
///
/// Each transition overwrites the prior status; no history is kept.
/// `Failed` carries the complete user-facing error line, so the three
/// failure sources (media access, connection open, call) keep their
/// distinct wording.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StreamStatus {
    Idle,
    AccessingCamera,
    Connecting(String),
    Streaming,
    Ended,
    Failed(String),
}

impl StreamStatus {
    /// Whether `next` is a legal successor.  Transitions are one-way;
    /// failures are reachable from any live state; terminal states accept
    /// only a manual restart.
    pub fn accepts(&self, next: &StreamStatus) -> bool {
        use StreamStatus::*;
        match (self, next) {
            // Manual restart from the idle or terminal states.
            (Idle | Ended | Failed(_), AccessingCamera) => true,
            (Failed(_), _) => false,
            (_, Failed(_)) => true,
            (AccessingCamera, Connecting(_)) => true,
            (Connecting(_), Streaming) => true,
            (Streaming, Ended) => true,
            _ => false,
        }
    }

    /// True while an attempt is in flight or streaming; starting is ignored
    /// in these states.
    pub fn is_active(&self) -> bool {
        use StreamStatus::*;
        matches!(self, AccessingCamera | Connecting(_) | Streaming)
    }
}

impl fmt::Display for StreamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamStatus::Idle => write!(f, "Idle"),
            StreamStatus::AccessingCamera => write!(f, "Accessing Camera..."),
            StreamStatus::Connecting(id) => write!(f, "Connecting to {id}..."),
            StreamStatus::Streaming => write!(f, "Streaming Live!"),
            StreamStatus::Ended => write!(f, "Call Ended"),
            StreamStatus::Failed(message) => write!(f, "{message}"),
        }
    }
}

/// Options struct for constructing a sender via
/// [CameraSender::new(options)][CameraSender::new]
pub struct CameraOptions {
    /// Identifier of the monitor endpoint to stream to, as typed by the
    /// user.
    pub target_id: String,

    /// DOM id of the `HtmlVideoElement` for the local (muted) preview.
    pub video_elem_id: String,

    /// Callback called with every accepted status transition.
    pub on_status: Rc<dyn Fn(StreamStatus)>,
}

struct Inner {
    target_id: String,
    status: StreamStatus,
    on_status: Rc<dyn Fn(StreamStatus)>,
    preview: VideoSink,
    endpoint: Option<PeerEndpoint>,
    call: Option<ActiveCall>,
    released: bool,
}

/// Driver for the camera (phone) role.
///
/// [start()][Self::start] runs the whole flow: camera acquisition, local
/// preview, connection, call.  Progress is reported through
/// `on_status`; every failure is terminal for the attempt and the user
/// restarts manually.  Dropping the sender releases the call, the
/// registration, and the local tracks.
pub struct CameraSender {
    inner: Rc<RefCell<Inner>>,
}

impl CameraSender {
    pub fn new(options: CameraOptions) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                target_id: options.target_id,
                status: StreamStatus::Idle,
                on_status: options.on_status,
                preview: VideoSink::new(&options.video_elem_id),
                endpoint: None,
                call: None,
                released: false,
            })),
        }
    }

    pub fn status(&self) -> StreamStatus {
        self.inner.borrow().status.clone()
    }

    /// Begin streaming to the configured target.  Ignored while an attempt
    /// is already in flight.
    pub fn start(&self) {
        if self.inner.borrow().status.is_active() {
            debug!("start ignored: attempt already in flight");
            return;
        }
        Self::set_status(&self.inner, StreamStatus::AccessingCamera);

        let mut access = CameraAccess::new();
        let inner = Rc::clone(&self.inner);
        access.on_granted = Rc::new(move |stream: MediaStream| {
            Self::on_media_granted(&inner, stream);
        });
        let inner = Rc::clone(&self.inner);
        access.on_denied = Rc::new(move |e: JsValue| {
            let mut message = js_error_message(&e);
            if message.is_empty() {
                message = "Camera blocked".to_string();
            }
            error!("camera access denied: {message}");
            Self::set_status(&inner, StreamStatus::Failed(format!("Error: {message}")));
        });
        access.request();
    }

    /// Tear the sender down: close the call, release the registration,
    /// stop the local tracks.  A stopped sender stays down; restarting
    /// means constructing a new one.
    pub fn stop(&self) {
        Self::release(&self.inner);
    }

    fn on_media_granted(inner: &Rc<RefCell<Inner>>, stream: MediaStream) {
        let target_id = {
            let mut guard = inner.borrow_mut();
            // The sender may have been torn down while the permission
            // prompt was open; stop the tracks so the camera light goes
            // off.
            if guard.released {
                for track in stream.get_tracks().iter() {
                    track.unchecked_into::<MediaStreamTrack>().stop();
                }
                return;
            }
            guard.preview.attach(&stream, true);
            guard.target_id.clone()
        };
        Self::set_status(inner, StreamStatus::Connecting(target_id.clone()));

        let callbacks = EndpointCallbacks {
            on_open: {
                let inner = Rc::clone(inner);
                let stream = stream.clone();
                let target_id = target_id.clone();
                Rc::new(move |_own_id| Self::place_call(&inner, &target_id, &stream))
            },
            // The camera role only originates; inbound calls are not
            // expected and not answered.
            on_call: Rc::new(|_| {}),
            on_error: {
                let inner = Rc::clone(inner);
                Rc::new(move |message: String| {
                    Self::set_status(
                        &inner,
                        StreamStatus::Failed(format!("Connection Error: {message}")),
                    );
                })
            },
        };
        match PeerEndpoint::connect(callbacks) {
            Ok(endpoint) => {
                inner.borrow_mut().endpoint = Some(endpoint);
            }
            Err(e) => {
                Self::set_status(inner, StreamStatus::Failed(format!("Connection Error: {e}")));
            }
        }
    }

    fn place_call(inner: &Rc<RefCell<Inner>>, target_id: &str, stream: &MediaStream) {
        let callbacks = CallCallbacks {
            on_stream: Rc::new(|_| {}),
            on_close: {
                let inner = Rc::clone(inner);
                Rc::new(move || Self::set_status(&inner, StreamStatus::Ended))
            },
            on_error: {
                let inner = Rc::clone(inner);
                Rc::new(move |message: String| {
                    Self::set_status(&inner, StreamStatus::Failed(format!("Call Error: {message}")));
                })
            },
        };
        let call = {
            let guard = inner.borrow();
            match guard.endpoint.as_ref() {
                Some(endpoint) => endpoint.call(target_id, stream, callbacks),
                None => return,
            }
        };
        inner.borrow_mut().call = Some(call);
        Self::set_status(inner, StreamStatus::Streaming);
    }

    // The callback runs outside the borrow: a UI callback may call back
    // into the sender synchronously.
    fn set_status(inner: &Rc<RefCell<Inner>>, next: StreamStatus) {
        let on_status = {
            let mut guard = inner.borrow_mut();
            if !guard.status.accepts(&next) {
                debug!("ignoring status change {:?} -> {:?}", guard.status, next);
                return;
            }
            guard.status = next.clone();
            Rc::clone(&guard.on_status)
        };
        on_status(next);
    }

    fn release(inner: &Rc<RefCell<Inner>>) {
        if let Ok(mut guard) = inner.try_borrow_mut() {
            guard.released = true;
            guard.call = None;
            guard.endpoint = None;
            guard.preview.detach();
        }
    }
}

impl Drop for CameraSender {
    fn drop(&mut self) {
        Self::release(&self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::StreamStatus::*;
    use super::*;

    fn connecting() -> StreamStatus {
        Connecting("loom-monitor-4821".to_string())
    }

    #[test]
    fn happy_path_transitions_in_order() {
        let mut status = Idle;
        for next in [AccessingCamera, connecting(), Streaming, Ended] {
            assert!(status.accepts(&next), "{status:?} should accept {next:?}");
            status = next;
        }
    }

    #[test]
    fn no_state_is_skipped() {
        assert!(!Idle.accepts(&connecting()));
        assert!(!Idle.accepts(&Streaming));
        assert!(!AccessingCamera.accepts(&Streaming));
        assert!(!connecting().accepts(&Ended));
    }

    #[test]
    fn failure_is_reachable_from_any_live_state() {
        let failed = Failed("Error: Camera blocked".to_string());
        assert!(Idle.accepts(&failed));
        assert!(AccessingCamera.accepts(&failed));
        assert!(connecting().accepts(&failed));
        assert!(Streaming.accepts(&failed));
    }

    #[test]
    fn failure_is_terminal_until_restart() {
        let failed = Failed("Call Error: lost".to_string());
        assert!(!failed.accepts(&Streaming));
        assert!(!failed.accepts(&Ended));
        assert!(!failed.accepts(&Failed("Error: again".to_string())));
        assert!(failed.accepts(&AccessingCamera));
    }

    #[test]
    fn ended_accepts_restart_only() {
        assert!(Ended.accepts(&AccessingCamera));
        assert!(!Ended.accepts(&Streaming));
        assert!(!Ended.accepts(&connecting()));
    }

    #[test]
    fn active_states_ignore_start() {
        assert!(AccessingCamera.is_active());
        assert!(connecting().is_active());
        assert!(Streaming.is_active());
        assert!(!Idle.is_active());
        assert!(!Ended.is_active());
        assert!(!Failed("Error: x".to_string()).is_active());
    }

    #[test]
    fn display_matches_user_facing_strings() {
        assert_eq!(Idle.to_string(), "Idle");
        assert_eq!(AccessingCamera.to_string(), "Accessing Camera...");
        assert_eq!(connecting().to_string(), "Connecting to loom-monitor-4821...");
        assert_eq!(Streaming.to_string(), "Streaming Live!");
        assert_eq!(Ended.to_string(), "Call Ended");
        assert_eq!(
            Failed("Connection Error: peer unavailable".to_string()).to_string(),
            "Connection Error: peer unavailable"
        );
    }
}
