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

//! The monitor role: register a fresh identifier, answer the inbound call,
//! and render the remote stream.

use anyhow::Result;
use log::info;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::MediaStream;

use crate::peer::{ActiveCall, CallCallbacks, EndpointCallbacks, IncomingCall, PeerEndpoint};
use crate::session_id::generate_session_id;
use crate::video_sink::VideoSink;

/// Options struct for starting a receiver via
/// [MonitorReceiver::start(options)][MonitorReceiver::start]
pub struct MonitorOptions {
    /// DOM id of the `HtmlVideoElement` the remote feed is rendered into.
    pub video_elem_id: String,

    /// Callback called with the session identifier once the registration is
    /// confirmed; only then is the identifier ready to show the user.
    pub on_registered: Rc<dyn Fn(String)>,

    /// Callback called with the caller's identifier when its stream has
    /// been attached to the video surface.
    pub on_stream: Rc<dyn Fn(String)>,

    /// Callback called with a near-verbatim message on registration or call
    /// failure.  Nothing is retried.
    pub on_error: Rc<dyn Fn(String)>,
}

struct Inner {
    sink: VideoSink,
    call: Option<ActiveCall>,
}

/// Driver for the monitor (PC) role.
///
/// Inbound calls are answered unconditionally; there is no confirmation and
/// no allow-list.  A later call replaces the current one on the surface.
/// Dropping the receiver releases the registration and clears the surface.
pub struct MonitorReceiver {
    session_id: String,
    inner: Rc<RefCell<Inner>>,
    // Held for its Drop: destroys the registration on scoped exit.
    _endpoint: PeerEndpoint,
}

impl MonitorReceiver {
    /// Generate a session identifier and register it with the signaling
    /// system.  Fails only if the collaborator library is missing from the
    /// page.
    pub fn start(options: MonitorOptions) -> Result<Self> {
        let session_id = generate_session_id();
        let inner = Rc::new(RefCell::new(Inner {
            sink: VideoSink::new(&options.video_elem_id),
            call: None,
        }));

        let on_stream = options.on_stream;
        let on_error = options.on_error;
        let callbacks = EndpointCallbacks {
            on_open: options.on_registered,
            on_call: {
                let inner = Rc::clone(&inner);
                let on_stream = Rc::clone(&on_stream);
                let on_error = Rc::clone(&on_error);
                Rc::new(move |incoming: IncomingCall| {
                    Self::answer(&inner, incoming, &on_stream, &on_error);
                })
            },
            on_error: {
                let on_error = Rc::clone(&on_error);
                Rc::new(move |message| on_error(message))
            },
        };
        let endpoint = PeerEndpoint::register(&session_id, callbacks)?;

        Ok(Self {
            session_id,
            inner,
            _endpoint: endpoint,
        })
    }

    /// The identifier this monitor is registered under.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Whether a remote stream is currently on the surface.
    pub fn is_receiving(&self) -> bool {
        self.inner.borrow().sink.is_attached()
    }

    fn answer(
        inner: &Rc<RefCell<Inner>>,
        incoming: IncomingCall,
        on_stream: &Rc<dyn Fn(String)>,
        on_error: &Rc<dyn Fn(String)>,
    ) {
        let peer_id = incoming.peer_id();
        info!("answering inbound call from {peer_id}");

        let callbacks = CallCallbacks {
            on_stream: {
                let inner = Rc::clone(inner);
                let on_stream = Rc::clone(on_stream);
                Rc::new(move |stream: MediaStream| {
                    if let Ok(mut guard) = inner.try_borrow_mut() {
                        guard.sink.attach(&stream, false);
                    }
                    on_stream(peer_id.clone());
                })
            },
            on_close: {
                let inner = Rc::clone(inner);
                Rc::new(move || {
                    info!("call closed by remote");
                    if let Ok(mut guard) = inner.try_borrow_mut() {
                        guard.sink.detach();
                    }
                })
            },
            on_error: {
                let on_error = Rc::clone(on_error);
                Rc::new(move |message| on_error(message))
            },
        };

        // Last writer wins: a newer call replaces (and closes) the previous
        // one.
        let call = incoming.answer(callbacks);
        if let Ok(mut guard) = inner.try_borrow_mut() {
            guard.call = Some(call);
        }
    }
}

impl Drop for MonitorReceiver {
    fn drop(&mut self) {
        if let Ok(mut guard) = self.inner.try_borrow_mut() {
            guard.call = None;
            guard.sink.detach();
        }
    }
}
