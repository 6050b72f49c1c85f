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

//! Safe wrapper around the raw collaborator bindings.
//!
//! One handler per named event, installed at construction through the
//! callback structs.  The wrapper owns the JS closures, so dropping it tears
//! the collaborator state down: [PeerEndpoint] destroys the registration,
//! [ActiveCall] closes the call.  Every event is also mirrored onto the
//! event bus.

use crate::event_bus::emit_peer_event;
use crate::events::PeerEvent;
use crate::utils::js_error_message;
use anyhow::{anyhow, Result};
use gloo_utils::window;
use log::{debug, error};
use std::rc::Rc;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::MediaStream;

use super::js;

type Handler = Closure<dyn FnMut(JsValue)>;

/// Endpoint-level event handlers.  Unset handlers default to no-ops.
pub struct EndpointCallbacks {
    /// Called as `callback(id)` once the registration is confirmed by the
    /// signaling system.
    pub on_open: Rc<dyn Fn(String)>,

    /// Called for each inbound call.  The handler decides whether to
    /// [answer](IncomingCall::answer) it.
    pub on_call: Rc<dyn Fn(IncomingCall)>,

    /// Called with a near-verbatim message when the endpoint fails
    /// (registration failure, unreachable remote identifier, ...).
    pub on_error: Rc<dyn Fn(String)>,
}

impl Default for EndpointCallbacks {
    fn default() -> Self {
        Self {
            on_open: Rc::new(|_| {}),
            on_call: Rc::new(|_| {}),
            on_error: Rc::new(|_| {}),
        }
    }
}

/// Call-level event handlers.  Unset handlers default to no-ops.
pub struct CallCallbacks {
    /// Called with the remote media stream once it arrives.
    pub on_stream: Rc<dyn Fn(MediaStream)>,

    /// Called when the remote side ends the call.
    pub on_close: Rc<dyn Fn()>,

    /// Called with a near-verbatim message when the call fails.
    pub on_error: Rc<dyn Fn(String)>,
}

impl Default for CallCallbacks {
    fn default() -> Self {
        Self {
            on_stream: Rc::new(|_| {}),
            on_close: Rc::new(|| {}),
            on_error: Rc::new(|_| {}),
        }
    }
}

/// One registered endpoint in the signaling system.
///
/// Constructed via [register](Self::register) (monitor side, requested
/// identifier) or [connect](Self::connect) (camera side, assigned
/// identifier).  Dropping the endpoint releases the registration.
pub struct PeerEndpoint {
    peer: js::Peer,
    _handlers: Vec<Handler>,
}

impl PeerEndpoint {
    /// Register under a requested identifier.
    pub fn register(requested_id: &str, callbacks: EndpointCallbacks) -> Result<Self> {
        Self::ensure_library_loaded()?;
        Ok(Self::wire(js::Peer::new_with_id(requested_id), callbacks))
    }

    /// Register with a library-assigned identifier.
    pub fn connect(callbacks: EndpointCallbacks) -> Result<Self> {
        Self::ensure_library_loaded()?;
        Ok(Self::wire(js::Peer::new(), callbacks))
    }

    // The constructors throw a ReferenceError if the host page did not load
    // the library; check first and fail as a plain error instead.
    fn ensure_library_loaded() -> Result<()> {
        let loaded = js_sys::Reflect::has(&window(), &JsValue::from_str("Peer")).unwrap_or(false);
        if loaded {
            Ok(())
        } else {
            Err(anyhow!("peer library is not loaded on this page"))
        }
    }

    fn wire(peer: js::Peer, callbacks: EndpointCallbacks) -> Self {
        let mut handlers = Vec::with_capacity(3);

        let on_open = callbacks.on_open;
        let open = Closure::wrap(Box::new(move |id: JsValue| {
            let id = id.as_string().unwrap_or_default();
            debug!("endpoint open: {id}");
            emit_peer_event(PeerEvent::Opened(id.clone()));
            on_open(id);
        }) as Box<dyn FnMut(JsValue)>);
        peer.on("open", open.as_ref().unchecked_ref());
        handlers.push(open);

        let on_call = callbacks.on_call;
        let call = Closure::wrap(Box::new(move |conn: JsValue| {
            let conn: js::MediaConnection = conn.unchecked_into();
            emit_peer_event(PeerEvent::CallIncoming(conn.peer()));
            on_call(IncomingCall { conn });
        }) as Box<dyn FnMut(JsValue)>);
        peer.on("call", call.as_ref().unchecked_ref());
        handlers.push(call);

        let on_error = callbacks.on_error;
        let err = Closure::wrap(Box::new(move |e: JsValue| {
            let message = js_error_message(&e);
            error!("endpoint error: {message}");
            emit_peer_event(PeerEvent::Errored(message.clone()));
            on_error(message);
        }) as Box<dyn FnMut(JsValue)>);
        peer.on("error", err.as_ref().unchecked_ref());
        handlers.push(err);

        Self {
            peer,
            _handlers: handlers,
        }
    }

    /// Identifier this endpoint is registered under; `None` until the
    /// `open` event has confirmed the registration.
    pub fn id(&self) -> Option<String> {
        self.peer.id()
    }

    /// Originate a call to `target_id`, offering `stream` for transport.
    pub fn call(
        &self,
        target_id: &str,
        stream: &MediaStream,
        callbacks: CallCallbacks,
    ) -> ActiveCall {
        ActiveCall::wire(self.peer.call(target_id, stream), callbacks)
    }
}

impl Drop for PeerEndpoint {
    fn drop(&mut self) {
        if !self.peer.destroyed() {
            debug!("releasing endpoint registration");
            self.peer.destroy();
        }
    }
}

/// An inbound call that has not been answered yet.
pub struct IncomingCall {
    conn: js::MediaConnection,
}

impl IncomingCall {
    /// Identifier of the calling endpoint.
    pub fn peer_id(&self) -> String {
        self.conn.peer()
    }

    /// Accept the call.  Handlers are installed before the answer is sent so
    /// no event can slip past them.
    pub fn answer(self, callbacks: CallCallbacks) -> ActiveCall {
        let call = ActiveCall::wire(self.conn, callbacks);
        call.conn.answer();
        call
    }
}

/// A live call.  Dropping it closes the call.
pub struct ActiveCall {
    conn: js::MediaConnection,
    _handlers: Vec<Handler>,
}

impl ActiveCall {
    fn wire(conn: js::MediaConnection, callbacks: CallCallbacks) -> Self {
        let mut handlers = Vec::with_capacity(3);
        let peer_id = conn.peer();

        let on_stream = callbacks.on_stream;
        let stream = Closure::wrap(Box::new(move |s: JsValue| {
            debug!("stream received from {peer_id}");
            emit_peer_event(PeerEvent::StreamReceived(peer_id.clone()));
            on_stream(s.unchecked_into::<MediaStream>());
        }) as Box<dyn FnMut(JsValue)>);
        conn.on("stream", stream.as_ref().unchecked_ref());
        handlers.push(stream);

        let on_close = callbacks.on_close;
        let close = Closure::wrap(Box::new(move |_: JsValue| {
            emit_peer_event(PeerEvent::CallClosed);
            on_close();
        }) as Box<dyn FnMut(JsValue)>);
        conn.on("close", close.as_ref().unchecked_ref());
        handlers.push(close);

        let on_error = callbacks.on_error;
        let err = Closure::wrap(Box::new(move |e: JsValue| {
            let message = js_error_message(&e);
            error!("call error: {message}");
            emit_peer_event(PeerEvent::Errored(message.clone()));
            on_error(message);
        }) as Box<dyn FnMut(JsValue)>);
        conn.on("error", err.as_ref().unchecked_ref());
        handlers.push(err);

        Self {
            conn,
            _handlers: handlers,
        }
    }

    /// Identifier of the remote endpoint.
    pub fn peer_id(&self) -> String {
        self.conn.peer()
    }

    /// End the call.
    pub fn close(&self) {
        self.conn.close();
    }
}

impl Drop for ActiveCall {
    fn drop(&mut self) {
        self.conn.close();
    }
}
