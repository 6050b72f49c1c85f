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

//! Raw bindings to the PeerJS classes the host page loads.
//!
//! Only the operations the two roles consume are bound: register (the
//! constructors), the event hook, originate/answer/close a media call, and
//! teardown.  Everything behind these calls is the external library's
//! business.

use wasm_bindgen::prelude::*;
use web_sys::MediaStream;

#[wasm_bindgen]
extern "C" {
    /// The PeerJS `Peer` class: one endpoint in the signaling system.
    #[wasm_bindgen(js_name = Peer)]
    pub type Peer;

    /// Register with a library-assigned identifier.
    #[wasm_bindgen(constructor, js_class = "Peer")]
    pub fn new() -> Peer;

    /// Register under a requested identifier.
    #[wasm_bindgen(constructor, js_class = "Peer")]
    pub fn new_with_id(id: &str) -> Peer;

    /// Install a handler for a named event (`open`, `call`, `error`).
    #[wasm_bindgen(method, js_class = "Peer")]
    pub fn on(this: &Peer, event: &str, handler: &js_sys::Function);

    /// Originate a media call to the endpoint registered under `id`.
    #[wasm_bindgen(method, js_class = "Peer")]
    pub fn call(this: &Peer, id: &str, stream: &MediaStream) -> MediaConnection;

    /// Release the registration and close every connection.
    #[wasm_bindgen(method, js_class = "Peer")]
    pub fn destroy(this: &Peer);

    /// Identifier of this endpoint; null until `open` has fired.
    #[wasm_bindgen(method, getter, js_class = "Peer")]
    pub fn id(this: &Peer) -> Option<String>;

    #[wasm_bindgen(method, getter, js_class = "Peer")]
    pub fn destroyed(this: &Peer) -> bool;
}

#[wasm_bindgen]
extern "C" {
    /// A PeerJS media call, inbound or outbound.
    #[wasm_bindgen(js_name = MediaConnection)]
    pub type MediaConnection;

    /// Install a handler for a named event (`stream`, `close`, `error`).
    #[wasm_bindgen(method, js_class = "MediaConnection")]
    pub fn on(this: &MediaConnection, event: &str, handler: &js_sys::Function);

    /// Accept an inbound call.  The monitor answers without sending a
    /// stream back.
    #[wasm_bindgen(method, js_class = "MediaConnection")]
    pub fn answer(this: &MediaConnection);

    #[wasm_bindgen(method, js_class = "MediaConnection")]
    pub fn close(this: &MediaConnection);

    /// Identifier of the remote endpoint.
    #[wasm_bindgen(method, getter, js_class = "MediaConnection")]
    pub fn peer(this: &MediaConnection) -> String;
}
