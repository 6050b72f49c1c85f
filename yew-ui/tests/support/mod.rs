// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for loomcam-ui component tests.
//
// Provides mount/cleanup helpers and a fake `window.Peer` class, so the
// screens can run against a stand-in collaborator instead of the real
// signaling library.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use wasm_bindgen::JsValue;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

// ---------------------------------------------------------------------------
// Fake collaborator injection
// ---------------------------------------------------------------------------

/// Install a fake `window.Peer` whose `open` event fires on the next tick
/// with the requested identifier, the way the real library confirms a
/// registration.
pub fn inject_fake_peer() {
    js_sys::eval(
        r#"
        (() => {
            class FakeMediaConnection {
                constructor(peer) { this.peer = peer; this._handlers = {}; }
                on(event, handler) { this._handlers[event] = handler; }
                answer() {}
                close() {}
            }
            class FakePeer {
                constructor(id) {
                    this.id = id === undefined ? ("assigned-" + Math.floor(Math.random() * 1000)) : id;
                    this.destroyed = false;
                    this._handlers = {};
                }
                on(event, handler) {
                    this._handlers[event] = handler;
                    if (event === "open") {
                        setTimeout(() => { if (!this.destroyed) { handler(this.id); } }, 0);
                    }
                }
                call(id, stream) { return new FakeMediaConnection(id); }
                destroy() { this.destroyed = true; }
            }
            window.Peer = FakePeer;
        })();
        "#,
    )
    .expect("fake peer injection");
}

/// Install a fake `window.Peer` that never confirms the registration, so
/// screens stay in their pre-`open` state.
pub fn inject_silent_fake_peer() {
    js_sys::eval(
        r#"
        (() => {
            class FakeMediaConnection {
                constructor(peer) { this.peer = peer; }
                on() {}
                answer() {}
                close() {}
            }
            class SilentFakePeer {
                constructor(id) { this.id = id; this.destroyed = false; }
                on() {}
                call(id, stream) { return new FakeMediaConnection(id); }
                destroy() { this.destroyed = true; }
            }
            window.Peer = SilentFakePeer;
        })();
        "#,
    )
    .expect("silent fake peer injection");
}

/// Remove `window.Peer` so tests don't leak the fake into each other.
pub fn remove_fake_peer() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &JsValue::from_str("Peer"));
}
