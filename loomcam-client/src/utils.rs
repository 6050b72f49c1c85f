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

use wasm_bindgen::JsValue;

/// Best-effort extraction of a human-readable message from a thrown JS
/// value.  Browser errors carry a `message` property; anything else falls
/// back to the debug rendering.
pub fn js_error_message(err: &JsValue) -> String {
    let message = js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string());
    match message {
        Some(m) if !m.is_empty() => m,
        _ => format!("{err:?}"),
    }
}
