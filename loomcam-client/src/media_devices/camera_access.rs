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

use gloo_utils::window;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{MediaStream, MediaStreamConstraints, MediaTrackConstraints};

use crate::constants::{CAMERA_FACING_MODE, VIDEO_HEIGHT, VIDEO_WIDTH};
use crate::event_bus::emit_peer_event;
use crate::events::PeerEvent;

/// [CameraAccess] requests the user's permission to use the camera and
/// microphone, with the camera role's fixed constraints (rear-facing
/// preference, 720p target, audio on).
///
/// Events are emitted to the event bus:
/// - `PeerEvent::PermissionGranted` when permission is granted
/// - `PeerEvent::PermissionDenied(error)` when permission is denied
///
/// Permission denial, missing devices, and insecure contexts (no
/// `navigator.mediaDevices`) all land on the denied path; none of them is
/// retried.
pub struct CameraAccess {
    granted: Arc<AtomicBool>,

    // Callback that is called with the live stream when access is granted
    pub on_granted: Rc<dyn Fn(MediaStream)>,

    // Callback that is called when the user fails to grant access
    pub on_denied: Rc<dyn Fn(JsValue)>,
}

#[allow(clippy::new_without_default)]
impl CameraAccess {
    /// Constructor for the camera access struct.
    ///
    /// After construction, set the callbacks, then call
    /// [`request()`](Self::request).
    pub fn new() -> Self {
        Self {
            granted: Arc::new(AtomicBool::new(false)),
            on_granted: Rc::new(|_| {}),
            on_denied: Rc::new(|_| {}),
        }
    }

    /// Returns true if permission has been granted
    pub fn is_granted(&self) -> bool {
        self.granted.load(Ordering::Acquire)
    }

    /// Causes the browser to request camera and microphone access.
    ///
    /// Returns immediately; the outcome arrives on the callbacks and the
    /// event bus.
    pub fn request(&self) {
        let future = Self::request_stream();
        let on_granted = self.on_granted.clone();
        let on_denied = self.on_denied.clone();
        let granted = Arc::clone(&self.granted);
        wasm_bindgen_futures::spawn_local(async move {
            match future.await {
                Ok(stream) => {
                    granted.store(true, Ordering::Release);
                    emit_peer_event(PeerEvent::PermissionGranted);
                    on_granted(stream);
                }
                Err(e) => {
                    emit_peer_event(PeerEvent::PermissionDenied(format!("{e:?}")));
                    on_denied(e);
                }
            }
        });
    }

    async fn request_stream() -> Result<MediaStream, JsValue> {
        let navigator = window().navigator();
        let media_devices = navigator.media_devices()?;

        let video = MediaTrackConstraints::new();
        video.set_facing_mode(&JsValue::from_str(CAMERA_FACING_MODE));
        video.set_width(&JsValue::from(VIDEO_WIDTH));
        video.set_height(&JsValue::from(VIDEO_HEIGHT));

        let constraints = MediaStreamConstraints::new();
        constraints.set_video(&video.into());
        constraints.set_audio(&JsValue::from_bool(true));

        let promise = media_devices.get_user_media_with_constraints(&constraints)?;
        let stream = JsFuture::from(promise).await?;

        Ok(stream.unchecked_into::<MediaStream>())
    }
}
