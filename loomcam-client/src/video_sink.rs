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

//! Video surface the roles render into.
//!
//! The crate makes no assumption about the UI beyond the DOM id of an
//! `HtmlVideoElement`.  [VideoSink] attaches a stream to that element and
//! guarantees the tracks are stopped again when the sink is detached or
//! dropped.

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{HtmlVideoElement, MediaStream, MediaStreamTrack};

pub struct VideoSink {
    elem_id: String,
    attached: Option<MediaStream>,
}

impl VideoSink {
    pub fn new(elem_id: &str) -> Self {
        Self {
            elem_id: elem_id.to_string(),
            attached: None,
        }
    }

    fn element(&self) -> Option<HtmlVideoElement> {
        gloo_utils::document()
            .get_element_by_id(&self.elem_id)
            .and_then(|e| e.dyn_into::<HtmlVideoElement>().ok())
    }

    /// Attach `stream` to the video element and start playback.  The camera
    /// preview is muted to avoid feedback; the monitor surface is not.
    pub fn attach(&mut self, stream: &MediaStream, muted: bool) {
        let Some(video) = self.element() else {
            warn!("video element #{} not found", self.elem_id);
            return;
        };
        video.set_muted(muted);
        video.set_src_object(Some(stream));
        let _ = video.play();
        self.attached = Some(stream.clone());
    }

    /// Stop the attached stream's tracks and clear the element.
    pub fn detach(&mut self) {
        if let Some(stream) = self.attached.take() {
            for track in stream.get_tracks().iter() {
                track.unchecked_into::<MediaStreamTrack>().stop();
            }
        }
        if let Some(video) = self.element() {
            video.set_src_object(None);
        }
    }

    /// Whether a stream is currently attached.
    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }
}

impl Drop for VideoSink {
    fn drop(&mut self) {
        self.detach();
    }
}
