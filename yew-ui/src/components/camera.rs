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
 */

//! The phone-side screen: target identifier input, start button, status
//! line, and the muted local preview.

use std::rc::Rc;

use loomcam_client::{CameraOptions, CameraSender, StreamStatus};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::constants::{CAMERA_PREVIEW_ID, TARGET_ID_PLACEHOLDER};

pub enum Msg {
    UpdateTargetId(String),
    Start,
    StatusChanged(StreamStatus),
}

pub struct CameraScreen {
    sender: Option<CameraSender>,
    target_id: String,
    status: StreamStatus,
}

impl Component for CameraScreen {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            sender: None,
            target_id: String::new(),
            status: StreamStatus::Idle,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateTargetId(value) => {
                self.target_id = value;
                false
            }
            Msg::Start => {
                if self.status.is_active() {
                    return false;
                }
                let link = ctx.link().clone();
                let sender = CameraSender::new(CameraOptions {
                    target_id: self.target_id.trim().to_string(),
                    video_elem_id: CAMERA_PREVIEW_ID.to_string(),
                    on_status: Rc::new(move |status| {
                        link.send_message(Msg::StatusChanged(status));
                    }),
                });
                sender.start();
                // Replacing a finished sender tears its attempt down.
                self.sender = Some(sender);
                true
            }
            Msg::StatusChanged(status) => {
                self.status = status;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateTargetId(input.value())
        });
        let onclick = ctx.link().callback(|_| Msg::Start);

        html! {
            <div class="camera-screen">
                <h2>{ "Phone Camera" }</h2>
                <div class="camera-controls">
                    <input
                        type="text"
                        id="target-id"
                        placeholder={TARGET_ID_PLACEHOLDER}
                        value={self.target_id.clone()}
                        {oninput}
                    />
                    <button class="start-button" {onclick}>{ "Start Streaming" }</button>
                    <p class="status-line">
                        { "Status: " }
                        <span class="status-value">{ self.status.to_string() }</span>
                    </p>
                </div>
                <video
                    id={CAMERA_PREVIEW_ID}
                    class="camera-preview"
                    autoplay=true
                    playsinline=true
                    muted=true
                />
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // Dropping the sender closes the call and stops the tracks.
        self.sender.take();
    }
}
