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

//! The PC-side screen: full-screen video surface with an overlay showing
//! the session identifier the phone has to dial.

use std::rc::Rc;

use loomcam_client::{MonitorOptions, MonitorReceiver};
use yew::prelude::*;

use crate::constants::{
    GENERATING_ID_PLACEHOLDER, MONITOR_VIDEO_ID, OBS_CAPTURE_HINT, WAITING_FOR_CAMERA,
};

pub enum Msg {
    Start,
    Registered(String),
    StreamArrived(String),
    Failed(String),
    CopyId,
}

pub struct MonitorScreen {
    receiver: Option<MonitorReceiver>,
    session_id: Option<String>,
    caller_id: Option<String>,
    error: Option<String>,
}

impl Component for MonitorScreen {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            receiver: None,
            session_id: None,
            caller_id: None,
            error: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Start);
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Start => {
                if self.receiver.is_some() {
                    return false;
                }
                let registered = ctx.link().callback(Msg::Registered);
                let stream = ctx.link().callback(Msg::StreamArrived);
                let failed = ctx.link().callback(Msg::Failed);
                let options = MonitorOptions {
                    video_elem_id: MONITOR_VIDEO_ID.to_string(),
                    on_registered: Rc::new(move |id| registered.emit(id)),
                    on_stream: Rc::new(move |peer_id| stream.emit(peer_id)),
                    on_error: Rc::new(move |message| failed.emit(message)),
                };
                match MonitorReceiver::start(options) {
                    Ok(receiver) => {
                        self.receiver = Some(receiver);
                    }
                    Err(e) => {
                        self.error = Some(e.to_string());
                    }
                }
                true
            }
            Msg::Registered(id) => {
                self.session_id = Some(id);
                true
            }
            Msg::StreamArrived(peer_id) => {
                self.caller_id = Some(peer_id);
                true
            }
            Msg::Failed(message) => {
                self.error = Some(message);
                true
            }
            Msg::CopyId => {
                if let Some(id) = &self.session_id {
                    let _ = gloo_utils::window().navigator().clipboard().write_text(id);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let displayed_id = self
            .session_id
            .clone()
            .unwrap_or_else(|| GENERATING_ID_PLACEHOLDER.to_string());

        html! {
            <div class="monitor-screen">
                <div class="monitor-panel">
                    <h2>{ "PC Receiver" }</h2>
                    <p class="session-id-row">
                        { "ID: " }
                        <span class="session-id">{ displayed_id }</span>
                        if self.session_id.is_some() {
                            <button
                                class="copy-button"
                                onclick={ctx.link().callback(|_| Msg::CopyId)}>
                                { "Copy" }
                            </button>
                        }
                    </p>
                    <p class="capture-hint">{ OBS_CAPTURE_HINT }</p>
                    <p class="feed-state">
                        {
                            match &self.caller_id {
                                Some(caller_id) => format!("Live from {caller_id}"),
                                None => WAITING_FOR_CAMERA.to_string(),
                            }
                        }
                    </p>
                    if let Some(error) = &self.error {
                        <p class="error-line">{ error }</p>
                    }
                </div>
                <video
                    id={MONITOR_VIDEO_ID}
                    class="monitor-video"
                    autoplay=true
                    playsinline=true
                />
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // Dropping the receiver releases the registration.
        self.receiver.take();
    }
}
