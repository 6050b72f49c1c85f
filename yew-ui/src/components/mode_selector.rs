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

use yew::prelude::*;

use crate::app::Mode;
use crate::constants::APP_TITLE;

#[derive(Properties, PartialEq)]
pub struct ModeSelectorProps {
    pub on_select: Callback<Mode>,
}

/// Landing screen: pick which half of the bridge this device is.
#[function_component(ModeSelector)]
pub fn mode_selector(props: &ModeSelectorProps) -> Html {
    let pick = |mode: Mode| {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(mode))
    };

    html! {
        <main class="mode-selector">
            <h1>{ APP_TITLE }</h1>
            <div class="mode-buttons">
                <button class="mode-button" id="camera-mode" onclick={pick(Mode::Camera)}>
                    <span class="mode-label">{ "📸 Phone Mode" }</span>
                    <span class="mode-hint">{ "Use this device as the camera" }</span>
                </button>
                <button class="mode-button" id="monitor-mode" onclick={pick(Mode::Monitor)}>
                    <span class="mode-label">{ "💻 PC Mode" }</span>
                    <span class="mode-hint">{ "Receive the feed for capture" }</span>
                </button>
            </div>
        </main>
    }
}
