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

//! Application root: a single in-app mode switch, no URL routing.

use yew::prelude::*;

use crate::components::camera::CameraScreen;
use crate::components::mode_selector::ModeSelector;
use crate::components::monitor::MonitorScreen;

/// Which screen the app is showing.  There is deliberately no way back to
/// the selector; reloading the page starts over.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Select,
    Camera,
    Monitor,
}

#[function_component(AppRoot)]
pub fn app_root() -> Html {
    let mode = use_state(|| Mode::Select);

    let on_select = {
        let mode = mode.clone();
        Callback::from(move |selected: Mode| mode.set(selected))
    };

    match *mode {
        Mode::Select => html! { <ModeSelector {on_select} /> },
        Mode::Camera => html! { <CameraScreen /> },
        Mode::Monitor => html! { <MonitorScreen /> },
    }
}
