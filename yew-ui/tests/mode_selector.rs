// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Integration tests for the landing (mode selector) screen and the
// selector -> role-screen transitions.
//
// Rather than asserting on every DOM node, we check the landmarks that
// uniquely identify each screen, the way a human would glance at it.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, create_mount_point, inject_fake_peer, remove_fake_peer};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;

use loomcam_ui::app::AppRoot;
use loomcam_ui::constants::APP_TITLE;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn click(mount: &web_sys::Element, selector: &str) {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{selector} not found"))
        .unchecked_into::<web_sys::HtmlElement>()
        .click();
}

#[wasm_bindgen_test]
async fn selector_renders_both_modes() {
    let mount = create_mount_point();
    yew::Renderer::<AppRoot>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains(APP_TITLE), "title missing");
    assert!(text.contains("Phone Mode"), "phone mode button missing");
    assert!(text.contains("PC Mode"), "pc mode button missing");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn picking_phone_mode_shows_the_camera_screen() {
    let mount = create_mount_point();
    yew::Renderer::<AppRoot>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    click(&mount, "#camera-mode");
    sleep(Duration::ZERO).await;

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("Phone Camera"), "camera heading missing");
    assert!(text.contains("Start Streaming"), "start button missing");
    assert!(text.contains("Status: Idle"), "initial status missing");
    assert!(
        mount.query_selector("#target-id").unwrap().is_some(),
        "target id input missing"
    );

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn picking_pc_mode_shows_the_monitor_screen() {
    inject_fake_peer();

    let mount = create_mount_point();
    yew::Renderer::<AppRoot>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    click(&mount, "#monitor-mode");
    sleep(Duration::from_millis(50)).await;

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("PC Receiver"), "monitor heading missing");
    assert!(
        text.contains("loom-monitor-"),
        "registered identifier missing"
    );
    assert!(
        mount.query_selector("#monitor-video").unwrap().is_some(),
        "video surface missing"
    );

    cleanup(&mount);
    remove_fake_peer();
}
