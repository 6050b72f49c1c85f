// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the MonitorScreen, run against the fake collaborator
// from the support harness.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{
    cleanup, create_mount_point, inject_fake_peer, inject_silent_fake_peer, remove_fake_peer,
};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;

use loomcam_ui::components::monitor::MonitorScreen;
use loomcam_ui::constants::{GENERATING_ID_PLACEHOLDER, WAITING_FOR_CAMERA};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn identifier_is_pending_until_registration_confirms() {
    inject_silent_fake_peer();

    let mount = create_mount_point();
    yew::Renderer::<MonitorScreen>::with_root(mount.clone()).render();
    sleep(Duration::from_millis(50)).await;

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("PC Receiver"), "heading missing");
    assert!(
        text.contains(GENERATING_ID_PLACEHOLDER),
        "placeholder missing while registration is pending"
    );
    assert!(text.contains(WAITING_FOR_CAMERA), "waiting row missing");
    assert!(
        mount.query_selector("#monitor-video").unwrap().is_some(),
        "video surface missing"
    );

    cleanup(&mount);
    remove_fake_peer();
}

#[wasm_bindgen_test]
async fn registration_reveals_a_prefixed_identifier() {
    inject_fake_peer();

    let mount = create_mount_point();
    yew::Renderer::<MonitorScreen>::with_root(mount.clone()).render();
    sleep(Duration::from_millis(50)).await;

    let text = mount.text_content().unwrap_or_default();
    assert!(
        !text.contains(GENERATING_ID_PLACEHOLDER),
        "placeholder should be replaced after registration"
    );

    let id = mount
        .query_selector(".session-id")
        .unwrap()
        .expect("session id element")
        .text_content()
        .unwrap_or_default();
    assert!(
        id.starts_with("loom-monitor-"),
        "identifier should carry the monitor prefix, got {id:?}"
    );
    assert!(
        mount.query_selector(".copy-button").unwrap().is_some(),
        "copy button missing once the identifier is known"
    );

    cleanup(&mount);
    remove_fake_peer();
}

#[wasm_bindgen_test]
async fn missing_collaborator_surfaces_an_error() {
    remove_fake_peer();

    let mount = create_mount_point();
    yew::Renderer::<MonitorScreen>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let error = mount
        .query_selector(".error-line")
        .unwrap()
        .expect("error line")
        .text_content()
        .unwrap_or_default();
    assert!(
        error.contains("peer library is not loaded"),
        "unexpected error text: {error:?}"
    );

    cleanup(&mount);
}
