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

//! Integration tests for the events module (PeerEvent enum).

#![cfg(target_arch = "wasm32")]

use loomcam_client::PeerEvent;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_peer_event_clone_opened() {
    let event = PeerEvent::Opened("loom-monitor-4821".to_string());
    let cloned = event.clone();
    match cloned {
        PeerEvent::Opened(id) => assert_eq!(id, "loom-monitor-4821"),
        _ => panic!("Expected Opened variant"),
    }
}

#[wasm_bindgen_test]
fn test_peer_event_clone_call_incoming() {
    let event = PeerEvent::CallIncoming("phone-peer".to_string());
    let cloned = event.clone();
    match cloned {
        PeerEvent::CallIncoming(peer_id) => assert_eq!(peer_id, "phone-peer"),
        _ => panic!("Expected CallIncoming variant"),
    }
}

#[wasm_bindgen_test]
fn test_peer_event_clone_stream_received() {
    let event = PeerEvent::StreamReceived("phone-peer".to_string());
    let cloned = event.clone();
    match cloned {
        PeerEvent::StreamReceived(peer_id) => assert_eq!(peer_id, "phone-peer"),
        _ => panic!("Expected StreamReceived variant"),
    }
}

#[wasm_bindgen_test]
fn test_peer_event_clone_call_closed() {
    let event = PeerEvent::CallClosed;
    let cloned = event.clone();
    assert!(matches!(cloned, PeerEvent::CallClosed));
}

#[wasm_bindgen_test]
fn test_peer_event_clone_errored() {
    let event = PeerEvent::Errored("peer unavailable".to_string());
    let cloned = event.clone();
    match cloned {
        PeerEvent::Errored(message) => assert_eq!(message, "peer unavailable"),
        _ => panic!("Expected Errored variant"),
    }
}

#[wasm_bindgen_test]
fn test_peer_event_clone_permission_denied() {
    let event = PeerEvent::PermissionDenied("NotAllowedError".to_string());
    let cloned = event.clone();
    match cloned {
        PeerEvent::PermissionDenied(message) => assert_eq!(message, "NotAllowedError"),
        _ => panic!("Expected PermissionDenied variant"),
    }
}

#[wasm_bindgen_test]
fn test_peer_event_debug_format() {
    let event = PeerEvent::Opened("loom-monitor-1".to_string());
    let debug = format!("{event:?}");
    assert!(debug.contains("Opened"));
    assert!(debug.contains("loom-monitor-1"));
}
