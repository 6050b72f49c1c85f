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

//! UI copy and element ids shared between components and tests.

pub const APP_TITLE: &str = "LoomCam Bridge";

// DOM ids the role drivers render into.
pub const CAMERA_PREVIEW_ID: &str = "camera-preview";
pub const MONITOR_VIDEO_ID: &str = "monitor-video";

pub const TARGET_ID_PLACEHOLDER: &str = "Enter PC ID";
pub const GENERATING_ID_PLACEHOLDER: &str = "Generating...";
pub const WAITING_FOR_CAMERA: &str = "Waiting for the phone camera";
pub const OBS_CAPTURE_HINT: &str = "Open OBS → Window Capture → This Chrome Tab";
