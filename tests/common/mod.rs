//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use solar3d::camera::{CameraSettings, FrameContext};
use solar3d::ephemeris::{CelestialBodyData, Ephemeris};
use solar3d::input::InputState;

/// Headless app whose every frame lasts exactly `frame`.
///
/// The first `update()` only starts the clock and carries a zero delta.
pub fn create_minimal_app(frame: Duration) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(frame));
    app.insert_resource(Ephemeris::new().expect("built-in catalog must validate"));
    app
}

/// Input state as it looks after the host granted pointer capture.
pub fn captured_input() -> InputState {
    let mut input = InputState::default();
    input.request_capture();
    input.take_request();
    input.apply_capture_result(Ok(()));
    input
}

/// Frame context with the default camera speed.
pub fn frame<'a>(
    delta_secs: f32,
    elapsed_days: f64,
    mode: solar3d::camera::CameraMode,
    selected: Option<&'a CelestialBodyData>,
) -> FrameContext<'a> {
    FrameContext {
        delta_secs,
        elapsed_days,
        mode,
        selected,
        free_camera_speed: 50.0,
    }
}

/// Follow position the controller converges to for `body` at `elapsed_days`.
pub fn follow_position(
    body: &CelestialBodyData,
    elapsed_days: f64,
    settings: &CameraSettings,
) -> Vec3 {
    let target = solar3d::ephemeris::orbital_position(body, elapsed_days).as_vec3();
    let distance = (solar3d::ephemeris::orbit_radius(body) as f32 * settings.follow_distance_factor)
        .max(settings.follow_min_distance);
    target + settings.follow_offset_direction * distance
}
