//! Orbit interaction: drag to orbit, right-drag to pan, scroll to zoom.
//!
//! The math works on a camera position and a pivot it orbits around. The
//! controller owns both and only accepts orbit input in
//! [`super::CameraMode::OrbitFollow`].

use std::f32::consts::PI;

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit},
    prelude::*,
};
use bevy_egui::EguiContexts;

use super::{CameraController, CameraSettings};
use crate::input::egui_wants_pointer;

/// Keeps the camera off the poles so the look-at never degenerates.
const POLAR_MARGIN: f32 = 0.01;

/// Pixels per scroll line for trackpads reporting pixel deltas.
const PIXELS_PER_LINE: f32 = 50.0;

/// Rotate `position` around `pivot` by a drag of `delta` pixels.
///
/// Horizontal drag changes azimuth around +Y; vertical drag changes the
/// polar angle, clamped short of straight up and straight down.
pub fn orbit(position: Vec3, pivot: Vec3, delta: Vec2, speed: f32) -> Vec3 {
    let offset = position - pivot;
    let radius = offset.length();
    if radius < f32::EPSILON {
        return position;
    }

    let azimuth = offset.x.atan2(offset.z) - delta.x * speed;
    let polar = ((offset.y / radius).clamp(-1.0, 1.0).acos() - delta.y * speed)
        .clamp(POLAR_MARGIN, PI - POLAR_MARGIN);

    pivot
        + Vec3::new(
            radius * polar.sin() * azimuth.sin(),
            radius * polar.cos(),
            radius * polar.sin() * azimuth.cos(),
        )
}

/// Translation that pans the view by a drag of `delta` pixels.
///
/// Scaled by the distance to the pivot so the scene tracks the pointer
/// at any zoom level.
pub fn pan(rotation: Quat, distance: f32, delta: Vec2, speed: f32) -> Vec3 {
    let right = rotation * Vec3::X;
    let up = rotation * Vec3::Y;
    (-right * delta.x + up * delta.y) * distance * speed
}

/// Move `position` along the pivot axis for `scroll` lines of wheel input.
///
/// Positive scroll zooms in. Distance is clamped to `[min, max]`.
pub fn zoom(position: Vec3, pivot: Vec3, scroll: f32, speed: f32, min: f32, max: f32) -> Vec3 {
    let offset = position - pivot;
    let radius = offset.length();
    if radius < f32::EPSILON {
        return position;
    }

    // Logarithmic zoom: multiply distance by a factor based on scroll direction
    let factor = (1.0 - scroll * speed).max(0.1);
    let new_radius = (radius * factor).clamp(min, max);
    pivot + offset / radius * new_radius
}

/// Feed mouse drag and wheel input to the controller.
pub fn orbit_controls_input(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    settings: Res<CameraSettings>,
    mut controller: ResMut<CameraController>,
    mut contexts: EguiContexts,
) {
    if !controller.orbit_controls_enabled() {
        return;
    }

    // Skip if the HUD owns the pointer
    if egui_wants_pointer(&mut contexts) {
        return;
    }

    let drag = mouse_motion.delta;
    if drag != Vec2::ZERO {
        if mouse_buttons.pressed(MouseButton::Left) {
            controller.orbit_rotate(drag, &settings);
        } else if mouse_buttons.pressed(MouseButton::Right)
            || mouse_buttons.pressed(MouseButton::Middle)
        {
            controller.orbit_pan(drag, &settings);
        }
    }

    let scroll = match mouse_scroll.unit {
        MouseScrollUnit::Line => mouse_scroll.delta.y,
        MouseScrollUnit::Pixel => mouse_scroll.delta.y / PIXELS_PER_LINE,
    };
    if scroll != 0.0 {
        controller.orbit_zoom(scroll, &settings);
    }
}
