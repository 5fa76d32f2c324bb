//! Per-frame camera pose resolution.
//!
//! [`CameraController`] is plain data: it takes the frame's context and the
//! aggregated input, and returns the pose the camera should take. Bevy
//! systems copy that pose onto the camera entity.

use bevy::math::EulerRot;
use bevy::prelude::*;

use super::orbit_controls;
use super::smoothing::smooth_towards;
use super::{CameraMode, CameraSettings};
use crate::ephemeris::{CelestialBodyData, orbit_radius, orbital_position};
use crate::input::InputState;

/// Everything outside the controller that one frame depends on.
#[derive(Clone, Copy, Debug)]
pub struct FrameContext<'a> {
    /// Wall-clock seconds since the last frame.
    pub delta_secs: f32,
    /// Simulated days on the clock after this frame's advance.
    pub elapsed_days: f64,
    pub mode: CameraMode,
    pub selected: Option<&'a CelestialBodyData>,
    /// Movement speed for free-fly and chase.
    pub free_camera_speed: f32,
}

/// How the pose's rotation was derived.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraOrientation {
    /// Rotation is `rotY(yaw) * rotX(pitch)`.
    YawPitch { yaw: f32, pitch: f32 },
    /// Rotation faces this point with +Y up.
    LookAt(Vec3),
}

/// Resolved camera placement for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub rotation: Quat,
    pub orientation: CameraOrientation,
}

impl CameraPose {
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position).with_rotation(self.rotation)
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }
}

/// A change of camera mode seen by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeTransition {
    pub from: CameraMode,
    pub to: CameraMode,
}

/// Rotation facing `target` from `from`, or `fallback` when they coincide.
pub fn look_rotation(from: Vec3, target: Vec3, fallback: Quat) -> Quat {
    if from.distance_squared(target) < 1e-12 {
        return fallback;
    }
    Transform::from_translation(from)
        .looking_at(target, Vec3::Y)
        .rotation
}

/// First-person rotation: yaw about world +Y, then pitch about local +X.
pub fn yaw_pitch_rotation(yaw: f32, pitch: f32) -> Quat {
    Quat::from_rotation_y(yaw) * Quat::from_rotation_x(pitch)
}

/// Clamp pitch strictly inside `(-π/2, π/2)`.
pub fn clamp_pitch(pitch: f32, margin: f32) -> f32 {
    let limit = std::f32::consts::FRAC_PI_2 - margin;
    pitch.clamp(-limit, limit)
}

/// Camera state carried between frames.
#[derive(Resource, Clone, Debug)]
pub struct CameraController {
    mode: CameraMode,
    position: Vec3,
    rotation: Quat,
    /// Point the orbit interaction revolves around and looks at.
    pivot: Vec3,
    yaw: f32,
    pitch: f32,
    ship_position: Vec3,
}

impl FromWorld for CameraController {
    fn from_world(world: &mut World) -> Self {
        let settings = world
            .get_resource::<CameraSettings>()
            .cloned()
            .unwrap_or_default();
        Self::looking_at(settings.initial_position, settings.initial_target)
    }
}

impl CameraController {
    /// Controller in OrbitFollow, placed at `position` and facing `target`.
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let rotation = look_rotation(position, target, Quat::IDENTITY);
        let (yaw, pitch, _) = rotation.to_euler(EulerRot::YXZ);
        Self {
            mode: CameraMode::OrbitFollow,
            position,
            rotation,
            pivot: target,
            yaw,
            pitch,
            ship_position: Vec3::ZERO,
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn pivot(&self) -> Vec3 {
        self.pivot
    }

    pub fn yaw_pitch(&self) -> (f32, f32) {
        (self.yaw, self.pitch)
    }

    pub fn ship_position(&self) -> Vec3 {
        self.ship_position
    }

    /// The orbit interaction only drives the camera in OrbitFollow.
    pub fn orbit_controls_enabled(&self) -> bool {
        self.mode == CameraMode::OrbitFollow
    }

    pub fn orbit_rotate(&mut self, delta: Vec2, settings: &CameraSettings) {
        if !self.orbit_controls_enabled() {
            return;
        }
        self.position =
            orbit_controls::orbit(self.position, self.pivot, delta, settings.orbit_rotate_speed);
        self.rotation = look_rotation(self.position, self.pivot, self.rotation);
    }

    pub fn orbit_pan(&mut self, delta: Vec2, settings: &CameraSettings) {
        if !self.orbit_controls_enabled() {
            return;
        }
        let distance = self.position.distance(self.pivot);
        let shift = orbit_controls::pan(self.rotation, distance, delta, settings.orbit_pan_speed);
        self.position += shift;
        self.pivot += shift;
    }

    pub fn orbit_zoom(&mut self, scroll: f32, settings: &CameraSettings) {
        if !self.orbit_controls_enabled() {
            return;
        }
        self.position = orbit_controls::zoom(
            self.position,
            self.pivot,
            scroll,
            settings.orbit_zoom_speed,
            settings.orbit_min_distance,
            settings.orbit_max_distance,
        );
    }

    /// Apply entry and exit effects when the requested mode differs from the last one.
    pub fn sync_mode(
        &mut self,
        mode: CameraMode,
        input: &mut InputState,
        settings: &CameraSettings,
    ) -> Option<ModeTransition> {
        if mode == self.mode {
            return None;
        }
        let transition = ModeTransition {
            from: self.mode,
            to: mode,
        };

        // Listeners only exist in capture-eligible modes
        if transition.from.captures_pointer() && !mode.captures_pointer() {
            input.request_release();
            input.clear();
        }

        match mode {
            CameraMode::OrbitFollow => {
                // Pivot straight ahead so the view doesn't jump
                let forward = self.rotation * Vec3::NEG_Z;
                let distance = self
                    .position
                    .length()
                    .clamp(settings.orbit_min_distance, settings.orbit_max_distance);
                self.pivot = self.position + forward * distance;
            }
            CameraMode::FreeFly => {
                let (yaw, pitch, _) = self.rotation.to_euler(EulerRot::YXZ);
                self.yaw = yaw;
                self.pitch = clamp_pitch(pitch, settings.pitch_margin);
            }
            CameraMode::Chase => {
                self.ship_position = self.position - settings.chase_offset;
            }
        }

        self.mode = mode;
        Some(transition)
    }

    /// Resolve this frame's pose.
    pub fn update(
        &mut self,
        frame: &FrameContext,
        input: &mut InputState,
        settings: &CameraSettings,
    ) -> CameraPose {
        if let Some(transition) = self.sync_mode(frame.mode, input, settings) {
            debug!(
                "Camera controller: {} -> {}",
                transition.from.label(),
                transition.to.label()
            );
        }

        let dt = if frame.delta_secs.is_finite() {
            frame.delta_secs.max(0.0)
        } else {
            0.0
        };

        match self.mode {
            CameraMode::OrbitFollow => self.update_orbit_follow(frame, dt, settings),
            CameraMode::FreeFly => self.update_free_fly(frame, dt, input, settings),
            CameraMode::Chase => self.update_chase(frame, dt, input, settings),
        }
    }

    fn update_orbit_follow(
        &mut self,
        frame: &FrameContext,
        dt: f32,
        settings: &CameraSettings,
    ) -> CameraPose {
        if let Some(body) = frame.selected {
            let target = orbital_position(body, frame.elapsed_days).as_vec3();
            let distance = (orbit_radius(body) as f32 * settings.follow_distance_factor)
                .max(settings.follow_min_distance);
            let desired = target + settings.follow_offset_direction * distance;

            self.pivot = smooth_towards(self.pivot, target, settings.follow_smoothing_base, dt);
            self.position =
                smooth_towards(self.position, desired, settings.follow_smoothing_base, dt);
        }

        self.rotation = look_rotation(self.position, self.pivot, self.rotation);
        CameraPose {
            position: self.position,
            rotation: self.rotation,
            orientation: CameraOrientation::LookAt(self.pivot),
        }
    }

    fn update_free_fly(
        &mut self,
        frame: &FrameContext,
        dt: f32,
        input: &mut InputState,
        settings: &CameraSettings,
    ) -> CameraPose {
        let look = input.take_pointer_delta();
        if look != Vec2::ZERO {
            self.yaw -= look.x * settings.look_sensitivity;
            self.pitch = clamp_pitch(
                self.pitch - look.y * settings.look_sensitivity,
                settings.pitch_margin,
            );
        }
        self.rotation = yaw_pitch_rotation(self.yaw, self.pitch);
        self.position += self.movement(input, frame.free_camera_speed, dt, settings);

        CameraPose {
            position: self.position,
            rotation: self.rotation,
            orientation: CameraOrientation::YawPitch {
                yaw: self.yaw,
                pitch: self.pitch,
            },
        }
    }

    fn update_chase(
        &mut self,
        frame: &FrameContext,
        dt: f32,
        input: &mut InputState,
        settings: &CameraSettings,
    ) -> CameraPose {
        // Pointer motion doesn't steer the ship
        input.take_pointer_delta();

        self.ship_position += self.movement(input, frame.free_camera_speed, dt, settings);
        let desired = self.ship_position + settings.chase_offset;
        self.position = self.position.lerp(desired, settings.chase_blend);
        self.rotation = look_rotation(self.position, self.ship_position, self.rotation);

        CameraPose {
            position: self.position,
            rotation: self.rotation,
            orientation: CameraOrientation::LookAt(self.ship_position),
        }
    }

    /// World-space displacement for this frame's held movement keys.
    fn movement(&self, input: &InputState, speed: f32, dt: f32, settings: &CameraSettings) -> Vec3 {
        let local = input.movement_direction();
        if local == Vec3::ZERO {
            return Vec3::ZERO;
        }
        self.rotation * local * (speed * dt * settings.move_speed_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::{CelestialBodyId, get_body_data};
    use approx::assert_relative_eq;

    fn frame(mode: CameraMode) -> FrameContext<'static> {
        FrameContext {
            delta_secs: 0.1,
            elapsed_days: 0.0,
            mode,
            selected: None,
            free_camera_speed: 50.0,
        }
    }

    fn captured_input() -> InputState {
        let mut input = InputState::default();
        input.request_capture();
        input.take_request();
        input.apply_capture_result(Ok(()));
        input
    }

    #[test]
    fn test_orbit_follow_without_selection_holds_pose() {
        let settings = CameraSettings::default();
        let mut controller = CameraController::looking_at(Vec3::new(30.0, 18.0, 30.0), Vec3::ZERO);
        let before = controller.position();

        let pose = controller.update(
            &frame(CameraMode::OrbitFollow),
            &mut InputState::default(),
            &settings,
        );
        assert_eq!(pose.position, before);
        assert_eq!(pose.orientation, CameraOrientation::LookAt(Vec3::ZERO));
    }

    #[test]
    fn test_orbit_follow_moves_towards_body() {
        let settings = CameraSettings::default();
        let earth = get_body_data(CelestialBodyId::Earth);
        let mut controller = CameraController::looking_at(Vec3::new(30.0, 18.0, 30.0), Vec3::ZERO);

        let ctx = FrameContext {
            selected: Some(&earth),
            ..frame(CameraMode::OrbitFollow)
        };
        let desired = Vec3::new(2.0, 0.0, 0.0) + Vec3::new(1.0, 0.3, 1.0) * 4.0;
        let before = controller.position().distance(desired);
        controller.update(&ctx, &mut InputState::default(), &settings);
        let after = controller.position().distance(desired);

        assert!(after < before);
        // alpha = 1 - 0.001^0.1
        let alpha = 1.0 - 0.001f32.powf(0.1);
        assert_relative_eq!(after, before * (1.0 - alpha), epsilon = 1e-3);
    }

    #[test]
    fn test_free_fly_forward_moves_along_view() {
        let settings = CameraSettings::default();
        let mut controller = CameraController::looking_at(Vec3::ZERO, Vec3::NEG_Z);
        let mut input = captured_input();
        controller.update(&frame(CameraMode::FreeFly), &mut input, &settings);

        input.press(KeyCode::KeyW);
        let start = controller.position();
        let pose = controller.update(&frame(CameraMode::FreeFly), &mut input, &settings);

        // 50 * 0.1 * 0.5
        assert_relative_eq!(pose.position.distance(start), 2.5, epsilon = 1e-4);
        assert_relative_eq!(pose.position.z, -2.5, epsilon = 1e-4);
    }

    #[test]
    fn test_free_fly_pitch_is_clamped() {
        let settings = CameraSettings::default();
        let mut controller = CameraController::looking_at(Vec3::ZERO, Vec3::NEG_Z);
        let mut input = captured_input();

        input.set_pointer_delta(Vec2::new(0.0, -100_000.0));
        controller.update(&frame(CameraMode::FreeFly), &mut input, &settings);

        let (_, pitch) = controller.yaw_pitch();
        assert!(pitch < std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(
            pitch,
            std::f32::consts::FRAC_PI_2 - settings.pitch_margin,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_free_fly_entry_keeps_heading() {
        let settings = CameraSettings::default();
        let mut controller = CameraController::looking_at(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO);
        let before = controller.rotation() * Vec3::NEG_Z;

        let pose = controller.update(
            &frame(CameraMode::FreeFly),
            &mut InputState::default(),
            &settings,
        );
        let after = pose.forward();
        assert_relative_eq!(before.dot(after), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_chase_entry_places_ship_ahead() {
        let settings = CameraSettings::default();
        let mut controller = CameraController::looking_at(Vec3::new(0.0, 5.0, 15.0), Vec3::ZERO);
        controller.update(&frame(CameraMode::Chase), &mut InputState::default(), &settings);

        assert_relative_eq!(controller.ship_position().length(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_chase_ignores_pointer_and_moves_ship() {
        let settings = CameraSettings::default();
        let mut controller = CameraController::looking_at(Vec3::ZERO, Vec3::NEG_Z);
        let mut input = captured_input();
        controller.update(&frame(CameraMode::Chase), &mut input, &settings);
        let ship = controller.ship_position();

        input.set_pointer_delta(Vec2::new(300.0, 0.0));
        input.press(KeyCode::KeyD);
        controller.update(&frame(CameraMode::Chase), &mut input, &settings);

        assert_eq!(input.take_pointer_delta(), Vec2::ZERO);
        assert_relative_eq!(controller.ship_position().distance(ship), 2.5, epsilon = 1e-4);
    }

    #[test]
    fn test_chase_camera_closes_a_tenth_per_frame() {
        let settings = CameraSettings::default();
        let mut controller = CameraController::looking_at(Vec3::ZERO, Vec3::NEG_Z);
        let mut input = InputState::default();
        controller.update(&frame(CameraMode::Chase), &mut input, &settings);

        let desired = controller.ship_position() + settings.chase_offset;
        let before = controller.position().distance(desired);
        controller.update(&frame(CameraMode::Chase), &mut input, &settings);
        let after = controller.position().distance(desired);
        assert_relative_eq!(after, before * 0.9, epsilon = 1e-4);
    }

    #[test]
    fn test_leaving_capture_mode_releases_pointer() {
        let settings = CameraSettings::default();
        let mut controller = CameraController::looking_at(Vec3::ZERO, Vec3::NEG_Z);
        let mut input = captured_input();
        controller.update(&frame(CameraMode::FreeFly), &mut input, &settings);
        input.press(KeyCode::KeyW);

        let transition = controller.sync_mode(CameraMode::OrbitFollow, &mut input, &settings);
        assert_eq!(
            transition,
            Some(ModeTransition {
                from: CameraMode::FreeFly,
                to: CameraMode::OrbitFollow
            })
        );
        assert_eq!(input.pending_request(), Some(crate::input::CaptureRequest::Release));
        assert!(!input.is_held(KeyCode::KeyW));
    }

    #[test]
    fn test_orbit_controls_disabled_outside_orbit_follow() {
        let settings = CameraSettings::default();
        let mut controller = CameraController::looking_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        controller.update(&frame(CameraMode::FreeFly), &mut InputState::default(), &settings);
        let before = controller.position();

        controller.orbit_zoom(3.0, &settings);
        controller.orbit_rotate(Vec2::new(50.0, 50.0), &settings);
        assert_eq!(controller.position(), before);
    }

    #[test]
    fn test_return_to_orbit_follow_keeps_view() {
        let settings = CameraSettings::default();
        let mut controller = CameraController::looking_at(Vec3::new(5.0, 2.0, 5.0), Vec3::ZERO);
        let mut input = InputState::default();
        controller.update(&frame(CameraMode::FreeFly), &mut input, &settings);
        let rotation = controller.rotation();
        let position = controller.position();

        let pose = controller.update(&frame(CameraMode::OrbitFollow), &mut input, &settings);
        assert_eq!(pose.position, position);
        assert_relative_eq!(
            pose.forward().dot(rotation * Vec3::NEG_Z),
            1.0,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_look_rotation_degenerate_falls_back() {
        let fallback = Quat::from_rotation_y(0.3);
        assert_eq!(look_rotation(Vec3::ONE, Vec3::ONE, fallback), fallback);
    }
}
