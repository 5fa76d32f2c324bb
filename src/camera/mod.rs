//! Camera system for the solar system viewer.
//!
//! Three modes share one perspective camera: orbit interaction with smoothed
//! body tracking, first-person free flight, and a chase view behind the
//! spaceship. The pose math lives in [`CameraController`]; systems here only
//! gather the frame context and copy the result onto [`MainCamera`].

mod controller;
mod mode;
pub mod orbit_controls;
pub mod smoothing;

pub use controller::{
    CameraController, CameraOrientation, CameraPose, FrameContext, ModeTransition, clamp_pitch,
    look_rotation, yaw_pitch_rotation,
};
pub use mode::CameraMode;

use bevy::prelude::*;

use crate::ephemeris::Ephemeris;
use crate::input::InputState;
use crate::state::DisplayState;
use crate::time::SimulationClock;
use crate::types::{FrameSet, configure_frame_sets};

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Tunables for every camera mode.
#[derive(Resource, Clone, Debug)]
pub struct CameraSettings {
    /// Radians of yaw/pitch per pixel of pointer motion.
    pub look_sensitivity: f32,
    /// Pitch stays this far inside ±π/2.
    pub pitch_margin: f32,
    /// Fraction of the follow gap left after one second.
    pub follow_smoothing_base: f32,
    pub follow_min_distance: f32,
    /// Follow distance as a fraction of the body's orbit radius.
    pub follow_distance_factor: f32,
    /// Unnormalized direction from the body to the follow position.
    pub follow_offset_direction: Vec3,
    /// Camera offset from the ship in chase mode.
    pub chase_offset: Vec3,
    /// Fixed per-frame blend towards the chase position.
    pub chase_blend: f32,
    /// Scales free-fly and chase speed.
    pub move_speed_factor: f32,
    /// Radians of orbit per dragged pixel.
    pub orbit_rotate_speed: f32,
    /// Pan distance per pixel, relative to pivot distance.
    pub orbit_pan_speed: f32,
    /// Zoom fraction per scroll line.
    pub orbit_zoom_speed: f32,
    pub orbit_min_distance: f32,
    pub orbit_max_distance: f32,
    pub fov_degrees: f32,
    pub initial_position: Vec3,
    pub initial_target: Vec3,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            look_sensitivity: 0.002,
            pitch_margin: 0.1,
            follow_smoothing_base: 0.001,
            follow_min_distance: 4.0,
            follow_distance_factor: 0.3,
            follow_offset_direction: Vec3::new(1.0, 0.3, 1.0),
            chase_offset: Vec3::new(0.0, 5.0, 15.0),
            chase_blend: 0.1,
            move_speed_factor: 0.5,
            orbit_rotate_speed: 0.005,
            orbit_pan_speed: 0.001,
            orbit_zoom_speed: 0.1,
            orbit_min_distance: 0.5,
            orbit_max_distance: 1000.0,
            fov_degrees: 45.0,
            initial_position: Vec3::new(30.0, 18.0, 30.0),
            initial_target: Vec3::ZERO,
        }
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        configure_frame_sets(app);
        app.init_resource::<CameraSettings>()
            .init_resource::<CameraController>()
            .init_resource::<InputState>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (
                    orbit_controls::orbit_controls_input.in_set(FrameSet::Input),
                    update_camera.in_set(FrameSet::Camera),
                ),
            );
    }
}

/// Spawn the main camera with perspective projection.
fn setup_camera(
    mut commands: Commands,
    settings: Res<CameraSettings>,
    controller: Res<CameraController>,
) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: settings.fov_degrees.to_radians(),
            near: 0.1,
            far: 5000.0,
            ..default()
        }),
        Transform::from_translation(controller.position()).with_rotation(controller.rotation()),
        MainCamera,
    ));
}

/// Resolve the frame's camera pose and write it to the main camera.
pub fn update_camera(
    time: Res<Time>,
    clock: Res<SimulationClock>,
    display: Res<DisplayState>,
    ephemeris: Res<Ephemeris>,
    settings: Res<CameraSettings>,
    mut input: ResMut<InputState>,
    mut controller: ResMut<CameraController>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let frame = FrameContext {
        delta_secs: time.delta_secs(),
        elapsed_days: clock.elapsed_days(),
        mode: display.camera_mode(),
        selected: display.selected().map(|id| ephemeris.body(id)),
        free_camera_speed: display.free_camera_speed(),
    };
    let pose = controller.update(&frame, &mut input, &settings);

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    *transform = pose.transform();
}
