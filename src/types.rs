//! Shared constants and frame scheduling for the solar system simulation.

use bevy::prelude::*;

/// Scene units per astronomical unit (1 AU -> 2 world units, Pluto ~79u).
pub const AU_TO_UNITS: f64 = 2.0;

/// Scene units per kilometer of body radius (Earth radius ~0.32 units).
pub const KM_TO_UNITS: f64 = 0.00005;

/// Smallest rendered body radius in scene units.
pub const MIN_DISPLAY_RADIUS: f32 = 0.1;

/// Stylized Sun radius in scene units.
pub const SUN_RADIUS_UNITS: f32 = 1.2;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Hours per day
pub const HOURS_PER_DAY: f64 = 24.0;

/// Ordered phases of one frame.
///
/// Input handlers only write [`crate::input::InputState`] and the display
/// state; the clock advances next; the camera controller then consumes input
/// and writes the camera transform; finally side effects (cursor grab, scene
/// sync) are applied from the resolved state.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Raw input aggregation, shortcuts and the orbit interaction handler.
    Input,
    /// Simulation clock advancement.
    Clock,
    /// Camera controller update.
    Camera,
    /// Host side effects and scene composition.
    Apply,
}

/// Configure the strict ordering of [`FrameSet`] in the `Update` schedule.
///
/// Safe to call from several plugins; set configuration is merged.
pub fn configure_frame_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            FrameSet::Input,
            FrameSet::Clock,
            FrameSet::Camera,
            FrameSet::Apply,
        )
            .chain(),
    );
}
