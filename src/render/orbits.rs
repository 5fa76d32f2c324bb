//! Orbit path rendering using Bevy Gizmos.
//!
//! Orbits are circles in the ecliptic plane, so each path is drawn once per
//! frame from the catalog radius without consulting the clock.

use bevy::prelude::*;

use crate::ephemeris::{Ephemeris, orbit_radius};
use crate::state::DisplayState;

/// Settings for orbit path rendering.
#[derive(Resource)]
pub struct OrbitPathSettings {
    /// Number of segments per circle (higher = smoother).
    pub segments: u32,
    pub color: Color,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            segments: 256,
            color: Color::srgba(0.2, 0.2, 0.2, 0.6),
        }
    }
}

/// Points of a closed circle of `radius` in the y = 0 plane, first point repeated last.
pub fn orbit_circle_points(radius: f32, segments: u32) -> Vec<Vec3> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let angle = (i % segments) as f32 / segments as f32 * std::f32::consts::TAU;
            Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
        })
        .collect()
}

/// Draw every orbit while orbits are shown.
pub fn draw_orbit_paths(
    mut gizmos: Gizmos,
    settings: Res<OrbitPathSettings>,
    display: Res<DisplayState>,
    ephemeris: Res<Ephemeris>,
) {
    if !display.show_orbits() {
        return;
    }

    for body in ephemeris.bodies() {
        let radius = orbit_radius(body) as f32;
        gizmos.linestrip(orbit_circle_points(radius, settings.segments), settings.color);
    }
}
