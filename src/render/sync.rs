//! Scene synchronization from simulation and display state.
//!
//! Runs after the camera so every read sees this frame's resolved state.

use bevy::prelude::*;

use crate::ephemeris::Ephemeris;
use crate::render::bodies::{PlanetBody, PlanetMeshes, PlanetSurface};
use crate::state::DisplayState;
use crate::time::SimulationClock;

/// Scale applied to the selected body's surface.
pub const SELECTED_SCALE: f32 = 1.15;

/// Move planets to their ephemeris positions for the current simulated day.
pub fn sync_planet_positions(
    mut query: Query<(&mut Transform, &PlanetBody)>,
    ephemeris: Res<Ephemeris>,
    clock: Res<SimulationClock>,
) {
    for (mut transform, planet) in query.iter_mut() {
        transform.translation = ephemeris.render_position(planet.id, clock.elapsed_days());
    }
}

/// Spin each surface about its tilted axis.
///
/// Spin follows wall-clock time, so it continues while the clock is paused.
pub fn spin_planets(mut query: Query<(&mut Transform, &PlanetSurface)>, time: Res<Time>) {
    let dt = time.delta_secs();
    for (mut transform, surface) in query.iter_mut() {
        transform.rotate_local_y(surface.spin_rate * dt);
    }
}

/// Enlarge the selected body.
pub fn highlight_selection(
    mut query: Query<(&mut Transform, &PlanetSurface)>,
    display: Res<DisplayState>,
) {
    let selected = display.selected();
    for (mut transform, surface) in query.iter_mut() {
        let scale = if selected == Some(surface.id) { SELECTED_SCALE } else { 1.0 };
        transform.scale = Vec3::splat(scale);
    }
}

/// Swap surface tessellation when texture quality changes.
pub fn apply_texture_quality(
    mut query: Query<(&mut Mesh3d, &PlanetSurface)>,
    planet_meshes: Res<PlanetMeshes>,
    display: Res<DisplayState>,
    mut applied: Local<Option<bool>>,
) {
    let hi_res = display.hi_res_textures();
    if *applied == Some(hi_res) {
        return;
    }

    for (mut mesh, surface) in query.iter_mut() {
        if let Some(handle) = planet_meshes.get(surface.id, hi_res) {
            mesh.0 = handle;
        }
    }
    *applied = Some(hi_res);
    debug!("Planet tessellation: {}", if hi_res { "high" } else { "standard" });
}
