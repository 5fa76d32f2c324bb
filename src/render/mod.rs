//! Rendering systems for the solar system viewer.
//!
//! Spawns the Sun, planets, rings, starfield and spaceship, and keeps them in
//! step with the clock, the camera controller and the display toggles.

pub mod appearance;
mod background;
pub mod bodies;
mod labels;
mod orbits;
pub mod picking;
mod spaceship;
pub mod sync;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use self::background::{SPACE_COLOR, spawn_starfield};
use self::bodies::CelestialBodyPlugin;
use self::labels::draw_body_labels;
use self::orbits::draw_orbit_paths;
use self::picking::select_body_on_click;
use self::spaceship::{spawn_spaceship, sync_spaceship};
use self::sync::{apply_texture_quality, highlight_selection, spin_planets, sync_planet_positions};
use crate::types::{FrameSet, configure_frame_sets};

// Re-export for use in other modules
pub use self::bodies::{PlanetBody, PlanetSurface};
pub use self::labels::LabelSettings;
pub use self::orbits::OrbitPathSettings;
pub use self::spaceship::Spaceship;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        configure_frame_sets(app);
        app.add_plugins(CelestialBodyPlugin)
            .insert_resource(ClearColor(SPACE_COLOR))
            .init_resource::<OrbitPathSettings>()
            .init_resource::<LabelSettings>()
            .add_systems(Startup, (spawn_starfield, spawn_spaceship))
            .add_systems(Update, select_body_on_click.in_set(FrameSet::Input))
            // Everything here reads the resolved clock and camera state
            .add_systems(
                Update,
                (
                    sync_planet_positions,
                    spin_planets,
                    highlight_selection,
                    apply_texture_quality,
                    sync_spaceship,
                    draw_orbit_paths,
                )
                    .in_set(FrameSet::Apply),
            )
            .add_systems(EguiPrimaryContextPass, draw_body_labels);
    }
}
