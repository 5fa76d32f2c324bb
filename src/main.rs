//! Solar 3D - Interactive Solar System Viewer
//!
//! A desktop application showing the planets on circular orbits, with
//! orbit, free-fly and chase cameras.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use solar3d::camera::CameraPlugin;
use solar3d::ephemeris::{Ephemeris, EphemerisError};
use solar3d::input::InputPlugin;
use solar3d::render::RenderPlugin;
use solar3d::time::TimePlugin;
use solar3d::ui::UiPlugin;

fn main() -> Result<(), EphemerisError> {
    // A bad catalog is fatal before any window opens
    let ephemeris = Ephemeris::new()?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Solar 3D".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(ephemeris)
        .add_plugins((TimePlugin, InputPlugin, CameraPlugin, RenderPlugin, UiPlugin))
        .run();

    Ok(())
}
