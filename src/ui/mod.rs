//! UI module providing the egui-based HUD.
//!
//! Panels only read state and call [`crate::state::DisplayState`] mutators.

mod body_card;
mod help;
mod hud;
pub mod icons;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use body_card::{format_day_length, format_thousands};
pub use help::control_hints;

/// Shared HUD colors.
mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 178);
    pub const PANEL_BORDER: Color32 = Color32::from_rgba_premultiplied(60, 60, 60, 76);
    pub const BUTTON: Color32 = Color32::from_rgb(60, 60, 70);
    pub const ACTIVE_MODE: Color32 = Color32::from_rgb(37, 99, 235);
    pub const ACCENT: Color32 = Color32::from_rgb(0, 255, 136);
    pub const TEXT: Color32 = Color32::from_rgb(235, 235, 240);
    pub const DIM_TEXT: Color32 = Color32::from_rgb(170, 170, 180);
    pub const CROSSHAIR: Color32 = Color32::from_rgba_premultiplied(200, 200, 200, 200);
    pub const HINT_TEXT: Color32 = Color32::from_rgb(255, 255, 255);
}

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::HudStyleReady>()
            // Panels render icon glyphs, so the font goes in first
            .add_systems(EguiPrimaryContextPass, icons::setup_hud_style)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    hud::hud_panel,
                    body_card::body_card_panel,
                    help::controls_help,
                    hud::capture_overlay,
                )
                    .chain()
                    .after(icons::setup_hud_style)
                    .run_if(|ready: Res<icons::HudStyleReady>| ready.0),
            );
    }
}
