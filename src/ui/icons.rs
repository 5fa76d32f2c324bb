//! HUD icon glyphs and the one-time egui style setup.
//!
//! Glyphs come from the Phosphor font, which is only available after
//! [`setup_hud_style`] has run.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::colors;

/// Set once the icon font and HUD visuals are installed.
#[derive(Resource, Default)]
pub struct HudStyleReady(pub bool);

/// Install the Phosphor font and dark HUD visuals on the primary context.
pub fn setup_hud_style(mut contexts: EguiContexts, mut ready: ResMut<HudStyleReady>) {
    if ready.0 {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);

    let mut visuals = egui::Visuals::dark();
    visuals.window_fill = colors::PANEL_BG;
    visuals.panel_fill = colors::PANEL_BG;
    visuals.override_text_color = Some(colors::TEXT);
    ctx.set_visuals(visuals);

    ready.0 = true;
    info!("HUD style ready");
}

// https://phosphoricons.com/

pub const PLAY: &str = egui_phosphor::regular::PLAY;
pub const PAUSE: &str = egui_phosphor::regular::PAUSE;
pub const RESET: &str = egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE;
pub const ORBIT: &str = egui_phosphor::regular::PATH;
pub const LABEL: &str = egui_phosphor::regular::TAG;
pub const SPEED: &str = egui_phosphor::regular::CLOCK;
pub const HI_RES: &str = egui_phosphor::regular::SPARKLE;
pub const KEYBOARD: &str = egui_phosphor::regular::KEYBOARD;
pub const PLANET: &str = egui_phosphor::regular::GLOBE;
pub const LOCK: &str = egui_phosphor::regular::LOCK;

// Camera modes
pub const ORBIT_CAMERA: &str = egui_phosphor::regular::CROSSHAIR;
pub const FREE_CAMERA: &str = egui_phosphor::regular::AIRPLANE_TILT;
pub const CHASE_CAMERA: &str = egui_phosphor::regular::ROCKET;
