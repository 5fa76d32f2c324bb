//! Controls help for the active camera mode.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::colors;
use super::icons;
use crate::camera::CameraMode;
use crate::state::DisplayState;

/// (key, action) pairs for a camera mode.
pub fn control_hints(mode: CameraMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        CameraMode::OrbitFollow => &[
            ("Drag", "Rotate camera"),
            ("Scroll", "Zoom in/out"),
            ("Right drag", "Pan camera"),
            ("Click planet", "Select to follow"),
            ("F", "Switch to free camera"),
            ("R", "Reset camera"),
            ("Space", "Pause"),
        ],
        CameraMode::FreeFly => &[
            ("W", "Move forward (where you're looking)"),
            ("S", "Move backward"),
            ("A/D", "Strafe left/right"),
            ("Mouse", "Look around (click to lock)"),
            ("Escape", "Unlock mouse"),
            ("F", "Switch to chase camera"),
            ("R", "Reset camera"),
        ],
        CameraMode::Chase => &[
            ("W", "Fly forward"),
            ("S", "Fly backward"),
            ("A/D", "Strafe left/right"),
            ("Escape", "Unlock mouse"),
            ("F", "Switch to orbit camera"),
            ("R", "Reset camera"),
        ],
    }
}

/// System that renders the controls help box.
pub fn controls_help(mut contexts: EguiContexts, display: Res<DisplayState>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("controls_help"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .order(egui::Order::Middle)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::same(10))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(format!("{} Controls", icons::KEYBOARD))
                            .color(colors::TEXT)
                            .strong(),
                    );
                    for (key, action) in control_hints(display.camera_mode()) {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(*key).monospace().color(colors::ACCENT));
                            ui.label(egui::RichText::new(*action).color(colors::DIM_TEXT));
                        });
                    }
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mode_documents_cycle_and_reset() {
        for mode in CameraMode::ALL {
            let hints = control_hints(mode);
            assert!(hints.iter().any(|(k, _)| *k == "F"), "{mode:?}");
            assert!(hints.iter().any(|(k, _)| *k == "R"), "{mode:?}");
        }
    }

    #[test]
    fn test_capture_modes_document_escape() {
        for mode in CameraMode::ALL.into_iter().filter(|m| m.captures_pointer()) {
            assert!(control_hints(mode).iter().any(|(k, _)| *k == "Escape"));
        }
    }
}
