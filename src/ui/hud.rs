//! Top control bar, pointer-lock hint and crosshair.
//!
//! Every change goes through the [`DisplayState`] mutators.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::colors;
use super::icons;
use crate::camera::CameraMode;
use crate::input::InputState;
use crate::state::{DisplayState, FREE_CAMERA_SPEED_RANGE, SPEED_MULTIPLIER_RANGE};

/// Icon for a camera mode.
pub fn mode_icon(mode: CameraMode) -> &'static str {
    match mode {
        CameraMode::OrbitFollow => icons::ORBIT_CAMERA,
        CameraMode::FreeFly => icons::FREE_CAMERA,
        CameraMode::Chase => icons::CHASE_CAMERA,
    }
}

/// System that renders the top control bar.
pub fn hud_panel(mut contexts: EguiContexts, mut display: ResMut<DisplayState>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::top("hud")
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(16, 8)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing.x = 12.0;

                render_toggles(ui, &mut display);
                ui.separator();
                render_speed_slider(ui, &mut display);
                ui.separator();
                render_camera_controls(ui, &mut display);
            });
        });
}

fn render_toggles(ui: &mut egui::Ui, display: &mut DisplayState) {
    let mut orbits = display.show_orbits();
    if ui
        .checkbox(&mut orbits, format!("{} Orbits", icons::ORBIT))
        .changed()
    {
        display.toggle_orbits();
    }

    let mut labels = display.show_labels();
    if ui
        .checkbox(&mut labels, format!("{} Labels", icons::LABEL))
        .changed()
    {
        display.toggle_labels();
    }

    let (icon, tooltip) = if display.paused() {
        (icons::PLAY, "Resume (Space)")
    } else {
        (icons::PAUSE, "Pause (Space)")
    };
    if ui
        .button(egui::RichText::new(icon).size(18.0))
        .on_hover_text(tooltip)
        .clicked()
    {
        display.toggle_paused();
    }

    let mut hi_res = display.hi_res_textures();
    if ui
        .checkbox(&mut hi_res, format!("{} Hi-res", icons::HI_RES))
        .changed()
    {
        display.toggle_hi_res_textures();
    }
}

fn render_speed_slider(ui: &mut egui::Ui, display: &mut DisplayState) {
    let (min, max) = SPEED_MULTIPLIER_RANGE;
    let mut speed = display.speed_multiplier();
    ui.label(icons::SPEED).on_hover_text("Simulated days per second");
    if ui
        .add(
            egui::Slider::new(&mut speed, min..=max)
                .suffix("×")
                .fixed_decimals(0),
        )
        .changed()
    {
        display.set_speed_multiplier(speed);
    }
}

fn render_camera_controls(ui: &mut egui::Ui, display: &mut DisplayState) {
    let mode = display.camera_mode();
    let text = format!("{} {}", mode_icon(mode), mode.label());
    let fill = if mode.captures_pointer() {
        colors::ACTIVE_MODE
    } else {
        colors::BUTTON
    };
    if ui
        .add(egui::Button::new(text).fill(fill))
        .on_hover_text("Cycle camera mode (F)")
        .clicked()
    {
        display.cycle_camera_mode();
    }

    if ui
        .button(format!("{} Reset", icons::RESET))
        .on_hover_text("Follow Earth again (R)")
        .clicked()
    {
        display.reset_camera();
    }

    if mode.captures_pointer() {
        let (min, max) = FREE_CAMERA_SPEED_RANGE;
        let mut speed = display.free_camera_speed();
        ui.label("Fly speed");
        if ui
            .add(egui::Slider::new(&mut speed, min..=max).fixed_decimals(0))
            .changed()
        {
            display.set_free_camera_speed(speed);
        }
    }
}

/// Crosshair and lock hint while a capture mode is active.
pub fn capture_overlay(
    mut contexts: EguiContexts,
    display: Res<DisplayState>,
    input: Res<InputState>,
) {
    if !display.camera_mode().captures_pointer() {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let center = ctx.screen_rect().center();
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("crosshair"),
    ));
    let stroke = egui::Stroke::new(1.5, colors::CROSSHAIR);
    let (across, down) = (egui::vec2(10.0, 0.0), egui::vec2(0.0, 10.0));
    painter.line_segment([center - across, center + across], stroke);
    painter.line_segment([center - down, center + down], stroke);

    if !input.captured() {
        painter.text(
            center + egui::vec2(0.0, 28.0),
            egui::Align2::CENTER_TOP,
            format!("{} Click to lock mouse", icons::LOCK),
            egui::FontId::proportional(14.0),
            colors::HINT_TEXT,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mode_has_distinct_icon() {
        let icons: Vec<_> = CameraMode::ALL.iter().map(|m| mode_icon(*m)).collect();
        assert_ne!(icons[0], icons[1]);
        assert_ne!(icons[1], icons[2]);
        assert_ne!(icons[0], icons[2]);
    }
}
