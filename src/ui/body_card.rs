//! Selected-body card with a body selector and catalog facts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::colors;
use super::icons;
use crate::ephemeris::{CelestialBodyData, CelestialBodyId, Ephemeris};
use crate::state::DisplayState;

/// Group digits in thousands: 69911 -> "69,911".
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Rotation period in hours, flagged when retrograde.
pub fn format_day_length(body: &CelestialBodyData) -> String {
    let hours = body.rotation_period_hours.abs();
    if body.is_retrograde() {
        format!("{hours} h (retro)")
    } else {
        format!("{hours} h")
    }
}

/// System that renders the card for the selected body.
pub fn body_card_panel(
    mut contexts: EguiContexts,
    mut display: ResMut<DisplayState>,
    ephemeris: Res<Ephemeris>,
) {
    let Some(selected) = display.selected() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let body = ephemeris.body(selected);

    egui::Window::new("body_card")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(16.0, -16.0))
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .stroke(egui::Stroke::new(1.0, colors::PANEL_BORDER))
                .corner_radius(8.0)
                .inner_margin(egui::Margin::same(12)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(icons::PLANET).size(20.0));
                let mut choice = selected;
                egui::ComboBox::from_id_salt("body_selector")
                    .selected_text(choice.name())
                    .show_ui(ui, |ui| {
                        for id in CelestialBodyId::ALL {
                            ui.selectable_value(&mut choice, id, id.name());
                        }
                    });
                if choice != selected {
                    display.set_selected(Some(choice));
                }
            });

            ui.add_space(6.0);
            egui::Grid::new("body_facts")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    fact_row(ui, "Radius", format!("{} km", format_thousands(body.radius_km)));
                    fact_row(ui, "Orbit", format!("{} AU", body.semi_major_axis_au));
                    fact_row(ui, "Year", format!("{} days", body.orbital_period_days));
                    fact_row(ui, "Day", format_day_length(body));
                    fact_row(ui, "Tilt", format!("{}°", body.axial_tilt_deg));
                });
        });
}

fn fact_row(ui: &mut egui::Ui, name: &str, value: String) {
    ui.label(egui::RichText::new(name).color(colors::DIM_TEXT));
    ui.label(egui::RichText::new(value).color(colors::TEXT).strong());
    ui.end_row();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::get_body_data;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(69911.0), "69,911");
        assert_eq!(format_thousands(1188.0), "1,188");
        assert_eq!(format_thousands(440.0), "440");
        assert_eq!(format_thousands(1_234_567.0), "1,234,567");
        assert_eq!(format_thousands(-2500.0), "-2,500");
    }

    #[test]
    fn test_day_length_marks_retrograde() {
        assert_eq!(format_day_length(&get_body_data(CelestialBodyId::Venus)), "5832.5 h (retro)");
        assert_eq!(format_day_length(&get_body_data(CelestialBodyId::Earth)), "23.93 h");
    }
}
