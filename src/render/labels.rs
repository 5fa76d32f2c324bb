//! Body labels using egui for text rendering.
//!
//! Renders planet names above each body; the selected body's label is outlined.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::camera::MainCamera;
use crate::render::bodies::PlanetBody;
use crate::state::DisplayState;

/// Settings for label rendering.
#[derive(Resource)]
pub struct LabelSettings {
    /// Vertical offset above the body center in screen pixels.
    pub offset: f32,
    pub font_size: f32,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            offset: 18.0,
            font_size: 14.0,
        }
    }
}

/// Draw labels for all planets while labels are shown.
pub fn draw_body_labels(
    mut contexts: EguiContexts,
    planets: Query<(&PlanetBody, &Transform)>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    display: Res<DisplayState>,
    settings: Res<LabelSettings>,
) {
    if !display.show_labels() {
        return;
    }

    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Background,
        egui::Id::new("body_labels"),
    ));
    let font = egui::FontId::proportional(settings.font_size);

    for (planet, transform) in planets.iter() {
        // Behind the camera or off screen
        let Ok(screen_pos) = camera.world_to_viewport(camera_transform, transform.translation)
        else {
            continue;
        };

        let anchor = egui::pos2(screen_pos.x, screen_pos.y - settings.offset);
        let selected = display.selected() == Some(planet.id);

        let galley = painter.layout_no_wrap(
            planet.id.name().to_string(),
            font.clone(),
            egui::Color32::WHITE,
        );
        let rect = egui::Align2::CENTER_BOTTOM
            .anchor_size(anchor, galley.size())
            .expand2(egui::vec2(8.0, 4.0));

        painter.rect_filled(rect, 8.0, egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180));
        let stroke = if selected {
            egui::Stroke::new(2.0, egui::Color32::from_rgb(0, 255, 136))
        } else {
            egui::Stroke::new(1.0, egui::Color32::from_rgba_unmultiplied(255, 255, 255, 76))
        };
        painter.rect_stroke(rect, 8.0, stroke, egui::StrokeKind::Outside);
        painter.galley(rect.shrink2(egui::vec2(8.0, 4.0)).min, galley, egui::Color32::WHITE);
    }
}
