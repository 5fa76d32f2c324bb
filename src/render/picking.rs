//! Click-to-select for planets.
//!
//! Casts a ray from the cursor and picks the nearest planet sphere it hits.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::camera::MainCamera;
use crate::input::{InputState, egui_wants_pointer};
use crate::render::bodies::PlanetSurface;
use crate::render::sync::SELECTED_SCALE;
use crate::state::DisplayState;

/// Smallest pick radius, so tiny bodies stay clickable.
pub const MIN_PICK_RADIUS: f32 = 0.3;

/// Distance along the ray to the first intersection with a sphere.
///
/// `direction` must be normalized. Returns `None` on a miss or when the
/// sphere is entirely behind the origin.
pub fn ray_sphere_distance(
    origin: Vec3,
    direction: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let to_center = center - origin;
    let along = to_center.dot(direction);
    let closest_sq = to_center.length_squared() - along * along;
    let radius_sq = radius * radius;
    if closest_sq > radius_sq {
        return None;
    }
    let half_chord = (radius_sq - closest_sq).sqrt();
    let near = along - half_chord;
    let far = along + half_chord;
    if far < 0.0 {
        None
    } else if near >= 0.0 {
        Some(near)
    } else {
        // Origin inside the sphere
        Some(0.0)
    }
}

/// Select the planet under the cursor on a primary click.
pub fn select_body_on_click(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    surfaces: Query<(&PlanetSurface, &GlobalTransform)>,
    input: Res<InputState>,
    mut display: ResMut<DisplayState>,
    mut contexts: EguiContexts,
) {
    if !mouse.just_pressed(MouseButton::Left) || input.captured() {
        return;
    }

    if egui_wants_pointer(&mut contexts) {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    let hit = surfaces
        .iter()
        .filter_map(|(surface, transform)| {
            let radius = (surface.radius * SELECTED_SCALE).max(MIN_PICK_RADIUS);
            ray_sphere_distance(ray.origin, *ray.direction, transform.translation(), radius)
                .map(|distance| (surface.id, distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1));

    if let Some((id, _)) = hit {
        display.set_selected(Some(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hit_in_front() {
        let d = ray_sphere_distance(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(0.0, 0.0, -10.0), 1.0);
        assert_relative_eq!(d.unwrap(), 9.0, epsilon = 1e-5);
    }

    #[test]
    fn test_miss_to_the_side() {
        let d = ray_sphere_distance(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(3.0, 0.0, -10.0), 1.0);
        assert!(d.is_none());
    }

    #[test]
    fn test_sphere_behind_is_ignored() {
        let d = ray_sphere_distance(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(0.0, 0.0, 10.0), 1.0);
        assert!(d.is_none());
    }

    #[test]
    fn test_origin_inside() {
        let d = ray_sphere_distance(Vec3::ZERO, Vec3::X, Vec3::ZERO, 2.0);
        assert_eq!(d, Some(0.0));
    }
}
