//! Background rendering for the solar system visualization.
//!
//! Provides the space backdrop and a static starfield.

use bevy::prelude::*;

/// Backdrop color behind everything (#000011).
pub const SPACE_COLOR: Color = Color::srgb(0.0, 0.0, 0.067);

/// Number of background stars.
pub const STAR_COUNT: usize = 1500;

/// Distance of the star shell from the origin.
pub const STAR_SHELL_RADIUS: f32 = 1500.0;

/// Evenly spread directions on the unit sphere (Fibonacci lattice).
pub fn star_directions(count: usize) -> impl Iterator<Item = Vec3> {
    let golden_angle = std::f32::consts::PI * (3.0 - 5.0_f32.sqrt());
    (0..count).map(move |i| {
        let y = 1.0 - 2.0 * (i as f32 + 0.5) / count as f32;
        let ring = (1.0 - y * y).sqrt();
        let theta = golden_angle * i as f32;
        Vec3::new(theta.cos() * ring, y, theta.sin() * ring)
    })
}

/// Spawn a starfield on a distant shell around the solar system.
pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Material for stars - unlit white
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    let star_mesh = meshes.add(Sphere::new(1.0).mesh().uv(8, 6));

    for (i, direction) in star_directions(STAR_COUNT).enumerate() {
        // Vary size so the field doesn't look like a grid
        let scale = 0.6 + (i % 7) as f32 * 0.15;
        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(direction * STAR_SHELL_RADIUS)
                .with_scale(Vec3::splat(scale)),
        ));
    }

    info!("Spawned {STAR_COUNT} background stars");
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_star_directions_are_unit() {
        for dir in star_directions(100) {
            assert_relative_eq!(dir.length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_star_directions_cover_both_hemispheres() {
        let (north, south): (Vec<_>, Vec<_>) = star_directions(200).partition(|d| d.y > 0.0);
        assert_eq!(north.len(), 100);
        assert_eq!(south.len(), 100);
    }
}
