//! Spaceship proxy shown in chase mode.

use bevy::prelude::*;

use crate::camera::{CameraController, CameraMode};
use crate::state::DisplayState;

/// Marker for the spaceship root.
#[derive(Component)]
pub struct Spaceship;

/// Spawn the ship hidden; it only appears in chase mode.
pub fn spawn_spaceship(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let hull = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x1a, 0x1a, 0x2e),
        metallic: 0.9,
        perceptual_roughness: 0.1,
        ..default()
    });
    let nose = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x0f, 0x34, 0x60),
        metallic: 0.95,
        perceptual_roughness: 0.05,
        ..default()
    });
    let engine = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x00, 0xd4, 0xff),
        emissive: Color::srgb_u8(0x00, 0xd4, 0xff).to_linear() * 3.0,
        ..default()
    });

    // Model space: nose towards -Z, matching the camera's forward
    let along_z = Quat::from_rotation_x(std::f32::consts::FRAC_PI_2);
    let fuselage = meshes.add(Cylinder::new(0.1, 1.2));
    let cone = meshes.add(Cone::new(0.06, 0.4));
    let wing = meshes.add(Cuboid::new(1.1, 0.015, 0.6));
    let glow = meshes.add(Sphere::new(0.06));

    commands
        .spawn((
            Transform::default(),
            Visibility::Hidden,
            Spaceship,
            Name::new("Spaceship"),
        ))
        .with_children(|ship| {
            ship.spawn((
                Mesh3d(fuselage),
                MeshMaterial3d(hull.clone()),
                Transform::from_rotation(along_z),
            ));
            ship.spawn((
                Mesh3d(cone),
                MeshMaterial3d(nose),
                Transform::from_xyz(0.0, 0.0, -0.8)
                    .with_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
            ));
            for side in [-1.0, 1.0] {
                ship.spawn((
                    Mesh3d(wing.clone()),
                    MeshMaterial3d(hull.clone()),
                    Transform::from_xyz(0.45 * side, 0.0, 0.0)
                        .with_rotation(Quat::from_rotation_z(-0.3 * side)),
                ));
                ship.spawn((
                    Mesh3d(glow.clone()),
                    MeshMaterial3d(engine.clone()),
                    Transform::from_xyz(0.15 * side, 0.0, 0.7),
                ));
            }
        });
}

/// Place the ship at the controller's ship position, facing the camera's way.
pub fn sync_spaceship(
    mut ship: Query<(&mut Transform, &mut Visibility), With<Spaceship>>,
    controller: Res<CameraController>,
    display: Res<DisplayState>,
) {
    let Ok((mut transform, mut visibility)) = ship.single_mut() else {
        return;
    };

    if display.camera_mode() != CameraMode::Chase {
        *visibility = Visibility::Hidden;
        return;
    }

    *visibility = Visibility::Inherited;
    transform.translation = controller.ship_position();
    transform.rotation = controller.rotation();
}
