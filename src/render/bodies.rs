//! Sun and planet spawning.
//!
//! Each planet is a tilted parent entity positioned on its orbit, with a
//! spinning surface child and, for ringed bodies, ring children that share
//! the tilt but not the spin.

use bevy::prelude::*;

use crate::ephemeris::{CelestialBodyId, Ephemeris, axial_tilt, display_radius, spin_rate};
use crate::render::appearance::{RING_BANDS, body_appearance};
use crate::state::DisplayState;
use crate::time::SimulationClock;
use crate::types::SUN_RADIUS_UNITS;

/// Sphere sectors at standard texture quality.
pub const LOW_RES_SECTORS: u32 = 128;

/// Sphere sectors at high texture quality.
pub const HI_RES_SECTORS: u32 = 256;

/// Positioned, tilted root of a planet.
#[derive(Component, Clone, Copy, Debug)]
pub struct PlanetBody {
    pub id: CelestialBodyId,
}

/// Clickable, spinning surface of a planet.
#[derive(Component, Clone, Copy, Debug)]
pub struct PlanetSurface {
    pub id: CelestialBodyId,
    /// Display radius in scene units, before selection scaling.
    pub radius: f32,
    /// Radians per wall-clock second.
    pub spin_rate: f32,
}

/// Marker for the Sun.
#[derive(Component)]
pub struct SunBody;

/// Planet surface meshes at both tessellation levels.
#[derive(Resource, Default)]
pub struct PlanetMeshes {
    low: Vec<Handle<Mesh>>,
    high: Vec<Handle<Mesh>>,
}

impl PlanetMeshes {
    pub fn get(&self, id: CelestialBodyId, hi_res: bool) -> Option<Handle<Mesh>> {
        let meshes = if hi_res { &self.high } else { &self.low };
        meshes.get(id.index()).cloned()
    }
}

/// Number of sphere sectors (and stacks) for a texture quality.
pub fn sphere_sectors(hi_res: bool) -> u32 {
    if hi_res { HI_RES_SECTORS } else { LOW_RES_SECTORS }
}

/// Plugin providing celestial body spawning functionality.
pub struct CelestialBodyPlugin;

impl Plugin for CelestialBodyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlanetMeshes>()
            .add_systems(Startup, (spawn_sun, spawn_planets));
    }
}

/// Spawn the emissive Sun with the scene's only light.
fn spawn_sun(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let color = Color::srgb(1.0, 0.8, 0.2);
    commands
        .spawn((
            Mesh3d(meshes.add(Sphere::new(SUN_RADIUS_UNITS).mesh().uv(64, 32))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: color,
                emissive: color.to_linear() * 8.0,
                ..default()
            })),
            Transform::default(),
            SunBody,
        ))
        .with_child(PointLight {
            intensity: 5.0e7,
            range: 500.0,
            shadows_enabled: false,
            ..default()
        });
}

/// Spawn all planets at their current positions.
fn spawn_planets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut planet_meshes: ResMut<PlanetMeshes>,
    ephemeris: Res<Ephemeris>,
    clock: Res<SimulationClock>,
    display: Res<DisplayState>,
) {
    planet_meshes.low.clear();
    planet_meshes.high.clear();

    for body in ephemeris.bodies() {
        let radius = display_radius(body);
        let [low, high] = [false, true].map(|hi_res| {
            let sectors = sphere_sectors(hi_res);
            meshes.add(Sphere::new(radius).mesh().uv(sectors, sectors))
        });
        let surface_mesh = if display.hi_res_textures() { high.clone() } else { low.clone() };
        planet_meshes.low.push(low);
        planet_meshes.high.push(high);

        let position = ephemeris.render_position(body.id, clock.elapsed_days());
        let tilt = Quat::from_rotation_z(axial_tilt(body) as f32);

        let mut planet = commands.spawn((
            Transform::from_translation(position).with_rotation(tilt),
            Visibility::default(),
            PlanetBody { id: body.id },
            Name::new(body.id.name()),
        ));

        planet.with_child((
            Mesh3d(surface_mesh),
            MeshMaterial3d(materials.add(body_appearance(body.id).material())),
            Transform::default(),
            PlanetSurface {
                id: body.id,
                radius,
                spin_rate: spin_rate(body) as f32,
            },
        ));

        if body.has_rings {
            for band in RING_BANDS {
                planet.with_child((
                    Mesh3d(meshes.add(Annulus::new(radius * band.inner, radius * band.outer))),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: band.color.with_alpha(band.alpha),
                        perceptual_roughness: band.roughness,
                        metallic: band.metalness,
                        alpha_mode: AlphaMode::Blend,
                        double_sided: true,
                        cull_mode: None,
                        ..default()
                    })),
                    // Annulus faces +Z; lay it in the equatorial plane
                    Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
                ));
            }
        }
    }

    info!("Spawned {} planets", ephemeris.bodies().len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_sectors() {
        assert_eq!(sphere_sectors(false), 128);
        assert_eq!(sphere_sectors(true), 256);
    }

    #[test]
    fn test_empty_mesh_table() {
        let meshes = PlanetMeshes::default();
        assert!(meshes.get(CelestialBodyId::Earth, false).is_none());
    }
}
