//! Ephemeris module for computing celestial body positions.
//!
//! Orbits are idealized circles in the ecliptic (scene `y = 0`) plane,
//! parameterized by simulated elapsed days. Every body revolves in the same
//! direction; the sign of the rotation period only affects self-rotation.
//!
//! Coordinate frame:
//! - 3D heliocentric (Sun at origin), scene units, `+Y` up.

pub mod data;

#[cfg(test)]
mod proptest_ephemeris;

pub use data::{CelestialBodyData, CelestialBodyId, all_bodies, get_body_data};

use std::f64::consts::TAU;

use bevy::math::DVec3;
use bevy::prelude::*;
use thiserror::Error;

use crate::types::{AU_TO_UNITS, DEG_TO_RAD, HOURS_PER_DAY, KM_TO_UNITS, MIN_DISPLAY_RADIUS};

/// Body-hours of spin shown per wall-clock second.
const SPIN_HOURS_PER_SECOND: f64 = HOURS_PER_DAY;

/// Damping applied to the displayed spin rate.
const SPIN_RATE_FACTOR: f64 = 0.5;

/// Errors raised while loading the body catalog.
#[derive(Debug, Error, PartialEq)]
pub enum EphemerisError {
    #[error("{body}: orbital period must be nonzero")]
    ZeroOrbitalPeriod { body: CelestialBodyId },
    #[error("{body}: rotation period must be nonzero")]
    ZeroRotationPeriod { body: CelestialBodyId },
    #[error("{body}: {field} is not finite")]
    NonFinite {
        body: CelestialBodyId,
        field: &'static str,
    },
    #[error("{0} appears more than once in the catalog")]
    DuplicateBody(CelestialBodyId),
    #[error("{0} is missing from the catalog")]
    MissingBody(CelestialBodyId),
}

/// Check the invariants a body must satisfy before it can be used as a divisor.
pub fn validate_body(body: &CelestialBodyData) -> Result<(), EphemerisError> {
    let fields = [
        ("radius_km", body.radius_km),
        ("semi_major_axis_au", body.semi_major_axis_au),
        ("orbital_period_days", body.orbital_period_days),
        ("rotation_period_hours", body.rotation_period_hours),
        ("axial_tilt_deg", body.axial_tilt_deg),
    ];
    if let Some(&(field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
        return Err(EphemerisError::NonFinite {
            body: body.id,
            field,
        });
    }
    if body.orbital_period_days == 0.0 {
        return Err(EphemerisError::ZeroOrbitalPeriod { body: body.id });
    }
    if body.rotation_period_hours == 0.0 {
        return Err(EphemerisError::ZeroRotationPeriod { body: body.id });
    }
    Ok(())
}

/// Position of a body after `elapsed_days` of simulated time, in scene units.
///
/// `angle = elapsed / period * 2π`, on a circle of radius `a * AU_TO_UNITS`.
pub fn orbital_position(body: &CelestialBodyData, elapsed_days: f64) -> DVec3 {
    let angle = (elapsed_days / body.orbital_period_days) * TAU;
    let r = orbit_radius(body);
    DVec3::new(angle.cos() * r, 0.0, angle.sin() * r)
}

/// Orbit radius in scene units.
pub fn orbit_radius(body: &CelestialBodyData) -> f64 {
    body.semi_major_axis_au * AU_TO_UNITS
}

/// Rendered sphere radius in scene units.
pub fn display_radius(body: &CelestialBodyData) -> f32 {
    ((body.radius_km * KM_TO_UNITS) as f32).max(MIN_DISPLAY_RADIUS)
}

/// Self-rotation rate in radians per wall-clock second. Negative for retrograde.
pub fn spin_rate(body: &CelestialBodyData) -> f64 {
    let period = body.rotation_period_hours;
    let angular_speed = TAU / (period.abs() / SPIN_HOURS_PER_SECOND);
    period.signum() * angular_speed * SPIN_RATE_FACTOR
}

/// Axial tilt in radians.
pub fn axial_tilt(body: &CelestialBodyData) -> f64 {
    body.axial_tilt_deg * DEG_TO_RAD
}

/// Resource owning the validated body catalog.
#[derive(Resource, Debug, Clone)]
pub struct Ephemeris {
    bodies: Vec<CelestialBodyData>,
}

impl Ephemeris {
    /// Load and validate the built-in catalog.
    pub fn new() -> Result<Self, EphemerisError> {
        Self::from_bodies(all_bodies())
    }

    /// Build a catalog from arbitrary body data.
    ///
    /// Every [`CelestialBodyId`] must appear exactly once and pass
    /// [`validate_body`]. Bodies are stored in [`CelestialBodyId::ALL`] order.
    pub fn from_bodies(
        bodies: impl IntoIterator<Item = CelestialBodyData>,
    ) -> Result<Self, EphemerisError> {
        let mut slots: [Option<CelestialBodyData>; CelestialBodyId::COUNT] = Default::default();
        for body in bodies {
            validate_body(&body)?;
            let slot = &mut slots[body.id.index()];
            if slot.is_some() {
                return Err(EphemerisError::DuplicateBody(body.id));
            }
            *slot = Some(body);
        }

        let mut ordered = Vec::with_capacity(CelestialBodyId::COUNT);
        for (id, slot) in CelestialBodyId::ALL.into_iter().zip(slots) {
            ordered.push(slot.ok_or(EphemerisError::MissingBody(id))?);
        }

        info!("Loaded ephemeris for {} bodies", ordered.len());
        Ok(Self { bodies: ordered })
    }

    /// Body data for an id.
    pub fn body(&self, id: CelestialBodyId) -> &CelestialBodyData {
        &self.bodies[id.index()]
    }

    /// All bodies, in order of distance from the Sun.
    pub fn bodies(&self) -> &[CelestialBodyData] {
        &self.bodies
    }

    /// Position of a body at the given simulated time, in scene units.
    pub fn position(&self, id: CelestialBodyId, elapsed_days: f64) -> DVec3 {
        orbital_position(self.body(id), elapsed_days)
    }

    /// Single-precision position for rendering and camera math.
    pub fn render_position(&self, id: CelestialBodyId, elapsed_days: f64) -> Vec3 {
        self.position(id, elapsed_days).as_vec3()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn earth() -> CelestialBodyData {
        get_body_data(CelestialBodyId::Earth)
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let ephemeris = Ephemeris::new().expect("built-in catalog must validate");
        assert_eq!(ephemeris.bodies().len(), CelestialBodyId::COUNT);
        for (i, body) in ephemeris.bodies().iter().enumerate() {
            assert_eq!(body.id, CelestialBodyId::ALL[i]);
        }
    }

    #[test]
    fn test_epoch_position_on_positive_x() {
        let pos = orbital_position(&earth(), 0.0);
        assert_relative_eq!(pos.x, 2.0);
        assert_eq!(pos.y, 0.0);
        assert_relative_eq!(pos.z, 0.0);
    }

    #[test]
    fn test_quarter_orbit_on_positive_z() {
        let pos = orbital_position(&earth(), 365.25 / 4.0);
        assert_relative_eq!(pos.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(pos.z, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_orbit_direction_ignores_spin_sign() {
        // Venus spins retrograde but still revolves towards +Z first
        let venus = get_body_data(CelestialBodyId::Venus);
        let pos = orbital_position(&venus, venus.orbital_period_days / 8.0);
        assert!(pos.z > 0.0);
        assert!(spin_rate(&venus) < 0.0);
    }

    #[test]
    fn test_earth_spin_rate() {
        // 23.93h period at 24 body-hours per second, halved
        let expected = TAU / (23.93 / 24.0) * 0.5;
        assert_relative_eq!(spin_rate(&earth()), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_display_radius_floor() {
        let pluto = get_body_data(CelestialBodyId::Pluto);
        assert_eq!(display_radius(&pluto), MIN_DISPLAY_RADIUS);
        assert!(display_radius(&earth()) > MIN_DISPLAY_RADIUS);
    }

    #[test]
    fn test_zero_orbital_period_rejected() {
        let mut bodies = all_bodies();
        bodies[2].orbital_period_days = 0.0;
        assert_eq!(
            Ephemeris::from_bodies(bodies).unwrap_err(),
            EphemerisError::ZeroOrbitalPeriod {
                body: CelestialBodyId::Earth
            }
        );
    }

    #[test]
    fn test_zero_rotation_period_rejected() {
        let mut bodies = all_bodies();
        bodies[1].rotation_period_hours = 0.0;
        assert_eq!(
            Ephemeris::from_bodies(bodies).unwrap_err(),
            EphemerisError::ZeroRotationPeriod {
                body: CelestialBodyId::Venus
            }
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut bodies = all_bodies();
        bodies[4].axial_tilt_deg = f64::NAN;
        assert_eq!(
            Ephemeris::from_bodies(bodies).unwrap_err(),
            EphemerisError::NonFinite {
                body: CelestialBodyId::Jupiter,
                field: "axial_tilt_deg"
            }
        );
    }

    #[test]
    fn test_duplicate_and_missing_rejected() {
        let mut bodies = all_bodies();
        bodies.push(earth());
        assert_eq!(
            Ephemeris::from_bodies(bodies).unwrap_err(),
            EphemerisError::DuplicateBody(CelestialBodyId::Earth)
        );

        let bodies: Vec<_> = all_bodies()
            .into_iter()
            .filter(|b| b.id != CelestialBodyId::Pluto)
            .collect();
        assert_eq!(
            Ephemeris::from_bodies(bodies).unwrap_err(),
            EphemerisError::MissingBody(CelestialBodyId::Pluto)
        );
    }

    #[test]
    fn test_error_messages() {
        let err = EphemerisError::ZeroOrbitalPeriod {
            body: CelestialBodyId::Mars,
        };
        assert_eq!(err.to_string(), "Mars: orbital period must be nonzero");
    }
}
