//! Physical and orbital data for the nine orbiting bodies.
//! Values are rounded mean figures; orbits are treated as circles.

use std::fmt;

/// Identifier for the bodies orbiting the Sun.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CelestialBodyId {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl CelestialBodyId {
    /// Number of orbiting bodies.
    pub const COUNT: usize = 9;

    /// All bodies in order of distance from the Sun.
    pub const ALL: [CelestialBodyId; Self::COUNT] = [
        CelestialBodyId::Mercury,
        CelestialBodyId::Venus,
        CelestialBodyId::Earth,
        CelestialBodyId::Mars,
        CelestialBodyId::Jupiter,
        CelestialBodyId::Saturn,
        CelestialBodyId::Uranus,
        CelestialBodyId::Neptune,
        CelestialBodyId::Pluto,
    ];

    /// Stable index into per-body tables.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            CelestialBodyId::Mercury => "Mercury",
            CelestialBodyId::Venus => "Venus",
            CelestialBodyId::Earth => "Earth",
            CelestialBodyId::Mars => "Mars",
            CelestialBodyId::Jupiter => "Jupiter",
            CelestialBodyId::Saturn => "Saturn",
            CelestialBodyId::Uranus => "Uranus",
            CelestialBodyId::Neptune => "Neptune",
            CelestialBodyId::Pluto => "Pluto",
        }
    }
}

impl fmt::Display for CelestialBodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static data for an orbiting body.
#[derive(Clone, Debug, PartialEq)]
pub struct CelestialBodyData {
    pub id: CelestialBodyId,
    /// Equatorial radius in kilometers.
    pub radius_km: f64,
    /// Mean distance from the Sun in AU.
    pub semi_major_axis_au: f64,
    /// Sidereal orbital period in days.
    pub orbital_period_days: f64,
    /// Sidereal rotation period in hours; negative means retrograde spin.
    pub rotation_period_hours: f64,
    /// Obliquity in degrees.
    pub axial_tilt_deg: f64,
    pub has_rings: bool,
}

impl CelestialBodyData {
    /// Whether the body spins opposite to its orbital direction.
    pub fn is_retrograde(&self) -> bool {
        self.rotation_period_hours < 0.0
    }
}

/// Get orbital and physical data for a body.
pub fn get_body_data(id: CelestialBodyId) -> CelestialBodyData {
    let (radius_km, semi_major_axis_au, orbital_period_days, rotation_period_hours, axial_tilt) =
        match id {
            CelestialBodyId::Mercury => (2440.0, 0.39, 88.0, 1407.6, 0.03),
            CelestialBodyId::Venus => (6052.0, 0.72, 224.7, -5832.5, 177.4),
            CelestialBodyId::Earth => (6371.0, 1.0, 365.25, 23.93, 23.44),
            CelestialBodyId::Mars => (3390.0, 1.52, 686.98, 24.62, 25.19),
            CelestialBodyId::Jupiter => (69911.0, 5.2, 4332.59, 9.93, 3.13),
            CelestialBodyId::Saturn => (58232.0, 9.58, 10759.0, 10.7, 26.73),
            CelestialBodyId::Uranus => (25362.0, 19.2, 30687.0, -17.24, 97.77),
            CelestialBodyId::Neptune => (24622.0, 30.05, 60190.0, 16.11, 28.32),
            CelestialBodyId::Pluto => (1188.0, 39.48, 90560.0, -153.3, 119.6),
        };

    CelestialBodyData {
        id,
        radius_km,
        semi_major_axis_au,
        orbital_period_days,
        rotation_period_hours,
        axial_tilt_deg: axial_tilt,
        has_rings: id == CelestialBodyId::Saturn,
    }
}

/// Get data for all bodies, in [`CelestialBodyId::ALL`] order.
pub fn all_bodies() -> Vec<CelestialBodyData> {
    CelestialBodyId::ALL.into_iter().map(get_body_data).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, id) in CelestialBodyId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_only_saturn_has_rings() {
        let ringed: Vec<_> = all_bodies()
            .into_iter()
            .filter(|b| b.has_rings)
            .map(|b| b.id)
            .collect();
        assert_eq!(ringed, vec![CelestialBodyId::Saturn]);
    }

    #[test]
    fn test_retrograde_spinners() {
        let retro: Vec<_> = all_bodies()
            .into_iter()
            .filter(CelestialBodyData::is_retrograde)
            .map(|b| b.id)
            .collect();
        assert_eq!(
            retro,
            vec![
                CelestialBodyId::Venus,
                CelestialBodyId::Uranus,
                CelestialBodyId::Pluto
            ]
        );
    }
}
