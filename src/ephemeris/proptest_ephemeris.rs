//! Property-based tests for ephemeris computations using proptest.
//!
//! These tests verify that the circular orbit model keeps its geometric
//! properties across a wide range of simulated times.

use proptest::prelude::*;
use std::f64::consts::TAU;

use super::data::{CelestialBodyId, get_body_data};
use super::{orbit_radius, orbital_position};

fn any_body() -> impl Strategy<Value = CelestialBodyId> {
    (0..CelestialBodyId::COUNT).prop_map(|i| CelestialBodyId::ALL[i])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every position lies on the y = 0 plane at exactly the orbit radius.
    #[test]
    fn prop_orbit_is_planar_circle(
        id in any_body(),
        days in -1.0e6f64..1.0e6,
    ) {
        let body = get_body_data(id);
        let pos = orbital_position(&body, days);
        let r = orbit_radius(&body);

        prop_assert_eq!(pos.y, 0.0);
        let error = (pos.length() - r).abs();
        prop_assert!(
            error < 1e-9 * r.max(1.0),
            "{} at day {}: |pos|={} vs r={}",
            id, days, pos.length(), r
        );
    }

    /// Advancing by one orbital period returns the body to the same place.
    #[test]
    fn prop_orbit_is_periodic(
        id in any_body(),
        days in 0.0f64..1.0e5,
    ) {
        let body = get_body_data(id);
        let a = orbital_position(&body, days);
        let b = orbital_position(&body, days + body.orbital_period_days);

        // Tolerance scales with the angle magnitude fed to sin/cos
        let tolerance = 1e-9 * orbit_radius(&body) * (1.0 + days / body.orbital_period_days);
        prop_assert!(
            (a - b).length() < tolerance,
            "{} not periodic at day {}: {:?} vs {:?}",
            id, days, a, b
        );
    }

    /// The orbital angle grows linearly with elapsed days.
    #[test]
    fn prop_angle_matches_fraction_of_period(
        id in any_body(),
        fraction in 0.0f64..1.0,
    ) {
        let body = get_body_data(id);
        let pos = orbital_position(&body, fraction * body.orbital_period_days);
        let angle = pos.z.atan2(pos.x).rem_euclid(TAU);
        let expected = (fraction * TAU).rem_euclid(TAU);

        let mut diff = (angle - expected).abs();
        if diff > TAU / 2.0 {
            diff = TAU - diff;
        }
        prop_assert!(diff < 1e-9, "angle {} vs expected {}", angle, expected);
    }
}
