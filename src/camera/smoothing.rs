//! Frame-rate independent exponential smoothing.

use bevy::prelude::*;

/// Blend factor for one frame of exponential smoothing.
///
/// `base` is the fraction of the remaining distance left after one second,
/// so `alpha = 1 - base^dt`. Applying this over many small frames gives the
/// same result as one large frame of the same total length.
pub fn time_constant_alpha(base: f32, delta_secs: f32) -> f32 {
    if !delta_secs.is_finite() || delta_secs <= 0.0 {
        return 0.0;
    }
    (1.0 - base.clamp(0.0, 1.0).powf(delta_secs)).clamp(0.0, 1.0)
}

/// Move `current` towards `target` by one frame of smoothing.
pub fn smooth_towards(current: Vec3, target: Vec3, base: f32, delta_secs: f32) -> Vec3 {
    current.lerp(target, time_constant_alpha(base, delta_secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_delta_holds_still() {
        assert_eq!(time_constant_alpha(0.001, 0.0), 0.0);
        assert_eq!(time_constant_alpha(0.001, -0.5), 0.0);
        assert_eq!(time_constant_alpha(0.001, f32::NAN), 0.0);
    }

    #[test]
    fn test_one_second_leaves_base_fraction() {
        let start = Vec3::new(10.0, 0.0, 0.0);
        let end = smooth_towards(start, Vec3::ZERO, 0.001, 1.0);
        assert_relative_eq!(end.x, 0.01, epsilon = 1e-5);
    }

    #[test]
    fn test_split_frames_match_single_frame() {
        let start = Vec3::new(30.0, 18.0, 30.0);
        let target = Vec3::new(-4.0, 1.2, 7.5);

        let whole = smooth_towards(start, target, 0.001, 0.1);
        let mut split = start;
        for _ in 0..10 {
            split = smooth_towards(split, target, 0.001, 0.01);
        }

        assert_relative_eq!(whole.x, split.x, epsilon = 1e-3);
        assert_relative_eq!(whole.y, split.y, epsilon = 1e-3);
        assert_relative_eq!(whole.z, split.z, epsilon = 1e-3);
    }
}
