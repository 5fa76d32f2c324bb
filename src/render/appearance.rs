//! Per-body surface appearance.

use bevy::prelude::*;

use crate::ephemeris::CelestialBodyId;

/// Material parameters for one body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyAppearance {
    pub color: Color,
    pub roughness: f32,
    pub metalness: f32,
    /// Glow color, black for none.
    pub emissive: Color,
    pub emissive_intensity: f32,
}

impl BodyAppearance {
    const fn new(color: Color, roughness: f32, metalness: f32) -> Self {
        Self {
            color,
            roughness,
            metalness,
            emissive: Color::BLACK,
            emissive_intensity: 0.0,
        }
    }

    const fn glowing(mut self, emissive: Color, intensity: f32) -> Self {
        self.emissive = emissive;
        self.emissive_intensity = intensity;
        self
    }

    pub fn material(&self) -> StandardMaterial {
        StandardMaterial {
            base_color: self.color,
            perceptual_roughness: self.roughness,
            metallic: self.metalness,
            emissive: self.emissive.to_linear() * self.emissive_intensity,
            ..default()
        }
    }
}

/// sRGB color from a `0xRRGGBB` literal.
fn hex(rgb: u32) -> Color {
    Color::srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Appearance table entry for a body.
pub fn body_appearance(id: CelestialBodyId) -> BodyAppearance {
    match id {
        // Heavily cratered
        CelestialBodyId::Mercury => BodyAppearance::new(hex(0xb2b2b2), 0.98, 0.1),
        CelestialBodyId::Venus => BodyAppearance::new(hex(0xd9c28f), 0.6, 0.0)
            .glowing(hex(0xff6b35), 0.25),
        CelestialBodyId::Earth => BodyAppearance::new(hex(0x6db7ff), 0.4, 0.0),
        CelestialBodyId::Mars => BodyAppearance::new(hex(0xc1440e), 0.95, 0.05),
        // Gas giants
        CelestialBodyId::Jupiter => BodyAppearance::new(hex(0xd2ad7c), 0.1, 0.0)
            .glowing(hex(0xff8c42), 0.3),
        CelestialBodyId::Saturn => BodyAppearance::new(hex(0xe6d19c), 0.2, 0.0)
            .glowing(hex(0xffd700), 0.2),
        // Ice giants
        CelestialBodyId::Uranus => BodyAppearance::new(hex(0xa6e1e3), 0.3, 0.0)
            .glowing(hex(0x87ceeb), 0.15),
        CelestialBodyId::Neptune => BodyAppearance::new(hex(0x6a8cff), 0.4, 0.0)
            .glowing(hex(0x4169e1), 0.2),
        CelestialBodyId::Pluto => BodyAppearance::new(hex(0xbfae9a), 0.99, 0.0),
    }
}

/// One band of a ring system, in multiples of the body's display radius.
#[derive(Clone, Copy, Debug)]
pub struct RingBand {
    pub inner: f32,
    pub outer: f32,
    pub color: Color,
    pub alpha: f32,
    pub roughness: f32,
    pub metalness: f32,
}

/// Saturn's ring bands, inner to outer.
pub const RING_BANDS: [RingBand; 3] = [
    RingBand {
        inner: 1.4,
        outer: 1.8,
        color: Color::srgb(0.831, 0.686, 0.216),
        alpha: 0.9,
        roughness: 0.2,
        metalness: 0.2,
    },
    RingBand {
        inner: 1.8,
        outer: 2.0,
        color: Color::srgb(0.957, 0.894, 0.737),
        alpha: 0.7,
        roughness: 0.3,
        metalness: 0.1,
    },
    RingBand {
        inner: 2.0,
        outer: 2.4,
        color: Color::srgb(0.902, 0.82, 0.612),
        alpha: 0.5,
        roughness: 0.4,
        metalness: 0.05,
    },
];
