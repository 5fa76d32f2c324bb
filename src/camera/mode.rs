//! Camera mode selection.

/// How the main camera is driven.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CameraMode {
    /// Orbit interaction with smoothed tracking of the selected body.
    #[default]
    OrbitFollow,
    /// First-person flight with pointer look.
    FreeFly,
    /// Third-person view trailing the spaceship.
    Chase,
}

impl CameraMode {
    /// All modes, in cycle order.
    pub const ALL: [CameraMode; 3] = [
        CameraMode::OrbitFollow,
        CameraMode::FreeFly,
        CameraMode::Chase,
    ];

    /// Next mode in the cycle OrbitFollow -> FreeFly -> Chase -> OrbitFollow.
    pub fn next(self) -> Self {
        match self {
            CameraMode::OrbitFollow => CameraMode::FreeFly,
            CameraMode::FreeFly => CameraMode::Chase,
            CameraMode::Chase => CameraMode::OrbitFollow,
        }
    }

    /// Whether this mode takes pointer capture and keyboard movement.
    pub fn captures_pointer(self) -> bool {
        matches!(self, CameraMode::FreeFly | CameraMode::Chase)
    }

    pub fn label(self) -> &'static str {
        match self {
            CameraMode::OrbitFollow => "Orbit",
            CameraMode::FreeFly => "Free Fly",
            CameraMode::Chase => "Chase",
        }
    }
}
