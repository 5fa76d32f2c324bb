//! Selection and display state shared by the HUD, camera and scene.
//!
//! Fields are private: every change goes through a named mutator so that
//! writes can be logged and clamped in one place.

use bevy::prelude::*;

use crate::camera::CameraMode;
use crate::ephemeris::CelestialBodyId;

/// Inclusive bounds for the simulation speed (simulated days per second).
pub const SPEED_MULTIPLIER_RANGE: (f64, f64) = (1.0, 200.0);

/// Inclusive bounds for free-fly and chase movement speed.
pub const FREE_CAMERA_SPEED_RANGE: (f32, f32) = (10.0, 200.0);

/// Body selected on startup and by [`DisplayState::reset_camera`].
pub const DEFAULT_SELECTION: CelestialBodyId = CelestialBodyId::Earth;

/// Process-wide UI state.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct DisplayState {
    selected: Option<CelestialBodyId>,
    show_orbits: bool,
    show_labels: bool,
    paused: bool,
    speed_multiplier: f64,
    hi_res_textures: bool,
    camera_mode: CameraMode,
    free_camera_speed: f32,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            selected: Some(DEFAULT_SELECTION),
            show_orbits: true,
            show_labels: true,
            paused: false,
            speed_multiplier: 20.0,
            hi_res_textures: false,
            camera_mode: CameraMode::OrbitFollow,
            free_camera_speed: 50.0,
        }
    }
}

impl DisplayState {
    pub fn selected(&self) -> Option<CelestialBodyId> {
        self.selected
    }

    pub fn set_selected(&mut self, selected: Option<CelestialBodyId>) {
        if self.selected != selected {
            debug!("Selected {:?}", selected);
        }
        self.selected = selected;
    }

    pub fn show_orbits(&self) -> bool {
        self.show_orbits
    }

    pub fn toggle_orbits(&mut self) {
        self.show_orbits = !self.show_orbits;
    }

    pub fn show_labels(&self) -> bool {
        self.show_labels
    }

    pub fn toggle_labels(&mut self) {
        self.show_labels = !self.show_labels;
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
        info!("Simulation {}", if self.paused { "paused" } else { "running" });
    }

    /// Simulated days per wall-clock second.
    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    /// Set the simulation speed, clamped to [`SPEED_MULTIPLIER_RANGE`].
    ///
    /// NaN is ignored and leaves the current value in place.
    pub fn set_speed_multiplier(&mut self, speed: f64) {
        if speed.is_nan() {
            warn!("Ignoring NaN speed multiplier");
            return;
        }
        let (min, max) = SPEED_MULTIPLIER_RANGE;
        self.speed_multiplier = speed.clamp(min, max);
        debug!("Speed multiplier: {}x", self.speed_multiplier);
    }

    pub fn hi_res_textures(&self) -> bool {
        self.hi_res_textures
    }

    pub fn toggle_hi_res_textures(&mut self) {
        self.hi_res_textures = !self.hi_res_textures;
    }

    pub fn camera_mode(&self) -> CameraMode {
        self.camera_mode
    }

    pub fn set_camera_mode(&mut self, mode: CameraMode) {
        if self.camera_mode != mode {
            info!("Camera mode: {}", mode.label());
        }
        self.camera_mode = mode;
    }

    /// Advance to the next mode in the fixed cycle.
    pub fn cycle_camera_mode(&mut self) {
        self.set_camera_mode(self.camera_mode.next());
    }

    /// Movement speed for free-fly and chase, in scene units per second (before the 0.5 factor).
    pub fn free_camera_speed(&self) -> f32 {
        self.free_camera_speed
    }

    /// Set the free camera speed, clamped to [`FREE_CAMERA_SPEED_RANGE`].
    ///
    /// NaN is ignored and leaves the current value in place.
    pub fn set_free_camera_speed(&mut self, speed: f32) {
        if speed.is_nan() {
            warn!("Ignoring NaN free camera speed");
            return;
        }
        let (min, max) = FREE_CAMERA_SPEED_RANGE;
        self.free_camera_speed = speed.clamp(min, max);
    }

    /// Follow the default body again. Does not touch the simulation clock.
    pub fn reset_camera(&mut self) {
        self.set_selected(Some(DEFAULT_SELECTION));
        self.set_camera_mode(CameraMode::OrbitFollow);
    }
}
