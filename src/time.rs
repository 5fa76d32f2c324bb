//! Time advancement system for the solar system simulation.
//!
//! Handles progression of simulated days based on speed and pause state.

use bevy::prelude::*;

use crate::state::DisplayState;
use crate::types::{FrameSet, configure_frame_sets};

/// Accumulated simulated time.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct SimulationClock {
    elapsed_days: f64,
}

impl SimulationClock {
    /// Simulated days since the clock started (or was last reset).
    pub fn elapsed_days(&self) -> f64 {
        self.elapsed_days
    }

    /// Advance by one frame of wall-clock time.
    ///
    /// Speed is in simulated days per real second, so
    /// `elapsed += delta_secs * speed`. No-op while paused. Negative or
    /// non-finite deltas are dropped so the clock never runs backwards.
    pub fn advance(&mut self, delta_secs: f64, display: &DisplayState) {
        if display.paused() {
            return;
        }
        if !delta_secs.is_finite() || delta_secs <= 0.0 {
            return;
        }
        self.elapsed_days += delta_secs * display.speed_multiplier();
    }

    /// Return to day zero.
    pub fn reset(&mut self) {
        self.elapsed_days = 0.0;
        info!("Simulation clock reset");
    }
}

/// Plugin providing time advancement functionality.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        configure_frame_sets(app);
        app.init_resource::<SimulationClock>()
            .init_resource::<DisplayState>()
            .add_systems(Update, advance_clock.in_set(FrameSet::Clock));
    }
}

/// Advance the simulation clock by the frame's wall-clock delta.
pub fn advance_clock(
    mut clock: ResMut<SimulationClock>,
    display: Res<DisplayState>,
    time: Res<Time>,
) {
    clock.advance(time.delta_secs_f64(), &display);
}
