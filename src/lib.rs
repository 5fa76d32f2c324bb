//! Solar 3D - Interactive Solar System Viewer
//!
//! A library crate providing the ephemeris, simulation clock, input
//! aggregation, camera controller and display state, plus the Bevy plugins
//! that render them.

pub mod camera;
pub mod ephemeris;
pub mod input;
pub mod render;
pub mod state;
pub mod time;
pub mod types;
pub mod ui;
