//! Per-frame processing.
//!
//! - [`Frame`] - One detector output: frame size plus raw [`Prediction`]s in pixels
//! - [`Detection`] - A prediction reduced to its color and normalized center
//! - [`GameState`] - Per-zone tile colors classified from one frame's detections
//!
//! # Frame Flow
//!
//! 1. The detector hands over a [`Frame`]
//! 2. [`Frame::detections`] divides every box center by the frame size
//! 3. [`GameState::classify`] tests each center against every zone of the catalog
//! 4. The resulting [`GameState`] replaces the previous one wholesale
//!
//! No state survives from one frame to the next.

pub use self::{frame::*, game_state::*};

mod frame;
mod game_state;
