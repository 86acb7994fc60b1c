// src/lib.rs

//! # Depth-Hold Vertical Motion Control
//!
//! This module provides a `no_std`, no-alloc Rust implementation of the
//! vertical-motion control core used by depth-hold capable flight modes on
//! underwater remotely-operated vehicles (ROVs). It converts pilot stick
//! input, depth/altitude estimates, and optional rangefinder data into a
//! commanded climb rate and attitude target once per control-loop tick
//! (100 Hz or faster), and owns the takeoff velocity-ramp generator and the
//! rule that merges a takeoff climb rate with a pilot climb rate.
//!
//! Attitude control, position control, motor mixing, and sensing are
//! external collaborators reached through the narrow traits in [`vehicle`];
//! this crate never blocks, sleeps, or touches a clock — callers pass
//! monotonic time into every stateful operation.

#![no_std]
#![deny(missing_docs)]

pub mod controller;
pub mod policy;
pub mod vehicle;

#[doc(inline)]
pub use controller::*;

#[cfg(test)]
mod test_utils;
