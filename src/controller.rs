// src/controller.rs

//! # Vertical-Motion Controller Module
//!
//! This module provides the per-tick orchestrator composing the takeoff
//! ramp, climb-rate blending, heading hold, and depth constraints into the
//! depth-hold control behavior, driving the external attitude and position
//! controllers through the contracts in [`crate::vehicle`].

pub mod depth_hold;
pub use depth_hold::*;
