// src/policy.rs

//! # Vertical-Motion Policy Module
//!
//! This module provides the algorithmic leaves of the depth-hold core: the
//! takeoff velocity-ramp generator, the climb-rate blending rule, the
//! debounced heading-hold state machine, and the depth-constraint target
//! selection policy.

pub mod blend;
pub use blend::*;
pub mod depth;
pub use depth::*;
pub mod heading;
pub use heading::*;
pub mod takeoff;
pub use takeoff::*;
