// src/policy/blend.rs

//! # Climb-Rate Blending Module
//!
//! This module provides the pure rule that merges a pilot-commanded climb
//! rate with a takeoff-ramp climb rate into a single commanded climb rate,
//! with asymmetric handling by sign. A descent command eats into the ramp
//! contribution before it may win outright; a climb command only counts for
//! its excess above the ramp, so the two contributions are never
//! double-applied.

use crate::vehicle::Number;

/// A blended pair of climb-rate contributions in cm/s.
///
/// After [`blend_climb_rates`], `takeoff` is the contribution attributed to
/// the ramp and `pilot` the remainder attributed to the pilot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClimbRateBlend<T> {
    /// Contribution attributed to the pilot.
    pub pilot: T,
    /// Contribution attributed to the takeoff ramp.
    pub takeoff: T,
}

impl<T: Number> ClimbRateBlend<T> {
    /// The net climb rate the vehicle should actually achieve.
    pub fn net(&self) -> T {
        self.pilot + self.takeoff
    }
}

/// Blends a pilot climb rate with a takeoff-ramp climb rate.
///
/// Rules, in order:
/// - a non-positive `takeoff` rate passes both values through unchanged;
/// - a pilot descent command is absorbed by the ramp while the combination
///   stays net-positive, and wins the whole combination once it does not;
/// - a pilot climb command contributes only its excess above the ramp rate.
pub fn blend_climb_rates<T: Number>(pilot: T, takeoff: T) -> ClimbRateBlend<T> {
    if takeoff <= T::zero() {
        return ClimbRateBlend { pilot, takeoff };
    }

    if pilot < T::zero() {
        if takeoff + pilot > T::zero() {
            // Overall rate still positive: attribute it all to the ramp.
            ClimbRateBlend {
                pilot: T::zero(),
                takeoff: takeoff + pilot,
            }
        } else {
            // Descent wins: attribute the full sum to the pilot.
            ClimbRateBlend {
                pilot: pilot + takeoff,
                takeoff: T::zero(),
            }
        }
    } else {
        // Pilot climb only counts for the excess above the ramp rate.
        ClimbRateBlend {
            pilot: (pilot - takeoff).max(T::zero()),
            takeoff,
        }
    }
}
