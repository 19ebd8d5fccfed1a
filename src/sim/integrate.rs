//! Two-sample integration step
//!
//! Updates are consistent with a linearly interpolated acceleration profile
//! between consecutive samples:
//!
//! - velocity: `v1 = v0 + ½(a0 + a1)·dt` (trapezoid)
//! - displacement: `Δp = v0·dt + ⅙(3·a0 + a1)·dt²`
//!
//! The displacement weights the older sample more heavily; with `a0 == a1`
//! it is `⅔·a·dt²`, not the closed-form `½·a·dt²`.

use glam::Vec2;

use super::state::{IntegratorState, Phase};

/// Advance `state` by one acceleration sample covering `dt` seconds
///
/// An unprimed state only records `acceleration` and becomes primed. Inputs
/// are not validated; NaN or negative `dt` propagate into the state.
pub fn integrate(state: &mut IntegratorState, acceleration: Vec2, dt: f32) {
    match state.phase {
        Phase::Unprimed => {
            state.last_acceleration = acceleration;
            state.phase = Phase::Primed;
        }
        Phase::Primed => {
            let a0 = state.last_acceleration;
            let a1 = acceleration;
            let v0 = state.velocity;

            let new_velocity = v0 + 0.5 * (a0 + a1) * dt;
            let displacement = v0 * dt + (1.0 / 6.0) * (3.0 * a0 + a1) * dt * dt;

            state.position += displacement;
            state.velocity = new_velocity;
            state.last_acceleration = a1;
        }
    }
}
