//! Integrator state
//!
//! The only mutable kinematic data in the crate. Owned by exactly one
//! `Simulator` for its whole lifetime.

use glam::Vec2;

/// Priming phase of the integrator
///
/// The integration scheme pairs each acceleration sample with the one before
/// it, so the very first sample after construction or reset can only be
/// remembered, not integrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No acceleration sample absorbed yet
    #[default]
    Unprimed,
    /// `last_acceleration` holds a real sample
    Primed,
}

/// Position, velocity and the acceleration carried between steps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegratorState {
    /// Field coordinates, origin top-left, +y down
    pub position: Vec2,
    /// Field units per second
    pub velocity: Vec2,
    /// Acceleration supplied by the previous step
    pub last_acceleration: Vec2,
    pub phase: Phase,
}

impl IntegratorState {
    /// Fresh state at rest at `position`, waiting for its first sample
    pub fn at_rest(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            last_acceleration: Vec2::ZERO,
            phase: Phase::Unprimed,
        }
    }

    #[inline]
    pub fn is_primed(&self) -> bool {
        self.phase == Phase::Primed
    }
}
