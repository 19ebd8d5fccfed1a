//! The ball simulator
//!
//! Owns the single `IntegratorState` and the field it lives in.

use glam::Vec2;

use super::collision::{Field, WallContacts, enforce_boundaries};
use super::integrate::integrate;
use super::state::{IntegratorState, Phase};

/// A single ball in a fixed-size rectangular field
#[derive(Debug, Clone)]
pub struct Simulator {
    field: Field,
    state: IntegratorState,
}

impl Simulator {
    /// Create a simulator with the ball at rest in the field center
    ///
    /// Field size is fixed for the simulator's lifetime; a new layout needs a
    /// new simulator.
    pub fn new(field_width: f32, field_height: f32, radius: f32) -> Self {
        let field = Field::new(field_width, field_height, radius);
        if 2.0 * radius > field_width || 2.0 * radius > field_height {
            log::warn!(
                "Ball radius {} does not fit a {}x{} field",
                radius,
                field_width,
                field_height
            );
        }
        Self {
            field,
            state: IntegratorState::at_rest(field.center()),
        }
    }

    /// Feed one acceleration sample covering `dt` seconds
    ///
    /// The first call after construction or `reset` only primes the
    /// integrator; position and velocity are left alone.
    pub fn step(&mut self, acceleration: Vec2, dt: f32) {
        integrate(&mut self.state, acceleration, dt);
    }

    /// Clamp the ball back inside the field
    pub fn enforce_boundaries(&mut self) -> WallContacts {
        let contacts = enforce_boundaries(&mut self.state, &self.field);
        if contacts.any() {
            log::debug!("Wall contact {:?} at {}", contacts, self.state.position);
        }
        contacts
    }

    /// Return the ball to the field center at rest, unprimed
    pub fn reset(&mut self) {
        self.state = IntegratorState::at_rest(self.field.center());
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.state.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.state.velocity
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn state(&self) -> &IntegratorState {
        &self.state
    }

    pub fn field(&self) -> &Field {
        &self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_starts_centered_and_unprimed() {
        let sim = Simulator::new(1000.0, 600.0, 25.0);
        assert_eq!(sim.position(), Vec2::new(500.0, 300.0));
        assert_eq!(sim.velocity(), Vec2::ZERO);
        assert_eq!(sim.phase(), Phase::Unprimed);
    }

    #[test]
    fn test_bootstrap_then_integrate() {
        let mut sim = Simulator::new(1000.0, 1000.0, 25.0);

        sim.step(Vec2::ZERO, 0.1);
        assert_eq!(sim.position(), Vec2::new(500.0, 500.0));
        assert_eq!(sim.velocity(), Vec2::ZERO);
        assert_eq!(sim.phase(), Phase::Primed);

        sim.step(Vec2::new(10.0, 0.0), 0.1);
        assert!((sim.velocity().x - 0.5).abs() < EPS);
        assert!((sim.position().x - 500.016_67).abs() < EPS);
        assert_eq!(sim.position().y, 500.0);
    }

    #[test]
    fn test_wall_clamp_after_hard_push() {
        let mut sim = Simulator::new(1000.0, 1000.0, 25.0);
        sim.step(Vec2::new(-5000.0, 0.0), 0.1);

        // Drive the ball well past the left wall without enforcing
        let mut steps = 0;
        while sim.position().x >= 10.0 {
            sim.step(Vec2::new(-5000.0, 0.0), 0.1);
            steps += 1;
            assert!(steps < 100);
        }
        assert!(sim.velocity().x < 0.0);

        let contacts = sim.enforce_boundaries();
        assert!(contacts.left);
        assert_eq!(sim.position().x, 25.0);
        assert_eq!(sim.velocity().x, 0.0);
        assert_eq!(sim.state().last_acceleration.x, 0.0);
    }

    #[test]
    fn test_reset_rebootstraps() {
        let mut sim = Simulator::new(800.0, 400.0, 10.0);
        sim.step(Vec2::new(3.0, 4.0), 0.1);
        sim.step(Vec2::new(3.0, 4.0), 0.1);
        sim.step(Vec2::new(3.0, 4.0), 0.1);
        sim.enforce_boundaries();
        assert_ne!(sim.velocity(), Vec2::ZERO);

        sim.reset();
        assert_eq!(sim.position(), Vec2::new(400.0, 200.0));
        assert_eq!(sim.velocity(), Vec2::ZERO);
        assert_eq!(sim.state().last_acceleration, Vec2::ZERO);
        assert_eq!(sim.phase(), Phase::Unprimed);

        // Next step is a bootstrap again
        sim.step(Vec2::new(100.0, 100.0), 1.0);
        assert_eq!(sim.position(), Vec2::new(400.0, 200.0));
        assert_eq!(sim.velocity(), Vec2::ZERO);
        assert_eq!(sim.phase(), Phase::Primed);
    }

    #[test]
    fn test_enforce_does_not_change_phase() {
        let mut sim = Simulator::new(100.0, 100.0, 5.0);
        sim.enforce_boundaries();
        assert_eq!(sim.phase(), Phase::Unprimed);
        sim.step(Vec2::ZERO, 0.1);
        sim.enforce_boundaries();
        assert_eq!(sim.phase(), Phase::Primed);
    }
}
