//! Ball simulation module
//!
//! Everything kinematic lives here. This module must stay pure:
//! - Caller-supplied `dt` only, no clocks
//! - No rendering, sensor or platform dependencies
//! - Single writer, no interior mutability

pub mod collision;
pub mod integrate;
pub mod simulator;
pub mod state;

pub use collision::{Field, Wall, WallContacts, enforce_boundaries};
pub use integrate::integrate;
pub use simulator::Simulator;
pub use state::{IntegratorState, Phase};
