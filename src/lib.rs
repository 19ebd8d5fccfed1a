//! Tilt Ball - a ball rolling around a rectangular field under device tilt
//!
//! Core modules:
//! - `sim`: Integrator state, stepping and wall containment
//! - `adapter`: Sensor samples in, published positions out
//! - `source`: Deterministic synthetic gravity sensor
//! - `settings`: Data-driven configuration

pub mod adapter;
pub mod settings;
pub mod sim;
pub mod source;

pub use adapter::{InputGuard, SampleAdapter, SampleOutcome, SensorKind, SensorSample};
pub use settings::{Settings, SettingsError};
pub use sim::{Phase, Simulator};

/// Configuration constants
pub mod consts {
    /// Device acceleration (m/s²) to field units (px/s²)
    pub const ACCELERATION_SCALE: f32 = 25.0;
    /// Default ball diameter in field units
    pub const BALL_SIZE: f32 = 50.0;
    /// Sensor timestamps are nanoseconds
    pub const NANOS_PER_SECOND: f32 = 1_000_000_000.0;
    /// Standard gravity, the magnitude a gravity sensor reports at rest
    pub const STANDARD_GRAVITY: f32 = 9.80665;
}

/// Convert a nanosecond interval to seconds
#[inline]
pub fn nanos_to_seconds(nanos: i64) -> f32 {
    nanos as f32 / consts::NANOS_PER_SECOND
}
