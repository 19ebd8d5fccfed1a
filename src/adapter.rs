//! Sensor sample adapter
//!
//! Sits between a sensor callback and the simulator:
//! - derives `dt` from consecutive sample timestamps
//! - maps device axes onto field axes (device +y points out of the screen,
//!   field +y points down)
//! - publishes the ball position to registered observers
//!
//! The adapter is the simulator's only owner. It is `Send`, so a host that
//! receives samples on several threads can wrap it in `Arc<Mutex<_>>`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::ACCELERATION_SCALE;
use crate::nanos_to_seconds;
use crate::settings::Settings;
use crate::sim::{Simulator, WallContacts};

/// Kind of sensor a sample came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensorKind {
    /// Gravity vector only, the one that drives the ball
    Gravity,
    /// Raw accelerometer, includes linear motion
    Accelerometer,
    /// Anything else the platform delivers
    Other,
}

/// A raw sensor reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorSample {
    pub kind: SensorKind,
    /// Monotonic timestamp, nanoseconds
    pub timestamp: i64,
    /// Device x axis (m/s²)
    pub x: f32,
    /// Device y axis (m/s²)
    pub y: f32,
}

impl SensorSample {
    pub fn gravity(timestamp: i64, x: f32, y: f32) -> Self {
        Self {
            kind: SensorKind::Gravity,
            timestamp,
            x,
            y,
        }
    }
}

/// Handling of non-finite or degenerate samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputGuard {
    /// Feed everything to the simulator; NaN and negative `dt` propagate
    #[default]
    Propagate,
    /// Drop samples with non-finite axes or a non-positive `dt`
    Reject,
}

/// What a single `on_sample` call did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleOutcome {
    /// No field yet, not a gravity sample: nothing touched
    Ignored,
    /// First sample since start or reset; timestamp recorded only
    Bootstrapped,
    /// Dropped by `InputGuard::Reject`; timestamp still recorded
    Rejected,
    /// Simulator stepped and position published, with any walls hit
    Published(Vec2, WallContacts),
}

type Observer = Box<dyn FnMut(Vec2) + Send>;

/// Turns sensor samples into simulator steps and position updates
pub struct SampleAdapter {
    simulator: Option<Simulator>,
    /// Timestamp of the previous gravity sample, `None` before the first
    last_timestamp: Option<i64>,
    acceleration_scale: f32,
    guard: InputGuard,
    /// Most recently published position
    position: Vec2,
    observers: Vec<Observer>,
}

impl Default for SampleAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SampleAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SampleAdapter")
            .field("simulator", &self.simulator)
            .field("last_timestamp", &self.last_timestamp)
            .field("acceleration_scale", &self.acceleration_scale)
            .field("guard", &self.guard)
            .field("position", &self.position)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl SampleAdapter {
    pub fn new() -> Self {
        Self {
            simulator: None,
            last_timestamp: None,
            acceleration_scale: ACCELERATION_SCALE,
            guard: InputGuard::default(),
            position: Vec2::ZERO,
            observers: Vec::new(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            acceleration_scale: settings.acceleration_scale,
            guard: settings.input_guard,
            ..Self::new()
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.acceleration_scale = scale;
        self
    }

    pub fn with_guard(mut self, guard: InputGuard) -> Self {
        self.guard = guard;
        self
    }

    /// Register an observer for position updates
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(Vec2) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Create the simulator once the field size is known
    ///
    /// `ball_size` is the ball diameter. Only the first call takes effect;
    /// returns whether this call created the simulator.
    pub fn init_field(&mut self, width: f32, height: f32, ball_size: f32) -> bool {
        if self.simulator.is_some() {
            log::debug!("Field already initialized, ignoring {}x{}", width, height);
            return false;
        }

        let sim = Simulator::new(width, height, ball_size / 2.0);
        log::info!(
            "Field {}x{} initialized, ball size {}, start {}",
            width,
            height,
            ball_size,
            sim.position()
        );
        let center = sim.position();
        self.simulator = Some(sim);
        self.publish(center);
        true
    }

    /// Map device axes to field acceleration
    #[inline]
    pub fn map_axes(&self, raw_x: f32, raw_y: f32) -> Vec2 {
        Vec2::new(-raw_x * self.acceleration_scale, raw_y * self.acceleration_scale)
    }

    /// Handle one sensor sample
    pub fn on_sample(&mut self, sample: &SensorSample) -> SampleOutcome {
        if sample.kind != SensorKind::Gravity {
            return SampleOutcome::Ignored;
        }
        if self.simulator.is_none() {
            return SampleOutcome::Ignored;
        }

        // Always remember the newest timestamp, even for degenerate intervals
        let Some(last) = self.last_timestamp.replace(sample.timestamp) else {
            log::debug!("First sample at {} ns, timing bootstrapped", sample.timestamp);
            return SampleOutcome::Bootstrapped;
        };

        let dt = nanos_to_seconds(sample.timestamp.wrapping_sub(last));
        let acceleration = self.map_axes(sample.x, sample.y);

        if self.guard == InputGuard::Reject && !is_usable(acceleration, dt) {
            log::warn!("Rejected sample: acceleration {}, dt {}s", acceleration, dt);
            return SampleOutcome::Rejected;
        }

        let Some(sim) = self.simulator.as_mut() else {
            return SampleOutcome::Ignored;
        };
        sim.step(acceleration, dt);
        let contacts = sim.enforce_boundaries();
        let position = sim.position();
        log::debug!("dt {:.4}s accel {} -> pos {}", dt, acceleration, position);
        for wall in contacts.walls() {
            log::debug!("Ball stopped by {:?} wall", wall);
        }

        self.publish(position);
        SampleOutcome::Published(position, contacts)
    }

    /// Recenter the ball and restart timing
    ///
    /// Publishes the center position. Does nothing before `init_field`.
    pub fn reset(&mut self) {
        self.last_timestamp = None;
        let Some(sim) = self.simulator.as_mut() else {
            return;
        };
        sim.reset();
        let center = sim.position();
        log::info!("Ball reset to {}", center);
        self.publish(center);
    }

    /// Most recently published position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn simulator(&self) -> Option<&Simulator> {
        self.simulator.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.simulator.is_some()
    }

    fn publish(&mut self, position: Vec2) {
        self.position = position;
        for observer in &mut self.observers {
            observer(position);
        }
    }
}

fn is_usable(acceleration: Vec2, dt: f32) -> bool {
    acceleration.is_finite() && dt.is_finite() && dt > 0.0
}
