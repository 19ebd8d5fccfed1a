//! Deterministic synthetic gravity sensor
//!
//! Stands in for a real device when running natively: the in-plane gravity
//! vector slowly turns (the device being tilted around) and samples arrive
//! at jittered intervals, like real sensor timestamps.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::adapter::SensorSample;
use crate::settings::SourceSettings;

/// Seeded iterator of gravity samples
#[derive(Debug, Clone)]
pub struct TiltSource {
    rng: Pcg32,
    /// Next sample timestamp (ns)
    timestamp: i64,
    /// Current tilt direction (radians)
    angle: f32,
    remaining: u32,
    mean_interval_ns: f32,
    jitter: f32,
    tilt: f32,
    turn_rate: f32,
}

impl TiltSource {
    pub fn new(settings: &SourceSettings) -> Self {
        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        Self {
            rng,
            timestamp: 0,
            angle,
            remaining: settings.samples,
            mean_interval_ns: settings.mean_interval_ms * 1_000_000.0,
            jitter: settings.jitter.clamp(0.0, 1.0),
            tilt: settings.tilt,
            turn_rate: settings.turn_rate,
        }
    }

    /// Interval to the next sample, mean ± jitter
    fn next_interval(&mut self) -> i64 {
        let spread = if self.jitter > 0.0 {
            self.rng.random_range(-self.jitter..=self.jitter)
        } else {
            0.0
        };
        (self.mean_interval_ns * (1.0 + spread)).max(1.0) as i64
    }
}

impl Iterator for TiltSource {
    type Item = SensorSample;

    fn next(&mut self) -> Option<SensorSample> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let sample = SensorSample::gravity(
            self.timestamp,
            self.tilt * self.angle.cos(),
            self.tilt * self.angle.sin(),
        );

        let interval = self.next_interval();
        self.timestamp = self.timestamp.saturating_add(interval);
        // Wobble the turn rate a little so the path is not a perfect circle
        let wobble = self.rng.random_range(0.5..1.5);
        self.angle += self.turn_rate * wobble * crate::nanos_to_seconds(interval);

        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::SensorKind;

    #[test]
    fn test_sample_count() {
        let settings = SourceSettings {
            samples: 42,
            ..SourceSettings::default()
        };
        assert_eq!(TiltSource::new(&settings).count(), 42);
    }

    #[test]
    fn test_deterministic() {
        let settings = SourceSettings::default();
        let a: Vec<_> = TiltSource::new(&settings).collect();
        let b: Vec<_> = TiltSource::new(&settings).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_timestamps_increase_irregularly() {
        let settings = SourceSettings {
            samples: 100,
            mean_interval_ms: 20.0,
            jitter: 0.5,
            ..SourceSettings::default()
        };
        let samples: Vec<_> = TiltSource::new(&settings).collect();
        let intervals: Vec<i64> = samples
            .windows(2)
            .map(|w| w[1].timestamp - w[0].timestamp)
            .collect();

        assert!(intervals.iter().all(|&i| i >= 10_000_000 && i <= 30_000_000));
        assert!(intervals.iter().any(|&i| i != intervals[0]));
        assert!(samples.iter().all(|s| s.kind == SensorKind::Gravity));
    }

    #[test]
    fn test_tilt_magnitude() {
        let settings = SourceSettings {
            tilt: 3.0,
            ..SourceSettings::default()
        };
        for sample in TiltSource::new(&settings).take(50) {
            let magnitude = (sample.x * sample.x + sample.y * sample.y).sqrt();
            assert!((magnitude - 3.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_huge_interval_saturates_timestamp() {
        let settings = SourceSettings {
            samples: 3,
            mean_interval_ms: 1e30,
            jitter: 0.0,
            ..SourceSettings::default()
        };
        let samples: Vec<_> = TiltSource::new(&settings).collect();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].timestamp, 0);
        assert_eq!(samples[1].timestamp, i64::MAX);
        assert_eq!(samples[2].timestamp, i64::MAX);
    }

    #[test]
    fn test_no_jitter_is_regular() {
        let settings = SourceSettings {
            samples: 10,
            jitter: 0.0,
            mean_interval_ms: 16.0,
            ..SourceSettings::default()
        };
        let samples: Vec<_> = TiltSource::new(&settings).collect();
        assert!(samples.windows(2).all(|w| w[1].timestamp - w[0].timestamp == 16_000_000));
    }
}
