//! Synthetic heading derivation from successive position samples.
//!
//! Many games report position without facing. When a sample carries no
//! explicit heading, the estimator derives one from displacement versus the
//! previous sample - but only when the player actually moved. Sub-threshold
//! jitter keeps the previous heading so the compass needle doesn't wander
//! while standing still.

use crate::coord::{CoordinateData, CoordinateSystem};

use super::{bearing_between, planar_distance};

/// Minimum displacement (coordinate units) before a new heading is derived.
const DEFAULT_MOVEMENT_THRESHOLD: f64 = 1.0;

/// Configuration for heading estimation.
#[derive(Debug, Clone)]
pub struct HeadingEstimatorConfig {
    /// Displacement below this keeps the previous heading.
    pub movement_threshold: f64,
}

impl Default for HeadingEstimatorConfig {
    fn default() -> Self {
        Self {
            movement_threshold: DEFAULT_MOVEMENT_THRESHOLD,
        }
    }
}

/// Attaches headings to position samples that arrive without one.
///
/// Samples carrying an explicit heading pass through verbatim; they still
/// update the remembered last sample.
#[derive(Debug, Default)]
pub struct HeadingEstimator {
    config: HeadingEstimatorConfig,
    last: Option<CoordinateData>,
}

impl HeadingEstimator {
    pub fn new() -> Self {
        Self::with_config(HeadingEstimatorConfig::default())
    }

    pub fn with_config(config: HeadingEstimatorConfig) -> Self {
        Self { config, last: None }
    }

    /// Resolve the heading for a new current-position sample.
    ///
    /// Returns the sample with its heading filled in where possible; the
    /// returned sample becomes the remembered previous sample.
    pub fn observe(
        &mut self,
        sample: CoordinateData,
        system: CoordinateSystem,
    ) -> CoordinateData {
        let mut resolved = sample;

        if resolved.heading.is_none() {
            if let Some(prev) = self.last {
                let moved = planar_distance(&prev, &resolved);
                if moved >= self.config.movement_threshold {
                    let derived = bearing_between(prev.x, prev.y, resolved.x, resolved.y, system);
                    tracing::trace!(moved, heading = derived, "derived heading from movement");
                    resolved.heading = Some(derived);
                } else {
                    // Stationary: keep facing whichever way we last faced.
                    resolved.heading = prev.heading;
                }
            }
        }

        self.last = Some(resolved);
        resolved
    }

    /// The most recently observed sample, heading resolved.
    pub fn last_sample(&self) -> Option<CoordinateData> {
        self.last
    }

    /// Forget the previous sample (profile switch, teleport).
    pub fn reset(&mut self) {
        self.last = None;
    }
}
