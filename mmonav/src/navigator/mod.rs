//! Navigation session - profile snapshot + target + live position → guidance.
//!
//! The [`Navigator`] is the policy layer on top of the parsing and math
//! modules. It owns an immutable profile snapshot, the current target, the
//! saved-location list and the heading-estimation memory. Feeding it an
//! observed position produces a [`NavigationUpdate`] value; there are no
//! change subscriptions - swapping the profile or target is an explicit call
//! and takes effect on the next observation.

mod locations;

pub use locations::{find_location, LocationItem};

use crate::coord::{parse_coordinates, CoordinateData};
use crate::nav::{
    bearing_between, planar_distance, turn_correction, CompassPoint, HeadingEstimator,
    TurnDirection,
};
use crate::profile::GameProfile;

/// Within this distance the target counts as close (UI layers typically
/// change emphasis here).
const PROXIMITY_DISTANCE: f64 = 100.0;

/// Within this distance the player has arrived.
const ARRIVAL_DISTANCE: f64 = 10.0;

/// Heading-vs-bearing tolerances for alignment quality, in degrees.
const HEADING_TOLERANCE_PERFECT: f64 = 2.0;
const HEADING_TOLERANCE_GOOD: f64 = 4.0;
const HEADING_TOLERANCE_FAIR: f64 = 6.0;

/// How well the player's facing lines up with the bearing to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingQuality {
    /// Within 2° of the target bearing (or already arrived).
    Perfect,
    /// Within 4°.
    Good,
    /// Within 6°.
    Fair,
    /// More than 6° off.
    Poor,
}

/// How far away the target is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proximity {
    /// Within arrival distance - stop navigating.
    Arrived,
    /// Getting close.
    Near,
    Far,
}

impl Proximity {
    fn from_distance(distance: f64) -> Self {
        if distance <= ARRIVAL_DISTANCE {
            Self::Arrived
        } else if distance <= PROXIMITY_DISTANCE {
            Self::Near
        } else {
            Self::Far
        }
    }
}

/// One guidance result for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationUpdate {
    /// The observed position, heading resolved by estimation where needed.
    pub current: CoordinateData,
    pub target: CoordinateData,
    /// Compass bearing from current position to target, `[0, 360)`.
    pub bearing: f64,
    /// Straight-line distance in the X/Y plane; display layers round it.
    pub distance: f64,
    pub compass: CompassPoint,
    /// Which way to turn to face the target; straight when no facing is
    /// known or the facing is within the dead zone.
    pub turn: TurnDirection,
    /// Alignment quality, present only when a facing is known or the player
    /// has arrived.
    pub heading_quality: Option<HeadingQuality>,
    pub proximity: Proximity,
}

/// Stateful navigation session.
pub struct Navigator {
    profile: GameProfile,
    estimator: HeadingEstimator,
    locations: Vec<LocationItem>,
    target_entry: Option<String>,
    target: Option<CoordinateData>,
}

impl Navigator {
    pub fn new(profile: GameProfile) -> Self {
        Self {
            profile,
            estimator: HeadingEstimator::new(),
            locations: Vec::new(),
            target_entry: None,
            target: None,
        }
    }

    pub fn profile(&self) -> &GameProfile {
        &self.profile
    }

    /// Swap in a new profile snapshot. The target entry is re-parsed under
    /// the new coordinate order and the movement memory is cleared - a new
    /// game means previous positions are meaningless.
    pub fn set_profile(&mut self, profile: GameProfile) {
        self.profile = profile;
        self.estimator.reset();
        if let Some(entry) = self.target_entry.clone() {
            self.set_target(&entry);
        }
    }

    /// Provide the saved-location list used to resolve target entries.
    pub fn set_locations(&mut self, locations: Vec<LocationItem>) {
        self.locations = locations;
    }

    pub fn locations(&self) -> &[LocationItem] {
        &self.locations
    }

    /// Set the navigation target from free text.
    ///
    /// The entry may be a saved location's name, a saved location's
    /// coordinates in any separator style, or raw coordinate text. Returns
    /// true when a target coordinate was resolved; on failure the previous
    /// target is cleared so stale guidance is never produced.
    pub fn set_target(&mut self, entry: &str) -> bool {
        let resolved = find_location(&self.locations, entry)
            .map(|l| l.coordinates.clone())
            .unwrap_or_else(|| entry.to_string());

        self.target = parse_coordinates(&resolved, self.profile.coordinate_order);
        self.target_entry = Some(entry.to_string());

        if self.target.is_none() {
            tracing::debug!(entry, "target entry did not parse");
        }
        self.target.is_some()
    }

    pub fn target(&self) -> Option<CoordinateData> {
        self.target
    }

    /// Clear the target; observations still feed the movement memory.
    pub fn clear_target(&mut self) {
        self.target = None;
        self.target_entry = None;
    }

    /// Feed one observed position (already-scrubbed watcher output or any
    /// raw text). Returns guidance toward the target, or `None` when the
    /// text does not parse or no target is set.
    pub fn observe(&mut self, text: &str) -> Option<NavigationUpdate> {
        let sample = parse_coordinates(text, self.profile.coordinate_order)?;
        let current = self
            .estimator
            .observe(sample, self.profile.coordinate_system);

        let target = self.target?;
        let bearing = bearing_between(
            current.x,
            current.y,
            target.x,
            target.y,
            self.profile.coordinate_system,
        );
        let distance = planar_distance(&current, &target);
        let proximity = Proximity::from_distance(distance);

        let turn = current
            .heading
            .map(|h| turn_correction(bearing, h))
            .unwrap_or_default();

        let heading_quality = heading_quality(current.heading, bearing, proximity);

        Some(NavigationUpdate {
            current,
            target,
            bearing,
            distance,
            compass: CompassPoint::from_bearing(bearing),
            turn,
            heading_quality,
            proximity,
        })
    }
}

/// Classify facing alignment. Arrival forces a perfect rating; without a
/// facing there is nothing to rate.
fn heading_quality(
    heading: Option<f64>,
    bearing: f64,
    proximity: Proximity,
) -> Option<HeadingQuality> {
    if proximity == Proximity::Arrived {
        return Some(HeadingQuality::Perfect);
    }
    let heading = heading?;

    // Plain absolute comparison, no wrap-around: existing profiles expect
    // 359° vs 1° to rate as off-course.
    let off = (heading - bearing).abs();
    let quality = if off <= HEADING_TOLERANCE_PERFECT {
        HeadingQuality::Perfect
    } else if off <= HEADING_TOLERANCE_GOOD {
        HeadingQuality::Good
    } else if off <= HEADING_TOLERANCE_FAIR {
        HeadingQuality::Fair
    } else {
        HeadingQuality::Poor
    };
    Some(quality)
}
