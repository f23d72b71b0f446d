//! Pure navigation math - bearings, compass labels, turn corrections.
//!
//! Bearings here are compass bearings, not Cartesian angles: 0° points along
//! +Y ("up", North) and positive angles increase clockwise toward +X. That
//! matches what a player sees on an in-game compass and is achieved by
//! swapping the arguments to `atan2` relative to the mathematical convention.

mod estimator;

pub use estimator::{HeadingEstimator, HeadingEstimatorConfig};

use std::fmt;

use crate::coord::{CoordinateData, CoordinateSystem};

const FULL_CIRCLE_DEG: f64 = 360.0;
const HALF_CIRCLE_DEG: f64 = 180.0;

/// Headings within this many degrees of the target bearing count as
/// "go straight" - a dead zone, not a precise angle.
const TURN_DEAD_ZONE_DEG: f64 = 5.0;

/// Compass bearing from `(x1, y1)` toward `(x2, y2)`, in `[0, 360)`.
///
/// Under a left-handed system (+X is West) the bearing is mirrored, since a
/// growing X coordinate moves the player west rather than east.
pub fn bearing_between(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    system: CoordinateSystem,
) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;

    // Swapped atan2 arguments: 0° = North (+Y), clockwise positive.
    let angle = dx.atan2(dy).to_degrees();
    let bearing = angle.rem_euclid(FULL_CIRCLE_DEG);

    match system {
        CoordinateSystem::RightHanded => bearing,
        CoordinateSystem::LeftHanded => (FULL_CIRCLE_DEG - bearing).rem_euclid(FULL_CIRCLE_DEG),
    }
}

/// Straight-line distance between two samples in the X/Y plane.
pub fn planar_distance(a: &CoordinateData, b: &CoordinateData) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Eight-point compass label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompassPoint {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CompassPoint {
    /// Bucket an arbitrary angle into one of eight 45° sectors. North owns
    /// both edges of the circle (`[0, 22.5)` and `[337.5, 360)`).
    pub fn from_bearing(angle: f64) -> Self {
        let angle = angle.rem_euclid(FULL_CIRCLE_DEG);
        match angle {
            a if a < 22.5 => Self::North,
            a if a < 67.5 => Self::NorthEast,
            a if a < 112.5 => Self::East,
            a if a < 157.5 => Self::SouthEast,
            a if a < 202.5 => Self::South,
            a if a < 247.5 => Self::SouthWest,
            a if a < 292.5 => Self::West,
            a if a < 337.5 => Self::NorthWest,
            _ => Self::North,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::North => "North",
            Self::NorthEast => "NorthEast",
            Self::East => "East",
            Self::SouthEast => "SouthEast",
            Self::South => "South",
            Self::SouthWest => "SouthWest",
            Self::West => "West",
            Self::NorthWest => "NorthWest",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Steering indicator: which way to turn to line up with a target heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TurnDirection {
    /// Within the dead zone - keep going.
    #[default]
    Straight,
    Left,
    Right,
}

impl TurnDirection {
    /// The label presentation layers show; straight-ahead is the empty string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Straight => "",
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

impl fmt::Display for TurnDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which way to turn from `current_heading` to reach `target_heading`.
///
/// The clockwise difference decides: under 180° means the target lies to the
/// right, otherwise to the left, with a ±5° dead zone around straight ahead.
pub fn turn_correction(target_heading: f64, current_heading: f64) -> TurnDirection {
    let diff = (target_heading - current_heading).rem_euclid(FULL_CIRCLE_DEG);
    if diff > FULL_CIRCLE_DEG - TURN_DEAD_ZONE_DEG || diff < TURN_DEAD_ZONE_DEG {
        TurnDirection::Straight
    } else if diff < HALF_CIRCLE_DEG {
        TurnDirection::Right
    } else {
        TurnDirection::Left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.1,
            "expected ~{expected}°, got {actual}°"
        );
    }

    #[test]
    fn test_bearing_cardinal_directions_right_handed() {
        let sys = CoordinateSystem::RightHanded;
        assert_close(bearing_between(0.0, 0.0, 0.0, 10.0, sys), 0.0); // North
        assert_close(bearing_between(0.0, 0.0, 10.0, 0.0, sys), 90.0); // East
        assert_close(bearing_between(0.0, 0.0, 0.0, -10.0, sys), 180.0); // South
        assert_close(bearing_between(0.0, 0.0, -10.0, 0.0, sys), 270.0); // West
    }

    #[test]
    fn test_bearing_diagonal_right_handed() {
        assert_close(
            bearing_between(0.0, 0.0, 10.0, 10.0, CoordinateSystem::RightHanded),
            45.0,
        );
    }

    #[test]
    fn test_bearing_left_handed_mirrors() {
        let sys = CoordinateSystem::LeftHanded;
        // +X is West in a left-handed world.
        assert_close(bearing_between(0.0, 0.0, 10.0, 0.0, sys), 270.0);
        assert_close(bearing_between(0.0, 0.0, -10.0, 0.0, sys), 90.0);
        assert_close(bearing_between(0.0, 0.0, 10.0, 10.0, sys), 315.0);
        // North is unaffected by the mirror.
        assert_close(bearing_between(0.0, 0.0, 0.0, 10.0, sys), 0.0);
    }

    #[test]
    fn test_bearing_is_normalized() {
        let bearing = bearing_between(5.0, 5.0, -3.0, -4.0, CoordinateSystem::RightHanded);
        assert!((0.0..360.0).contains(&bearing));
    }

    #[test]
    fn test_planar_distance() {
        let a = CoordinateData::new(0.0, 0.0);
        let b = CoordinateData::new(3.0, 4.0);
        assert_close(planar_distance(&a, &b), 5.0);
    }

    #[test]
    fn test_compass_buckets() {
        assert_eq!(CompassPoint::from_bearing(0.0), CompassPoint::North);
        assert_eq!(CompassPoint::from_bearing(22.4), CompassPoint::North);
        assert_eq!(CompassPoint::from_bearing(22.5), CompassPoint::NorthEast);
        assert_eq!(CompassPoint::from_bearing(90.0), CompassPoint::East);
        assert_eq!(CompassPoint::from_bearing(135.0), CompassPoint::SouthEast);
        assert_eq!(CompassPoint::from_bearing(180.0), CompassPoint::South);
        assert_eq!(CompassPoint::from_bearing(225.0), CompassPoint::SouthWest);
        assert_eq!(CompassPoint::from_bearing(270.0), CompassPoint::West);
        assert_eq!(CompassPoint::from_bearing(315.0), CompassPoint::NorthWest);
        assert_eq!(CompassPoint::from_bearing(337.5), CompassPoint::North);
        assert_eq!(CompassPoint::from_bearing(359.9), CompassPoint::North);
    }

    #[test]
    fn test_compass_normalizes_out_of_range_angles() {
        assert_eq!(CompassPoint::from_bearing(450.0), CompassPoint::East);
        assert_eq!(CompassPoint::from_bearing(-90.0), CompassPoint::West);
    }

    #[test]
    fn test_turn_dead_zone() {
        assert_eq!(turn_correction(0.0, 0.0), TurnDirection::Straight);
        assert_eq!(turn_correction(4.9, 0.0), TurnDirection::Straight);
        assert_eq!(turn_correction(355.5, 0.0), TurnDirection::Straight);
    }

    #[test]
    fn test_turn_right_when_target_is_clockwise() {
        assert_eq!(turn_correction(90.0, 0.0), TurnDirection::Right);
        assert_eq!(turn_correction(179.0, 0.0), TurnDirection::Right);
    }

    #[test]
    fn test_turn_left_when_target_is_counterclockwise() {
        assert_eq!(turn_correction(270.0, 0.0), TurnDirection::Left);
        assert_eq!(turn_correction(180.0, 0.0), TurnDirection::Left);
        // Wrap-around: heading 350°, target 340° is a small left turn.
        assert_eq!(turn_correction(340.0, 350.0), TurnDirection::Left);
    }

    #[test]
    fn test_turn_labels() {
        assert_eq!(TurnDirection::Straight.as_str(), "");
        assert_eq!(TurnDirection::Left.as_str(), "Left");
        assert_eq!(TurnDirection::Right.as_str(), "Right");
    }
}
