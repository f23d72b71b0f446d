//! Value types for parsed game coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single parsed coordinate sample.
///
/// `x` and `y` are always present after a successful parse. `z` and
/// `heading` are genuinely optional - `None` means the source did not report
/// them, which is different from a reported value of `0.0` (due north is a
/// real facing; absence is not).
///
/// Instances are immutable values produced by [`crate::coord::parse_coordinates`];
/// a new sample is created for every observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateData {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    /// Facing in degrees exactly as the game reported it. Normalization into
    /// `[0, 360)` happens in the navigation math, not here.
    pub heading: Option<f64>,
}

impl CoordinateData {
    /// Create a 2-D sample with no elevation or facing.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            heading: None,
        }
    }
}

/// Which numeric token maps to which semantic axis.
///
/// Games print coordinates in different orders; the profile selects one of
/// the orders the parser distinguishes. Unrecognized configuration strings
/// fall back to [`CoordinateOrder::XZYD`], the EverQuest-style default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinateOrder {
    /// X, then Z (elevation), then Y, then an optional facing. The only
    /// order whose fourth token is interpreted as a heading.
    #[default]
    #[serde(rename = "x z y d")]
    XZYD,
    /// Y first, then X.
    #[serde(rename = "y x")]
    YX,
    /// Y, then X, then elevation.
    #[serde(rename = "y x z")]
    YXZ,
    /// Plain X then Y.
    #[serde(rename = "x y")]
    XY,
}

impl CoordinateOrder {
    /// Parse a configuration string, falling back to the default order for
    /// anything unrecognized. Matching is whitespace- and case-lenient.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "y x" => Self::YX,
            "y x z" => Self::YXZ,
            "x y" => Self::XY,
            "x z y d" => Self::XZYD,
            other => {
                if !other.is_empty() {
                    tracing::debug!(order = other, "unknown coordinate order, using default");
                }
                Self::XZYD
            }
        }
    }

    /// The canonical configuration string for this order.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::XZYD => "x z y d",
            Self::YX => "y x",
            Self::YXZ => "y x z",
            Self::XY => "x y",
        }
    }
}

impl fmt::Display for CoordinateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// World-axis handedness of the game's coordinate system.
///
/// Affects only the sign of computed bearings, never parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateSystem {
    /// +X is East, +Y is North.
    #[default]
    RightHanded,
    /// +X is West, +Y is North. Bearings are mirrored.
    LeftHanded,
}

impl CoordinateSystem {
    /// Lenient configuration-string parse; unknown values mean right-handed.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "lefthanded" | "left-handed" | "left" => Self::LeftHanded,
            _ => Self::RightHanded,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RightHanded => "righthanded",
            Self::LeftHanded => "lefthanded",
        }
    }
}
