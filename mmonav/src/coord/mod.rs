//! Coordinate parsing - scrubbed token text to typed coordinate samples.
//!
//! The parser first runs input through [`crate::scrub::scrub_entry`], then
//! maps the resulting numeric tokens onto axes according to the configured
//! [`CoordinateOrder`]. The mapping table deliberately preserves some
//! asymmetries existing game profiles depend on: under the default order two
//! tokens are plain x/y, while three or more shift the second token into the
//! elevation slot; `y x z` always records an elevation, defaulting to zero.

mod types;

pub use types::{CoordinateData, CoordinateOrder, CoordinateSystem};

use crate::scrub;

/// Minimum numeric tokens for a valid coordinate.
const MIN_COMPONENTS: usize = 2;

/// Parse free-form text into a coordinate sample under the given order.
///
/// Returns `None` when scrubbing leaves nothing usable, fewer than two
/// tokens remain, or any token is not a number. Malformed input is not an
/// error - it is simply not a coordinate.
pub fn parse_coordinates(input: &str, order: CoordinateOrder) -> Option<CoordinateData> {
    let scrubbed = scrub::scrub_entry(input);
    if scrubbed.trim().is_empty() {
        return None;
    }

    let parts: Vec<&str> = scrubbed.split_whitespace().collect();
    if parts.len() < MIN_COMPONENTS {
        return None;
    }

    let mut values = Vec::with_capacity(parts.len());
    for part in &parts {
        values.push(part.parse::<f64>().ok()?);
    }

    let data = match order {
        CoordinateOrder::YX => CoordinateData::new(values[1], values[0]),
        CoordinateOrder::XY => CoordinateData::new(values[0], values[1]),
        CoordinateOrder::YXZ => CoordinateData {
            x: values[1],
            y: values[0],
            // This order always records an elevation; a missing third token
            // reads as ground level.
            z: Some(values.get(2).copied().unwrap_or(0.0)),
            heading: None,
        },
        CoordinateOrder::XZYD => {
            if values.len() >= 3 {
                CoordinateData {
                    x: values[0],
                    z: Some(values[1]),
                    y: values[2],
                    heading: values.get(3).copied(),
                }
            } else {
                // Two tokens degrade to plain x/y; the fourth-slot heading
                // is only reachable with a full four-token report.
                CoordinateData::new(values[0], values[1])
            }
        }
    };

    Some(data)
}
