//! One-shot bearing calculation between two coordinate strings.

use std::error::Error;

use clap::Args;

use mmonav::coord::parse_coordinates;
use mmonav::nav::{bearing_between, planar_distance, turn_correction, CompassPoint, TurnDirection};

use super::CoordinateFlags;

#[derive(Debug, Args)]
pub struct BearingArgs {
    /// Current position, e.g. "10, 20, 30" or "10 0 20 180"
    pub current: String,

    /// Target position
    pub target: String,

    #[command(flatten)]
    pub coords: CoordinateFlags,
}

pub fn run(args: BearingArgs) -> Result<(), Box<dyn Error>> {
    let order = args.coords.order();
    let system = args.coords.system();

    let current = parse_coordinates(&args.current, order)
        .ok_or_else(|| format!("current position is not a coordinate: {:?}", args.current))?;
    let target = parse_coordinates(&args.target, order)
        .ok_or_else(|| format!("target position is not a coordinate: {:?}", args.target))?;

    let bearing = bearing_between(current.x, current.y, target.x, target.y, system);
    let distance = planar_distance(&current, &target);
    let compass = CompassPoint::from_bearing(bearing);

    println!(
        "Go {} {:.0}m (bearing {:.1}°)",
        compass,
        distance.round(),
        bearing
    );

    if let Some(heading) = current.heading {
        match turn_correction(bearing, heading) {
            TurnDirection::Straight => println!("Facing {heading:.1}° - keep going straight"),
            turn => println!("Facing {heading:.1}° - turn {turn}"),
        }
    }

    Ok(())
}
