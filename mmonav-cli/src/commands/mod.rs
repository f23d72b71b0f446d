//! CLI subcommand implementations.

pub mod bearing;
pub mod init_config;
pub mod parse;
pub mod watch;

use clap::Args;

use mmonav::coord::{CoordinateOrder, CoordinateSystem};

/// Coordinate interpretation flags shared by several subcommands.
#[derive(Debug, Args)]
pub struct CoordinateFlags {
    /// Coordinate order, e.g. "x z y d", "y x", "y x z", "x y"
    #[arg(long, default_value = "x z y d")]
    pub order: String,

    /// The game world treats +X as West instead of East
    #[arg(long)]
    pub left_handed: bool,
}

impl CoordinateFlags {
    pub fn order(&self) -> CoordinateOrder {
        CoordinateOrder::parse(&self.order)
    }

    pub fn system(&self) -> CoordinateSystem {
        if self.left_handed {
            CoordinateSystem::LeftHanded
        } else {
            CoordinateSystem::RightHanded
        }
    }
}
