//! Write a starter profile file.

use std::error::Error;
use std::path::PathBuf;

use clap::Args;

use mmonav::coord::CoordinateOrder;
use mmonav::profile::{default_profile_path, save_profiles, GameProfile, WatchMode};

#[derive(Debug, Args)]
pub struct InitConfigArgs {
    /// Where to write the profile file (default: ~/.mmonav/profiles.ini)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitConfigArgs) -> Result<(), Box<dyn Error>> {
    let path = args.config.unwrap_or_else(default_profile_path);

    if path.exists() && !args.force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )
        .into());
    }

    let starter = vec![
        GameProfile::default(),
        GameProfile::named("everquest")
            .with_watch_mode(WatchMode::File)
            .with_coordinate_order(CoordinateOrder::YXZ),
    ];

    save_profiles(&path, &starter)?;
    println!("Wrote {} profiles to {}", starter.len(), path.display());
    Ok(())
}
