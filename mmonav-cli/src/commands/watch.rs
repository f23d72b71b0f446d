//! Live watch: tail a game log (or pasted text) and print guidance.

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use tokio::sync::mpsc;

use mmonav::logging;
use mmonav::navigator::{NavigationUpdate, Navigator};
use mmonav::profile::{default_profile_path, load_profiles, GameProfile, WatchMode};
use mmonav::watcher::{NullClipboard, SourceWatcher};

use crate::adapters;

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Target to navigate toward: coordinates or a saved location name
    #[arg(long)]
    pub target: Option<String>,

    /// Profile file (default: ~/.mmonav/profiles.ini)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Profile name to use (default: the first profile in the file)
    #[arg(long)]
    pub profile: Option<String>,

    /// Tail this log file instead of the profile's
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Read positions from pasted lines on stdin instead of a log file
    #[arg(long)]
    pub paste: bool,

    /// Override the profile's location pattern
    #[arg(long)]
    pub pattern: Option<String>,

    #[command(flatten)]
    pub coords: CoordinateOverrides,
}

/// Optional coordinate interpretation overrides.
#[derive(Debug, Args)]
pub struct CoordinateOverrides {
    /// Coordinate order override, e.g. "y x z"
    #[arg(long)]
    pub order: Option<String>,

    /// Treat +X as West instead of East
    #[arg(long)]
    pub left_handed: bool,
}

pub fn run(args: WatchArgs) -> Result<(), Box<dyn Error>> {
    let log_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".mmonav")
        .join("logs");
    let _guard = logging::init_logging(&log_dir, logging::DEFAULT_LOG_FILE)?;

    let profile = resolve_profile(&args)?;
    tracing::info!(
        profile = %profile.name,
        mode = profile.watch_mode.as_str(),
        "starting watch"
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(watch_loop(args, profile))
}

/// Load the configured profile and fold the command-line overrides in.
fn resolve_profile(args: &WatchArgs) -> Result<GameProfile, Box<dyn Error>> {
    let config_path = args.config.clone().unwrap_or_else(default_profile_path);
    let profiles = load_profiles(&config_path)?;

    let mut profile = match &args.profile {
        Some(name) => profiles
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .cloned()
            .ok_or_else(|| format!("no profile named {name:?} in {}", config_path.display()))?,
        None => profiles[0].clone(),
    };

    if let Some(path) = &args.log_file {
        profile.log_file_path = path.clone();
        profile.watch_mode = WatchMode::File;
    }
    if args.paste {
        profile.watch_mode = WatchMode::Clipboard;
    }
    if let Some(pattern) = &args.pattern {
        profile.log_pattern = pattern.clone();
    }
    if let Some(order) = &args.coords.order {
        profile.coordinate_order = mmonav::coord::CoordinateOrder::parse(order);
    }
    if args.coords.left_handed {
        profile.coordinate_system = mmonav::coord::CoordinateSystem::LeftHanded;
    }

    Ok(profile)
}

async fn watch_loop(args: WatchArgs, profile: GameProfile) -> Result<(), Box<dyn Error>> {
    let mut navigator = Navigator::new(profile.clone());
    if let Some(target) = &args.target {
        if navigator.set_target(target) {
            println!("Navigating toward {target}");
        } else {
            return Err(format!("target is not a coordinate: {target:?}").into());
        }
    } else {
        println!("No target set - printing observed positions only");
    }

    let (event_tx, event_rx) = mpsc::channel(16);
    let (update_tx, mut update_rx) = mpsc::channel(16);

    // Wire the acquisition adapter matching the profile's mode, then start
    // the watcher with the same snapshot.
    let mut watcher = match profile.watch_mode {
        WatchMode::Clipboard => {
            println!("Paste coordinates (one per line), Ctrl-C to quit");
            let paste = adapters::spawn_stdin_paste(event_tx.clone());
            SourceWatcher::new(paste)
        }
        WatchMode::File => {
            println!("Tailing {}", profile.log_file_path.display());
            adapters::spawn_file_poller(
                profile.log_file_path.clone(),
                event_tx.clone(),
                adapters::FILE_POLL_INTERVAL,
            );
            SourceWatcher::new(Arc::new(NullClipboard))
        }
    };
    watcher.start(profile, event_rx, update_tx);

    let (stop_tx, mut stop_rx) = mpsc::channel(1);
    ctrlc::set_handler(move || {
        let _ = stop_tx.blocking_send(());
    })?;

    loop {
        tokio::select! {
            _ = stop_rx.recv() => {
                println!();
                break;
            }
            update = update_rx.recv() => match update {
                Some(text) => match navigator.observe(&text) {
                    Some(update) => print_update(&update),
                    None => println!("position: {text}"),
                },
                None => break,
            }
        }
    }

    watcher.stop();
    tracing::info!("watch stopped");
    Ok(())
}

fn print_update(update: &NavigationUpdate) {
    let turn = match update.turn.as_str() {
        "" => String::new(),
        label => format!("  turn {label}"),
    };
    println!(
        "Go {} {:.0}m (bearing {:.1}°){}",
        update.compass,
        update.distance.round(),
        update.bearing,
        turn
    );
}
