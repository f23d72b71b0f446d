//! INI-backed profile storage.
//!
//! Profiles live in `~/.mmonav/profiles.ini`, one `[profile:<name>]` section
//! per game. Loading is lenient: a missing file yields the default profile,
//! unknown keys are ignored, and malformed values fall back to defaults so
//! a hand-edited file can never wedge the application at startup.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use crate::coord::{CoordinateOrder, CoordinateSystem};

use super::{GameProfile, WatchMode};

/// Section name prefix for profile sections.
const PROFILE_SECTION_PREFIX: &str = "profile:";

/// Profile file errors.
#[derive(Debug, Error)]
pub enum ProfileFileError {
    /// Failed to read the profile file.
    #[error("failed to read profile file: {0}")]
    Read(#[from] ini::Error),

    /// Failed to write the profile file.
    #[error("failed to write profile file: {0}")]
    Write(std::io::Error),

    /// Failed to create the profile directory.
    #[error("failed to create profile directory: {0}")]
    Directory(std::io::Error),
}

/// Path of the default profile file (`~/.mmonav/profiles.ini`).
pub fn default_profile_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".mmonav")
        .join("profiles.ini")
}

/// Load every profile from `path`.
///
/// A missing file, or a file without any profile section, yields a single
/// default profile so callers always have something to start with.
pub fn load_profiles(path: &Path) -> Result<Vec<GameProfile>, ProfileFileError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no profile file, using defaults");
        return Ok(vec![GameProfile::default()]);
    }

    let ini = Ini::load_from_file(path)?;
    let mut profiles = Vec::new();

    for (section, props) in ini.iter() {
        let Some(section) = section else { continue };
        let Some(name) = section.strip_prefix(PROFILE_SECTION_PREFIX) else {
            continue;
        };

        let mut profile = GameProfile::named(name.trim());
        if let Some(v) = props.get("watch_mode") {
            profile.watch_mode = WatchMode::parse(v);
        }
        if let Some(v) = props.get("coordinate_system") {
            profile.coordinate_system = CoordinateSystem::parse(v);
        }
        if let Some(v) = props.get("coordinate_order") {
            profile.coordinate_order = CoordinateOrder::parse(v);
        }
        if let Some(v) = props.get("log_file") {
            profile.log_file_path = PathBuf::from(v);
        }
        if let Some(v) = props.get("log_pattern") {
            profile.log_pattern = v.to_string();
        }
        profiles.push(profile);
    }

    if profiles.is_empty() {
        tracing::debug!(path = %path.display(), "profile file has no profiles, using defaults");
        profiles.push(GameProfile::default());
    }

    Ok(profiles)
}

/// Save profiles to `path`, creating parent directories as needed.
pub fn save_profiles(path: &Path, profiles: &[GameProfile]) -> Result<(), ProfileFileError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(ProfileFileError::Directory)?;
    }

    let mut ini = Ini::new();
    for profile in profiles {
        let section = format!("{PROFILE_SECTION_PREFIX}{}", profile.name);
        ini.with_section(Some(section))
            .set("watch_mode", profile.watch_mode.as_str())
            .set("coordinate_system", profile.coordinate_system.as_str())
            .set("coordinate_order", profile.coordinate_order.as_str())
            .set("log_file", profile.log_file_path.to_string_lossy().as_ref())
            .set("log_pattern", profile.log_pattern.as_str());
    }

    ini.write_to_file(path).map_err(ProfileFileError::Write)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logline::DEFAULT_LOG_PATTERN;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_default_profile() {
        let dir = TempDir::new().unwrap();
        let profiles = load_profiles(&dir.path().join("absent.ini")).unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0], GameProfile::default());
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profiles.ini");

        let original = vec![
            GameProfile::default(),
            GameProfile::named("eq")
                .with_watch_mode(WatchMode::File)
                .with_log_file("/games/eq/logs/chat.txt")
                .with_log_pattern(r"loc: (-?\d+) (-?\d+)")
                .with_coordinate_system(CoordinateSystem::LeftHanded)
                .with_coordinate_order(CoordinateOrder::YX),
        ];

        save_profiles(&path, &original).unwrap();
        let loaded = load_profiles(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_unknown_keys_and_sections_are_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profiles.ini");
        std::fs::write(
            &path,
            "[general]\ntheme = dark\n\n[profile:wow]\nwatch_mode = file\nfavorite_mount = gryphon\n",
        )
        .unwrap();

        let profiles = load_profiles(&path).unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].name, "wow");
        assert_eq!(profiles[0].watch_mode, WatchMode::File);
    }

    #[test]
    fn test_malformed_values_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profiles.ini");
        std::fs::write(
            &path,
            "[profile:odd]\nwatch_mode = telepathy\ncoordinate_order = q w e\ncoordinate_system = upside-down\n",
        )
        .unwrap();

        let profiles = load_profiles(&path).unwrap();
        let profile = &profiles[0];
        assert_eq!(profile.watch_mode, WatchMode::Clipboard);
        assert_eq!(profile.coordinate_order, CoordinateOrder::XZYD);
        assert_eq!(profile.coordinate_system, CoordinateSystem::RightHanded);
        assert_eq!(profile.log_pattern, DEFAULT_LOG_PATTERN);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("profiles.ini");
        save_profiles(&path, &[GameProfile::default()]).unwrap();
        assert!(path.exists());
    }
}
