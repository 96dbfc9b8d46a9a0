use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

/// Which pointer coordinates are allowed to move the stick.
///
/// The numeric aliases (`-1`/`0`/`1`) parse the conventional integer axis
/// constants, with negative meaning horizontal and positive meaning vertical.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, DeserializeFromStr, EnumString, StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum MovementAxis {
    #[strum(serialize = "free", serialize = "0")]
    Free,
    /// Only x moves the stick; y stays pinned to the container center.
    #[strum(
        serialize = "horizontal_only",
        serialize = "horizontal",
        serialize = "x",
        serialize = "-1"
    )]
    HorizontalOnly,
    /// Only y moves the stick; x stays pinned to the container center.
    #[strum(
        serialize = "vertical_only",
        serialize = "vertical",
        serialize = "y",
        serialize = "1"
    )]
    VerticalOnly,
}

pub const DEFAULT_STICK_RATIO: f64 = 0.25;

/// Flat construction-time options for one joystick instance.
///
/// Any field may be omitted from a serialized document; missing fields take
/// the defaults below. Values are validated when a
/// [`Joystick`](crate::joystick::Joystick) is built from them, not here.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StickOptions {
    /// Rendered stick radius as a fraction of the container radius.
    pub stick_ratio: f64,
    pub movement_axis: MovementAxis,
    /// Snap the stick back to center when the pointer is released.
    pub auto_recenter: bool,
}

impl Default for StickOptions {
    fn default() -> Self {
        Self {
            stick_ratio: DEFAULT_STICK_RATIO,
            movement_axis: MovementAxis::Free,
            auto_recenter: true,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub fn options_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "thumbstick", "thumbstick")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("options.toml"))
}

pub fn load_options() -> Result<StickOptions, ConfigError> {
    let options_path = options_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(options_path).required(false))
        .add_source(config::Environment::with_prefix("THUMBSTICK").try_parsing(true))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> StickOptions {
    match load_options() {
        Ok(options) => options,
        Err(e) => {
            log::warn!("Failed to load options, using defaults: {}", e);
            StickOptions::default()
        }
    }
}

pub fn write_default_options() -> std::io::Result<std::path::PathBuf> {
    let path = options_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_OPTIONS)?;
    }
    Ok(path)
}

const DEFAULT_OPTIONS: &str = include_str!("default_options.toml");
