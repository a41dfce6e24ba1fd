use crate::ports::HapticPulse;
use crate::wheel::{
    ANGLE_OFFSET, DEAD_ZONE, HAPTIC_AMPLITUDE, HAPTIC_DURATION, HAPTIC_FREQUENCY, WHEEL_RADIUS,
};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, DeserializeFromStr, EnumString, StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Hand {
    #[strum(serialize = "Left", serialize = "l")]
    Left,
    #[strum(serialize = "Right", serialize = "r")]
    Right,
    #[strum(serialize = "Any", serialize = "both", serialize = "*")]
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct HapticConfig {
    #[serde(default = "default_frequency")]
    pub frequency: f32,
    #[serde(default = "default_amplitude")]
    pub amplitude: f32,
    #[serde(default = "default_duration")]
    pub duration: f32,
    #[serde(default = "default_channel")]
    pub channel: Hand,
}

impl HapticConfig {
    pub fn pulse(&self) -> HapticPulse {
        HapticPulse {
            frequency: self.frequency,
            amplitude: self.amplitude,
            duration: self.duration,
            channel: self.channel,
        }
    }
}

impl Default for HapticConfig {
    fn default() -> Self {
        Self {
            frequency: default_frequency(),
            amplitude: default_amplitude(),
            duration: default_duration(),
            channel: default_channel(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WheelConfig {
    /// Orbital radius of the slot anchors, surface-local units.
    #[serde(default = "default_radius")]
    pub radius: f64,
    /// Squared pointing-vector magnitude at or below which the center
    /// dead zone applies and no sector counts as pointed at.
    #[serde(default = "default_dead_zone")]
    pub dead_zone: f64,
    /// Added to the pointer angle before sector lookup, radians.
    #[serde(default = "default_angle_offset")]
    pub angle_offset: f64,
    #[serde(default)]
    pub haptics: HapticConfig,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            dead_zone: default_dead_zone(),
            angle_offset: default_angle_offset(),
            haptics: HapticConfig::default(),
        }
    }
}

fn default_radius() -> f64 {
    WHEEL_RADIUS
}

fn default_dead_zone() -> f64 {
    DEAD_ZONE
}

fn default_angle_offset() -> f64 {
    ANGLE_OFFSET
}

fn default_frequency() -> f32 {
    HAPTIC_FREQUENCY
}

fn default_amplitude() -> f32 {
    HAPTIC_AMPLITUDE
}

fn default_duration() -> f32 {
    HAPTIC_DURATION
}

fn default_channel() -> Hand {
    Hand::Any
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "gyre", "gyre").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<WheelConfig, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("GYRE"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> WheelConfig {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Falling back to built-in wheel tuning: {}", e);
            WheelConfig::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_hand_deserialization() {
        let cases = vec![
            ("\"left\"", Hand::Left),
            ("\"Left\"", Hand::Left),
            ("\"LEFT\"", Hand::Left),
            ("\"l\"", Hand::Left),
            ("\"r\"", Hand::Right),
            ("\"Right\"", Hand::Right),
            ("\"any\"", Hand::Any),
            ("\"both\"", Hand::Any),
            ("\"*\"", Hand::Any),
        ];

        for (json, expected) in cases {
            let deserialized: Hand = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn defaults_match_the_wheel_constants() {
        let cfg = WheelConfig::default();

        assert_eq!(cfg.radius, 100.0);
        assert_eq!(cfg.dead_zone, 0.025);
        assert_eq!(cfg.angle_offset, -FRAC_PI_2);
        assert_eq!(cfg.haptics.frequency, 10.0);
        assert_eq!(cfg.haptics.amplitude, 0.5);
        assert_eq!(cfg.haptics.duration, 0.1);
        assert_eq!(cfg.haptics.channel, Hand::Any);
    }

    #[test]
    fn shipped_default_config_parses_to_the_defaults() {
        let cfg: WheelConfig = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg, WheelConfig::default());
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let cfg: WheelConfig = config::Config::builder()
            .add_source(config::File::from_str(
                "dead_zone = 0.09\n[haptics]\nchannel = \"right\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.dead_zone, 0.09);
        assert_eq!(cfg.haptics.channel, Hand::Right);
        assert_eq!(cfg.radius, 100.0);
        assert_eq!(cfg.haptics.amplitude, 0.5);
    }
}
