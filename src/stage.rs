//! Stage handle and process-wide stage configuration.
//!
//! A [`Stage`] is shared by every collider created on it. Geometry never reads
//! it; only debug rendering and explicit clamping do.

#[cfg(test)]
#[path = "stage_test.rs"]
mod stage_test;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::consts::{
    DEFAULT_ORIGIN_COLOR, DEFAULT_STAGE_HEIGHT, DEFAULT_STAGE_WIDTH, DEFAULT_VOLUME_COLOR, DEFAULT_VOLUME_LINE_WIDTH,
};
use crate::error::ConfigError;
use crate::point::Point;
use crate::render::Color;

/// Stage dimensions and debug-drawing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Stage width in pixels.
    pub width: u32,
    /// Stage height in pixels.
    pub height: u32,
    /// Stroke colour for debug bounding volumes.
    pub volume_color: Color,
    /// Fill colour for the origin marker of a debug volume.
    pub origin_color: Color,
    /// Stroke width for debug bounding volumes.
    pub volume_line_width: f64,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_STAGE_WIDTH,
            height: DEFAULT_STAGE_HEIGHT,
            volume_color: Color::new(DEFAULT_VOLUME_COLOR),
            origin_color: Color::new(DEFAULT_ORIGIN_COLOR),
            volume_line_width: DEFAULT_VOLUME_LINE_WIDTH,
        }
    }
}

impl StageConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON and
    /// [`ConfigError::InvalidDimension`] for a zero-sized stage or a
    /// non-positive line width.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        info!(width = config.width, height = config.height, "stage config loaded from json");
        Ok(config)
    }

    /// Build from environment variables.
    ///
    /// Optional:
    /// - `STAGE_WIDTH`: default 800
    /// - `STAGE_HEIGHT`: default 600
    /// - `STAGE_VOLUME_LINE_WIDTH`: default 1
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDimension`] for numeric values that are
    /// zero, negative, or out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unparsable values fall back to
    /// their defaults with a warning.
    ///
    /// # Errors
    ///
    /// Same as [`StageConfig::from_env`].
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let width = parse_dimension(&lookup, "STAGE_WIDTH", DEFAULT_STAGE_WIDTH)?;
        let height = parse_dimension(&lookup, "STAGE_HEIGHT", DEFAULT_STAGE_HEIGHT)?;
        let volume_line_width = match lookup("STAGE_VOLUME_LINE_WIDTH") {
            None => DEFAULT_VOLUME_LINE_WIDTH,
            Some(raw) => raw.trim().parse::<f64>().unwrap_or_else(|_| {
                warn!(key = "STAGE_VOLUME_LINE_WIDTH", %raw, "unparsable value; using default");
                DEFAULT_VOLUME_LINE_WIDTH
            }),
        };

        let config = Self { width, height, volume_line_width, ..Self::default() };
        config.validate()?;
        info!(width, height, "stage config loaded from env");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::InvalidDimension { name: "width", value: "0".into() });
        }
        if self.height == 0 {
            return Err(ConfigError::InvalidDimension { name: "height", value: "0".into() });
        }
        if self.volume_line_width.is_nan() || self.volume_line_width <= 0.0 {
            return Err(ConfigError::InvalidDimension {
                name: "volume_line_width",
                value: self.volume_line_width.to_string(),
            });
        }
        Ok(())
    }
}

fn parse_dimension(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: u32,
) -> Result<u32, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().parse::<i64>() {
        Ok(value) => match u32::try_from(value) {
            Ok(v) if v > 0 => Ok(v),
            _ => Err(ConfigError::InvalidDimension { name: key, value: raw }),
        },
        Err(_) => {
            warn!(key, %raw, "unparsable value; using default");
            Ok(default)
        }
    }
}

/// The stage colliders are created on.
#[derive(Debug, Clone, Default)]
pub struct Stage {
    config: StageConfig,
}

impl Stage {
    #[must_use]
    pub fn new(config: StageConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.config.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.config.height
    }

    /// Clamp `point` onto the stage's pixel grid.
    pub fn clamp<'a>(&self, point: &'a mut Point) -> &'a mut Point {
        point.clamp_to_stage(f64::from(self.width()), f64::from(self.height()))
    }
}
