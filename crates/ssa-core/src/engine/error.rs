use thiserror::Error;

use super::target::TargetError;
use crate::core::io::config::ConfigLoadError;
use crate::core::models::color::ColorParseError;
use crate::core::models::drawstyle::DrawStyleError;
use crate::core::primitives::ParameterError;

fn at_position(position: &Option<usize>) -> String {
    position.map_or_else(String::new, |p| format!(" at position {p}"))
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No element artist for secondary structure code {code:?}{}", at_position(.position))]
    UnknownCode { code: char, position: Option<usize> },

    #[error("Unknown preset '{0}'")]
    UnknownPreset(String),

    #[error("Unknown style key '{0}'")]
    UnknownStyleKey(String),

    #[error("Style key '{key}' does not apply to any primitive of this element")]
    NotApplicable { key: String },

    #[error("Invalid value '{value}' for style key '{key}'")]
    InvalidValue { key: String, value: String },

    #[error("Invalid color: {0}")]
    Color(#[from] ColorParseError),

    #[error("Invalid primitive parameter: {0}")]
    Parameter(#[from] ParameterError),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigLoadError),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Got {positions} x positions for {labels} residues")]
    LengthMismatch { labels: usize, positions: usize },

    #[error("Position {index} is not finite ({value})")]
    NonFinitePosition { index: usize, value: f64 },

    #[error("Positions must be strictly increasing, but position {index} is not")]
    NonIncreasingPositions { index: usize },

    #[error("Baseline y must be finite, got {0}")]
    NonFiniteBaseline(f64),

    #[error("Invalid draw style: {0}")]
    DrawStyle(#[from] DrawStyleError),
}

#[derive(Debug, Error)]
pub enum ArtistError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Render target error: {0}")]
    Target(#[from] TargetError),
}

impl From<ConfigLoadError> for ArtistError {
    fn from(e: ConfigLoadError) -> Self {
        Self::Config(ConfigError::Load(e))
    }
}

impl From<DrawStyleError> for ArtistError {
    fn from(e: DrawStyleError) -> Self {
        Self::Validation(ValidationError::DrawStyle(e))
    }
}
