use secstructartist::core::io::config::ConfigLoadError;
use secstructartist::core::io::track::TrackError;
use secstructartist::engine::error::{ArtistError, ConfigError, ValidationError};
use secstructartist::engine::target::TargetError;
use std::path::PathBuf;
use thiserror::Error;

use crate::utils::parser::ParseError;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Artist(#[from] ArtistError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Preset error: {0}")]
    Preset(String),

    #[error("Failed to read label track '{path}': {source}", path = path.display())]
    Track {
        path: PathBuf,
        #[source]
        source: TrackError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::Artist(e.into())
    }
}

impl From<ConfigLoadError> for CliError {
    fn from(e: ConfigLoadError) -> Self {
        Self::Artist(e.into())
    }
}

impl From<ValidationError> for CliError {
    fn from(e: ValidationError) -> Self {
        Self::Artist(e.into())
    }
}

impl From<TargetError> for CliError {
    fn from(e: TargetError) -> Self {
        Self::Artist(e.into())
    }
}

impl From<ParseError> for CliError {
    fn from(e: ParseError) -> Self {
        Self::Argument(e.to_string())
    }
}
