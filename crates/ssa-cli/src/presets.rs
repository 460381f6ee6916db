use crate::error::{CliError, Result};
use directories::ProjectDirs;
use secstructartist::core::io::format::ConfigFormat;
use secstructartist::core::presets;
use secstructartist::workflows::draw::ArtistSource;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const PRESET_EXTENSION: &str = "toml";

/// The per-user directory of preset configuration files.
///
/// A preset name that is not built in resolves to `<name>.toml` in this
/// directory.
#[derive(Debug)]
pub struct PresetStore {
    base_path: PathBuf,
}

impl PresetStore {
    pub fn new() -> Result<Self> {
        let path = Self::default_preset_path()?;
        debug!("PresetStore initialized with path: {:?}", &path);
        Ok(Self { base_path: path })
    }

    pub fn with_custom_path(path: PathBuf) -> Self {
        Self { base_path: path }
    }

    pub fn path(&self) -> &Path {
        &self.base_path
    }

    /// Resolves a preset name to an artist source, preferring built-in presets.
    pub fn resolve(&self, name: &str) -> Result<ArtistSource> {
        if presets::lookup(name).is_some() {
            return Ok(ArtistSource::Preset(name.to_string()));
        }
        let path = self.user_preset_path(name);
        if path.is_file() {
            debug!("Resolved preset '{}' to user file {:?}", name, &path);
            return Ok(ArtistSource::File(path));
        }
        Err(CliError::Preset(format!(
            "Unknown preset '{}'. Built-in presets: {}. No user preset found at {:?}.",
            name,
            presets::PRESET_NAMES.join(", "),
            path
        )))
    }

    pub fn user_preset_path(&self, name: &str) -> PathBuf {
        self.base_path.join(format!("{}.{}", name, PRESET_EXTENSION))
    }

    /// Names of the user presets, sorted. A missing directory holds none.
    pub fn user_presets(&self) -> Result<Vec<String>> {
        if !self.base_path.is_dir() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.base_path)? {
            let path = entry?.path();
            if ConfigFormat::from_path(&path).ok() != Some(ConfigFormat::Toml) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn default_preset_path() -> Result<PathBuf> {
        ProjectDirs::from("be", "vub", "secstructartist")
            .map(|dirs| dirs.config_dir().join("presets"))
            .ok_or_else(|| {
                CliError::Preset("Could not determine the user preset directory.".to_string())
            })
    }
}
