use crate::cli::{PresetsArgs, PresetsCommands};
use crate::error::Result;
use crate::presets::PresetStore;
use secstructartist::core::presets::{self, PRESET_NAMES};
use std::fs;
use std::path::Path;
use tracing::info;

pub fn run(args: PresetsArgs, store: &PresetStore) -> Result<()> {
    match args.command {
        PresetsCommands::List => {
            print!("{}", list(store)?);
        }
        PresetsCommands::Export { name, output } => {
            export(store, &name, &output)?;
            println!("Exported preset '{}' to {}", name, output.display());
        }
        PresetsCommands::Path => {
            println!("{}", store.path().display());
        }
    }
    Ok(())
}

fn list(store: &PresetStore) -> Result<String> {
    let mut out = String::from("Built-in presets:\n");
    for name in PRESET_NAMES {
        if let Some(preset) = presets::lookup(name) {
            out.push_str(&format!("  {:<8} {}\n", name, preset.description()));
        }
    }

    let user = store.user_presets()?;
    out.push_str(&format!("User presets ({}):\n", store.path().display()));
    if user.is_empty() {
        out.push_str("  (none)\n");
    }
    for name in user {
        out.push_str(&format!("  {}\n", name));
    }
    Ok(out)
}

fn export(store: &PresetStore, name: &str, output: &Path) -> Result<()> {
    let artist = store.resolve(name)?.resolve()?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    artist.to_config_path(output)?;
    info!("Preset '{}' written to {:?}", name, output);
    Ok(())
}
