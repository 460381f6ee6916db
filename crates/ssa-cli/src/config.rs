use crate::cli::{RenderArgs, StyleSource};
use crate::error::{CliError, Result};
use crate::presets::PresetStore;
use crate::utils::parser::{self, SetTarget, StyleSetting};
use secstructartist::core::models::drawstyle::DrawStyleOverrides;
use secstructartist::engine::artist::SecStructArtist;
use secstructartist::workflows::draw::ArtistSource;
use tracing::debug;

/// Style changes requested on the command line, applied on top of the
/// preset or configuration file: draw style flags first, then `--set`
/// assignments in the order given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleOverrides {
    drawstyle: DrawStyleOverrides,
    settings: Vec<StyleSetting>,
}

impl StyleOverrides {
    pub fn from_args(args: &RenderArgs) -> Result<Self> {
        let settings = args
            .set_values
            .iter()
            .map(|s| parser::parse_setting(s))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self {
            drawstyle: DrawStyleOverrides {
                height: args.height,
                stride: args.stride,
                linewidth: args.linewidth,
                zorder: None,
            },
            settings,
        })
    }

    pub fn apply(&self, artist: &mut SecStructArtist) -> Result<()> {
        if !self.drawstyle.is_empty() {
            debug!("Applying draw style flags: {:?}", self.drawstyle);
            artist.update_drawstyle(&self.drawstyle)?;
        }
        for setting in &self.settings {
            debug!("Applying --set {:?}", setting);
            match setting.target {
                SetTarget::DrawStyle => {
                    let changes = drawstyle_setting(&setting.key, &setting.value)?;
                    artist.update_drawstyle(&changes)?;
                }
                SetTarget::Element(code) => {
                    artist
                        .element_mut(code)?
                        .set(&setting.key, &setting.value)?;
                }
            }
        }
        Ok(())
    }
}

fn drawstyle_setting(key: &str, value: &str) -> Result<DrawStyleOverrides> {
    let number: f64 = value.parse().map_err(|_| {
        CliError::Config(format!("Invalid float value for drawstyle.{}: {}", key, value))
    })?;
    let mut changes = DrawStyleOverrides::default();
    match key {
        "height" => changes.height = Some(number),
        "stride" => changes.stride = Some(number),
        "linewidth" => changes.linewidth = Some(number),
        "zorder" => changes.zorder = Some(number),
        _ => {
            return Err(CliError::Config(format!(
                "Unsupported draw style key for --set: '{}'",
                key
            )));
        }
    }
    Ok(changes)
}

/// Loads the artist named by `-a`/`-c`, falling back to the default preset.
pub fn load_artist(style: &StyleSource, store: &PresetStore) -> Result<SecStructArtist> {
    let source = match (&style.preset, &style.config) {
        (_, Some(path)) => ArtistSource::File(path.clone()),
        (Some(name), None) => store.resolve(name)?,
        (None, None) => ArtistSource::default(),
    };
    debug!("Loading artist from {:?}", source);
    Ok(source.resolve()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use secstructartist::core::models::color::Color;
    use secstructartist::core::primitives::Primitive;
    use secstructartist::engine::error::{ArtistError, ConfigError};
    use tempfile::tempdir;

    fn render_args(extra: &[&str]) -> RenderArgs {
        let mut argv = vec!["ssa", "render", "-s", "LLHHHHSSL", "-o", "out.svg"];
        argv.extend_from_slice(extra);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Render(args) => args,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    fn store() -> PresetStore {
        PresetStore::with_custom_path(std::env::temp_dir().join("ssa-no-presets"))
    }

    #[test]
    fn defaults_to_the_default_preset() {
        let args = render_args(&[]);
        let artist = load_artist(&args.style, &store()).unwrap();
        assert_eq!(artist, SecStructArtist::from_preset("default").unwrap());
    }

    #[test]
    fn loads_config_files() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("style.toml");
        let simple = SecStructArtist::from_preset("simple").unwrap();
        simple.to_config_path(&path).unwrap();

        let args = render_args(&["-c", path.to_str().unwrap()]);
        assert_eq!(load_artist(&args.style, &store()).unwrap(), simple);
    }

    #[test]
    fn loads_user_presets() {
        let temp_dir = tempdir().unwrap();
        let store = PresetStore::with_custom_path(temp_dir.path().to_path_buf());
        let dssp = SecStructArtist::from_preset("dssp").unwrap();
        dssp.to_config_path(&store.user_preset_path("mine")).unwrap();

        let args = render_args(&["-a", "mine"]);
        assert_eq!(load_artist(&args.style, &store).unwrap(), dssp);
    }

    #[test]
    fn set_values_apply_after_draw_style_flags() {
        let args = render_args(&[
            "--height",
            "2",
            "-S",
            "drawstyle.height=3",
            "-S",
            "H.fillcolor=#00ff00",
            "-S",
            "L.label=Coil",
        ]);
        let mut artist = SecStructArtist::from_preset("default").unwrap();
        StyleOverrides::from_args(&args)
            .unwrap()
            .apply(&mut artist)
            .unwrap();

        assert_eq!(artist.drawstyle().height, 3.0);
        let helix = artist.element('H').unwrap();
        assert_eq!(
            helix.primitives()[0].style().fillcolor,
            Some(Color::rgb(0, 255, 0))
        );
        assert_eq!(artist.element('L').unwrap().label(), "Coil");
    }

    #[test]
    fn set_value_for_unknown_code_fails() {
        let args = render_args(&["-S", "Q.fillcolor=red"]);
        let mut artist = SecStructArtist::from_preset("default").unwrap();
        let err = StyleOverrides::from_args(&args)
            .unwrap()
            .apply(&mut artist)
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Artist(ArtistError::Config(ConfigError::UnknownCode { code: 'Q', .. }))
        ));
    }

    #[test]
    fn malformed_set_values_are_argument_errors() {
        let args = render_args(&["-S", "H.fillcolor"]);
        assert!(matches!(
            StyleOverrides::from_args(&args),
            Err(CliError::Argument(_))
        ));
    }

    #[test]
    fn unsupported_drawstyle_key_is_a_config_error() {
        let args = render_args(&["-S", "drawstyle.depth=1"]);
        let mut artist = SecStructArtist::default();
        let err = StyleOverrides::from_args(&args)
            .unwrap()
            .apply(&mut artist)
            .unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn invalid_drawstyle_flag_is_rejected() {
        let args = render_args(&["--height=-1"]);
        let mut artist = SecStructArtist::from_preset("default").unwrap();
        let err = StyleOverrides::from_args(&args)
            .unwrap()
            .apply(&mut artist)
            .unwrap_err();
        assert!(matches!(err, CliError::Artist(ArtistError::Validation(_))));
    }
}
