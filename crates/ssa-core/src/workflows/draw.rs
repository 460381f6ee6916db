use crate::core::models::drawstyle::DrawStyleOverrides;
use crate::engine::artist::SecStructArtist;
use crate::engine::error::{ArtistError, ConfigError};
use crate::engine::legend::MultiHandle;
use crate::engine::positions::Positions;
use crate::engine::target::{DrawnElement, RenderTarget};
use crate::render::figure::Figure;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Vertical margin of a new figure, as a fraction of the draw height.
const FIGURE_Y_MARGIN: f64 = 0.7;

/// Where the workflow gets its artist from.
#[derive(Debug, Clone, PartialEq)]
pub enum ArtistSource {
    Preset(String),
    File(PathBuf),
    Artist(SecStructArtist),
}

impl Default for ArtistSource {
    fn default() -> Self {
        Self::Preset("default".to_string())
    }
}

impl ArtistSource {
    pub fn resolve(&self) -> Result<SecStructArtist, ConfigError> {
        match self {
            Self::Preset(name) => SecStructArtist::from_preset(name),
            Self::File(path) => SecStructArtist::from_config_path(path),
            Self::Artist(artist) => Ok(artist.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawOptions {
    pub artist: ArtistSource,
    pub positions: Positions,
    pub y: f64,
    pub overrides: DrawStyleOverrides,
    /// Pixel size of a new figure; derived from the residue count when unset.
    pub figure_size: Option<(u32, u32)>,
    pub legend: bool,
    pub axes: bool,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            artist: ArtistSource::default(),
            positions: Positions::default(),
            y: 1.0,
            overrides: DrawStyleOverrides::default(),
            figure_size: None,
            legend: false,
            axes: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DrawOutput {
    /// The figure created for this call; `None` when a target was supplied.
    pub figure: Option<Figure>,
    pub elements: Vec<DrawnElement>,
    /// The artist after drawing, with its drawn codes recorded.
    pub artist: SecStructArtist,
}

/// Draws a secondary structure annotation for `labels`.
///
/// With a `target`, shapes go to the caller's surface and nothing else is
/// touched. Without one, a new [`Figure`] is created, framed around the
/// annotation (`y ± 0.7 * height` vertically), and returned in the output.
#[instrument(skip_all, name = "draw_workflow")]
pub fn draw_secondary_structure(
    labels: &str,
    target: Option<&mut dyn RenderTarget>,
    options: &DrawOptions,
) -> Result<DrawOutput, ArtistError> {
    let mut artist = options.artist.resolve()?;

    match target {
        Some(target) => {
            let elements = artist.draw(
                labels,
                &options.positions,
                options.y,
                &options.overrides,
                target,
            )?;
            Ok(DrawOutput {
                figure: None,
                elements,
                artist,
            })
        }
        None => {
            let residues = labels.chars().count();
            let mut figure = match options.figure_size {
                Some(size) => Figure::new(size),
                None => Figure::for_residues(residues),
            };
            let elements = artist.draw(
                labels,
                &options.positions,
                options.y,
                &options.overrides,
                &mut figure,
            )?;

            let height = artist.drawstyle().with_updates(&options.overrides).height;
            let margin = FIGURE_Y_MARGIN * height;
            if margin > 0.0 {
                figure.set_y_range((options.y - margin)..(options.y + margin));
            }
            figure.set_axes(options.axes);
            if options.legend {
                figure.set_legend(artist.legend_entries(true, MultiHandle::First));
            }
            info!(
                "Drew {} residues into a new {}x{} figure",
                residues,
                figure.size().0,
                figure.size().1
            );
            Ok(DrawOutput {
                figure: Some(figure),
                elements,
                artist,
            })
        }
    }
}
