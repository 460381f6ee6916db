use super::element::ElementArtist;
use super::error::{ArtistError, ConfigError, ValidationError};
use super::positions::Positions;
use super::target::{DrawnElement, RenderTarget};
use crate::core::io::config::{ArtistConfig, ElementConfig};
use crate::core::io::format::ConfigFormat;
use crate::core::models::drawstyle::{DrawStyle, DrawStyleOverrides};
use crate::core::models::run::segment_runs;
use crate::core::models::shape::Shape;
use crate::core::presets;
use crate::core::primitives::RunFrame;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use tracing::{debug, trace};

/// Draws secondary structure annotations from per-residue label strings.
///
/// The artist maps every known code to an [`ElementArtist`] and holds the
/// global [`DrawStyle`]. It remembers which codes it has drawn so that a
/// legend can be limited to them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecStructArtist {
    elements: Vec<(char, ElementArtist)>,
    drawstyle: DrawStyle,
    drawn: HashSet<char>,
}

impl SecStructArtist {
    pub fn new(drawstyle: DrawStyle) -> Self {
        Self {
            elements: Vec::new(),
            drawstyle,
            drawn: HashSet::new(),
        }
    }

    /// Builds the artist for a built-in preset such as `"dssp"`.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        let preset =
            presets::lookup(name).ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))?;
        debug!("Using built-in preset '{}'", name);
        Ok(Self::from(preset.config()))
    }

    pub fn from_config_path(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self::from(ArtistConfig::load(path, None)?))
    }

    pub fn from_config_str(text: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        Ok(Self::from(ArtistConfig::parse(text, format)?))
    }

    pub fn to_config(&self) -> ArtistConfig {
        ArtistConfig {
            drawstyle: self.drawstyle,
            elements: self
                .elements
                .iter()
                .map(|(code, element)| ElementConfig {
                    code: *code,
                    label: element.label().to_string(),
                    primitives: element.primitives().to_vec(),
                })
                .collect(),
        }
    }

    pub fn to_config_string(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        Ok(self.to_config().render(format)?)
    }

    pub fn to_config_path(&self, path: &Path) -> Result<(), ConfigError> {
        Ok(self.to_config().save(path, None)?)
    }

    pub fn element(&self, code: char) -> Result<&ElementArtist, ConfigError> {
        self.elements
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, e)| e)
            .ok_or(ConfigError::UnknownCode {
                code,
                position: None,
            })
    }

    pub fn element_mut(&mut self, code: char) -> Result<&mut ElementArtist, ConfigError> {
        self.elements
            .iter_mut()
            .find(|(c, _)| *c == code)
            .map(|(_, e)| e)
            .ok_or(ConfigError::UnknownCode {
                code,
                position: None,
            })
    }

    pub fn contains(&self, code: char) -> bool {
        self.elements.iter().any(|(c, _)| *c == code)
    }

    /// Adds or replaces the element for `code`, returning the replaced one.
    /// A replaced element keeps its position in the element order.
    pub fn insert_element(&mut self, code: char, element: ElementArtist) -> Option<ElementArtist> {
        match self.elements.iter_mut().find(|(c, _)| *c == code) {
            Some((_, existing)) => Some(std::mem::replace(existing, element)),
            None => {
                self.elements.push((code, element));
                None
            }
        }
    }

    pub fn remove_element(&mut self, code: char) -> Option<ElementArtist> {
        let index = self.elements.iter().position(|(c, _)| *c == code)?;
        self.drawn.remove(&code);
        Some(self.elements.remove(index).1)
    }

    /// Known codes in insertion order.
    pub fn codes(&self) -> impl Iterator<Item = char> + '_ {
        self.elements.iter().map(|(c, _)| *c)
    }

    pub fn elements(&self) -> impl Iterator<Item = (char, &ElementArtist)> {
        self.elements.iter().map(|(c, e)| (*c, e))
    }

    pub fn drawstyle(&self) -> &DrawStyle {
        &self.drawstyle
    }

    /// Persists draw style changes on the artist.
    pub fn update_drawstyle(&mut self, changes: &DrawStyleOverrides) -> Result<(), ValidationError> {
        let updated = self.drawstyle.with_updates(changes);
        updated.validate()?;
        self.drawstyle = updated;
        Ok(())
    }

    /// Codes drawn since construction or the last [`reset_drawn_elements`](Self::reset_drawn_elements).
    pub fn drawn_codes(&self) -> &HashSet<char> {
        &self.drawn
    }

    pub fn reset_drawn_elements(&mut self) {
        self.drawn.clear();
    }

    /// Computes the drawn elements of `labels` without emitting anything.
    ///
    /// Every check runs before any geometry is produced: the draw style, the
    /// baseline, the positions, and that every code has an element artist.
    pub fn layout(
        &self,
        labels: &str,
        positions: &Positions,
        y: f64,
        overrides: &DrawStyleOverrides,
    ) -> Result<Vec<DrawnElement>, ArtistError> {
        let drawstyle = self.drawstyle.with_updates(overrides);
        drawstyle.validate().map_err(ValidationError::from)?;
        if !y.is_finite() {
            return Err(ValidationError::NonFiniteBaseline(y).into());
        }

        let runs = segment_runs(labels);
        let count = runs.last().map_or(0, |r| r.end());
        let edges = positions.resolve(count, drawstyle.stride)?;

        let mut resolved = Vec::with_capacity(runs.len());
        for run in &runs {
            let element = self.element(run.code).map_err(|_| ConfigError::UnknownCode {
                code: run.code,
                position: Some(run.start),
            })?;
            let span = edges
                .span(run.start, run.length)
                .ok_or(ValidationError::LengthMismatch {
                    labels: count,
                    positions: edges.residues(),
                })?;
            resolved.push((run, element, span));
        }

        let drawn = resolved
            .into_iter()
            .map(|(run, element, (x_start, x_end))| {
                let frame = RunFrame {
                    x: x_start,
                    y,
                    width: x_end - x_start,
                    length: run.length,
                };
                trace!(
                    "Run '{}' at {}..{} spans x {:.3}..{:.3}",
                    run.code,
                    run.start,
                    run.end(),
                    x_start,
                    x_end
                );
                DrawnElement {
                    code: run.code,
                    start: run.start,
                    length: run.length,
                    x_start,
                    x_end,
                    shapes: element.shapes(&frame, &drawstyle),
                }
            })
            .collect();
        Ok(drawn)
    }

    /// Draws `labels` onto `target` and returns one drawn element per run.
    ///
    /// Shapes are emitted in ascending z-order; shapes with equal z-order keep
    /// their run order. `overrides` apply to this call only.
    pub fn draw(
        &mut self,
        labels: &str,
        positions: &Positions,
        y: f64,
        overrides: &DrawStyleOverrides,
        target: &mut dyn RenderTarget,
    ) -> Result<Vec<DrawnElement>, ArtistError> {
        let drawn = self.layout(labels, positions, y, overrides)?;

        let mut shapes: Vec<&Shape> = drawn.iter().flat_map(|d| d.shapes.iter()).collect();
        shapes.sort_by(|a, b| a.zorder.total_cmp(&b.zorder));
        for shape in &shapes {
            target.draw_shape(shape)?;
        }

        self.drawn.extend(drawn.iter().map(|d| d.code));
        debug!(
            "Drew {} residues as {} elements ({} shapes)",
            labels.chars().count(),
            drawn.len(),
            shapes.len()
        );
        Ok(drawn)
    }
}

impl From<ArtistConfig> for SecStructArtist {
    fn from(config: ArtistConfig) -> Self {
        let mut artist = Self::new(config.drawstyle);
        for element in config.elements {
            let code = element.code;
            artist.insert_element(code, ElementArtist::from(element));
        }
        artist
    }
}

impl fmt::Display for SecStructArtist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<String> = self.codes().map(|c| format!("{c:?}")).collect();
        write!(f, "SecStructArtist[{}]", codes.join(", "))
    }
}
