use super::artist::SecStructArtist;
use super::element::ElementArtist;
use crate::core::models::drawstyle::DrawStyle;
use crate::core::models::shape::Shape;
use crate::core::primitives::Primitive;

/// Which primitives of a multi-primitive element make up its legend glyph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MultiHandle {
    #[default]
    First,
    Last,
    /// All primitives, overlaid.
    Tuple,
}

/// One legend row: a glyph in the unit box and its label.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub code: char,
    pub label: String,
    pub glyph: Vec<Shape>,
}

impl ElementArtist {
    pub fn legend_glyph(&self, drawstyle: &DrawStyle, multi_handle: MultiHandle) -> Vec<Shape> {
        let primitives = self.primitives();
        let selected = match multi_handle {
            MultiHandle::First => primitives.first().map(std::slice::from_ref).unwrap_or(&[]),
            MultiHandle::Last => primitives.last().map(std::slice::from_ref).unwrap_or(&[]),
            MultiHandle::Tuple => primitives,
        };
        selected
            .iter()
            .flat_map(|p| p.legend_glyph(drawstyle))
            .collect()
    }
}

impl SecStructArtist {
    /// Legend entries in element order.
    ///
    /// With `only_drawn`, only codes drawn since the last reset are listed.
    /// Elements with an empty label are left out.
    pub fn legend_entries(&self, only_drawn: bool, multi_handle: MultiHandle) -> Vec<LegendEntry> {
        self.elements()
            .filter(|(code, _)| !only_drawn || self.drawn_codes().contains(code))
            .filter(|(_, element)| !element.label().is_empty())
            .map(|(code, element)| LegendEntry {
                code,
                label: element.label().to_string(),
                glyph: element.legend_glyph(self.drawstyle(), multi_handle),
            })
            .collect()
    }
}
