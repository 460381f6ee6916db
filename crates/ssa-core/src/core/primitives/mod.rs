//! # Primitives Module
//!
//! Geometric building blocks of the secondary structure cartoon. Each
//! primitive turns one run of identical codes into a handful of shapes in data
//! coordinates.
//!
//! ## Key Components
//!
//! - [`base`] - The [`Primitive`] trait, shared [`PrimitiveStyle`] and the [`RunFrame`] a run is drawn into
//! - [`line`] - Horizontal segment used for loops
//! - [`arrow`] - Block arrow used for strands
//! - [`helix`] - Twisted ribbon used for helices
//! - [`rectangle`] - Plain box used by the simple presets
//!
//! [`PrimitiveArtist`] is the closed set of primitive kinds an element can be
//! composed of; it dispatches to the concrete implementations.

pub mod arrow;
pub mod base;
pub mod helix;
pub mod line;
pub mod rectangle;

pub use arrow::ArrowPrimitive;
pub use base::{check_parameter, ParameterError, Primitive, PrimitiveStyle, RunFrame};
pub use helix::HelixPrimitive;
pub use line::LinePrimitive;
pub use rectangle::RectanglePrimitive;

use crate::core::models::drawstyle::DrawStyle;
use crate::core::models::shape::Shape;

#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveArtist {
    Line(LinePrimitive),
    Arrow(ArrowPrimitive),
    Helix(HelixPrimitive),
    Rectangle(RectanglePrimitive),
}

impl PrimitiveArtist {
    /// The type tag used in configuration documents.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Arrow(_) => "arrow",
            Self::Helix(_) => "helix",
            Self::Rectangle(_) => "rectangle",
        }
    }

    fn inner(&self) -> &dyn Primitive {
        match self {
            Self::Line(p) => p,
            Self::Arrow(p) => p,
            Self::Helix(p) => p,
            Self::Rectangle(p) => p,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Primitive {
        match self {
            Self::Line(p) => p,
            Self::Arrow(p) => p,
            Self::Helix(p) => p,
            Self::Rectangle(p) => p,
        }
    }
}

impl Primitive for PrimitiveArtist {
    fn shapes(&self, frame: &RunFrame, drawstyle: &DrawStyle) -> Vec<Shape> {
        self.inner().shapes(frame, drawstyle)
    }

    fn legend_glyph(&self, drawstyle: &DrawStyle) -> Vec<Shape> {
        self.inner().legend_glyph(drawstyle)
    }

    fn style(&self) -> &PrimitiveStyle {
        self.inner().style()
    }

    fn style_mut(&mut self) -> &mut PrimitiveStyle {
        self.inner_mut().style_mut()
    }
}

impl From<LinePrimitive> for PrimitiveArtist {
    fn from(p: LinePrimitive) -> Self {
        Self::Line(p)
    }
}

impl From<ArrowPrimitive> for PrimitiveArtist {
    fn from(p: ArrowPrimitive) -> Self {
        Self::Arrow(p)
    }
}

impl From<HelixPrimitive> for PrimitiveArtist {
    fn from(p: HelixPrimitive) -> Self {
        Self::Helix(p)
    }
}

impl From<RectanglePrimitive> for PrimitiveArtist {
    fn from(p: RectanglePrimitive) -> Self {
        Self::Rectangle(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_reaches_the_concrete_primitive() {
        let mut artist = PrimitiveArtist::from(LinePrimitive::default());
        assert_eq!(artist.kind(), "line");
        assert_eq!(artist.style().zorder_offset, line::LINE_ZORDER_OFFSET);
        artist.style_mut().linewidth_scalar = 4.0;
        match &artist {
            PrimitiveArtist::Line(line) => assert_eq!(line.style.linewidth_scalar, 4.0),
            other => panic!("Expected line, got {other:?}"),
        }
    }

    #[test]
    fn kinds_are_distinct() {
        let kinds = [
            PrimitiveArtist::from(LinePrimitive::default()).kind(),
            PrimitiveArtist::from(ArrowPrimitive::default()).kind(),
            PrimitiveArtist::from(HelixPrimitive::default()).kind(),
            PrimitiveArtist::from(RectanglePrimitive::default()).kind(),
        ];
        assert_eq!(kinds, ["line", "arrow", "helix", "rectangle"]);
    }
}
