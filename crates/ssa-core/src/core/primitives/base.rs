use crate::core::models::color::Color;
use crate::core::models::drawstyle::DrawStyle;
use crate::core::models::shape::{Shape, Stroke};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
#[error("Primitive parameter '{name}' {reason}, got {value}")]
pub struct ParameterError {
    pub name: &'static str,
    pub value: f64,
    pub reason: &'static str,
}

/// Checks a numeric primitive parameter against the range it accepts.
///
/// Offsets only need to be finite. Scalars and lengths must be non-negative,
/// and the ribbon period and width must be strictly positive.
pub fn check_parameter(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError {
            name,
            value,
            reason: "must be finite",
        });
    }
    let rule = match name {
        "x-offset" | "y-offset" | "zorder-offset" => None,
        "ribbon-period" | "ribbon-width" => Some((value > 0.0, "must be positive")),
        _ => Some((value >= 0.0, "must be non-negative")),
    };
    match rule {
        Some((false, reason)) => Err(ParameterError {
            name,
            value,
            reason,
        }),
        _ => Ok(value),
    }
}

/// Placement of one run in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunFrame {
    pub x: f64,        // Left edge of the first residue
    pub y: f64,        // Baseline (vertical center) of the schematic
    pub width: f64,    // Horizontal extent covered by the run
    pub length: usize, // Number of residues in the run
}

impl RunFrame {
    pub fn x_end(&self) -> f64 {
        self.x + self.width
    }

    /// Mean horizontal extent of one residue within the run.
    pub fn residue_width(&self) -> f64 {
        if self.length == 0 {
            self.width
        } else {
            self.width / self.length as f64
        }
    }
}

/// Appearance parameters shared by every primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimitiveStyle {
    pub x_offset: f64,
    pub y_offset: f64,
    pub height_scalar: f64,    // Multiplier on the draw style height
    pub linewidth_scalar: f64, // Multiplier on the draw style line width
    pub zorder_offset: f64,    // Added to the draw style z-order
    pub linecolor: Color,
    pub fillcolor: Option<Color>, // `None` leaves closed shapes unfilled
}

impl Default for PrimitiveStyle {
    fn default() -> Self {
        Self {
            x_offset: 0.0,
            y_offset: 0.0,
            height_scalar: 1.0,
            linewidth_scalar: 1.0,
            zorder_offset: 0.0,
            linecolor: Color::BLACK,
            fillcolor: Some(Color::WHITE),
        }
    }
}

impl PrimitiveStyle {
    /// The outline for this primitive, or `None` when the effective width is zero.
    pub fn stroke(&self, drawstyle: &DrawStyle) -> Option<Stroke> {
        let width = drawstyle.linewidth * self.linewidth_scalar;
        (width > 0.0).then_some(Stroke {
            color: self.linecolor,
            width,
        })
    }

    pub fn zorder(&self, drawstyle: &DrawStyle) -> f64 {
        drawstyle.zorder + self.zorder_offset
    }

    /// Half of the primitive's full height.
    pub fn half_height(&self, drawstyle: &DrawStyle) -> f64 {
        0.5 * drawstyle.height * self.height_scalar
    }

    /// Origin of the primitive after applying its offsets.
    pub fn origin(&self, frame: &RunFrame) -> (f64, f64) {
        (frame.x + self.x_offset, frame.y + self.y_offset)
    }
}

/// Geometry generation for one kind of graphical primitive.
///
/// Primitives are combined by an element artist to form the cartoon of one
/// secondary structure element.
pub trait Primitive {
    /// Computes the shapes for one run.
    ///
    /// # Arguments
    ///
    /// * `frame` - Extent and baseline of the run.
    /// * `drawstyle` - Global drawing settings.
    ///
    /// # Return
    ///
    /// The shapes in data coordinates. An empty vector is valid, e.g. for a
    /// line with zero width.
    fn shapes(&self, frame: &RunFrame, drawstyle: &DrawStyle) -> Vec<Shape>;

    /// Computes a legend glyph inside the unit box `[0, 1] x [0, 1]`.
    fn legend_glyph(&self, drawstyle: &DrawStyle) -> Vec<Shape>;

    fn style(&self) -> &PrimitiveStyle;

    fn style_mut(&mut self) -> &mut PrimitiveStyle;
}
