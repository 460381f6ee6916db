use super::base::{Primitive, PrimitiveStyle, RunFrame};
use crate::core::models::drawstyle::DrawStyle;
use crate::core::models::shape::Shape;
use nalgebra::Point2;

pub const DEFAULT_ARROW_TIP_LENGTH: f64 = 3.0;
pub const SHAFT_HEIGHT_RATIO: f64 = 0.7;

/// The block arrow used for beta strands.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowPrimitive {
    pub style: PrimitiveStyle,
    /// Length of the arrow head, in residues.
    pub arrow_tip_length: f64,
    /// Height multiplier of the shaft. Defaults to 70% of the head height.
    pub shaft_height_scalar: Option<f64>,
}

impl Default for ArrowPrimitive {
    fn default() -> Self {
        Self {
            style: PrimitiveStyle::default(),
            arrow_tip_length: DEFAULT_ARROW_TIP_LENGTH,
            shaft_height_scalar: None,
        }
    }
}

impl ArrowPrimitive {
    pub fn shaft_height_scalar(&self) -> f64 {
        self.shaft_height_scalar
            .unwrap_or(SHAFT_HEIGHT_RATIO * self.style.height_scalar)
    }

    fn outline(&self, x0: f64, y: f64, width: f64, tip: f64, height: f64) -> Vec<Point2<f64>> {
        let x2 = x0 + width;
        let x1 = x2 - tip;
        let head = 0.5 * height * self.style.height_scalar;
        let shaft = 0.5 * height * self.shaft_height_scalar();

        if x1 <= x0 {
            vec![
                Point2::new(x0, y - head),
                Point2::new(x2, y),
                Point2::new(x0, y + head),
            ]
        } else {
            vec![
                Point2::new(x0, y - shaft),
                Point2::new(x1, y - shaft),
                Point2::new(x1, y - head),
                Point2::new(x2, y),
                Point2::new(x1, y + head),
                Point2::new(x1, y + shaft),
                Point2::new(x0, y + shaft),
            ]
        }
    }
}

impl Primitive for ArrowPrimitive {
    fn shapes(&self, frame: &RunFrame, drawstyle: &DrawStyle) -> Vec<Shape> {
        let (x0, y0) = self.style.origin(frame);
        let tip = self.arrow_tip_length * frame.residue_width();
        let points = self.outline(x0, y0, frame.width, tip, drawstyle.height);
        vec![Shape::polygon(
            points,
            self.style.fillcolor,
            self.style.stroke(drawstyle),
            self.style.zorder(drawstyle),
        )]
    }

    fn legend_glyph(&self, drawstyle: &DrawStyle) -> Vec<Shape> {
        let points = self.outline(0.0, 0.5, 1.0, 0.4, 1.0);
        vec![Shape::polygon(
            points,
            self.style.fillcolor,
            self.style.stroke(drawstyle),
            0.0,
        )]
    }

    fn style(&self) -> &PrimitiveStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut PrimitiveStyle {
        &mut self.style
    }
}
