use super::base::{Primitive, PrimitiveStyle, RunFrame};
use crate::core::models::drawstyle::DrawStyle;
use crate::core::models::shape::Shape;
use nalgebra::Point2;

/// An axis-aligned box across the run (simple helices, thick loops).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RectanglePrimitive {
    pub style: PrimitiveStyle,
}

fn corners(x0: f64, x1: f64, y: f64, half: f64) -> Vec<Point2<f64>> {
    vec![
        Point2::new(x0, y - half),
        Point2::new(x1, y - half),
        Point2::new(x1, y + half),
        Point2::new(x0, y + half),
    ]
}

impl Primitive for RectanglePrimitive {
    fn shapes(&self, frame: &RunFrame, drawstyle: &DrawStyle) -> Vec<Shape> {
        let (x0, y0) = self.style.origin(frame);
        let half = self.style.half_height(drawstyle);
        vec![Shape::polygon(
            corners(x0, x0 + frame.width, y0, half),
            self.style.fillcolor,
            self.style.stroke(drawstyle),
            self.style.zorder(drawstyle),
        )]
    }

    fn legend_glyph(&self, drawstyle: &DrawStyle) -> Vec<Shape> {
        let half = 0.5 * self.style.height_scalar.min(1.0);
        vec![Shape::polygon(
            corners(0.0, 1.0, 0.5, half),
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
