use super::base::{Primitive, PrimitiveStyle, RunFrame};
use crate::core::models::drawstyle::DrawStyle;
use crate::core::models::shape::Shape;
use nalgebra::Point2;

pub const LINE_ZORDER_OFFSET: f64 = -0.1;

/// A horizontal line segment spanning the run, used for loops.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePrimitive {
    pub style: PrimitiveStyle,
}

impl Default for LinePrimitive {
    fn default() -> Self {
        Self {
            style: PrimitiveStyle {
                zorder_offset: LINE_ZORDER_OFFSET,
                ..Default::default()
            },
        }
    }
}

impl Primitive for LinePrimitive {
    fn shapes(&self, frame: &RunFrame, drawstyle: &DrawStyle) -> Vec<Shape> {
        let Some(stroke) = self.style.stroke(drawstyle) else {
            return Vec::new();
        };
        let (x0, y0) = self.style.origin(frame);
        let x1 = x0 + frame.width;
        vec![Shape::polyline(
            vec![Point2::new(x0, y0), Point2::new(x1, y0)],
            stroke,
            self.style.zorder(drawstyle),
        )]
    }

    fn legend_glyph(&self, drawstyle: &DrawStyle) -> Vec<Shape> {
        self.style
            .stroke(drawstyle)
            .map(|stroke| {
                Shape::polyline(
                    vec![Point2::new(0.0, 0.5), Point2::new(1.0, 0.5)],
                    stroke,
                    0.0,
                )
            })
            .into_iter()
            .collect()
    }

    fn style(&self) -> &PrimitiveStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut PrimitiveStyle {
        &mut self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::color::Color;
    use crate::core::models::shape::ShapeKind;

    fn frame() -> RunFrame {
        RunFrame {
            x: 1.0,
            y: 0.5,
            width: 4.0,
            length: 4,
        }
    }

    #[test]
    fn spans_the_run_at_the_baseline() {
        let line = LinePrimitive::default();
        let shapes = line.shapes(&frame(), &DrawStyle::default());
        assert_eq!(shapes.len(), 1);
        assert_eq!(
            shapes[0].points(),
            &[Point2::new(1.0, 0.5), Point2::new(5.0, 0.5)]
        );
        assert!((shapes[0].zorder - 4.9).abs() < 1e-12);
    }

    #[test]
    fn uses_line_color_and_scaled_width() {
        let mut line = LinePrimitive::default();
        line.style.linecolor = Color::rgb(1, 2, 3);
        line.style.linewidth_scalar = 3.0;
        let shapes = line.shapes(&frame(), &DrawStyle::default());
        match &shapes[0].kind {
            ShapeKind::Polyline { stroke, .. } => {
                assert_eq!(stroke.color, Color::rgb(1, 2, 3));
                assert_eq!(stroke.width, 3.0);
            }
            other => panic!("Expected polyline, got {other:?}"),
        }
    }

    #[test]
    fn offsets_shift_the_segment() {
        let mut line = LinePrimitive::default();
        line.style.x_offset = 0.5;
        line.style.y_offset = 0.25;
        let shapes = line.shapes(&frame(), &DrawStyle::default());
        assert_eq!(
            shapes[0].points(),
            &[Point2::new(1.5, 0.75), Point2::new(5.5, 0.75)]
        );
    }

    #[test]
    fn invisible_line_emits_nothing() {
        let mut line = LinePrimitive::default();
        line.style.linewidth_scalar = 0.0;
        assert!(line.shapes(&frame(), &DrawStyle::default()).is_empty());
        assert!(line.legend_glyph(&DrawStyle::default()).is_empty());
    }
}
