use crate::core::models::color::Color;
use crate::core::models::shape::{Shape, ShapeKind, Stroke};
use crate::engine::target::{RenderTarget, TargetError};
use nalgebra::Point2;
use plotters::coord::CoordTranslate;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::{Cartesian2d, DrawingArea, DrawingBackend, PathElement, Polygon, RGBAColor};
use plotters::style::Color as _;

pub(crate) fn backend_error(e: impl std::fmt::Display) -> TargetError {
    TargetError::Backend(e.to_string())
}

pub fn to_rgba(color: &Color) -> RGBAColor {
    RGBAColor(color.r, color.g, color.b, color.opacity())
}

/// Stroke width in pixels. Visible strokes are at least one pixel wide.
pub fn stroke_pixels(stroke: &Stroke, line_scale: f64) -> u32 {
    ((stroke.width * line_scale).round() as u32).max(1)
}

/// Draws one shape onto any plotters drawing area, mapping data points with `map`.
pub(crate) fn draw_mapped<DB, CT, C>(
    area: &DrawingArea<DB, CT>,
    shape: &Shape,
    line_scale: f64,
    map: impl Fn(&Point2<f64>) -> C,
) -> Result<(), TargetError>
where
    DB: DrawingBackend,
    CT: CoordTranslate<From = C>,
{
    match &shape.kind {
        ShapeKind::Polygon {
            points,
            fill,
            stroke,
        } => {
            if points.len() < 2 {
                return Ok(());
            }
            if let Some(fill) = fill {
                let vertices: Vec<C> = points.iter().map(&map).collect();
                area.draw(&Polygon::new(vertices, to_rgba(fill).filled()))
                    .map_err(backend_error)?;
            }
            if let Some(stroke) = stroke {
                let outline: Vec<C> = points.iter().chain(points.first()).map(&map).collect();
                let style = to_rgba(&stroke.color).stroke_width(stroke_pixels(stroke, line_scale));
                area.draw(&PathElement::new(outline, style))
                    .map_err(backend_error)?;
            }
        }
        ShapeKind::Polyline { points, stroke } => {
            if points.len() < 2 {
                return Ok(());
            }
            let path: Vec<C> = points.iter().map(&map).collect();
            let style = to_rgba(&stroke.color).stroke_width(stroke_pixels(stroke, line_scale));
            area.draw(&PathElement::new(path, style))
                .map_err(backend_error)?;
        }
    }
    Ok(())
}

/// A render target drawing directly into the plotting area of a caller's chart.
///
/// ```no_run
/// use plotters::prelude::*;
/// use secstructartist::engine::artist::SecStructArtist;
/// use secstructartist::engine::positions::Positions;
/// use secstructartist::core::models::drawstyle::DrawStyleOverrides;
/// use secstructartist::render::canvas::PlotArea;
///
/// let root = SVGBackend::new("plot.svg", (400, 200)).into_drawing_area();
/// let chart = ChartBuilder::on(&root)
///     .build_cartesian_2d(0.0..20.0, -1.0..1.0)
///     .unwrap();
/// let mut artist = SecStructArtist::from_preset("default").unwrap();
/// let mut area = PlotArea::new(chart.plotting_area());
/// artist
///     .draw("LLHHHHHHHHSSSSSLL", &Positions::default(), 0.0, &DrawStyleOverrides::default(), &mut area)
///     .unwrap();
/// ```
pub struct PlotArea<'a, DB: DrawingBackend> {
    area: &'a DrawingArea<DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    line_scale: f64, // Pixels per point of line width
}

impl<'a, DB: DrawingBackend> PlotArea<'a, DB> {
    pub fn new(area: &'a DrawingArea<DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>) -> Self {
        Self {
            area,
            line_scale: 1.0,
        }
    }

    pub fn with_line_scale(mut self, line_scale: f64) -> Self {
        self.line_scale = line_scale;
        self
    }
}

impl<DB: DrawingBackend> RenderTarget for PlotArea<'_, DB> {
    fn draw_shape(&mut self, shape: &Shape) -> Result<(), TargetError> {
        draw_mapped(self.area, shape, self.line_scale, |p| (p.x, p.y))
    }
}
