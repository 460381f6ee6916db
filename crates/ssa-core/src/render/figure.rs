use super::canvas::{PlotArea, backend_error, draw_mapped};
use super::font::{FONT_FAMILY, FONT_SIZE_AXIS_LABEL, FONT_SIZE_LEGEND, ensure_fonts_registered};
use crate::core::models::shape::{Bounds, Shape};
use crate::engine::legend::LegendEntry;
use crate::engine::target::{RenderTarget, TargetError};
use nalgebra::Point2;
use plotters::coord::Shift;
use plotters::prelude::{
    BLACK, BitMapBackend, ChartBuilder, DrawingArea, DrawingBackend, IntoDrawingArea, IntoFont,
    SVGBackend, Text, WHITE,
};
use plotters::style::Color as _;
use std::ops::Range;
use std::path::Path;
use tracing::{debug, info};

pub const PIXELS_PER_RESIDUE: u32 = 5;
pub const DEFAULT_HEIGHT: u32 = 75;
pub const MIN_WIDTH: u32 = 200;

const LEGEND_WIDTH: u32 = 120;
const LEGEND_ROW_HEIGHT: i32 = 16;
const GLYPH_SIZE: (i32, i32) = (24, 10);
const AXIS_LABEL_AREA: u32 = 20;

/// A self-contained drawing surface that records shapes and exports them.
///
/// The figure is the surface created by the drawing workflow when the caller
/// does not supply one. Its view defaults to the bounds of everything drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    shapes: Vec<Shape>,
    bounds: Option<Bounds>,
    x_range: Option<Range<f64>>,
    y_range: Option<Range<f64>>,
    size: (u32, u32),
    show_axes: bool,
    legend: Vec<LegendEntry>,
}

impl Default for Figure {
    fn default() -> Self {
        Self::new((MIN_WIDTH, DEFAULT_HEIGHT))
    }
}

impl Figure {
    pub fn new(size: (u32, u32)) -> Self {
        Self {
            shapes: Vec::new(),
            bounds: None,
            x_range: None,
            y_range: None,
            size,
            show_axes: false,
            legend: Vec::new(),
        }
    }

    /// A figure sized for `residues` residues.
    pub fn for_residues(residues: usize) -> Self {
        let width = (residues as u32).saturating_mul(PIXELS_PER_RESIDUE).max(MIN_WIDTH);
        Self::new((width, DEFAULT_HEIGHT))
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn set_size(&mut self, size: (u32, u32)) -> &mut Self {
        self.size = size;
        self
    }

    pub fn set_x_range(&mut self, range: Range<f64>) -> &mut Self {
        self.x_range = Some(range);
        self
    }

    pub fn set_y_range(&mut self, range: Range<f64>) -> &mut Self {
        self.y_range = Some(range);
        self
    }

    pub fn set_axes(&mut self, show: bool) -> &mut Self {
        self.show_axes = show;
        self
    }

    pub fn set_legend(&mut self, entries: Vec<LegendEntry>) -> &mut Self {
        self.legend = entries;
        self
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Bounds of everything drawn so far.
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// The visible x range: the explicit range, else the drawn bounds.
    pub fn x_range(&self) -> Range<f64> {
        self.x_range.clone().unwrap_or_else(|| match self.bounds {
            Some(b) => padded(b.x_min, b.x_max),
            None => 0.0..1.0,
        })
    }

    /// The visible y range: the explicit range, else the drawn bounds.
    pub fn y_range(&self) -> Range<f64> {
        self.y_range.clone().unwrap_or_else(|| match self.bounds {
            Some(b) => padded(b.y_min, b.y_max),
            None => 0.0..1.0,
        })
    }

    fn sorted_shapes(&self) -> Vec<&Shape> {
        let mut shapes: Vec<&Shape> = self.shapes.iter().collect();
        shapes.sort_by(|a, b| a.zorder.total_cmp(&b.zorder));
        shapes
    }

    /// Renders the figure onto a plotters root area.
    pub fn render<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), TargetError> {
        if self.show_axes || !self.legend.is_empty() {
            ensure_fonts_registered()?;
        }
        root.fill(&WHITE).map_err(backend_error)?;

        let plot_area = if self.legend.is_empty() {
            root.clone()
        } else {
            let (width, _) = root.dim_in_pixel();
            let split = width.saturating_sub(LEGEND_WIDTH).max(1) as i32;
            let (plot, legend) = root.split_horizontally(split);
            self.render_legend(&legend)?;
            plot
        };

        let mut builder = ChartBuilder::on(&plot_area);
        if self.show_axes {
            builder.x_label_area_size(AXIS_LABEL_AREA);
        }
        let mut chart = builder
            .build_cartesian_2d(self.x_range(), self.y_range())
            .map_err(backend_error)?;
        if self.show_axes {
            chart
                .configure_mesh()
                .disable_y_mesh()
                .disable_y_axis()
                .light_line_style(WHITE.mix(0.0))
                .label_style((FONT_FAMILY, FONT_SIZE_AXIS_LABEL).into_font().color(&BLACK))
                .draw()
                .map_err(backend_error)?;
        }

        let mut target = PlotArea::new(chart.plotting_area());
        for shape in self.sorted_shapes() {
            target.draw_shape(shape)?;
        }
        Ok(())
    }

    fn render_legend<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<(), TargetError> {
        let (glyph_w, glyph_h) = GLYPH_SIZE;
        for (row, entry) in self.legend.iter().enumerate() {
            let top = 4 + row as i32 * LEGEND_ROW_HEIGHT;
            let left = 4;
            let to_pixel = |p: &Point2<f64>| {
                (
                    left + (p.x * glyph_w as f64).round() as i32,
                    top + ((1.0 - p.y) * glyph_h as f64).round() as i32,
                )
            };
            for shape in &entry.glyph {
                draw_mapped(area, shape, 1.0, to_pixel)?;
            }
            area.draw(&Text::new(
                entry.label.clone(),
                (left + glyph_w + 6, top),
                (FONT_FAMILY, FONT_SIZE_LEGEND).into_font().color(&BLACK),
            ))
            .map_err(backend_error)?;
        }
        Ok(())
    }

    /// Renders the figure as an SVG document.
    pub fn to_svg_string(&self) -> Result<String, TargetError> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.size).into_drawing_area();
            self.render(&root)?;
            root.present().map_err(backend_error)?;
        }
        Ok(svg)
    }

    pub fn save_svg(&self, path: &Path) -> Result<(), TargetError> {
        let svg = self.to_svg_string()?;
        std::fs::write(path, svg).map_err(|source| TargetError::Io {
            path: path.to_string_lossy().to_string(),
            source,
        })?;
        info!("Figure saved as '{}'", path.display());
        Ok(())
    }

    pub fn save_png(&self, path: &Path) -> Result<(), TargetError> {
        let root = BitMapBackend::new(path, self.size).into_drawing_area();
        self.render(&root)?;
        root.present().map_err(backend_error)?;
        info!("Figure saved as '{}'", path.display());
        Ok(())
    }

    /// Saves as SVG or PNG depending on the file extension.
    pub fn save(&self, path: &Path) -> Result<(), TargetError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("svg") => self.save_svg(path),
            Some("png") => self.save_png(path),
            _ => Err(TargetError::UnsupportedOutput(path.display().to_string())),
        }
    }
}

fn padded(min: f64, max: f64) -> Range<f64> {
    if max > min {
        min..max
    } else {
        (min - 0.5)..(max + 0.5)
    }
}

impl RenderTarget for Figure {
    fn draw_shape(&mut self, shape: &Shape) -> Result<(), TargetError> {
        if let Some(b) = shape.bounds() {
            self.bounds = Some(match self.bounds {
                Some(current) => current.union(&b),
                None => b,
            });
        }
        self.shapes.push(shape.clone());
        debug!("Figure now holds {} shapes", self.shapes.len());
        Ok(())
    }
}
