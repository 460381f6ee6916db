use super::base::{Primitive, PrimitiveStyle, RunFrame};
use crate::core::models::color::Color;
use crate::core::models::drawstyle::DrawStyle;
use crate::core::models::shape::Shape;
use crate::core::utils::lineq::intersection;
use nalgebra::Point2;

pub const DEFAULT_RIBBON_PERIOD: f64 = 3.6;
pub const RIBBON_WIDTH_RATIO: f64 = 0.6;
const BACK_ZORDER_SHIFT: f64 = 0.01;

/// A twisted ribbon cartoon for alpha (and other) helices.
///
/// The ribbon alternates between front-facing bands, which run from the top
/// edge down to the bottom edge, and back-facing bands climbing back up. The
/// back bands are trimmed where the adjacent front bands cover them.
#[derive(Debug, Clone, PartialEq)]
pub struct HelixPrimitive {
    pub style: PrimitiveStyle,
    /// Residues per full turn.
    pub ribbon_period: f64,
    /// Horizontal width of a band, in residues. Defaults to 60% of the period.
    pub ribbon_width: Option<f64>,
    /// Fill the back-facing bands instead of outlining them.
    pub fill_inner_ribbon: bool,
    /// Fill of the back-facing bands. Falls back to the fill color.
    pub shadecolor: Option<Color>,
}

impl Default for HelixPrimitive {
    fn default() -> Self {
        Self {
            style: PrimitiveStyle::default(),
            ribbon_period: DEFAULT_RIBBON_PERIOD,
            ribbon_width: None,
            fill_inner_ribbon: false,
            shadecolor: None,
        }
    }
}

/// Vertex lists of the two band families of a ribbon.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ribbon {
    pub front: Vec<Vec<Point2<f64>>>, // Closed: first vertex repeated at the end
    pub back: Vec<Vec<Point2<f64>>>,  // Closed: first vertex repeated at the end
}

struct RibbonGeometry {
    y: f64,
    dx: f64,
    dy: f64,
    band_width: f64,
}

impl RibbonGeometry {
    fn downturn(&self, xc: f64, is_last: bool) -> Vec<Point2<f64>> {
        let xll = xc - 0.5 * self.band_width;
        let xlr = xc + 0.5 * self.band_width;
        let yl = self.y + self.dy;
        if is_last {
            vec![
                Point2::new(xlr, yl),
                Point2::new(xll, yl),
                Point2::new(xc + 0.5 * self.dx, self.y),
                Point2::new(xlr, yl),
            ]
        } else {
            let yr = self.y - self.dy;
            vec![
                Point2::new(xlr, yl),
                Point2::new(xll, yl),
                Point2::new(xll + self.dx, yr),
                Point2::new(xlr + self.dx, yr),
                Point2::new(xlr, yl),
            ]
        }
    }

    fn upturn(left: &[Point2<f64>], right: &[Point2<f64>]) -> Vec<Point2<f64>> {
        let cross = |a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>, d: &Point2<f64>| {
            intersection(a, b, c, d).unwrap_or(*b)
        };
        match (left, right) {
            ([lp], [r0, r1, r2, ..]) => {
                let r0 = cross(lp, r0, r1, r2);
                vec![*lp, *r1, r0, *lp]
            }
            ([_, _, l2, l3, l4, ..], [rp]) => {
                let l2 = cross(rp, l2, l3, l4);
                vec![*rp, l2, *l3, *rp]
            }
            ([_, _, l2, l3, l4, ..], [r0, r1, r2, ..]) => {
                let l2 = cross(r1, l2, l3, l4);
                let r0 = cross(l3, r0, r1, r2);
                vec![*l3, l2, *r1, r0, *l3]
            }
            _ => Vec::new(),
        }
    }
}

impl HelixPrimitive {
    pub fn ribbon_width(&self) -> f64 {
        self.ribbon_width
            .unwrap_or(RIBBON_WIDTH_RATIO * self.ribbon_period)
    }

    /// Number of front and back bands for a run of `length` residues.
    pub fn half_turns(&self, length: usize) -> usize {
        if self.ribbon_period.is_nan() || self.ribbon_period <= 0.0 {
            return 1;
        }
        let n = (2.0 * length as f64 / self.ribbon_period).round_ties_even();
        (n as usize).max(1)
    }

    /// Computes the band outlines of the ribbon for one run.
    pub fn ribbon(&self, frame: &RunFrame, drawstyle: &DrawStyle) -> Ribbon {
        let (x0, y0) = self.style.origin(frame);
        let half_turns = self.half_turns(frame.length);
        let geometry = RibbonGeometry {
            y: y0,
            dx: frame.width / half_turns as f64,
            dy: self.style.half_height(drawstyle),
            band_width: self.ribbon_width() * frame.residue_width(),
        };

        let mut ribbon = Ribbon::default();
        let mut current = vec![Point2::new(x0, y0)];
        let mut x = x0;
        for k in (0..half_turns).step_by(2) {
            let is_last = half_turns - k < 2;
            let next = geometry.downturn(x + 0.5 * geometry.dx, is_last);
            ribbon.back.push(RibbonGeometry::upturn(&current, &next));
            ribbon.front.push(next.clone());
            current = next;
            x += 2.0 * geometry.dx;
        }
        if half_turns % 2 == 0 {
            let end = [Point2::new(x, y0)];
            ribbon.back.push(RibbonGeometry::upturn(&current, &end));
        }
        ribbon.back.retain(|band| !band.is_empty());
        ribbon
    }

    fn back_shape(&self, band: Vec<Point2<f64>>, drawstyle: &DrawStyle) -> Option<Shape> {
        let stroke = self.style.stroke(drawstyle);
        let zorder = self.style.zorder(drawstyle) - BACK_ZORDER_SHIFT;
        if self.fill_inner_ribbon {
            let fill = self.shadecolor.or(self.style.fillcolor);
            Some(Shape::polygon(open(band), fill, stroke, zorder))
        } else {
            stroke.map(|stroke| Shape::polyline(band, stroke, zorder))
        }
    }
}

fn open(mut band: Vec<Point2<f64>>) -> Vec<Point2<f64>> {
    if band.len() > 1 && band.first() == band.last() {
        band.pop();
    }
    band
}

impl Primitive for HelixPrimitive {
    fn shapes(&self, frame: &RunFrame, drawstyle: &DrawStyle) -> Vec<Shape> {
        let Ribbon { front, back } = self.ribbon(frame, drawstyle);
        let stroke = self.style.stroke(drawstyle);
        let zorder = self.style.zorder(drawstyle);

        let mut shapes: Vec<Shape> = back
            .into_iter()
            .filter_map(|band| self.back_shape(band, drawstyle))
            .collect();
        shapes.extend(
            front
                .into_iter()
                .map(|band| Shape::polygon(open(band), self.style.fillcolor, stroke, zorder)),
        );
        shapes
    }

    fn legend_glyph(&self, drawstyle: &DrawStyle) -> Vec<Shape> {
        vec![Shape::polygon(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 1.0),
            ],
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
