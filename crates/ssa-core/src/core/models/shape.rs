use super::color::Color;
use nalgebra::Point2;

/// Outline appearance of a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64, // Line width in points
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    /// A closed, optionally filled polygon.
    Polygon {
        points: Vec<Point2<f64>>,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    /// An open polyline.
    Polyline {
        points: Vec<Point2<f64>>,
        stroke: Stroke,
    },
}

/// A geometric primitive in data coordinates, ready to be handed to a render target.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub zorder: f64,
}

impl Shape {
    pub fn polygon(
        points: Vec<Point2<f64>>,
        fill: Option<Color>,
        stroke: Option<Stroke>,
        zorder: f64,
    ) -> Self {
        Self {
            kind: ShapeKind::Polygon {
                points,
                fill,
                stroke,
            },
            zorder,
        }
    }

    pub fn polyline(points: Vec<Point2<f64>>, stroke: Stroke, zorder: f64) -> Self {
        Self {
            kind: ShapeKind::Polyline { points, stroke },
            zorder,
        }
    }

    pub fn points(&self) -> &[Point2<f64>] {
        match &self.kind {
            ShapeKind::Polygon { points, .. } | ShapeKind::Polyline { points, .. } => points,
        }
    }

    pub fn is_polygon(&self) -> bool {
        matches!(self.kind, ShapeKind::Polygon { .. })
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.points())
    }

    /// Maps every vertex through `f`, keeping the appearance.
    pub fn map_points(&self, f: impl Fn(&Point2<f64>) -> Point2<f64>) -> Self {
        let remap = |points: &[Point2<f64>]| -> Vec<Point2<f64>> { points.iter().map(&f).collect() };
        let kind = match &self.kind {
            ShapeKind::Polygon {
                points,
                fill,
                stroke,
            } => ShapeKind::Polygon {
                points: remap(points),
                fill: *fill,
                stroke: *stroke,
            },
            ShapeKind::Polyline { points, stroke } => ShapeKind::Polyline {
                points: remap(points),
                stroke: *stroke,
            },
        };
        Self {
            kind,
            zorder: self.zorder,
        }
    }
}

/// Axis-aligned bounding box in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn from_points(points: &[Point2<f64>]) -> Option<Self> {
        let first = points.first()?;
        let init = Self::new(first.x, first.x, first.y, first.y);
        Some(points[1..].iter().fold(init, |b, p| b.including(p)))
    }

    pub fn including(&self, p: &Point2<f64>) -> Self {
        Self::new(
            self.x_min.min(p.x),
            self.x_max.max(p.x),
            self.y_min.min(p.y),
            self.y_max.max(p.y),
        )
    }

    pub fn union(&self, other: &Bounds) -> Self {
        Self::new(
            self.x_min.min(other.x_min),
            self.x_max.max(other.x_max),
            self.y_min.min(other.y_min),
            self.y_max.max(other.y_max),
        )
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}
