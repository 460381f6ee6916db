use nalgebra::Point2;

const SLOPE_TOLERANCE: f64 = 1e-9;

/// A non-vertical line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinEq {
    pub slope: f64,
    pub intercept: f64,
}

impl LinEq {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// The line through two points, or `None` if they are vertically aligned.
    pub fn through(p0: &Point2<f64>, p1: &Point2<f64>) -> Option<Self> {
        let run = p1.x - p0.x;
        if run.abs() <= SLOPE_TOLERANCE * p0.x.abs().max(p1.x.abs()).max(1.0) {
            return None;
        }
        let slope = (p1.y - p0.y) / run;
        Some(Self::new(slope, p0.y - p0.x * slope))
    }

    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// The x at which the line reaches `y`, or `None` for horizontal lines.
    pub fn x_at(&self, y: f64) -> Option<f64> {
        if self.slope.abs() <= SLOPE_TOLERANCE {
            None
        } else {
            Some((y - self.intercept) / self.slope)
        }
    }

    /// The crossing point of two lines, or `None` for parallel (or identical) lines.
    pub fn intersection(&self, other: &LinEq) -> Option<Point2<f64>> {
        if (self.slope - other.slope).abs() <= SLOPE_TOLERANCE {
            return None;
        }
        let x = (self.intercept - other.intercept) / (other.slope - self.slope);
        Some(Point2::new(x, self.y_at(x)))
    }
}

/// Intersection of the line through `p0`, `p1` with the line through `q0`, `q1`.
pub fn intersection(
    p0: &Point2<f64>,
    p1: &Point2<f64>,
    q0: &Point2<f64>,
    q1: &Point2<f64>,
) -> Option<Point2<f64>> {
    let g = LinEq::through(p0, p1)?;
    let h = LinEq::through(q0, q1)?;
    g.intersection(&h)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn through_two_points() {
        let l = LinEq::through(&Point2::new(0.0, 1.0), &Point2::new(2.0, 5.0)).unwrap();
        assert!(approx(l.slope, 2.0));
        assert!(approx(l.intercept, 1.0));
        assert!(approx(l.y_at(3.0), 7.0));
        assert!(approx(l.x_at(7.0).unwrap(), 3.0));
    }

    #[test]
    fn vertical_lines_are_rejected() {
        assert!(LinEq::through(&Point2::new(1.0, 0.0), &Point2::new(1.0, 3.0)).is_none());
    }

    #[test]
    fn horizontal_line_has_no_inverse() {
        assert!(LinEq::new(0.0, 2.0).x_at(1.0).is_none());
    }

    #[test]
    fn crossing_lines_intersect() {
        let p = intersection(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 1.0),
            &Point2::new(0.0, 2.0),
            &Point2::new(2.0, 0.0),
        )
        .unwrap();
        assert!(approx(p.x, 1.0));
        assert!(approx(p.y, 1.0));
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        let a = LinEq::new(1.0, 0.0);
        assert!(a.intersection(&LinEq::new(1.0, 3.0)).is_none());
        assert!(a.intersection(&a).is_none());
    }
}
