use crate::core::models::shape::{Bounds, Shape};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TargetError {
    #[error("Drawing backend failed: {0}")]
    Backend(String),
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Unsupported output format for '{0}' (expected .svg or .png)")]
    UnsupportedOutput(String),
}

/// A plotting surface that accepts shapes in data coordinates.
///
/// The surface is owned by the caller; the artist only borrows it for the
/// duration of one draw call and never clears or finalizes it.
pub trait RenderTarget {
    fn draw_shape(&mut self, shape: &Shape) -> Result<(), TargetError>;
}

/// Collects shapes in emission order.
impl RenderTarget for Vec<Shape> {
    fn draw_shape(&mut self, shape: &Shape) -> Result<(), TargetError> {
        self.push(shape.clone());
        Ok(())
    }
}

/// The graphical object created for one run of identical codes.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnElement {
    pub code: char,
    pub start: usize,  // Index of the first residue of the run
    pub length: usize, // Number of residues in the run
    pub x_start: f64,
    pub x_end: f64,
    pub shapes: Vec<Shape>,
}

impl DrawnElement {
    pub fn bounds(&self) -> Option<Bounds> {
        self.shapes
            .iter()
            .filter_map(Shape::bounds)
            .reduce(|a, b| a.union(&b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::color::Color;
    use nalgebra::Point2;

    #[test]
    fn vector_target_records_shapes_in_order() {
        let mut target: Vec<Shape> = Vec::new();
        let a = Shape::polygon(vec![Point2::new(0.0, 0.0)], Some(Color::WHITE), None, 1.0);
        let b = Shape::polygon(vec![Point2::new(1.0, 0.0)], None, None, 0.0);
        target.draw_shape(&a).unwrap();
        target.draw_shape(&b).unwrap();
        assert_eq!(target, vec![a, b]);
    }

    #[test]
    fn element_bounds_cover_all_shapes() {
        let element = DrawnElement {
            code: 'H',
            start: 0,
            length: 2,
            x_start: 0.0,
            x_end: 2.0,
            shapes: vec![
                Shape::polygon(vec![Point2::new(0.0, -0.5), Point2::new(1.0, 0.0)], None, None, 0.0),
                Shape::polygon(vec![Point2::new(2.0, 0.5)], None, None, 0.0),
            ],
        };
        assert_eq!(element.bounds(), Some(Bounds::new(0.0, 2.0, -0.5, 0.5)));
    }
}
