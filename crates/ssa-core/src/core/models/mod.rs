//! # Core Models Module
//!
//! This module contains the plain data types every other layer of the library
//! builds on.
//!
//! ## Key Components
//!
//! - [`run`] - Segmentation of a label string into maximal runs of identical codes
//! - [`drawstyle`] - Global drawing settings (height, stride, line width, z-order)
//! - [`color`] - RGBA colors parsed from hex strings, names, or gray levels
//! - [`shape`] - Polygons and polylines in data coordinates, plus bounding boxes
//!
//! ## Usage
//!
//! ```
//! use secstructartist::core::models::run::segment_runs;
//!
//! let runs = segment_runs("LLHHHHSSS");
//! assert_eq!(runs.len(), 3);
//! assert_eq!(runs[1].code, 'H');
//! assert_eq!(runs[1].start, 2);
//! ```

pub mod color;
pub mod drawstyle;
pub mod run;
pub mod shape;
