//! # Core Module
//!
//! This module provides the stateless building blocks of secstructartist: the
//! data types describing a secondary structure drawing, the geometry of its
//! graphical primitives, and the files that configure it.
//!
//! ## Overview
//!
//! A secondary structure annotation is a string of single-character codes, one
//! per residue. The core splits it into runs of identical codes and knows how to
//! turn one run into shapes (ribbons, arrows, lines, boxes) in data
//! coordinates. Nothing in this module holds drawing state or talks to a
//! plotting backend.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Runs, draw style, colors, and emitted shapes
//! - **Geometry** ([`primitives`]) - The primitive kinds an element is composed of
//! - **File I/O** ([`io`]) - Artist configuration documents and CSV label tracks
//! - **Built-in Styles** ([`presets`]) - Named configurations shipped with the library
//! - **Utilities** ([`utils`]) - Line equations used by the ribbon geometry
//!
//! ## Key Capabilities
//!
//! - **Run segmentation** of arbitrary label strings
//! - **Deterministic geometry** for every primitive, including the trimmed helix ribbon
//! - **Multi-format configuration** in TOML, JSON, or YAML

pub mod io;
pub mod models;
pub mod presets;
pub mod primitives;
pub mod utils;
