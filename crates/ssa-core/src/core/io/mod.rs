//! # I/O Module
//!
//! Reading and writing of the files the library understands: artist
//! configuration documents and per-residue label tracks.
//!
//! ## Key Components
//!
//! - [`format`] - Configuration formats and their inference from file extensions
//! - [`config`] - Artist configuration documents (TOML, JSON, YAML) and their validation
//! - [`track`] - CSV label tracks with optional explicit x positions
//!
//! ## Document Layout
//!
//! ```toml
//! [drawstyle]
//! height = 1.0
//!
//! [[elements]]
//! code = "H"
//! label = "Helix"
//! primitives = ["helix-1"]
//!
//! [[primitives]]
//! key = "helix-1"
//! type = "helix"
//! fillcolor = "#f08080"
//! ```

pub mod config;
pub mod format;
pub mod track;
