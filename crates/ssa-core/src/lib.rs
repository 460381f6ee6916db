//! # secstructartist
//!
//! Cartoon-style secondary structure annotations for scientific plots: helix
//! ribbons, sheet arrows, and loop lines drawn from a per-residue label string
//! such as `"LLLSSSSSLLLLLHHHHHHHH"`.
//!
//! ## Architectural Philosophy
//!
//! The library follows a layered architecture with a clear separation of concerns.
//!
//! - **[`core`]: The Foundation.** Stateless data models (label runs, colors,
//!   draw style, shapes), the geometric primitives, configuration-file I/O, CSV
//!   label tracks, and the built-in presets.
//!
//! - **[`engine`]: The Logic Core.** The stateful `SecStructArtist`, which maps
//!   codes to element artists, validates a draw call as a whole, and emits shapes
//!   in z-order to any `RenderTarget`.
//!
//! - **[`render`]: The Surfaces.** `plotters` integration, both for drawing into
//!   an existing chart and for standalone SVG/PNG figures.
//!
//! - **[`workflows`]: The Public API.** One-call drawing that resolves an artist
//!   and returns the drawn elements together with a figure when needed.

pub mod core;
pub mod engine;
pub mod render;
pub mod workflows;
