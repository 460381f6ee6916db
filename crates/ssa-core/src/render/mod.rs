//! # Render Module
//!
//! Adapters between the engine's backend-agnostic shapes and the `plotters`
//! drawing library.
//!
//! ## Overview
//!
//! The engine emits [`Shape`](crate::core::models::shape::Shape)s to any
//! [`RenderTarget`](crate::engine::target::RenderTarget). This module provides
//! the two targets shipped with the crate: [`PlotArea`](canvas::PlotArea), which
//! draws straight into the plotting area of a chart the caller already owns,
//! and [`Figure`](figure::Figure), a recording surface that frames the drawn
//! shapes and exports them as SVG or PNG.
//!
//! ## Architecture
//!
//! - **Canvas** ([`canvas`]) - Shape to plotters element conversion, chart adapter
//! - **Figure** ([`figure`]) - Self-sized figure with legend, axes, and file export
//! - **Fonts** ([`font`]) - Bundled font registration for legend and axis text

pub mod canvas;
pub mod figure;
pub mod font;
