//! # Workflows Module
//!
//! High-level entry points that tie the artist, its configuration sources, and
//! the rendering surfaces together.
//!
//! ## Overview
//!
//! A workflow resolves an artist (built-in preset, configuration file, or a
//! prepared artist), draws a label string with it, and either hands the shapes
//! to the caller's surface or builds a framed [`Figure`](crate::render::figure::Figure)
//! ready for export.
//!
//! ## Architecture
//!
//! - **Draw Workflow** ([`draw`]) - One-call rendering of a label string
//!
//! ## Key Capabilities
//!
//! - **Caller-owned or self-owned surfaces**
//! - **Per-call draw style overrides** without touching the artist's defaults

pub mod draw;
