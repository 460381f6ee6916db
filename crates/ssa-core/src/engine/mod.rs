//! # Engine Module
//!
//! This module holds the stateful part of secstructartist: the artist that
//! knows how each secondary structure code is drawn and turns a label string
//! into shapes on a render target.
//!
//! ## Overview
//!
//! A [`SecStructArtist`](artist::SecStructArtist) maps codes to
//! [`ElementArtist`](element::ElementArtist)s. A draw call validates its whole
//! input first (draw style, baseline, positions, and every code), then lays out
//! one [`DrawnElement`](target::DrawnElement) per run and emits the shapes in
//! z-order to a caller-owned [`RenderTarget`](target::RenderTarget).
//!
//! ## Architecture
//!
//! - **Artist** ([`artist`]) - Code-to-element mapping, draw style, drawn-code tracking
//! - **Elements** ([`element`]) - Per-code style records and their setters
//! - **Placement** ([`positions`]) - Start offsets or explicit per-residue coordinates
//! - **Output** ([`target`]) - The render target seam and the drawn element record
//! - **Legend** ([`legend`]) - Legend glyphs and labels for drawn codes
//! - **Error Handling** ([`error`]) - Configuration, validation, and backend errors
//!
//! ## Key Capabilities
//!
//! - **All-or-nothing validation** of a draw call before any shape is emitted
//! - **Per-call style overrides** that leave the artist untouched
//! - **Stable z-ordering** across runs and primitives

pub mod artist;
pub mod element;
pub mod error;
pub mod legend;
pub mod positions;
pub mod target;
