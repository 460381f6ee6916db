use crate::engine::target::TargetError;
use plotters::style::{FontStyle, register_font};
use std::sync::OnceLock;
use tracing::debug;

/// Embedded font, so text renders on every backend without system fonts.
pub static BUNDLED_FONT_BYTES: &[u8] = include_bytes!("../../fonts/DejaVuSans.ttf");

/// Family name of the bundled font.
pub const FONT_FAMILY: &str = "DejaVu Sans";

pub const FONT_SIZE_LEGEND: i32 = 11;
pub const FONT_SIZE_AXIS_LABEL: i32 = 10;

// plotters falls back to "sans-serif" for any text style we do not set.
const REGISTERED_FAMILIES: [&str; 2] = [FONT_FAMILY, "sans-serif"];

static REGISTERED: OnceLock<Result<(), String>> = OnceLock::new();

/// Registers the bundled font with plotters. Safe to call repeatedly.
pub fn ensure_fonts_registered() -> Result<(), TargetError> {
    REGISTERED
        .get_or_init(|| {
            for family in REGISTERED_FAMILIES {
                register_font(family, FontStyle::Normal, BUNDLED_FONT_BYTES)
                    .map_err(|_| "Bundled font rejected: invalid font data".to_string())?;
                debug!("Registered bundled font as '{}'", family);
            }
            Ok(())
        })
        .clone()
        .map_err(TargetError::Backend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotters::style::IntoFont;

    #[test]
    fn bundled_font_registers_and_measures_text() {
        ensure_fonts_registered().unwrap();
        ensure_fonts_registered().unwrap();
        let font = (FONT_FAMILY, FONT_SIZE_LEGEND).into_font();
        let (w, h) = font.box_size("Helix").unwrap();
        assert!(w > 0 && h > 0);
    }
}
