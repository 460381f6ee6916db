use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DrawStyleError {
    #[error("Draw style parameter '{name}' must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("Draw style parameter '{name}' must be {bound}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        bound: &'static str,
    },
}

/// Global settings shared by every element of a secondary structure drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct DrawStyle {
    pub height: f64,    // Full height of the schematic in y-axis units
    pub stride: f64,    // Distance between consecutive residues in x-axis units
    pub linewidth: f64, // Base line width in points
    pub zorder: f64,    // Base stacking order
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            height: 1.0,
            stride: 1.0,
            linewidth: 1.0,
            zorder: 5.0,
        }
    }
}

impl DrawStyle {
    /// Returns a copy with every set field of `changes` applied.
    pub fn with_updates(&self, changes: &DrawStyleOverrides) -> Self {
        Self {
            height: changes.height.unwrap_or(self.height),
            stride: changes.stride.unwrap_or(self.stride),
            linewidth: changes.linewidth.unwrap_or(self.linewidth),
            zorder: changes.zorder.unwrap_or(self.zorder),
        }
    }

    pub fn validate(&self) -> Result<(), DrawStyleError> {
        let fields = [
            ("height", self.height),
            ("stride", self.stride),
            ("linewidth", self.linewidth),
            ("zorder", self.zorder),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(DrawStyleError::NotFinite { name, value });
            }
        }
        if self.stride <= 0.0 {
            return Err(DrawStyleError::OutOfRange {
                name: "stride",
                value: self.stride,
                bound: "positive",
            });
        }
        if self.height < 0.0 {
            return Err(DrawStyleError::OutOfRange {
                name: "height",
                value: self.height,
                bound: "non-negative",
            });
        }
        if self.linewidth < 0.0 {
            return Err(DrawStyleError::OutOfRange {
                name: "linewidth",
                value: self.linewidth,
                bound: "non-negative",
            });
        }
        Ok(())
    }
}

/// Optional per-call replacements for [`DrawStyle`] fields.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DrawStyleOverrides {
    pub height: Option<f64>,
    pub stride: Option<f64>,
    pub linewidth: Option<f64>,
    pub zorder: Option<f64>,
}

impl DrawStyleOverrides {
    pub fn is_empty(&self) -> bool {
        self.height.is_none()
            && self.stride.is_none()
            && self.linewidth.is_none()
            && self.zorder.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_updates_only_touches_set_fields() {
        let base = DrawStyle::default();
        let updated = base.with_updates(&DrawStyleOverrides {
            stride: Some(3.0),
            ..Default::default()
        });
        assert_eq!(updated.stride, 3.0);
        assert_eq!(updated.height, base.height);
        assert_eq!(updated.zorder, base.zorder);
    }

    #[test]
    fn default_style_is_valid() {
        assert!(DrawStyle::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_positive_stride() {
        let style = DrawStyle {
            stride: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            style.validate(),
            Err(DrawStyleError::OutOfRange { name: "stride", .. })
        ));
    }

    #[test]
    fn validate_rejects_nan() {
        let style = DrawStyle {
            height: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            style.validate(),
            Err(DrawStyleError::NotFinite { name: "height", .. })
        ));
    }

    #[test]
    fn deserializes_partial_tables_with_defaults() {
        let style: DrawStyle = toml::from_str("linewidth = 2.0").unwrap();
        assert_eq!(style.linewidth, 2.0);
        assert_eq!(style.height, 1.0);
    }

    #[test]
    fn overrides_emptiness() {
        assert!(DrawStyleOverrides::default().is_empty());
        let o = DrawStyleOverrides {
            zorder: Some(1.0),
            ..Default::default()
        };
        assert!(!o.is_empty());
    }
}
