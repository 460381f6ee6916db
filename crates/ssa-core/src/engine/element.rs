use super::error::ConfigError;
use crate::core::io::config::ElementConfig;
use crate::core::models::color::{Color, parse_optional_color};
use crate::core::models::drawstyle::DrawStyle;
use crate::core::models::shape::Shape;
use crate::core::primitives::{Primitive, PrimitiveArtist, RunFrame, check_parameter};

/// The style record of one secondary structure code.
///
/// An element is drawn by letting each of its primitives draw the run in
/// turn. The setters change a parameter on every primitive that has it and
/// skip the others; they fail when no primitive has it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementArtist {
    label: String,
    primitives: Vec<PrimitiveArtist>,
}

impl ElementArtist {
    pub fn new(label: impl Into<String>, primitives: Vec<PrimitiveArtist>) -> Self {
        Self {
            label: label.into(),
            primitives,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = label.into();
        self
    }

    pub fn primitives(&self) -> &[PrimitiveArtist] {
        &self.primitives
    }

    pub fn primitives_mut(&mut self) -> &mut Vec<PrimitiveArtist> {
        &mut self.primitives
    }

    pub fn push_primitive(&mut self, primitive: impl Into<PrimitiveArtist>) -> &mut Self {
        self.primitives.push(primitive.into());
        self
    }

    /// All shapes of this element for one run, in primitive order.
    pub fn shapes(&self, frame: &RunFrame, drawstyle: &DrawStyle) -> Vec<Shape> {
        self.primitives
            .iter()
            .flat_map(|p| p.shapes(frame, drawstyle))
            .collect()
    }

    /// Runs `f` on every primitive. Fails with `NotApplicable` when no
    /// primitive accepted the change.
    fn apply(
        &mut self,
        key: &str,
        mut f: impl FnMut(&mut PrimitiveArtist) -> bool,
    ) -> Result<&mut Self, ConfigError> {
        let applied: usize = self.primitives.iter_mut().map(|p| f(p) as usize).sum();
        if applied == 0 {
            return Err(ConfigError::NotApplicable {
                key: key.to_string(),
            });
        }
        Ok(self)
    }

    pub fn set_fillcolor(&mut self, color: Option<Color>) -> Result<&mut Self, ConfigError> {
        self.apply("fillcolor", |p| {
            p.style_mut().fillcolor = color;
            true
        })
    }

    pub fn set_linecolor(&mut self, color: Color) -> Result<&mut Self, ConfigError> {
        self.apply("linecolor", |p| {
            p.style_mut().linecolor = color;
            true
        })
    }

    pub fn set_shadecolor(&mut self, color: Option<Color>) -> Result<&mut Self, ConfigError> {
        self.apply("shadecolor", |p| match p {
            PrimitiveArtist::Helix(h) => {
                h.shadecolor = color;
                true
            }
            _ => false,
        })
    }

    pub fn set_fill_inner_ribbon(&mut self, fill: bool) -> Result<&mut Self, ConfigError> {
        self.apply("fill-inner-ribbon", |p| match p {
            PrimitiveArtist::Helix(h) => {
                h.fill_inner_ribbon = fill;
                true
            }
            _ => false,
        })
    }

    pub fn set_x_offset(&mut self, value: f64) -> Result<&mut Self, ConfigError> {
        let value = check_parameter("x-offset", value)?;
        self.apply("x-offset", |p| {
            p.style_mut().x_offset = value;
            true
        })
    }

    pub fn set_y_offset(&mut self, value: f64) -> Result<&mut Self, ConfigError> {
        let value = check_parameter("y-offset", value)?;
        self.apply("y-offset", |p| {
            p.style_mut().y_offset = value;
            true
        })
    }

    pub fn set_linewidth_scalar(&mut self, value: f64) -> Result<&mut Self, ConfigError> {
        let value = check_parameter("linewidth-scalar", value)?;
        self.apply("linewidth-scalar", |p| {
            p.style_mut().linewidth_scalar = value;
            true
        })
    }

    pub fn set_height_scalar(&mut self, value: f64) -> Result<&mut Self, ConfigError> {
        let value = check_parameter("height-scalar", value)?;
        self.apply("height-scalar", |p| {
            p.style_mut().height_scalar = value;
            true
        })
    }

    pub fn set_zorder_offset(&mut self, value: f64) -> Result<&mut Self, ConfigError> {
        let value = check_parameter("zorder-offset", value)?;
        self.apply("zorder-offset", |p| {
            p.style_mut().zorder_offset = value;
            true
        })
    }

    pub fn set_arrow_tip_length(&mut self, value: f64) -> Result<&mut Self, ConfigError> {
        let value = check_parameter("arrow-tip-length", value)?;
        self.apply("arrow-tip-length", |p| match p {
            PrimitiveArtist::Arrow(a) => {
                a.arrow_tip_length = value;
                true
            }
            _ => false,
        })
    }

    pub fn set_shaft_height_scalar(&mut self, value: f64) -> Result<&mut Self, ConfigError> {
        let value = check_parameter("shaft-height-scalar", value)?;
        self.apply("shaft-height-scalar", |p| match p {
            PrimitiveArtist::Arrow(a) => {
                a.shaft_height_scalar = Some(value);
                true
            }
            _ => false,
        })
    }

    pub fn set_ribbon_period(&mut self, value: f64) -> Result<&mut Self, ConfigError> {
        let value = check_parameter("ribbon-period", value)?;
        self.apply("ribbon-period", |p| match p {
            PrimitiveArtist::Helix(h) => {
                h.ribbon_period = value;
                true
            }
            _ => false,
        })
    }

    pub fn set_ribbon_width(&mut self, value: f64) -> Result<&mut Self, ConfigError> {
        let value = check_parameter("ribbon-width", value)?;
        self.apply("ribbon-width", |p| match p {
            PrimitiveArtist::Helix(h) => {
                h.ribbon_width = Some(value);
                true
            }
            _ => false,
        })
    }

    /// Sets a style parameter from its textual key and value, e.g.
    /// `("fillcolor", "#ff0000")` or `("ribbon-period", "3.0")`.
    ///
    /// Keys accept `-` and `_` interchangeably. Fails when the key is unknown,
    /// the value does not parse, or no primitive of the element has the parameter.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let normalized = key.trim().to_ascii_lowercase().replace('_', "-");
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        let number = || value.trim().parse::<f64>().map_err(|_| invalid());

        match normalized.as_str() {
            "label" => {
                self.set_label(value);
            }
            "fillcolor" => {
                self.set_fillcolor(parse_optional_color(value)?)?;
            }
            "linecolor" => {
                self.set_linecolor(value.parse::<Color>()?)?;
            }
            "shadecolor" => {
                self.set_shadecolor(parse_optional_color(value)?)?;
            }
            "fill-inner-ribbon" => {
                let fill: bool = value.trim().parse().map_err(|_| invalid())?;
                self.set_fill_inner_ribbon(fill)?;
            }
            "x-offset" => {
                self.set_x_offset(number()?)?;
            }
            "y-offset" => {
                self.set_y_offset(number()?)?;
            }
            "height-scalar" => {
                self.set_height_scalar(number()?)?;
            }
            "linewidth-scalar" => {
                self.set_linewidth_scalar(number()?)?;
            }
            "zorder-offset" => {
                self.set_zorder_offset(number()?)?;
            }
            "arrow-tip-length" => {
                self.set_arrow_tip_length(number()?)?;
            }
            "shaft-height-scalar" => {
                self.set_shaft_height_scalar(number()?)?;
            }
            "ribbon-period" => {
                self.set_ribbon_period(number()?)?;
            }
            "ribbon-width" => {
                self.set_ribbon_width(number()?)?;
            }
            _ => return Err(ConfigError::UnknownStyleKey(key.to_string())),
        }
        Ok(())
    }
}

impl From<ElementConfig> for ElementArtist {
    fn from(config: ElementConfig) -> Self {
        Self::new(config.label, config.primitives)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::primitives::{ArrowPrimitive, HelixPrimitive, LinePrimitive};

    fn strand() -> ElementArtist {
        ElementArtist::new(
            "Strand",
            vec![
                LinePrimitive::default().into(),
                ArrowPrimitive::default().into(),
            ],
        )
    }

    #[test]
    fn shapes_concatenate_primitive_output() {
        let frame = RunFrame {
            x: 0.0,
            y: 0.0,
            width: 5.0,
            length: 5,
        };
        let shapes = strand().shapes(&frame, &DrawStyle::default());
        assert_eq!(shapes.len(), 2);
        assert!(!shapes[0].is_polygon());
        assert!(shapes[1].is_polygon());
    }

    #[test]
    fn typed_setters_skip_primitives_without_the_parameter() {
        let mut element = strand();
        element.set_arrow_tip_length(1.5).unwrap();
        element.set_fillcolor(Some(Color::rgb(1, 1, 1))).unwrap();
        match &element.primitives()[1] {
            PrimitiveArtist::Arrow(a) => {
                assert_eq!(a.arrow_tip_length, 1.5);
                assert_eq!(a.style.fillcolor, Some(Color::rgb(1, 1, 1)));
            }
            other => panic!("Expected arrow, got {other:?}"),
        }
        assert_eq!(element.primitives()[0].style().fillcolor, Some(Color::rgb(1, 1, 1)));
    }

    #[test]
    fn typed_setters_fail_when_no_primitive_has_the_parameter() {
        let mut element = ElementArtist::new("Loop", vec![LinePrimitive::default().into()]);
        let before = element.clone();
        assert!(matches!(
            element.set_arrow_tip_length(1.5),
            Err(ConfigError::NotApplicable { .. })
        ));
        assert!(matches!(
            element.set_ribbon_period(3.0),
            Err(ConfigError::NotApplicable { .. })
        ));
        assert!(matches!(
            element.set_ribbon_width(0.5),
            Err(ConfigError::NotApplicable { .. })
        ));
        assert!(matches!(
            element.set_shadecolor(Some(Color::BLACK)),
            Err(ConfigError::NotApplicable { .. })
        ));
        assert_eq!(element, before);

        let mut empty = ElementArtist::new("Nothing", Vec::new());
        assert!(empty.set_fillcolor(None).is_err());
        assert!(empty.set("fillcolor", "none").is_err());
    }

    #[test]
    fn typed_setters_validate_values() {
        let mut element = strand();
        assert!(element.set_linewidth_scalar(-1.0).is_err());
        assert!(element.set_ribbon_period(0.0).is_err());
        assert!(element.set_height_scalar(f64::NAN).is_err());
    }

    #[test]
    fn string_keys_set_parameters() {
        let mut element = ElementArtist::new("Helix", vec![HelixPrimitive::default().into()]);
        element.set("fillcolor", "#00ff00").unwrap();
        element.set("ribbon_period", "3.0").unwrap();
        element.set("Fill-Inner-Ribbon", "true").unwrap();
        element.set("label", "Alpha").unwrap();
        assert_eq!(element.label(), "Alpha");
        match &element.primitives()[0] {
            PrimitiveArtist::Helix(h) => {
                assert_eq!(h.style.fillcolor, Some(Color::rgb(0, 255, 0)));
                assert_eq!(h.ribbon_period, 3.0);
                assert!(h.fill_inner_ribbon);
            }
            other => panic!("Expected helix, got {other:?}"),
        }
    }

    #[test]
    fn string_keys_report_problems() {
        let mut element = strand();
        assert!(matches!(
            element.set("sparkle", "1"),
            Err(ConfigError::UnknownStyleKey(_))
        ));
        assert!(matches!(
            element.set("ribbon-period", "3.0"),
            Err(ConfigError::NotApplicable { .. })
        ));
        assert!(matches!(
            element.set("height-scalar", "tall"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            element.set("linecolor", "nope"),
            Err(ConfigError::Color(_))
        ));
        assert!(matches!(
            element.set("arrow-tip-length", "-2"),
            Err(ConfigError::Parameter(_))
        ));
    }

    #[test]
    fn fillcolor_none_clears_fill() {
        let mut element = strand();
        element.set("fillcolor", "none").unwrap();
        assert!(element.primitives().iter().all(|p| p.style().fillcolor.is_none()));
    }
}
