use super::format::{ConfigFormat, UnsupportedFormat};
use crate::core::models::color::{
    Color, ColorParseError, format_optional_color, parse_optional_color,
};
use crate::core::models::drawstyle::{DrawStyle, DrawStyleError};
use crate::core::primitives::{
    ArrowPrimitive, HelixPrimitive, LinePrimitive, ParameterError, Primitive, PrimitiveArtist,
    PrimitiveStyle, RectanglePrimitive, check_parameter,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error in {origin}: {source}")]
    Toml {
        origin: String,
        source: toml::de::Error,
    },
    #[error("TOML serialization error: {0}")]
    TomlWrite(#[from] toml::ser::Error),
    #[error("JSON error in {origin}: {source}")]
    Json {
        origin: String,
        source: serde_json::Error,
    },
    #[error("YAML error in {origin}: {source}")]
    Yaml {
        origin: String,
        source: serde_yaml_ng::Error,
    },
    #[error(transparent)]
    Format(#[from] UnsupportedFormat),
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Semantic problems in an otherwise well-formed configuration document.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DocumentError {
    #[error("Element '{code}' references unknown primitive '{key}'")]
    UnknownPrimitiveKey { code: char, key: String },
    #[error("Primitive key '{0}' is defined more than once")]
    DuplicatePrimitiveKey(String),
    #[error("Element code '{0}' is defined more than once")]
    DuplicateCode(char),
    #[error("Invalid color for '{field}' of primitive '{key}': {source}")]
    InvalidColor {
        key: String,
        field: &'static str,
        source: ColorParseError,
    },
    #[error("Invalid parameter in primitive '{key}': {source}")]
    InvalidParameter {
        key: String,
        source: ParameterError,
    },
    #[error("Parameter '{field}' does not apply to {kind} primitive '{key}'")]
    UnsupportedField {
        key: String,
        kind: &'static str,
        field: &'static str,
    },
    #[error("Invalid draw style: {0}")]
    DrawStyle(#[from] DrawStyleError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrimitiveKind {
    Line,
    Arrow,
    Helix,
    Rectangle,
}

impl PrimitiveKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Arrow => "arrow",
            Self::Helix => "helix",
            Self::Rectangle => "rectangle",
        }
    }
}

/// On-disk form of an artist: global draw style, elements, and the primitive
/// table the elements refer to by key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtistDocument {
    #[serde(default)]
    pub drawstyle: DrawStyle,
    #[serde(default)]
    pub elements: Vec<ElementDocument>,
    #[serde(default)]
    pub primitives: Vec<PrimitiveDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementDocument {
    pub code: char,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub primitives: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PrimitiveDocument {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: PrimitiveKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_scalar: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linewidth_scalar: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zorder_offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linecolor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fillcolor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrow_tip_length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shaft_height_scalar: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ribbon_period: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ribbon_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_inner_ribbon: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadecolor: Option<String>,
}

impl PrimitiveDocument {
    fn empty(key: String, kind: PrimitiveKind) -> Self {
        Self {
            key,
            kind,
            x_offset: None,
            y_offset: None,
            height_scalar: None,
            linewidth_scalar: None,
            zorder_offset: None,
            linecolor: None,
            fillcolor: None,
            arrow_tip_length: None,
            shaft_height_scalar: None,
            ribbon_period: None,
            ribbon_width: None,
            fill_inner_ribbon: None,
            shadecolor: None,
        }
    }

    /// Describes `primitive` completely, so that reading it back yields an equal primitive.
    pub fn from_primitive(key: String, primitive: &PrimitiveArtist) -> Self {
        let kind = match primitive {
            PrimitiveArtist::Line(_) => PrimitiveKind::Line,
            PrimitiveArtist::Arrow(_) => PrimitiveKind::Arrow,
            PrimitiveArtist::Helix(_) => PrimitiveKind::Helix,
            PrimitiveArtist::Rectangle(_) => PrimitiveKind::Rectangle,
        };
        let style = primitive.style();
        let mut doc = Self::empty(key, kind);
        doc.x_offset = Some(style.x_offset);
        doc.y_offset = Some(style.y_offset);
        doc.height_scalar = Some(style.height_scalar);
        doc.linewidth_scalar = Some(style.linewidth_scalar);
        doc.zorder_offset = Some(style.zorder_offset);
        doc.linecolor = Some(style.linecolor.to_string());
        doc.fillcolor = Some(format_optional_color(style.fillcolor));

        match primitive {
            PrimitiveArtist::Arrow(arrow) => {
                doc.arrow_tip_length = Some(arrow.arrow_tip_length);
                doc.shaft_height_scalar = arrow.shaft_height_scalar;
            }
            PrimitiveArtist::Helix(helix) => {
                doc.ribbon_period = Some(helix.ribbon_period);
                doc.ribbon_width = helix.ribbon_width;
                doc.fill_inner_ribbon = Some(helix.fill_inner_ribbon);
                doc.shadecolor = helix.shadecolor.map(|c| c.to_string());
            }
            PrimitiveArtist::Line(_) | PrimitiveArtist::Rectangle(_) => {}
        }
        doc
    }

    fn number(&self, name: &'static str, value: Option<f64>) -> Result<Option<f64>, DocumentError> {
        value
            .map(|v| check_parameter(name, v))
            .transpose()
            .map_err(|source| DocumentError::InvalidParameter {
                key: self.key.clone(),
                source,
            })
    }

    fn color(&self, field: &'static str, value: &str) -> Result<Option<Color>, DocumentError> {
        parse_optional_color(value).map_err(|source| DocumentError::InvalidColor {
            key: self.key.clone(),
            field,
            source,
        })
    }

    fn reject(&self, fields: &[(&'static str, bool)]) -> Result<(), DocumentError> {
        match fields.iter().find(|(_, present)| *present) {
            Some(&(field, _)) => Err(DocumentError::UnsupportedField {
                key: self.key.clone(),
                kind: self.kind.name(),
                field,
            }),
            None => Ok(()),
        }
    }

    fn apply_style(&self, style: &mut PrimitiveStyle) -> Result<(), DocumentError> {
        if let Some(v) = self.number("x-offset", self.x_offset)? {
            style.x_offset = v;
        }
        if let Some(v) = self.number("y-offset", self.y_offset)? {
            style.y_offset = v;
        }
        if let Some(v) = self.number("height-scalar", self.height_scalar)? {
            style.height_scalar = v;
        }
        if let Some(v) = self.number("linewidth-scalar", self.linewidth_scalar)? {
            style.linewidth_scalar = v;
        }
        if let Some(v) = self.number("zorder-offset", self.zorder_offset)? {
            style.zorder_offset = v;
        }
        if let Some(spec) = &self.linecolor {
            style.linecolor = spec.parse().map_err(|source| DocumentError::InvalidColor {
                key: self.key.clone(),
                field: "linecolor",
                source,
            })?;
        }
        if let Some(spec) = &self.fillcolor {
            style.fillcolor = self.color("fillcolor", spec)?;
        }
        Ok(())
    }

    /// Builds the primitive this entry describes, validating every parameter.
    pub fn to_primitive(&self) -> Result<PrimitiveArtist, DocumentError> {
        let arrow_fields = [
            ("arrow-tip-length", self.arrow_tip_length.is_some()),
            ("shaft-height-scalar", self.shaft_height_scalar.is_some()),
        ];
        let helix_fields = [
            ("ribbon-period", self.ribbon_period.is_some()),
            ("ribbon-width", self.ribbon_width.is_some()),
            ("fill-inner-ribbon", self.fill_inner_ribbon.is_some()),
            ("shadecolor", self.shadecolor.is_some()),
        ];

        let mut primitive = match self.kind {
            PrimitiveKind::Line | PrimitiveKind::Rectangle => {
                self.reject(&arrow_fields)?;
                self.reject(&helix_fields)?;
                if self.kind == PrimitiveKind::Line {
                    PrimitiveArtist::Line(LinePrimitive::default())
                } else {
                    PrimitiveArtist::Rectangle(RectanglePrimitive::default())
                }
            }
            PrimitiveKind::Arrow => {
                self.reject(&helix_fields)?;
                let mut arrow = ArrowPrimitive::default();
                if let Some(v) = self.number("arrow-tip-length", self.arrow_tip_length)? {
                    arrow.arrow_tip_length = v;
                }
                arrow.shaft_height_scalar =
                    self.number("shaft-height-scalar", self.shaft_height_scalar)?;
                PrimitiveArtist::Arrow(arrow)
            }
            PrimitiveKind::Helix => {
                self.reject(&arrow_fields)?;
                let mut helix = HelixPrimitive::default();
                if let Some(v) = self.number("ribbon-period", self.ribbon_period)? {
                    helix.ribbon_period = v;
                }
                helix.ribbon_width = self.number("ribbon-width", self.ribbon_width)?;
                helix.fill_inner_ribbon = self.fill_inner_ribbon.unwrap_or(false);
                helix.shadecolor = match &self.shadecolor {
                    Some(spec) => self.color("shadecolor", spec)?,
                    None => None,
                };
                PrimitiveArtist::Helix(helix)
            }
        };
        self.apply_style(primitive.style_mut())?;
        Ok(primitive)
    }
}

/// One secondary structure code with its legend label and primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementConfig {
    pub code: char,
    pub label: String,
    pub primitives: Vec<PrimitiveArtist>,
}

/// A validated artist configuration, independent of any file format.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtistConfig {
    pub drawstyle: DrawStyle,
    pub elements: Vec<ElementConfig>,
}

impl TryFrom<ArtistDocument> for ArtistConfig {
    type Error = DocumentError;

    fn try_from(doc: ArtistDocument) -> Result<Self, Self::Error> {
        doc.drawstyle.validate()?;

        let mut table: HashMap<&str, PrimitiveArtist> = HashMap::new();
        for entry in &doc.primitives {
            let primitive = entry.to_primitive()?;
            if table.insert(entry.key.as_str(), primitive).is_some() {
                return Err(DocumentError::DuplicatePrimitiveKey(entry.key.clone()));
            }
        }

        let mut elements: Vec<ElementConfig> = Vec::with_capacity(doc.elements.len());
        for element in &doc.elements {
            if elements.iter().any(|e| e.code == element.code) {
                return Err(DocumentError::DuplicateCode(element.code));
            }
            let primitives = element
                .primitives
                .iter()
                .map(|key| {
                    table
                        .get(key.as_str())
                        .cloned()
                        .ok_or_else(|| DocumentError::UnknownPrimitiveKey {
                            code: element.code,
                            key: key.clone(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            elements.push(ElementConfig {
                code: element.code,
                label: element.label.clone(),
                primitives,
            });
        }

        Ok(Self {
            drawstyle: doc.drawstyle,
            elements,
        })
    }
}

impl From<&ArtistConfig> for ArtistDocument {
    fn from(config: &ArtistConfig) -> Self {
        let mut unique: Vec<(String, &PrimitiveArtist)> = Vec::new();
        let mut counters: HashMap<&'static str, usize> = HashMap::new();

        let elements = config
            .elements
            .iter()
            .map(|element| {
                let keys = element
                    .primitives
                    .iter()
                    .map(|primitive| {
                        if let Some((key, _)) = unique.iter().find(|(_, p)| *p == primitive) {
                            return key.clone();
                        }
                        let n = counters.entry(primitive.kind()).or_insert(0);
                        *n += 1;
                        let key = format!("{}-{}", primitive.kind(), n);
                        unique.push((key.clone(), primitive));
                        key
                    })
                    .collect();
                ElementDocument {
                    code: element.code,
                    label: element.label.clone(),
                    primitives: keys,
                }
            })
            .collect();

        let primitives = unique
            .into_iter()
            .map(|(key, primitive)| PrimitiveDocument::from_primitive(key, primitive))
            .collect();

        Self {
            drawstyle: config.drawstyle,
            elements,
            primitives,
        }
    }
}

impl ArtistDocument {
    /// Parses a document. `origin` names the source in error messages.
    pub fn parse(text: &str, format: ConfigFormat, origin: &str) -> Result<Self, ConfigLoadError> {
        match format {
            ConfigFormat::Toml => toml::from_str(text).map_err(|source| ConfigLoadError::Toml {
                origin: origin.to_string(),
                source,
            }),
            ConfigFormat::Json => {
                serde_json::from_str(text).map_err(|source| ConfigLoadError::Json {
                    origin: origin.to_string(),
                    source,
                })
            }
            ConfigFormat::Yaml => {
                serde_yaml_ng::from_str(text).map_err(|source| ConfigLoadError::Yaml {
                    origin: origin.to_string(),
                    source,
                })
            }
        }
    }

    pub fn render(&self, format: ConfigFormat) -> Result<String, ConfigLoadError> {
        match format {
            ConfigFormat::Toml => Ok(toml::to_string_pretty(self)?),
            ConfigFormat::Json => {
                serde_json::to_string_pretty(self).map_err(|source| ConfigLoadError::Json {
                    origin: "output".to_string(),
                    source,
                })
            }
            ConfigFormat::Yaml => {
                serde_yaml_ng::to_string(self).map_err(|source| ConfigLoadError::Yaml {
                    origin: "output".to_string(),
                    source,
                })
            }
        }
    }
}

impl ArtistConfig {
    pub fn parse(text: &str, format: ConfigFormat) -> Result<Self, ConfigLoadError> {
        let doc = ArtistDocument::parse(text, format, "<string>")?;
        Ok(Self::try_from(doc)?)
    }

    pub fn render(&self, format: ConfigFormat) -> Result<String, ConfigLoadError> {
        ArtistDocument::from(self).render(format)
    }

    /// Reads a configuration file. Without an explicit `format`, the file
    /// extension decides.
    pub fn load(path: &Path, format: Option<ConfigFormat>) -> Result<Self, ConfigLoadError> {
        let format = match format {
            Some(format) => format,
            None => ConfigFormat::from_path(path)?,
        };
        let origin = path.to_string_lossy().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: origin.clone(),
            source,
        })?;
        let doc = ArtistDocument::parse(&text, format, &origin)?;
        let config = Self::try_from(doc)?;
        info!(
            "Loaded artist configuration with {} elements from '{}'",
            config.elements.len(),
            origin
        );
        Ok(config)
    }

    pub fn save(&self, path: &Path, format: Option<ConfigFormat>) -> Result<(), ConfigLoadError> {
        let format = match format {
            Some(format) => format,
            None => ConfigFormat::from_path(path)?,
        };
        let text = self.render(format)?;
        std::fs::write(path, text).map_err(|source| ConfigLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source,
        })?;
        debug!("Wrote {} configuration to '{}'", format, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = r##"
[drawstyle]
height = 2.0

[[elements]]
code = "H"
label = "Helix"
primitives = ["ribbon"]

[[elements]]
code = "L"
label = "Loop"
primitives = ["thin"]

[[elements]]
code = "S"
label = "Strand"
primitives = ["thin", "block"]

[[primitives]]
key = "ribbon"
type = "helix"
fillcolor = "#ff0000"
shadecolor = "darkred"
fill-inner-ribbon = true

[[primitives]]
key = "thin"
type = "line"
linewidth-scalar = 2.0

[[primitives]]
key = "block"
type = "arrow"
arrow-tip-length = 2.5
fillcolor = "none"
"##;

    fn sample() -> ArtistConfig {
        ArtistConfig::parse(SAMPLE, ConfigFormat::Toml).unwrap()
    }

    #[test]
    fn parses_elements_in_document_order() {
        let config = sample();
        assert_eq!(config.drawstyle.height, 2.0);
        assert_eq!(config.drawstyle.stride, 1.0);
        let codes: Vec<char> = config.elements.iter().map(|e| e.code).collect();
        assert_eq!(codes, vec!['H', 'L', 'S']);
        assert_eq!(config.elements[2].primitives.len(), 2);
    }

    #[test]
    fn applies_primitive_parameters() {
        let config = sample();
        match &config.elements[0].primitives[0] {
            PrimitiveArtist::Helix(helix) => {
                assert_eq!(helix.style.fillcolor, Some(Color::rgb(255, 0, 0)));
                assert!(helix.fill_inner_ribbon);
                assert_eq!(helix.shadecolor, Some(Color::rgb(139, 0, 0)));
                assert_eq!(helix.ribbon_period, 3.6);
            }
            other => panic!("Expected helix, got {other:?}"),
        }
        match &config.elements[2].primitives[1] {
            PrimitiveArtist::Arrow(arrow) => {
                assert_eq!(arrow.arrow_tip_length, 2.5);
                assert_eq!(arrow.style.fillcolor, None);
            }
            other => panic!("Expected arrow, got {other:?}"),
        }
        // Lines keep their own z-order default when the document is silent.
        assert_eq!(config.elements[1].primitives[0].style().zorder_offset, -0.1);
    }

    #[test]
    fn shared_primitives_are_written_once() {
        let doc = ArtistDocument::from(&sample());
        assert_eq!(doc.primitives.len(), 3);
        assert_eq!(doc.elements[1].primitives, vec!["line-1".to_string()]);
        assert_eq!(
            doc.elements[2].primitives,
            vec!["line-1".to_string(), "arrow-1".to_string()]
        );
    }

    #[test]
    fn round_trips_through_every_format() {
        let config = sample();
        for format in [ConfigFormat::Toml, ConfigFormat::Json, ConfigFormat::Yaml] {
            let text = config.render(format).unwrap();
            let back = ArtistConfig::parse(&text, format).unwrap();
            assert_eq!(back, config, "round trip through {format} failed");
        }
    }

    #[test]
    fn save_and_load_infer_format_from_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("style.yaml");
        let config = sample();
        config.save(&path, None).unwrap();
        assert_eq!(ArtistConfig::load(&path, None).unwrap(), config);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("style.ini");
        let err = sample().save(&path, None).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Format(_)));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let dir = tempdir().unwrap();
        let err = ArtistConfig::load(&dir.path().join("absent.toml"), None).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Io { .. }));
    }

    #[test]
    fn unknown_primitive_key_is_an_error() {
        let text = r#"
[[elements]]
code = "H"
primitives = ["missing"]
"#;
        let err = ArtistConfig::parse(text, ConfigFormat::Toml).unwrap_err();
        match err {
            ConfigLoadError::Document(DocumentError::UnknownPrimitiveKey { code, key }) => {
                assert_eq!(code, 'H');
                assert_eq!(key, "missing");
            }
            other => panic!("Unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let text = r#"
[[primitives]]
key = "a"
type = "line"
wobble = 3
"#;
        let err = ArtistConfig::parse(text, ConfigFormat::Toml).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Toml { .. }));
    }

    #[test]
    fn fields_of_other_primitive_types_are_rejected() {
        let text = r#"
[[primitives]]
key = "a"
type = "line"
ribbon-period = 3.0
"#;
        let err = ArtistConfig::parse(text, ConfigFormat::Toml).unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::Document(DocumentError::UnsupportedField {
                field: "ribbon-period",
                ..
            })
        ));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let bad_color = r#"
[[primitives]]
key = "a"
type = "rectangle"
fillcolor = "not-a-color"
"#;
        let err = ArtistConfig::parse(bad_color, ConfigFormat::Toml).unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::Document(DocumentError::InvalidColor { .. })
        ));

        let bad_period = r#"
[[primitives]]
key = "a"
type = "helix"
ribbon-period = 0.0
"#;
        let err = ArtistConfig::parse(bad_period, ConfigFormat::Toml).unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::Document(DocumentError::InvalidParameter { .. })
        ));

        let bad_stride = "[drawstyle]\nstride = 0.0\n";
        let err = ArtistConfig::parse(bad_stride, ConfigFormat::Toml).unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::Document(DocumentError::DrawStyle(_))
        ));
    }

    #[test]
    fn duplicate_codes_are_rejected() {
        let text = r#"
[[elements]]
code = "H"

[[elements]]
code = "H"
"#;
        let err = ArtistConfig::parse(text, ConfigFormat::Toml).unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::Document(DocumentError::DuplicateCode('H'))
        ));
    }

    #[test]
    fn json_documents_are_accepted() {
        let text = r#"{
            "elements": [{"code": "E", "label": "Strand", "primitives": ["a"]}],
            "primitives": [{"key": "a", "type": "arrow", "shaft-height-scalar": 0.5}]
        }"#;
        let config = ArtistConfig::parse(text, ConfigFormat::Json).unwrap();
        match &config.elements[0].primitives[0] {
            PrimitiveArtist::Arrow(arrow) => assert_eq!(arrow.shaft_height_scalar, Some(0.5)),
            other => panic!("Expected arrow, got {other:?}"),
        }
    }
}
