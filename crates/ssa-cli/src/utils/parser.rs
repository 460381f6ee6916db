use thiserror::Error;

const DRAWSTYLE_PREFIX: &str = "drawstyle.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE (e.g., 'H.fillcolor=salmon').")]
    MissingValue(String),

    #[error("Invalid --set key '{0}'. Expected 'CODE.key' or 'drawstyle.key'.")]
    InvalidKey(String),

    #[error("Component '{component}' cannot be empty in --set key '{key}'.")]
    EmptyComponent { component: &'static str, key: String },
}

/// What a `--set` assignment applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetTarget {
    DrawStyle,
    Element(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSetting {
    pub target: SetTarget,
    pub key: String,
    pub value: String,
}

/// Parses `CODE.key=value` or `drawstyle.key=value`.
///
/// The code is the single character before the first dot, so `..label=Dot`
/// addresses the `.` code. Values may be empty.
pub fn parse_setting(input: &str) -> Result<StyleSetting, ParseError> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| ParseError::MissingValue(input.to_string()))?;

    if let Some(field) = key.strip_prefix(DRAWSTYLE_PREFIX) {
        if field.is_empty() {
            return Err(ParseError::EmptyComponent {
                component: "key",
                key: key.to_string(),
            });
        }
        return Ok(StyleSetting {
            target: SetTarget::DrawStyle,
            key: field.to_string(),
            value: value.to_string(),
        });
    }

    let mut chars = key.chars();
    let code = chars.next().ok_or_else(|| ParseError::EmptyComponent {
        component: "code",
        key: key.to_string(),
    })?;
    let field = chars
        .as_str()
        .strip_prefix('.')
        .ok_or_else(|| ParseError::InvalidKey(key.to_string()))?;
    if field.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "key",
            key: key.to_string(),
        });
    }

    Ok(StyleSetting {
        target: SetTarget::Element(code),
        key: field.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_element_settings() {
        let setting = parse_setting("H.fillcolor=salmon").unwrap();
        assert_eq!(setting.target, SetTarget::Element('H'));
        assert_eq!(setting.key, "fillcolor");
        assert_eq!(setting.value, "salmon");
    }

    #[test]
    fn parses_drawstyle_settings() {
        let setting = parse_setting("drawstyle.height=2.5").unwrap();
        assert_eq!(setting.target, SetTarget::DrawStyle);
        assert_eq!(setting.key, "height");
        assert_eq!(setting.value, "2.5");
    }

    #[test]
    fn keeps_everything_after_the_first_equals_sign() {
        let setting = parse_setting("L.label=a=b").unwrap();
        assert_eq!(setting.value, "a=b");
    }

    #[test]
    fn accepts_punctuation_codes_and_empty_values() {
        let setting = parse_setting("..label=").unwrap();
        assert_eq!(setting.target, SetTarget::Element('.'));
        assert_eq!(setting.key, "label");
        assert_eq!(setting.value, "");

        let space = parse_setting(" .linecolor=black").unwrap();
        assert_eq!(space.target, SetTarget::Element(' '));
    }

    #[test]
    fn rejects_malformed_settings() {
        assert_eq!(
            parse_setting("H.fillcolor"),
            Err(ParseError::MissingValue("H.fillcolor".to_string()))
        );
        assert_eq!(
            parse_setting("HS.fillcolor=red"),
            Err(ParseError::InvalidKey("HS.fillcolor".to_string()))
        );
        assert_eq!(
            parse_setting("=red"),
            Err(ParseError::EmptyComponent {
                component: "code",
                key: String::new()
            })
        );
        assert!(matches!(
            parse_setting("H.=red"),
            Err(ParseError::EmptyComponent { component: "key", .. })
        ));
        assert!(matches!(
            parse_setting("drawstyle.=1"),
            Err(ParseError::EmptyComponent { component: "key", .. })
        ));
    }
}
