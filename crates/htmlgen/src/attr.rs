//! Attribute model and the global-attribute validity rules

use tracing::debug;

use crate::error::{Error, ErrorKind, Result};

/// An attribute on an element
///
/// Boolean attributes follow the HTML presence convention: `true` renders as
/// the bare name, `false` renders as nothing at all. String attributes render
/// as `name="value"`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    /// Presence-style attribute
    Bool { name: String, value: bool },
    /// Key-value attribute
    String { name: String, value: String },
}

impl Attribute {
    /// Build a boolean attribute set to `true`, checked against the rule table
    pub fn boolean(name: impl Into<String>) -> Result<Self> {
        Self::boolean_with(name, true)
    }

    /// Build a boolean attribute with an explicit value, checked against the
    /// rule table
    pub fn boolean_with(name: impl Into<String>, value: bool) -> Result<Self> {
        let attribute = Self::Bool {
            name: name.into(),
            value,
        };
        validate(&attribute)?;
        Ok(attribute)
    }

    /// Build a string attribute, checked against the rule table
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let attribute = Self::String {
            name: name.into(),
            value: value.into(),
        };
        validate(&attribute)?;
        Ok(attribute)
    }

    /// Returns the attribute name
    pub fn name(&self) -> &str {
        match self {
            Self::Bool { name, .. } | Self::String { name, .. } => name,
        }
    }

    /// Returns true if this is a boolean attribute
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Bool { .. })
    }

    /// Returns true if this is a string attribute
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String { .. })
    }
}

/// Parse a `"name"` or `"name=value"` token into a validated attribute
///
/// A token without `=` becomes a boolean attribute set to `true`; otherwise
/// the token is split on the first `=` into name and value.
pub fn attr(token: &str) -> Result<Attribute> {
    let attribute = match token.split_once('=') {
        None => Attribute::Bool {
            name: token.to_string(),
            value: true,
        },
        Some((name, value)) => Attribute::String {
            name: name.to_string(),
            value: value.to_string(),
        },
    };
    validate(&attribute)?;
    Ok(attribute)
}

/// Global attributes that only exist in boolean form
const BOOLEAN_ONLY: &[&str] = &["autofocus", "hidden", "itemscope"];

/// Global attributes that only exist in string form
const STRING_ONLY: &[&str] = &[
    "accesskey", "class", "id", "is", "itemid", "itemref", "itemtype", "lang", "nonce", "part",
    "role", "slot", "style", "tabindex", "title",
];

/// Global attributes with a closed value vocabulary
const ENUMERATED: &[(&str, &[&str])] = &[
    ("autocapitalize", &["off", "on", "sentences", "words", "characters"]),
    ("contenteditable", &["true", "false"]),
    ("dir", &["ltr", "rtl", "auto"]),
    ("draggable", &["true", "false"]),
    (
        "enterkeyhint",
        &["enter", "done", "go", "next", "previous", "search", "send"],
    ),
    (
        "inputmode",
        &["none", "text", "decimal", "numeric", "tel", "search", "email", "url"],
    ),
    ("spellcheck", &["true", "false"]),
    ("translate", &["yes", "no"]),
];

/// Check an attribute against the fixed rule table
///
/// Names outside the table are accepted unconditionally. The boolean-only
/// rule is checked first, so `itemscope` is a boolean attribute.
pub fn validate(attribute: &Attribute) -> Result<()> {
    let name = attribute.name();

    if BOOLEAN_ONLY.contains(&name) {
        if !attribute.is_boolean() {
            return Err(rejected(ErrorKind::ExpectedBoolean {
                name: name.to_string(),
            }));
        }
        return Ok(());
    }

    if STRING_ONLY.contains(&name) {
        if !attribute.is_string() {
            return Err(rejected(ErrorKind::ExpectedString {
                name: name.to_string(),
            }));
        }
        return Ok(());
    }

    if let Some((_, allowed)) = ENUMERATED
        .iter()
        .copied()
        .find(|(rule_name, _)| *rule_name == name)
    {
        return match attribute {
            Attribute::Bool { .. } => Err(rejected(ErrorKind::ExpectedString {
                name: name.to_string(),
            })),
            Attribute::String { value, .. } => {
                if allowed.contains(&value.as_str()) {
                    Ok(())
                } else {
                    Err(rejected(ErrorKind::ValueNotInEnum {
                        name: name.to_string(),
                        value: value.clone(),
                        allowed,
                    }))
                }
            }
        };
    }

    Ok(())
}

fn rejected(kind: ErrorKind) -> Error {
    let error = Error::new(kind);
    debug!("rejected attribute: {error}");
    error
}
