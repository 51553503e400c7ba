use std::fmt;

use serde::{Deserialize, Serialize};

/// A registered sub-component reference: the literal registration name, or
/// `name(var)` for an indirect reference.
pub type ComponentRef = String;

/// The structured description of one component's public surface.
///
/// Constructed once per extraction call; carries no relation to any other
/// extraction.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Declared component name; empty when the source declares none.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Every top-level key of the export object, in source declaration order.
    /// Redeclared keys appear once per occurrence.
    pub options: Vec<String>,
    /// Declared configuration properties.
    pub props: Vec<PropDescriptor>,
    /// Instance methods.
    pub methods: Vec<MemberDescriptor>,
    /// Computed accessors.
    pub computeds: Vec<MemberDescriptor>,
    /// Registered sub-components.
    pub components: Vec<ComponentRef>,
    /// Emitted events, in first-seen depth-first order over the whole tree.
    pub events: Vec<EventDescriptor>,
}

impl ComponentDescriptor {
    /// Returns `true` when extraction found no export object and no events.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.options.is_empty() && self.events.is_empty()
    }
}

/// An extracted value: a source literal, or text rendered from an indirect
/// reference (`name(var)`) or a factory function (`Function(args...)`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// A boolean literal.
    Bool(bool),
    /// A numeric literal.
    Number(f64),
    /// A string literal, or rendered indirection/signature text.
    Text(String),
    /// The `null` literal.
    Null,
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Bool(value) => write!(f, "{value}"),
            PropValue::Number(value) => {
                // Integral values print without a trailing ".0", matching how
                // they were written in the source.
                if value.fract() == 0.0 && value.is_finite() && value.abs() < 9e15 {
                    write!(f, "{}", *value as i64)
                } else {
                    write!(f, "{value}")
                }
            }
            PropValue::Text(value) => f.write_str(value),
            PropValue::Null => f.write_str("null"),
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One declared configuration property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropDescriptor {
    /// Property name. Array-form entries given as identifiers carry a
    /// `(var)` suffix.
    pub name: String,
    /// Declared type: a built-in type name, a `Function(args...)` signature
    /// for a type-checking factory, or rendered literal text.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub prop_type: Option<String>,
    /// Whether the property is required; `name(var)` when indirect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<PropValue>,
    /// Default value: the literal, a `Function(args...)` factory signature,
    /// or `name(var)` when indirect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<PropValue>,
    /// Validator: `Function(args...)` or `name(var)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validator: Option<String>,
}

impl PropDescriptor {
    /// Creates a descriptor carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prop_type: None,
            required: None,
            default: None,
            validator: None,
        }
    }
}

/// One instance method or computed accessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDescriptor {
    /// Member name.
    pub name: String,
    /// `Function(args...)` for function values, `name(var)` for indirect
    /// references.
    pub code: String,
}

impl MemberDescriptor {
    /// Creates a new member record.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

/// One discovered event emission call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDescriptor {
    /// Source text of the full call expression.
    pub code: String,
    /// Event name, when the first call argument is a literal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Source text of the second call argument, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}
