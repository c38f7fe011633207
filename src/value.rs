use chrono::NaiveDateTime;
use serde_json::Value as JsonValue;

/// Values that can be bound into a statement template.
///
/// Reuse the same enum for every parameter so callers do not need to
/// branch on concrete Rust types when filling a parameter set:
/// ```rust
/// use sql_stencil::prelude::*;
///
/// let mut params = BuildParams::new();
/// params.insert("Id".to_string(), BindValue::Int(1));
/// params.insert("Name".to_string(), BindValue::Text("alice".into()));
/// params.insert("Active".to_string(), BindValue::Bool(true));
/// # let _ = params;
/// ```
///
/// The `Nullable*` variants carry an optional payload and render as SQL
/// `null` when empty; see [`crate::literal::sql_literal`] for the exact
/// literal forms.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    /// Integer value (64-bit)
    Int(i64),
    /// Floating point value (64-bit)
    Float(f64),
    /// Text/string value
    Text(String),
    /// Boolean value
    Bool(bool),
    /// Timestamp value (seconds precision when rendered)
    Timestamp(NaiveDateTime),
    /// NULL value
    Null,
    /// JSON value (no literal rendering rule; rejected at build time)
    JSON(JsonValue),
    /// Binary data, rendered as text
    Blob(Vec<u8>),
    /// Optional text
    NullableText(Option<String>),
    /// Optional integer
    NullableInt(Option<i64>),
    /// Optional boolean
    NullableBool(Option<bool>),
    /// Optional float
    NullableFloat(Option<f64>),
}

impl BindValue {
    /// Check if this value renders as SQL `null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(
            self,
            Self::Null
                | Self::NullableText(None)
                | Self::NullableInt(None)
                | Self::NullableBool(None)
                | Self::NullableFloat(None)
        )
    }

    #[must_use]
    pub fn as_int(&self) -> Option<&i64> {
        if let BindValue::Int(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let BindValue::Text(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<&bool> {
        if let BindValue::Bool(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        if let BindValue::Float(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        if let BindValue::Timestamp(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_blob(&self) -> Option<&[u8]> {
        if let BindValue::Blob(bytes) = self {
            Some(bytes)
        } else {
            None
        }
    }

    /// Name of the variant, used in diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            BindValue::Int(_) => "int",
            BindValue::Float(_) => "float",
            BindValue::Text(_) => "text",
            BindValue::Bool(_) => "bool",
            BindValue::Timestamp(_) => "timestamp",
            BindValue::Null => "null",
            BindValue::JSON(_) => "json",
            BindValue::Blob(_) => "blob",
            BindValue::NullableText(_) => "nullable text",
            BindValue::NullableInt(_) => "nullable int",
            BindValue::NullableBool(_) => "nullable bool",
            BindValue::NullableFloat(_) => "nullable float",
        }
    }
}
