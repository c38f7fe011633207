use crate::error::SqlStencilError;
use crate::value::BindValue;

/// Timestamp layout used for SQL literals, seconds precision, no zone.
const SQL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a bind value as inline SQL literal text.
///
/// Text is single-quoted without any escaping of embedded quotes; this
/// engine performs literal-syntax formatting only, and callers own what
/// they put in values. Floats always carry 6 fractional digits.
///
/// Populated `Nullable*` wrappers render quoted even for integers,
/// booleans, and floats, unlike their bare counterparts. Empty wrappers
/// render as bare `null`.
///
/// # Errors
///
/// Returns `SqlStencilError::UnsupportedType` for values with no literal
/// rendering rule (currently `JSON`).
pub fn sql_literal(value: &BindValue) -> Result<String, SqlStencilError> {
    match value {
        BindValue::Text(s) => Ok(format!("'{s}'")),
        BindValue::Blob(bytes) => Ok(format!("'{}'", String::from_utf8_lossy(bytes))),
        BindValue::Timestamp(ts) => Ok(format!("'{}'", ts.format(SQL_DATETIME_FORMAT))),
        BindValue::Int(i) => Ok(i.to_string()),
        BindValue::Float(f) => Ok(format!("{f:.6}")),
        BindValue::Bool(b) => Ok(b.to_string()),
        BindValue::Null => Ok("null".to_string()),
        BindValue::NullableText(opt) => Ok(match opt {
            Some(s) => format!("'{s}'"),
            None => "null".to_string(),
        }),
        // wrapped integers stay quoted, unlike bare Int
        BindValue::NullableInt(opt) => Ok(match opt {
            Some(i) => format!("'{i}'"),
            None => "null".to_string(),
        }),
        BindValue::NullableBool(opt) => Ok(match opt {
            Some(b) => format!("'{b}'"),
            None => "null".to_string(),
        }),
        BindValue::NullableFloat(opt) => Ok(match opt {
            Some(f) => format!("'{f:.6}'"),
            None => "null".to_string(),
        }),
        BindValue::JSON(_) => Err(SqlStencilError::UnsupportedType(
            value.kind_name().to_string(),
        )),
    }
}
