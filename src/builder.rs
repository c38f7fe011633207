use std::collections::{HashMap, VecDeque};

use crate::error::SqlStencilError;
use crate::literal::sql_literal;
use crate::statement::{BoundStatement, TemplateSegment};
use crate::value::BindValue;

/// Named parameter set supplied at build time, keyed by placeholder name
/// exactly as declared in the template.
pub type BuildParams = HashMap<String, BindValue>;

/// Expand a bound statement against a parameter set into final SQL text.
///
/// Bindings resolve in declaration order regardless of the parameter
/// map's iteration order; every occurrence of a repeated name resolves
/// against the same entry. Either a completely substituted string comes
/// back, or an error and no text.
///
/// # Errors
///
/// - `MissingParameters` if the statement has bindings but `params` is
///   empty.
/// - `ParameterNotFound` for the first binding (in declaration order)
///   with no entry in `params`; reported before any output is produced.
/// - `UnsupportedType` if a looked-up value has no literal form.
pub fn build(statement: &BoundStatement, params: &BuildParams) -> Result<String, SqlStencilError> {
    if params.is_empty() {
        if statement.has_bindings() {
            return Err(SqlStencilError::MissingParameters(
                statement.id().to_string(),
            ));
        }
        // no slots to fill; the statement is its literal runs
        let mut out = String::with_capacity(statement.literal_len());
        for segment in statement.segments() {
            if let TemplateSegment::Literal(text) = segment {
                out.push_str(text);
            }
        }
        return Ok(out);
    }

    // resolve every binding before emitting anything
    let mut queued: VecDeque<&BindValue> = VecDeque::with_capacity(statement.bindings().len());
    for binding in statement.bindings() {
        let value = params
            .get(binding.name())
            .ok_or_else(|| SqlStencilError::ParameterNotFound(binding.name().to_string()))?;
        queued.push_back(value);
    }

    let mut out = String::with_capacity(statement.literal_len() + queued.len() * 8);
    for segment in statement.segments() {
        match segment {
            TemplateSegment::Literal(text) => out.push_str(text),
            TemplateSegment::Slot => {
                let Some(value) = queued.pop_front() else {
                    return Err(SqlStencilError::Other(
                        "slot count diverged from binding list".to_string(),
                    ));
                };
                out.push_str(&sql_literal(value)?);
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::RawTemplate;
    use crate::normalize::normalize;

    fn stmt(text: &str) -> BoundStatement {
        normalize(&RawTemplate::new("T", text)).unwrap()
    }

    #[test]
    fn no_bindings_and_no_params_returns_trimmed_text() {
        let s = stmt("  SELECT COUNT(*) FROM album\n");
        let built = build(&s, &BuildParams::new()).unwrap();
        assert_eq!(built, "SELECT COUNT(*) FROM album");
    }

    #[test]
    fn bindings_with_empty_params_fail() {
        let s = stmt("SELECT * FROM t WHERE id={Id}");
        let err = build(&s, &BuildParams::new()).unwrap_err();
        assert!(matches!(err, SqlStencilError::MissingParameters(_)));
    }

    #[test]
    fn substitutes_in_declared_order() {
        let s = stmt("UPDATE album SET score={Score} WHERE id={Id}");
        let mut params = BuildParams::new();
        params.insert("Id".to_string(), BindValue::Int(1234));
        params.insert("Score".to_string(), BindValue::Text("Hello".to_string()));
        let built = build(&s, &params).unwrap();
        assert_eq!(built, "UPDATE album SET score='Hello' WHERE id=1234");
    }

    #[test]
    fn repeated_name_resolves_each_occurrence() {
        let s = stmt("{X} and {X}");
        let mut params = BuildParams::new();
        params.insert("X".to_string(), BindValue::Int(5));
        assert_eq!(build(&s, &params).unwrap(), "5 and 5");
    }

    #[test]
    fn missing_param_fails_fast_with_name() {
        let s = stmt("SELECT * FROM t WHERE a={A} AND y={Y}");
        let mut params = BuildParams::new();
        params.insert("A".to_string(), BindValue::Int(1));
        let err = build(&s, &params).unwrap_err();
        assert!(matches!(err, SqlStencilError::ParameterNotFound(ref n) if n == "Y"));
    }

    #[test]
    fn first_missing_binding_wins() {
        let s = stmt("{A},{B}");
        let mut params = BuildParams::new();
        params.insert("Unrelated".to_string(), BindValue::Int(0));
        let err = build(&s, &params).unwrap_err();
        assert!(matches!(err, SqlStencilError::ParameterNotFound(ref n) if n == "A"));
    }

    #[test]
    fn extra_params_are_ignored() {
        let s = stmt("SELECT {A} FROM t");
        let mut params = BuildParams::new();
        params.insert("A".to_string(), BindValue::Int(1));
        params.insert("Leftover".to_string(), BindValue::Bool(true));
        assert_eq!(build(&s, &params).unwrap(), "SELECT 1 FROM t");
    }

    #[test]
    fn unsupported_value_aborts_build() {
        let s = stmt("SELECT {Doc} FROM t");
        let mut params = BuildParams::new();
        params.insert(
            "Doc".to_string(),
            BindValue::JSON(serde_json::json!({"k": 1})),
        );
        let err = build(&s, &params).unwrap_err();
        assert!(matches!(err, SqlStencilError::UnsupportedType(_)));
    }

    #[test]
    fn lookup_is_exact_case() {
        let s = stmt("SELECT {Name} FROM t");
        let mut params = BuildParams::new();
        params.insert("name".to_string(), BindValue::Text("x".to_string()));
        let err = build(&s, &params).unwrap_err();
        assert!(matches!(err, SqlStencilError::ParameterNotFound(ref n) if n == "Name"));
    }
}
