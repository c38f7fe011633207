//! Template normalization: one left-to-right scan over the raw text
//! extracts the ordered binding list and rewrites the template into
//! segment runs. Parsing cost is paid once at registration; building a
//! statement later is proportional to template length only.

mod scanner;

use scanner::{DELIM_OPEN, find_close, trim_template};

use crate::error::SqlStencilError;
use crate::loader::RawTemplate;
use crate::statement::{Binding, BoundStatement, TemplateSegment};

/// A template shorter than this after trimming holds no usable literal
/// content.
const MIN_TEMPLATE_LEN: usize = 3;

/// Normalize a raw template into a [`BoundStatement`].
///
/// Placeholders are `{name}` spans; each occurrence becomes its own
/// binding, in scan order, with occurrences of the same name kept
/// separate. All scan state lives in this call.
///
/// # Errors
///
/// Returns `SqlStencilError::MalformedTemplate` when the trimmed text is
/// shorter than 3 characters, a placeholder is unterminated or empty, or
/// a placeholder name contains another open delimiter.
pub fn normalize(raw: &RawTemplate) -> Result<BoundStatement, SqlStencilError> {
    let text = trim_template(&raw.text);
    if text.len() < MIN_TEMPLATE_LEN {
        return Err(malformed(&raw.id, "template shorter than 3 characters"));
    }

    let bytes = text.as_bytes();
    let mut segments: Vec<TemplateSegment> = Vec::new();
    let mut bindings: Vec<Binding> = Vec::new();
    let mut literal_start = 0;
    let mut idx = 0;

    while idx < bytes.len() {
        if bytes[idx] != DELIM_OPEN {
            idx += 1;
            continue;
        }

        // a placeholder needs at least a name byte and a closer after `{`
        if idx + 2 >= bytes.len() {
            return Err(malformed(&raw.id, "incompleted variable closer"));
        }
        let Some(close) = find_close(bytes, idx + 1) else {
            return Err(malformed(&raw.id, "incompleted variable closer"));
        };
        if close == idx + 1 {
            return Err(malformed(&raw.id, "empty variable name"));
        }
        let name = &text[idx + 1..close];
        if name.contains(char::from(DELIM_OPEN)) {
            return Err(malformed(&raw.id, "invalid variable declare format"));
        }

        if literal_start < idx {
            segments.push(TemplateSegment::Literal(
                text[literal_start..idx].to_string(),
            ));
        }
        bindings.push(Binding::new(name, bindings.len()));
        segments.push(TemplateSegment::Slot);

        idx = close + 1;
        literal_start = idx;
    }

    if literal_start < bytes.len() {
        segments.push(TemplateSegment::Literal(text[literal_start..].to_string()));
    }

    Ok(BoundStatement::new(&raw.id, segments, bindings))
}

fn malformed(id: &str, reason: &str) -> SqlStencilError {
    SqlStencilError::MalformedTemplate {
        id: id.to_string(),
        reason: reason.to_string(),
    }
}
