use std::sync::LazyLock;

use regex::Regex;

use crate::loader::RawTemplate;

/// Header line introducing a statement section in an annotated SQL file,
/// e.g. `-- name: InsertCity`.
static SECTION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*--\s*name\s*:\s*(\S+)\s*$").expect("section header regex is valid")
});

/// Split annotated SQL file content into raw `(id, text)` templates.
///
/// Each `-- name: <Id>` line opens a section; all following lines up to
/// the next header (or end of file) are that section's template body.
/// Content before the first header carries no id and is skipped, which
/// leaves room for file-level comment banners.
pub(super) fn parse_sections(content: &str) -> Vec<RawTemplate> {
    let mut templates = Vec::new();
    let mut current: Option<(String, String)> = None;

    for line in content.lines() {
        if let Some(captures) = SECTION_HEADER.captures(line) {
            if let Some((id, body)) = current.take() {
                templates.push(RawTemplate::new(id, body));
            }
            current = Some((captures[1].to_string(), String::new()));
            continue;
        }
        if let Some((_, body)) = current.as_mut() {
            body.push_str(line);
            body.push('\n');
        }
    }

    if let Some((id, body)) = current {
        templates.push(RawTemplate::new(id, body));
    }

    templates
}
