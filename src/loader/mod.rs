//! Template acquisition: discovering template files and extracting raw
//! `(id, text)` pairs from them. The engine itself only consumes
//! [`RawTemplate`] sequences; anything able to produce one can feed a
//! manager through the [`TemplateSource`] trait.

mod parser;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SqlStencilError;

/// A template as supplied by a source: the statement id and the
/// already-extracted template body (whitespace framing allowed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTemplate {
    /// Statement id, non-empty; folding to a registry key happens later.
    pub id: String,
    /// Raw template text, placeholders included.
    pub text: String,
}

impl RawTemplate {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Anything that can produce a batch of raw templates for registration.
pub trait TemplateSource {
    /// Produce the raw templates, in registration order.
    ///
    /// # Errors
    ///
    /// Implementations surface their own discovery/read failures as
    /// `SqlStencilError`.
    fn load(&self) -> Result<Vec<RawTemplate>, SqlStencilError>;
}

/// File-based template source: discovers files under a directory with a
/// fileset glob pattern and parses `-- name: <Id>` annotated sections
/// out of each file.
///
/// ```text
/// -- name: InsertCity
/// INSERT INTO city (name, age) VALUES ({Name}, {Age})
///
/// -- name: CountCity
/// SELECT COUNT(*) FROM city
/// ```
#[derive(Debug, Clone)]
pub struct SqlFileSource {
    dir: PathBuf,
    fileset: String,
}

impl SqlFileSource {
    /// Source reading `*.sql` files under `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            fileset: "*.sql".to_string(),
        }
    }

    /// Override the fileset glob pattern (matched against file names
    /// under the directory, e.g. `city*.sql`).
    #[must_use]
    pub fn with_fileset(mut self, fileset: impl Into<String>) -> Self {
        self.fileset = fileset.into();
        self
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn fileset(&self) -> &str {
        &self.fileset
    }
}

impl TemplateSource for SqlFileSource {
    fn load(&self) -> Result<Vec<RawTemplate>, SqlStencilError> {
        let pattern = self.dir.join(&self.fileset);
        let pattern = pattern.to_str().ok_or_else(|| {
            SqlStencilError::SourceError(format!("non-utf8 template path: {}", self.dir.display()))
        })?;

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in glob::glob(pattern)? {
            let path = entry
                .map_err(|e| SqlStencilError::SourceError(format!("fail to read fileset entry: {e}")))?;
            if path.is_file() {
                paths.push(path);
            }
        }
        // glob order is platform-dependent; keep registration deterministic
        paths.sort();
        tracing::debug!(pattern, matches = paths.len(), "discovered template files");

        let mut templates = Vec::new();
        for path in paths {
            let content = fs::read_to_string(&path)?;
            templates.extend(parser::parse_sections(&content));
        }
        Ok(templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_sections_from_matching_files_only() {
        let dir = tempfile::tempdir().unwrap();

        let mut city = fs::File::create(dir.path().join("city.sql")).unwrap();
        writeln!(city, "-- name: CountCity\nSELECT COUNT(*) FROM city").unwrap();

        let mut notes = fs::File::create(dir.path().join("notes.txt")).unwrap();
        writeln!(notes, "-- name: ShouldNotLoad\nSELECT 1").unwrap();

        let templates = SqlFileSource::new(dir.path()).load().unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].id, "CountCity");
    }

    #[test]
    fn fileset_pattern_narrows_discovery() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("city.sql"), "-- name: A\nselect 1\n").unwrap();
        fs::write(dir.path().join("album.sql"), "-- name: B\nselect 2\n").unwrap();

        let templates = SqlFileSource::new(dir.path())
            .with_fileset("city*.sql")
            .load()
            .unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].id, "A");
    }

    #[test]
    fn empty_directory_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let templates = SqlFileSource::new(dir.path()).load().unwrap();
        assert!(templates.is_empty());
    }

    #[test]
    fn invalid_fileset_pattern_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = SqlFileSource::new(dir.path())
            .with_fileset("[broken")
            .load()
            .unwrap_err();
        assert!(matches!(err, SqlStencilError::PatternError(_)));
    }
}
