use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::builder::{BuildParams, build};
use crate::error::SqlStencilError;
use crate::loader::{RawTemplate, SqlFileSource, TemplateSource};
use crate::marks::MarkStyle;
use crate::normalize::normalize;
use crate::registry::StatementRegistry;
use crate::statement::BoundStatement;

/// Settings for constructing a [`StencilManager`] from template files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StencilPreference {
    /// Directory holding the template files.
    pub template_dir: PathBuf,
    /// Fileset glob pattern matched under `template_dir`.
    pub fileset: String,
    /// Mark style used for resolved statement rendering.
    pub mark_style: MarkStyle,
}

impl StencilPreference {
    /// Preference reading `*.sql` files under `template_dir` with `?`
    /// marks.
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
            fileset: "*.sql".to_string(),
            mark_style: MarkStyle::default(),
        }
    }

    #[must_use]
    pub fn with_fileset(mut self, fileset: impl Into<String>) -> Self {
        self.fileset = fileset.into();
        self
    }

    #[must_use]
    pub fn with_mark_style(mut self, mark_style: MarkStyle) -> Self {
        self.mark_style = mark_style;
        self
    }
}

impl Default for StencilPreference {
    fn default() -> Self {
        Self::new("")
    }
}

/// Owns the statement registry and the preference it was populated
/// with; the main entry point of the crate.
///
/// Population runs to completion inside the constructors; afterwards the
/// manager is used through shared references only, and independent
/// callers may `find`/`build` concurrently without synchronization.
///
/// ```rust
/// use sql_stencil::prelude::*;
///
/// let manager = StencilManager::from_templates(vec![RawTemplate::new(
///     "UpdateAlbum",
///     "UPDATE album SET score={Score} WHERE id={Id}",
/// )])?;
///
/// let mut params = BuildParams::new();
/// params.insert("Score".to_string(), BindValue::Text("Hello".into()));
/// params.insert("Id".to_string(), BindValue::Int(1234));
///
/// let sql = manager.build("updateAlbum", &params)?;
/// assert_eq!(sql, "UPDATE album SET score='Hello' WHERE id=1234");
/// # Ok::<(), sql_stencil::SqlStencilError>(())
/// ```
#[derive(Debug)]
pub struct StencilManager {
    preference: StencilPreference,
    registry: StatementRegistry,
}

impl StencilManager {
    /// Load, normalize, and register every template found under the
    /// preference's directory and fileset.
    ///
    /// # Errors
    ///
    /// Fails on the first unreadable file, malformed template, or
    /// duplicated id; no partially-populated manager is returned.
    pub fn new(preference: StencilPreference) -> Result<Self, SqlStencilError> {
        let source = SqlFileSource::new(preference.template_dir.clone())
            .with_fileset(preference.fileset.clone());
        Self::from_source(preference, &source)
    }

    /// Populate from an arbitrary template source.
    ///
    /// # Errors
    ///
    /// Propagates source failures plus `MalformedTemplate`/`DuplicateId`
    /// from registration.
    pub fn from_source(
        preference: StencilPreference,
        source: &dyn TemplateSource,
    ) -> Result<Self, SqlStencilError> {
        let mut manager = Self {
            preference,
            registry: StatementRegistry::new(),
        };
        for raw in source.load()? {
            manager.register(&raw)?;
        }
        Ok(manager)
    }

    /// Populate from in-memory templates, default preference.
    ///
    /// # Errors
    ///
    /// Returns `MalformedTemplate`/`DuplicateId` from registration.
    pub fn from_templates(
        templates: impl IntoIterator<Item = RawTemplate>,
    ) -> Result<Self, SqlStencilError> {
        let mut manager = Self {
            preference: StencilPreference::default(),
            registry: StatementRegistry::new(),
        };
        for raw in templates {
            manager.register(&raw)?;
        }
        Ok(manager)
    }

    fn register(&mut self, raw: &RawTemplate) -> Result<(), SqlStencilError> {
        if raw.id.is_empty() {
            return Err(SqlStencilError::SourceError(
                "template with empty id".to_string(),
            ));
        }
        let statement = normalize(raw)?;
        self.registry.register(statement)
    }

    /// Look up a statement by id (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `SqlStencilError::NotFound` for unknown ids.
    pub fn find(&self, id: &str) -> Result<&BoundStatement, SqlStencilError> {
        self.registry.find(id)
    }

    /// Expand the statement registered under `id` against `params`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for unknown ids, plus everything
    /// [`crate::builder::build`] reports.
    pub fn build(&self, id: &str, params: &BuildParams) -> Result<String, SqlStencilError> {
        let statement = self.registry.find(id)?;
        build(statement, params)
    }

    /// The statement's resolved rendering, slots replaced with the
    /// preference's mark style.
    ///
    /// # Errors
    ///
    /// Returns `SqlStencilError::NotFound` for unknown ids.
    pub fn marked_sql(&self, id: &str) -> Result<String, SqlStencilError> {
        Ok(self.registry.find(id)?.marked_sql(self.preference.mark_style))
    }

    #[must_use]
    pub fn preference(&self) -> &StencilPreference {
        &self.preference
    }

    #[must_use]
    pub fn registry(&self) -> &StatementRegistry {
        &self.registry
    }
}

impl fmt::Display for StencilManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "path=[{}],fileset=[{}],keys=[",
            self.preference.template_dir.display(),
            self.preference.fileset
        )?;
        for id in self.registry.ids() {
            write!(f, ",{id}")?;
        }
        write!(f, "]")
    }
}
