use thiserror::Error;

/// Errors surfaced by template normalization, registration, lookup, and
/// statement building.
#[derive(Debug, Error)]
pub enum SqlStencilError {
    /// Placeholder syntax in a template is invalid (unterminated, nested,
    /// empty, or the template is too short to hold any literal content).
    #[error("malformed template [{id}]: {reason}")]
    MalformedTemplate { id: String, reason: String },

    /// A second template was registered under an id that folds to an
    /// existing key. The registry is left unchanged.
    #[error("duplicated statement id: [{0}]")]
    DuplicateId(String),

    /// No statement registered under the (case-folded) id.
    #[error("not found statement for id: {0}")]
    NotFound(String),

    /// The statement declares bindings but the parameter set was empty.
    #[error("statement [{0}] needs parameters for completing text")]
    MissingParameters(String),

    /// A declared binding has no entry in the supplied parameter set.
    #[error("not found param {0}")]
    ParameterNotFound(String),

    /// The supplied value's type has no SQL literal formatting rule.
    #[error("unsupported type {0}")]
    UnsupportedType(String),

    /// Reading a template source file failed.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// The configured fileset pattern is not a valid glob.
    #[error(transparent)]
    PatternError(#[from] glob::PatternError),

    /// A template source produced input the loader could not use.
    #[error("template source error: {0}")]
    SourceError(String),

    /// Other error.
    #[error("other error: {0}")]
    Other(String),
}
