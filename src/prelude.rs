//! Convenient imports for common functionality.
//!
//! Re-exports the types most callers need to load templates and build
//! statements.

pub use crate::builder::{BuildParams, build};
pub use crate::error::SqlStencilError;
pub use crate::loader::{RawTemplate, SqlFileSource, TemplateSource};
pub use crate::manager::{StencilManager, StencilPreference};
pub use crate::marks::{MarkStrategy, MarkStyle, NumberedMarks, QuestionMarks};
pub use crate::normalize::normalize;
pub use crate::registry::StatementRegistry;
pub use crate::statement::{BindKind, Binding, BoundStatement, TemplateSegment};
pub use crate::value::BindValue;
