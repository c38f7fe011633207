use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Placeholder mark style used when rendering a statement's resolved
/// form, e.g. for logs or for handing off to a driver that expects
/// positional markers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize,
)]
pub enum MarkStyle {
    /// Plain `?` marks
    #[default]
    Question,
    /// Numbered `$1`, `$2`, ... marks
    Numbered,
}

impl MarkStyle {
    /// A fresh strategy instance; mark numbering restarts per rendering.
    pub(crate) fn strategy(self) -> Box<dyn MarkStrategy> {
        match self {
            MarkStyle::Question => Box::new(QuestionMarks),
            MarkStyle::Numbered => Box::new(NumberedMarks::default()),
        }
    }
}

/// Produces the mark emitted for each successive placeholder slot.
///
/// Implementations may carry per-rendering state (e.g. a counter);
/// callers obtain a fresh instance for every rendering pass.
pub trait MarkStrategy {
    fn next_mark(&mut self) -> String;
}

/// Emits `?` for every slot.
pub struct QuestionMarks;

impl MarkStrategy for QuestionMarks {
    fn next_mark(&mut self) -> String {
        "?".to_string()
    }
}

/// Emits `$1`, `$2`, ... in slot order.
#[derive(Default)]
pub struct NumberedMarks {
    emitted: usize,
}

impl MarkStrategy for NumberedMarks {
    fn next_mark(&mut self) -> String {
        self.emitted += 1;
        format!("${}", self.emitted)
    }
}
