use std::fmt;

use crate::marks::MarkStyle;

/// How a binding consumes its parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindKind {
    /// One parameter value, substituted in place.
    Scalar,
    /// Reserved for array expansion (IN-clause style); not yet emitted
    /// by the scanner.
    Repeated,
}

impl fmt::Display for BindKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindKind::Scalar => write!(f, "SCALAR"),
            BindKind::Repeated => write!(f, "REPEATED"),
        }
    }
}

/// One placeholder occurrence in a template.
///
/// Occurrences of the same name are not deduplicated; each gets its own
/// binding with its own position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    name: String,
    position: usize,
    kind: BindKind,
}

impl Binding {
    pub(crate) fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            position,
            kind: BindKind::Scalar,
        }
    }

    /// Placeholder identifier as written between the delimiters,
    /// case-sensitive.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 0-based rank of this occurrence among all bindings, in scan order.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn kind(&self) -> BindKind {
        self.kind
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name={},position={},kind={}",
            self.name, self.position, self.kind
        )
    }
}

/// One run of the normalized template: literal text, or a slot standing
/// in for the k-th binding.
///
/// The slot is a tagged run rather than a reserved in-band byte, so no
/// character of legitimate template text can collide with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSegment {
    /// Verbatim template text.
    Literal(String),
    /// Stand-in for the next binding in declaration order.
    Slot,
}

/// The normalized, reusable form of a template: id, segment runs, and
/// the ordered binding list.
///
/// Invariants (upheld by the normalizer, relied on by the builder):
/// the number of `Slot` segments equals the number of bindings, and the
/// k-th slot in segment order corresponds to `bindings()[k]`. A
/// statement with no bindings round-trips to its trimmed source text.
#[derive(Debug, Clone)]
pub struct BoundStatement {
    id: String,
    segments: Vec<TemplateSegment>,
    bindings: Vec<Binding>,
}

impl BoundStatement {
    pub(crate) fn new(
        id: impl Into<String>,
        segments: Vec<TemplateSegment>,
        bindings: Vec<Binding>,
    ) -> Self {
        Self {
            id: id.into(),
            segments,
            bindings,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Bindings in declaration order.
    #[must_use]
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    #[must_use]
    pub fn segments(&self) -> &[TemplateSegment] {
        &self.segments
    }

    #[must_use]
    pub fn has_bindings(&self) -> bool {
        !self.bindings.is_empty()
    }

    /// Total length of the literal runs, used as a capacity hint.
    #[must_use]
    pub(crate) fn literal_len(&self) -> usize {
        self.segments
            .iter()
            .map(|segment| match segment {
                TemplateSegment::Literal(text) => text.len(),
                TemplateSegment::Slot => 0,
            })
            .sum()
    }

    /// Render the statement with each slot replaced by a positional
    /// mark, e.g. `UPDATE t SET a=? WHERE b=?` or `... a=$1 ... b=$2`.
    ///
    /// Uses a fresh mark strategy per call, so numbering always starts
    /// at the first slot.
    #[must_use]
    pub fn marked_sql(&self, style: MarkStyle) -> String {
        let mut strategy = style.strategy();
        let mut out = String::with_capacity(self.literal_len() + self.bindings.len());
        for segment in &self.segments {
            match segment {
                TemplateSegment::Literal(text) => out.push_str(text),
                TemplateSegment::Slot => out.push_str(&strategy.next_mark()),
            }
        }
        out
    }
}

impl fmt::Display for BoundStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id=[{}], queryLen={}, bindingLen={}",
            self.id,
            self.literal_len(),
            self.bindings.len()
        )
    }
}
