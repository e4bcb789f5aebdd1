use thiserror::Error;

/// Errors surfaced at the boundary of the engine, per the construction and
/// query contracts. Every other condition (empty results, the `include_unknown`
/// placeholder, a bound-exceeded edit distance) is an in-range outcome, not an
/// error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SymSpellError {
    #[error("query issued against an engine with no words loaded")]
    NotInitialized,

    #[error("requested max edit distance {requested} exceeds configured maximum {max}")]
    InvalidArgument { requested: i64, max: i64 },

    #[error("malformed lexicon line {line:?}: {reason}")]
    ParseError { line: String, reason: String },
}

pub type Result<T> = std::result::Result<T, SymSpellError>;
