//! The crate's structured error taxonomy.

use thiserror::Error;

/// Everything that can go wrong compiling or running a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The pattern was empty.
    #[error("pattern is empty or absent")]
    InvalidPattern,

    /// A syntax violation was found while parsing the pattern.
    #[error("parse error at byte {pos}: {reason}")]
    Parse { pos: usize, reason: ParseErrorReason },

    /// The text passed to a match call exceeded the configured ceiling.
    #[error("text length {len} exceeds the configured maximum of {max} bytes")]
    TextTooLong { len: usize, max: usize },

    /// A bitset or AST node could not be allocated.
    ///
    /// Unreachable in practice under `std`'s allocator (which aborts
    /// rather than returning an allocation failure), but kept so the
    /// taxonomy matches the source's four-way split and so a
    /// `try_reserve`-based implementation could report it without
    /// changing this enum's shape.
    #[error("failed to allocate a bitset or AST node")]
    AllocationFailure,
}

/// Which parsing rule failed, and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorReason {
    #[error("expected ')'")]
    ExpectedCloseParen,
    #[error("unexpected metacharacter '{0}'")]
    UnexpectedMetachar(char),
    #[error("dangling escape '\\' at end of pattern")]
    DanglingEscape,
    #[error("trailing input after a complete pattern")]
    TrailingInput,
    #[error("empty group or alternative")]
    EmptyTerm,
}
