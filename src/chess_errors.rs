//! Errors used throughout the move-generation engine.
//!
//! Only text parsing is fallible. Generation, attack calculation and move
//! application are total over well-formed positions; handing them a square
//! outside `0..=63` is a contract violation and panics instead of returning
//! one of these variants.

/// Unified error type for the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessErrors {
    /// The FEN text could not be turned into a board.
    ///
    /// Payload: a short description of what was wrong, including the
    /// offending rank or character where one exists.
    #[error("malformed position: {0}")]
    MalformedPosition(String),

    /// A square name such as `e4` could not be parsed.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),
}

pub type ChessResult<T> = Result<T, ChessErrors>;
