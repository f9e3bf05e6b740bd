//! Square names in algebraic coordinates.
//!
//! The byte board counts from the top-left corner, so `a8` is square 0 and
//! `h1` is square 63.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;

/// Convert an algebraic square name (for example: "e4") to a square index.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let col = file - b'a';
    let row = b'8' - rank;
    Ok(row * 8 + col)
}

/// Convert a square index (`0..=63`) to its algebraic name.
pub fn square_to_algebraic(square: Square) -> String {
    assert_on_board(square);
    let file = char::from(b'a' + square % 8);
    let rank = char::from(b'8' - square / 8);
    format!("{file}{rank}")
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::chess_errors::ChessErrors;

    #[test]
    fn corners_and_kings() {
        assert_eq!(algebraic_to_square("a8"), Ok(0));
        assert_eq!(algebraic_to_square("h1"), Ok(63));
        assert_eq!(algebraic_to_square("e1"), Ok(60));
        assert_eq!(square_to_algebraic(4), "e8");
        assert_eq!(square_to_algebraic(36), "e4");
    }

    #[test]
    fn bad_names_are_rejected() {
        assert_eq!(
            algebraic_to_square("i1"),
            Err(ChessErrors::InvalidAlgebraic("i1".to_owned()))
        );
        assert!(algebraic_to_square("e9").is_err());
        assert!(algebraic_to_square("e").is_err());
    }
}
