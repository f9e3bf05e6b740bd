//! Canonical rule constants.
//!
//! Squares use the top-left origin of the byte board: black's back rank is
//! row 0, white's back rank is row 7.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const WHITE_KING: PieceCode = encode_piece(Color::White, PieceKind::King);
pub const BLACK_KING: PieceCode = encode_piece(Color::Black, PieceKind::King);

/// Row a pawn must stand on to advance two squares.
#[inline]
pub const fn pawn_home_row(color: Color) -> i8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Row step of a pawn advance.
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

#[inline]
pub const fn king_code(color: Color) -> PieceCode {
    match color {
        Color::White => WHITE_KING,
        Color::Black => BLACK_KING,
    }
}

/// Home squares whose departure revokes castling rights, with the bits each
/// one revokes.
pub const CASTLING_HOME_SQUARES: [(Square, CastlingRights); 6] = [
    (0, CASTLE_BLACK_QUEENSIDE),
    (4, CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE),
    (7, CASTLE_BLACK_KINGSIDE),
    (56, CASTLE_WHITE_QUEENSIDE),
    (60, CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE),
    (63, CASTLE_WHITE_KINGSIDE),
];
