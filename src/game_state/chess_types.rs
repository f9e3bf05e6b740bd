//! Core byte-board types.
//!
//! Every square holds a single `PieceCode`: `0` is empty, bit 3 (`8`) is the
//! colour flag and bits 0..=2 carry the piece kind. The kind values overlap on
//! purpose so that move families can be recognised with a mask:
//!
//! | kind   | bits | `& 3 == 3` | `& 5 == 5` |
//! |--------|------|------------|------------|
//! | pawn   | 1    |            |            |
//! | knight | 2    |            |            |
//! | bishop | 3    | yes        |            |
//! | rook   | 5    |            | yes        |
//! | king   | 6    |            |            |
//! | queen  | 7    | yes        | yes        |

pub use crate::game_state::game_state::Position;

/// Board square index (`0..=63`). Index 0 is the top-left corner as printed in
/// FEN (a8), index 63 the bottom-right (h1).
pub type Square = u8;

/// Packed piece code, see the module docs.
pub type PieceCode = u8;

/// One piece code per square, in FEN reading order.
pub type Board = [PieceCode; 64];

/// Castling rights bitmask.
pub type CastlingRights = u8;

pub const EMPTY: PieceCode = 0;
pub const COLOR_FLAG: PieceCode = 8;
const KIND_MASK: PieceCode = 7;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 3;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 0;

/// Side to move, and owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    /// The colour bit as stored in piece codes (`0` or `8`).
    #[inline]
    pub const fn flag(self) -> PieceCode {
        match self {
            Color::White => 0,
            Color::Black => COLOR_FLAG,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Colour encoded in a non-empty piece code.
    #[inline]
    pub const fn from_code(code: PieceCode) -> Self {
        if code & COLOR_FLAG == 0 {
            Color::White
        } else {
            Color::Black
        }
    }
}

/// Piece kind, colour is carried separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    King,
    Queen,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::King,
        PieceKind::Queen,
    ];

    /// Low three bits of the piece code.
    #[inline]
    pub const fn bits(self) -> PieceCode {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::King => 6,
            PieceKind::Queen => 7,
        }
    }

    #[inline]
    pub const fn from_bits(bits: PieceCode) -> Option<Self> {
        match bits & KIND_MASK {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            5 => Some(PieceKind::Rook),
            6 => Some(PieceKind::King),
            7 => Some(PieceKind::Queen),
            _ => None,
        }
    }
}

#[inline]
pub const fn encode_piece(color: Color, kind: PieceKind) -> PieceCode {
    color.flag() | kind.bits()
}

/// Splits a piece code into colour and kind. Empty squares and the unused
/// kind value `4` decode to `None`.
#[inline]
pub const fn decode_piece(code: PieceCode) -> Option<(Color, PieceKind)> {
    match PieceKind::from_bits(code) {
        Some(kind) => Some((Color::from_code(code), kind)),
        None => None,
    }
}

/// Bishop or queen.
#[inline]
pub const fn slides_diagonally(code: PieceCode) -> bool {
    code & 3 == 3
}

/// Rook or queen.
#[inline]
pub const fn slides_orthogonally(code: PieceCode) -> bool {
    code & 5 == 5
}

/// True when both codes hold pieces of the same colour.
#[inline]
pub const fn same_side(a: PieceCode, b: PieceCode) -> bool {
    a != EMPTY && b != EMPTY && (a & COLOR_FLAG) == (b & COLOR_FLAG)
}

/// True when `target` holds a piece of the other colour than `own`.
#[inline]
pub const fn is_enemy(own: PieceCode, target: PieceCode) -> bool {
    target != EMPTY && (own & COLOR_FLAG) != (target & COLOR_FLAG)
}

#[inline]
pub fn assert_on_board(square: Square) {
    assert!(square < 64, "square index out of range: {square}");
}

#[inline]
pub const fn row_of(square: Square) -> i8 {
    (square / 8) as i8
}

#[inline]
pub const fn col_of(square: Square) -> i8 {
    (square % 8) as i8
}

/// Square at `(row, col)`, or `None` when that falls off the board.
#[inline]
pub const fn square_at(row: i8, col: i8) -> Option<Square> {
    if row < 0 || row > 7 || col < 0 || col > 7 {
        return None;
    }
    Some((row * 8 + col) as Square)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_masks_match_kinds() {
        for color in [Color::White, Color::Black] {
            for kind in PieceKind::ALL {
                let code = encode_piece(color, kind);
                assert_eq!(
                    slides_diagonally(code),
                    matches!(kind, PieceKind::Bishop | PieceKind::Queen),
                    "{kind:?}"
                );
                assert_eq!(
                    slides_orthogonally(code),
                    matches!(kind, PieceKind::Rook | PieceKind::Queen),
                    "{kind:?}"
                );
            }
        }
    }

    #[test]
    fn black_codes_carry_colour_flag() {
        assert_eq!(encode_piece(Color::Black, PieceKind::King), 14);
        assert_eq!(encode_piece(Color::White, PieceKind::Queen), 7);
        assert_eq!(decode_piece(13), Some((Color::Black, PieceKind::Rook)));
        assert_eq!(decode_piece(EMPTY), None);
        assert_eq!(decode_piece(4), None);
    }

    #[test]
    fn square_at_rejects_off_board() {
        assert_eq!(square_at(0, 0), Some(0));
        assert_eq!(square_at(7, 7), Some(63));
        assert_eq!(square_at(-1, 3), None);
        assert_eq!(square_at(2, 8), None);
    }

    #[test]
    #[should_panic(expected = "square index out of range")]
    fn out_of_range_square_panics() {
        assert_on_board(64);
    }
}
