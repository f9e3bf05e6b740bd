//! Attack squares and king safety.

use crate::game_state::chess_rules::king_code;
use crate::game_state::chess_types::*;
use crate::moves::pawn_moves::PawnMode;
use crate::moves::piece_moves::piece_destinations;

/// Set of squares attacked by one side, stored as a 64-bit mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttackedSquares(u64);

impl AttackedSquares {
    #[inline]
    pub fn insert(&mut self, square: Square) {
        self.0 |= 1u64 << square;
    }

    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        assert_on_board(square);
        self.0 & (1u64 << square) != 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Squares in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Square> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let square = bits.trailing_zeros() as Square;
            bits &= bits - 1;
            Some(square)
        })
    }
}

/// Union of every square `side`'s pieces attack on `board`. Pawns contribute
/// their capture diagonals only.
pub fn attacked_squares(board: &Board, side: Color) -> AttackedSquares {
    let mut attacked = AttackedSquares::default();
    let mut scratch = Vec::with_capacity(28);

    for (index, &code) in board.iter().enumerate() {
        if code == EMPTY || Color::from_code(code) != side {
            continue;
        }

        scratch.clear();
        piece_destinations(index as Square, board, PawnMode::AttacksOnly, &mut scratch);
        for &target in &scratch {
            attacked.insert(target);
        }
    }

    attacked
}

/// First square holding `color`'s king, if any.
#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    let king = king_code(color);
    board
        .iter()
        .position(|&code| code == king)
        .map(|index| index as Square)
}

/// True when `color`'s king stands on a square the other side attacks. A side
/// without a king is never considered attacked.
pub fn is_king_attacked(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    attacked_squares(board, color.opposite()).contains(king_sq)
}
