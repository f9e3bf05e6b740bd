//! Dispatch from a square to the generator for whatever stands on it.

use crate::game_state::chess_types::*;
use crate::moves::king_moves::king_destinations;
use crate::moves::knight_moves::knight_destinations;
use crate::moves::pawn_moves::{pawn_destinations, PawnMode};
use crate::moves::slider_moves::slider_destinations;

/// Appends the pseudo-legal destinations of the piece on `origin`. Empty
/// squares produce nothing. `pawn_mode` only affects pawns.
pub fn piece_destinations(
    origin: Square,
    board: &Board,
    pawn_mode: PawnMode,
    out: &mut Vec<Square>,
) {
    assert_on_board(origin);
    let Some((_, kind)) = decode_piece(board[origin as usize]) else {
        return;
    };

    match kind {
        PieceKind::Pawn => pawn_destinations(origin, board, pawn_mode, out),
        PieceKind::Knight => knight_destinations(origin, board, out),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            slider_destinations(origin, board, out)
        }
        PieceKind::King => king_destinations(origin, board, out),
    }
}

#[cfg(test)]
mod tests {
    use super::piece_destinations;
    use crate::game_state::chess_types::*;
    use crate::moves::pawn_moves::PawnMode;

    #[test]
    fn empty_square_yields_nothing() {
        let board = [EMPTY; 64];
        let mut out = Vec::new();
        piece_destinations(20, &board, PawnMode::Moves, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn starting_back_rank_knight_has_two_moves() {
        let position = Position::new_game();
        let mut out = Vec::new();
        piece_destinations(62, &position.board, PawnMode::Moves, &mut out);
        out.sort_unstable();
        assert_eq!(out, vec![45, 47]);
    }
}
