//! Bishop, rook and queen destinations.
//!
//! The piece code alone decides which ray families apply: diagonal for
//! `code & 3 == 3`, orthogonal for `code & 5 == 5`. A queen satisfies both.

use crate::game_state::chess_types::*;
use crate::moves::sliding_moves::{walk_rays, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

pub fn slider_destinations(origin: Square, board: &Board, out: &mut Vec<Square>) {
    let code = board[origin as usize];
    if slides_diagonally(code) {
        walk_rays(origin, board, &DIAGONAL_DIRECTIONS, true, out);
    }
    if slides_orthogonally(code) {
        walk_rays(origin, board, &ORTHOGONAL_DIRECTIONS, true, out);
    }
}

#[cfg(test)]
mod tests {
    use super::slider_destinations;
    use crate::game_state::chess_types::*;

    fn count_from_d4(kind: PieceKind) -> usize {
        let mut board = [EMPTY; 64];
        board[35] = encode_piece(Color::White, kind);
        let mut out = Vec::new();
        slider_destinations(35, &board, &mut out);
        out.len()
    }

    #[test]
    fn open_board_counts_from_d4() {
        assert_eq!(count_from_d4(PieceKind::Bishop), 13);
        assert_eq!(count_from_d4(PieceKind::Rook), 14);
        assert_eq!(count_from_d4(PieceKind::Queen), 27);
    }
}
