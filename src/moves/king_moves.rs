use crate::game_state::chess_types::*;
use crate::moves::sliding_moves::{walk_rays, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

/// One step in each of the eight directions. Castling is never produced.
pub fn king_destinations(origin: Square, board: &Board, out: &mut Vec<Square>) {
    walk_rays(origin, board, &ORTHOGONAL_DIRECTIONS, false, out);
    walk_rays(origin, board, &DIAGONAL_DIRECTIONS, false, out);
}

#[cfg(test)]
mod tests {
    use super::king_destinations;
    use crate::game_state::chess_types::*;

    #[test]
    fn home_king_ignores_castling_rights() {
        let position =
            Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq").expect("FEN should parse");
        let mut out = Vec::new();
        king_destinations(60, &position.board, &mut out);
        out.sort_unstable();
        assert_eq!(out, vec![51, 52, 53, 59, 61]);
    }
}
