use crate::game_state::chess_rules::CASTLING_HOME_SQUARES;
use crate::game_state::chess_types::*;

/// Copy of `board` with the piece on `from` moved to `to`, replacing whatever
/// stood there. The input board is never modified.
pub fn apply_move(board: &Board, from: Square, to: Square) -> Board {
    assert_on_board(from);
    assert_on_board(to);

    let mut next = *board;
    next[to as usize] = board[from as usize];
    next[from as usize] = EMPTY;
    next
}

/// Rights left after a piece departs `from`. Leaving a king's home square
/// revokes both of that side's rights, leaving a rook's home square revokes
/// that rook's right only.
pub fn clear_castling_rights(rights: CastlingRights, from: Square) -> CastlingRights {
    CASTLING_HOME_SQUARES
        .iter()
        .find(|(home, _)| *home == from)
        .map_or(rights, |(_, revoked)| rights & !revoked)
}
