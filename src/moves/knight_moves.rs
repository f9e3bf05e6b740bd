use crate::game_state::chess_types::*;

/// `(d_col, d_row)` jumps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
];

/// Appends knight destinations from `origin`: on board and not holding a
/// same-colour piece.
pub fn knight_destinations(origin: Square, board: &Board, out: &mut Vec<Square>) {
    assert_on_board(origin);
    let mover = board[origin as usize];
    let row = row_of(origin);
    let col = col_of(origin);

    for (d_col, d_row) in KNIGHT_OFFSETS {
        let Some(target) = square_at(row + d_row, col + d_col) else {
            continue;
        };
        if same_side(mover, board[target as usize]) {
            continue;
        }
        out.push(target);
    }
}
