//! Shared ray walker for bishops, rooks, queens and the king.
//!
//! Directions are `(d_col, d_row)` steps on the 8x8 grid, so a ray can never
//! wrap from one edge of the board onto the next row.

use crate::game_state::chess_types::*;

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Appends every destination reachable from `origin` along `directions`.
///
/// A ray stops before a same-colour piece, stops on (and includes) an enemy
/// piece, and otherwise continues only while `is_long` holds. With `is_long`
/// false each direction contributes at most one square.
pub fn walk_rays(
    origin: Square,
    board: &Board,
    directions: &[(i8, i8)],
    is_long: bool,
    out: &mut Vec<Square>,
) {
    assert_on_board(origin);
    let mover = board[origin as usize];
    let row = row_of(origin);
    let col = col_of(origin);

    for &(d_col, d_row) in directions {
        let mut distance = 1i8;
        while let Some(target) = square_at(row + d_row * distance, col + d_col * distance) {
            let occupant = board[target as usize];
            if same_side(mover, occupant) {
                break;
            }

            out.push(target);

            if occupant != EMPTY || !is_long {
                break;
            }
            distance += 1;
        }
    }
}
