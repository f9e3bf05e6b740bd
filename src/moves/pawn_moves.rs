//! Pawn destinations.
//!
//! White pawns advance toward row 0, black pawns toward row 7. A pawn that
//! has reached the far row has no forward squares left and simply generates
//! nothing there.

use crate::game_state::chess_rules::{pawn_direction, pawn_home_row};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PawnMode {
    /// Quiet advances plus diagonal captures onto enemy pieces.
    Moves,
    /// Both forward diagonals whether or not anything stands there; no advances.
    AttacksOnly,
}

pub fn pawn_destinations(origin: Square, board: &Board, mode: PawnMode, out: &mut Vec<Square>) {
    assert_on_board(origin);
    let mover = board[origin as usize];
    let color = Color::from_code(mover);
    let step = pawn_direction(color);
    let row = row_of(origin);
    let col = col_of(origin);

    if mode == PawnMode::Moves {
        if let Some(one) = square_at(row + step, col) {
            if board[one as usize] == EMPTY {
                out.push(one);

                if row == pawn_home_row(color) {
                    if let Some(two) = square_at(row + 2 * step, col) {
                        if board[two as usize] == EMPTY {
                            out.push(two);
                        }
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1] {
        let Some(target) = square_at(row + step, col + d_col) else {
            continue;
        };
        let occupant = board[target as usize];
        let keep = match mode {
            PawnMode::Moves => is_enemy(mover, occupant),
            PawnMode::AttacksOnly => !same_side(mover, occupant),
        };
        if keep {
            out.push(target);
        }
    }
}
