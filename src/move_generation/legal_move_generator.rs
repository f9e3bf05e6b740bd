//! Full legal move generation pipeline.
//!
//! Generates pseudo-legal destinations for every piece of the side to move,
//! then plays each candidate on a scratch copy of the board and drops the
//! ones that leave the mover's king on an attacked square.

use tracing::{debug, trace};

use crate::game_state::{chess_types::*, game_state::Position};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{attacked_squares, king_square};
use crate::move_generation::move_map::{MoveMap, MoveMapBuilder};
use crate::moves::pawn_moves::PawnMode;
use crate::moves::piece_moves::piece_destinations;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_pseudo_legal_moves(position: &Position) -> MoveMap {
    let side_flag = position.side_to_move.flag();
    let mut builder = MoveMapBuilder::new();
    let mut scratch = Vec::with_capacity(28);

    for (index, &code) in position.board.iter().enumerate() {
        if code == EMPTY || (code & COLOR_FLAG) != side_flag {
            continue;
        }

        scratch.clear();
        piece_destinations(index as Square, &position.board, PawnMode::Moves, &mut scratch);
        builder.extend(index as Square, &scratch);
    }

    builder.finish()
}

/// Removes, in place, every move that leaves the side to move's king
/// attacked. Sources without a surviving destination disappear from the map.
pub fn filter_illegal_moves(position: &Position, moves: &mut MoveMap) {
    let mover = position.side_to_move;
    let opponent = mover.opposite();
    let before = moves.move_count();

    moves.retain_moves(|from, to| {
        let scratch = apply_move(&position.board, from, to);
        let Some(king_sq) = king_square(&scratch, mover) else {
            return true;
        };

        let exposed = attacked_squares(&scratch, opponent).contains(king_sq);
        if exposed {
            trace!(
                from = %square_to_algebraic(from),
                to = %square_to_algebraic(to),
                king = %square_to_algebraic(king_sq),
                "rejected move exposing king"
            );
        }
        !exposed
    });

    debug!(
        side = ?mover,
        pseudo_legal = before,
        legal = moves.move_count(),
        "legality filter finished"
    );
}

pub fn generate_legal_moves(position: &Position) -> MoveMap {
    let mut moves = generate_pseudo_legal_moves(position);
    filter_illegal_moves(position, &mut moves);
    moves
}
