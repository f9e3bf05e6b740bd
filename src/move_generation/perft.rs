//! Node counting over the move tree.
//!
//! Each ply plays every generated move with `Position::play` and recurses.
//! Castling, en passant and promotion are never generated, so published
//! perft tables only match while none of those occur; for the start
//! position that holds through depth 4.

use crate::game_state::{chess_types::EMPTY, game_state::Position};
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
    }
}

pub fn perft<G: MoveGenerator + ?Sized>(
    generator: &G,
    position: &Position,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let moves = generator.generate_moves(position);
    let mut total = PerftCounts::default();

    for (from, to) in moves.pairs() {
        if depth == 1 {
            total.nodes += 1;
            if position.board[to as usize] != EMPTY {
                total.captures += 1;
            }
            continue;
        }

        let next = position.play(from, to);
        total.merge(perft(generator, &next, depth - 1));
    }

    total
}

/// Leaf count under each root move, for diffing against a reference engine.
pub fn perft_divide<G: MoveGenerator + ?Sized>(
    generator: &G,
    position: &Position,
    depth: u8,
) -> Vec<((u8, u8), usize)> {
    if depth == 0 {
        return Vec::new();
    }

    generator
        .generate_moves(position)
        .pairs()
        .map(|(from, to)| {
            let next = position.play(from, to);
            ((from, to), perft(generator, &next, depth - 1).nodes)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide, PerftCounts};
    use crate::game_state::game_state::Position;
    use crate::move_generation::move_generator::LegalMoveGenerator;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let game = Position::new_game();
        assert_eq!(
            perft(&LegalMoveGenerator, &game, 0),
            PerftCounts {
                nodes: 1,
                captures: 0
            }
        );
    }

    #[test]
    fn start_position_shallow_counts() {
        let game = Position::new_game();
        assert_eq!(perft(&LegalMoveGenerator, &game, 1).nodes, 20);
        assert_eq!(perft(&LegalMoveGenerator, &game, 2).nodes, 400);

        let depth_three = perft(&LegalMoveGenerator, &game, 3);
        assert_eq!(depth_three.nodes, 8_902);
        assert_eq!(depth_three.captures, 34);
    }

    #[test]
    #[ignore = "slow in debug builds"]
    fn start_position_depth_four() {
        let game = Position::new_game();
        let counts = perft(&LegalMoveGenerator, &game, 4);
        assert_eq!(counts.nodes, 197_281);
        assert_eq!(counts.captures, 1_576);
    }

    #[test]
    fn divide_sums_to_perft() {
        let game = Position::new_game();
        let divided = perft_divide(&LegalMoveGenerator, &game, 2);
        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|(_, nodes)| *nodes == 20));
        assert_eq!(divided.iter().map(|(_, nodes)| nodes).sum::<usize>(), 400);
    }
}
