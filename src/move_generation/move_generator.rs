use crate::game_state::game_state::Position;
use crate::move_generation::legal_move_generator::{
    generate_legal_moves, generate_pseudo_legal_moves,
};
use crate::move_generation::move_map::MoveMap;

pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, position: &Position) -> MoveMap;
}

/// Pseudo-legal generation followed by the king-safety filter.
pub struct LegalMoveGenerator;

/// Geometry only; moves may leave the mover's king attacked.
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves(&self, position: &Position) -> MoveMap {
        generate_legal_moves(position)
    }
}

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, position: &Position) -> MoveMap {
        generate_pseudo_legal_moves(position)
    }
}

#[cfg(test)]
mod tests {
    use super::{LegalMoveGenerator, MoveGenerator, PseudoLegalMoveGenerator};
    use crate::game_state::game_state::Position;

    #[test]
    fn generators_agree_when_no_move_is_illegal() {
        let game = Position::new_game();
        assert_eq!(
            LegalMoveGenerator.generate_moves(&game),
            PseudoLegalMoveGenerator.generate_moves(&game)
        );
    }

    #[test]
    fn legal_moves_are_a_subset_of_pseudo_legal() {
        let position = Position::from_fen("r1bk3r/p2pBpNp/n4n2/1p1NP2P/6P1/3P4/P1P1K3/q5b1")
            .expect("FEN should parse");
        let legal = LegalMoveGenerator.generate_moves(&position);
        let pseudo = PseudoLegalMoveGenerator.generate_moves(&position);

        assert!(legal.move_count() <= pseudo.move_count());
        for (from, to) in legal.pairs() {
            assert!(pseudo.contains_move(from, to));
        }
    }
}
