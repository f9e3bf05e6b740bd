//! Byte-board position model.
//!
//! `Position` is plain data: the 64 piece codes, whose turn it is and the
//! castling rights. Generation and legality live in `move_generation`; the
//! methods here are thin entry points onto those modules.

use tracing::trace;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, clear_castling_rights};
use crate::move_generation::legal_move_checks::{attacked_squares, AttackedSquares};
use crate::move_generation::legal_move_generator::{
    generate_legal_moves, generate_pseudo_legal_moves,
};
use crate::move_generation::move_map::MoveMap;
use crate::utils::algebraic::square_to_algebraic;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            board: [EMPTY; 64],
            side_to_move: Color::White,
            castling_rights: 0,
        }
    }
}

impl Position {
    /// Empty board, white to move, no castling rights.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        // The constant is covered by the parser tests.
        match parse_fen(STARTING_POSITION_FEN) {
            Ok(position) => position,
            Err(err) => unreachable!("starting FEN failed to parse: {err}"),
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> PieceCode {
        assert_on_board(square);
        self.board[square as usize]
    }

    /// Fully legal moves for the side to move.
    pub fn legal_moves(&self) -> MoveMap {
        generate_legal_moves(self)
    }

    /// Moves obeying piece geometry only; may leave the mover's king attacked.
    pub fn pseudo_legal_moves(&self) -> MoveMap {
        generate_pseudo_legal_moves(self)
    }

    /// Squares attacked by `side`, regardless of whose turn it is.
    pub fn attacked_squares(&self, side: Color) -> AttackedSquares {
        attacked_squares(&self.board, side)
    }

    /// Relocates the piece on `from` to `to` and revokes castling rights tied
    /// to `from`. The side to move is left as it was.
    pub fn make_move(&self, from: Square, to: Square) -> Position {
        let board = apply_move(&self.board, from, to);
        let castling_rights = clear_castling_rights(self.castling_rights, from);
        if castling_rights != self.castling_rights {
            trace!(
                from = %square_to_algebraic(from),
                before = self.castling_rights,
                after = castling_rights,
                "castling rights revoked"
            );
        }

        Position {
            board,
            side_to_move: self.side_to_move,
            castling_rights,
        }
    }

    /// `make_move` followed by handing the turn to the opponent.
    pub fn play(&self, from: Square, to: Square) -> Position {
        let mut next = self.make_move(from, to);
        next.side_to_move = self.side_to_move.opposite();
        next
    }
}
