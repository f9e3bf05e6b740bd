//! Crate root module declarations for the byteboard move generator.
//!
//! A position is a flat array of 64 one-byte piece codes. This crate imports
//! positions from FEN, generates pseudo-legal moves per piece, computes the
//! squares either side attacks, filters out moves that expose the mover's
//! king and applies moves to produce new positions.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod slider_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod move_map;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
}

pub use chess_errors::{ChessErrors, ChessResult};
pub use game_state::chess_types::{Board, CastlingRights, Color, PieceCode, PieceKind, Square};
pub use game_state::game_state::Position;
pub use move_generation::legal_move_checks::AttackedSquares;
pub use move_generation::move_map::MoveMap;
