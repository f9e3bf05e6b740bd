//! FEN-to-Position parser.
//!
//! Reads up to three whitespace separated fields: piece placement (required),
//! side to move and castling rights. En passant and the clocks are accepted
//! and ignored since nothing in the engine consumes them.

use tracing::debug;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::Position};

pub fn parse_fen(fen: &str) -> ChessResult<Position> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessErrors::MalformedPosition("missing piece placement".to_owned()))?;

    let mut position = Position::new_empty();
    parse_board(board_part, &mut position.board)?;
    position.side_to_move = parse_side_to_move(parts.next());
    position.castling_rights = parse_castling_rights(parts.next());

    debug!(
        fen,
        side = ?position.side_to_move,
        castling = position.castling_rights,
        pieces = position.board.iter().filter(|code| **code != EMPTY).count(),
        "imported position"
    );

    Ok(position)
}

fn parse_board(board_part: &str, board: &mut Board) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::MalformedPosition(format!(
            "expected 8 ranks, found {}",
            ranks.len()
        )));
    }

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::MalformedPosition(format!(
                        "invalid empty-square count '{ch}' in rank {}",
                        row + 1
                    )));
                }
                file += empty_count as usize;
            } else {
                let code = piece_from_fen_char(ch).ok_or_else(|| {
                    ChessErrors::MalformedPosition(format!(
                        "invalid piece character '{ch}' in rank {}",
                        row + 1
                    ))
                })?;
                if file < 8 {
                    board[row * 8 + file] = code;
                }
                file += 1;
            }

            if file > 8 {
                return Err(ChessErrors::MalformedPosition(format!(
                    "rank {} '{rank_str}' has more than 8 files",
                    row + 1
                )));
            }
        }

        if file != 8 {
            return Err(ChessErrors::MalformedPosition(format!(
                "rank {} '{rank_str}' has {file} files",
                row + 1
            )));
        }
    }

    Ok(())
}

/// Only a literal `b` hands the move to black.
fn parse_side_to_move(side_part: Option<&str>) -> Color {
    match side_part {
        Some("b") => Color::Black,
        _ => Color::White,
    }
}

/// Each of `K Q k q` is looked for independently; `-` or absence means none.
fn parse_castling_rights(castling_part: Option<&str>) -> CastlingRights {
    let Some(castling_part) = castling_part else {
        return 0;
    };
    if castling_part == "-" {
        return 0;
    }

    let mut rights: CastlingRights = 0;
    for (letter, bit) in [
        ('K', CASTLE_WHITE_KINGSIDE),
        ('Q', CASTLE_WHITE_QUEENSIDE),
        ('k', CASTLE_BLACK_KINGSIDE),
        ('q', CASTLE_BLACK_QUEENSIDE),
    ] {
        if castling_part.contains(letter) {
            rights |= bit;
        }
    }
    rights
}

pub fn piece_from_fen_char(ch: char) -> Option<PieceCode> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(encode_piece(color, kind))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_placement_decodes() {
        let position = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR")
            .expect("placement should parse");

        assert_eq!(decode_piece(position.board[0]), Some((Color::Black, PieceKind::Rook)));
        assert_eq!(decode_piece(position.board[4]), Some((Color::Black, PieceKind::King)));
        assert_eq!(decode_piece(position.board[60]), Some((Color::White, PieceKind::King)));
        assert_eq!(position.board[3], 15);
        assert_eq!(position.board[59], 7);
        assert!(position.board[16..48].iter().all(|code| *code == EMPTY));
        assert_eq!(position.side_to_move, Color::White);
        assert_eq!(position.castling_rights, 0);
    }

    #[test]
    fn side_and_rights_fields() {
        let position = parse_fen("8/8/8/4p1K1/2k1P3/8/8/8 b - - 0 1").expect("FEN should parse");
        assert_eq!(position.side_to_move, Color::Black);
        assert_eq!(position.castling_rights, 0);

        let start = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(start.castling_rights, 0b1111);

        let partial = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq").expect("FEN should parse");
        assert_eq!(
            partial.castling_rights,
            CASTLE_WHITE_KINGSIDE | CASTLE_BLACK_QUEENSIDE
        );
    }

    #[test]
    fn unknown_side_letter_means_white() {
        let position = parse_fen("8/8/8/8/8/8/8/8 x").expect("FEN should parse");
        assert_eq!(position.side_to_move, Color::White);
    }

    #[test]
    fn wrong_rank_count_is_malformed() {
        let err = parse_fen("8/8/8/8/8/8/8").expect_err("seven ranks should fail");
        assert!(matches!(err, ChessErrors::MalformedPosition(_)));
    }

    #[test]
    fn short_and_long_ranks_are_malformed() {
        assert!(matches!(
            parse_fen("rnbqkbn/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(ChessErrors::MalformedPosition(_))
        ));
        assert!(matches!(
            parse_fen("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(ChessErrors::MalformedPosition(_))
        ));
        assert!(matches!(
            parse_fen("8/8/8/44p/8/8/8/8"),
            Err(ChessErrors::MalformedPosition(_))
        ));
    }

    #[test]
    fn unknown_characters_are_malformed() {
        let err = parse_fen("8/8/8/3X4/8/8/8/8").expect_err("X is not a piece");
        assert_eq!(
            err,
            ChessErrors::MalformedPosition("invalid piece character 'X' in rank 4".to_owned())
        );
        assert!(parse_fen("8/8/8/08/8/8/8/8").is_err());
        assert!(parse_fen("").is_err());
    }
}
