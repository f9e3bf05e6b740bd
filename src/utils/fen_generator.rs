use crate::game_state::{chess_types::*, game_state::Position};

/// Writes the position back out as FEN. The engine does not track en passant
/// or the clocks, so those fields are always `- 0 1`.
pub fn generate_fen(position: &Position) -> String {
    let board = generate_board_field(&position.board);
    let side_to_move = match position.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(position.castling_rights);

    format!("{board} {side_to_move} {castling} - 0 1")
}

pub fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for (row, rank) in board.chunks(8).enumerate() {
        let mut empty_count = 0u8;

        for &code in rank {
            match piece_to_fen_char(code) {
                Some(ch) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(ch);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

pub fn piece_to_fen_char(code: PieceCode) -> Option<char> {
    let (color, kind) = decode_piece(code)?;
    let base = match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    Some(match color {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    })
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    for (bit, letter) in [
        (CASTLE_WHITE_KINGSIDE, 'K'),
        (CASTLE_WHITE_QUEENSIDE, 'Q'),
        (CASTLE_BLACK_KINGSIDE, 'k'),
        (CASTLE_BLACK_QUEENSIDE, 'q'),
    ] {
        if rights & bit != 0 {
            out.push(letter);
        }
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}
