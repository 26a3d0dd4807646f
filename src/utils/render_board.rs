//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and
//! diagnostics in text environments. Rank 8 is printed first.

use crate::game_state::{
    chess_board::ChessBoard,
    chess_rules::{MAX_COORDINATE, MIN_COORDINATE},
    chess_types::{Color, PieceKind},
};

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &ChessBoard) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (MIN_COORDINATE..=MAX_COORDINATE).rev() {
        let label = char::from(b'0' + rank as u8);
        out.push(label);
        out.push(' ');

        for file in MIN_COORDINATE..=MAX_COORDINATE {
            match board.piece_at(file, rank) {
                Some(piece) => out.push(piece_to_unicode(piece.color(), piece.kind())),
                None => out.push('·'),
            }

            if file < MAX_COORDINATE {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::{
        chess_board::ChessBoard,
        chess_types::{Color, PieceKind},
    };
    use crate::piece_record::PieceRecord;

    #[test]
    fn renders_kings_and_a_pawn() -> Result<(), ChessErrors> {
        let mut board = ChessBoard::new(
            PieceRecord::new(PieceKind::King, Color::Light, 5, 1)?,
            PieceRecord::new(PieceKind::King, Color::Dark, 5, 8)?,
        )?;
        assert!(board.add_piece(PieceRecord::new(PieceKind::Pawn, Color::Light, 1, 2)?));

        let rendered = render_board(&board);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 · · · · ♚ · · · 8");
        assert_eq!(lines[7], "2 ♙ · · · · · · · 2");
        assert_eq!(lines[8], "1 · · · · ♔ · · · 1");
        assert_eq!(board.to_string(), rendered);
        Ok(())
    }
}
