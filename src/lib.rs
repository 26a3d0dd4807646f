//! Crate root module declarations for the chess field board engine.
//!
//! The engine tracks which pieces stand where on an 8×8 board, guards the
//! placement rules (one king per side, at most eight pawns per side, kings
//! never adjacent, one piece per square) and answers whether a king is
//! currently attacked.
//!
//! ```
//! use chess_field::{ChessBoard, Color, PieceKind, PieceRecord};
//!
//! let mut board = ChessBoard::new(
//!     PieceRecord::new(PieceKind::King, Color::Light, 1, 1)?,
//!     PieceRecord::new(PieceKind::King, Color::Dark, 1, 8)?,
//! )?;
//! assert!(board.add_piece(PieceRecord::new(PieceKind::Rook, Color::Light, 8, 8)?));
//! assert!(board.is_king_attacked(Color::Dark));
//! assert!(board.add_piece(PieceRecord::new(PieceKind::Pawn, Color::Dark, 3, 8)?));
//! assert!(!board.is_king_attacked(Color::Dark));
//! # Ok::<(), chess_field::ChessErrors>(())
//! ```

pub mod board_location;
pub mod chess_errors;
pub mod piece_record;
pub mod piece_register;

pub mod game_state {
    pub mod chess_board;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_shared;
}

pub mod utils {
    pub mod render_board;
}

pub use board_location::BoardLocation;
pub use chess_errors::{ChessErrors, SetupViolation};
pub use game_state::chess_board::ChessBoard;
pub use game_state::chess_types::{Color, PieceKind};
pub use piece_record::PieceRecord;
