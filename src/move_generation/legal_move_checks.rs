//! Check detection.
//!
//! A king is in check when any enemy piece attacks its square under the
//! usual movement geometry. Sliding attacks are blocked by pieces of either
//! color standing strictly between attacker and king.
//!
//! Nothing here caches results: the board can change arbitrarily between
//! calls, so every query rescans all enemy pieces.

use crate::{
    board_location::BoardLocation,
    game_state::{chess_board::ChessBoard, chess_types::{Color, PieceKind}},
    moves::{
        bishop_moves::bishop_attacks, knight_moves::knight_attacks, pawn_moves::pawn_attacks,
        queen_moves::queen_attacks, rook_moves::rook_attacks,
    },
    piece_record::PieceRecord,
};

/// True when `attacker` attacks `square` on `board`.
pub fn piece_attacks_square(board: &ChessBoard, attacker: &PieceRecord, square: BoardLocation) -> bool {
    let from = attacker.location();
    let is_occupied = |x: BoardLocation| board.is_occupied(x);
    match attacker.kind() {
        PieceKind::Pawn => pawn_attacks(attacker.color(), from, square),
        PieceKind::Knight => knight_attacks(from, square),
        PieceKind::Bishop => bishop_attacks(from, square, is_occupied),
        PieceKind::Rook => rook_attacks(from, square, is_occupied),
        PieceKind::Queen => queen_attacks(from, square, is_occupied),
        // The board never lets the kings touch.
        PieceKind::King => false,
    }
}

#[inline]
pub fn is_king_in_check(board: &ChessBoard, color: Color) -> bool {
    let king_square = board.king(color).location();
    board
        .pieces(color.opposite())
        .any(|attacker| piece_attacks_square(board, attacker, king_square))
}

/// Every enemy piece currently attacking the `color` king, in register order.
pub fn king_attackers(board: &ChessBoard, color: Color) -> Vec<PieceRecord> {
    let king_square = board.king(color).location();
    board
        .pieces(color.opposite())
        .filter(|attacker| piece_attacks_square(board, attacker, king_square))
        .copied()
        .collect()
}
