use crate::{
    board_location::BoardLocation,
    moves::{bishop_moves::bishop_attacks, rook_moves::rook_attacks},
};

/// True when a queen on `from` attacks `target`: the union of bishop and rook attacks.
#[inline]
pub fn queen_attacks(
    from: BoardLocation,
    target: BoardLocation,
    is_occupied: impl Fn(BoardLocation) -> bool,
) -> bool {
    bishop_attacks(from, target, &is_occupied) || rook_attacks(from, target, &is_occupied)
}
