use crate::board_location::BoardLocation;

/// True when a knight on `from` attacks `target`. Knights jump, so nothing blocks them.
#[inline]
pub fn knight_attacks(from: BoardLocation, target: BoardLocation) -> bool {
    let d_file = (target.0 - from.0).abs();
    let d_rank = (target.1 - from.1).abs();
    matches!((d_file, d_rank), (1, 2) | (2, 1))
}
