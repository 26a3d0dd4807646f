use crate::{board_location::BoardLocation, move_generation::legal_move_shared::squares_between_are_empty};

/// True when a rook on `from` attacks `target`: same file or rank, nothing in between.
#[inline]
pub fn rook_attacks(
    from: BoardLocation,
    target: BoardLocation,
    is_occupied: impl Fn(BoardLocation) -> bool,
) -> bool {
    let on_line = from != target && (from.0 == target.0 || from.1 == target.1);
    on_line && squares_between_are_empty(from, target, is_occupied)
}

#[cfg(test)]
mod tests {
    use super::rook_attacks;

    #[test]
    fn open_rank_and_file() {
        assert!(rook_attacks((8, 8), (1, 8), |_| false));
        assert!(rook_attacks((1, 3), (1, 8), |_| false));
    }

    #[test]
    fn rook_blocker_stops_ray() {
        assert!(!rook_attacks((8, 8), (1, 8), |x| x == (3, 8)));
        assert!(!rook_attacks((1, 3), (1, 8), |x| x == (1, 4)));
    }

    #[test]
    fn blocker_beside_the_ray_does_not_matter() {
        assert!(rook_attacks((5, 8), (1, 8), |x| x == (7, 8) || x == (3, 7)));
    }

    #[test]
    fn rook_ignores_diagonals() {
        assert!(!rook_attacks((1, 1), (4, 4), |_| false));
    }
}
