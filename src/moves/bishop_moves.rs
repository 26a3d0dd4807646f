use crate::{board_location::BoardLocation, move_generation::legal_move_shared::squares_between_are_empty};

/// True when a bishop on `from` attacks `target`: same diagonal, nothing in between.
#[inline]
pub fn bishop_attacks(
    from: BoardLocation,
    target: BoardLocation,
    is_occupied: impl Fn(BoardLocation) -> bool,
) -> bool {
    let on_diagonal = from != target && (target.0 - from.0).abs() == (target.1 - from.1).abs();
    on_diagonal && squares_between_are_empty(from, target, is_occupied)
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks;

    #[test]
    fn open_long_diagonal() {
        assert!(bishop_attacks((6, 6), (1, 1), |_| false));
        assert!(bishop_attacks((6, 3), (1, 8), |_| false));
    }

    #[test]
    fn blocker_on_diagonal_stops_attack() {
        assert!(!bishop_attacks((6, 6), (1, 1), |x| x == (2, 2)));
    }

    #[test]
    fn blocker_behind_target_does_not_matter() {
        assert!(bishop_attacks((6, 6), (1, 1), |x| x == (7, 7)));
    }

    #[test]
    fn bishop_ignores_lines() {
        assert!(!bishop_attacks((1, 5), (1, 8), |_| false));
        assert!(!bishop_attacks((1, 5), (5, 5), |_| false));
    }
}
