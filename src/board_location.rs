use crate::game_state::chess_rules::{MAX_COORDINATE, MIN_COORDINATE};

/// A square as `(file, rank)`, both counted from 1.
pub type BoardLocation = (i8, i8);

/// Returns true when both coordinates lie in `MIN_COORDINATE..=MAX_COORDINATE`.
pub fn is_on_board(x: &BoardLocation) -> bool {
    (MIN_COORDINATE..=MAX_COORDINATE).contains(&x.0)
        && (MIN_COORDINATE..=MAX_COORDINATE).contains(&x.1)
}

/// King-move distance between two squares.
///
/// Two squares are adjacent exactly when this is 1, and identical when it is 0.
pub fn chebyshev_distance(a: &BoardLocation, b: &BoardLocation) -> i8 {
    (a.0 - b.0).abs().max((a.1 - b.1).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_on_board() {
        assert!(is_on_board(&(1, 1)));
        assert!(is_on_board(&(8, 8)));
        assert!(is_on_board(&(1, 8)));
    }

    #[test]
    fn edges_outside_are_rejected() {
        assert!(!is_on_board(&(0, 4)));
        assert!(!is_on_board(&(4, 9)));
        assert!(!is_on_board(&(-1, -1)));
    }

    #[test]
    fn distance_counts_king_steps() {
        assert_eq!(chebyshev_distance(&(1, 1), &(1, 1)), 0);
        assert_eq!(chebyshev_distance(&(1, 1), &(2, 2)), 1);
        assert_eq!(chebyshev_distance(&(1, 1), &(1, 3)), 2);
        assert_eq!(chebyshev_distance(&(8, 1), &(1, 8)), 7);
    }
}
