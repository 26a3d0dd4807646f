//! Ray helpers shared by the sliding pieces.
//!
//! Bishops, rooks and queens all attack along straight rays and are blocked
//! by the first piece in the way. The functions here walk such a ray between
//! two squares so the per-piece predicates only decide *which* rays they may
//! use.

use crate::board_location::BoardLocation;

/// Unit step `(d_file, d_rank)` leading from `from` to `to`, if the two squares
/// share a file, a rank or a diagonal.
///
/// Returns `None` for identical squares and for squares on no common line.
pub fn ray_step(from: BoardLocation, to: BoardLocation) -> Option<(i8, i8)> {
    let d_file = to.0 - from.0;
    let d_rank = to.1 - from.1;
    if d_file == 0 && d_rank == 0 {
        return None;
    }
    if d_file == 0 || d_rank == 0 || d_file.abs() == d_rank.abs() {
        Some((d_file.signum(), d_rank.signum()))
    } else {
        None
    }
}

/// True when `from` and `to` share a line and every square strictly between
/// them is unoccupied according to `is_occupied`.
///
/// The end squares themselves are never inspected. Adjacent squares on a
/// common line have nothing between them and always pass. Squares that share
/// no line have no path at all and yield false.
pub fn squares_between_are_empty(
    from: BoardLocation,
    to: BoardLocation,
    is_occupied: impl Fn(BoardLocation) -> bool,
) -> bool {
    let Some((d_file, d_rank)) = ray_step(from, to) else {
        return false;
    };
    let mut current = (from.0 + d_file, from.1 + d_rank);
    while current != to {
        if is_occupied(current) {
            return false;
        }
        current = (current.0 + d_file, current.1 + d_rank);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_follow_the_eight_directions() {
        assert_eq!(ray_step((4, 4), (4, 8)), Some((0, 1)));
        assert_eq!(ray_step((4, 4), (1, 4)), Some((-1, 0)));
        assert_eq!(ray_step((4, 4), (7, 7)), Some((1, 1)));
        assert_eq!(ray_step((4, 4), (1, 7)), Some((-1, 1)));
        assert_eq!(ray_step((4, 4), (6, 2)), Some((1, -1)));
    }

    #[test]
    fn no_step_off_line_or_in_place() {
        assert_eq!(ray_step((4, 4), (4, 4)), None);
        assert_eq!(ray_step((4, 4), (5, 6)), None);
        assert_eq!(ray_step((1, 1), (8, 7)), None);
    }

    #[test]
    fn empty_board_path_is_clear() {
        assert!(squares_between_are_empty((1, 1), (8, 8), |_| false));
        assert!(squares_between_are_empty((1, 8), (8, 8), |_| false));
    }

    #[test]
    fn blocker_strictly_between_closes_path() {
        assert!(!squares_between_are_empty((1, 8), (8, 8), |x| x == (3, 8)));
        assert!(!squares_between_are_empty((6, 6), (1, 1), |x| x == (2, 2)));
    }

    #[test]
    fn end_squares_and_off_line_blockers_are_ignored() {
        let occupied = |x: BoardLocation| x == (1, 1) || x == (8, 8) || x == (2, 3);
        assert!(squares_between_are_empty((1, 1), (8, 8), occupied));
    }

    #[test]
    fn adjacent_squares_have_nothing_between() {
        assert!(squares_between_are_empty((4, 4), (5, 5), |_| true));
    }

    #[test]
    fn unrelated_squares_have_no_path() {
        assert!(!squares_between_are_empty((1, 1), (2, 3), |_| false));
    }
}
