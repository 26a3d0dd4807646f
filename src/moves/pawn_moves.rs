use crate::{board_location::BoardLocation, game_state::chess_types::Color};

/// True when a `color` pawn on `from` attacks `target`.
///
/// A pawn only threatens the two diagonal squares one rank ahead of it;
/// the square straight ahead is never attacked.
#[inline]
pub fn pawn_attacks(color: Color, from: BoardLocation, target: BoardLocation) -> bool {
    (target.0 - from.0).abs() == 1 && target.1 == from.1 + color.pawn_direction()
}

#[cfg(test)]
mod tests {
    use super::pawn_attacks;
    use crate::game_state::chess_types::Color;

    #[test]
    fn light_pawn_attacks_upward_diagonals() {
        assert!(pawn_attacks(Color::Light, (5, 2), (4, 3)));
        assert!(pawn_attacks(Color::Light, (5, 2), (6, 3)));
        assert!(!pawn_attacks(Color::Light, (5, 2), (4, 1)));
        assert!(!pawn_attacks(Color::Light, (5, 2), (5, 3)));
    }

    #[test]
    fn dark_pawn_attacks_downward_diagonals() {
        assert!(pawn_attacks(Color::Dark, (5, 7), (4, 6)));
        assert!(pawn_attacks(Color::Dark, (5, 7), (6, 6)));
        assert!(!pawn_attacks(Color::Dark, (5, 7), (6, 8)));
        assert!(!pawn_attacks(Color::Dark, (5, 7), (5, 6)));
    }

    #[test]
    fn pawn_does_not_attack_along_its_rank() {
        assert!(!pawn_attacks(Color::Light, (3, 1), (4, 1)));
        assert!(!pawn_attacks(Color::Dark, (3, 1), (2, 1)));
    }
}
