use crate::{
    board_location::{is_on_board, BoardLocation},
    chess_errors::ChessErrors,
    game_state::chess_types::{Color, PieceKind},
};

/// A chess piece with its kind, side and square.
///
/// Kind and color never change after construction. The location is always on
/// the board: `new` refuses anything else, and only the board's move
/// operation relocates a piece afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PieceRecord {
    kind: PieceKind,
    color: Color,
    location: BoardLocation,
}

impl PieceRecord {
    /// Builds a piece on `(x, y)`, where `x` is the file and `y` the rank.
    ///
    /// # Errors
    ///
    /// `ChessErrors::OutOfBounds` when either coordinate is outside `1..=8`.
    pub fn new(kind: PieceKind, color: Color, x: i8, y: i8) -> Result<Self, ChessErrors> {
        let location = (x, y);
        if !is_on_board(&location) {
            return Err(ChessErrors::OutOfBounds(location));
        }
        Ok(PieceRecord {
            kind,
            color,
            location,
        })
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn location(&self) -> BoardLocation {
        self.location
    }

    pub fn x(&self) -> i8 {
        self.location.0
    }

    pub fn y(&self) -> i8 {
        self.location.1
    }

    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    pub fn is_pawn(&self) -> bool {
        self.kind == PieceKind::Pawn
    }

    /// Callers must have checked that `location` is on the board.
    pub(crate) fn relocate(&mut self, location: BoardLocation) {
        debug_assert!(is_on_board(&location));
        self.location = location;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_its_fields() -> Result<(), ChessErrors> {
        let rook = PieceRecord::new(PieceKind::Rook, Color::Dark, 3, 7)?;
        assert_eq!(rook.kind(), PieceKind::Rook);
        assert_eq!(rook.color(), Color::Dark);
        assert_eq!(rook.location(), (3, 7));
        assert_eq!((rook.x(), rook.y()), (3, 7));
        assert!(!rook.is_king());
        assert!(!rook.is_pawn());
        Ok(())
    }

    #[test]
    fn off_board_coordinates_are_refused() {
        for (x, y) in [(0, 1), (1, 0), (9, 8), (8, 9), (-3, 4)] {
            assert_eq!(
                PieceRecord::new(PieceKind::Pawn, Color::Light, x, y),
                Err(ChessErrors::OutOfBounds((x, y)))
            );
        }
    }

    #[test]
    fn relocate_moves_only_the_square() -> Result<(), ChessErrors> {
        let mut knight = PieceRecord::new(PieceKind::Knight, Color::Light, 2, 1)?;
        knight.relocate((3, 3));
        assert_eq!(knight.location(), (3, 3));
        assert_eq!(knight.kind(), PieceKind::Knight);
        assert_eq!(knight.color(), Color::Light);
        Ok(())
    }
}
