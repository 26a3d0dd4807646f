use crate::{
    board_location::BoardLocation,
    chess_errors::ChessErrors,
    game_state::chess_types::Color,
    piece_record::PieceRecord,
};

/// All pieces of one side.
///
/// The king is held in its own field rather than at a fixed index of the
/// piece list, so it cannot be removed or displaced by list operations.
/// `pawn_count` always equals the number of pawns in `other_pieces`.
#[derive(Clone, Debug)]
pub struct PieceRegister {
    king: PieceRecord,
    other_pieces: Vec<PieceRecord>,
    pawn_count: u8,
}

impl PieceRegister {
    /// Starts a register holding only `king`. The caller guarantees it is a king.
    pub fn new(king: PieceRecord) -> Self {
        debug_assert!(king.is_king());
        PieceRegister {
            king,
            other_pieces: Vec::new(),
            pawn_count: 0,
        }
    }

    pub fn color(&self) -> Color {
        self.king.color()
    }

    pub fn king(&self) -> &PieceRecord {
        &self.king
    }

    pub fn pawn_count(&self) -> u8 {
        self.pawn_count
    }

    /// Number of pieces, king included.
    pub fn piece_count(&self) -> usize {
        1 + self.other_pieces.len()
    }

    /// The king first, then the other pieces in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PieceRecord> {
        std::iter::once(&self.king).chain(self.other_pieces.iter())
    }

    pub fn view_piece_at_location(&self, x: BoardLocation) -> Option<&PieceRecord> {
        self.iter().find(|piece| piece.location() == x)
    }

    /// Mutable access to whichever piece of this side stands on `x`, king included.
    pub(crate) fn edit_piece_at_location(&mut self, x: BoardLocation) -> Result<&mut PieceRecord, ChessErrors> {
        if self.king.location() == x {
            return Ok(&mut self.king);
        }
        self.other_pieces
            .iter_mut()
            .find(|piece| piece.location() == x)
            .ok_or(ChessErrors::TryToViewOrEditEmptySquare(x))
    }

    /// Removes and returns the non-king piece on `x`.
    ///
    /// # Errors
    ///
    /// - `CannotRemoveKings` if this side's king stands on `x`.
    /// - `CannotRemoveFromEmptyLocation` if no piece of this side stands on `x`.
    pub fn remove_piece_at_location(&mut self, x: BoardLocation) -> Result<PieceRecord, ChessErrors> {
        if self.king.location() == x {
            return Err(ChessErrors::CannotRemoveKings(x));
        }
        let index = self
            .other_pieces
            .iter()
            .position(|piece| piece.location() == x)
            .ok_or(ChessErrors::CannotRemoveFromEmptyLocation(x))?;
        let removed = self.other_pieces.remove(index);
        if removed.is_pawn() {
            self.pawn_count -= 1;
        }
        Ok(removed)
    }

    /// Appends a non-king piece without checking occupancy or the pawn cap;
    /// the board performs those checks before calling this.
    pub(crate) fn add_piece_record_no_rule_checking(&mut self, x: PieceRecord) {
        debug_assert!(!x.is_king());
        debug_assert_eq!(x.color(), self.color());
        if x.is_pawn() {
            self.pawn_count += 1;
        }
        self.other_pieces.push(x);
    }
}
