//! Board occupancy and the rules that guard it.
//!
//! `ChessBoard` owns one `PieceRegister` per side and is the only way to
//! place, remove or move pieces. After every public call the following hold:
//!
//! - each side has exactly one king, which can be moved but never removed;
//! - each side has at most `MAX_PAWNS_PER_SIDE` pawns;
//! - the kings are at least `MIN_KING_DISTANCE` apart (never adjacent);
//! - no two pieces share a square;
//! - every piece lies on the board.
//!
//! Construction with a bad pair of kings is the only hard failure and yields
//! `ChessErrors::InvalidSetup`. Every other rejected operation returns
//! `false` and leaves the board exactly as it was.
//!
//! Piece movement geometry is deliberately not enforced: any piece may be
//! moved to any square as long as the occupancy rules above survive.

use std::fmt;

use tracing::{debug, trace};

use crate::{
    board_location::{chebyshev_distance, is_on_board, BoardLocation},
    chess_errors::{ChessErrors, SetupViolation},
    game_state::{
        chess_rules::{MAX_PAWNS_PER_SIDE, MIN_KING_DISTANCE},
        chess_types::{Color, PieceKind},
    },
    move_generation::legal_move_checks::{is_king_in_check, king_attackers},
    piece_record::PieceRecord,
    piece_register::PieceRegister,
    utils::render_board::render_board,
};

/// An 8×8 board holding both sides' pieces.
///
/// The board has no interior mutability; mutation needs `&mut self`, so a
/// board shared across threads must be wrapped by the caller (for example in
/// a `Mutex`).
#[derive(Clone, Debug)]
pub struct ChessBoard {
    // [Color::index()]
    registers: [PieceRegister; 2],
}

fn refuse_setup(violation: SetupViolation) -> ChessErrors {
    debug!(%violation, "refusing board setup");
    ChessErrors::InvalidSetup(violation)
}

impl ChessBoard {
    /// Starts a board from the two kings, given in either order.
    ///
    /// # Errors
    ///
    /// `ChessErrors::InvalidSetup` when the kings share a square, share a
    /// color, either piece is not a king, or the kings are adjacent. The
    /// checks run in that order and the first failure is reported.
    pub fn new(king_a: PieceRecord, king_b: PieceRecord) -> Result<Self, ChessErrors> {
        if king_a.location() == king_b.location() {
            return Err(refuse_setup(SetupViolation::SameSquare(king_a.location())));
        }
        if king_a.color() == king_b.color() {
            return Err(refuse_setup(SetupViolation::SameColor(king_a.color())));
        }
        for piece in [&king_a, &king_b] {
            if !piece.is_king() {
                return Err(refuse_setup(SetupViolation::NotAKing {
                    kind: piece.kind(),
                    location: piece.location(),
                }));
            }
        }
        if chebyshev_distance(&king_a.location(), &king_b.location()) < MIN_KING_DISTANCE {
            return Err(refuse_setup(SetupViolation::KingsTooClose(
                king_a.location(),
                king_b.location(),
            )));
        }

        let (light_king, dark_king) = match king_a.color() {
            Color::Light => (king_a, king_b),
            Color::Dark => (king_b, king_a),
        };
        trace!(light = ?light_king.location(), dark = ?dark_king.location(), "board created");
        Ok(ChessBoard {
            registers: [PieceRegister::new(light_king), PieceRegister::new(dark_king)],
        })
    }

    fn register(&self, color: Color) -> &PieceRegister {
        &self.registers[color.index()]
    }

    fn register_mut(&mut self, color: Color) -> &mut PieceRegister {
        &mut self.registers[color.index()]
    }

    pub fn king(&self, color: Color) -> &PieceRecord {
        self.register(color).king()
    }

    /// All pieces of `color`, king first.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &PieceRecord> {
        self.register(color).iter()
    }

    pub fn pawn_count(&self, color: Color) -> u8 {
        self.register(color).pawn_count()
    }

    /// Pieces of both sides, kings included.
    pub fn piece_count(&self) -> usize {
        self.registers.iter().map(PieceRegister::piece_count).sum()
    }

    pub fn piece_at(&self, x: i8, y: i8) -> Option<&PieceRecord> {
        self.view_piece_at_location((x, y))
    }

    pub fn is_occupied(&self, location: BoardLocation) -> bool {
        self.view_piece_at_location(location).is_some()
    }

    fn view_piece_at_location(&self, location: BoardLocation) -> Option<&PieceRecord> {
        self.registers
            .iter()
            .find_map(|register| register.view_piece_at_location(location))
    }

    /// Removes the non-king piece on `(x, y)`. Returns whether anything was removed.
    pub fn clear_square(&mut self, x: i8, y: i8) -> bool {
        self.take_piece(x, y).is_some()
    }

    /// Removes and returns the non-king piece on `(x, y)`.
    ///
    /// Returns `None` for an empty or off-board square and for a square
    /// holding a king.
    pub fn take_piece(&mut self, x: i8, y: i8) -> Option<PieceRecord> {
        let location = (x, y);
        for register in self.registers.iter_mut() {
            match register.remove_piece_at_location(location) {
                Ok(removed) => {
                    trace!(?location, kind = ?removed.kind(), color = ?removed.color(), "square cleared");
                    return Some(removed);
                }
                Err(ChessErrors::CannotRemoveKings(_)) => {
                    debug!(?location, "clear rejected: a king stands there");
                    return None;
                }
                Err(_) => continue,
            }
        }
        debug!(?location, "clear rejected: square is empty");
        None
    }

    /// Places a new non-king piece. Returns whether it was placed.
    ///
    /// Rejected when the piece is a king, when its square is occupied by
    /// either side, or when it is a pawn and its side already has
    /// `MAX_PAWNS_PER_SIDE` pawns.
    pub fn add_piece(&mut self, piece: PieceRecord) -> bool {
        let location = piece.location();
        if piece.is_king() {
            debug!(?location, color = ?piece.color(), "add rejected: kings cannot be added");
            return false;
        }
        if self.is_occupied(location) {
            debug!(?location, "add rejected: square is occupied");
            return false;
        }
        let register = self.register_mut(piece.color());
        if piece.is_pawn() && register.pawn_count() >= MAX_PAWNS_PER_SIDE {
            debug!(?location, color = ?piece.color(), "add rejected: pawn limit reached");
            return false;
        }
        register.add_piece_record_no_rule_checking(piece);
        trace!(?location, kind = ?piece.kind(), color = ?piece.color(), "piece added");
        true
    }

    /// Moves the piece on `(x0, y0)` to `(x1, y1)`, capturing an enemy
    /// non-king piece standing there. Returns whether the move happened.
    ///
    /// Rejected when a coordinate is off the board, the start square is
    /// empty, a king would end next to the enemy king, the destination holds
    /// a piece of the mover's side (including the mover itself), or the
    /// destination holds a king.
    pub fn move_piece(&mut self, x0: i8, y0: i8, x1: i8, y1: i8) -> bool {
        let from = (x0, y0);
        let to = (x1, y1);
        if !is_on_board(&from) || !is_on_board(&to) {
            debug!(?from, ?to, "move rejected: off the board");
            return false;
        }
        let Some(mover) = self.view_piece_at_location(from).copied() else {
            debug!(?from, "move rejected: no piece on start square");
            return false;
        };
        if mover.is_king() {
            let enemy_king = self.king(mover.color().opposite()).location();
            if chebyshev_distance(&to, &enemy_king) < MIN_KING_DISTANCE {
                debug!(?from, ?to, ?enemy_king, "move rejected: kings would touch");
                return false;
            }
        }
        if let Some(target) = self.view_piece_at_location(to).copied() {
            if target.color() == mover.color() {
                debug!(?from, ?to, "move rejected: destination holds a friendly piece");
                return false;
            }
            if target.is_king() {
                debug!(?from, ?to, "move rejected: kings cannot be captured");
                return false;
            }
            let Ok(captured) = self.register_mut(target.color()).remove_piece_at_location(to) else {
                return false;
            };
            trace!(?to, kind = ?captured.kind(), color = ?captured.color(), "piece captured");
        }
        match self.register_mut(mover.color()).edit_piece_at_location(from) {
            Ok(piece) => piece.relocate(to),
            Err(_) => return false,
        }
        trace!(?from, ?to, kind = ?mover.kind(), color = ?mover.color(), "piece moved");
        true
    }

    /// True when the `color` king stands on a square attacked by an enemy piece.
    pub fn is_king_attacked(&self, color: Color) -> bool {
        is_king_in_check(self, color)
    }

    /// Enemy pieces attacking the `color` king; empty exactly when
    /// `is_king_attacked(color)` is false.
    pub fn king_attackers(&self, color: Color) -> Vec<PieceRecord> {
        king_attackers(self, color)
    }

    /// Number of `kind` pieces of `color` currently on the board.
    pub fn count_of(&self, color: Color, kind: PieceKind) -> usize {
        self.pieces(color).filter(|piece| piece.kind() == kind).count()
    }
}

impl fmt::Display for ChessBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
