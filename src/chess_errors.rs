//! Errors used throughout the board engine.
//!
//! Only two situations produce an `Err`: building a `PieceRecord` off the
//! board, and constructing a `ChessBoard` from an invalid pair of kings. Routine
//! rule violations during play (occupied squares, pawn cap, king adjacency)
//! are reported as `false` by the board operations and never surface here.
//!
//! The register-level variants (`CannotRemoveKings` and friends) are returned
//! by `PieceRegister` so the board can tell *why* a lookup failed before it
//! folds the answer into a boolean.

use thiserror::Error;

use crate::board_location::BoardLocation;
use crate::game_state::chess_types::{Color, PieceKind};

/// Reasons a pair of kings cannot start a board.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupViolation {
    /// Both kings were placed on the same square.
    #[error("both kings stand on {0:?}")]
    SameSquare(BoardLocation),

    /// Both kings belong to the same side.
    #[error("both kings are {0:?}")]
    SameColor(Color),

    /// One of the two pieces is not a king.
    #[error("a {kind:?} on {location:?} was given where a king is required")]
    NotAKing {
        kind: PieceKind,
        location: BoardLocation,
    },

    /// The kings stand on neighbouring squares.
    #[error("kings on {0:?} and {1:?} are adjacent")]
    KingsTooClose(BoardLocation, BoardLocation),
}

/// Unified error type for the board engine.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChessErrors {
    /// The two kings handed to `ChessBoard::new` do not form a legal start.
    #[error("invalid board setup: {0}")]
    InvalidSetup(#[from] SetupViolation),

    /// A coordinate outside `1..=8` was supplied.
    ///
    /// Payload: the offending `(file, rank)`.
    #[error("location {0:?} is outside the board")]
    OutOfBounds(BoardLocation),

    /// Attempted to remove a piece from an empty square.
    #[error("no piece to remove on {0:?}")]
    CannotRemoveFromEmptyLocation(BoardLocation),

    /// Attempted to remove a king, which is never permitted.
    #[error("the king on {0:?} cannot be removed")]
    CannotRemoveKings(BoardLocation),

    /// Attempted to view or edit a square that holds no piece of this side.
    #[error("no piece to edit on {0:?}")]
    TryToViewOrEditEmptySquare(BoardLocation),
}
