//! Canonical rule constants.
//!
//! This module stores the static limits the board enforces: the coordinate
//! range, the per-side pawn cap, and how far apart the two kings must stay.

/// Lowest file or rank index.
pub const MIN_COORDINATE: i8 = 1;

/// Highest file or rank index.
pub const MAX_COORDINATE: i8 = 8;

/// Maximum number of pawns a single side may have on the board.
pub const MAX_PAWNS_PER_SIDE: u8 = 8;

/// Smallest Chebyshev distance allowed between the two kings.
pub const MIN_KING_DISTANCE: i8 = 2;
