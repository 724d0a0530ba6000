//! Move records.
//!
//! A `Move` is a request or a history entry, never board state. Special moves
//! are flagged explicitly so the applier does not need to re-derive them.

use std::fmt;

use serde::{Deserialize, Serialize};

pub use crate::game_state::chess_types::CastleSide;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    #[serde(default)]
    pub promotion: Option<PieceKind>,
    #[serde(default)]
    pub is_en_passant: bool,
    #[serde(default)]
    pub castle: Option<CastleSide>,
}

impl Move {
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            promotion: None,
            is_en_passant: false,
            castle: None,
        }
    }

    #[inline]
    pub const fn promoting(from: Position, to: Position, promotion: PieceKind) -> Self {
        Self {
            promotion: Some(promotion),
            ..Self::new(from, to)
        }
    }

    #[inline]
    pub const fn en_passant(from: Position, to: Position) -> Self {
        Self {
            is_en_passant: true,
            ..Self::new(from, to)
        }
    }

    #[inline]
    pub const fn castling(from: Position, to: Position, side: CastleSide) -> Self {
        Self {
            castle: Some(side),
            ..Self::new(from, to)
        }
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        self.castle.is_some()
    }
}

/// Long algebraic coordinates, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.fen_char())?;
        }
        Ok(())
    }
}
