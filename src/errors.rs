//! Errors used throughout the rules core.
//!
//! `ChessError` is the single error type returned by board access, move
//! application, position decoding and the selection-engine boundary. Every
//! variant is recoverable: an invalid request fails only the operation that
//! received it, and the caller decides whether to retry.

use thiserror::Error;

use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

pub type ChessResult<T> = Result<T, ChessError>;

/// Unified error type for the rules core.
#[derive(Debug, Error)]
pub enum ChessError {
    /// A coordinate outside `[0,7] x [0,7]` was supplied.
    #[error("coordinate (file {file}, rank {rank}) is outside the board")]
    OutOfBounds { file: i16, rank: i16 },

    /// A move targets a square held by the moving side. Surfacing this from
    /// the generators would be an internal invariant violation; it is only
    /// reported for moves submitted from outside.
    #[error("square {0} is occupied by a piece of the moving side")]
    OccupiedBySelf(Position),

    /// The requested move is not a member of the legal move set.
    #[error("illegal move {0}")]
    IllegalMove(Move),

    /// A decoded or constructed state violates a position invariant.
    #[error("invalid game state: {0}")]
    InvalidGameState(String),

    /// A pawn move lands on the final rank without naming a promotion piece.
    #[error("move {0} reaches the final rank without a promotion piece")]
    PromotionRequired(Move),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid move notation: {0}")]
    InvalidNotation(String),

    #[error("invalid board JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The external selection engine failed to produce a move.
    #[error("selection engine failure: {0}")]
    EngineFailure(String),
}
