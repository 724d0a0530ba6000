//! Long algebraic coordinate notation (`e2e4`, `e7e8q`).
//!
//! Text requests are resolved against the legal move set, so the returned
//! `Move` carries the en-passant and castling flags the applier expects.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

/// Splits coordinate text into squares and an optional promotion piece
/// without consulting any position.
pub fn parse_long_algebraic(text: &str) -> ChessResult<(Position, Position, Option<PieceKind>)> {
    let text = text.trim();
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(ChessError::InvalidNotation(text.to_owned()));
    }

    let from: Position = text[0..2].parse()?;
    let to: Position = text[2..4].parse()?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => match PieceKind::from_fen_char(ch) {
            Some(kind) if kind.is_promotion_target() && ch.is_ascii_lowercase() => Some(kind),
            _ => return Err(ChessError::InvalidNotation(text.to_owned())),
        },
    };

    Ok((from, to, promotion))
}

/// Resolves coordinate text to the matching legal move.
///
/// Returns `PromotionRequired` when a promoting pawn move omits the piece and
/// `IllegalMove` when no legal move matches.
pub fn long_algebraic_to_move(text: &str, game_state: &GameState) -> ChessResult<Move> {
    let (from, to, promotion) = parse_long_algebraic(text)?;
    let legal = game_state.legal_moves();

    if let Some(mv) = legal
        .iter()
        .find(|mv| mv.from == from && mv.to == to && mv.promotion == promotion)
    {
        return Ok(*mv);
    }

    let requested = match promotion {
        Some(kind) => Move::promoting(from, to, kind),
        None => Move::new(from, to),
    };
    if promotion.is_none() && legal.iter().any(|mv| mv.from == from && mv.to == to) {
        return Err(ChessError::PromotionRequired(requested));
    }
    Err(ChessError::IllegalMove(requested))
}

#[inline]
pub fn move_to_long_algebraic(mv: Move) -> String {
    mv.to_string()
}
