//! Attack detection.
//!
//! Everything here works in attack mode and never filters by king safety,
//! which keeps "is this move legal" and "is this square attacked" from
//! calling each other.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece};
use crate::game_state::game_state::GameState;
use crate::game_state::position::Position;
use crate::move_generation::move_generator::piece_attacks;

/// True when any piece of `attacker_color` strikes `target`, regardless of
/// whose turn it is.
pub fn attacks_square(board: &Board, attacker_color: Color, target: Position) -> bool {
    board
        .pieces_of(attacker_color)
        .any(|(from, piece)| piece_attacks(board, from, piece).contains(&target))
}

/// Every piece of `attacker_color` striking `target`.
pub fn attackers_to_square(
    board: &Board,
    attacker_color: Color,
    target: Position,
) -> Vec<(Position, Piece)> {
    board
        .pieces_of(attacker_color)
        .filter(|(from, piece)| piece_attacks(board, *from, *piece).contains(&target))
        .collect()
}

/// Whether the king of `color` is attacked on `board`. A board without that
/// king reports false.
#[inline]
pub fn is_king_attacked(board: &Board, color: Color) -> bool {
    board
        .king_position(color)
        .is_some_and(|king| attacks_square(board, color.opposite(), king))
}

#[inline]
pub fn is_king_in_check(game_state: &GameState) -> bool {
    is_king_attacked(game_state.board(), game_state.side_to_move())
}
