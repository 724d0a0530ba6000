//! Ray casting shared by the sliding pieces.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

/// Squares reached along each direction, up to and including the first
/// occupied square regardless of its color.
pub fn ray_attacks(board: &Board, from: Position, directions: &[(i8, i8)]) -> Vec<Position> {
    let mut attacks = Vec::with_capacity(14);

    for &(d_file, d_rank) in directions {
        let mut current = from;
        while let Ok(next) = current.offset(d_file, d_rank) {
            attacks.push(next);
            if !board.is_empty_at(next) {
                break;
            }
            current = next;
        }
    }

    attacks
}

/// Quiet moves and captures along `directions` for a slider of `color`.
pub fn generate_slider_moves(
    board: &Board,
    from: Position,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for to in ray_attacks(board, from, directions) {
        if board.is_enemy_or_empty(to, color) {
            out.push(Move::new(from, to));
        }
    }
}
