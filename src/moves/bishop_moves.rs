use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;
use crate::moves::slider_rays::{generate_slider_moves, ray_attacks};

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
pub fn bishop_attacks(board: &Board, from: Position) -> Vec<Position> {
    ray_attacks(board, from, &BISHOP_DIRECTIONS)
}

pub fn generate_bishop_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Move>) {
    generate_slider_moves(board, from, color, &BISHOP_DIRECTIONS, out);
}
