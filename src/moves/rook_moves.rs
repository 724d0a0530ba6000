use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;
use crate::moves::slider_rays::{generate_slider_moves, ray_attacks};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

#[inline]
pub fn rook_attacks(board: &Board, from: Position) -> Vec<Position> {
    ray_attacks(board, from, &ROOK_DIRECTIONS)
}

pub fn generate_rook_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Move>) {
    generate_slider_moves(board, from, color, &ROOK_DIRECTIONS, out);
}
