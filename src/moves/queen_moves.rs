use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::chess_move::Move;
use crate::moves::rook_moves::ROOK_DIRECTIONS;
use crate::moves::slider_rays::{generate_slider_moves, ray_attacks};

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    ROOK_DIRECTIONS[0],
    ROOK_DIRECTIONS[1],
    ROOK_DIRECTIONS[2],
    ROOK_DIRECTIONS[3],
    BISHOP_DIRECTIONS[0],
    BISHOP_DIRECTIONS[1],
    BISHOP_DIRECTIONS[2],
    BISHOP_DIRECTIONS[3],
];

#[inline]
pub fn queen_attacks(board: &Board, from: Position) -> Vec<Position> {
    ray_attacks(board, from, &QUEEN_DIRECTIONS)
}

pub fn generate_queen_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Move>) {
    generate_slider_moves(board, from, color, &QUEEN_DIRECTIONS, out);
}
