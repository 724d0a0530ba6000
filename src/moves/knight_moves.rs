use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

#[inline]
pub fn knight_attacks(from: Position) -> impl Iterator<Item = Position> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |(d_file, d_rank)| from.offset(d_file, d_rank).ok())
}

pub fn generate_knight_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Move>) {
    out.extend(
        knight_attacks(from)
            .filter(|to| board.is_enemy_or_empty(*to, color))
            .map(|to| Move::new(from, to)),
    );
}
