use crate::game_state::board::Board;
use crate::game_state::chess_rules::{castle_empty_squares, castle_king_target, king_home, rook_home};
use crate::game_state::chess_types::{CastleSide, CastlingRights, Color, PieceKind};
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

#[inline]
pub fn king_attacks(from: Position) -> impl Iterator<Item = Position> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |(d_file, d_rank)| from.offset(d_file, d_rank).ok())
}

/// Single steps plus castling candidates.
///
/// Castling is offered when the right is held, the king and rook stand on
/// their home squares and every square between them is empty. Whether the
/// king starts in, crosses, or lands on an attacked square is decided by
/// the legality filter, not here.
pub fn generate_king_moves(
    board: &Board,
    from: Position,
    color: Color,
    castling_rights: CastlingRights,
    out: &mut Vec<Move>,
) {
    out.extend(
        king_attacks(from)
            .filter(|to| board.is_enemy_or_empty(*to, color))
            .map(|to| Move::new(from, to)),
    );

    if from != king_home(color) {
        return;
    }

    for side in CastleSide::ALL {
        if !castling_rights.has(color, side) {
            continue;
        }

        let rook_in_place = board
            .piece_at(rook_home(color, side))
            .is_some_and(|piece| piece.kind == PieceKind::Rook && piece.color == color);
        let path_clear = castle_empty_squares(color, side)
            .iter()
            .all(|square| board.is_empty_at(*square));

        if rook_in_place && path_clear {
            out.push(Move::castling(from, castle_king_target(color, side), side));
        }
    }
}
