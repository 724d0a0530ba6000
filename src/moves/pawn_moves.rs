use crate::game_state::board::Board;
use crate::game_state::chess_rules::PROMOTION_KINDS;
use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

/// Diagonal squares a pawn strikes, occupied or not.
#[inline]
pub fn pawn_attacks(color: Color, from: Position) -> impl Iterator<Item = Position> {
    let d_rank = color.pawn_direction();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_file| from.offset(d_file, d_rank).ok())
}

/// Pushes, double pushes, captures and en-passant captures for one pawn.
///
/// Any move landing on the final rank is emitted once per promotion kind,
/// never without one.
pub fn generate_pawn_moves(
    board: &Board,
    from: Position,
    color: Color,
    en_passant_target: Option<Position>,
    out: &mut Vec<Move>,
) {
    let d_rank = color.pawn_direction();

    if let Ok(one_step) = from.offset(0, d_rank) {
        if board.is_empty_at(one_step) {
            push_pawn_move(from, one_step, color, out);

            if from.rank() == color.pawn_start_rank() {
                if let Ok(two_step) = one_step.offset(0, d_rank) {
                    if board.is_empty_at(two_step) {
                        out.push(Move::new(from, two_step));
                    }
                }
            }
        }
    }

    for to in pawn_attacks(color, from) {
        match board.piece_at(to) {
            Some(target) if target.color != color => push_pawn_move(from, to, color, out),
            Some(_) => {}
            None if en_passant_target == Some(to) => out.push(Move::en_passant(from, to)),
            None => {}
        }
    }
}

fn push_pawn_move(from: Position, to: Position, color: Color, out: &mut Vec<Move>) {
    if to.rank() == color.promotion_rank() {
        out.extend(
            PROMOTION_KINDS
                .into_iter()
                .map(|kind| Move::promoting(from, to, kind)),
        );
    } else {
        out.push(Move::new(from, to));
    }
}
