//! Full legal move generation pipeline.
//!
//! Generates pseudo-legal moves, plays each one on a scratch board and drops
//! those that leave the mover's king attacked. Pins are handled by that
//! simulation rather than by explicit pin-ray tables. Castling additionally
//! requires the king's start and transit squares to be safe.

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::castle_rook_target;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::{GameState, GameStatus};
use crate::move_generation::legal_move_apply::{apply_move_unchecked, simulate_on_board};
use crate::move_generation::legal_move_checks::{attacks_square, is_king_attacked, is_king_in_check};
use crate::move_generation::move_generator::{pseudo_legal_moves, GeneratedMove, MoveGenerator};
use crate::moves::chess_move::Move;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> ChessResult<Vec<GeneratedMove>> {
        legal_moves(game_state)
            .into_iter()
            .map(|mv| {
                Ok(GeneratedMove {
                    mv,
                    game_after_move: apply_move_unchecked(game_state, mv)?,
                })
            })
            .collect()
    }
}

/// Every legal move for the side to move.
pub fn legal_moves(game_state: &GameState) -> Vec<Move> {
    let side = game_state.side_to_move();
    let board = game_state.board();

    pseudo_legal_moves(game_state)
        .into_iter()
        .filter(|mv| leaves_king_safe(board, side, *mv))
        .collect()
}

fn leaves_king_safe(board: &Board, side: Color, mv: Move) -> bool {
    let enemy = side.opposite();

    // No castling out of or through check; the landing square is covered by
    // the generic test below.
    if let Some(castle_side) = mv.castle {
        if attacks_square(board, enemy, mv.from)
            || attacks_square(board, enemy, castle_rook_target(side, castle_side))
        {
            return false;
        }
    }

    let after = simulate_on_board(board, mv);
    !is_king_attacked(&after, side)
}

/// Checkmate, stalemate, or still in progress.
pub fn game_status(game_state: &GameState) -> GameStatus {
    if !legal_moves(game_state).is_empty() {
        return GameStatus::InProgress;
    }

    if is_king_in_check(game_state) {
        GameStatus::Checkmate {
            winner: game_state.side_to_move().opposite(),
        }
    } else {
        GameStatus::Stalemate
    }
}
