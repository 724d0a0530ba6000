//! Move application and take-back.
//!
//! `apply_move` is the only gate through which a game advances: it rejects
//! anything outside the legal move set and returns a fresh `GameState`.
//! `simulate_on_board` is the cheap board-only variant the legality filter
//! uses to test king safety.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{castle_rook_target, castling_right_for_rook_square, rook_home};
use crate::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind};
use crate::game_state::game_state::GameState;
use crate::game_state::position::Position;
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::chess_move::Move;

/// Plays a legal move.
///
/// Fails with `PromotionRequired` when `mv` only lacks its promotion piece,
/// and with `IllegalMove` for anything else outside `legal_moves`.
pub fn apply_move(game_state: &GameState, mv: Move) -> ChessResult<GameState> {
    let legal = legal_moves(game_state);

    if !legal.contains(&mv) {
        let lacks_promotion = mv.promotion.is_none()
            && legal
                .iter()
                .any(|candidate| candidate.from == mv.from && candidate.to == mv.to && candidate.promotion.is_some());
        return Err(if lacks_promotion {
            ChessError::PromotionRequired(mv)
        } else {
            ChessError::IllegalMove(mv)
        });
    }

    apply_move_unchecked(game_state, mv)
}

/// Plays a move without checking it against the legal move set.
///
/// Structural problems are still reported: a missing or foreign piece on
/// `mv.from`, a destination held by the mover, or a pawn reaching the final
/// rank without a promotion piece. King safety is not checked.
pub fn apply_move_unchecked(game_state: &GameState, mv: Move) -> ChessResult<GameState> {
    let moving_color = game_state.side_to_move;
    let piece = game_state
        .board
        .piece_at(mv.from)
        .filter(|piece| piece.color == moving_color)
        .ok_or(ChessError::IllegalMove(mv))?;

    game_state.board.ensure_not_own(mv.to, moving_color)?;

    match (piece.kind, mv.promotion) {
        (PieceKind::Pawn, None) if mv.to.rank() == moving_color.promotion_rank() => {
            return Err(ChessError::PromotionRequired(mv));
        }
        (PieceKind::Pawn, Some(kind)) if !kind.is_promotion_target() || mv.to.rank() != moving_color.promotion_rank() => {
            return Err(ChessError::IllegalMove(mv));
        }
        (kind, Some(_)) if kind != PieceKind::Pawn => return Err(ChessError::IllegalMove(mv)),
        _ => {}
    }

    let mut next = game_state.clone();
    let effects = move_pieces(&mut next.board, mv).ok_or(ChessError::IllegalMove(mv))?;

    revoke_castling_rights(&mut next.castling_rights, mv, effects.moved, effects.captured);

    next.en_passant_target = double_step_target(mv, effects.moved);

    if effects.moved.kind == PieceKind::Pawn || effects.captured.is_some() {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if moving_color == Color::Black {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.side_to_move = moving_color.opposite();

    next.history.push(UndoState {
        mv,
        moved_piece: effects.moved,
        captured: effects.captured,
        castled_rook: effects.castled_rook,
        prev_castling_rights: game_state.castling_rights,
        prev_en_passant_target: game_state.en_passant_target,
        prev_halfmove_clock: game_state.halfmove_clock,
        prev_fullmove_number: game_state.fullmove_number,
    });

    Ok(next)
}

/// Takes back the last recorded move.
pub fn undo_move(game_state: &GameState) -> ChessResult<GameState> {
    let mut prev = game_state.clone();
    let record = prev
        .history
        .pop()
        .ok_or_else(|| ChessError::InvalidGameState("no move to undo".to_owned()))?;
    let mv = record.mv;
    let color = record.moved_piece.color;

    prev.board.set(mv.to, None);
    prev.board.set(mv.from, Some(record.moved_piece));
    if let Some((square, piece)) = record.captured {
        prev.board.set(square, Some(piece));
    }
    if let (Some(side), Some(rook)) = (mv.castle, record.castled_rook) {
        prev.board.set(castle_rook_target(color, side), None);
        prev.board.set(rook_home(color, side), Some(rook));
    }

    prev.side_to_move = color;
    prev.castling_rights = record.prev_castling_rights;
    prev.en_passant_target = record.prev_en_passant_target;
    prev.halfmove_clock = record.prev_halfmove_clock;
    prev.fullmove_number = record.prev_fullmove_number;

    Ok(prev)
}

/// Board after `mv`, with no bookkeeping. An empty `mv.from` leaves the
/// board unchanged.
pub fn simulate_on_board(board: &Board, mv: Move) -> Board {
    let mut next = board.clone();
    if move_pieces(&mut next, mv).is_none() {
        return board.clone();
    }
    next
}

struct MoveEffects {
    moved: Piece,
    captured: Option<(Position, Piece)>,
    castled_rook: Option<Piece>,
}

fn move_pieces(board: &mut Board, mv: Move) -> Option<MoveEffects> {
    let moved = board.take(mv.from)?;

    let captured = if mv.is_en_passant {
        // The captured pawn sits beside the destination, on the origin rank.
        let square = Position::new_unchecked(mv.to.file(), mv.from.rank());
        board.take(square).map(|piece| (square, piece))
    } else {
        board.piece_at(mv.to).map(|piece| (mv.to, piece))
    };

    let mut placed = moved.moved();
    if let Some(kind) = mv.promotion {
        placed.kind = kind;
    }
    board.set(mv.to, Some(placed));

    let castled_rook = mv.castle.and_then(|side| {
        let rook = board.take(rook_home(moved.color, side))?;
        board.set(castle_rook_target(moved.color, side), Some(rook.moved()));
        Some(rook)
    });

    Some(MoveEffects {
        moved,
        captured,
        castled_rook,
    })
}

fn revoke_castling_rights(
    rights: &mut CastlingRights,
    mv: Move,
    moved: Piece,
    captured: Option<(Position, Piece)>,
) {
    match moved.kind {
        PieceKind::King => rights.remove(CastlingRights::for_color(moved.color)),
        PieceKind::Rook => {
            if let Some((color, side)) = castling_right_for_rook_square(mv.from) {
                if color == moved.color {
                    rights.remove(CastlingRights::for_side(color, side));
                }
            }
        }
        _ => {}
    }

    // A rook captured on its home square takes its right with it.
    if let Some((square, _)) = captured {
        if let Some((color, side)) = castling_right_for_rook_square(square) {
            rights.remove(CastlingRights::for_side(color, side));
        }
    }
}

fn double_step_target(mv: Move, moved: Piece) -> Option<Position> {
    if moved.kind != PieceKind::Pawn || mv.from.rank().abs_diff(mv.to.rank()) != 2 {
        return None;
    }
    Some(Position::new_unchecked(
        mv.from.file(),
        (mv.from.rank() + mv.to.rank()) / 2,
    ))
}
