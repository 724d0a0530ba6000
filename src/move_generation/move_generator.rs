//! Per-kind move generation dispatch.
//!
//! Piece kinds form a closed enum, so both the pseudo-legal generator and the
//! attack-mode generator are a single exhaustive `match` rather than a table
//! of trait objects.

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind};
use crate::game_state::game_state::GameState;
use crate::game_state::position::Position;
use crate::moves::bishop_moves::{bishop_attacks, generate_bishop_moves};
use crate::moves::chess_move::Move;
use crate::moves::king_moves::{generate_king_moves, king_attacks};
use crate::moves::knight_moves::{generate_knight_moves, knight_attacks};
use crate::moves::pawn_moves::{generate_pawn_moves, pawn_attacks};
use crate::moves::queen_moves::{generate_queen_moves, queen_attacks};
use crate::moves::rook_moves::{generate_rook_moves, rook_attacks};

/// Game-level facts a generator needs beyond the board itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveContext {
    pub en_passant_target: Option<Position>,
    pub castling_rights: CastlingRights,
}

impl MoveContext {
    pub fn from_state(game_state: &GameState) -> Self {
        Self {
            en_passant_target: game_state.en_passant_target(),
            castling_rights: game_state.castling_rights(),
        }
    }
}

/// Pseudo-legal moves for the piece of `color` standing on `from`.
///
/// Returns an empty list when `from` is empty or holds the other color.
pub fn pseudo_legal_targets(
    from: Position,
    board: &Board,
    color: Color,
    context: &MoveContext,
) -> Vec<Move> {
    let mut out = Vec::with_capacity(28);
    if let Some(piece) = board.piece_at(from).filter(|piece| piece.color == color) {
        push_pseudo_legal_moves(board, from, piece, context, &mut out);
    }
    out
}

fn push_pseudo_legal_moves(
    board: &Board,
    from: Position,
    piece: Piece,
    context: &MoveContext,
    out: &mut Vec<Move>,
) {
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, color, context.en_passant_target, out),
        PieceKind::Knight => generate_knight_moves(board, from, color, out),
        PieceKind::Bishop => generate_bishop_moves(board, from, color, out),
        PieceKind::Rook => generate_rook_moves(board, from, color, out),
        PieceKind::Queen => generate_queen_moves(board, from, color, out),
        PieceKind::King => generate_king_moves(board, from, color, context.castling_rights, out),
    }
}

/// Pseudo-legal moves for every piece of the side to move.
pub fn pseudo_legal_moves(game_state: &GameState) -> Vec<Move> {
    let board = game_state.board();
    let context = MoveContext::from_state(game_state);
    let mut out = Vec::with_capacity(64);

    for (from, piece) in board.pieces_of(game_state.side_to_move()) {
        push_pseudo_legal_moves(board, from, piece, &context, &mut out);
    }

    out
}

/// Attack-mode generation: the squares `piece` strikes from `from`.
///
/// Pawns strike both forward diagonals even when empty, kings never castle,
/// and nothing here consults king safety.
pub fn piece_attacks(board: &Board, from: Position, piece: Piece) -> Vec<Position> {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, from).collect(),
        PieceKind::Knight => knight_attacks(from).collect(),
        PieceKind::Bishop => bishop_attacks(board, from),
        PieceKind::Rook => rook_attacks(board, from),
        PieceKind::Queen => queen_attacks(board, from),
        PieceKind::King => king_attacks(from).collect(),
    }
}

/// A legal move bundled with the position it produces.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub mv: Move,
    pub game_after_move: GameState,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> ChessResult<Vec<GeneratedMove>>;
}
