//! Game-level state: the unit of truth passed between calls.
//!
//! `GameState` owns a board plus turn, castling, en-passant, clock and
//! history bookkeeping. Values are never mutated in place by the public API:
//! every transition returns a new `GameState`, so snapshots can be shared
//! freely between concurrent requests.

use serde::{Deserialize, Serialize};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{king_home, rook_home};
use crate::game_state::chess_types::{CastleSide, CastlingRights, Color, PieceKind};
use crate::game_state::position::Position;
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::{is_king_attacked, is_king_in_check};
use crate::move_generation::legal_move_generator::{game_status, legal_moves};
use crate::moves::chess_move::Move;
use crate::utils::board_json::{generate_board_json, parse_board_json};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Terminal classification of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Position>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) history: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard initial position, white to move.
    pub fn new_game() -> Self {
        Self {
            board: Board::starting_position(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    /// Builds a state from its parts, rejecting anything that violates a
    /// position invariant.
    pub fn from_parts(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Position>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> ChessResult<Self> {
        let game_state = Self {
            board,
            side_to_move,
            castling_rights,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
            history: Vec::new(),
        };
        game_state.validate()?;
        Ok(game_state)
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn from_board_json(json: &str) -> ChessResult<Self> {
        parse_board_json(json)
    }

    #[inline]
    pub fn to_board_json(&self) -> ChessResult<String> {
        generate_board_json(self)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Position> {
        self.en_passant_target
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Moves played since this state was created or decoded, oldest first.
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &Move> + '_ {
        self.history.iter().map(|record| &record.mv)
    }

    #[inline]
    pub fn undo_records(&self) -> &[UndoState] {
        &self.history
    }

    #[inline]
    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.board.king_position(color)
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        is_king_in_check(self)
    }

    #[inline]
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(self)
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        game_status(self)
    }

    /// Plays `mv`, failing with `IllegalMove` unless it is a legal move here.
    #[inline]
    pub fn apply(&self, mv: Move) -> ChessResult<GameState> {
        apply_move(self, mv)
    }

    /// Takes back the most recent move recorded in the history.
    #[inline]
    pub fn undo_last_move(&self) -> ChessResult<GameState> {
        undo_move(self)
    }

    fn validate(&self) -> ChessResult<()> {
        for color in Color::ALL {
            let kings = self.board.count(PieceKind::King, color);
            if kings != 1 {
                return Err(ChessError::InvalidGameState(format!(
                    "expected exactly one {color:?} king, found {kings}"
                )));
            }
        }

        if let Some((square, _)) = self
            .board
            .occupied_positions()
            .find(|(square, piece)| piece.kind == PieceKind::Pawn && (square.rank() == 0 || square.rank() == 7))
        {
            return Err(ChessError::InvalidGameState(format!(
                "pawn on back rank square {square}"
            )));
        }

        self.validate_castling_rights()?;
        self.validate_en_passant_target()?;

        if is_king_attacked(&self.board, self.side_to_move.opposite()) {
            return Err(ChessError::InvalidGameState(format!(
                "{:?} king is in check but it is {:?} to move",
                self.side_to_move.opposite(),
                self.side_to_move
            )));
        }

        Ok(())
    }

    fn validate_castling_rights(&self) -> ChessResult<()> {
        for color in Color::ALL {
            for side in CastleSide::ALL {
                if !self.castling_rights.has(color, side) {
                    continue;
                }

                let king_ok = self
                    .board
                    .piece_at(king_home(color))
                    .is_some_and(|piece| piece.kind == PieceKind::King && piece.color == color);
                let rook_ok = self
                    .board
                    .piece_at(rook_home(color, side))
                    .is_some_and(|piece| piece.kind == PieceKind::Rook && piece.color == color);

                if !king_ok || !rook_ok {
                    return Err(ChessError::InvalidGameState(format!(
                        "{color:?} {side:?} castling right without king and rook on their home squares"
                    )));
                }
            }
        }
        Ok(())
    }

    fn validate_en_passant_target(&self) -> ChessResult<()> {
        let Some(target) = self.en_passant_target else {
            return Ok(());
        };

        // The pawn that just double-stepped belongs to the side not to move.
        let pusher = self.side_to_move.opposite();
        let expected_rank = (pusher.pawn_start_rank() as i8 + pusher.pawn_direction()) as u8;
        let pawn_square = target.offset(0, pusher.pawn_direction()).ok();
        let pawn_ok = pawn_square
            .and_then(|square| self.board.piece_at(square))
            .is_some_and(|piece| piece.kind == PieceKind::Pawn && piece.color == pusher);
        let origin_empty = target
            .offset(0, -pusher.pawn_direction())
            .is_ok_and(|square| self.board.is_empty_at(square));

        if target.rank() != expected_rank || !self.board.is_empty_at(target) || !pawn_ok || !origin_empty {
            return Err(ChessError::InvalidGameState(format!(
                "en-passant target {target} does not follow a {pusher:?} pawn double step"
            )));
        }
        Ok(())
    }
}
