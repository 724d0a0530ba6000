//! Mailbox board: one optional piece per square.
//!
//! The board knows nothing about turn order or special moves. It answers
//! "what stands here" and hands out updated copies, so piece movement and
//! game bookkeeping can be tested independently of each other.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::position::Position;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self { cells: [None; 64] }
    }

    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for (file, kind) in BACK_RANK_LAYOUT.into_iter().enumerate() {
            let file = file as u8;
            for color in Color::ALL {
                board.set(
                    Position::new_unchecked(file, color.back_rank()),
                    Some(Piece::new(kind, color)),
                );
                board.set(
                    Position::new_unchecked(file, color.pawn_start_rank()),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.cells[position.index()]
    }

    /// Raw-coordinate lookup for callers holding unchecked integers.
    pub fn piece_at_coords(&self, file: i16, rank: i16) -> ChessResult<Option<Piece>> {
        Ok(self.piece_at(Position::new(file, rank)?))
    }

    /// Returns a copy of the board with `position` set to `piece`.
    #[must_use]
    pub fn with_piece(&self, position: Position, piece: Option<Piece>) -> Board {
        let mut next = self.clone();
        next.set(position, piece);
        next
    }

    #[inline]
    pub(crate) fn set(&mut self, position: Position, piece: Option<Piece>) {
        self.cells[position.index()] = piece;
    }

    #[inline]
    pub(crate) fn take(&mut self, position: Position) -> Option<Piece> {
        self.cells[position.index()].take()
    }

    #[inline]
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.piece_at(position).is_none()
    }

    /// True when a piece of `color` could land on `position`.
    #[inline]
    pub fn is_enemy_or_empty(&self, position: Position, color: Color) -> bool {
        self.piece_at(position).map_or(true, |piece| piece.color != color)
    }

    /// Fails with `OccupiedBySelf` when `position` holds a piece of `color`.
    pub fn ensure_not_own(&self, position: Position, color: Color) -> ChessResult<()> {
        match self.piece_at(position) {
            Some(piece) if piece.color == color => Err(ChessError::OccupiedBySelf(position)),
            _ => Ok(()),
        }
    }

    /// Occupied squares in index order (`a1` first).
    pub fn occupied_positions(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.map(|piece| (Position::from_index(index), piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.occupied_positions()
            .filter(move |(_, piece)| piece.color == color)
    }

    pub fn count(&self, kind: PieceKind, color: Color) -> usize {
        self.pieces_of(color)
            .filter(|(_, piece)| piece.kind == kind)
            .count()
    }

    /// First king of `color` in index order.
    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(position, _)| position)
    }
}
