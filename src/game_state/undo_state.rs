use crate::game_state::chess_types::{CastlingRights, Piece};
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

/// One history record: the move plus everything needed to take it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    /// The piece as it stood on `mv.from`, before promotion or move flags.
    pub moved_piece: Piece,
    /// Captured piece and the square it was removed from (differs from
    /// `mv.to` for en passant).
    pub captured: Option<(Position, Piece)>,
    /// Rook as it stood on its home square before castling.
    pub castled_rook: Option<Piece>,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Option<Position>,
    pub prev_halfmove_clock: u32,
    pub prev_fullmove_number: u32,
}
