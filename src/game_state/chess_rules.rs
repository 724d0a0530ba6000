//! Canonical chess-rule constants.
//!
//! Home squares for kings and rooks, the castling geometry, the promotion
//! set, and the standard starting position in Forsyth-Edwards Notation.

use crate::game_state::chess_types::{CastleSide, CastlingRights, Color, Piece, PieceKind};
use crate::game_state::position::Position;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Pieces a pawn may promote to, strongest first.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Back-rank layout from the a-file to the h-file.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[inline]
pub const fn king_home(color: Color) -> Position {
    Position::new_unchecked(4, color.back_rank())
}

#[inline]
pub const fn rook_home(color: Color, side: CastleSide) -> Position {
    let file = match side {
        CastleSide::Kingside => 7,
        CastleSide::Queenside => 0,
    };
    Position::new_unchecked(file, color.back_rank())
}

/// Square the king lands on after castling.
#[inline]
pub const fn castle_king_target(color: Color, side: CastleSide) -> Position {
    let file = match side {
        CastleSide::Kingside => 6,
        CastleSide::Queenside => 2,
    };
    Position::new_unchecked(file, color.back_rank())
}

/// Square the rook lands on after castling; also the square the king crosses.
#[inline]
pub const fn castle_rook_target(color: Color, side: CastleSide) -> Position {
    let file = match side {
        CastleSide::Kingside => 5,
        CastleSide::Queenside => 3,
    };
    Position::new_unchecked(file, color.back_rank())
}

/// Squares strictly between king and rook that must be empty.
pub fn castle_empty_squares(color: Color, side: CastleSide) -> &'static [Position] {
    static WHITE_KINGSIDE: [Position; 2] = [Position::new_unchecked(5, 0), Position::new_unchecked(6, 0)];
    static WHITE_QUEENSIDE: [Position; 3] = [
        Position::new_unchecked(1, 0),
        Position::new_unchecked(2, 0),
        Position::new_unchecked(3, 0),
    ];
    static BLACK_KINGSIDE: [Position; 2] = [Position::new_unchecked(5, 7), Position::new_unchecked(6, 7)];
    static BLACK_QUEENSIDE: [Position; 3] = [
        Position::new_unchecked(1, 7),
        Position::new_unchecked(2, 7),
        Position::new_unchecked(3, 7),
    ];

    match (color, side) {
        (Color::White, CastleSide::Kingside) => &WHITE_KINGSIDE,
        (Color::White, CastleSide::Queenside) => &WHITE_QUEENSIDE,
        (Color::Black, CastleSide::Kingside) => &BLACK_KINGSIDE,
        (Color::Black, CastleSide::Queenside) => &BLACK_QUEENSIDE,
    }
}

/// Castling right tied to a rook home square, if any.
pub fn castling_right_for_rook_square(square: Position) -> Option<(Color, CastleSide)> {
    Color::ALL.into_iter().find_map(|color| {
        CastleSide::ALL
            .into_iter()
            .find(|side| rook_home(color, *side) == square)
            .map(|side| (color, side))
    })
}

/// Whether a decoded piece should be treated as never having moved.
///
/// Pawns count as unmoved on their start rank and other pieces on their
/// initial back-rank square. Kings and rooks additionally need a matching
/// castling right, since rights are the only record of their history.
pub fn is_unmoved(piece: Piece, square: Position, rights: CastlingRights) -> bool {
    match piece.kind {
        PieceKind::Pawn => square.rank() == piece.color.pawn_start_rank(),
        PieceKind::King => {
            square == king_home(piece.color)
                && rights.intersects(CastlingRights::for_color(piece.color))
        }
        PieceKind::Rook => CastleSide::ALL.into_iter().any(|side| {
            square == rook_home(piece.color, side) && rights.has(piece.color, side)
        }),
        kind => {
            square.rank() == piece.color.back_rank()
                && BACK_RANK_LAYOUT[square.file() as usize] == kind
        }
    }
}
