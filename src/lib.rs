//! Crate root module declarations for the Plakychess rules core.
//!
//! Exposes the game state model, per-piece move generators, the legality
//! and application pipeline, the move-selection engine boundary, and the
//! FEN / board-JSON / notation helpers so services, tests, and benches can
//! import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod position;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod slider_rays;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod board_json;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}

pub use errors::{ChessError, ChessResult};
pub use game_state::board::Board;
pub use game_state::chess_types::{CastleSide, CastlingRights, Color, Piece, PieceKind};
pub use game_state::game_state::{GameState, GameStatus};
pub use game_state::position::Position;
pub use moves::chess_move::Move;
