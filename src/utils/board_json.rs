//! Board JSON boundary used by the request layer.
//!
//! A document carries the squares as `{x, y, figure, belongs_to}` records,
//! where `y = 0` is Black's back rank (rank 8) and `x = 0` is the a-file,
//! plus the turn, castling rights, en-passant target and clocks. Squares
//! missing from the list are empty. Coordinates are accepted as JSON
//! numbers or numeric strings and always written as numbers.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::is_unmoved;
use crate::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind};
use crate::game_state::game_state::GameState;
use crate::game_state::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Figure {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    Empty,
}

impl Figure {
    fn kind(self) -> Option<PieceKind> {
        match self {
            Figure::Pawn => Some(PieceKind::Pawn),
            Figure::Knight => Some(PieceKind::Knight),
            Figure::Bishop => Some(PieceKind::Bishop),
            Figure::Rook => Some(PieceKind::Rook),
            Figure::Queen => Some(PieceKind::Queen),
            Figure::King => Some(PieceKind::King),
            Figure::Empty => None,
        }
    }

    fn from_kind(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Pawn => Figure::Pawn,
            PieceKind::Knight => Figure::Knight,
            PieceKind::Bishop => Figure::Bishop,
            PieceKind::Rook => Figure::Rook,
            PieceKind::Queen => Figure::Queen,
            PieceKind::King => Figure::King,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Owner {
    White,
    Black,
    Neither,
}

#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareJson {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub x: i16,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub y: i16,
    pub figure: Figure,
    pub belongs_to: Owner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDocument {
    pub board: Vec<SquareJson>,
    pub side_to_move: Color,
    #[serde(default = "no_castling_field")]
    pub castling_rights: String,
    #[serde(default)]
    pub en_passant: Option<Position>,
    #[serde(default)]
    pub halfmove_clock: u32,
    #[serde(default = "first_move")]
    pub fullmove_number: u32,
}

fn no_castling_field() -> String {
    "-".to_owned()
}

fn first_move() -> u32 {
    1
}

/// Maps board-JSON coordinates onto a square.
pub fn square_from_xy(x: i16, y: i16) -> ChessResult<Position> {
    if !(0..8).contains(&x) || !(0..8).contains(&y) {
        return Err(ChessError::OutOfBounds { file: x, rank: y });
    }
    Position::new(x, 7 - y)
}

#[inline]
pub fn xy_from_square(square: Position) -> (i16, i16) {
    (i16::from(square.file()), 7 - i16::from(square.rank()))
}

pub fn parse_board_json(json: &str) -> ChessResult<GameState> {
    let document: BoardDocument = serde_json::from_str(json)?;
    game_state_from_document(&document)
}

pub fn game_state_from_document(document: &BoardDocument) -> ChessResult<GameState> {
    let castling_rights = CastlingRights::from_fen_field(&document.castling_rights).ok_or_else(|| {
        ChessError::InvalidGameState(format!(
            "invalid castling rights field: {}",
            document.castling_rights
        ))
    })?;

    let board = board_from_squares(&document.board, castling_rights)?;

    GameState::from_parts(
        board,
        document.side_to_move,
        castling_rights,
        document.en_passant,
        document.halfmove_clock,
        document.fullmove_number,
    )
}

fn board_from_squares(squares: &[SquareJson], rights: CastlingRights) -> ChessResult<Board> {
    let mut board = Board::empty();
    let mut seen = [false; 64];

    for record in squares {
        let square = square_from_xy(record.x, record.y)?;
        if std::mem::replace(&mut seen[square.index()], true) {
            return Err(ChessError::InvalidGameState(format!(
                "square {square} is described more than once"
            )));
        }

        let piece = match (record.figure.kind(), record.belongs_to) {
            (None, Owner::Neither) => None,
            (Some(kind), Owner::White) => Some(Piece::new(kind, Color::White)),
            (Some(kind), Owner::Black) => Some(Piece::new(kind, Color::Black)),
            (figure, owner) => {
                return Err(ChessError::InvalidGameState(format!(
                    "square {square} has figure {figure:?} owned by {owner:?}"
                )));
            }
        };

        let piece = piece.map(|piece| {
            if is_unmoved(piece, square, rights) {
                piece
            } else {
                piece.moved()
            }
        });
        board.set(square, piece);
    }

    Ok(board)
}

pub fn document_from_game_state(game_state: &GameState) -> BoardDocument {
    let board = game_state.board();
    let mut squares = Vec::with_capacity(64);

    for y in 0..8i16 {
        for x in 0..8i16 {
            let square = Position::new_unchecked(x as u8, (7 - y) as u8);
            let (figure, belongs_to) = match board.piece_at(square) {
                Some(piece) => (
                    Figure::from_kind(piece.kind),
                    match piece.color {
                        Color::White => Owner::White,
                        Color::Black => Owner::Black,
                    },
                ),
                None => (Figure::Empty, Owner::Neither),
            };
            squares.push(SquareJson {
                x,
                y,
                figure,
                belongs_to,
            });
        }
    }

    BoardDocument {
        board: squares,
        side_to_move: game_state.side_to_move(),
        castling_rights: game_state.castling_rights().to_fen_field(),
        en_passant: game_state.en_passant_target(),
        halfmove_clock: game_state.halfmove_clock(),
        fullmove_number: game_state.fullmove_number(),
    }
}

pub fn generate_board_json(game_state: &GameState) -> ChessResult<String> {
    Ok(serde_json::to_string(&document_from_game_state(game_state))?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sq(name: &str) -> Position {
        name.parse().expect("test square should parse")
    }

    fn kings_document() -> serde_json::Value {
        json!({
            "board": [
                { "x": 4, "y": 7, "figure": "KING", "belongs_to": "WHITE" },
                { "x": 4, "y": 0, "figure": "KING", "belongs_to": "BLACK" },
                { "x": 0, "y": 6, "figure": "PAWN", "belongs_to": "WHITE" },
                { "x": 3, "y": 3, "figure": "EMPTY", "belongs_to": "NEITHER" }
            ],
            "side_to_move": "WHITE"
        })
    }

    #[test]
    fn y_zero_is_blacks_back_rank() {
        assert_eq!(square_from_xy(0, 0).expect("a8 is on the board"), sq("a8"));
        assert_eq!(square_from_xy(7, 7).expect("h1 is on the board"), sq("h1"));
        assert_eq!(xy_from_square(sq("e2")), (4, 6));
    }

    #[test]
    fn decodes_sparse_document_with_defaults() {
        let game = parse_board_json(&kings_document().to_string()).expect("document should decode");

        assert_eq!(game.board().piece_at(sq("e1")).map(|p| p.kind), Some(PieceKind::King));
        assert_eq!(game.board().piece_at(sq("e8")).map(|p| p.color), Some(Color::Black));
        let pawn = game.board().piece_at(sq("a2")).expect("a2 holds a pawn");
        assert!(!pawn.has_moved);
        assert!(game.board().is_empty_at(sq("d5")));
        assert_eq!(game.castling_rights(), CastlingRights::empty());
        assert_eq!(game.en_passant_target(), None);
        assert_eq!(game.fullmove_number(), 1);
    }

    #[test]
    fn accepts_numeric_string_coordinates() {
        let document = json!({
            "board": [
                { "x": "4", "y": "7", "figure": "KING", "belongs_to": "WHITE" },
                { "x": "4", "y": "0", "figure": "KING", "belongs_to": "BLACK" },
                { "x": 3, "y": "1", "figure": "PAWN", "belongs_to": "BLACK" }
            ],
            "side_to_move": "WHITE"
        });
        let game = parse_board_json(&document.to_string()).expect("string coordinates should decode");

        assert_eq!(game.board().piece_at(sq("e1")).map(|p| p.kind), Some(PieceKind::King));
        assert_eq!(game.board().piece_at(sq("e8")).map(|p| p.color), Some(Color::Black));
        assert_eq!(game.board().piece_at(sq("d7")).map(|p| p.kind), Some(PieceKind::Pawn));

        let encoded = serde_json::to_value(document_from_game_state(&game)).expect("document should serialize");
        assert_eq!(encoded["board"][0]["x"], json!(0));
    }

    #[test]
    fn bad_string_coordinates_are_still_rejected() {
        let mut not_a_number = kings_document();
        not_a_number["board"][2]["x"] = json!("a");
        assert!(matches!(
            parse_board_json(&not_a_number.to_string()),
            Err(ChessError::InvalidJson(_))
        ));

        let mut off_board = kings_document();
        off_board["board"][2]["y"] = json!("9");
        assert!(matches!(
            parse_board_json(&off_board.to_string()),
            Err(ChessError::OutOfBounds { file: 0, rank: 9 })
        ));
    }

    #[test]
    fn encodes_all_squares_and_round_trips() {
        let game = GameState::new_game();
        let document = document_from_game_state(&game);
        assert_eq!(document.board.len(), 64);
        assert_eq!(
            document.board[0],
            SquareJson {
                x: 0,
                y: 0,
                figure: Figure::Rook,
                belongs_to: Owner::Black,
            }
        );
        assert_eq!(document.castling_rights, "KQkq");

        let json = generate_board_json(&game).expect("encoding should succeed");
        let decoded = parse_board_json(&json).expect("encoded document should decode");
        assert_eq!(decoded, game);
    }

    #[test]
    fn out_of_range_coordinates_are_out_of_bounds() {
        let mut document = kings_document();
        document["board"][2]["y"] = json!(8);
        assert!(matches!(
            parse_board_json(&document.to_string()),
            Err(ChessError::OutOfBounds { file: 0, rank: 8 })
        ));
    }

    #[test]
    fn inconsistent_squares_are_rejected() {
        let mut duplicate = kings_document();
        duplicate["board"][3] = json!({ "x": 0, "y": 6, "figure": "EMPTY", "belongs_to": "NEITHER" });
        assert!(matches!(
            parse_board_json(&duplicate.to_string()),
            Err(ChessError::InvalidGameState(_))
        ));

        let mut ownerless = kings_document();
        ownerless["board"][2]["belongs_to"] = json!("NEITHER");
        assert!(matches!(
            parse_board_json(&ownerless.to_string()),
            Err(ChessError::InvalidGameState(_))
        ));
    }

    #[test]
    fn unknown_figures_and_bad_json_are_invalid_json() {
        let mut document = kings_document();
        document["board"][2]["figure"] = json!("ARCHBISHOP");
        assert!(matches!(
            parse_board_json(&document.to_string()),
            Err(ChessError::InvalidJson(_))
        ));
        assert!(matches!(parse_board_json("{"), Err(ChessError::InvalidJson(_))));
    }
}
