//! FEN-to-GameState parser.
//!
//! Decodes the six FEN fields, derives `has_moved` for every piece from its
//! square and the castling rights, and hands the result to
//! `GameState::from_parts` for position validation.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::is_unmoved;
use crate::game_state::chess_types::{CastlingRights, Color, Piece};
use crate::game_state::game_state::GameState;
use crate::game_state::position::Position;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let side_to_move = parse_side_to_move(side_part)?;
    let castling_rights = CastlingRights::from_fen_field(castling_part)
        .ok_or_else(|| invalid(format!("invalid castling rights field: {castling_part}")))?;
    let board = parse_board(board_part, castling_rights)?;
    let en_passant_target = parse_en_passant_square(en_passant_part)?;
    let halfmove_clock = halfmove_part
        .parse::<u32>()
        .map_err(|_| invalid(format!("invalid halfmove clock: {halfmove_part}")))?;
    let fullmove_number = fullmove_part
        .parse::<u32>()
        .map_err(|_| invalid(format!("invalid fullmove number: {fullmove_part}")))?;

    GameState::from_parts(
        board,
        side_to_move,
        castling_rights,
        en_passant_target,
        halfmove_clock,
        fullmove_number,
    )
}

fn invalid(message: impl Into<String>) -> ChessError {
    ChessError::InvalidFen(message.into())
}

fn parse_board(board_part: &str, rights: CastlingRights) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(invalid(format!("rank {} has too many files", rank + 1)));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}'")))?;
            if file >= 8 {
                return Err(invalid(format!("rank {} has too many files", rank + 1)));
            }

            let square = Position::new_unchecked(file, rank);
            let piece = if is_unmoved(piece, square, rights) {
                piece
            } else {
                piece.moved()
            };
            board.set(square, Some(piece));
            file += 1;
        }

        if file != 8 {
            return Err(invalid(format!("rank {} does not sum to 8 files", rank + 1)));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Position>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    en_passant_part
        .parse::<Position>()
        .map(Some)
        .map_err(|_| invalid(format!("invalid en-passant square: {en_passant_part}")))
}
