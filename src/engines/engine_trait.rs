//! Boundary with external move-selection engines.
//!
//! An engine receives a position together with its precomputed legal move
//! set and answers with one move. Engines are untrusted with respect to the
//! rules: `select_and_apply` re-checks the answer against `legal_moves`
//! before anything is played.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::moves::chess_move::Move;

/// Per-request selection parameters.
#[derive(Debug, Clone, Default)]
pub struct SelectionParams {
    /// Seed for engines that randomize; `None` lets the engine choose.
    pub seed: Option<u64>,
    /// Restricts the choice to these moves when set.
    pub candidate_moves: Option<Vec<Move>>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    /// `info string ...` diagnostics for the embedding service's log.
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        legal_moves: &[Move],
        params: &SelectionParams,
    ) -> Result<EngineOutput, String>;
}

/// Outcome of one engine turn.
#[derive(Debug, Clone)]
pub struct EngineTurn {
    pub played: Move,
    pub game_state: GameState,
    pub info_lines: Vec<String>,
}

/// Asks `engine` for a move and plays it.
///
/// Returns `Ok(None)` when the position has no legal moves. An engine that
/// errors or stays silent while moves exist yields `EngineFailure`; an
/// answer outside the legal set yields `IllegalMove`.
pub fn select_and_apply(
    engine: &mut dyn Engine,
    game_state: &GameState,
    params: &SelectionParams,
) -> ChessResult<Option<EngineTurn>> {
    let legal_moves = game_state.legal_moves();
    if legal_moves.is_empty() {
        return Ok(None);
    }

    let output = engine
        .choose_move(game_state, &legal_moves, params)
        .map_err(ChessError::EngineFailure)?;

    let played = output.best_move.ok_or_else(|| {
        ChessError::EngineFailure(format!("{} returned no move", engine.name()))
    })?;

    if !legal_moves.contains(&played) {
        return Err(ChessError::IllegalMove(played));
    }

    Ok(Some(EngineTurn {
        played,
        game_state: apply_move(game_state, played)?,
        info_lines: output.info_lines,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::position::Position;

    struct ScriptedEngine {
        answer: Option<Move>,
    }

    impl Engine for ScriptedEngine {
        fn name(&self) -> &str {
            "scripted"
        }

        fn choose_move(
            &mut self,
            _game_state: &GameState,
            _legal_moves: &[Move],
            _params: &SelectionParams,
        ) -> Result<EngineOutput, String> {
            Ok(EngineOutput {
                best_move: self.answer,
                info_lines: vec!["info string scripted".to_owned()],
            })
        }
    }

    fn mv(from: &str, to: &str) -> Move {
        let from: Position = from.parse().expect("test square should parse");
        let to: Position = to.parse().expect("test square should parse");
        Move::new(from, to)
    }

    #[test]
    fn legal_engine_answer_is_played() {
        let mut engine = ScriptedEngine {
            answer: Some(mv("d2", "d4")),
        };
        let turn = select_and_apply(&mut engine, &GameState::new_game(), &SelectionParams::default())
            .expect("selection should succeed")
            .expect("startpos has legal moves");

        assert_eq!(turn.played, mv("d2", "d4"));
        assert_eq!(turn.game_state.history().count(), 1);
        assert_eq!(turn.info_lines, vec!["info string scripted".to_owned()]);
    }

    #[test]
    fn untrusted_engine_answer_is_rejected() {
        let mut engine = ScriptedEngine {
            answer: Some(mv("e2", "e5")),
        };
        assert!(matches!(
            select_and_apply(&mut engine, &GameState::new_game(), &SelectionParams::default()),
            Err(ChessError::IllegalMove(_))
        ));
    }

    #[test]
    fn silent_engine_is_a_failure_and_finished_game_asks_nothing() {
        let mut engine = ScriptedEngine { answer: None };
        assert!(matches!(
            select_and_apply(&mut engine, &GameState::new_game(), &SelectionParams::default()),
            Err(ChessError::EngineFailure(_))
        ));

        let mate = GameState::from_fen("7k/6Q1/6K1/8/8/8/8/8 b - - 0 1").expect("test FEN should parse");
        assert!(select_and_apply(&mut engine, &mate, &SelectionParams::default())
            .expect("terminal position should not error")
            .is_none());
    }
}
