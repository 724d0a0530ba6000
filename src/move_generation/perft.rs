//! Perft: exhaustive legal-move tree counts used to verify the rules layer
//! against published reference numbers.

use std::sync::Arc;
use std::thread;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{legal_moves, LegalMoveGenerator};
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Perft with the standard legal move generator.
pub fn perft_legal(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    perft(&LegalMoveGenerator, game_state, depth)
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for generated in generator.generate_legal_moves(game_state)? {
        perft_recurse(generator, game_state, &generated, depth, &mut total)?;
    }

    Ok(total)
}

/// Splits the root moves across threads. Each worker owns its own snapshot,
/// so nothing is shared mutably.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    game_state: &GameState,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(game_state)?;
    let mut handles = Vec::with_capacity(root_moves.len());

    for generated in root_moves {
        let generator_ref = Arc::clone(&generator);
        let parent = game_state.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = perft_recurse(generator_ref.as_ref(), &parent, &generated, depth, &mut local);
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let (result, local) = handle
            .join()
            .map_err(|_| ChessError::InvalidGameState("perft worker thread panicked".to_owned()))?;
        result?;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse(
    generator: &dyn MoveGenerator,
    parent: &GameState,
    generated: &GeneratedMove,
    depth_left: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    if depth_left == 1 {
        tally_leaf(parent, generated, counts);
        return Ok(());
    }

    let child_state = &generated.game_after_move;
    for child in generator.generate_legal_moves(child_state)? {
        perft_recurse(generator, child_state, &child, depth_left - 1, counts)?;
    }

    Ok(())
}

fn tally_leaf(parent: &GameState, generated: &GeneratedMove, counts: &mut PerftCounts) {
    let mv = generated.mv;
    counts.nodes += 1;

    if mv.is_en_passant || parent.board().piece_at(mv.to).is_some() {
        counts.captures += 1;
    }
    if mv.is_en_passant {
        counts.en_passant += 1;
    }
    if mv.is_castle() {
        counts.castles += 1;
    }
    if mv.promotion.is_some() {
        counts.promotions += 1;
    }

    let after = &generated.game_after_move;
    if is_king_in_check(after) {
        counts.checks += 1;
        if legal_moves(after).is_empty() {
            counts.checkmates += 1;
        }
    }
}
