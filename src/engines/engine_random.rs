//! Uniform random selection over the legal move set.
//!
//! Carries no playing strength; it exists to drive the selection boundary in
//! integration tests and diagnostics.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, SelectionParams};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

#[derive(Debug, Default)]
pub struct RandomEngine {
    seed: Option<u64>,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Plakychess Random"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        if name.eq_ignore_ascii_case("seed") {
            self.seed = Some(
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| format!("invalid seed value: {value}"))?,
            );
            Ok(())
        } else {
            Err(format!("unknown option: {name}"))
        }
    }

    fn choose_move(
        &mut self,
        _game_state: &GameState,
        legal_moves: &[Move],
        params: &SelectionParams,
    ) -> Result<EngineOutput, String> {
        let pool: Vec<Move> = match &params.candidate_moves {
            Some(candidates) => legal_moves
                .iter()
                .copied()
                .filter(|mv| candidates.contains(mv))
                .collect(),
            None => legal_moves.to_vec(),
        };

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {} candidates {}",
            legal_moves.len(),
            pool.len()
        ));

        let picked = match params.seed.or(self.seed) {
            Some(seed) => pool.choose(&mut StdRng::seed_from_u64(seed)),
            None => pool.choose(&mut rand::rng()),
        };

        out.best_move = picked.copied();
        Ok(out)
    }
}
