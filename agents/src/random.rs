// ═══════════════════════════════════════════════════════════════════════
// Stall Agent — spends every mobile point on interceptors at random
// unblocked edge cells. Builds nothing.
// Serves as baseline and for exercising the session end to end.
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::Agent;
use frontier_engine::map;
use frontier_engine::state::TurnState;
use frontier_engine::types::{MobileKind, Position, UnitKind};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub struct StallAgent {
    rng: ChaCha8Rng,
}

impl StallAgent {
    pub fn new(seed: u64) -> Self {
        StallAgent {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Agent for StallAgent {
    fn name(&self) -> &str { "Stall" }

    fn on_turn(&mut self, state: &mut TurnState<'_>) {
        let cells: Vec<Position> = map::friendly_edges()
            .into_iter()
            .filter(|&p| !state.board().is_occupied(p))
            .collect();
        let interceptor = UnitKind::from(MobileKind::Interceptor);
        if state.config().cost(interceptor).mobile <= 0.0 {
            tracing::warn!("interceptors are free under this config, not stalling");
            return;
        }
        let mut spawned = 0;
        // Several units may share a cell, so cells are drawn with replacement
        while state.pools().covers(state.config().cost(interceptor)) {
            let Some(&at) = cells.choose(&mut self.rng) else { break };
            if state.attempt_spawn(interceptor, &[at], 1) == 0 {
                break;
            }
            spawned += 1;
        }
        tracing::info!(turn = state.turn(), spawned, "stalling");
    }
}
