// ═══════════════════════════════════════════════════════════════════════
// Adaptive Agent — reads the opponent's frontier every turn and shapes
// both defense and offense around the lanes it leaves open.
//
// Turn pipeline:
//   1. take last turn's triage records
//   2. scan the enemy frontier → GapState
//   3. assess the enemy's mobile threat
//   4. rebuild last turn's removals
//   5. triage own structures: queue removals, stage records
//   6. apply the rest of the defensive priority list
//   7. apply the deployment policy
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::Agent;
use crate::deploy::{apply_deployment, deployment};
use crate::layout::StrategyConfig;
use crate::planner::{defense_plan, rebuild_requests, BuildPlan, PlanReport};
use crate::scan::{scan_frontier, GapState};
use crate::threat::{assess, ThreatAssessment};
use crate::triage::{triage, RebuildQueue, TriageRecord};
use frontier_engine::frame::Frame;
use frontier_engine::state::TurnState;
use frontier_engine::types::{BreachEvent, Player, Position};
use serde::Serialize;

/// Summary of one decided turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TurnReport {
    pub turn: u32,
    pub gap: GapState,
    /// Structures queued for removal by triage.
    pub removed: u32,
    /// Records from last turn handed to the planner for rebuild.
    pub rebuilt: Vec<TriageRecord>,
    pub plan: PlanReport,
    /// Mobile units queued.
    pub spawned: u32,
    pub threat: ThreatAssessment,
}

pub struct AdaptiveAgent {
    strategy: StrategyConfig,
    rebuild: RebuildQueue,
    breaches: Vec<BreachEvent>,
    last_report: Option<TurnReport>,
}

impl AdaptiveAgent {
    pub fn new(strategy: StrategyConfig) -> Self {
        AdaptiveAgent {
            strategy,
            rebuild: RebuildQueue::new(),
            breaches: Vec::new(),
            last_report: None,
        }
    }

    pub fn strategy(&self) -> &StrategyConfig {
        &self.strategy
    }

    /// Records staged for rebuild on the next turn.
    pub fn pending_rebuild(&self) -> &[TriageRecord] {
        self.rebuild.pending()
    }

    /// Every breach the opponent scored so far, oldest first.
    pub fn breaches(&self) -> &[BreachEvent] {
        &self.breaches
    }

    pub fn last_report(&self) -> Option<&TurnReport> {
        self.last_report.as_ref()
    }

    pub fn record_breach(&mut self, breach: BreachEvent) {
        if breach.owner == Player::Enemy {
            tracing::debug!(at = %breach.location, turn = breach.turn, "scored on");
            self.breaches.push(breach);
        }
    }
}

impl Default for AdaptiveAgent {
    fn default() -> Self {
        AdaptiveAgent::new(StrategyConfig::default())
    }
}

impl Agent for AdaptiveAgent {
    fn name(&self) -> &str { "Adaptive" }

    fn on_turn(&mut self, state: &mut TurnState<'_>) {
        let turn = state.turn();
        let layout = &self.strategy.layout;
        let params = &self.strategy.params;

        let rebuild = self.rebuild.take();
        let gap = scan_frontier(state.board()).gap_state();
        let threat = assess(state.board(), &state.enemy());

        let mut plan = BuildPlan::from(rebuild_requests(&rebuild)).apply(state);

        let records = triage(state.board().structures(), state.config(), params.triage_threshold);
        let doomed: Vec<Position> = records.iter().map(|r| r.position).collect();
        let removed = state.attempt_remove(&doomed);

        let rest = defense_plan(layout, params, gap, turn, &[], &self.breaches).apply(state);
        plan.outcomes.extend(rest.outcomes);
        let spawned = apply_deployment(&deployment(layout, params, gap, turn), state);
        self.rebuild.stage(records);

        tracing::info!(
            turn,
            gap = %gap,
            removed,
            rebuilt = rebuild.len(),
            built = plan.total(),
            spawned,
            reserve = threat.interceptor_reserve,
            sp_left = state.pools().structure,
            mp_left = state.pools().mobile,
            "turn decided"
        );
        self.last_report = Some(TurnReport { turn, gap, removed, rebuilt: rebuild, plan, spawned, threat });
    }

    fn on_action_frame(&mut self, frame: &Frame) {
        match frame.breaches() {
            Ok(breaches) => {
                for breach in breaches {
                    self.record_breach(breach);
                }
            }
            Err(e) => tracing::warn!(turn = frame.turn, error = %e, "skipping malformed events"),
        }
    }
}
