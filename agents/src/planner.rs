// ═══════════════════════════════════════════════════════════════════════
// Budgeted planner — a strict priority list of structure work.
//
// The plan is applied front to back against the turn ledger. A request
// the budget cannot cover does nothing and the next one is still tried;
// there is no reordering to fit more work into the budget.
// ═══════════════════════════════════════════════════════════════════════

use crate::layout::{Layout, PolicyParams};
use crate::scan::GapState;
use crate::triage::TriageRecord;
use frontier_engine::state::TurnState;
use frontier_engine::types::{BreachEvent, Lane, Position, StructureKind};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BuildRequest {
    Build { kind: StructureKind, positions: Vec<Position> },
    Upgrade { positions: Vec<Position> },
    Remove { positions: Vec<Position> },
}

impl BuildRequest {
    pub fn build(kind: StructureKind, positions: &[Position]) -> Self {
        BuildRequest::Build { kind, positions: positions.to_vec() }
    }

    pub fn upgrade(positions: &[Position]) -> Self {
        BuildRequest::Upgrade { positions: positions.to_vec() }
    }

    pub fn remove(positions: &[Position]) -> Self {
        BuildRequest::Remove { positions: positions.to_vec() }
    }

    /// Try the request; returns how many of its positions went through.
    fn apply(&self, state: &mut TurnState<'_>) -> u32 {
        match self {
            BuildRequest::Build { kind, positions } => state.attempt_spawn(*kind, positions, 1),
            BuildRequest::Upgrade { positions } => state.attempt_upgrade(positions),
            BuildRequest::Remove { positions } => state.attempt_remove(positions),
        }
    }
}

/// What a plan achieved, one count per request in plan order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlanReport {
    pub outcomes: Vec<u32>,
}

impl PlanReport {
    pub fn total(&self) -> u32 {
        self.outcomes.iter().sum()
    }

    /// Requests that achieved at least one placement.
    pub fn fulfilled(&self) -> usize {
        self.outcomes.iter().filter(|&&n| n > 0).count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildPlan {
    requests: Vec<BuildRequest>,
}

impl BuildPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, request: BuildRequest) -> &mut Self {
        self.requests.push(request);
        self
    }

    pub fn requests(&self) -> &[BuildRequest] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn apply(&self, state: &mut TurnState<'_>) -> PlanReport {
        PlanReport {
            outcomes: self.requests.iter().map(|r| r.apply(state)).collect(),
        }
    }
}

impl From<Vec<BuildRequest>> for BuildPlan {
    fn from(requests: Vec<BuildRequest>) -> Self {
        BuildPlan { requests }
    }
}

// ── Ordering policy ────────────────────────────────────────────────────

/// Build-then-upgrade pairs restoring last turn's removed structures.
pub fn rebuild_requests(records: &[TriageRecord]) -> Vec<BuildRequest> {
    let mut requests = Vec::new();
    for r in records {
        requests.push(BuildRequest::build(r.kind, &[r.position]));
        if r.upgraded {
            requests.push(BuildRequest::upgrade(&[r.position]));
        }
    }
    requests
}

/// The defensive priority list for one turn.
pub fn defense_plan(
    layout: &Layout,
    params: &PolicyParams,
    gap: GapState,
    turn: u32,
    rebuild: &[TriageRecord],
    breaches: &[BreachEvent],
) -> BuildPlan {
    let mut plan = BuildPlan::new();

    // 1. Last turn's triage
    for request in rebuild_requests(rebuild) {
        plan.push(request);
    }

    // 2. Fixed core
    plan.push(BuildRequest::build(StructureKind::Wall, &layout.core_walls))
        .push(BuildRequest::build(StructureKind::Turret, &layout.core_turrets))
        .push(BuildRequest::build(StructureKind::Turret, &layout.flank_turrets));

    // 3. Lane walls wherever the opponent can come through
    for lane in Lane::BOTH.into_iter().filter(|&l| gap.is_open(l)) {
        plan.push(BuildRequest::build(StructureKind::Wall, &layout.lane(lane).walls));
    }

    // 4. Core upgrades and outer walls
    plan.push(BuildRequest::upgrade(&layout.secondary_upgrades))
        .push(BuildRequest::upgrade(&layout.primary_upgrades))
        .push(BuildRequest::upgrade(&layout.core_turrets))
        .push(BuildRequest::upgrade(&layout.flank_turrets))
        .push(BuildRequest::build(StructureKind::Wall, &layout.outer_walls))
        .push(BuildRequest::upgrade(&layout.outer_walls));

    // 5. Per lane: supports behind an open lane, walls out of a closed one
    for lane in Lane::BOTH {
        let lane_layout = layout.lane(lane);
        if gap.is_open(lane) {
            if turn > params.support_turn {
                for line in &lane_layout.supports {
                    plan.push(BuildRequest::build(StructureKind::Support, line))
                        .push(BuildRequest::upgrade(line));
                }
            }
        } else {
            plan.push(BuildRequest::remove(&lane_layout.walls));
        }
    }

    // 6. Late upgrades
    if turn > params.late_upgrade_turn {
        plan.push(BuildRequest::upgrade(&layout.late_upgrades));
    }

    // 7. Turrets above the cells the opponent scored through
    if params.breach_turrets && !breaches.is_empty() {
        let cells: BTreeSet<Position> = breaches.iter().map(|b| b.location.offset(0, 1)).collect();
        let cells: Vec<Position> = cells.into_iter().collect();
        plan.push(BuildRequest::build(StructureKind::Turret, &cells));
    }

    tracing::debug!(turn, gap = %gap, requests = plan.len(), "defense plan ready");
    plan
}
