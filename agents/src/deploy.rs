// ═══════════════════════════════════════════════════════════════════════
// Deployment policy — which mobile units go where this turn.
//
//   opening      : a small demolisher burst down the left lane
//   no lane open : hold the budget
//   lanes open   : a mid interceptor per open lane, escalating extra
//                  interceptors after the escalation turn, and on burst
//                  turns a demolisher burst followed by every scout the
//                  remaining budget affords
// ═══════════════════════════════════════════════════════════════════════

use crate::layout::{InterceptorSlot, LaneLayout, Layout, PolicyParams};
use crate::scan::GapState;
use frontier_engine::state::TurnState;
use frontier_engine::types::{Lane, MobileKind, Position};
use serde::Serialize;

/// Count large enough to spend the whole mobile budget.
pub const MAX_BURST: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpawnRequest {
    pub kind: MobileKind,
    pub at: Position,
    pub count: u32,
}

impl SpawnRequest {
    pub fn new(kind: MobileKind, at: Position, count: u32) -> Self {
        SpawnRequest { kind, at, count }
    }

    pub fn apply(&self, state: &mut TurnState<'_>) -> u32 {
        state.attempt_spawn(self.kind, &[self.at], self.count)
    }
}

/// Whether the periodic burst fires on `turn`.
pub fn burst_fires(params: &PolicyParams, turn: u32) -> bool {
    let period = turn / params.burst_period_divisor.max(1) + params.burst_period_base;
    period > 0 && turn % period == 1
}

pub fn heavy_burst_size(params: &PolicyParams, turn: u32) -> u32 {
    (turn / params.heavy_burst_divisor.max(1) + params.heavy_burst_base).min(params.heavy_burst_cap)
}

fn escalation(turn: u32, divisor: u32, cap: u32) -> u32 {
    (turn / divisor.max(1)).min(cap)
}

/// Extra interceptors, alternating between the open lanes slot by slot.
fn escalating_interceptors(requests: &mut Vec<SpawnRequest>, layout: &Layout, open: &[Lane], extra: u32) {
    for i in 0..extra {
        let slot = InterceptorSlot::rotating(i);
        for &lane in open {
            requests.push(SpawnRequest::new(MobileKind::Interceptor, layout.lane(lane).interceptor_point(slot), 1));
        }
    }
}

fn burst(requests: &mut Vec<SpawnRequest>, params: &PolicyParams, lane: &LaneLayout, turn: u32) {
    requests.push(SpawnRequest::new(MobileKind::Demolisher, lane.slow_spawn, heavy_burst_size(params, turn)));
    requests.push(SpawnRequest::new(MobileKind::Scout, lane.fast_spawn, MAX_BURST));
}

/// Spawn requests for one turn, in submission order.
pub fn deployment(layout: &Layout, params: &PolicyParams, gap: GapState, turn: u32) -> Vec<SpawnRequest> {
    let mut requests = Vec::new();

    if turn <= params.opening_turns {
        requests.push(SpawnRequest::new(MobileKind::Demolisher, layout.left.slow_spawn, params.opening_burst));
        return requests;
    }

    let open = gap.open_lanes();
    let (cap, divisor, burst_lane) = match open.as_slice() {
        [] => return requests,
        [lane] => (params.single_escalation_cap, params.single_escalation_divisor, *lane),
        _ => (params.dual_escalation_cap, params.dual_escalation_divisor, Lane::Left),
    };

    for &lane in &open {
        let at = layout.lane(lane).interceptor_point(InterceptorSlot::Mid);
        requests.push(SpawnRequest::new(MobileKind::Interceptor, at, 1));
    }
    if turn > params.escalation_turn {
        escalating_interceptors(&mut requests, layout, &open, escalation(turn, divisor, cap));
    }
    if burst_fires(params, turn) {
        burst(&mut requests, params, layout.lane(burst_lane), turn);
    }
    requests
}

/// Apply requests in order; returns the number of units queued.
pub fn apply_deployment(requests: &[SpawnRequest], state: &mut TurnState<'_>) -> u32 {
    requests.iter().map(|r| r.apply(state)).sum()
}
