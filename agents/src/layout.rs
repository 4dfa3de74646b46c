// ═══════════════════════════════════════════════════════════════════════
// Layout & policy parameters — every tunable of the adaptive agent.
//
// Layout is pure geometry: where each structure group goes and where the
// mobile units enter each lane. PolicyParams holds the thresholds and
// cadence constants the planner and deployment policy branch on.
// Both deserialize from a policy file; omitted fields keep their defaults.
// ═══════════════════════════════════════════════════════════════════════

use frontier_engine::types::{at, Lane, Position};
use serde::{Deserialize, Serialize};

// ── Lane geometry ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneLayout {
    /// Walls funnelling enemy units toward the interceptor points.
    pub walls: Vec<Position>,
    /// Support lines, built and upgraded one line at a time.
    pub supports: Vec<Vec<Position>>,
    /// Interceptor spawn points ordered near, mid, far.
    pub interceptor_points: [Position; 3],
    pub fast_spawn: Position,
    pub slow_spawn: Position,
}

impl LaneLayout {
    pub fn interceptor_point(&self, slot: InterceptorSlot) -> Position {
        self.interceptor_points[slot as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterceptorSlot {
    Near = 0,
    Mid = 1,
    Far = 2,
}

impl InterceptorSlot {
    /// Slot for the i-th escalation interceptor: far, near, mid, far, ...
    pub fn rotating(i: u32) -> InterceptorSlot {
        match (i + 2) % 3 {
            0 => InterceptorSlot::Near,
            1 => InterceptorSlot::Mid,
            _ => InterceptorSlot::Far,
        }
    }
}

// ── Base layout ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub core_walls: Vec<Position>,
    pub core_turrets: Vec<Position>,
    pub flank_turrets: Vec<Position>,
    /// Wall upgrades in the order they are bought.
    pub primary_upgrades: Vec<Position>,
    pub secondary_upgrades: Vec<Position>,
    pub late_upgrades: Vec<Position>,
    pub outer_walls: Vec<Position>,
    pub left: LaneLayout,
    pub right: LaneLayout,
}

impl Layout {
    pub fn lane(&self, lane: Lane) -> &LaneLayout {
        match lane {
            Lane::Left => &self.left,
            Lane::Right => &self.right,
        }
    }
}

fn cells(coords: &[(i32, i32)]) -> Vec<Position> {
    coords.iter().map(|&(x, y)| at(x, y)).collect()
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            core_walls: cells(&[
                (0, 13), (1, 13), (26, 13), (27, 13),
                (2, 12), (4, 12), (5, 12), (22, 12), (23, 12), (25, 12),
                (2, 11), (6, 11), (21, 11), (25, 11),
                (7, 10), (20, 10), (7, 9), (20, 9), (7, 8), (20, 8),
                (8, 7), (19, 7), (9, 6), (18, 6),
                (10, 5), (11, 5), (12, 5), (13, 5), (14, 5), (15, 5), (16, 5), (17, 5),
            ]),
            core_turrets: cells(&[(4, 11), (1, 12), (26, 12), (23, 11)]),
            flank_turrets: cells(&[(5, 11), (22, 11)]),
            primary_upgrades: cells(&[(4, 12), (5, 12), (22, 12), (23, 12), (6, 11), (21, 11)]),
            secondary_upgrades: cells(&[
                (0, 13), (1, 13), (26, 13), (27, 13), (2, 12), (25, 12), (2, 11), (25, 11),
            ]),
            late_upgrades: cells(&[(7, 10), (20, 10), (7, 9), (20, 9), (7, 8), (20, 8)]),
            outer_walls: cells(&[(2, 13), (25, 13), (6, 12), (21, 12)]),
            left: LaneLayout {
                walls: cells(&[(5, 10), (5, 9), (9, 5)]),
                supports: vec![
                    cells(&[(7, 11), (8, 11), (9, 11), (10, 11)]),
                    cells(&[(8, 10), (9, 10), (10, 10)]),
                    cells(&[(8, 9), (9, 9), (10, 9)]),
                    cells(&[(8, 8), (9, 8), (10, 8)]),
                ],
                interceptor_points: [at(6, 7), at(7, 6), at(8, 5)],
                fast_spawn: at(3, 10),
                slow_spawn: at(4, 9),
            },
            right: LaneLayout {
                walls: cells(&[(22, 10), (22, 9), (18, 5)]),
                supports: vec![
                    cells(&[(20, 11), (19, 11), (18, 11), (17, 11)]),
                    cells(&[(19, 10), (18, 10), (17, 10)]),
                    cells(&[(19, 9), (18, 9), (17, 9)]),
                    cells(&[(19, 8), (18, 8), (17, 8)]),
                ],
                interceptor_points: [at(21, 7), at(20, 6), at(19, 5)],
                fast_spawn: at(24, 10),
                slow_spawn: at(23, 9),
            },
        }
    }
}

// ── Policy parameters ──────────────────────────────────────────────────

fn default_triage_threshold() -> f64 { 0.6 }
fn default_support_turn() -> u32 { 12 }
fn default_late_upgrade_turn() -> u32 { 20 }
fn default_opening_turns() -> u32 { 5 }
fn default_opening_burst() -> u32 { 2 }
fn default_escalation_turn() -> u32 { 10 }
fn default_dual_escalation_divisor() -> u32 { 15 }
fn default_dual_escalation_cap() -> u32 { 2 }
fn default_single_escalation_divisor() -> u32 { 12 }
fn default_single_escalation_cap() -> u32 { 4 }
fn default_burst_period_divisor() -> u32 { 20 }
fn default_burst_period_base() -> u32 { 5 }
fn default_heavy_burst_divisor() -> u32 { 20 }
fn default_heavy_burst_base() -> u32 { 2 }
fn default_heavy_burst_cap() -> u32 { 4 }
fn default_breach_turrets() -> bool { false }

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyParams {
    /// Health ratio at or below which a structure is removed and rebuilt.
    #[serde(default = "default_triage_threshold")]
    pub triage_threshold: f64,
    /// Support lines are built only after this turn.
    #[serde(default = "default_support_turn")]
    pub support_turn: u32,
    #[serde(default = "default_late_upgrade_turn")]
    pub late_upgrade_turn: u32,

    #[serde(default = "default_opening_turns")]
    pub opening_turns: u32,
    #[serde(default = "default_opening_burst")]
    pub opening_burst: u32,
    #[serde(default = "default_escalation_turn")]
    pub escalation_turn: u32,
    /// Both lanes open: `min(cap, turn / divisor)` extra interceptors per lane.
    #[serde(default = "default_dual_escalation_divisor")]
    pub dual_escalation_divisor: u32,
    #[serde(default = "default_dual_escalation_cap")]
    pub dual_escalation_cap: u32,
    #[serde(default = "default_single_escalation_divisor")]
    pub single_escalation_divisor: u32,
    #[serde(default = "default_single_escalation_cap")]
    pub single_escalation_cap: u32,
    /// Bursts fire when `turn % (turn / divisor + base) == 1`.
    #[serde(default = "default_burst_period_divisor")]
    pub burst_period_divisor: u32,
    #[serde(default = "default_burst_period_base")]
    pub burst_period_base: u32,
    /// Heavy burst size is `min(cap, turn / divisor + base)`.
    #[serde(default = "default_heavy_burst_divisor")]
    pub heavy_burst_divisor: u32,
    #[serde(default = "default_heavy_burst_base")]
    pub heavy_burst_base: u32,
    #[serde(default = "default_heavy_burst_cap")]
    pub heavy_burst_cap: u32,

    /// Place a turret above every cell the opponent scored through. Off unless
    /// a policy file turns it on.
    #[serde(default = "default_breach_turrets")]
    pub breach_turrets: bool,
}

impl Default for PolicyParams {
    fn default() -> Self {
        PolicyParams {
            triage_threshold: default_triage_threshold(),
            support_turn: default_support_turn(),
            late_upgrade_turn: default_late_upgrade_turn(),
            opening_turns: default_opening_turns(),
            opening_burst: default_opening_burst(),
            escalation_turn: default_escalation_turn(),
            dual_escalation_divisor: default_dual_escalation_divisor(),
            dual_escalation_cap: default_dual_escalation_cap(),
            single_escalation_divisor: default_single_escalation_divisor(),
            single_escalation_cap: default_single_escalation_cap(),
            burst_period_divisor: default_burst_period_divisor(),
            burst_period_base: default_burst_period_base(),
            heavy_burst_divisor: default_heavy_burst_divisor(),
            heavy_burst_base: default_heavy_burst_base(),
            heavy_burst_cap: default_heavy_burst_cap(),
            breach_turrets: default_breach_turrets(),
        }
    }
}

/// Everything the adaptive agent needs besides the engine's rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub params: PolicyParams,
}
