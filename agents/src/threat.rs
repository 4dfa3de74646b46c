// ═══════════════════════════════════════════════════════════════════════
// Threat assessment — how hard the opponent can hit next turn.
// ═══════════════════════════════════════════════════════════════════════

use frontier_engine::board::BoardView;
use frontier_engine::frame::PlayerStats;
use frontier_engine::types::{Player, StructureKind};
use serde::Serialize;

/// Enemy mobile budget from which one interceptor is held back.
pub const MOBILE_ALERT: f64 = 10.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ThreatAssessment {
    pub enemy_mobile: f64,
    /// Total shield the enemy supports can lend a passing unit.
    pub enemy_shielding: f64,
    /// Interceptors worth keeping in reserve against the coming wave.
    pub interceptor_reserve: u32,
}

/// Shield one support grants; upgraded supports grow stronger the closer
/// they sit to our half.
pub fn support_shielding(y: i32, upgraded: bool) -> f64 {
    if upgraded {
        2.0 + f64::from(27 - y) * 0.34
    } else {
        3.0
    }
}

pub fn assess(board: &BoardView, enemy: &PlayerStats) -> ThreatAssessment {
    let enemy_shielding: f64 = board
        .structures_of(Player::Enemy)
        .filter(|s| s.kind == StructureKind::Support)
        .map(|s| support_shielding(s.position.y, s.upgraded))
        .sum();

    let mut reserve = 0;
    if enemy.pools.mobile >= MOBILE_ALERT {
        reserve += 1;
    }
    // A shielded scout (15 health) beyond 25 shield outlasts one interceptor
    reserve += ((enemy_shielding + 25.0) / 40.0).floor() as u32;

    ThreatAssessment {
        enemy_mobile: enemy.pools.mobile,
        enemy_shielding,
        interceptor_reserve: reserve,
    }
}
