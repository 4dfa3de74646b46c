// ═══════════════════════════════════════════════════════════════════════
// Structural triage — remove badly damaged structures now, rebuild them
// at full health next turn.
//
// Two-phase contract with the agent:
//   turn N   : triage() → removals queued, records staged
//   turn N+1 : take() → records rebuilt, queue emptied
// Records never survive more than one turn.
// ═══════════════════════════════════════════════════════════════════════

use frontier_engine::config::GameConfig;
use frontier_engine::types::{Player, Position, Structure, StructureKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TriageRecord {
    pub position: Position,
    pub kind: StructureKind,
    pub upgraded: bool,
}

impl From<&Structure> for TriageRecord {
    fn from(s: &Structure) -> Self {
        TriageRecord { position: s.position, kind: s.kind, upgraded: s.upgraded }
    }
}

/// Current over maximum health, None when the config has no maximum for
/// the structure's kind.
pub fn health_ratio(structure: &Structure, config: &GameConfig) -> Option<f64> {
    let base = config.max_health(structure.kind, false);
    let max = if structure.upgraded {
        // A freshly upgraded wall still reports base health on its first
        // turn; measure it against the base maximum.
        match (structure.kind, base) {
            (StructureKind::Wall, Some(b)) if structure.health == b => Some(b),
            _ => config.max_health(structure.kind, true),
        }
    } else {
        base
    }?;
    Some(structure.health / max)
}

/// Records for every own structure at or below `threshold`.
pub fn triage<'a>(
    structures: impl IntoIterator<Item = &'a Structure>,
    config: &GameConfig,
    threshold: f64,
) -> Vec<TriageRecord> {
    let mut records = Vec::new();
    for s in structures.into_iter().filter(|s| s.owner == Player::Me) {
        let Some(ratio) = health_ratio(s, config) else {
            tracing::warn!(kind = ?s.kind, at = %s.position, "no maximum health for structure, skipping triage");
            continue;
        };
        if ratio <= threshold {
            records.push(TriageRecord::from(s));
        }
    }
    records
}

/// Holds the records of one turn for the next.
#[derive(Debug, Clone, Default)]
pub struct RebuildQueue {
    pending: Vec<TriageRecord>,
}

impl RebuildQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out last turn's records, leaving the queue empty.
    pub fn take(&mut self) -> Vec<TriageRecord> {
        std::mem::take(&mut self.pending)
    }

    /// Replace whatever is queued with this turn's records.
    pub fn stage(&mut self, records: Vec<TriageRecord>) {
        self.pending = records;
    }

    pub fn pending(&self) -> &[TriageRecord] {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
