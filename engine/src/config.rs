// ═══════════════════════════════════════════════════════════════════════
// Game configuration — unit costs, health and wire shorthands.
// Sent once by the engine at game start; never hardcoded in decisions.
// ═══════════════════════════════════════════════════════════════════════

use crate::error::FrameError;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// One entry of the engine's `unitInformation` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitInfo {
    #[serde(default)]
    pub shorthand: String,
    /// Structure-point cost.
    #[serde(default)]
    pub cost1: f64,
    /// Mobile-point cost.
    #[serde(default)]
    pub cost2: f64,
    #[serde(rename = "startHealth", default, skip_serializing_if = "Option::is_none")]
    pub start_health: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade: Option<UpgradeInfo>,
}

/// Fields overridden once a structure is upgraded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpgradeInfo {
    #[serde(rename = "startHealth", default, skip_serializing_if = "Option::is_none")]
    pub start_health: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost2: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(rename = "unitInformation")]
    unit_information: Vec<UnitInfo>,
}

/// Validated unit table: always holds all eight unit indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct GameConfig {
    #[serde(rename = "unitInformation")]
    units: Vec<UnitInfo>,
}

impl TryFrom<RawConfig> for GameConfig {
    type Error = FrameError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        if raw.unit_information.len() < UNIT_INDEX_COUNT {
            return Err(FrameError::MissingUnitInfo(raw.unit_information.len()));
        }
        Ok(GameConfig { units: raw.unit_information })
    }
}

impl GameConfig {
    pub fn from_json(text: &str) -> crate::error::Result<GameConfig> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_value(value: serde_json::Value) -> crate::error::Result<GameConfig> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn unit(&self, kind: UnitKind) -> &UnitInfo {
        &self.units[kind.index()]
    }

    /// Maximum health for a structure, None when the config does not say.
    pub fn max_health(&self, kind: StructureKind, upgraded: bool) -> Option<f64> {
        let info = self.unit(kind.into());
        let health = if upgraded {
            info.upgrade.as_ref().and_then(|u| u.start_health).or(info.start_health)
        } else {
            info.start_health
        };
        health.filter(|h| *h > 0.0)
    }

    pub fn cost(&self, kind: UnitKind) -> Cost {
        let info = self.unit(kind);
        Cost { structure: info.cost1, mobile: info.cost2 }
    }

    /// Upgrade price; fields the upgrade block omits fall back to the base cost.
    pub fn upgrade_cost(&self, kind: StructureKind) -> Cost {
        let info = self.unit(kind.into());
        let up = info.upgrade.clone().unwrap_or_default();
        Cost {
            structure: up.cost1.unwrap_or(info.cost1),
            mobile: up.cost2.unwrap_or(info.cost2),
        }
    }

    pub fn shorthand(&self, kind: UnitKind) -> &str {
        &self.unit(kind).shorthand
    }

    pub fn remove_shorthand(&self) -> &str {
        &self.units[REMOVE_INDEX].shorthand
    }

    pub fn upgrade_shorthand(&self) -> &str {
        &self.units[UPGRADE_INDEX].shorthand
    }
}

// ── Standard ruleset ───────────────────────────────────────────────────

fn info(shorthand: &str, cost1: f64, cost2: f64, health: Option<f64>, upgrade: Option<UpgradeInfo>) -> UnitInfo {
    UnitInfo {
        shorthand: shorthand.to_string(),
        cost1,
        cost2,
        start_health: health,
        upgrade,
    }
}

fn upgrade(health: f64, cost1: f64) -> Option<UpgradeInfo> {
    Some(UpgradeInfo { start_health: Some(health), cost1: Some(cost1), cost2: None })
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            units: vec![
                info("FF", 1.0, 0.0, Some(12.0), upgrade(120.0, 1.0)),
                info("EF", 4.0, 0.0, Some(30.0), upgrade(30.0, 4.0)),
                info("DF", 2.0, 0.0, Some(75.0), upgrade(75.0, 4.0)),
                info("PI", 0.0, 1.0, Some(15.0), None),
                info("EI", 0.0, 3.0, Some(5.0), None),
                info("SI", 0.0, 1.0, Some(40.0), None),
                info("RM", 0.0, 0.0, None, None),
                info("UP", 0.0, 0.0, None, None),
            ],
        }
    }
}
