// ═══════════════════════════════════════════════════════════════════════
// Engine messages — decoding config and per-frame board snapshots
//
// The engine speaks one JSON object per line:
//   • a config message (has `unitInformation`) once at game start
//   • frame messages with `turnInfo = [kind, turn, actionFrame, total]`
//       kind 0 → turn start, a decision is expected
//       kind 1 → action frame, informational (events live here)
//       kind 2 → game over
//
// Frames are always presented from our perspective: p1 is us, and our
// half is the bottom half of the board.
// ═══════════════════════════════════════════════════════════════════════

use crate::config::GameConfig;
use crate::error::{FrameError, Result};
use crate::types::*;
use serde::Deserialize;
use serde_json::Value;

// ── Message ────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Message {
    Config(GameConfig),
    Frame(Frame),
}

impl Message {
    pub fn parse(line: &str) -> Result<Message> {
        let value: Value = serde_json::from_str(line)?;
        if value.get("unitInformation").is_some() {
            Ok(Message::Config(GameConfig::from_value(value)?))
        } else {
            Ok(Message::Frame(Frame::from_value(value)?))
        }
    }
}

// ── Frame ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    TurnStart,
    Action,
    End,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerStats {
    pub health: f64,
    pub pools: Pools,
    pub time_ms: f64,
}

/// A mobile unit in transit. Engine-owned; kept only for inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct MobileUnit {
    pub position: Position,
    pub kind: MobileKind,
    pub health: f64,
    pub owner: Player,
}

#[derive(Debug, Clone)]
pub struct Frame {
    pub kind: FrameKind,
    pub turn: u32,
    pub action_frame: i64,
    pub me: PlayerStats,
    pub enemy: PlayerStats,
    pub structures: Vec<Structure>,
    pub mobiles: Vec<MobileUnit>,
    /// Structures flagged for removal at the end of this turn.
    pub pending_removals: Vec<(Player, Position)>,
    events: Value,
}

#[derive(Debug, Deserialize)]
struct RawFrame {
    #[serde(rename = "turnInfo")]
    turn_info: Vec<f64>,
    #[serde(rename = "p1Stats")]
    p1_stats: Vec<f64>,
    #[serde(rename = "p2Stats")]
    p2_stats: Vec<f64>,
    #[serde(rename = "p1Units", default)]
    p1_units: Vec<Vec<Vec<Value>>>,
    #[serde(rename = "p2Units", default)]
    p2_units: Vec<Vec<Vec<Value>>>,
    #[serde(default)]
    events: Value,
}

impl Frame {
    pub fn parse(line: &str) -> Result<Frame> {
        Frame::from_value(serde_json::from_str(line)?)
    }

    pub fn from_value(value: Value) -> Result<Frame> {
        let raw: RawFrame = serde_json::from_value(value)?;

        let kind = match raw.turn_info.first().map(|k| *k as i64) {
            Some(0) => FrameKind::TurnStart,
            Some(1) => FrameKind::Action,
            Some(2) => FrameKind::End,
            _ => return Err(FrameError::MissingField("turnInfo")),
        };
        let turn = *raw.turn_info.get(1).ok_or(FrameError::MissingField("turnInfo"))?;
        let action_frame = raw.turn_info.get(2).copied().unwrap_or(0.0) as i64;

        let mut frame = Frame {
            kind,
            turn: turn.max(0.0) as u32,
            action_frame,
            me: decode_stats(&raw.p1_stats, "p1Stats")?,
            enemy: decode_stats(&raw.p2_stats, "p2Stats")?,
            structures: Vec::new(),
            mobiles: Vec::new(),
            pending_removals: Vec::new(),
            events: raw.events,
        };
        frame.absorb_units(Player::Me, &raw.p1_units, "p1Units")?;
        frame.absorb_units(Player::Enemy, &raw.p2_units, "p2Units")?;
        Ok(frame)
    }

    fn absorb_units(&mut self, owner: Player, lists: &[Vec<Vec<Value>>], list: &'static str) -> Result<()> {
        let mut upgrades = Vec::new();
        for (index, entries) in lists.iter().enumerate() {
            for entry in entries {
                let (position, health, id) =
                    decode_unit(entry).ok_or(FrameError::MalformedUnit { list, index })?;
                if let Some(kind) = StructureKind::from_index(index) {
                    self.structures.push(Structure { position, kind, health, upgraded: false, owner, id });
                } else if let Some(kind) = MobileKind::from_index(index) {
                    self.mobiles.push(MobileUnit { position, kind, health, owner });
                } else if index == REMOVE_INDEX {
                    self.pending_removals.push((owner, position));
                } else if index == UPGRADE_INDEX {
                    upgrades.push(position);
                } else {
                    tracing::warn!(list, index, "unknown unit index in frame, skipping");
                }
            }
        }
        for s in self.structures.iter_mut().filter(|s| s.owner == owner) {
            if upgrades.contains(&s.position) {
                s.upgraded = true;
            }
        }
        Ok(())
    }

    /// Breach events of this frame. A malformed record fails the whole list.
    pub fn breaches(&self) -> Result<Vec<BreachEvent>> {
        let records = match self.events.get("breach") {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(records)) => records,
            Some(other) => return Err(malformed_breach(format!("expected a list, got {}", other))),
        };
        records.iter().map(|r| decode_breach(r, self.turn)).collect()
    }
}

// ── Decoding helpers ───────────────────────────────────────────────────

fn decode_stats(stats: &[f64], field: &'static str) -> Result<PlayerStats> {
    match stats {
        [health, sp, mp, rest @ ..] => Ok(PlayerStats {
            health: *health,
            pools: Pools::new(*sp, *mp),
            time_ms: rest.first().copied().unwrap_or(0.0),
        }),
        _ => Err(FrameError::MissingField(field)),
    }
}

/// `[x, y, health, id]`
fn decode_unit(entry: &[Value]) -> Option<(Position, f64, String)> {
    let x = entry.first()?.as_f64()? as i32;
    let y = entry.get(1)?.as_f64()? as i32;
    let health = entry.get(2)?.as_f64()?;
    let id = match entry.get(3) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    };
    Some((Position::new(x, y), health, id))
}

/// `[[x, y], damage, unitIndex, id, playerNumber]`
fn decode_breach(record: &Value, turn: u32) -> Result<BreachEvent> {
    let fields = record
        .as_array()
        .ok_or_else(|| malformed_breach(format!("record is not a list: {}", record)))?;
    let location = fields
        .first()
        .and_then(Value::as_array)
        .and_then(|xy| Some(Position::new(xy.first()?.as_f64()? as i32, xy.get(1)?.as_f64()? as i32)))
        .ok_or_else(|| malformed_breach(format!("bad location in {}", record)))?;
    let owner = fields
        .get(4)
        .and_then(Value::as_u64)
        .and_then(Player::from_event_number)
        .ok_or_else(|| malformed_breach(format!("bad owner in {}", record)))?;
    Ok(BreachEvent { location, owner, turn })
}

fn malformed_breach(detail: String) -> FrameError {
    FrameError::MalformedEvent { kind: "breach", detail }
}
