// ═══════════════════════════════════════════════════════════════════════
// Turn state — the client-side ledger for one turn.
//
// Architecture:
//   The engine is authoritative: it owns the board, resolves combat and
//   enforces budgets. During a turn we only queue intents. The ledger
//   mirrors the engine's checks so a queued command is one the engine
//   will accept:
//     • costs are deducted as commands are queued
//     • a structure queued this turn occupies its cell immediately
//     • rejected attempts are silent; the caller moves on
//
// Flow:
//   1. Runner builds a TurnState from the turn-start frame
//   2. Agent calls attempt_spawn / attempt_upgrade / attempt_remove
//   3. Runner calls submit() and writes both stacks to the engine
// ═══════════════════════════════════════════════════════════════════════

use crate::board::BoardView;
use crate::config::GameConfig;
use crate::frame::{Frame, PlayerStats};
use crate::map;
use crate::types::*;
use serde::Serialize;
use thiserror::Error;

/// A queued instruction for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Command {
    Build { kind: StructureKind, at: Position },
    Upgrade { at: Position },
    Remove { at: Position },
    Spawn { kind: MobileKind, at: Position },
}

impl Command {
    pub fn at(&self) -> Position {
        match *self {
            Command::Build { at, .. }
            | Command::Upgrade { at }
            | Command::Remove { at }
            | Command::Spawn { at, .. } => at,
        }
    }

    fn wire(&self, config: &GameConfig) -> (String, i32, i32) {
        let shorthand = match *self {
            Command::Build { kind, .. } => config.shorthand(kind.into()),
            Command::Spawn { kind, .. } => config.shorthand(kind.into()),
            Command::Upgrade { .. } => config.upgrade_shorthand(),
            Command::Remove { .. } => config.remove_shorthand(),
        };
        let at = self.at();
        (shorthand.to_string(), at.x, at.y)
    }
}

/// Why the ledger refused an attempt. Expected, never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("not enough resources")]
    Unaffordable,
    #[error("position is off the board")]
    OffBoard,
    #[error("position is in the enemy half")]
    EnemyHalf,
    #[error("cell is already occupied")]
    Occupied,
    #[error("mobile units must spawn on a friendly edge")]
    NotOnEdge,
    #[error("no own structure at position")]
    NoStructure,
    #[error("structure is already upgraded")]
    AlreadyUpgraded,
    #[error("removal already queued")]
    AlreadyQueued,
}

/// Everything queued during a turn, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub build: Vec<Command>,
    pub deploy: Vec<Command>,
}

impl Submission {
    /// The two protocol lines: build stack, then deploy stack.
    pub fn to_wire(&self, config: &GameConfig) -> crate::error::Result<(String, String)> {
        let encode = |stack: &[Command]| -> Vec<(String, i32, i32)> {
            stack.iter().map(|c| c.wire(config)).collect()
        };
        Ok((
            serde_json::to_string(&encode(&self.build))?,
            serde_json::to_string(&encode(&self.deploy))?,
        ))
    }

    pub fn len(&self) -> usize {
        self.build.len() + self.deploy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone)]
pub struct TurnState<'a> {
    config: &'a GameConfig,
    turn: u32,
    board: BoardView,
    pools: Pools,
    me: PlayerStats,
    enemy: PlayerStats,
    build_stack: Vec<Command>,
    deploy_stack: Vec<Command>,
}

impl<'a> TurnState<'a> {
    pub fn new(config: &'a GameConfig, frame: &Frame) -> Self {
        TurnState {
            config,
            turn: frame.turn,
            board: BoardView::new(frame.structures.iter().cloned()),
            pools: frame.me.pools,
            me: frame.me,
            enemy: frame.enemy,
            build_stack: Vec::new(),
            deploy_stack: Vec::new(),
        }
    }

    /// State assembled directly from a board and budget.
    pub fn from_parts(config: &'a GameConfig, turn: u32, board: BoardView, pools: Pools) -> Self {
        TurnState {
            config,
            turn,
            board,
            pools,
            me: PlayerStats { pools, ..PlayerStats::default() },
            enemy: PlayerStats::default(),
            build_stack: Vec::new(),
            deploy_stack: Vec::new(),
        }
    }

    pub fn with_enemy(mut self, enemy: PlayerStats) -> Self {
        self.enemy = enemy;
        self
    }

    pub fn config(&self) -> &'a GameConfig { self.config }
    pub fn turn(&self) -> u32 { self.turn }
    pub fn board(&self) -> &BoardView { &self.board }
    /// Budget left after everything queued so far.
    pub fn pools(&self) -> Pools { self.pools }
    pub fn me(&self) -> PlayerStats { self.me }
    pub fn enemy(&self) -> PlayerStats { self.enemy }

    pub fn queued(&self) -> impl Iterator<Item = &Command> + '_ {
        self.build_stack.iter().chain(self.deploy_stack.iter())
    }

    // ── Checks ─────────────────────────────────────────────────────────

    pub fn can_spawn(&self, kind: UnitKind, at: Position) -> Result<(), Rejection> {
        if !map::in_bounds(at) {
            return Err(Rejection::OffBoard);
        }
        if map::half_of(at) != Player::Me {
            return Err(Rejection::EnemyHalf);
        }
        if self.board.is_occupied(at) {
            return Err(Rejection::Occupied);
        }
        if !kind.is_stationary() && !map::is_friendly_edge(at) {
            return Err(Rejection::NotOnEdge);
        }
        if !self.pools.covers(self.config.cost(kind)) {
            return Err(Rejection::Unaffordable);
        }
        Ok(())
    }

    pub fn can_upgrade(&self, at: Position) -> Result<Cost, Rejection> {
        let s = self
            .board
            .structure_at(at)
            .filter(|s| s.owner == Player::Me)
            .ok_or(Rejection::NoStructure)?;
        if s.upgraded {
            return Err(Rejection::AlreadyUpgraded);
        }
        let cost = self.config.upgrade_cost(s.kind);
        if !self.pools.covers(cost) {
            return Err(Rejection::Unaffordable);
        }
        Ok(cost)
    }

    pub fn can_remove(&self, at: Position) -> Result<(), Rejection> {
        if map::half_of(at) != Player::Me
            || !self.board.structure_at(at).is_some_and(|s| s.owner == Player::Me)
        {
            return Err(Rejection::NoStructure);
        }
        if self.build_stack.contains(&Command::Remove { at }) {
            return Err(Rejection::AlreadyQueued);
        }
        Ok(())
    }

    // ── Attempts ───────────────────────────────────────────────────────

    /// Queue up to `count` units at each position. Returns how many were
    /// queued. Stationary kinds place at most one per cell.
    pub fn attempt_spawn(&mut self, kind: impl Into<UnitKind>, positions: &[Position], count: u32) -> u32 {
        let kind = kind.into();
        let mut spawned = 0;
        for &at in positions {
            for _ in 0..count {
                if let Err(why) = self.can_spawn(kind, at) {
                    tracing::trace!(%kind, %at, %why, "spawn rejected");
                    break;
                }
                self.pools.spend(self.config.cost(kind));
                spawned += 1;
                match kind {
                    UnitKind::Structure(k) => {
                        let health = self.config.max_health(k, false).unwrap_or(0.0);
                        self.board.place(Structure::new(at, k, Player::Me, health));
                        self.build_stack.push(Command::Build { kind: k, at });
                    }
                    UnitKind::Mobile(k) => {
                        self.deploy_stack.push(Command::Spawn { kind: k, at });
                    }
                }
            }
        }
        spawned
    }

    pub fn attempt_upgrade(&mut self, positions: &[Position]) -> u32 {
        let mut upgraded = 0;
        for &at in positions {
            match self.can_upgrade(at) {
                Ok(cost) => {
                    self.pools.spend(cost);
                    if let Some(s) = self.board.structure_at_mut(at) {
                        s.upgraded = true;
                    }
                    self.build_stack.push(Command::Upgrade { at });
                    upgraded += 1;
                }
                Err(why) => tracing::trace!(%at, %why, "upgrade rejected"),
            }
        }
        upgraded
    }

    /// Queue removals. Free; the structure stays on the board until the
    /// engine processes the end of the turn.
    pub fn attempt_remove(&mut self, positions: &[Position]) -> u32 {
        let mut removed = 0;
        for &at in positions {
            match self.can_remove(at) {
                Ok(()) => {
                    self.build_stack.push(Command::Remove { at });
                    removed += 1;
                }
                Err(why) => tracing::trace!(%at, %why, "removal rejected"),
            }
        }
        removed
    }

    pub fn submit(self) -> Submission {
        Submission {
            build: self.build_stack,
            deploy: self.deploy_stack,
        }
    }
}
