// ═══════════════════════════════════════════════════════════════════════
// Core types — positions, players, unit kinds, structures, events
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};

// ── Position ───────────────────────────────────────────────────────────
// Serialized as `[x, y]`, the same shape the engine uses on the wire.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Position { x: self.x + dx, y: self.y + dy }
    }
}

impl From<[i32; 2]> for Position {
    fn from([x, y]: [i32; 2]) -> Self {
        Position { x, y }
    }
}

impl From<Position> for [i32; 2] {
    fn from(p: Position) -> Self {
        [p.x, p.y]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// Shorthand for building position tables: `at(3, 10)`.
pub const fn at(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

// ── Players & lanes ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    Me,
    Enemy,
}

impl Player {
    /// Player number used in event records (1 = self, 2 = opponent).
    pub fn from_event_number(n: u64) -> Option<Player> {
        match n {
            1 => Some(Player::Me),
            2 => Some(Player::Enemy),
            _ => None,
        }
    }
}

/// One of the two attack lanes, seen from our side of the board.
/// Left covers columns 0..14, right covers 14..28.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lane {
    Left,
    Right,
}

impl Lane {
    pub const BOTH: [Lane; 2] = [Lane::Left, Lane::Right];

    pub fn of_column(x: i32) -> Lane {
        if x < crate::map::HALF_ARENA { Lane::Left } else { Lane::Right }
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lane::Left => write!(f, "left"),
            Lane::Right => write!(f, "right"),
        }
    }
}

// ── Unit kinds ─────────────────────────────────────────────────────────
// Engine unit indices: 0 wall, 1 support, 2 turret, 3 scout,
// 4 demolisher, 5 interceptor, 6 remove marker, 7 upgrade marker.

pub const REMOVE_INDEX: usize = 6;
pub const UPGRADE_INDEX: usize = 7;
pub const UNIT_INDEX_COUNT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StructureKind {
    Wall,
    Support,
    Turret,
}

impl StructureKind {
    pub const ALL: [StructureKind; 3] = [StructureKind::Wall, StructureKind::Support, StructureKind::Turret];

    pub fn index(self) -> usize {
        match self {
            StructureKind::Wall => 0,
            StructureKind::Support => 1,
            StructureKind::Turret => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<StructureKind> {
        StructureKind::ALL.get(i).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MobileKind {
    Scout,
    Demolisher,
    Interceptor,
}

impl MobileKind {
    pub const ALL: [MobileKind; 3] = [MobileKind::Scout, MobileKind::Demolisher, MobileKind::Interceptor];

    pub fn index(self) -> usize {
        match self {
            MobileKind::Scout => 3,
            MobileKind::Demolisher => 4,
            MobileKind::Interceptor => 5,
        }
    }

    pub fn from_index(i: usize) -> Option<MobileKind> {
        i.checked_sub(3).and_then(|j| MobileKind::ALL.get(j).copied())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    Structure(StructureKind),
    Mobile(MobileKind),
}

impl UnitKind {
    pub fn index(self) -> usize {
        match self {
            UnitKind::Structure(k) => k.index(),
            UnitKind::Mobile(k) => k.index(),
        }
    }

    pub fn is_stationary(self) -> bool {
        matches!(self, UnitKind::Structure(_))
    }
}

impl From<StructureKind> for UnitKind {
    fn from(k: StructureKind) -> Self {
        UnitKind::Structure(k)
    }
}

impl From<MobileKind> for UnitKind {
    fn from(k: MobileKind) -> Self {
        UnitKind::Mobile(k)
    }
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitKind::Structure(k) => write!(f, "{:?}", k),
            UnitKind::Mobile(k) => write!(f, "{:?}", k),
        }
    }
}

// ── Structure ──────────────────────────────────────────────────────────

/// A stationary structure as reported in a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    pub position: Position,
    pub kind: StructureKind,
    pub health: f64,
    pub upgraded: bool,
    pub owner: Player,
    pub id: String,
}

impl Structure {
    pub fn new(position: Position, kind: StructureKind, owner: Player, health: f64) -> Self {
        Structure {
            position,
            kind,
            health,
            upgraded: false,
            owner,
            id: String::new(),
        }
    }

    pub fn upgraded(mut self) -> Self {
        self.upgraded = true;
        self
    }
}

// ── Resources ──────────────────────────────────────────────────────────

/// The two per-player budgets: structure points (SP) and mobile points (MP).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pools {
    pub structure: f64,
    pub mobile: f64,
}

impl Pools {
    pub fn new(structure: f64, mobile: f64) -> Self {
        Pools { structure, mobile }
    }

    pub fn covers(&self, cost: Cost) -> bool {
        self.structure >= cost.structure && self.mobile >= cost.mobile
    }

    pub fn spend(&mut self, cost: Cost) {
        self.structure -= cost.structure;
        self.mobile -= cost.mobile;
    }
}

/// Price of one placement or upgrade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    pub structure: f64,
    pub mobile: f64,
}

// ── Events ─────────────────────────────────────────────────────────────

/// A mobile unit reached the far edge of the board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreachEvent {
    pub location: Position,
    pub owner: Player,
    pub turn: u32,
}
