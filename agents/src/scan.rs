// ═══════════════════════════════════════════════════════════════════════
// Gap scanner — column wavefront over the enemy half.
//
// Every column starts open. Sweeping left to right, a column is closed
// as soon as one of its candidate cells holds a structure. Candidates for
// the next column are the diagonal fan of every blocker found, widened
// past both ends of the vertical structure chain the blocker belongs to.
// A column with no blocker hands an unconstrained sweep to its successor.
//
// The scan only reads the board, so repeated scans of one snapshot agree.
// ═══════════════════════════════════════════════════════════════════════

use frontier_engine::board::BoardView;
use frontier_engine::map::{self, ARENA_SIZE, HALF_ARENA};
use frontier_engine::types::{Lane, Player, Position};
use serde::Serialize;
use std::collections::BTreeSet;

/// Which lanes the opponent's frontier leaves open, from our side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GapState {
    pub left: bool,
    pub right: bool,
}

impl GapState {
    pub fn is_open(&self, lane: Lane) -> bool {
        match lane {
            Lane::Left => self.left,
            Lane::Right => self.right,
        }
    }

    pub fn open_lanes(&self) -> Vec<Lane> {
        Lane::BOTH.into_iter().filter(|&l| self.is_open(l)).collect()
    }
}

impl std::fmt::Display for GapState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.left, self.right) {
            (true, true) => write!(f, "both"),
            (true, false) => write!(f, "left"),
            (false, true) => write!(f, "right"),
            (false, false) => write!(f, "none"),
        }
    }
}

/// Per-column openness across the full board width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierScan {
    open: [bool; ARENA_SIZE as usize],
}

impl Default for FrontierScan {
    fn default() -> Self {
        FrontierScan { open: [true; ARENA_SIZE as usize] }
    }
}

impl FrontierScan {
    pub fn is_open(&self, x: i32) -> bool {
        usize::try_from(x).ok().and_then(|i| self.open.get(i)).copied().unwrap_or(false)
    }

    pub fn closed_columns(&self) -> Vec<i32> {
        (0..ARENA_SIZE).filter(|&x| !self.is_open(x)).collect()
    }

    /// A lane is open when any of its columns is.
    pub fn gap_state(&self) -> GapState {
        GapState {
            left: (0..HALF_ARENA).any(|x| self.is_open(x)),
            right: (HALF_ARENA..ARENA_SIZE).any(|x| self.is_open(x)),
        }
    }
}

/// Outcome of scanning one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnStep {
    pub closed: bool,
    /// Candidates for the next column, already inside the enemy half.
    pub next: BTreeSet<Position>,
    pub full_scan_next: bool,
}

/// Scan column `x`. With `full_scan` set the whole enemy part of the
/// column is checked; otherwise only `candidates`.
pub fn advance_column(board: &BoardView, x: i32, candidates: &BTreeSet<Position>, full_scan: bool) -> ColumnStep {
    let checked: Vec<Position> = if full_scan {
        map::column_cells(x, Player::Enemy)
    } else {
        candidates.iter().copied().collect()
    };

    let mut step = ColumnStep { closed: false, next: BTreeSet::new(), full_scan_next: true };
    for cell in checked {
        if !board.is_occupied(cell) {
            continue;
        }
        step.closed = true;
        step.full_scan_next = false;
        for dy in -1..=1 {
            step.next.insert(Position::new(x + 1, cell.y + dy));
        }
        // Walk the vertical chain both ways; each link pushes the fan out by one
        let mut y = cell.y + 1;
        while board.is_occupied(Position::new(x, y)) {
            step.next.insert(Position::new(x + 1, y + 1));
            y += 1;
        }
        let mut y = cell.y - 1;
        while board.is_occupied(Position::new(x, y)) {
            step.next.insert(Position::new(x + 1, y - 1));
            y -= 1;
        }
    }
    step.next.retain(|p| map::half_of(*p) == Player::Enemy);
    step
}

pub fn scan_frontier(board: &BoardView) -> FrontierScan {
    let mut scan = FrontierScan::default();
    let mut candidates = BTreeSet::new();
    let mut full_scan = true;
    for x in 0..ARENA_SIZE {
        let step = advance_column(board, x, &candidates, full_scan);
        if step.closed {
            scan.open[x as usize] = false;
        }
        candidates = step.next;
        full_scan = step.full_scan_next;
    }
    tracing::debug!(closed = ?scan.closed_columns(), "frontier scanned");
    scan
}
