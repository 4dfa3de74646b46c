// ═══════════════════════════════════════════════════════════════════════
// Static board geometry — the 28×28 diamond arena.
// Nothing here changes during a game.
// ═══════════════════════════════════════════════════════════════════════

use crate::types::{Player, Position};

pub const ARENA_SIZE: i32 = 28;
pub const HALF_ARENA: i32 = 14;

// ── Rows ───────────────────────────────────────────────────────────────

/// Inclusive x range of row `y`, or None for rows off the board.
pub fn row_span(y: i32) -> Option<(i32, i32)> {
    if !(0..ARENA_SIZE).contains(&y) {
        return None;
    }
    if y < HALF_ARENA {
        Some((HALF_ARENA - 1 - y, HALF_ARENA + y))
    } else {
        Some((y - HALF_ARENA, ARENA_SIZE - 1 - (y - HALF_ARENA)))
    }
}

pub fn in_bounds(pos: Position) -> bool {
    row_span(pos.y).is_some_and(|(lo, hi)| (lo..=hi).contains(&pos.x))
}

/// Which player's half a row belongs to.
pub fn half_of(pos: Position) -> Player {
    if pos.y < HALF_ARENA { Player::Me } else { Player::Enemy }
}

pub fn rows_of(player: Player) -> std::ops::Range<i32> {
    match player {
        Player::Me => 0..HALF_ARENA,
        Player::Enemy => HALF_ARENA..ARENA_SIZE,
    }
}

// ── Columns & halves ───────────────────────────────────────────────────

/// Every on-board cell of column `x` inside `player`'s half, bottom to top.
pub fn column_cells(x: i32, player: Player) -> Vec<Position> {
    rows_of(player)
        .map(|y| Position::new(x, y))
        .filter(|&p| in_bounds(p))
        .collect()
}

/// Every on-board cell of `player`'s half, row by row.
pub fn half_cells(player: Player) -> Vec<Position> {
    rows_of(player)
        .flat_map(|y| {
            let (lo, hi) = row_span(y).unwrap_or((0, -1));
            (lo..=hi).map(move |x| Position::new(x, y))
        })
        .collect()
}

// ── Edges ──────────────────────────────────────────────────────────────
// Mobile units spawn on their owner's two bottom edges and walk toward
// the opposite edges.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    TopRight,
    TopLeft,
    BottomLeft,
    BottomRight,
}

pub fn edge_cells(edge: Edge) -> Vec<Position> {
    (0..HALF_ARENA)
        .map(|i| match edge {
            Edge::TopRight => Position::new(HALF_ARENA + i, ARENA_SIZE - 1 - i),
            Edge::TopLeft => Position::new(HALF_ARENA - 1 - i, ARENA_SIZE - 1 - i),
            Edge::BottomLeft => Position::new(HALF_ARENA - 1 - i, i),
            Edge::BottomRight => Position::new(HALF_ARENA + i, i),
        })
        .collect()
}

pub fn friendly_edges() -> Vec<Position> {
    let mut cells = edge_cells(Edge::BottomLeft);
    cells.extend(edge_cells(Edge::BottomRight));
    cells
}

pub fn is_friendly_edge(pos: Position) -> bool {
    pos.y >= 0 && pos.y < HALF_ARENA
        && (pos.x == HALF_ARENA - 1 - pos.y || pos.x == HALF_ARENA + pos.y)
}
