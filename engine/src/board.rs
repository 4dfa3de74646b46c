// ═══════════════════════════════════════════════════════════════════════
// Board view — read-only snapshot of the stationary structures on the
// board, keyed by cell. Ordered so that every iteration is deterministic.
// ═══════════════════════════════════════════════════════════════════════

use crate::types::*;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardView {
    cells: BTreeMap<Position, Structure>,
}

impl BoardView {
    /// Build a view from reported structures. A cell reported twice keeps
    /// the last report.
    pub fn new(structures: impl IntoIterator<Item = Structure>) -> Self {
        BoardView {
            cells: structures.into_iter().map(|s| (s.position, s)).collect(),
        }
    }

    pub fn structure_at(&self, pos: Position) -> Option<&Structure> {
        self.cells.get(&pos)
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.cells.contains_key(&pos)
    }

    pub fn structures(&self) -> impl Iterator<Item = &Structure> + '_ {
        self.cells.values()
    }

    pub fn structures_of(&self, owner: Player) -> impl Iterator<Item = &Structure> + '_ {
        self.cells.values().filter(move |s| s.owner == owner)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub(crate) fn place(&mut self, structure: Structure) {
        self.cells.insert(structure.position, structure);
    }

    pub(crate) fn structure_at_mut(&mut self, pos: Position) -> Option<&mut Structure> {
        self.cells.get_mut(&pos)
    }
}
