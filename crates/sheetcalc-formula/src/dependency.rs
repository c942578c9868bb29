//! Dependency tracking for formula cells
//!
//! Back-links only: for each cell, the set of formula cells that read it.
//! Nothing walks these links to push recalculation, they exist for
//! inspection, persistence and safe removal.

use ahash::{AHashMap, AHashSet};
use sheetcalc_core::CellAddress;

/// Dependents graph keyed by address
///
/// Cell → Cells whose formula references it. Links are addresses, not
/// ownership: dropping a link never touches either cell.
#[derive(Debug, Default, Clone)]
pub struct DependencyGraph {
    dependents: AHashMap<CellAddress, AHashSet<CellAddress>>,
}

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `dependent` reads `precedent`
    pub fn add_dependent(&mut self, precedent: CellAddress, dependent: CellAddress) {
        self.dependents
            .entry(precedent)
            .or_default()
            .insert(dependent);
    }

    /// Forget that `dependent` reads `precedent`
    pub fn remove_dependent(&mut self, precedent: &CellAddress, dependent: &CellAddress) {
        if let Some(deps) = self.dependents.get_mut(precedent) {
            deps.remove(dependent);
            if deps.is_empty() {
                self.dependents.remove(precedent);
            }
        }
    }

    /// Register `formula_cell` as a dependent of each of `references`
    pub fn link(&mut self, formula_cell: CellAddress, references: &[CellAddress]) {
        for precedent in references {
            self.add_dependent(*precedent, formula_cell);
        }
    }

    /// Remove `formula_cell` from the dependents of each of `references`
    pub fn unlink(&mut self, formula_cell: &CellAddress, references: &[CellAddress]) {
        for precedent in references {
            self.remove_dependent(precedent, formula_cell);
        }
    }

    /// Replace the dependents of `cell` wholesale, as persisted
    pub fn seed<I: IntoIterator<Item = CellAddress>>(&mut self, cell: CellAddress, dependents: I) {
        let set: AHashSet<CellAddress> = dependents.into_iter().collect();
        if set.is_empty() {
            self.dependents.remove(&cell);
        } else {
            self.dependents.insert(cell, set);
        }
    }

    /// Get cells that depend on the given cell, in address order
    pub fn dependents(&self, cell: &CellAddress) -> Vec<CellAddress> {
        let mut deps: Vec<CellAddress> = self
            .dependents
            .get(cell)
            .into_iter()
            .flat_map(|set| set.iter().copied())
            .collect();
        deps.sort();
        deps
    }

    /// Whether any formula reads the given cell
    pub fn has_dependents(&self, cell: &CellAddress) -> bool {
        self.dependents.get(cell).map_or(false, |set| !set.is_empty())
    }

    /// Clear the entire graph
    pub fn clear(&mut self) {
        self.dependents.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cell(s: &str) -> CellAddress {
        CellAddress::parse(s).unwrap()
    }

    #[test]
    fn test_add_remove_dependent() {
        let mut graph = DependencyGraph::new();
        let c1 = cell("C1");

        graph.add_dependent(c1, cell("A1"));
        graph.add_dependent(c1, cell("B1"));
        graph.add_dependent(c1, cell("D1"));
        assert_eq!(graph.dependents(&c1).len(), 3);

        graph.remove_dependent(&c1, &cell("B1"));
        assert_eq!(graph.dependents(&c1), vec![cell("A1"), cell("D1")]);
    }

    #[test]
    fn test_link_and_unlink() {
        let mut graph = DependencyGraph::new();
        let refs = [cell("A1"), cell("A2")];

        graph.link(cell("B1"), &refs);
        graph.link(cell("B2"), &refs[..1]);
        assert_eq!(graph.dependents(&cell("A2")), vec![cell("B1")]);
        assert_eq!(graph.dependents(&cell("A1")), vec![cell("B1"), cell("B2")]);

        graph.unlink(&cell("B1"), &refs);
        assert_eq!(graph.dependents(&cell("A1")), vec![cell("B2")]);
        assert!(!graph.has_dependents(&cell("A2")));
    }

    #[test]
    fn test_removing_unknown_link_is_noop() {
        let mut graph = DependencyGraph::new();
        graph.remove_dependent(&cell("A1"), &cell("B1"));
        assert!(!graph.has_dependents(&cell("A1")));
    }

    #[test]
    fn test_seed() {
        let mut graph = DependencyGraph::new();
        graph.add_dependent(cell("A1"), cell("Z9"));

        graph.seed(cell("A1"), vec![cell("C3"), cell("B2")]);
        assert_eq!(graph.dependents(&cell("A1")), vec![cell("B2"), cell("C3")]);

        graph.seed(cell("A1"), Vec::new());
        assert!(!graph.has_dependents(&cell("A1")));
    }
}
