use std::collections::HashSet;

use crate::location::Location;

/// A deduplicating set of cell coordinates which iterates in insertion
/// order, so geometry derived from it is deterministic.
#[derive(Clone, Debug, Default)]
pub(crate) struct CellSet {
    members: HashSet<Location>,
    ordered: Vec<Location>,
}

impl CellSet {
    pub(crate) fn insert(&mut self, cell: Location) {
        if self.members.insert(cell) {
            self.ordered.push(cell);
        }
    }

    pub(crate) fn contains(&self, cell: Location) -> bool {
        self.members.contains(&cell)
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.ordered.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.ordered.len()
    }
}

impl FromIterator<Location> for CellSet {
    fn from_iter<T: IntoIterator<Item = Location>>(iter: T) -> Self {
        let mut set = Self::default();
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}
