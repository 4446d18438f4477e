use std::fmt::{Display, Formatter};

pub(crate) type Coord = isize;

/// A location `(x, y)` on a board. The top left corner is `Location(0, 0)`.
///
/// Coordinates are signed so that a location one step outside the board can
/// be represented while testing move legality.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn offset_by(self, rhs: (Coord, Coord)) -> Self {
        Self(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
