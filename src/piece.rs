use std::fmt::{Display, Formatter};

use crate::cell::CellSet;
use crate::location::Location;

/// The identity of one physical piece, in `1..=9`.
///
/// This is the strong identifier used to address a piece in move-sequence
/// paths. It is deliberately distinct from [`TypeId`], which only groups
/// interchangeably shaped pieces.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PieceId(pub(crate) u8);

impl PieceId {
    /// The numeric id.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Index of this piece in its board's piece list.
    pub(crate) fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl Display for PieceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The equivalence class of a piece, in `1..=9`.
///
/// Pieces with identical shape and interchangeable role share a `TypeId`;
/// goal layouts and canonical state keys are expressed in these, so two
/// congruent pieces swapped between symmetric positions hash identically.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TypeId(pub(crate) u8);

impl TypeId {
    /// The numeric class id.
    pub fn get(self) -> u8 {
        self.0
    }

    pub(crate) fn digit(self) -> char {
        (b'0' + self.0) as char
    }
}

impl Display for TypeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable description of one rigid sliding piece.
///
/// Cell coordinates are relative to the top-left corner of the piece's
/// bounding rectangle; the piece's placement on the board is given
/// separately as the board location of that corner.
#[derive(Clone, Debug)]
pub struct Piece {
    pub(crate) id: PieceId,
    pub(crate) type_id: TypeId,
    pub(crate) cells: CellSet,
    /// Width and height of the tight bounding rectangle around `cells`.
    pub(crate) bound: Location,
    /// Top-left placement of the bounding rectangle in the start layout.
    pub(crate) start: Location,
    /// Cost charged per single-cell move of this piece.
    pub(crate) cost: u32,
}

impl Piece {
    /// The strong per-piece identifier.
    pub fn id(&self) -> PieceId {
        self.id
    }

    /// The equivalence class this piece belongs to.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Board position of the piece in the start layout.
    pub fn start(&self) -> Location {
        self.start
    }

    /// Cost of moving this piece one cell.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Number of cells in the piece's footprint.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Whether the piece, placed with its bounding-box corner at
    /// `position`, covers the board cell `at`.
    pub(crate) fn has_cell_at(&self, at: Location, position: Location) -> bool {
        // bounding box first for an early return
        if at.0 < position.0
            || at.0 > position.0 + self.bound.0 - 1
            || at.1 < position.1
            || at.1 > position.1 + self.bound.1 - 1
        {
            return false;
        }
        self.cells
            .contains(Location(at.0 - position.0, at.1 - position.1))
    }
}
