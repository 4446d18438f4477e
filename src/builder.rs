use std::collections::HashMap;

use itertools::Itertools;
use ndarray::Array2;
use thiserror::Error;

use crate::board::{Board, BOARD_DIM, COST_PARAM};
use crate::cell::CellSet;
use crate::location::{Coord, Location};
use crate::piece::{Piece, PieceId, TypeId};

/// Reasons layout text and type assignments cannot be turned into a
/// [`Board`]. These are configuration errors: no board exists past them.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum BuildError {
    /// The layout does not have exactly five non-blank rows.
    #[error("layout has {found} rows, expected {expected}")]
    WrongRowCount {
        /// Rows found in the layout text.
        found: usize,
        /// Rows required.
        expected: usize,
    },
    /// A row of the layout does not have exactly five characters.
    #[error("row {row} has {found} columns, expected {expected}")]
    WrongRowLength {
        /// One-based row number.
        row: usize,
        /// Columns found on the row.
        found: usize,
        /// Columns required.
        expected: usize,
    },
    /// A layout character other than `.` or a digit `1`-`9`.
    #[error("invalid character {ch:?} at row {row}, column {col}")]
    BadCharacter {
        /// The offending character.
        ch: char,
        /// One-based row number.
        row: usize,
        /// One-based column number.
        col: usize,
    },
    /// The start layout contains no piece cells at all.
    #[error("start layout declares no pieces")]
    NoPieces,
    /// A piece id below the highest declared one has no cells.
    #[error("piece ids must be contiguous from 1: piece {piece} has no cells")]
    MissingPiece {
        /// The absent piece id.
        piece: PieceId,
    },
    /// A declared piece was given no type assignment.
    #[error("no type id assigned to piece {piece}")]
    MissingType {
        /// The piece without a type.
        piece: PieceId,
    },
    /// A type assignment outside `1..=9`.
    #[error("piece {piece} assigned invalid type id {type_id}")]
    BadType {
        /// The piece the assignment was for.
        piece: PieceId,
        /// The rejected type id.
        type_id: u8,
    },
    /// A piece whose footprint is too large for the cost rule to charge it
    /// at least 1 per move.
    #[error("piece {piece} covers {cells} cells, more than the supported {max}")]
    PieceTooLarge {
        /// The oversized piece.
        piece: PieceId,
        /// Cells in its footprint.
        cells: usize,
        /// Largest supported footprint.
        max: usize,
    },
}

/// Builds a [`Board`] from textual layouts.
///
/// The start layout labels cells by piece id, the goal layout by type id;
/// `.` marks an empty cell. Each declared piece must be assigned a type with
/// [`assign_type`](BoardBuilder::assign_type) before
/// [`build`](BoardBuilder::build).
///
/// ```
/// use slipgrid::BoardBuilder;
///
/// let board = BoardBuilder::new(
///     "11...
///      .....
///      .....
///      .....
///      .....",
///     ".....
///      11...
///      .....
///      .....
///      .....",
/// )
/// .assign_type(1, 1)
/// .build()
/// .unwrap();
/// assert_eq!(board.pieces().len(), 1);
/// ```
#[derive(Clone)]
pub struct BoardBuilder {
    start: String,
    goal: String,
    types: HashMap<u8, u8>,
}

impl BoardBuilder {
    /// Construct a builder from start and goal layout text.
    pub fn new(start: &str, goal: &str) -> Self {
        Self {
            start: start.to_owned(),
            goal: goal.to_owned(),
            types: HashMap::new(),
        }
    }

    /// Assign the equivalence class `type_id` to the piece labelled `piece`
    /// in the start layout. Later assignments for the same piece replace
    /// earlier ones.
    pub fn assign_type(&mut self, piece: u8, type_id: u8) -> &mut Self {
        self.types.insert(piece, type_id);
        self
    }

    /// Parse the layouts and produce an immutable [`Board`].
    pub fn build(&self) -> Result<Board, BuildError> {
        let start = parse_layout(&self.start)?;
        let goal = parse_layout(&self.goal)?;

        let piece_count = start.iter().copied().max().unwrap_or(0);
        if piece_count == 0 {
            return Err(BuildError::NoPieces);
        }

        let mut pieces = Vec::with_capacity(piece_count as usize);
        for id in 1..=piece_count {
            let piece = PieceId(id);
            let type_id = match self.types.get(&id) {
                None => return Err(BuildError::MissingType { piece }),
                Some(&t) if !(1..=9).contains(&t) => {
                    return Err(BuildError::BadType {
                        piece,
                        type_id: t,
                    })
                }
                Some(&t) => TypeId(t),
            };

            // row-major scan, so cell insertion order is deterministic
            let cells_abs = start
                .indexed_iter()
                .filter(|(_, &label)| label == id)
                .map(|((y, x), _)| Location(x as Coord, y as Coord))
                .collect_vec();
            if cells_abs.is_empty() {
                return Err(BuildError::MissingPiece { piece });
            }
            let max = COST_PARAM as usize - 1;
            if cells_abs.len() > max {
                return Err(BuildError::PieceTooLarge {
                    piece,
                    cells: cells_abs.len(),
                    max,
                });
            }

            let (min_x, max_x) = match cells_abs.iter().map(|c| c.0).minmax() {
                itertools::MinMaxResult::NoElements => unreachable!(),
                itertools::MinMaxResult::OneElement(only) => (only, only),
                itertools::MinMaxResult::MinMax(min, max) => (min, max),
            };
            let (min_y, max_y) = match cells_abs.iter().map(|c| c.1).minmax() {
                itertools::MinMaxResult::NoElements => unreachable!(),
                itertools::MinMaxResult::OneElement(only) => (only, only),
                itertools::MinMaxResult::MinMax(min, max) => (min, max),
            };

            let cells: CellSet = cells_abs
                .iter()
                .map(|c| Location(c.0 - min_x, c.1 - min_y))
                .collect();

            pieces.push(Piece {
                id: piece,
                type_id,
                cost: COST_PARAM - cells.len() as u32,
                bound: Location(max_x - min_x + 1, max_y - min_y + 1),
                start: Location(min_x, min_y),
                cells,
            });
        }

        Ok(Board { pieces, goal })
    }
}

/// Parse a five-row layout into a grid of labels, `0` for empty. Blank
/// lines and surrounding whitespace on each row are ignored.
fn parse_layout(text: &str) -> Result<Array2<u8>, BuildError> {
    let rows = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect_vec();
    if rows.len() != BOARD_DIM {
        return Err(BuildError::WrongRowCount {
            found: rows.len(),
            expected: BOARD_DIM,
        });
    }

    let mut flat = Vec::with_capacity(BOARD_DIM * BOARD_DIM);
    for (y, row) in rows.iter().enumerate() {
        if row.chars().count() != BOARD_DIM {
            return Err(BuildError::WrongRowLength {
                row: y + 1,
                found: row.chars().count(),
                expected: BOARD_DIM,
            });
        }
        for (x, ch) in row.chars().enumerate() {
            flat.push(match ch {
                '.' => 0,
                '1'..='9' => ch as u8 - b'0',
                _ => {
                    return Err(BuildError::BadCharacter {
                        ch,
                        row: y + 1,
                        col: x + 1,
                    })
                }
            });
        }
    }

    // dimensions were just checked, so the reshape cannot fail
    Ok(Array2::from_shape_vec((BOARD_DIM, BOARD_DIM), flat).unwrap())
}
