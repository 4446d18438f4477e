use std::fmt::{Display, Formatter};

use ndarray::Array2;
use thiserror::Error;
use tracing::trace;

use crate::location::{Coord, Location};
use crate::piece::{Piece, PieceId};
use crate::solver::{BudgetSolver, Solution, SolveError};
use crate::step::Step;

/// The board is fixed at 5x5.
pub const BOARD_DIM: usize = 5;

/// Moving a piece costs `COST_PARAM` minus its footprint size.
pub(crate) const COST_PARAM: u32 = 5;

/// Ways a move-sequence path can fail validation.
///
/// Every variant carries enough context to pinpoint the fault: the offending
/// character and its index for format errors, or the one-based move number,
/// two-character move code and piece id(s) for replay errors.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum PathError {
    /// The path cannot be split into (piece, direction) pairs.
    #[error("path has odd length {0}")]
    OddLength(usize),
    /// A character where a piece id digit was expected.
    #[error("invalid piece character {ch:?} at position {pos}")]
    BadPieceChar {
        /// The offending character.
        ch: char,
        /// Byte position of the character within the path.
        pos: usize,
    },
    /// A piece id digit naming no piece on this board.
    #[error("piece id {id} at position {pos} is not on this board ({count} pieces)")]
    UnknownPiece {
        /// The decoded piece id.
        id: u8,
        /// Byte position of the digit within the path.
        pos: usize,
        /// Number of pieces on the board.
        count: usize,
    },
    /// A character where a direction code was expected.
    #[error("unrecognized direction {ch:?} at position {pos}")]
    BadDirection {
        /// The offending character.
        ch: char,
        /// Byte position of the character within the path.
        pos: usize,
    },
    /// A move that would slide part of a piece outside the board.
    #[error("move {move_num} ({code}) takes piece {piece} off of the board")]
    OffBoard {
        /// One-based index of the move within the path.
        move_num: usize,
        /// The two-character move code.
        code: String,
        /// The piece being moved.
        piece: PieceId,
    },
    /// A move that would overlap two pieces.
    #[error("move {move_num} ({code}) has a collision between pieces {piece} and {other}")]
    Collision {
        /// One-based index of the move within the path.
        move_num: usize,
        /// The two-character move code.
        code: String,
        /// The piece being moved.
        piece: PieceId,
        /// The lowest-id piece it would overlap.
        other: PieceId,
    },
    /// The replayed path was legal throughout but its final state does not
    /// match the goal layout.
    #[error("path does not reach the goal state")]
    GoalMismatch,
}

/// Ways a cross-check of a search result can fail.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum CheckError {
    /// The solution's path failed validation outright.
    #[error(transparent)]
    Invalid(#[from] PathError),
    /// The path is legal and reaches the goal, but the validator's
    /// recomputed cost disagrees with the cost the search reported. This
    /// indicates an internal inconsistency between the two algorithms, not
    /// an ordinary bad path.
    #[error("search reported cost {searched} but validation recomputed {validated}")]
    CostMismatch {
        /// Cost claimed by the search.
        searched: u32,
        /// Cost recomputed by the validator.
        validated: u32,
    },
}

/// The rules engine: an ordered set of [`Piece`]s plus the goal layout.
///
/// A `Board` is immutable once built ([`BoardBuilder`](crate::BoardBuilder))
/// and holds no per-search state, so independent searches and validations
/// may share one board freely.
#[derive(Debug)]
pub struct Board {
    /// Pieces, indexed as piece id - 1.
    pub(crate) pieces: Vec<Piece>,
    /// Goal occupancy by type id, 0 meaning the cell must be empty.
    pub(crate) goal: Array2<u8>,
}

impl Board {
    /// The pieces on this board, ordered by id.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// The piece with the given id, if it is on this board.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    /// Positions of all pieces in the start layout.
    pub fn start_positions(&self) -> Vec<Location> {
        self.pieces.iter().map(|p| p.start).collect()
    }

    /// Whether moving `piece` one cell in direction `step` is legal given
    /// the current `positions` of all pieces: no part of the piece may leave
    /// the board or coincide with a cell of any other piece.
    pub fn can_move(&self, piece: PieceId, step: Step, positions: &[Location]) -> bool {
        debug_assert_eq!(positions.len(), self.pieces.len());
        let mover = &self.pieces[piece.index()];
        let moved = positions[piece.index()].offset_by(step.offset());
        let dim = BOARD_DIM as Coord;
        if moved.0 < 0
            || moved.0 + mover.bound.0 > dim
            || moved.1 < 0
            || moved.1 + mover.bound.1 > dim
        {
            return false;
        }

        let bottom_right = moved.offset_by((mover.bound.0 - 1, mover.bound.1 - 1));
        for (other_index, other) in self.pieces.iter().enumerate() {
            if other_index == piece.index() {
                continue;
            }
            // skip per-cell testing when the bounding boxes are disjoint
            let other_pos = positions[other_index];
            let other_br = other_pos.offset_by((other.bound.0 - 1, other.bound.1 - 1));
            if !bounds_overlap(moved, bottom_right, other_pos, other_br) {
                continue;
            }
            for cell in mover.cells.iter() {
                if other.has_cell_at(cell.offset_by((moved.0, moved.1)), other_pos) {
                    return false;
                }
            }
        }
        true
    }

    /// Occupancy of the board by type id given piece `positions`.
    fn occupancy(&self, positions: &[Location]) -> Array2<u8> {
        let mut grid = Array2::zeros((BOARD_DIM, BOARD_DIM));
        for (piece, position) in self.pieces.iter().zip(positions) {
            for cell in piece.cells.iter() {
                let at = cell.offset_by((position.0, position.1));
                grid[(at.1 as usize, at.0 as usize)] = piece.type_id.0;
            }
        }
        grid
    }

    /// The canonical 25-digit key of the state given by `positions`: one
    /// digit per cell in row-major order holding the occupying piece's type
    /// id, `0` for empty. Two arrangements differing only by which of
    /// several same-type pieces sits where share a key, which is what makes
    /// this usable for search memoization and goal testing.
    pub(crate) fn state_key(&self, positions: &[Location]) -> String {
        self.occupancy(positions)
            .iter()
            .map(|t| (b'0' + t) as char)
            .collect()
    }

    /// The goal layout under the same encoding as [`Board::state_key`].
    pub(crate) fn goal_key(&self) -> String {
        self.goal.iter().map(|t| (b'0' + t) as char).collect()
    }

    /// Whether the occupancy produced by `positions` matches the goal
    /// layout by type id.
    pub(crate) fn matches_goal(&self, positions: &[Location]) -> bool {
        self.occupancy(positions) == self.goal
    }

    /// Render the board as layout text, with each piece at the position
    /// given in `positions`, labelled by type id when `by_type` is set and
    /// by piece id otherwise.
    pub fn render(&self, positions: &[Location], by_type: bool) -> String {
        let mut out = String::with_capacity(BOARD_DIM * (BOARD_DIM + 1));
        for y in 0..BOARD_DIM as Coord {
            for x in 0..BOARD_DIM as Coord {
                let at = Location(x, y);
                let occupant = self
                    .pieces
                    .iter()
                    .zip(positions)
                    .find(|(piece, position)| piece.has_cell_at(at, **position));
                out.push(match occupant {
                    Some((piece, _)) if by_type => piece.type_id.digit(),
                    Some((piece, _)) => (b'0' + piece.id.0) as char,
                    None => '.',
                });
            }
            out.push('\n');
        }
        out
    }

    /// Search for a move sequence reaching the goal layout without the
    /// accumulated cost exceeding `budget`.
    ///
    /// The search is a round-synchronous frontier relaxation: each round
    /// expands every queued state whose canonical key has not already been
    /// seen at equal or better cost, and goal-reaching states accumulate
    /// across all rounds. On success one of them is returned, chosen
    /// uniformly at random; within a budget tight enough that only
    /// minimum-cost solutions are reachable, that is a minimum-cost
    /// solution. Exhausting the budget is a normal negative outcome, not a
    /// panic.
    pub fn solve(&self, budget: u32) -> Result<Solution, SolveError> {
        BudgetSolver::new(self, budget).solve()
    }

    /// Replay an arbitrary move-sequence `path` from the start layout,
    /// re-deriving every legality rule, and return its total cost.
    ///
    /// The replay is independent of the search: it decodes the path, moves
    /// one piece per pair, and fails with a descriptive [`PathError`] on the
    /// first malformed pair, off-board move, collision, or a final state
    /// that does not match the goal.
    pub fn validate(&self, path: &str) -> Result<u32, PathError> {
        if path.len() % 2 != 0 {
            return Err(PathError::OddLength(path.len()));
        }

        let chars: Vec<char> = path.chars().collect();
        let mut moves = Vec::with_capacity(chars.len() / 2);
        for (i, pair) in chars.chunks(2).enumerate() {
            let pos = i * 2;
            let piece = match pair[0].to_digit(10) {
                None => return Err(PathError::BadPieceChar { ch: pair[0], pos }),
                Some(d) if d == 0 || d as usize > self.pieces.len() => {
                    return Err(PathError::UnknownPiece {
                        id: d as u8,
                        pos,
                        count: self.pieces.len(),
                    })
                }
                Some(d) => PieceId(d as u8),
            };
            let step = Step::from_code(pair[1]).ok_or(PathError::BadDirection {
                ch: pair[1],
                pos: pos + 1,
            })?;
            moves.push((piece, step));
        }

        let mut positions = self.start_positions();
        let mut cost = 0u32;
        trace!(cost, "starting state\n{}", self.render(&positions, false));
        let dim = BOARD_DIM as Coord;
        for (i, (piece_id, step)) in moves.into_iter().enumerate() {
            let move_num = i + 1;
            let code: String = [(b'0' + piece_id.0) as char, step.code()].iter().collect();
            let mover = &self.pieces[piece_id.index()];
            let next = positions[piece_id.index()].offset_by(step.offset());

            for cell in mover.cells.iter() {
                let at = cell.offset_by((next.0, next.1));
                if at.0 < 0 || at.0 >= dim || at.1 < 0 || at.1 >= dim {
                    return Err(PathError::OffBoard {
                        move_num,
                        code,
                        piece: piece_id,
                    });
                }
            }
            for (other_index, other) in self.pieces.iter().enumerate() {
                if other_index == piece_id.index() {
                    continue;
                }
                for cell in mover.cells.iter() {
                    let at = cell.offset_by((next.0, next.1));
                    if other.has_cell_at(at, positions[other_index]) {
                        return Err(PathError::Collision {
                            move_num,
                            code,
                            piece: piece_id,
                            other: other.id,
                        });
                    }
                }
            }

            cost += mover.cost;
            positions[piece_id.index()] = next;
            trace!(
                move_num,
                code = %code,
                cost,
                "applied move\n{}",
                self.render(&positions, false)
            );
        }

        if !self.matches_goal(&positions) {
            return Err(PathError::GoalMismatch);
        }
        Ok(cost)
    }

    /// Cross-check a search result: validate its path and compare the
    /// validator's recomputed cost against the cost the search claims.
    ///
    /// A disagreement between the two costs is reported as
    /// [`CheckError::CostMismatch`], distinct from an ordinary validation
    /// failure, since it means the search and the validator disagree about
    /// the same move sequence.
    pub fn check(&self, solution: &Solution) -> Result<u32, CheckError> {
        let validated = self.validate(solution.path())?;
        if validated != solution.cost() {
            return Err(CheckError::CostMismatch {
                searched: solution.cost(),
                validated,
            });
        }
        Ok(validated)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(&self.start_positions(), false))
    }
}

/// Whether two axis-aligned rectangles, each given by top-left and
/// bottom-right corners, overlap at any point.
fn bounds_overlap(a_tl: Location, a_br: Location, b_tl: Location, b_br: Location) -> bool {
    a_tl.0 <= b_br.0 && b_tl.0 <= a_br.0 && a_tl.1 <= b_br.1 && b_tl.1 <= a_br.1
}
