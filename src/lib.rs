#![warn(missing_docs)]

//! # `slipgrid`
//!
//! A solver and validator for a sliding-block puzzle played on a fixed 5x5
//! grid. Rigid, axis-aligned polyomino pieces slide one cell at a time in
//! one of four directions, may not overlap each other or leave the grid, and
//! each move of a piece costs `5 - footprint`, so small pieces are expensive
//! to move and large pieces cheap. The task is to take the board from a
//! start layout to a goal layout within a cost budget, where the goal is
//! stated in piece *types* rather than individual piece identities, so
//! identically shaped pieces are interchangeable.
//!
//! Begin by building a [`Board`] with a [`BoardBuilder`] from two textual
//! layouts: the start layout labels cells by piece id, the goal layout by
//! type id. Call [`solve()`](Board::solve) with a cost budget to search for
//! a solution, and [`validate()`](Board::validate) to independently replay
//! any claimed move sequence. [`check()`](Board::check) does both and also
//! cross-checks the two costs against each other.
//!
//! # Internals
//!
//! The search is a round-synchronous frontier relaxation over canonical
//! board states. A state is encoded as a 25-digit string of type ids in
//! row-major order ([`Board::state_key`]), which canonicalizes over
//! interchangeable same-type pieces and doubles as both the memoization key
//! and the goal test. Each round drains the frontier, skips states whose key
//! has already been expanded at equal or better cost, and enqueues every
//! legal single-cell successor within the budget. Goal-reaching states are
//! collected across all rounds and one is chosen uniformly at random; this
//! is guaranteed minimum-cost only when the budget is tight enough that
//! nothing but minimum-cost solutions fit inside it.
//!
//! The validator shares no state with the search: it re-derives move
//! legality from scratch while replaying the path, so the two act as
//! independent implementations of the same rules.

pub use board::{Board, CheckError, PathError, BOARD_DIM};
pub use builder::{BoardBuilder, BuildError};
pub use location::Location;
pub use piece::{Piece, PieceId, TypeId};
pub use solver::{SolveError, Solution};
pub use step::Step;

pub(crate) mod board;
pub(crate) mod builder;
pub(crate) mod cell;
pub(crate) mod location;
pub(crate) mod piece;
pub(crate) mod solver;
pub(crate) mod step;
mod tests;
