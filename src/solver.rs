use std::collections::HashMap;

use rand::seq::IndexedRandom;
use strum::VariantArray;
use thiserror::Error;
use tracing::debug;

use crate::board::Board;
use crate::location::Location;
use crate::step::Step;

/// Reasons a search may fail.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SolveError {
    /// Every state reachable within the cost budget was expanded without
    /// finding the goal. A normal negative outcome of a tight budget.
    #[error("no solution found within a cost budget of {budget}")]
    NoSolution {
        /// The budget the search was run with.
        budget: u32,
    },
}

/// A goal-reaching state found by the solver: the final piece positions,
/// the accumulated cost, and the move-sequence path that produced them.
#[derive(Clone, Debug)]
pub struct Solution {
    pub(crate) positions: Vec<Location>,
    pub(crate) cost: u32,
    pub(crate) path: String,
}

impl Solution {
    /// Final positions of all pieces, ordered by piece id.
    pub fn positions(&self) -> &[Location] {
        &self.positions
    }

    /// Total cost of the move sequence.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// The move sequence as concatenated (piece digit, direction code)
    /// pairs, e.g. `"3D4L"`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Number of moves in the path.
    pub fn moves(&self) -> usize {
        self.path.len() / 2
    }
}

/// A budgeted search over the states of one [`Board`].
///
/// The frontier is expanded in rounds rather than in cost order: each round
/// drains the queue, drops states whose canonical key has already been seen
/// at equal or better cost, and enqueues every legal successor within the
/// budget for the next round. Successors matching the goal key are collected
/// instead of expanded, across all rounds, and the solver finishes by
/// picking one of them uniformly at random.
///
/// All search state (the memo table and the two queues) lives inside the
/// [`solve`](BudgetSolver::solve) invocation; the board itself is only read.
pub(crate) struct BudgetSolver<'a> {
    board: &'a Board,
    budget: u32,
}

impl<'a> BudgetSolver<'a> {
    pub(crate) fn new(board: &'a Board, budget: u32) -> Self {
        Self { board, budget }
    }

    pub(crate) fn solve(&self) -> Result<Solution, SolveError> {
        let goal_key = self.board.goal_key();
        let mut seen: HashMap<String, u32> = HashMap::new();
        let mut reached: Vec<Solution> = Vec::new();
        let mut queue_next = vec![Solution {
            positions: self.board.start_positions(),
            cost: 0,
            path: String::new(),
        }];

        let mut round = 1usize;
        while !queue_next.is_empty() {
            debug!(round, frontier = queue_next.len(), "expanding frontier");
            round += 1;
            let queue = std::mem::take(&mut queue_next);
            for state in queue {
                // stale-branch pruning: a cheaper path to this key has
                // already been expanded
                let key = self.board.state_key(&state.positions);
                match seen.get(&key) {
                    Some(&cost) if cost < state.cost => continue,
                    _ => {
                        seen.insert(key, state.cost);
                    }
                }

                for (index, piece) in self.board.pieces.iter().enumerate() {
                    for step in Step::VARIANTS {
                        if !self.board.can_move(piece.id, *step, &state.positions) {
                            continue;
                        }
                        let next_cost = state.cost + piece.cost;
                        if next_cost > self.budget {
                            continue;
                        }
                        let mut next_positions = state.positions.clone();
                        next_positions[index] = next_positions[index].offset_by(step.offset());
                        let mut next_path =
                            String::with_capacity(state.path.len() + 2);
                        next_path.push_str(&state.path);
                        next_path.push((b'0' + piece.id.0) as char);
                        next_path.push(step.code());

                        let next_key = self.board.state_key(&next_positions);
                        if next_key == goal_key {
                            reached.push(Solution {
                                positions: next_positions,
                                cost: next_cost,
                                path: next_path,
                            });
                            continue;
                        }
                        match seen.get(&next_key) {
                            Some(&cost) if cost <= next_cost => {}
                            _ => {
                                seen.insert(next_key, next_cost);
                                queue_next.push(Solution {
                                    positions: next_positions,
                                    cost: next_cost,
                                    path: next_path,
                                });
                            }
                        }
                    }
                }
            }
        }

        debug!(reached = reached.len(), "search exhausted");
        reached
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(SolveError::NoSolution {
                budget: self.budget,
            })
    }
}
