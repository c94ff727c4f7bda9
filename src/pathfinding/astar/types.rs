//! A* pathfinding types.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, PathStep};

/// A node in the A* search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct AStarNode {
    pub coord: GridCoord,
    /// Accumulated step count from start
    pub g_cost: u32,
    /// Manhattan estimate to goal
    pub h_cost: u32,
}

impl AStarNode {
    #[inline]
    pub fn f_cost(&self) -> u32 {
        self.g_cost + self.h_cost
    }
}

impl Ord for AStarNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior. Ties on f prefer the node
        // closer to the goal; remaining ties break on coordinate order so
        // expansion is fully deterministic.
        other
            .f_cost()
            .cmp(&self.f_cost())
            .then_with(|| other.h_cost.cmp(&self.h_cost))
            .then_with(|| (other.coord.y, other.coord.x).cmp(&(self.coord.y, self.coord.x)))
    }
}

impl PartialOrd for AStarNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* pathfinding configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AStarConfig {
    /// Maximum number of nodes to expand before giving up
    pub max_iterations: usize,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
        }
    }
}

/// Result of A* pathfinding
#[derive(Clone, Debug, PartialEq)]
pub struct PathResult {
    /// Path steps from start to goal (empty if no path found)
    pub steps: Vec<PathStep>,
    /// Number of nodes expanded during search
    pub nodes_expanded: usize,
    /// Reason for failure (if any)
    pub failure: Option<PathFailure>,
}

impl PathResult {
    /// Create a failed result
    pub(super) fn failed(failure: PathFailure, nodes_expanded: usize) -> Self {
        Self {
            steps: Vec::new(),
            nodes_expanded,
            failure: Some(failure),
        }
    }

    /// Was the goal reachable? An unreachable goal is a valid outcome, not
    /// an error; callers use this to distinguish it from an empty request.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.failure.is_none()
    }

    /// Path length in cells (including the start cell)
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Is the path empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Reason for path failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathFailure {
    /// Start or goal is out of bounds
    OutOfBounds,
    /// Start position is not walkable
    StartBlocked,
    /// Goal position is not walkable
    GoalBlocked,
    /// No path exists between start and goal
    NoPath,
    /// Maximum iterations exceeded
    MaxIterationsExceeded,
}
