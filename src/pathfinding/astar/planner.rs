//! A* planner implementation.

use std::collections::{BinaryHeap, HashMap, HashSet};

use log::{debug, trace};

use crate::core::{Direction, GridCoord, PathStep};
use crate::grid::StoreGrid;

use super::types::{AStarConfig, AStarNode, PathFailure, PathResult};

/// A* pathfinder over a store grid
pub struct AStarPlanner<'a> {
    grid: &'a StoreGrid,
    config: AStarConfig,
}

impl<'a> AStarPlanner<'a> {
    /// Create a new A* planner
    pub fn new(grid: &'a StoreGrid, config: AStarConfig) -> Self {
        Self { grid, config }
    }

    /// Create with default configuration
    pub fn with_defaults(grid: &'a StoreGrid) -> Self {
        Self::new(grid, AStarConfig::default())
    }

    /// Find a shortest path from start to goal.
    ///
    /// Movement is 4-connected with uniform cost, so the Manhattan
    /// heuristic is admissible and consistent and the returned path is
    /// optimal. Failure is reported in the result, never as a panic.
    pub fn find_path(&self, start: GridCoord, goal: GridCoord) -> PathResult {
        trace!(
            "[AStar] find_path: start=({},{}) goal=({},{})",
            start.x, start.y, goal.x, goal.y
        );

        if !self.grid.is_valid_coord(start) || !self.grid.is_valid_coord(goal) {
            debug!("[AStar] FAILED: OutOfBounds - start or goal outside grid");
            return PathResult::failed(PathFailure::OutOfBounds, 0);
        }
        if !self.grid.is_walkable(start) {
            debug!("[AStar] FAILED: StartBlocked at ({},{})", start.x, start.y);
            return PathResult::failed(PathFailure::StartBlocked, 0);
        }
        if !self.grid.is_walkable(goal) {
            debug!("[AStar] FAILED: GoalBlocked at ({},{})", goal.x, goal.y);
            return PathResult::failed(PathFailure::GoalBlocked, 0);
        }

        let mut open_set = BinaryHeap::new();
        let mut closed_set: HashSet<GridCoord> = HashSet::new();
        let mut came_from: HashMap<GridCoord, GridCoord> = HashMap::new();
        let mut g_scores: HashMap<GridCoord, u32> = HashMap::new();

        open_set.push(AStarNode {
            coord: start,
            g_cost: 0,
            h_cost: start.manhattan_distance(&goal) as u32,
        });
        g_scores.insert(start, 0);

        let mut nodes_expanded = 0;

        while let Some(current) = open_set.pop() {
            nodes_expanded += 1;

            if nodes_expanded > self.config.max_iterations {
                debug!(
                    "[AStar] FAILED: MaxIterationsExceeded ({} nodes)",
                    nodes_expanded
                );
                return PathResult::failed(PathFailure::MaxIterationsExceeded, nodes_expanded);
            }

            // Goal reached
            if current.coord == goal {
                return self.reconstruct_path(&came_from, goal, nodes_expanded);
            }

            // Stale heap entry for an already finalized cell
            if closed_set.contains(&current.coord) {
                continue;
            }
            closed_set.insert(current.coord);

            for neighbor in current.coord.neighbors_4() {
                if closed_set.contains(&neighbor) {
                    continue;
                }
                // Covers both bounds and shelving
                if !self.grid.is_walkable(neighbor) {
                    continue;
                }

                let tentative_g = g_scores[&current.coord] + 1;
                let known_g = g_scores.get(&neighbor).copied().unwrap_or(u32::MAX);
                if tentative_g < known_g {
                    came_from.insert(neighbor, current.coord);
                    g_scores.insert(neighbor, tentative_g);
                    open_set.push(AStarNode {
                        coord: neighbor,
                        g_cost: tentative_g,
                        h_cost: neighbor.manhattan_distance(&goal) as u32,
                    });
                }
            }
        }

        debug!(
            "[AStar] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        PathResult::failed(PathFailure::NoPath, nodes_expanded)
    }

    /// Reconstruct the path from the came_from map and attach directions.
    fn reconstruct_path(
        &self,
        came_from: &HashMap<GridCoord, GridCoord>,
        goal: GridCoord,
        nodes_expanded: usize,
    ) -> PathResult {
        let mut coords = Vec::new();
        let mut current = goal;

        while let Some(&prev) = came_from.get(&current) {
            coords.push(current);
            current = prev;
        }
        coords.push(current); // Add start
        coords.reverse();

        let steps = coords
            .iter()
            .enumerate()
            .map(|(i, &coord)| PathStep {
                position: coord,
                direction: if i == 0 {
                    None
                } else {
                    Direction::between(coords[i - 1], coord)
                },
                instruction: None,
            })
            .collect::<Vec<_>>();

        trace!(
            "[AStar] SUCCESS: path length={} cells, nodes_expanded={}",
            steps.len(),
            nodes_expanded
        );

        PathResult {
            steps,
            nodes_expanded,
            failure: None,
        }
    }
}
