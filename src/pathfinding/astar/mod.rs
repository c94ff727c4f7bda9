//! A* pathfinding algorithm.
//!
//! Implements A* search on the store grid:
//! - 4-connected movement only (shoppers move along aisles, no diagonals)
//! - Uniform step cost with a Manhattan heuristic, so paths are optimal
//! - Deterministic tie-breaking, so identical inputs yield identical paths

mod planner;
mod types;

pub use planner::AStarPlanner;
pub use types::{AStarConfig, PathFailure, PathResult};

use crate::core::GridCoord;
use crate::grid::StoreGrid;

/// Quick path finding with default configuration
pub fn find_path(grid: &StoreGrid, start: GridCoord, goal: GridCoord) -> PathResult {
    let planner = AStarPlanner::with_defaults(grid);
    planner.find_path(start, goal)
}

/// Check if a path exists (same search, existence only)
pub fn path_exists(grid: &StoreGrid, start: GridCoord, goal: GridCoord) -> bool {
    find_path(grid, start, goal).is_reachable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PathStep;
    use crate::layout::{StoreLayout, Zone};

    fn open_layout() -> StoreLayout {
        StoreLayout {
            width: 20,
            height: 15,
            entrance: GridCoord::new(10, 0),
            checkout: GridCoord::new(17, 13),
            zones: Vec::new(),
        }
    }

    fn zone(id: &str, origin: (i32, i32), width: u32, height: u32) -> Zone {
        Zone {
            id: id.to_string(),
            name: id.to_string(),
            origin: GridCoord::new(origin.0, origin.1),
            width,
            height,
            products: Vec::new(),
            color: None,
        }
    }

    fn assert_contiguous(steps: &[PathStep]) {
        for pair in steps.windows(2) {
            assert_eq!(
                pair[0].position.manhattan_distance(&pair[1].position),
                1,
                "steps ({},{}) -> ({},{}) are not one orthogonal move apart",
                pair[0].position.x,
                pair[0].position.y,
                pair[1].position.x,
                pair[1].position.y
            );
        }
    }

    #[test]
    fn test_open_grid_path_is_manhattan_optimal() {
        let grid = crate::grid::StoreGrid::build(&open_layout());
        let start = GridCoord::new(10, 0);
        let goal = GridCoord::new(17, 13);

        let result = find_path(&grid, start, goal);

        assert!(result.is_reachable());
        // Moves = Manhattan distance, steps include the start cell
        assert_eq!(result.len(), start.manhattan_distance(&goal) as usize + 1);
        assert_eq!(result.steps[0].position, start);
        assert_eq!(result.steps.last().unwrap().position, goal);
        assert_contiguous(&result.steps);
    }

    #[test]
    fn test_path_around_obstacle_is_longer() {
        let mut layout = open_layout();
        // Wall spanning nearly the full width, forcing a detour
        layout.zones = vec![zone("wall", (0, 6), 19, 1)];
        let grid = crate::grid::StoreGrid::build(&layout);

        let start = GridCoord::new(10, 0);
        let goal = GridCoord::new(10, 13);
        let result = find_path(&grid, start, goal);

        assert!(result.is_reachable());
        assert!(result.len() > start.manhattan_distance(&goal) as usize + 1);
        assert_contiguous(&result.steps);
    }

    #[test]
    fn test_no_path_through_full_wall() {
        let mut layout = open_layout();
        layout.zones = vec![zone("wall", (0, 6), 20, 1)];
        let grid = crate::grid::StoreGrid::build(&layout);

        let result = find_path(&grid, GridCoord::new(10, 0), GridCoord::new(10, 13));

        assert!(!result.is_reachable());
        assert!(result.is_empty());
        assert_eq!(result.failure, Some(PathFailure::NoPath));
    }

    #[test]
    fn test_start_equals_goal() {
        let grid = crate::grid::StoreGrid::build(&open_layout());
        let p = GridCoord::new(5, 5);

        let result = find_path(&grid, p, p);

        assert!(result.is_reachable());
        assert_eq!(result.len(), 1);
        assert_eq!(result.steps[0].position, p);
        assert_eq!(result.steps[0].direction, None);
    }

    #[test]
    fn test_start_blocked() {
        let mut layout = open_layout();
        layout.zones = vec![zone("shelf", (4, 4), 2, 2)];
        let grid = crate::grid::StoreGrid::build(&layout);

        let result = find_path(&grid, GridCoord::new(4, 4), GridCoord::new(0, 0));
        assert_eq!(result.failure, Some(PathFailure::StartBlocked));
        assert!(result.is_empty());
    }

    #[test]
    fn test_goal_blocked() {
        let mut layout = open_layout();
        layout.zones = vec![zone("shelf", (4, 4), 2, 2)];
        let grid = crate::grid::StoreGrid::build(&layout);

        let result = find_path(&grid, GridCoord::new(0, 0), GridCoord::new(5, 5));
        assert_eq!(result.failure, Some(PathFailure::GoalBlocked));
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = crate::grid::StoreGrid::build(&open_layout());
        let result = find_path(&grid, GridCoord::new(-1, 0), GridCoord::new(5, 5));
        assert_eq!(result.failure, Some(PathFailure::OutOfBounds));

        let result = find_path(&grid, GridCoord::new(0, 0), GridCoord::new(20, 5));
        assert_eq!(result.failure, Some(PathFailure::OutOfBounds));
    }

    #[test]
    fn test_directions_match_positions() {
        let grid = crate::grid::StoreGrid::build(&open_layout());
        let result = find_path(&grid, GridCoord::new(3, 3), GridCoord::new(6, 7));

        assert!(result.is_reachable());
        assert_eq!(result.steps[0].direction, None);
        for pair in result.steps.windows(2) {
            assert_eq!(
                pair[1].direction,
                crate::core::Direction::between(pair[0].position, pair[1].position)
            );
            assert!(pair[1].direction.is_some());
        }
    }

    #[test]
    fn test_search_is_deterministic() {
        let mut layout = open_layout();
        layout.zones = vec![zone("a", (4, 3), 3, 4), zone("b", (10, 7), 5, 2)];
        let grid = crate::grid::StoreGrid::build(&layout);

        let first = find_path(&grid, GridCoord::new(0, 0), GridCoord::new(19, 14));
        let second = find_path(&grid, GridCoord::new(0, 0), GridCoord::new(19, 14));
        assert_eq!(first, second);
    }

    #[test]
    fn test_path_exists() {
        let mut layout = open_layout();
        layout.zones = vec![zone("wall", (0, 6), 20, 1)];
        let grid = crate::grid::StoreGrid::build(&layout);

        assert!(path_exists(&grid, GridCoord::new(0, 0), GridCoord::new(19, 5)));
        assert!(!path_exists(
            &grid,
            GridCoord::new(0, 0),
            GridCoord::new(0, 14)
        ));
    }
}
