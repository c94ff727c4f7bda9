//! Path planning on the store grid.
//!
//! ```rust,ignore
//! use vithi_nav::pathfinding::{AStarPlanner, AStarConfig};
//!
//! let planner = AStarPlanner::new(&grid, AStarConfig::default());
//! let result = planner.find_path(start, goal);
//! if result.is_reachable() {
//!     println!("Path found with {} steps", result.len());
//! }
//! ```

pub mod astar;

pub use astar::{AStarConfig, AStarPlanner, PathFailure, PathResult, find_path, path_exists};
