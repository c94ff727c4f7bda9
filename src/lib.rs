//! # Vithi-Nav: In-Store Navigation Engine
//!
//! A grid-based navigation library for retail stores: routes a shopper
//! from the entrance through a set of requested aisles to checkout, and
//! turns the raw cell path into zone-based directions suitable for map
//! rendering or speech synthesis.
//!
//! ## Quick Start
//!
//! ```rust
//! use vithi_nav::{GridCoord, NavConfig, Navigator, StoreLayout, Zone};
//!
//! let layout = StoreLayout {
//!     width: 20,
//!     height: 15,
//!     entrance: GridCoord::new(10, 0),
//!     checkout: GridCoord::new(17, 13),
//!     zones: vec![Zone {
//!         id: "dairy".to_string(),
//!         name: "Dairy".to_string(),
//!         origin: GridCoord::new(2, 2),
//!         width: 3,
//!         height: 2,
//!         products: vec!["milk".to_string()],
//!         color: None,
//!     }],
//! };
//!
//! let navigator = Navigator::new(layout, NavConfig::default());
//! let route = navigator.route(&["dairy"]);
//! assert!(!route.steps.is_empty());
//! ```
//!
//! ## Architecture
//!
//! The library is organized into modules:
//!
//! - [`core`]: Fundamental types (GridCoord, Direction, PathStep)
//! - [`layout`]: Static store definition (zones, landmarks) and YAML loading
//! - [`grid`]: Occupancy grid built from the layout
//! - [`pathfinding`]: A* search over the grid
//! - [`route`]: Multi-zone route composition
//! - [`narration`]: Zone-transition instruction generation
//! - [`config`]: Unified engine configuration
//!
//! ## Data Flow
//!
//! ```text
//! ┌──────────────┐      ┌───────────┐      ┌──────────────┐
//! │ StoreLayout  │─────►│ StoreGrid │─────►│  Pathfinder  │
//! │ (YAML, once) │      │  (build)  │      │ (A*, per leg)│
//! └──────────────┘      └───────────┘      └──────┬───────┘
//!                                                 │
//!                       ┌─────────────┐    ┌──────▼───────┐
//!                       │  Narrator   │◄───│RouteComposer │
//!                       │ (annotate)  │    │ (stitch legs)│
//!                       └──────┬──────┘    └──────────────┘
//!                              │
//!                              ▼
//!                    Vec<PathStep> for the
//!                    map renderer / voice layer
//! ```
//!
//! Computation is single-threaded, synchronous, and free of side effects;
//! the layout and grid are read-only snapshots, so independent calls are
//! safe from concurrent callers.

pub mod config;
pub mod core;
pub mod grid;
pub mod layout;
pub mod narration;
pub mod pathfinding;
pub mod route;

mod navigator;

// Re-export main types at crate root
pub use crate::core::{Direction, GridCoord, PathStep};
pub use config::{ConfigLoadError, NavConfig};
pub use grid::{Cell, StoreGrid};
pub use layout::{LayoutError, StoreLayout, Zone};
pub use narration::{NarrationConfig, Narrator};
pub use navigator::Navigator;
pub use pathfinding::{
    AStarConfig, AStarPlanner, PathFailure, PathResult, find_path, path_exists,
};
pub use route::{RouteComposer, RouteConfig, RouteResult, compose_route};
