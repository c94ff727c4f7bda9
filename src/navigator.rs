//! High-level navigation facade.

use crate::config::NavConfig;
use crate::core::GridCoord;
use crate::grid::StoreGrid;
use crate::layout::StoreLayout;
use crate::narration::Narrator;
use crate::pathfinding::{AStarPlanner, PathResult};
use crate::route::{RouteComposer, RouteResult};

/// One-stop route engine for a single store.
///
/// Owns the immutable layout, the grid built from it, and the engine
/// configuration. Every call on `&self` is an independent, deterministic
/// computation over those read-only snapshots, so a `Navigator` can be
/// shared across request handlers without synchronization. The host layer
/// decides when to (re)compute a route; no route state lives in here.
///
/// ```rust,no_run
/// use vithi_nav::{NavConfig, Navigator, StoreLayout};
///
/// let layout = StoreLayout::load(std::path::Path::new("configs/store.yaml")).unwrap();
/// let navigator = Navigator::new(layout, NavConfig::default());
///
/// let route = navigator.route(&["dairy", "produce"]);
/// for step in &route.steps {
///     if let Some(text) = &step.instruction {
///         println!("{}", text);
///     }
/// }
/// ```
pub struct Navigator {
    layout: StoreLayout,
    grid: StoreGrid,
    config: NavConfig,
}

impl Navigator {
    /// Build the grid from the layout and keep both for routing
    pub fn new(layout: StoreLayout, config: NavConfig) -> Self {
        let grid = StoreGrid::build(&layout);
        Self {
            layout,
            grid,
            config,
        }
    }

    /// Create with default configuration
    pub fn with_defaults(layout: StoreLayout) -> Self {
        Self::new(layout, NavConfig::default())
    }

    /// Compose and narrate a route through the requested zones in order.
    pub fn route(&self, zone_ids: &[&str]) -> RouteResult {
        let composer = RouteComposer::new(&self.grid, &self.layout, self.config.to_route_config());
        let mut result = composer.compose(zone_ids);

        let narrator = Narrator::new(&self.layout, self.config.to_narration_config());
        result.steps = narrator.annotate(&result.steps);
        result
    }

    /// Raw point-to-point path on this store's grid.
    pub fn find_path(&self, start: GridCoord, goal: GridCoord) -> PathResult {
        AStarPlanner::new(&self.grid, self.config.to_astar_config()).find_path(start, goal)
    }

    /// The store layout
    pub fn layout(&self) -> &StoreLayout {
        &self.layout
    }

    /// The built occupancy grid
    pub fn grid(&self) -> &StoreGrid {
        &self.grid
    }
}
