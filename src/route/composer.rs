//! Multi-zone route composition.
//!
//! Stitches independent A* legs (entrance → zone₁ → … → zoneₙ → checkout)
//! into one continuous path. Zones that cannot be resolved or reached are
//! soft failures: they are skipped with a warning and reported back to the
//! caller, so a misconfigured zone never aborts a shopper's whole route.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, PathStep};
use crate::grid::StoreGrid;
use crate::layout::{StoreLayout, Zone};
use crate::pathfinding::{AStarConfig, AStarPlanner};

/// Route composition configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Maximum chebyshev radius searched around a zone center for a
    /// walkable target cell
    pub target_search_radius: i32,
    /// A* settings used for each leg
    pub astar: AStarConfig,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            target_search_radius: 5,
            astar: AStarConfig::default(),
        }
    }
}

/// A composed route plus the zones that had to be skipped.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteResult {
    /// Continuous path from entrance to checkout
    pub steps: Vec<PathStep>,
    /// Requested zone ids that could not be visited
    pub skipped: Vec<String>,
}

impl RouteResult {
    /// Route length in cells (including the entrance cell)
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Is the route empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Composes multi-zone routes over a built grid.
pub struct RouteComposer<'a> {
    grid: &'a StoreGrid,
    layout: &'a StoreLayout,
    config: RouteConfig,
}

impl<'a> RouteComposer<'a> {
    /// Create a new composer
    pub fn new(grid: &'a StoreGrid, layout: &'a StoreLayout, config: RouteConfig) -> Self {
        Self {
            grid,
            layout,
            config,
        }
    }

    /// Create with default configuration
    pub fn with_defaults(grid: &'a StoreGrid, layout: &'a StoreLayout) -> Self {
        Self::new(grid, layout, RouteConfig::default())
    }

    /// Compose a route visiting the requested zones in the given order.
    ///
    /// An empty request still yields the direct entrance → checkout path.
    /// The shared junction cell between consecutive legs appears exactly
    /// once in the output.
    pub fn compose(&self, zone_ids: &[&str]) -> RouteResult {
        let planner = AStarPlanner::new(self.grid, self.config.astar.clone());
        let mut steps: Vec<PathStep> = Vec::new();
        let mut skipped: Vec<String> = Vec::new();

        let mut current = self.grid.entrance();
        for &id in zone_ids {
            let Some(zone) = self.layout.zone(id) else {
                warn!("[Route] unknown zone '{}' requested; skipping", id);
                skipped.push(id.to_string());
                continue;
            };
            let Some(target) = self.resolve_target(zone) else {
                warn!(
                    "[Route] no walkable cell within radius {} of zone '{}'; skipping",
                    self.config.target_search_radius, id
                );
                skipped.push(id.to_string());
                continue;
            };

            let leg = planner.find_path(current, target);
            if leg.is_empty() {
                warn!(
                    "[Route] zone '{}' target ({},{}) unreachable from ({},{}); skipping",
                    id, target.x, target.y, current.x, current.y
                );
                skipped.push(id.to_string());
                continue;
            }
            Self::append_leg(&mut steps, leg.steps);
            current = target;
        }

        let leg = planner.find_path(current, self.grid.checkout());
        if leg.is_empty() {
            warn!(
                "[Route] checkout ({},{}) unreachable from ({},{})",
                self.grid.checkout().x,
                self.grid.checkout().y,
                current.x,
                current.y
            );
        } else {
            Self::append_leg(&mut steps, leg.steps);
        }

        debug!(
            "[Route] composed {} steps over {} requested zones ({} skipped)",
            steps.len(),
            zone_ids.len(),
            skipped.len()
        );
        RouteResult { steps, skipped }
    }

    /// Resolve a walkable target cell for a zone.
    ///
    /// The zone's geometric center is usually inside the shelving and
    /// therefore non-walkable, so the search expands in square rings
    /// around it until a walkable in-bounds cell appears. Scan order is
    /// fixed, so resolution is deterministic.
    pub fn resolve_target(&self, zone: &Zone) -> Option<GridCoord> {
        let center = zone.center();
        if self.grid.is_walkable(center) {
            return Some(center);
        }

        for radius in 1..=self.config.target_search_radius {
            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    if dx.abs().max(dy.abs()) != radius {
                        continue;
                    }
                    let candidate = GridCoord::new(center.x + dx, center.y + dy);
                    if self.grid.is_walkable(candidate) {
                        return Some(candidate);
                    }
                }
            }
        }
        None
    }

    /// Append a leg, dropping its first step when it duplicates the
    /// previous leg's final position.
    fn append_leg(steps: &mut Vec<PathStep>, leg: Vec<PathStep>) {
        if steps.is_empty() {
            steps.extend(leg);
        } else {
            steps.extend(leg.into_iter().skip(1));
        }
    }
}

/// Compose a route with default configuration
pub fn compose_route(grid: &StoreGrid, layout: &StoreLayout, zone_ids: &[&str]) -> RouteResult {
    RouteComposer::with_defaults(grid, layout).compose(zone_ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathfinding::find_path;

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

    fn layout() -> StoreLayout {
        StoreLayout {
            width: 20,
            height: 15,
            entrance: GridCoord::new(10, 0),
            checkout: GridCoord::new(17, 13),
            zones: vec![zone("dairy", (2, 2), 3, 2), zone("produce", (12, 6), 4, 3)],
        }
    }

    fn assert_no_adjacent_duplicates(steps: &[PathStep]) {
        for pair in steps.windows(2) {
            assert_ne!(pair[0].position, pair[1].position);
        }
    }

    #[test]
    fn test_empty_request_routes_entrance_to_checkout() {
        let layout = layout();
        let grid = StoreGrid::build(&layout);
        let result = compose_route(&grid, &layout, &[]);

        assert!(result.skipped.is_empty());
        assert_eq!(result.steps[0].position, grid.entrance());
        assert_eq!(result.steps.last().unwrap().position, grid.checkout());
    }

    #[test]
    fn test_route_prefix_matches_first_leg() {
        let layout = layout();
        let grid = StoreGrid::build(&layout);
        let composer = RouteComposer::with_defaults(&grid, &layout);

        let target = composer
            .resolve_target(layout.zone("dairy").unwrap())
            .unwrap();
        let leg = find_path(&grid, grid.entrance(), target);
        let route = composer.compose(&["dairy"]);

        assert_eq!(&route.steps[..leg.len()], &leg.steps[..]);
    }

    #[test]
    fn test_junction_cells_appear_once() {
        let layout = layout();
        let grid = StoreGrid::build(&layout);
        let route = compose_route(&grid, &layout, &["dairy", "produce"]);

        assert!(route.skipped.is_empty());
        assert_no_adjacent_duplicates(&route.steps);
        // Contiguity survives stitching
        for pair in route.steps.windows(2) {
            assert_eq!(pair[0].position.manhattan_distance(&pair[1].position), 1);
        }
    }

    #[test]
    fn test_target_resolves_adjacent_to_zone() {
        let layout = layout();
        let grid = StoreGrid::build(&layout);
        let composer = RouteComposer::with_defaults(&grid, &layout);

        let dairy = layout.zone("dairy").unwrap();
        let target = composer.resolve_target(dairy).unwrap();
        // Center (3,3) sits inside the shelving; the target must be a
        // nearby walkable cell
        assert!(grid.is_walkable(target));
        assert!(dairy.center().chebyshev_distance(&target) <= 5);
    }

    #[test]
    fn test_unknown_zone_is_skipped() {
        let layout = layout();
        let grid = StoreGrid::build(&layout);
        let route = compose_route(&grid, &layout, &["bakery", "dairy"]);

        assert_eq!(route.skipped, vec!["bakery"]);
        assert!(!route.steps.is_empty());
    }

    #[test]
    fn test_walled_in_zone_is_skipped() {
        // A 13x13 block fully swallows its own center beyond radius 5
        let mut layout = layout();
        layout.zones = vec![zone("fortress", (3, 1), 13, 13)];
        let grid = StoreGrid::build(&layout);
        let route = compose_route(&grid, &layout, &["fortress"]);

        assert_eq!(route.skipped, vec!["fortress"]);
        // Route still reaches checkout around the block
        assert_eq!(route.steps.last().unwrap().position, grid.checkout());
    }

    #[test]
    fn test_compose_is_idempotent() {
        let layout = layout();
        let grid = StoreGrid::build(&layout);
        let composer = RouteComposer::with_defaults(&grid, &layout);

        let first = composer.compose(&["produce", "dairy"]);
        let second = composer.compose(&["produce", "dairy"]);
        assert_eq!(first, second);
    }
}
