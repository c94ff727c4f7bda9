//! Occupancy grid built from a store layout.
//!
//! The grid is a flat row-major array of cells, built once from the static
//! layout and never mutated afterwards. Shoppers walk on open floor cells;
//! zone rectangles are solid shelving and therefore non-walkable.

use std::collections::HashSet;

use log::warn;

use crate::core::{GridCoord, PathStep};
use crate::layout::StoreLayout;

/// One cell of the store grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Can a shopper occupy/traverse this cell?
    pub walkable: bool,
    /// Index of the zone covering this cell, if any (declaration order)
    pub zone: Option<u16>,
    /// Is this the entrance cell?
    pub entrance: bool,
    /// Is this the checkout cell?
    pub checkout: bool,
}

impl Cell {
    fn open() -> Self {
        Self {
            walkable: true,
            zone: None,
            entrance: false,
            checkout: false,
        }
    }

    /// Single character representation for debugging
    pub fn as_char(&self) -> char {
        if self.entrance {
            'E'
        } else if self.checkout {
            'C'
        } else if self.zone.is_some() {
            '#'
        } else {
            '.'
        }
    }
}

/// Fixed-size occupancy grid for one store.
#[derive(Clone, Debug)]
pub struct StoreGrid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    entrance: GridCoord,
    checkout: GridCoord,
}

impl StoreGrid {
    /// Build the grid from a layout. Deterministic, pure function of its
    /// input.
    ///
    /// Every cell defaults to walkable. Zone rectangles become non-walkable
    /// and zone-tagged, clipped to grid bounds; when two zones claim the
    /// same cell the later zone wins and a warning is logged. The entrance
    /// and checkout cells are flagged for annotation only and stay walkable
    /// even when a zone rectangle covers them.
    pub fn build(layout: &StoreLayout) -> StoreGrid {
        let width = layout.width as usize;
        let height = layout.height as usize;
        let mut cells = vec![Cell::open(); width * height];

        let mut warned_pairs: HashSet<(u16, u16)> = HashSet::new();
        for (idx, zone) in layout.zones.iter().enumerate() {
            let idx = idx as u16;
            for y in zone.origin.y..zone.origin.y + zone.height as i32 {
                for x in zone.origin.x..zone.origin.x + zone.width as i32 {
                    let coord = GridCoord::new(x, y);
                    if !layout.in_bounds(coord) {
                        continue;
                    }
                    let cell = &mut cells[y as usize * width + x as usize];
                    if let Some(prev) = cell.zone {
                        if prev != idx && warned_pairs.insert((prev, idx)) {
                            warn!(
                                "[Grid] zone '{}' overlaps '{}' at ({},{}); later zone wins",
                                zone.id, layout.zones[prev as usize].id, x, y
                            );
                        }
                    }
                    cell.walkable = false;
                    cell.zone = Some(idx);
                }
            }
        }

        let mut grid = StoreGrid {
            cells,
            width,
            height,
            entrance: layout.entrance,
            checkout: layout.checkout,
        };
        grid.place_landmark(layout, layout.entrance, true);
        grid.place_landmark(layout, layout.checkout, false);
        grid
    }

    fn place_landmark(&mut self, layout: &StoreLayout, coord: GridCoord, is_entrance: bool) {
        let width = self.width;
        let cell = &mut self.cells[coord.y as usize * width + coord.x as usize];
        if let Some(idx) = cell.zone {
            warn!(
                "[Grid] zone '{}' covers the {} cell ({},{}); cell kept walkable",
                layout.zones[idx as usize].id,
                if is_entrance { "entrance" } else { "checkout" },
                coord.x,
                coord.y
            );
            cell.zone = None;
        }
        cell.walkable = true;
        if is_entrance {
            cell.entrance = true;
        } else {
            cell.checkout = true;
        }
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Entrance cell
    #[inline]
    pub fn entrance(&self) -> GridCoord {
        self.entrance
    }

    /// Checkout cell
    #[inline]
    pub fn checkout(&self) -> GridCoord {
        self.checkout
    }

    /// Check if grid coordinates are within bounds
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Cell at a coordinate, if in bounds
    #[inline]
    pub fn cell(&self, coord: GridCoord) -> Option<&Cell> {
        if self.is_valid_coord(coord) {
            Some(&self.cells[coord.y as usize * self.width + coord.x as usize])
        } else {
            None
        }
    }

    /// Can a shopper occupy this cell? Out-of-bounds coordinates are not
    /// walkable.
    #[inline]
    pub fn is_walkable(&self, coord: GridCoord) -> bool {
        self.cell(coord).map(|c| c.walkable).unwrap_or(false)
    }

    /// Zone index covering a cell, if any
    #[inline]
    pub fn zone_index_at(&self, coord: GridCoord) -> Option<u16> {
        self.cell(coord).and_then(|c| c.zone)
    }

    /// Render the grid as ASCII art, overlaying a route with `*`.
    pub fn ascii_map(&self, route: &[PathStep]) -> String {
        let on_route: HashSet<GridCoord> = route.iter().map(|s| s.position).collect();
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let coord = GridCoord::new(x as i32, y as i32);
                let cell = &self.cells[y * self.width + x];
                if on_route.contains(&coord) && !cell.entrance && !cell.checkout {
                    out.push('*');
                } else {
                    out.push(cell.as_char());
                }
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Zone;

    fn layout_with_zones(zones: Vec<Zone>) -> StoreLayout {
        StoreLayout {
            width: 20,
            height: 15,
            entrance: GridCoord::new(10, 0),
            checkout: GridCoord::new(17, 13),
            zones,
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

    #[test]
    fn test_empty_layout_is_all_walkable() {
        let grid = StoreGrid::build(&layout_with_zones(Vec::new()));
        assert_eq!(grid.cell_count(), 300);
        for y in 0..15 {
            for x in 0..20 {
                assert!(grid.is_walkable(GridCoord::new(x, y)));
            }
        }
    }

    #[test]
    fn test_zone_cells_blocked_and_tagged() {
        let grid = StoreGrid::build(&layout_with_zones(vec![zone("dairy", (2, 2), 3, 2)]));

        for y in 2..4 {
            for x in 2..5 {
                let coord = GridCoord::new(x, y);
                assert!(!grid.is_walkable(coord));
                assert_eq!(grid.zone_index_at(coord), Some(0));
            }
        }
        // Just outside the rectangle
        assert!(grid.is_walkable(GridCoord::new(5, 2)));
        assert!(grid.is_walkable(GridCoord::new(2, 4)));
    }

    #[test]
    fn test_out_of_range_zone_is_clipped() {
        let grid = StoreGrid::build(&layout_with_zones(vec![zone("edge", (18, 13), 5, 5)]));
        assert!(!grid.is_walkable(GridCoord::new(19, 14)));
        // The overflowing part simply does not exist
        assert!(!grid.is_valid_coord(GridCoord::new(20, 14)));
        assert!(!grid.is_valid_coord(GridCoord::new(18, 15)));
    }

    #[test]
    fn test_overlap_last_writer_wins() {
        let grid = StoreGrid::build(&layout_with_zones(vec![
            zone("a", (2, 2), 3, 3),
            zone("b", (4, 4), 3, 3),
        ]));
        assert_eq!(grid.zone_index_at(GridCoord::new(4, 4)), Some(1));
        assert_eq!(grid.zone_index_at(GridCoord::new(2, 2)), Some(0));
    }

    #[test]
    fn test_landmarks_stay_walkable_under_zone() {
        let grid = StoreGrid::build(&layout_with_zones(vec![zone("wall", (9, 0), 3, 2)]));
        let entrance = GridCoord::new(10, 0);
        assert!(grid.is_walkable(entrance));
        assert_eq!(grid.zone_index_at(entrance), None);
        assert!(grid.cell(entrance).unwrap().entrance);
        // The rest of the rectangle is still blocked
        assert!(!grid.is_walkable(GridCoord::new(9, 0)));
        assert!(!grid.is_walkable(GridCoord::new(10, 1)));
    }

    #[test]
    fn test_landmark_flags() {
        let grid = StoreGrid::build(&layout_with_zones(Vec::new()));
        assert!(grid.cell(GridCoord::new(10, 0)).unwrap().entrance);
        assert!(grid.cell(GridCoord::new(17, 13)).unwrap().checkout);
        assert!(!grid.cell(GridCoord::new(0, 0)).unwrap().entrance);
    }

    #[test]
    fn test_ascii_map() {
        let grid = StoreGrid::build(&layout_with_zones(vec![zone("dairy", (2, 2), 3, 2)]));
        let art = grid.ascii_map(&[]);
        let lines: Vec<&str> = art.lines().collect();
        assert_eq!(lines.len(), 15);
        assert_eq!(&lines[2][2..5], "###");
        assert_eq!(&lines[0][10..11], "E");
        assert_eq!(&lines[13][17..18], "C");
    }
}
