//! Store occupancy grid.

mod storage;

pub use storage::{Cell, StoreGrid};
