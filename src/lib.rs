#![deny(unsafe_code)]

//! A sparse N-dimensional grid.
//!
//! A [`Grid`] behaves as if every cell held a configured default value, but
//! only stores the cells that differ from it. Cells are indexed one
//! coordinate component at a time, ending in a [`CellAccessor`] that reads
//! and writes the cell:
//!
//! ```
//! use sparse_grid::Grid;
//!
//! let mut grid = Grid::<i32, 3>::new(-1);
//!
//! grid.at(0).at(1).at(2).commit(13);
//! grid.at(0).at(7).at(2).commit(88);
//!
//! assert_eq!(grid[[0, 1, 2]], 13);
//! assert_eq!(grid[[2, 1, 0]], -1);
//! assert_eq!(grid.len(), 2);
//!
//! grid.at(0).at(1).at(2).commit(-1);
//! assert_eq!(grid.len(), 1);
//! ```
//!
//! [`CellAccessor`]: access::CellAccessor

pub mod access;
pub mod error;
pub mod grid;
pub mod storage;

pub use grid::Grid;

pub mod prelude {
    //! `use sparse_grid::prelude::*;` imports the most commonly used types.

    pub use crate::access::{CellAccessor, Locator};
    pub use crate::error::DimensionMismatch;
    pub use crate::grid::{coord_from_slice, Coord, Grid};
}
