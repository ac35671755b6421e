mod dimension;
mod grid;

pub use dimension::*;
pub use grid::*;
