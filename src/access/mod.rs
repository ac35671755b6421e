mod cell;
mod locator;

pub use cell::*;
pub use locator::*;
