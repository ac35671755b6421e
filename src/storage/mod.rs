mod iter;
mod store;

pub use iter::*;
pub use store::*;
