//! Algorithms over graph views.

pub mod visits;

mod components;
pub use components::*;

mod enumerate;
pub use enumerate::*;

mod reachable;
pub use reachable::*;

mod subgraphs;
pub use subgraphs::*;

mod top_sort;
pub use top_sort::*;
