mod dispatcher;
pub use dispatcher::*;
mod dynamic;
pub use dynamic::*;
mod error;
pub use error::*;
mod greedy;
pub use greedy::*;
mod item_set;
pub use item_set::*;
mod solution;
pub use solution::*;
