pub mod counter;
pub mod history;
pub mod timed;

pub use counter::*;
pub use history::*;
pub use timed::*;
