pub mod body;
pub mod chart;
pub mod time;

pub use body::*;
pub use chart::*;
pub use time::*;
