mod annotated;
mod day;
mod ids;
mod line;
mod patch;
mod period;

pub use annotated::*;
pub use day::*;
pub use ids::*;
pub use line::*;
pub use patch::*;
pub use period::*;
