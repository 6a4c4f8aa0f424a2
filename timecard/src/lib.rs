mod clock;
pub mod config;
pub mod domain;
mod error;
mod validation;

pub use clock::*;
pub use domain::*;
pub use error::*;
pub use validation::*;
