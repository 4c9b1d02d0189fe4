pub use error::Error;
pub use solution::{Candidate, ObjectiveDirection, Solution};

pub mod dominance;
pub mod error;
pub mod solution;
pub mod utils;
