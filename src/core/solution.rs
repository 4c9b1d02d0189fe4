use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// An objective vector with one signed 64-bit component per objective. Partial solutions use the
/// same representation as completed ones; an empty construction is the zero vector.
pub type Solution = Vec<i64>;

/// Whether the objectives should be minimised or maximised. Default is maximise.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectiveDirection {
    /// Minimise all objectives.
    Minimise,
    #[default]
    /// Maximise all objectives.
    Maximise,
}

impl Display for ObjectiveDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectiveDirection::Minimise => f.write_str("minimised"),
            ObjectiveDirection::Maximise => f.write_str("maximised"),
        }
    }
}

/// A one-step extension of a partial solution, scored by the hypervolume contribution of its
/// bound vector. Candidates with a zero contribution are filtered out before they reach the
/// restricted candidate list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// The identifier of the extension (an item index for the knapsack, an edge index for the
    /// spanning tree).
    pub id: usize,
    /// The hypervolume contribution of the extension's bound vector.
    pub contribution: i64,
}

impl Candidate {
    /// Create a new candidate extension.
    ///
    /// # Arguments
    ///
    /// * `id`: The extension identifier.
    /// * `contribution`: The hypervolume contribution of the extension's bound vector.
    ///
    /// returns: `Candidate`
    pub fn new(id: usize, contribution: i64) -> Self {
        Self { id, contribution }
    }
}

impl Display for Candidate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Candidate: ({}, {})", self.id, self.contribution)
    }
}
