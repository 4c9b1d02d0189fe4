use rand::RngCore;

pub use mokp::{Item, MultiObjectiveKnapsack};
pub use momst::{Edge, MultiObjectiveSpanningTree};

use crate::core::{Candidate, Error, Solution};
use crate::metrics::HypervolumeIndicator;

mod mokp;
mod momst;

/// Read the next whitespace-delimited token as a signed integer.
pub(crate) fn next_int<'a, I: Iterator<Item = &'a str>>(
    tokens: &mut I,
    what: &str,
) -> Result<i64, Error> {
    let token = tokens
        .next()
        .ok_or_else(|| Error::ParseInstance(format!("the {what} is missing")))?;
    token
        .parse()
        .map_err(|_| Error::ParseInstance(format!("the {what} '{token}' is not an integer")))
}

/// Read the next whitespace-delimited token as a non-negative count.
pub(crate) fn next_count<'a, I: Iterator<Item = &'a str>>(
    tokens: &mut I,
    what: &str,
) -> Result<usize, Error> {
    let value = next_int(tokens, what)?;
    usize::try_from(value)
        .map_err(|_| Error::ParseInstance(format!("the {what} '{value}' is negative")))
}

/// Read an optional trailing solution set: nothing when the stream is exhausted, otherwise a
/// size followed by that many rows of `arity` integers.
pub(crate) fn read_optional_set<'a, I: Iterator<Item = &'a str>>(
    tokens: &mut I,
    arity: usize,
    what: &str,
) -> Result<Vec<Solution>, Error> {
    let Some(token) = tokens.next() else {
        return Ok(Vec::new());
    };
    let size: usize = token.parse().map_err(|_| {
        Error::ParseInstance(format!("the size of the {what} '{token}' is not a count"))
    })?;
    (0..size)
        .map(|row| {
            (0..arity)
                .map(|j| next_int(tokens, &format!("value {j} of {what} row {row}")))
                .collect()
        })
        .collect()
}

/// The capability set a combinatorial problem must expose to the GRASP driver. The driver builds
/// a solution by repeatedly asking for ranked candidate extensions, restricting them to the
/// candidate list within `alpha` of the best score, and committing a uniformly random pick until
/// no extension with a positive hypervolume contribution remains.
pub trait Problem {
    /// The problem name.
    ///
    /// returns: `String`
    fn name(&self) -> String;

    /// The number of objectives.
    ///
    /// returns: `usize`
    fn number_of_objectives(&self) -> usize;

    /// Restore the working state (partial solution, bookkeeping, bounds) to its initial
    /// condition. Called by the driver at the start of every iteration.
    fn reset(&mut self);

    /// An objective vector of zeros.
    ///
    /// returns: `Solution`
    fn empty_solution(&self) -> Solution;

    /// The reference point anchoring the hypervolume indicator for this problem.
    ///
    /// returns: `Solution`
    fn reference_point(&self) -> Solution;

    /// The precomputed ground-truth non-dominated set, when the instance carries one. Used only
    /// for terminal validation and statistics.
    ///
    /// returns: `&[Solution]`
    fn nondominated_set(&self) -> &[Solution];

    /// Produce every feasible one-step extension of the current partial solution whose bound
    /// vector has a strictly positive hypervolume contribution, sorted descending by
    /// contribution.
    ///
    /// # Arguments
    ///
    /// * `current_solution`: The partial solution built so far.
    /// * `indicator`: The hypervolume indicator tracking the archive.
    ///
    /// returns: `Vec<Candidate>`
    fn generate_candidates(
        &self,
        current_solution: &Solution,
        indicator: &HypervolumeIndicator,
    ) -> Vec<Candidate>;

    /// Build the restricted candidate list: the leading run of candidates whose score reaches
    /// `top - ⌊(top - bot)·alpha⌋`, where `top` and `bot` are the first and last scores. The
    /// result is a non-empty prefix whenever `candidates` is non-empty; with `alpha = 0` only
    /// top-scored candidates survive.
    ///
    /// # Arguments
    ///
    /// * `candidates`: The candidates, sorted descending by contribution.
    /// * `alpha`: The greediness parameter in `[0, 1]`.
    ///
    /// returns: `Vec<Candidate>`
    fn select_candidates(&self, candidates: &[Candidate], alpha: f64) -> Vec<Candidate> {
        let (Some(first), Some(last)) = (candidates.first(), candidates.last()) else {
            return Vec::new();
        };
        let diff = ((first.contribution - last.contribution) as f64 * alpha) as i64;
        let threshold = first.contribution - diff;
        candidates
            .iter()
            .take_while(|c| c.contribution >= threshold)
            .cloned()
            .collect()
    }

    /// Pick one candidate uniformly at random, commit its extension to the working state and
    /// return the new partial solution.
    ///
    /// # Arguments
    ///
    /// * `selected_candidates`: The restricted candidate list. Must not be empty.
    /// * `rng`: The random number generator.
    ///
    /// returns: `Result<Solution, Error>`
    fn choose_candidate(
        &mut self,
        selected_candidates: &[Candidate],
        rng: &mut dyn RngCore,
    ) -> Result<Solution, Error>;

    /// Whether the working state represents a complete feasible solution.
    ///
    /// # Arguments
    ///
    /// * `solution`: The constructed solution.
    ///
    /// returns: `bool`
    fn is_feasible(&self, solution: &Solution) -> bool;

    /// Improve a completed solution with a problem-specific local search. Problems without one
    /// return the input solution unchanged together with an empty vector.
    ///
    /// # Arguments
    ///
    /// * `solution`: The solution to improve.
    /// * `archive`: The non-dominated solutions accepted so far.
    /// * `rng`: The random number generator.
    ///
    /// returns: `(Solution, Vec<Solution>)` The improved solution and the other non-dominated
    /// solutions discovered along the way.
    fn improve_solution(
        &self,
        solution: &Solution,
        archive: &[Solution],
        rng: &mut dyn RngCore,
    ) -> (Solution, Vec<Solution>);
}
