use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::algorithms::{Checkpoint, RunReport, Statistics, StoppingCriteria};
use crate::core::dominance::{
    remove_all_weakly_dominated, remove_weakly_dominated, validate_archive,
};
use crate::core::utils::{clock_seed, get_rng};
use crate::core::{Error, ObjectiveDirection, Solution};
use crate::metrics::HypervolumeIndicator;
use crate::problems::Problem;

/// Input arguments for the solver.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HyperGraspArg {
    /// The greediness parameter in `[0, 1]`: 0 keeps only top-scored candidates in the
    /// restricted candidate list, 1 keeps them all. This defaults to `0.05`.
    pub alpha: f64,
    /// Whether to improve every accepted construction with the problem's local search. This
    /// defaults to `true`.
    pub local_search: bool,
    /// Whether the objectives are maximised or minimised.
    pub direction: ObjectiveDirection,
    /// The seed for the random number generator. When `None` the seed is drawn from the wall
    /// clock and the run is not reproducible.
    pub seed: Option<u64>,
}

impl Default for HyperGraspArg {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            local_search: true,
            direction: ObjectiveDirection::Maximise,
            seed: None,
        }
    }
}

/// A hypervolume-guided greedy randomised adaptive search procedure. Every iteration rebuilds a
/// solution from scratch: the problem ranks its feasible one-step extensions by the hypervolume
/// contribution of their bound vectors against the archive, the driver keeps the ones within
/// `alpha` of the best score and commits a uniformly random pick until no extension can still
/// improve the archive. Feasible constructions that grow the hypervolume are (optionally
/// improved by local search and) folded into the archive, purging whatever they weakly
/// dominate.
#[derive(Debug)]
pub struct HyperGrasp<P: Problem> {
    problem: P,
    stopping_criteria: StoppingCriteria,
    args: HyperGraspArg,
}

impl<P: Problem> HyperGrasp<P> {
    /// Set up a solver run.
    ///
    /// # Arguments
    ///
    /// * `problem`: The problem being solved.
    /// * `stopping_criteria`: The condition terminating the run.
    /// * `args`: The [`HyperGraspArg`] arguments to customise the solver behaviour.
    ///
    /// returns: `Result<HyperGrasp<P>, Error>`
    pub fn new(
        problem: P,
        stopping_criteria: StoppingCriteria,
        args: HyperGraspArg,
    ) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&args.alpha) {
            return Err(Error::ArgumentOutOfRange(
                "alpha".to_string(),
                "a number between 0 and 1".to_string(),
            ));
        }
        Ok(Self {
            problem,
            stopping_criteria,
            args,
        })
    }

    /// Run the search until the stopping condition fires and return the run report. The
    /// terminal archive is checked against the solver invariants (mutual non-dominance, and
    /// consistency with the instance's ground truth when it carries one); a violation aborts
    /// the run without a report.
    ///
    /// returns: `Result<Statistics, Error>`
    pub fn solve(&mut self) -> Result<Statistics, Error> {
        let seed = self.args.seed.unwrap_or_else(clock_seed);
        let mut rng = get_rng(seed);
        info!(
            "Starting Hyper-GRASP on {} (alpha {}, local search {}, {} objectives, seed {})",
            self.problem.name(),
            self.args.alpha,
            self.args.local_search,
            self.args.direction,
            seed
        );

        let reference_point = self.problem.reference_point();
        let mut indicator = HypervolumeIndicator::new(&reference_point, self.args.direction);
        let mut archive: Vec<Solution> = Vec::new();

        let mut checkpoints = vec![Checkpoint {
            time: 0.0,
            size: 0,
            hypervolume: 0,
        }];
        let mut iterations = 0;
        let mut skipped_iterations = 0;

        self.stopping_criteria.start();
        while !self.stopping_criteria.should_stop() {
            iterations += 1;
            debug!("Iteration #{iterations}");

            // randomised greedy construction
            self.problem.reset();
            let mut solution = self.problem.empty_solution();
            let mut candidates = self.problem.generate_candidates(&solution, &indicator);
            while !candidates.is_empty() {
                let selected = self
                    .problem
                    .select_candidates(&candidates, self.args.alpha);
                solution = self.problem.choose_candidate(&selected, &mut *rng)?;
                candidates = self.problem.generate_candidates(&solution, &indicator);
            }

            if self.problem.is_feasible(&solution) && indicator.contribution(&solution) > 0 {
                let mut other_solutions = Vec::new();
                if self.args.local_search {
                    (solution, other_solutions) =
                        self.problem
                            .improve_solution(&solution, &archive, &mut *rng);
                }

                remove_weakly_dominated(&mut archive, &solution, self.args.direction);
                remove_all_weakly_dominated(&mut archive, &other_solutions, self.args.direction);
                debug!("Accepting {:?} into the archive", solution);
                indicator.insert(&solution);
                archive.push(solution);
                for other in other_solutions {
                    indicator.insert(&other);
                    archive.push(other);
                }
            } else {
                skipped_iterations += 1;
                // a strict greedy construction is deterministic: the next iteration would
                // repeat the same skip
                if self.args.alpha == 0.0 {
                    break;
                }
            }

            self.stopping_criteria.increment();
            if self.stopping_criteria.should_retrieve() {
                checkpoints.push(Checkpoint {
                    time: self.stopping_criteria.elapsed().as_secs_f64(),
                    size: archive.len(),
                    hypervolume: indicator.value(),
                });
                self.stopping_criteria.reset_retrieve();
            }
        }

        let elapsed_time = self.stopping_criteria.elapsed().as_secs_f64();
        info!(
            "Stopping after {} iterations ({} skipped) because the {} was reached",
            iterations,
            skipped_iterations,
            self.stopping_criteria.condition().name()
        );

        validate_archive(
            &archive,
            self.problem.nondominated_set(),
            self.args.direction,
        )?;

        let report = RunReport {
            seed,
            iterations,
            skipped_iterations,
            elapsed_time,
            checkpoints,
            solutions: archive,
        };
        Ok(Statistics::new(
            report,
            &reference_point,
            self.problem.nondominated_set().to_vec(),
            self.args.direction,
        ))
    }
}
