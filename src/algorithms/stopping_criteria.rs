use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::core::Error;

/// How often the time-bounded run snapshots a statistics checkpoint.
const DURATION_RETRIEVE_INTERVAL: Duration = Duration::from_secs(5);
/// How often the iteration-bounded run snapshots a statistics checkpoint.
const ITERATION_RETRIEVE_INTERVAL: usize = 50;

/// Trait to define a condition that causes the solver to terminate.
pub trait StoppingCondition<T: PartialOrd> {
    /// The target value of the stopping condition.
    fn target(&self) -> T;

    /// Whether the stopping condition is met.
    fn is_met(&self, current: T) -> bool {
        self.target() <= current
    }

    /// A name describing the stopping condition.
    fn name() -> String;
}

/// Elapsed wall-clock time after which the solver terminates.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MaxDurationValue(pub Duration);

impl StoppingCondition<Duration> for MaxDurationValue {
    fn target(&self) -> Duration {
        self.0
    }

    fn name() -> String {
        "maximum duration".to_string()
    }
}

/// Number of iterations after which the solver terminates.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MaxIterationValue(pub usize);

impl StoppingCondition<usize> for MaxIterationValue {
    fn target(&self) -> usize {
        self.0
    }

    fn name() -> String {
        "maximum number of iterations".to_string()
    }
}

/// The type of stopping condition. Pick one type to inform the solver how/when it should
/// terminate the search.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub enum StoppingConditionType {
    /// Set a maximum duration.
    MaxDuration(MaxDurationValue),
    /// Set a maximum number of iterations.
    MaxIterations(MaxIterationValue),
}

impl StoppingConditionType {
    /// A name describing the stopping condition.
    ///
    /// returns: `String`
    pub fn name(&self) -> String {
        match self {
            StoppingConditionType::MaxDuration(_) => MaxDurationValue::name(),
            StoppingConditionType::MaxIterations(_) => MaxIterationValue::name(),
        }
    }
}

/// The stateful side of a stopping condition: the clock since the run started, the iteration
/// counter, and the bookkeeping deciding when a statistics checkpoint is due. The solver polls
/// this once per iteration between constructions.
#[derive(Debug)]
pub struct StoppingCriteria {
    condition: StoppingConditionType,
    start_time: Instant,
    last_retrieve_time: Instant,
    iterations: usize,
    last_retrieve_iteration: usize,
}

impl StoppingCriteria {
    /// Create the criteria for a condition. The clock starts when [`Self::start`] is called.
    ///
    /// # Arguments
    ///
    /// * `condition`: The condition terminating the run.
    ///
    /// returns: `StoppingCriteria`
    pub fn new(condition: StoppingConditionType) -> Self {
        let now = Instant::now();
        Self {
            condition,
            start_time: now,
            last_retrieve_time: now,
            iterations: 0,
            last_retrieve_iteration: 0,
        }
    }

    /// Create the criteria from the tags accepted on the command line: `"time"` (limit in
    /// seconds) or `"iterations"` (limit in iterations).
    ///
    /// # Arguments
    ///
    /// * `criteria`: The criteria tag.
    /// * `limit`: The limit value.
    ///
    /// returns: `Result<StoppingCriteria, Error>`
    pub fn from_tag(criteria: &str, limit: u64) -> Result<Self, Error> {
        match criteria {
            "time" => Ok(Self::new(StoppingConditionType::MaxDuration(
                MaxDurationValue(Duration::from_secs(limit)),
            ))),
            "iterations" => Ok(Self::new(StoppingConditionType::MaxIterations(
                MaxIterationValue(limit as usize),
            ))),
            _ => Err(Error::UnknownCriteria(criteria.to_string())),
        }
    }

    /// The condition terminating the run.
    ///
    /// returns: `&StoppingConditionType`
    pub fn condition(&self) -> &StoppingConditionType {
        &self.condition
    }

    /// Start (or restart) the clock and the counters.
    pub fn start(&mut self) {
        let now = Instant::now();
        self.start_time = now;
        self.last_retrieve_time = now;
        self.iterations = 0;
        self.last_retrieve_iteration = 0;
    }

    /// Whether the condition is met and the solver must stop.
    ///
    /// returns: `bool`
    pub fn should_stop(&self) -> bool {
        match &self.condition {
            StoppingConditionType::MaxDuration(t) => t.is_met(self.start_time.elapsed()),
            StoppingConditionType::MaxIterations(t) => t.is_met(self.iterations),
        }
    }

    /// Count one solver iteration.
    pub fn increment(&mut self) {
        self.iterations += 1;
    }

    /// The time elapsed since [`Self::start`].
    ///
    /// returns: `Duration`
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// The progress towards the condition: elapsed seconds for a duration condition, the
    /// iteration count otherwise.
    ///
    /// returns: `f64`
    pub fn current(&self) -> f64 {
        match &self.condition {
            StoppingConditionType::MaxDuration(_) => self.start_time.elapsed().as_secs_f64(),
            StoppingConditionType::MaxIterations(_) => self.iterations as f64,
        }
    }

    /// Whether a statistics checkpoint is due: every 5 seconds for a duration condition, every
    /// 50 iterations otherwise.
    ///
    /// returns: `bool`
    pub fn should_retrieve(&self) -> bool {
        match &self.condition {
            StoppingConditionType::MaxDuration(_) => {
                self.last_retrieve_time.elapsed() >= DURATION_RETRIEVE_INTERVAL
            }
            StoppingConditionType::MaxIterations(_) => {
                self.iterations - self.last_retrieve_iteration >= ITERATION_RETRIEVE_INTERVAL
            }
        }
    }

    /// Re-arm the checkpoint cadence after a checkpoint was taken.
    pub fn reset_retrieve(&mut self) {
        self.last_retrieve_time = Instant::now();
        self.last_retrieve_iteration = self.iterations;
    }
}
