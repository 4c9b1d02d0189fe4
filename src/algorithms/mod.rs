pub use hyper_grasp::{HyperGrasp, HyperGraspArg};
pub use statistics::{Checkpoint, RunReport, Statistics};
pub use stopping_criteria::{
    MaxDurationValue, MaxIterationValue, StoppingCondition, StoppingConditionType,
    StoppingCriteria,
};

mod hyper_grasp;
mod statistics;
mod stopping_criteria;
