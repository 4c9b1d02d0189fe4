use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
/// Errors raised by the library.
pub enum Error {
    #[error("The following error occurred: {0}")]
    Generic(String),
    #[error("The problem '{0}' is not supported. Use 'mokp' or 'momst'")]
    UnknownProblem(String),
    #[error("The stopping criteria '{0}' is not supported. Use 'time' or 'iterations'")]
    UnknownCriteria(String),
    #[error("The argument '{0}' must be {1}")]
    ArgumentOutOfRange(String, String),
    #[error("The instance cannot be parsed because {0}")]
    ParseInstance(String),
    #[error("The file {0:?} cannot be read because: {1}")]
    File(PathBuf, String),
    #[error("The reference point is only defined for {0} objectives but the instance has {1}")]
    UnsupportedObjectives(usize, usize),
    #[error("An invariant of the solver was violated: {0}")]
    InvariantViolation(String),
    #[error("An error occurred when exporting the run statistics: {0}")]
    StatisticsExport(String),
}
