use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;

use crate::core::dominance::nadir;
use crate::core::{Error, ObjectiveDirection, Solution};
use crate::metrics::HypervolumeIndicator;

/// A snapshot of the archive taken while the solver runs.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Checkpoint {
    /// Seconds since the start of the run.
    pub time: f64,
    /// The archive size.
    pub size: usize,
    /// The archive hypervolume.
    pub hypervolume: i64,
}

/// The raw outcome of a run, handed over by the driver before the derived figures are computed.
#[derive(Debug)]
pub struct RunReport {
    /// The seed the run was started with.
    pub seed: u64,
    /// The number of iterations performed.
    pub iterations: usize,
    /// The iterations that produced no acceptable solution.
    pub skipped_iterations: usize,
    /// The elapsed wall-clock seconds.
    pub elapsed_time: f64,
    /// The checkpoints collected along the run.
    pub checkpoints: Vec<Checkpoint>,
    /// The final archive.
    pub solutions: Vec<Solution>,
}

/// The report of a solver run: the archive, the checkpoints and the hypervolume figures
/// comparing the archive to the ground-truth non-dominated set (when the instance carries one),
/// both from the problem's reference point and from the ground truth's nadir.
#[derive(Serialize, Debug)]
pub struct Statistics {
    /// The seed the run was started with.
    pub seed: u64,
    /// The checkpoints collected along the run.
    pub checkpoints: Vec<Checkpoint>,
    /// The number of iterations performed.
    pub iterations: usize,
    /// The iterations that produced no acceptable solution.
    pub skipped_iterations: usize,
    /// The final archive.
    pub solutions: Vec<Solution>,
    /// The ground-truth non-dominated set (empty when the instance has none).
    pub nondominated_set: Vec<Solution>,
    /// The elapsed wall-clock seconds.
    pub elapsed_time: f64,
    /// Whether the objectives were maximised or minimised.
    pub direction: ObjectiveDirection,
    /// The archive hypervolume from the reference point.
    pub solutions_hypervolume: i64,
    /// The ground-truth hypervolume from the reference point.
    pub nondominated_hypervolume: i64,
    /// `solutions_hypervolume / nondominated_hypervolume`.
    pub hypervolume_ratio: f64,
    /// The ground-truth hypervolume from its own nadir.
    pub nadir_nondominated_hypervolume: i64,
    /// The archive hypervolume from the ground truth's nadir.
    pub nadir_solutions_hypervolume: i64,
    /// `nadir_solutions_hypervolume / nadir_nondominated_hypervolume`.
    pub nadir_hypervolume_ratio: f64,
    /// How many archive members match a ground-truth point exactly.
    pub matching_solutions: usize,
}

/// The JSON export payload with the time the data was written.
#[derive(Serialize)]
struct StatisticsExport<'a> {
    statistics: &'a Statistics,
    exported_on: DateTime<Utc>,
}

impl Statistics {
    /// Assemble the report and compute the derived hypervolume figures.
    ///
    /// # Arguments
    ///
    /// * `report`: The raw run outcome.
    /// * `reference_point`: The problem's reference point.
    /// * `nondominated_set`: The ground-truth non-dominated set (may be empty).
    /// * `direction`: Whether the objectives were maximised or minimised.
    ///
    /// returns: `Statistics`
    pub fn new(
        report: RunReport,
        reference_point: &[i64],
        nondominated_set: Vec<Solution>,
        direction: ObjectiveDirection,
    ) -> Self {
        let solutions_hypervolume = set_hypervolume(reference_point, &report.solutions, direction);

        let mut nondominated_hypervolume = 0;
        let mut hypervolume_ratio = 0.0;
        let mut nadir_nondominated_hypervolume = 0;
        let mut nadir_solutions_hypervolume = 0;
        let mut nadir_hypervolume_ratio = 0.0;
        let mut matching_solutions = 0;
        if !nondominated_set.is_empty() {
            nondominated_hypervolume = set_hypervolume(reference_point, &nondominated_set, direction);
            if nondominated_hypervolume > 0 {
                hypervolume_ratio =
                    solutions_hypervolume as f64 / nondominated_hypervolume as f64;
            }

            // nadir is Some for a non-empty set
            if let Some(nadir_point) = nadir(&nondominated_set, direction) {
                nadir_nondominated_hypervolume =
                    set_hypervolume(&nadir_point, &nondominated_set, direction);
                nadir_solutions_hypervolume =
                    set_hypervolume(&nadir_point, &report.solutions, direction);
                if nadir_nondominated_hypervolume > 0 {
                    nadir_hypervolume_ratio = nadir_solutions_hypervolume as f64
                        / nadir_nondominated_hypervolume as f64;
                }
            }

            matching_solutions = report
                .solutions
                .iter()
                .filter(|s| nondominated_set.contains(s))
                .count();
        }

        Self {
            seed: report.seed,
            checkpoints: report.checkpoints,
            iterations: report.iterations,
            skipped_iterations: report.skipped_iterations,
            solutions: report.solutions,
            nondominated_set,
            elapsed_time: report.elapsed_time,
            direction,
            solutions_hypervolume,
            nondominated_hypervolume,
            hypervolume_ratio,
            nadir_nondominated_hypervolume,
            nadir_solutions_hypervolume,
            nadir_hypervolume_ratio,
            matching_solutions,
        }
    }

    /// Write the ground-truth set, the archive and the hypervolume growth column to a debug
    /// file.
    ///
    /// # Arguments
    ///
    /// * `destination`: The output file path.
    ///
    /// returns: `Result<(), Error>`
    pub fn to_debug_file(&self, destination: &Path) -> Result<(), Error> {
        let mut out = String::new();
        out.push_str("Non-dominated set\n");
        for solution in &self.nondominated_set {
            out.push_str(&join(solution, " "));
            out.push('\n');
        }
        out.push_str("GRASP set\n");
        for solution in &self.solutions {
            out.push_str(&join(solution, " "));
            out.push('\n');
        }
        out.push_str("Hypervolume growth\n");
        out.push_str(&format!("{}\n", self.nondominated_hypervolume));
        for checkpoint in &self.checkpoints {
            out.push_str(&format!("{}\n", checkpoint.hypervolume));
        }

        fs::write(destination, out)
            .map_err(|e| Error::File(destination.to_path_buf(), e.to_string()))
    }

    /// Serialise the report to a pretty-printed JSON file stamped with the export time.
    ///
    /// # Arguments
    ///
    /// * `destination`: The output file path.
    ///
    /// returns: `Result<(), Error>`
    pub fn save_to_json(&self, destination: &Path) -> Result<(), Error> {
        let export = StatisticsExport {
            statistics: self,
            exported_on: Utc::now(),
        };
        let data = serde_json::to_string_pretty(&export).map_err(|e| {
            Error::StatisticsExport(format!(
                "the following error occurred while serialising the report: {e}"
            ))
        })?;
        info!("Saving JSON file {:?}", destination);
        fs::write(destination, data).map_err(|e| Error::StatisticsExport(e.to_string()))
    }
}

impl Display for Statistics {
    /// The plain-text report: the seed; the checkpoints as `(time,size,hypervolume)` tuples; the
    /// iteration counts; the archive as parenthesised tuples; the hypervolume figures; the set
    /// sizes, the match count and the elapsed seconds.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.seed)?;

        let checkpoints: Vec<String> = self
            .checkpoints
            .iter()
            .map(|c| format!("({},{},{})", c.time, c.size, c.hypervolume))
            .collect();
        writeln!(f, "{}", checkpoints.join(" "))?;

        writeln!(f, "{} {}", self.iterations, self.skipped_iterations)?;

        let solutions: Vec<String> = self
            .solutions
            .iter()
            .map(|s| format!("({})", join(s, ",")))
            .collect();
        writeln!(f, "{}", solutions.join(" "))?;

        writeln!(
            f,
            "{} {} {} {} {} {}",
            self.nondominated_hypervolume,
            self.solutions_hypervolume,
            self.hypervolume_ratio,
            self.nadir_nondominated_hypervolume,
            self.nadir_solutions_hypervolume,
            self.nadir_hypervolume_ratio
        )?;

        write!(
            f,
            "{} {} {} {}",
            self.nondominated_set.len(),
            self.solutions.len(),
            self.matching_solutions,
            self.elapsed_time
        )
    }
}

/// The hypervolume of a set from a reference point.
fn set_hypervolume(
    reference_point: &[i64],
    solutions: &[Solution],
    direction: ObjectiveDirection,
) -> i64 {
    let mut indicator = HypervolumeIndicator::new(reference_point, direction);
    indicator.insert_all(solutions)
}

fn join(values: &[i64], separator: &str) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<String>>()
        .join(separator)
}
