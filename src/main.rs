use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use hyper_grasp::algorithms::{HyperGrasp, HyperGraspArg, Statistics, StoppingCriteria};
use hyper_grasp::core::{Error, ObjectiveDirection};
use hyper_grasp::problems::{MultiObjectiveKnapsack, MultiObjectiveSpanningTree, Problem};

#[derive(Parser, Debug)]
#[command(
    name = "hyper-grasp",
    about = "Hyper-GRASP for multiobjective combinatorial optimisation",
    version
)]
struct Cli {
    /// Improve accepted constructions with the problem's local search.
    #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
    local_search: bool,

    /// Whether the objectives are maximised (true) or minimised (false).
    #[arg(long, action = clap::ArgAction::Set)]
    maximization: bool,

    /// Greediness of the restricted candidate list, between 0 and 1.
    #[arg(long, default_value_t = 0.05)]
    alpha: f64,

    /// What bounds the run: wall-clock time or iterations.
    #[arg(long, default_value = "time", value_parser = ["time", "iterations"])]
    criteria: String,

    /// The time budget in seconds, or the iteration cap.
    #[arg(
        long = "criteria_limit",
        default_value_t = 100,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    criteria_limit: u64,

    /// The problem the instance file describes.
    #[arg(long, default_value = "mokp", value_parser = ["mokp", "momst"])]
    moco_problem: String,

    /// The instance file.
    #[arg(long)]
    input_file: PathBuf,

    /// Seed the random number generator for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Also write the report to a JSON file.
    #[arg(long)]
    json_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let direction = if cli.maximization {
        ObjectiveDirection::Maximise
    } else {
        ObjectiveDirection::Minimise
    };
    let args = HyperGraspArg {
        alpha: cli.alpha,
        local_search: cli.local_search,
        direction,
        seed: cli.seed,
    };

    let statistics = match cli.moco_problem.as_str() {
        "mokp" => solve(MultiObjectiveKnapsack::from_file(&cli.input_file)?, &cli, args)?,
        "momst" => solve(
            MultiObjectiveSpanningTree::from_file(&cli.input_file)?,
            &cli,
            args,
        )?,
        other => return Err(Error::UnknownProblem(other.to_string())),
    };

    println!("{statistics}");
    statistics.to_debug_file(Path::new("debug.out"))?;
    if let Some(path) = &cli.json_file {
        statistics.save_to_json(path)?;
    }
    Ok(())
}

fn solve<P: Problem>(problem: P, cli: &Cli, args: HyperGraspArg) -> Result<Statistics, Error> {
    let criteria = StoppingCriteria::from_tag(&cli.criteria, cli.criteria_limit)?;
    HyperGrasp::new(problem, criteria, args)?.solve()
}
