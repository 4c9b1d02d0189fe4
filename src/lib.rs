//! # hyper-grasp
//!
//! A hypervolume-guided greedy randomised adaptive search procedure (GRASP) for multiobjective
//! combinatorial optimisation. The solver approximates the Pareto front of a multiobjective
//! knapsack or minimum spanning tree instance by iterated randomised-greedy construction: every
//! candidate extension of a partial solution is scored by the hypervolume contribution of a
//! problem-specific bound vector, and completed solutions are collected in a mutually
//! non-dominated archive shadowed by an incremental hypervolume indicator.
//!
//! The solver is exposed through [`algorithms::HyperGrasp`]; problems implement the
//! [`problems::Problem`] capability set. Two problems are built in:
//!
//! - [`problems::MultiObjectiveKnapsack`] — maximisation, guided by an incrementally maintained
//!   Dantzig bound of the linear relaxation, with a first-improvement swap local search.
//! - [`problems::MultiObjectiveSpanningTree`] — minimisation over a complete graph, guided by a
//!   Kruskal completion bound over a union-find partition.
//!
//! # Example
//! ```rust
//! use hyper_grasp::algorithms::{HyperGrasp, HyperGraspArg, StoppingCriteria};
//! use hyper_grasp::core::ObjectiveDirection;
//! use hyper_grasp::problems::MultiObjectiveKnapsack;
//!
//! let problem: MultiObjectiveKnapsack = "2 2\n10\n5 3 4\n4 5 6\n".parse().unwrap();
//! let criteria = StoppingCriteria::from_tag("iterations", 100).unwrap();
//! let args = HyperGraspArg {
//!     alpha: 0.05,
//!     local_search: true,
//!     direction: ObjectiveDirection::Maximise,
//!     seed: Some(1),
//! };
//! let mut solver = HyperGrasp::new(problem, criteria, args).unwrap();
//! let statistics = solver.solve().unwrap();
//! assert!(!statistics.solutions.is_empty());
//! ```

pub mod algorithms;
pub mod core;
pub mod metrics;
pub mod problems;
