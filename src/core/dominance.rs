use crate::core::{Error, ObjectiveDirection, Solution};

/// Check whether `a` weakly dominates `b`, that is whether `a` is at least as good as `b` in
/// every objective for the given direction. Equal vectors weakly dominate each other.
///
/// # Arguments
///
/// * `a`: The first objective vector.
/// * `b`: The second objective vector.
/// * `direction`: Whether the objectives are maximised or minimised.
///
/// returns: `bool`
pub fn weakly_dominates(a: &[i64], b: &[i64], direction: ObjectiveDirection) -> bool {
    match direction {
        ObjectiveDirection::Maximise => a.iter().zip(b).all(|(x, y)| x >= y),
        ObjectiveDirection::Minimise => a.iter().zip(b).all(|(x, y)| x <= y),
    }
}

/// Check whether `a` strictly dominates `b`, that is whether `a` is strictly better than `b` in
/// every objective for the given direction. Equality in any component fails.
///
/// # Arguments
///
/// * `a`: The first objective vector.
/// * `b`: The second objective vector.
/// * `direction`: Whether the objectives are maximised or minimised.
///
/// returns: `bool`
pub fn strictly_dominates(a: &[i64], b: &[i64], direction: ObjectiveDirection) -> bool {
    match direction {
        ObjectiveDirection::Maximise => a.iter().zip(b).all(|(x, y)| x > y),
        ObjectiveDirection::Minimise => a.iter().zip(b).all(|(x, y)| x < y),
    }
}

/// Check whether no member of `set` weakly dominates `solution`. An empty set leaves any vector
/// non-dominated.
///
/// # Arguments
///
/// * `solution`: The objective vector to check.
/// * `set`: The set to check the vector against.
/// * `direction`: Whether the objectives are maximised or minimised.
///
/// returns: `bool`
pub fn is_non_dominated(solution: &[i64], set: &[Solution], direction: ObjectiveDirection) -> bool {
    !set.iter().any(|s| weakly_dominates(s, solution, direction))
}

/// Remove from `set` every member weakly dominated by `solution`.
///
/// # Arguments
///
/// * `set`: The set to filter.
/// * `solution`: The dominating vector.
/// * `direction`: Whether the objectives are maximised or minimised.
pub fn remove_weakly_dominated(
    set: &mut Vec<Solution>,
    solution: &[i64],
    direction: ObjectiveDirection,
) {
    set.retain(|s| !weakly_dominates(solution, s, direction));
}

/// Remove from `set` every member weakly dominated by any vector in `solutions`.
///
/// # Arguments
///
/// * `set`: The set to filter.
/// * `solutions`: The dominating vectors.
/// * `direction`: Whether the objectives are maximised or minimised.
pub fn remove_all_weakly_dominated(
    set: &mut Vec<Solution>,
    solutions: &[Solution],
    direction: ObjectiveDirection,
) {
    for solution in solutions {
        remove_weakly_dominated(set, solution, direction);
    }
}

/// Calculate the componentwise worst values of a set: the minimum per objective when maximising,
/// the maximum when minimising. Returns `None` for an empty set.
///
/// # Arguments
///
/// * `set`: The set of objective vectors.
/// * `direction`: Whether the objectives are maximised or minimised.
///
/// returns: `Option<Solution>`
pub fn nadir(set: &[Solution], direction: ObjectiveDirection) -> Option<Solution> {
    let first = set.first()?;
    let mut worst = first.clone();
    for solution in set.iter().skip(1) {
        for (w, value) in worst.iter_mut().zip(solution) {
            *w = match direction {
                ObjectiveDirection::Maximise => (*w).min(*value),
                ObjectiveDirection::Minimise => (*w).max(*value),
            };
        }
    }
    Some(worst)
}

/// Check the solver's terminal invariants on an archive: (1) no archive member may weakly
/// dominate another, and (2) no archive member may strictly dominate a point of the ground-truth
/// non-dominated set (that would disprove the ground truth). A violation is a defect in the
/// algorithm or in the instance data.
///
/// # Arguments
///
/// * `archive`: The archive produced by the solver.
/// * `nondominated_set`: The optional ground-truth non-dominated set (may be empty).
/// * `direction`: Whether the objectives are maximised or minimised.
///
/// returns: `Result<(), Error>`
pub fn validate_archive(
    archive: &[Solution],
    nondominated_set: &[Solution],
    direction: ObjectiveDirection,
) -> Result<(), Error> {
    for (i, a) in archive.iter().enumerate() {
        for (j, b) in archive.iter().enumerate() {
            if i != j && weakly_dominates(b, a, direction) {
                return Err(Error::InvariantViolation(format!(
                    "archive solution {:?} is weakly dominated by {:?}",
                    a, b
                )));
            }
        }
    }
    for a in archive {
        for n in nondominated_set {
            if strictly_dominates(a, n, direction) {
                return Err(Error::InvariantViolation(format!(
                    "archive solution {:?} strictly dominates the non-dominated point {:?}",
                    a, n
                )));
            }
        }
    }
    Ok(())
}
