use std::cmp::Reverse;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::debug;
use ordered_float::OrderedFloat;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::core::dominance::{is_non_dominated, remove_weakly_dominated, weakly_dominates};
use crate::core::{Candidate, Error, ObjectiveDirection, Solution};
use crate::metrics::HypervolumeIndicator;
use crate::problems::{next_count, next_int, read_optional_set, Problem};

/// An item of a knapsack instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    /// The item index.
    pub index: usize,
    /// The item weight.
    pub weight: i64,
    /// The item value for each objective.
    pub values: Vec<i64>,
}

/// The mutable part of the Dantzig bound, snapshotted once at construction for cheap resets.
#[derive(Clone, Debug, PartialEq, Eq)]
struct BoundState {
    /// Per objective, the value sum of the items wholly inside the relaxation.
    full: Vec<i64>,
    /// Per objective, the fractional value of the break item.
    partial: Vec<i64>,
    /// Per objective, the capacity left at the break item.
    residual: Vec<i64>,
    /// Per objective, the position of the break item in the sorted order.
    break_position: Vec<usize>,
    /// Per objective, `full + partial`.
    bound: Vec<i64>,
}

/// The recomputed bound pieces for one objective after a hypothetical item addition.
struct RewoundBound {
    full: i64,
    partial: i64,
    residual: i64,
    break_position: usize,
}

impl RewoundBound {
    fn bound(&self) -> i64 {
        self.full + self.partial
    }
}

/// The Dantzig upper bound of the linear relaxation of a knapsack, one value per objective:
/// items are taken greedily by descending value/weight ratio and the first item that does not fit
/// contributes the fraction of its value the leftover capacity pays for.
///
/// The bound is maintained incrementally. Committing an item only touches the objectives where
/// the item sits at or beyond the break position; for those the break position is rewound until
/// the capacity balance is restored, skipping committed items on the way down. The sorted orders
/// and the position tables are built once and never change.
#[derive(Debug)]
struct DantzigBound {
    /// Per objective, the item indices sorted by descending value/weight ratio.
    sorted_items: Vec<Vec<usize>>,
    /// Per objective, the position of every item in the sorted order.
    positions: Vec<Vec<usize>>,
    state: BoundState,
    default_state: BoundState,
}

impl DantzigBound {
    fn new(items: &[Item], number_of_objectives: usize, capacity: i64) -> Self {
        let number_of_items = items.len();
        let mut sorted_items = Vec::with_capacity(number_of_objectives);
        let mut positions = vec![vec![0; number_of_items]; number_of_objectives];
        for objective in 0..number_of_objectives {
            let mut order: Vec<usize> = (0..number_of_items).collect();
            order.sort_by_key(|&j| {
                Reverse(OrderedFloat(
                    items[j].values[objective] as f64 / items[j].weight as f64,
                ))
            });
            for (position, &j) in order.iter().enumerate() {
                positions[objective][j] = position;
            }
            sorted_items.push(order);
        }

        let mut state = BoundState {
            full: vec![0; number_of_objectives],
            partial: vec![0; number_of_objectives],
            residual: vec![0; number_of_objectives],
            break_position: vec![0; number_of_objectives],
            bound: vec![0; number_of_objectives],
        };
        for objective in 0..number_of_objectives {
            let mut remaining = capacity;
            let mut break_position = 0;
            for &j in &sorted_items[objective] {
                if items[j].weight <= remaining {
                    state.full[objective] += items[j].values[objective];
                    remaining -= items[j].weight;
                    break_position += 1;
                } else {
                    state.partial[objective] =
                        remaining * items[j].values[objective] / items[j].weight;
                    break;
                }
            }
            state.residual[objective] = remaining;
            state.break_position[objective] = break_position;
            state.bound[objective] = state.full[objective] + state.partial[objective];
        }

        Self {
            sorted_items,
            positions,
            default_state: state.clone(),
            state,
        }
    }

    fn reset(&mut self) {
        self.state = self.default_state.clone();
    }

    /// The current bound vector.
    fn bound(&self) -> &[i64] {
        &self.state.bound
    }

    /// The bound vector that committing `item` would produce, without touching the stored state.
    fn simulate_add_item(&self, items: &[Item], used_items: &[bool], item: usize) -> Solution {
        let mut bound = self.state.bound.clone();
        for objective in 0..self.sorted_items.len() {
            if let Some(rewound) = self.rewind(items, used_items, item, objective) {
                bound[objective] = rewound.bound();
            }
        }
        bound
    }

    /// Commit `item` and return the new bound vector.
    fn update_add_item(&mut self, items: &[Item], used_items: &[bool], item: usize) -> Solution {
        for objective in 0..self.sorted_items.len() {
            if let Some(rewound) = self.rewind(items, used_items, item, objective) {
                self.state.bound[objective] = rewound.bound();
                self.state.full[objective] = rewound.full;
                self.state.partial[objective] = rewound.partial;
                self.state.residual[objective] = rewound.residual;
                self.state.break_position[objective] = rewound.break_position;
            }
        }
        self.state.bound.clone()
    }

    /// Hypothetically add `item` for one objective: deduct its weight, credit its value, and move
    /// the break position down until the capacity balance is non-negative, skipping committed
    /// items on the way. Returns `None` when the item already sits inside the relaxation and the
    /// bound is unchanged.
    fn rewind(
        &self,
        items: &[Item],
        used_items: &[bool],
        item: usize,
        objective: usize,
    ) -> Option<RewoundBound> {
        if self.positions[objective][item] < self.state.break_position[objective] {
            return None;
        }
        let mut residual = self.state.residual[objective] - items[item].weight;
        let mut full = self.state.full[objective] + items[item].values[objective];
        let mut break_position = self.state.break_position[objective];
        while residual < 0 {
            break_position -= 1;
            let j = self.sorted_items[objective][break_position];
            if !used_items[j] {
                residual += items[j].weight;
                full -= items[j].values[objective];
            }
        }
        let partial = if break_position < self.sorted_items[objective].len() {
            let j = self.sorted_items[objective][break_position];
            residual * items[j].values[objective] / items[j].weight
        } else {
            0
        };
        Some(RewoundBound {
            full,
            partial,
            residual,
            break_position,
        })
    }
}

/// A multiobjective 0/1 knapsack: pick a subset of items whose total weight fits the capacity
/// and whose value vector is as large as possible in every objective. Objectives are maximised
/// and the hypervolume reference point is the origin.
#[derive(Debug)]
pub struct MultiObjectiveKnapsack {
    number_of_objectives: usize,
    capacity: i64,
    items: Vec<Item>,
    /// The optional ground-truth non-dominated set carried by the instance file.
    nondominated_set: Vec<Solution>,
    reference_point: Solution,
    bound: DantzigBound,
    solution: Solution,
    used_items: Vec<bool>,
    remaining_capacity: i64,
}

impl MultiObjectiveKnapsack {
    /// Build an instance from its items.
    ///
    /// # Arguments
    ///
    /// * `items`: The items. Weights must be positive and values non-negative.
    /// * `capacity`: The knapsack capacity.
    /// * `nondominated_set`: The ground-truth non-dominated set, when known (empty otherwise).
    ///
    /// returns: `Result<MultiObjectiveKnapsack, Error>`
    pub fn new(
        items: Vec<Item>,
        capacity: i64,
        nondominated_set: Vec<Solution>,
    ) -> Result<Self, Error> {
        let number_of_objectives = items
            .first()
            .map(|item| item.values.len())
            .ok_or_else(|| Error::ParseInstance("the instance has no items".to_string()))?;
        if capacity <= 0 {
            return Err(Error::ParseInstance(
                "the knapsack capacity must be positive".to_string(),
            ));
        }
        for item in &items {
            if item.weight <= 0 {
                return Err(Error::ParseInstance(format!(
                    "the weight of item {} must be positive",
                    item.index
                )));
            }
            if item.values.len() != number_of_objectives {
                return Err(Error::ParseInstance(format!(
                    "item {} has {} values instead of {}",
                    item.index,
                    item.values.len(),
                    number_of_objectives
                )));
            }
        }

        let number_of_items = items.len();
        let bound = DantzigBound::new(&items, number_of_objectives, capacity);
        Ok(Self {
            number_of_objectives,
            capacity,
            items,
            nondominated_set,
            reference_point: vec![0; number_of_objectives],
            bound,
            solution: vec![0; number_of_objectives],
            used_items: vec![false; number_of_items],
            remaining_capacity: capacity,
        })
    }

    /// Read an instance from a file.
    ///
    /// # Arguments
    ///
    /// * `path`: The instance file path.
    ///
    /// returns: `Result<MultiObjectiveKnapsack, Error>`
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let data = fs::read_to_string(path)
            .map_err(|e| Error::File(path.to_path_buf(), e.to_string()))?;
        data.parse()
    }

    /// The knapsack capacity.
    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// The instance items.
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

impl FromStr for MultiObjectiveKnapsack {
    type Err = Error;

    /// Parse the whitespace-delimited instance text: the item and objective counts, the
    /// capacity, one weight-and-values line per item and an optional trailing non-dominated set
    /// preceded by its size.
    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let mut tokens = data.split_whitespace();
        let number_of_items = next_count(&mut tokens, "number of items")?;
        let number_of_objectives = next_count(&mut tokens, "number of objectives")?;
        let capacity = next_int(&mut tokens, "knapsack capacity")?;

        let mut items = Vec::with_capacity(number_of_items);
        for index in 0..number_of_items {
            let weight = next_int(&mut tokens, &format!("weight of item {index}"))?;
            let values = (0..number_of_objectives)
                .map(|j| next_int(&mut tokens, &format!("value {j} of item {index}")))
                .collect::<Result<Vec<i64>, Error>>()?;
            if values.iter().any(|&v| v < 0) {
                return Err(Error::ParseInstance(format!(
                    "the values of item {index} must be non-negative"
                )));
            }
            items.push(Item {
                index,
                weight,
                values,
            });
        }

        let nondominated_set =
            read_optional_set(&mut tokens, number_of_objectives, "non-dominated set")?;
        Self::new(items, capacity, nondominated_set)
    }
}

impl Problem for MultiObjectiveKnapsack {
    fn name(&self) -> String {
        "MOKP".to_string()
    }

    fn number_of_objectives(&self) -> usize {
        self.number_of_objectives
    }

    fn reset(&mut self) {
        self.bound.reset();
        self.solution = vec![0; self.number_of_objectives];
        self.used_items = vec![false; self.items.len()];
        self.remaining_capacity = self.capacity;
    }

    fn empty_solution(&self) -> Solution {
        vec![0; self.number_of_objectives]
    }

    fn reference_point(&self) -> Solution {
        self.reference_point.clone()
    }

    fn nondominated_set(&self) -> &[Solution] {
        &self.nondominated_set
    }

    fn generate_candidates(
        &self,
        _current_solution: &Solution,
        indicator: &HypervolumeIndicator,
    ) -> Vec<Candidate> {
        let mut candidates = Vec::new();
        for (i, item) in self.items.iter().enumerate() {
            if self.used_items[i] || item.weight > self.remaining_capacity {
                continue;
            }
            let bound = self.bound.simulate_add_item(&self.items, &self.used_items, i);
            let contribution = indicator.contribution(&bound);
            if contribution > 0 {
                candidates.push(Candidate::new(i, contribution));
            }
        }
        candidates.sort_by(|a, b| b.contribution.cmp(&a.contribution));
        candidates
    }

    fn choose_candidate(
        &mut self,
        selected_candidates: &[Candidate],
        rng: &mut dyn RngCore,
    ) -> Result<Solution, Error> {
        if selected_candidates.is_empty() {
            return Err(Error::Generic(
                "cannot choose from an empty candidate list".to_string(),
            ));
        }
        let pick = rng.gen_range(0..selected_candidates.len());
        let item = selected_candidates[pick].id;
        debug!("Committing item #{item}");

        for (total, value) in self.solution.iter_mut().zip(&self.items[item].values) {
            *total += value;
        }
        self.remaining_capacity -= self.items[item].weight;
        self.used_items[item] = true;
        self.bound
            .update_add_item(&self.items, &self.used_items, item);
        Ok(self.solution.clone())
    }

    fn is_feasible(&self, _solution: &Solution) -> bool {
        // construction never overshoots the capacity; the committed-item clause rules out an
        // empty construction
        self.remaining_capacity >= 0 && self.used_items.iter().any(|&used| used)
    }

    /// First-improvement swap search in maximisation space. Swaps one packed item for one
    /// unpacked item, accepts a swap that weakly dominates the incumbent or grows the
    /// hypervolume contribution anchored at the incumbent, then greedily extends with unpacked
    /// items in ascending weight order and restarts. Every non-dominated vector met on the way
    /// is folded into the accumulator returned next to the improved solution.
    fn improve_solution(
        &self,
        solution: &Solution,
        archive: &[Solution],
        rng: &mut dyn RngCore,
    ) -> (Solution, Vec<Solution>) {
        let mut used: Vec<usize> = Vec::new();
        let mut unused: Vec<usize> = Vec::new();
        let mut weight = 0;
        for (i, item) in self.items.iter().enumerate() {
            if self.used_items[i] {
                used.push(i);
                weight += item.weight;
            } else {
                unused.push(i);
            }
        }

        let mut best_solution = solution.clone();
        let mut other_solutions: Vec<Solution> = Vec::new();
        let number_of_unused = unused.len();
        if used.is_empty() || unused.is_empty() {
            return (best_solution, other_solutions);
        }
        let mut swap_indices: Vec<usize> = (0..used.len() * number_of_unused).collect();

        loop {
            used.shuffle(&mut *rng);
            unused.shuffle(&mut *rng);
            swap_indices.shuffle(&mut *rng);

            let anchored =
                HypervolumeIndicator::new(&best_solution, ObjectiveDirection::Maximise);
            let mut best_contribution = 0;

            for &swap in &swap_indices {
                let used_position = swap / number_of_unused;
                let unused_position = swap % number_of_unused;
                let used_item = used[used_position];
                let unused_item = unused[unused_position];

                if weight - self.items[used_item].weight + self.items[unused_item].weight
                    > self.capacity
                {
                    continue;
                }

                let mut candidate = best_solution.clone();
                for (j, total) in candidate.iter_mut().enumerate() {
                    *total -= self.items[used_item].values[j];
                    *total += self.items[unused_item].values[j];
                }

                if is_non_dominated(&candidate, archive, ObjectiveDirection::Maximise)
                    && is_non_dominated(&candidate, &other_solutions, ObjectiveDirection::Maximise)
                {
                    remove_weakly_dominated(
                        &mut other_solutions,
                        &candidate,
                        ObjectiveDirection::Maximise,
                    );
                    other_solutions.push(candidate.clone());
                }

                let contribution = anchored.contribution(&candidate);
                if weakly_dominates(&candidate, &best_solution, ObjectiveDirection::Maximise)
                    || contribution > best_contribution
                {
                    best_solution = candidate;
                    best_contribution = contribution;
                    weight = weight - self.items[used_item].weight
                        + self.items[unused_item].weight;
                    used[used_position] = unused_item;
                    unused[unused_position] = used_item;

                    // top up the freed capacity, lightest items first
                    let mut by_weight = unused.clone();
                    by_weight.sort_by_key(|&j| self.items[j].weight);
                    for &extension in &by_weight {
                        if weight + self.items[extension].weight > self.capacity {
                            continue;
                        }
                        let mut extended = best_solution.clone();
                        for (total, value) in
                            extended.iter_mut().zip(&self.items[extension].values)
                        {
                            *total += value;
                        }
                        let extended_contribution = anchored.contribution(&extended);
                        if extended_contribution > best_contribution {
                            best_solution = extended;
                            best_contribution = extended_contribution;
                            weight += self.items[extension].weight;
                        }
                    }
                    break;
                }
            }

            if best_contribution == 0 {
                break;
            }
        }

        remove_weakly_dominated(
            &mut other_solutions,
            &best_solution,
            ObjectiveDirection::Maximise,
        );
        (best_solution, other_solutions)
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Reverse;

    use ordered_float::OrderedFloat;

    use crate::core::utils::get_rng;
    use crate::core::{Candidate, ObjectiveDirection, Solution};
    use crate::metrics::HypervolumeIndicator;
    use crate::problems::mokp::{Item, MultiObjectiveKnapsack};
    use crate::problems::Problem;

    /// Four items over two objectives with capacity 10. The Dantzig bound of this instance was
    /// worked out by hand in the tests below.
    fn sample_instance() -> MultiObjectiveKnapsack {
        let items = vec![
            Item { index: 0, weight: 2, values: vec![10, 2] },
            Item { index: 1, weight: 4, values: vec![12, 8] },
            Item { index: 2, weight: 6, values: vec![6, 18] },
            Item { index: 3, weight: 3, values: vec![3, 9] },
        ];
        MultiObjectiveKnapsack::new(items, 10, Vec::new()).unwrap()
    }

    /// Rebuild the Dantzig bound from scratch for a committed-item set: committed items are
    /// forced in, the rest fill the leftover capacity greedily by ratio.
    fn bound_from_scratch(problem: &MultiObjectiveKnapsack, used: &[bool]) -> Solution {
        let items = problem.items();
        (0..problem.number_of_objectives())
            .map(|objective| {
                let mut order: Vec<usize> = (0..items.len()).collect();
                order.sort_by_key(|&j| {
                    Reverse(OrderedFloat(
                        items[j].values[objective] as f64 / items[j].weight as f64,
                    ))
                });
                let mut remaining = problem.capacity();
                let mut total = 0;
                for (j, item) in items.iter().enumerate() {
                    if used[j] {
                        remaining -= item.weight;
                        total += item.values[objective];
                    }
                }
                for &j in &order {
                    if used[j] {
                        continue;
                    }
                    if items[j].weight <= remaining {
                        total += items[j].values[objective];
                        remaining -= items[j].weight;
                    } else {
                        total += remaining * items[j].values[objective] / items[j].weight;
                        break;
                    }
                }
                total
            })
            .collect()
    }

    #[test]
    /// The initial bound fills each objective greedily by ratio and adds the fractional piece of
    /// the first item that does not fit.
    fn test_initial_bound() {
        let problem = sample_instance();
        assert_eq!(problem.bound.bound(), &[26, 29]);
    }

    #[test]
    /// Simulating an addition returns the hypothetical bound and leaves the state untouched;
    /// updating applies the same vector in place.
    fn test_simulate_matches_update() {
        let mut problem = sample_instance();
        let used = vec![false; 4];

        let simulated = problem.bound.simulate_add_item(&problem.items, &used, 2);
        assert_eq!(simulated, vec![22, 29]);
        assert_eq!(problem.bound.bound(), &[26, 29]);

        let mut used = used;
        used[2] = true;
        let items = problem.items.clone();
        let updated = problem.bound.update_add_item(&items, &used, 2);
        assert_eq!(updated, simulated);
        assert_eq!(problem.bound.bound(), &[22, 29]);
    }

    #[test]
    /// After any update sequence the incremental bound equals the batch construction over the
    /// committed set.
    fn test_update_matches_batch_replay() {
        let mut problem = sample_instance();
        let mut used = vec![false; 4];
        for &item in &[0, 3, 1] {
            used[item] = true;
            let items = problem.items.clone();
            let updated = problem.bound.update_add_item(&items, &used, item);
            assert_eq!(updated, bound_from_scratch(&problem, &used));
        }
    }

    #[test]
    /// Reset restores the default bound snapshot and the working state.
    fn test_reset() {
        let mut problem = sample_instance();
        let mut rng = get_rng(7);
        problem
            .choose_candidate(&[Candidate::new(2, 1)], &mut rng)
            .unwrap();
        assert_ne!(problem.bound.bound(), &[26, 29]);

        problem.reset();
        assert_eq!(problem.bound.bound(), &[26, 29]);
        assert_eq!(problem.remaining_capacity, 10);
        assert!(problem.used_items.iter().all(|&used| !used));
        assert_eq!(problem.solution, vec![0, 0]);
    }

    #[test]
    /// Candidates skip items that do not fit, drop zero contributions and come out sorted by
    /// descending score.
    fn test_generate_candidates() {
        let items = vec![
            Item { index: 0, weight: 5, values: vec![3, 4] },
            Item { index: 1, weight: 5, values: vec![5, 6] },
        ];
        let problem = MultiObjectiveKnapsack::new(items, 5, Vec::new()).unwrap();
        let indicator = HypervolumeIndicator::new(&[0, 0], ObjectiveDirection::Maximise);

        let candidates = problem.generate_candidates(&problem.empty_solution(), &indicator);
        assert_eq!(
            candidates,
            vec![Candidate::new(1, 30), Candidate::new(0, 12)]
        );
    }

    #[test]
    /// Committing a candidate updates the solution, the capacity, the bitset and the bound.
    fn test_choose_candidate() {
        let items = vec![
            Item { index: 0, weight: 5, values: vec![3, 4] },
            Item { index: 1, weight: 5, values: vec![5, 6] },
        ];
        let mut problem = MultiObjectiveKnapsack::new(items, 5, Vec::new()).unwrap();
        let mut rng = get_rng(1);

        assert!(!problem.is_feasible(&problem.empty_solution()));
        let solution = problem
            .choose_candidate(&[Candidate::new(1, 30)], &mut rng)
            .unwrap();
        assert_eq!(solution, vec![5, 6]);
        assert_eq!(problem.remaining_capacity, 0);
        assert!(problem.used_items[1]);
        assert!(problem.is_feasible(&solution));

        // nothing fits any more
        let indicator = HypervolumeIndicator::new(&[0, 0], ObjectiveDirection::Maximise);
        assert!(problem.generate_candidates(&solution, &indicator).is_empty());
    }

    #[test]
    /// Choosing from an empty candidate list is an error.
    fn test_choose_candidate_empty() {
        let mut problem = sample_instance();
        let mut rng = get_rng(1);
        assert!(problem.choose_candidate(&[], &mut rng).is_err());
    }

    #[test]
    /// The swap search replaces a dominated packing with the dominating one and prunes the
    /// accumulator down to vectors the result does not weakly dominate.
    fn test_improve_solution_swaps_to_dominating_item() {
        let items = vec![
            Item { index: 0, weight: 5, values: vec![1, 1] },
            Item { index: 1, weight: 5, values: vec![5, 6] },
        ];
        let mut problem = MultiObjectiveKnapsack::new(items, 5, Vec::new()).unwrap();
        let mut rng = get_rng(11);
        let start = problem
            .choose_candidate(&[Candidate::new(0, 1)], &mut rng)
            .unwrap();
        assert_eq!(start, vec![1, 1]);

        let (improved, others) = problem.improve_solution(&start, &[], &mut rng);
        assert_eq!(improved, vec![5, 6]);
        assert!(others.is_empty());
    }

    #[test]
    /// After an accepted swap the solution is topped up with items that still fit.
    fn test_improve_solution_extends_after_swap() {
        let items = vec![
            Item { index: 0, weight: 4, values: vec![1, 1] },
            Item { index: 1, weight: 2, values: vec![4, 4] },
            Item { index: 2, weight: 2, values: vec![3, 3] },
        ];
        let mut problem = MultiObjectiveKnapsack::new(items, 4, Vec::new()).unwrap();
        let mut rng = get_rng(3);
        let start = problem
            .choose_candidate(&[Candidate::new(0, 1)], &mut rng)
            .unwrap();

        // swapping item 0 for item 1 frees enough room for item 2 as well
        let (improved, _) = problem.improve_solution(&start, &[], &mut rng);
        assert_eq!(improved, vec![7, 7]);
    }

    #[test]
    /// Parse an instance with the optional trailing non-dominated set.
    fn test_parse_instance() {
        let data = "2 2\n10\n5 3 4\n5 5 6\n1\n8 10\n";
        let problem: MultiObjectiveKnapsack = data.parse().unwrap();
        assert_eq!(problem.items().len(), 2);
        assert_eq!(problem.number_of_objectives(), 2);
        assert_eq!(problem.capacity(), 10);
        assert_eq!(problem.items()[1].values, vec![5, 6]);
        assert_eq!(problem.nondominated_set(), &[vec![8, 10]]);
        assert_eq!(problem.reference_point(), vec![0, 0]);
    }

    #[test]
    /// The trailing set is optional.
    fn test_parse_instance_without_reference_set() {
        let data = "1 2\n10\n5 3 4";
        let problem: MultiObjectiveKnapsack = data.parse().unwrap();
        assert!(problem.nondominated_set().is_empty());
    }

    #[test]
    /// Malformed instances are rejected with a parse error.
    fn test_parse_errors() {
        let truncated = "2 2\n10\n5 3 4\n".parse::<MultiObjectiveKnapsack>();
        assert!(truncated
            .unwrap_err()
            .to_string()
            .contains("weight of item 1"));

        let bad_token = "x 2\n10\n".parse::<MultiObjectiveKnapsack>();
        assert!(bad_token.unwrap_err().to_string().contains("number of items"));

        let zero_weight = "1 2\n10\n0 3 4".parse::<MultiObjectiveKnapsack>();
        assert!(zero_weight.unwrap_err().to_string().contains("positive"));

        let negative_value = "1 2\n10\n5 3 -4".parse::<MultiObjectiveKnapsack>();
        assert!(negative_value
            .unwrap_err()
            .to_string()
            .contains("non-negative"));
    }
}
