use crate::core::dominance::{is_non_dominated, remove_weakly_dominated};
use crate::core::{ObjectiveDirection, Solution};

/// An incremental hypervolume indicator over integer objective vectors.
///
/// The indicator tracks a mutually non-dominated set of points and the hypervolume they dominate
/// with respect to a reference point. All internal arithmetic is carried out in maximisation
/// orientation; for minimised objectives both the reference point and every input vector are
/// negated on entry. A point contributes only through the part of its box that lies strictly
/// beyond the reference point in every objective.
///
/// Volumes are exact in any number of objectives: the gain of a point is the volume of its box
/// minus the volume already covered by the tracked set clipped to that box (the exclusive-volume
/// recursion used by the WFG family of algorithms). The tracked set stays small for the archive
/// sizes this solver produces, which keeps the recursion cheap.
#[derive(Debug, Clone)]
pub struct HypervolumeIndicator {
    /// The reference point, as supplied by the caller.
    reference_point: Solution,
    /// Whether the objectives are maximised or minimised.
    direction: ObjectiveDirection,
    /// The maximisation image of the reference point.
    anchor: Solution,
    /// The maximisation image of the tracked points. Mutually non-dominated.
    front: Vec<Solution>,
    /// The hypervolume of the tracked points.
    value: i64,
}

impl HypervolumeIndicator {
    /// Create an empty indicator anchored at a reference point.
    ///
    /// # Arguments
    ///
    /// * `reference_point`: The point bounding the measured region. It must be at least as bad as
    ///   every vector that will be inserted; vectors not strictly better than it in every
    ///   objective contribute 0.
    /// * `direction`: Whether the objectives are maximised or minimised.
    ///
    /// returns: `HypervolumeIndicator`
    pub fn new(reference_point: &[i64], direction: ObjectiveDirection) -> Self {
        let anchor = match direction {
            ObjectiveDirection::Maximise => reference_point.to_vec(),
            ObjectiveDirection::Minimise => reference_point.iter().map(|v| -v).collect(),
        };
        Self {
            reference_point: reference_point.to_vec(),
            direction,
            anchor,
            front: Vec::new(),
            value: 0,
        }
    }

    /// Get the reference point the indicator was created with.
    ///
    /// returns: `&Solution`
    pub fn reference_point(&self) -> &Solution {
        &self.reference_point
    }

    /// Get the hypervolume of the tracked set. This always equals the sum of the gains returned
    /// by [`Self::insert`].
    ///
    /// returns: `i64`
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Calculate the hypervolume gain that inserting `solution` would produce, without changing
    /// the indicator.
    ///
    /// # Arguments
    ///
    /// * `solution`: The objective vector to score.
    ///
    /// returns: `i64`
    pub fn contribution(&self, solution: &[i64]) -> i64 {
        let point = self.to_maximised(solution);
        exclusive_volume(&point, &self.front, &self.anchor)
    }

    /// Add a vector to the tracked set and return the gain in hypervolume. A vector whose gain is
    /// zero (already weakly dominated, or not strictly better than the reference point) leaves
    /// the indicator untouched, so re-inserting a dominated vector is idempotent.
    ///
    /// # Arguments
    ///
    /// * `solution`: The objective vector to insert.
    ///
    /// returns: `i64`
    pub fn insert(&mut self, solution: &[i64]) -> i64 {
        let point = self.to_maximised(solution);
        let gain = exclusive_volume(&point, &self.front, &self.anchor);
        if gain > 0 {
            remove_weakly_dominated(&mut self.front, &point, ObjectiveDirection::Maximise);
            self.front.push(point);
            self.value += gain;
        }
        gain
    }

    /// Insert every vector of a set and return the total gain.
    ///
    /// # Arguments
    ///
    /// * `solutions`: The objective vectors to insert.
    ///
    /// returns: `i64`
    pub fn insert_all(&mut self, solutions: &[Solution]) -> i64 {
        solutions.iter().map(|s| self.insert(s)).sum()
    }

    fn to_maximised(&self, solution: &[i64]) -> Solution {
        match self.direction {
            ObjectiveDirection::Maximise => solution.to_vec(),
            ObjectiveDirection::Minimise => solution.iter().map(|v| -v).collect(),
        }
    }
}

/// The volume of the box spanned by `point` above `anchor`, or 0 when any component does not
/// strictly exceed the anchor.
fn box_volume(point: &[i64], anchor: &[i64]) -> i64 {
    let mut volume: i64 = 1;
    for (p, a) in point.iter().zip(anchor) {
        if p <= a {
            return 0;
        }
        volume *= p - a;
    }
    volume
}

/// Clip every front member to the box of `point` and keep the mutually non-dominated clips that
/// still span a positive box. The result describes the part of the front's volume that overlaps
/// the box of `point`.
fn limit_front(point: &[i64], front: &[Solution], anchor: &[i64]) -> Vec<Solution> {
    let mut limited: Vec<Solution> = Vec::new();
    for member in front {
        let clipped: Solution = member.iter().zip(point).map(|(m, p)| *m.min(p)).collect();
        if clipped.iter().zip(anchor).all(|(c, a)| c > a)
            && is_non_dominated(&clipped, &limited, ObjectiveDirection::Maximise)
        {
            remove_weakly_dominated(&mut limited, &clipped, ObjectiveDirection::Maximise);
            limited.push(clipped);
        }
    }
    limited
}

/// The hypervolume `point` adds on top of `front`: its box volume minus the volume of the front
/// clipped to that box.
fn exclusive_volume(point: &[i64], front: &[Solution], anchor: &[i64]) -> i64 {
    let volume = box_volume(point, anchor);
    if volume == 0 {
        return 0;
    }
    volume - front_volume(&limit_front(point, front, anchor), anchor)
}

/// The hypervolume of a front, peeled one point at a time through [`exclusive_volume`].
fn front_volume(front: &[Solution], anchor: &[i64]) -> i64 {
    front
        .iter()
        .enumerate()
        .map(|(k, point)| exclusive_volume(point, &front[..k], anchor))
        .sum()
}

#[cfg(test)]
mod test {
    use crate::core::ObjectiveDirection::{Maximise, Minimise};
    use crate::metrics::HypervolumeIndicator;

    #[test]
    /// Two-objective rectangles against the origin. Expected values were manually calculated.
    fn test_insert_gains_2d() {
        let mut hv = HypervolumeIndicator::new(&[0, 0], Maximise);
        assert_eq!(hv.insert(&[3, 4]), 12);
        assert_eq!(hv.value(), 12);
        // box 30 overlapping the 12 already covered
        assert_eq!(hv.insert(&[5, 6]), 18);
        assert_eq!(hv.value(), 30);
        // mutually non-dominated point only adds its exclusive part
        assert_eq!(hv.insert(&[9, 1]), 4);
        assert_eq!(hv.value(), 34);
    }

    #[test]
    /// `contribution` must not mutate the indicator and must match the gain `insert` returns.
    fn test_contribution_is_pure() {
        let mut hv = HypervolumeIndicator::new(&[0, 0], Maximise);
        hv.insert(&[5, 6]);
        let before = hv.value();
        assert_eq!(hv.contribution(&[9, 1]), 4);
        assert_eq!(hv.contribution(&[9, 1]), 4);
        assert_eq!(hv.value(), before);
        assert_eq!(hv.insert(&[9, 1]), 4);
    }

    #[test]
    /// Inserting a weakly dominated vector returns 0 and leaves the indicator untouched.
    fn test_dominated_insert_is_idempotent() {
        let mut hv = HypervolumeIndicator::new(&[0, 0], Maximise);
        hv.insert(&[5, 6]);
        assert_eq!(hv.insert(&[3, 4]), 0);
        assert_eq!(hv.insert(&[5, 6]), 0);
        assert_eq!(hv.value(), 30);
    }

    #[test]
    /// A vector that does not strictly beat the reference point in every objective contributes 0.
    fn test_reference_boundary_contributes_zero() {
        let hv = HypervolumeIndicator::new(&[0, 0], Maximise);
        assert_eq!(hv.contribution(&[0, 5]), 0);
        assert_eq!(hv.contribution(&[5, 0]), 0);
        assert_eq!(hv.contribution(&[-1, 5]), 0);
    }

    #[test]
    /// Minimisation negates inputs and the reference point. Expected value manually calculated
    /// from the union of the three boxes below (10, 10).
    fn test_minimisation() {
        let mut hv = HypervolumeIndicator::new(&[10, 10], Minimise);
        let gains: i64 = hv.insert(&[3, 7]) + hv.insert(&[4, 5]) + hv.insert(&[5, 4]);
        assert_eq!(hv.value(), 38);
        assert_eq!(gains, 38);
        // worse than the reference point in one objective
        assert_eq!(hv.contribution(&[11, 1]), 0);
    }

    #[test]
    /// Three objectives: overlap of two boxes resolved by the recursion.
    fn test_three_objectives() {
        let mut hv = HypervolumeIndicator::new(&[0, 0, 0], Maximise);
        assert_eq!(hv.insert(&[2, 2, 2]), 8);
        // box 3, of which 2 is already covered by (2, 2, 2) clipped to (2, 1, 1)
        assert_eq!(hv.insert(&[3, 1, 1]), 1);
        assert_eq!(hv.value(), 9);
    }

    #[test]
    /// The indicator value always equals the sum of the returned gains.
    fn test_value_equals_gain_sum() {
        let points = vec![
            vec![1, 9],
            vec![9, 1],
            vec![5, 5],
            vec![4, 6],
            vec![6, 6],
            vec![2, 2],
        ];
        let mut hv = HypervolumeIndicator::new(&[0, 0], Maximise);
        let total = hv.insert_all(&points);
        assert_eq!(hv.value(), total);
    }
}
