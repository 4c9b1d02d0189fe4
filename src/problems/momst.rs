use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::debug;
use rand::{Rng, RngCore};

use crate::core::{Candidate, Error, Solution};
use crate::metrics::HypervolumeIndicator;
use crate::problems::{next_count, next_int, read_optional_set, Problem};

/// A disjoint-set forest with union by rank. Queries never mutate; path compression happens
/// inside [`UnionFind::unite`]. Cloning is a flat copy of the two arrays, cheap for the dense
/// graphs this problem works on.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {
    /// Create a singleton partition over `size` elements.
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&self, mut u: usize) -> usize {
        while self.parent[u] != u {
            u = self.parent[u];
        }
        u
    }

    fn find_and_compress(&mut self, mut u: usize) -> usize {
        while self.parent[u] != u {
            self.parent[u] = self.parent[self.parent[u]];
            u = self.parent[u];
        }
        u
    }

    /// Whether `u` and `v` live in distinct components.
    pub fn can_unite(&self, u: usize, v: usize) -> bool {
        self.find(u) != self.find(v)
    }

    /// Merge the components of `u` and `v`. Returns `false` when they were already joined.
    pub fn unite(&mut self, u: usize, v: usize) -> bool {
        let mut u = self.find_and_compress(u);
        let mut v = self.find_and_compress(v);
        if u == v {
            return false;
        }
        if self.rank[u] < self.rank[v] {
            std::mem::swap(&mut u, &mut v);
        }
        if self.rank[u] == self.rank[v] {
            self.rank[u] += 1;
        }
        self.parent[v] = u;
        true
    }
}

/// An edge of a spanning-tree instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    /// The edge index.
    pub index: usize,
    /// The source vertex.
    pub src: usize,
    /// The destination vertex.
    pub dst: usize,
    /// The edge cost for each objective.
    pub values: Vec<i64>,
}

/// A multiobjective minimum spanning tree over a complete graph: pick V−1 edges forming a tree
/// whose cost vector is as small as possible in every objective. Objectives are minimised and
/// the hypervolume reference point is the nadir of the per-objective lexicographic optima, which
/// is only defined for two objectives; other arities are refused.
#[derive(Debug)]
pub struct MultiObjectiveSpanningTree {
    number_of_vertices: usize,
    number_of_objectives: usize,
    edges: Vec<Edge>,
    /// Per objective, the edge indices sorted lexicographically starting at that objective and
    /// rotating through the others for ties.
    sorted_edges: Vec<Vec<usize>>,
    /// The optional supported-solution set carried by the instance file.
    supported_set: Vec<Solution>,
    /// The optional ground-truth non-dominated set carried by the instance file.
    nondominated_set: Vec<Solution>,
    reference_point: Solution,
    solution: Solution,
    used_edges: Vec<bool>,
    edge_count: usize,
    union_find: UnionFind,
}

impl MultiObjectiveSpanningTree {
    /// Build an instance from its edges.
    ///
    /// # Arguments
    ///
    /// * `number_of_vertices`: The number of vertices.
    /// * `edges`: The edges of the complete graph.
    /// * `supported_set`: The supported solutions, when known (empty otherwise).
    /// * `nondominated_set`: The ground-truth non-dominated set, when known (empty otherwise).
    ///
    /// returns: `Result<MultiObjectiveSpanningTree, Error>`
    pub fn new(
        number_of_vertices: usize,
        edges: Vec<Edge>,
        supported_set: Vec<Solution>,
        nondominated_set: Vec<Solution>,
    ) -> Result<Self, Error> {
        let number_of_objectives = edges
            .first()
            .map(|edge| edge.values.len())
            .ok_or_else(|| Error::ParseInstance("the instance has no edges".to_string()))?;
        if number_of_objectives != 2 {
            return Err(Error::UnsupportedObjectives(2, number_of_objectives));
        }
        for edge in &edges {
            if edge.src >= number_of_vertices || edge.dst >= number_of_vertices {
                return Err(Error::ParseInstance(format!(
                    "edge {} connects a vertex outside 0..{}",
                    edge.index, number_of_vertices
                )));
            }
        }

        let sorted_edges = (0..number_of_objectives)
            .map(|objective| {
                let mut order: Vec<usize> = (0..edges.len()).collect();
                order.sort_by(|&a, &b| {
                    for j in 0..number_of_objectives {
                        let k = (objective + j) % number_of_objectives;
                        match edges[a].values[k].cmp(&edges[b].values[k]) {
                            Ordering::Equal => continue,
                            ordering => return ordering,
                        }
                    }
                    Ordering::Equal
                });
                order
            })
            .collect::<Vec<_>>();

        // nadir of the lexicographic optima: each single-objective optimum tree pins the other
        // objective's coordinate
        let mut reference_point = vec![0; number_of_objectives];
        for objective in 0..number_of_objectives {
            let optimum = lexicographic_optimum(
                &edges,
                &sorted_edges[objective],
                number_of_vertices,
                number_of_objectives,
            );
            let other = 1 - objective;
            reference_point[other] += optimum[other];
        }

        let number_of_edges = edges.len();
        Ok(Self {
            number_of_vertices,
            number_of_objectives,
            edges,
            sorted_edges,
            supported_set,
            nondominated_set,
            reference_point,
            solution: vec![0; number_of_objectives],
            used_edges: vec![false; number_of_edges],
            edge_count: 0,
            union_find: UnionFind::new(number_of_vertices),
        })
    }

    /// Read an instance from a file.
    ///
    /// # Arguments
    ///
    /// * `path`: The instance file path.
    ///
    /// returns: `Result<MultiObjectiveSpanningTree, Error>`
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let data = fs::read_to_string(path)
            .map_err(|e| Error::File(path.to_path_buf(), e.to_string()))?;
        data.parse()
    }

    /// The instance edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The supported solutions carried by the instance file, when present.
    pub fn supported_set(&self) -> &[Solution] {
        &self.supported_set
    }

    /// The best completion cost of the current partial forest extended with the hypothetical
    /// edge, one objective at a time: walk that objective's sorted edges on a clone of the
    /// union-find, skip committed edges and the hypothetical one (already priced in by the
    /// caller), greedily accept edges joining distinct components and stop once enough edges
    /// have been taken. Each objective closes the tree as cheaply as it can on its own, so the
    /// vector is a valid lower bound on any completion through that edge.
    fn completion_bound(&self, hypothetical_edge: usize) -> Solution {
        let mut bound = vec![0; self.number_of_objectives];
        let needed = self.number_of_vertices - 1 - (self.edge_count + 1);
        if needed == 0 {
            return bound;
        }
        for (objective, total) in bound.iter_mut().enumerate() {
            let mut union_find = self.union_find.clone();
            let mut count = needed;
            for &idx in &self.sorted_edges[objective] {
                if self.used_edges[idx] || idx == hypothetical_edge {
                    continue;
                }
                let edge = &self.edges[idx];
                if !union_find.can_unite(edge.src, edge.dst) {
                    continue;
                }
                *total += edge.values[objective];
                union_find.unite(edge.src, edge.dst);
                count -= 1;
                if count == 0 {
                    break;
                }
            }
        }
        bound
    }
}

/// Run Kruskal over one objective's sorted edge order and return the full cost vector of the
/// resulting tree.
fn lexicographic_optimum(
    edges: &[Edge],
    order: &[usize],
    number_of_vertices: usize,
    number_of_objectives: usize,
) -> Solution {
    let mut union_find = UnionFind::new(number_of_vertices);
    let mut cost = vec![0; number_of_objectives];
    let mut count = number_of_vertices - 1;
    for &idx in order {
        let edge = &edges[idx];
        if !union_find.can_unite(edge.src, edge.dst) {
            continue;
        }
        for (total, value) in cost.iter_mut().zip(&edge.values) {
            *total += value;
        }
        union_find.unite(edge.src, edge.dst);
        count -= 1;
        if count == 0 {
            break;
        }
    }
    cost
}

impl FromStr for MultiObjectiveSpanningTree {
    type Err = Error;

    /// Parse the whitespace-delimited instance text: the vertex count, one
    /// `src dst cost_0 cost_1` line per edge of the complete graph, and optional trailing
    /// supported and non-dominated sets, each preceded by its size.
    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let number_of_objectives = 2;
        let mut tokens = data.split_whitespace();
        let number_of_vertices = next_count(&mut tokens, "number of vertices")?;
        if number_of_vertices < 2 {
            return Err(Error::ParseInstance(
                "the graph needs at least two vertices".to_string(),
            ));
        }
        let number_of_edges = number_of_vertices * (number_of_vertices - 1) / 2;

        let mut edges = Vec::with_capacity(number_of_edges);
        for index in 0..number_of_edges {
            let src = next_count(&mut tokens, &format!("source of edge {index}"))?;
            let dst = next_count(&mut tokens, &format!("destination of edge {index}"))?;
            let values = (0..number_of_objectives)
                .map(|j| next_int(&mut tokens, &format!("cost {j} of edge {index}")))
                .collect::<Result<Vec<i64>, Error>>()?;
            edges.push(Edge {
                index,
                src,
                dst,
                values,
            });
        }

        let supported_set = read_optional_set(&mut tokens, number_of_objectives, "supported set")?;
        let nondominated_set =
            read_optional_set(&mut tokens, number_of_objectives, "non-dominated set")?;
        Self::new(number_of_vertices, edges, supported_set, nondominated_set)
    }
}

impl Problem for MultiObjectiveSpanningTree {
    fn name(&self) -> String {
        "MOMST".to_string()
    }

    fn number_of_objectives(&self) -> usize {
        self.number_of_objectives
    }

    fn reset(&mut self) {
        self.solution = vec![0; self.number_of_objectives];
        self.used_edges = vec![false; self.edges.len()];
        self.edge_count = 0;
        self.union_find = UnionFind::new(self.number_of_vertices);
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
        for (i, edge) in self.edges.iter().enumerate() {
            if self.used_edges[i] || !self.union_find.can_unite(edge.src, edge.dst) {
                continue;
            }
            let completion = self.completion_bound(i);
            let projected: Solution = self
                .solution
                .iter()
                .zip(&edge.values)
                .zip(&completion)
                .map(|((total, value), remainder)| total + value + remainder)
                .collect();
            let contribution = indicator.contribution(&projected);
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
        let edge_index = selected_candidates[pick].id;
        debug!("Committing edge #{edge_index}");

        let edge = &self.edges[edge_index];
        for (total, value) in self.solution.iter_mut().zip(&edge.values) {
            *total += value;
        }
        self.used_edges[edge_index] = true;
        if !self.union_find.unite(edge.src, edge.dst) {
            return Err(Error::InvariantViolation(format!(
                "edge {} connects vertices {} and {} that are already in the same component",
                edge_index, edge.src, edge.dst
            )));
        }
        self.edge_count += 1;
        Ok(self.solution.clone())
    }

    fn is_feasible(&self, _solution: &Solution) -> bool {
        self.edge_count == self.number_of_vertices - 1
    }

    /// No local search is implemented for spanning trees; the solution is returned unchanged.
    fn improve_solution(
        &self,
        solution: &Solution,
        _archive: &[Solution],
        _rng: &mut dyn RngCore,
    ) -> (Solution, Vec<Solution>) {
        (solution.clone(), Vec::new())
    }
}

#[cfg(test)]
mod test {
    use crate::core::dominance::weakly_dominates;
    use crate::core::utils::get_rng;
    use crate::core::{Candidate, ObjectiveDirection, Solution};
    use crate::metrics::HypervolumeIndicator;
    use crate::problems::momst::{Edge, MultiObjectiveSpanningTree, UnionFind};
    use crate::problems::Problem;

    /// The triangle used throughout: spanning trees cost (3, 7), (4, 5) and (5, 4).
    const K3: &str = "3\n0 1 1 4\n0 2 2 3\n1 2 3 1\n";

    fn k3() -> MultiObjectiveSpanningTree {
        K3.parse().unwrap()
    }

    #[test]
    fn test_union_find() {
        let mut uf = UnionFind::new(4);
        assert!(uf.can_unite(0, 1));
        assert!(uf.unite(0, 1));
        assert!(!uf.can_unite(0, 1));
        assert!(!uf.unite(1, 0));

        // queries do not change the partition
        let before = uf.clone();
        assert!(uf.can_unite(2, 3));
        assert_eq!(uf.parent, before.parent);

        assert!(uf.unite(2, 3));
        assert!(uf.unite(0, 3));
        assert!(!uf.can_unite(1, 2));
    }

    #[test]
    /// Edges are ordered per objective with the remaining objectives as rotated tie-breakers.
    fn test_sorted_edge_orders() {
        let problem = k3();
        assert_eq!(problem.sorted_edges[0], vec![0, 1, 2]);
        assert_eq!(problem.sorted_edges[1], vec![2, 1, 0]);
    }

    #[test]
    /// The reference point combines the single-objective optima: the cost-0 optimum tree costs
    /// (3, 7) and the cost-1 optimum tree costs (5, 4).
    fn test_reference_point() {
        let problem = k3();
        assert_eq!(problem.reference_point(), vec![5, 7]);
    }

    #[test]
    /// Instances with an objective count other than two are refused.
    fn test_three_objectives_refused() {
        let edges = vec![
            Edge { index: 0, src: 0, dst: 1, values: vec![1, 2, 3] },
            Edge { index: 1, src: 0, dst: 2, values: vec![2, 3, 1] },
            Edge { index: 2, src: 1, dst: 2, values: vec![3, 1, 2] },
        ];
        let result = MultiObjectiveSpanningTree::new(3, edges, Vec::new(), Vec::new());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("2 objectives but the instance has 3"));
    }

    #[test]
    /// The completion bound closes the tree as cheaply as each objective can on its own and is
    /// at or below the cost of every true completion.
    fn test_completion_bound() {
        let problem = k3();
        // completing through edge 0 needs one more edge: objective 0 picks edge 1, objective 1
        // picks edge 2
        assert_eq!(problem.completion_bound(0), vec![2, 1]);

        let completions: [Solution; 2] = [vec![2, 3], vec![3, 1]];
        let bound = problem.completion_bound(0);
        for completion in &completions {
            assert!(weakly_dominates(
                completion,
                &bound,
                ObjectiveDirection::Minimise
            ));
        }
    }

    #[test]
    /// Nothing is left to price in once the hypothetical edge closes the tree.
    fn test_completion_bound_last_edge() {
        let mut problem = k3();
        let mut rng = get_rng(1);
        problem
            .choose_candidate(&[Candidate::new(0, 1)], &mut rng)
            .unwrap();
        assert_eq!(problem.completion_bound(2), vec![0, 0]);
    }

    #[test]
    /// Candidate projections from the empty forest, scored against the (5, 7) reference point.
    fn test_generate_candidates() {
        let problem = k3();
        let indicator =
            HypervolumeIndicator::new(&problem.reference_point(), ObjectiveDirection::Minimise);
        let candidates = problem.generate_candidates(&problem.empty_solution(), &indicator);
        assert_eq!(
            candidates,
            vec![
                Candidate::new(1, 6),
                Candidate::new(0, 4),
                Candidate::new(2, 3),
            ]
        );
    }

    #[test]
    /// Committing edges drives the construction to the (4, 5) tree.
    fn test_choose_candidate_builds_tree() {
        let mut problem = k3();
        let mut rng = get_rng(1);
        let indicator =
            HypervolumeIndicator::new(&problem.reference_point(), ObjectiveDirection::Minimise);

        let solution = problem
            .choose_candidate(&[Candidate::new(0, 4)], &mut rng)
            .unwrap();
        assert_eq!(solution, vec![1, 4]);
        assert!(!problem.is_feasible(&solution));

        // the (3, 7) completion through edge 1 is outside the reference region; only edge 2
        // survives
        let candidates = problem.generate_candidates(&solution, &indicator);
        assert_eq!(candidates, vec![Candidate::new(2, 2)]);

        let solution = problem
            .choose_candidate(&candidates, &mut rng)
            .unwrap();
        assert_eq!(solution, vec![4, 5]);
        assert!(problem.is_feasible(&solution));
    }

    #[test]
    /// Committing an edge inside one component is an invariant violation.
    fn test_choose_candidate_cycle_is_fatal() {
        let mut problem = k3();
        let mut rng = get_rng(1);
        problem
            .choose_candidate(&[Candidate::new(0, 1)], &mut rng)
            .unwrap();
        problem
            .choose_candidate(&[Candidate::new(2, 1)], &mut rng)
            .unwrap();

        let result = problem.choose_candidate(&[Candidate::new(1, 1)], &mut rng);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("already in the same component"));
    }

    #[test]
    fn test_reset() {
        let mut problem = k3();
        let mut rng = get_rng(1);
        problem
            .choose_candidate(&[Candidate::new(0, 1)], &mut rng)
            .unwrap();

        problem.reset();
        assert_eq!(problem.solution, vec![0, 0]);
        assert_eq!(problem.edge_count, 0);
        assert!(problem.used_edges.iter().all(|&used| !used));
        assert!(problem.union_find.can_unite(0, 1));
    }

    #[test]
    /// The local search is a no-op for spanning trees.
    fn test_improve_solution_is_identity() {
        let problem = k3();
        let mut rng = get_rng(1);
        let (solution, others) = problem.improve_solution(&vec![4, 5], &[], &mut rng);
        assert_eq!(solution, vec![4, 5]);
        assert!(others.is_empty());
    }

    #[test]
    /// Parse an instance with the optional supported and non-dominated sets.
    fn test_parse_instance() {
        let data = "3\n0 1 1 4\n0 2 2 3\n1 2 3 1\n2\n3 7\n5 4\n3\n3 7\n4 5\n5 4\n";
        let problem: MultiObjectiveSpanningTree = data.parse().unwrap();
        assert_eq!(problem.edges().len(), 3);
        assert_eq!(problem.supported_set(), &[vec![3, 7], vec![5, 4]]);
        assert_eq!(
            problem.nondominated_set(),
            &[vec![3, 7], vec![4, 5], vec![5, 4]]
        );

        let bare: MultiObjectiveSpanningTree = K3.parse().unwrap();
        assert!(bare.supported_set().is_empty());
        assert!(bare.nondominated_set().is_empty());
    }

    #[test]
    /// Malformed instances are rejected with a parse error.
    fn test_parse_errors() {
        let truncated = "3\n0 1 1 4\n0 2 2 3\n".parse::<MultiObjectiveSpanningTree>();
        assert!(truncated.unwrap_err().to_string().contains("edge 2"));

        let bad_vertex = "3\n0 1 1 4\n0 2 2 3\n1 5 3 1\n".parse::<MultiObjectiveSpanningTree>();
        assert!(bad_vertex.unwrap_err().to_string().contains("outside"));
    }
}
