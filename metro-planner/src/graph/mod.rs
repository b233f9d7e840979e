//! Generic directed graph with weighted edges.
//!
//! Vertices are any ordered, clonable values; edge weights are arbitrary
//! payloads. Edges are directed: an undirected relationship is two edges,
//! one in each direction, and the graph never checks for symmetry.
//!
//! Writing an edge creates both of its endpoints. Reading never creates
//! anything: [`Graph::get`], [`Graph::weight`] and the `contains_*` methods
//! are side-effect free, and [`Graph::insert_vertex`] is the explicit
//! "ensure it exists" operation.

mod search;

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Add;

use search::PathWalker;
pub use search::fewest_vertices;

/// Outgoing edges of one vertex, keyed by destination.
pub type Edges<V, W> = BTreeMap<V, W>;

/// A mutable directed graph with weighted edges.
///
/// Adjacency is kept in ordered maps, so vertex, neighbour, edge and path
/// enumeration are all deterministic.
///
/// # Examples
///
/// ```
/// use metro_planner::graph::Graph;
///
/// let mut g = Graph::new();
/// g.set_edge("a", "b", 3);
/// g.set_edge("b", "c", 4);
///
/// assert!(g.contains_vertex(&"c"));
/// assert_eq!(g.path_length(&["a", "b", "c"]), Some(7));
/// assert_eq!(g.start_search(&"a", &"c"), vec!["a", "b", "c"]);
/// assert!(g.start_search(&"c", &"a").is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<V, W> {
    nodes: BTreeMap<V, Edges<V, W>>,
}

impl<V, W> Default for Graph<V, W> {
    fn default() -> Self {
        Self {
            nodes: BTreeMap::new(),
        }
    }
}

impl<V: Ord + Clone, W> Graph<V, W> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `vertex` exists, returning its outgoing edges.
    pub fn insert_vertex(&mut self, vertex: V) -> &mut Edges<V, W> {
        self.nodes.entry(vertex).or_default()
    }

    /// Add or replace the edge `src -> dst`, creating either vertex if absent.
    ///
    /// Returns the weight that was replaced, if any.
    pub fn set_edge(&mut self, src: V, dst: V, weight: W) -> Option<W> {
        self.nodes.entry(dst.clone()).or_default();
        self.insert_vertex(src).insert(dst, weight)
    }

    /// Outgoing edges of `vertex`, if it exists.
    pub fn get(&self, vertex: &V) -> Option<&Edges<V, W>> {
        self.nodes.get(vertex)
    }

    /// Weight of the edge `src -> dst`, if it exists.
    pub fn weight(&self, src: &V, dst: &V) -> Option<&W> {
        self.nodes.get(src)?.get(dst)
    }

    /// Remove `vertex` and every edge into or out of it.
    ///
    /// Returns `false` (and does nothing) if the vertex was absent.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        if self.nodes.remove(vertex).is_none() {
            return false;
        }
        for edges in self.nodes.values_mut() {
            edges.remove(vertex);
        }
        true
    }

    /// Remove the edge `src -> dst` if present, leaving both vertices.
    pub fn remove_edge(&mut self, src: &V, dst: &V) -> Option<W> {
        self.nodes.get_mut(src)?.remove(dst)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.nodes.contains_key(vertex)
    }

    pub fn contains_edge(&self, src: &V, dst: &V) -> bool {
        self.weight(src, dst).is_some()
    }

    /// Destinations reachable from `vertex` by a single edge.
    pub fn neighbors(&self, vertex: &V) -> BTreeSet<V> {
        self.nodes
            .get(vertex)
            .map(|edges| edges.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Out-degree of `vertex`; zero if absent.
    pub fn degree(&self, vertex: &V) -> usize {
        self.nodes.get(vertex).map_or(0, BTreeMap::len)
    }

    pub fn vertices(&self) -> BTreeSet<V> {
        self.nodes.keys().cloned().collect()
    }

    /// Iterate over every edge as `(src, dst, weight)`, ordered by source then
    /// destination.
    pub fn iter_edges(&self) -> impl Iterator<Item = (&V, &V, &W)> {
        self.nodes
            .iter()
            .flat_map(|(src, edges)| edges.iter().map(move |(dst, w)| (src, dst, w)))
    }

    /// Every edge as an owned `(src, dst, weight)` triple.
    pub fn edges(&self) -> Vec<(V, V, W)>
    where
        W: Clone,
    {
        self.iter_edges()
            .map(|(src, dst, w)| (src.clone(), dst.clone(), w.clone()))
            .collect()
    }

    /// Remove every vertex and edge.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Whether `path` is a walk through existing edges.
    ///
    /// The empty path is valid; a single vertex is valid iff it exists.
    pub fn is_valid_path(&self, path: &[V]) -> bool {
        match path {
            [] => true,
            [only] => self.contains_vertex(only),
            _ => path
                .windows(2)
                .all(|pair| self.contains_edge(&pair[0], &pair[1])),
        }
    }

    /// Sum of the edge weights along `path`.
    ///
    /// Weights are combined pairwise with `+`. Returns `None` for paths of
    /// fewer than two vertices or paths that use a missing edge.
    pub fn path_length(&self, path: &[V]) -> Option<W>
    where
        W: Clone + Add<Output = W>,
    {
        let mut pairs = path.windows(2);
        let first = pairs.next()?;
        let mut total = self.weight(&first[0], &first[1])?.clone();
        for pair in pairs {
            total = total + self.weight(&pair[0], &pair[1])?.clone();
        }
        Some(total)
    }

    /// Whether a directed path of at least one edge leads from `src` to `dst`.
    ///
    /// `are_connected(x, x)` holds only if a cycle through some other vertex
    /// returns to `x`; a self-loop alone does not count.
    pub fn are_connected(&self, src: &V, dst: &V) -> bool {
        PathWalker::new(self, src, dst, None).any(|path| src != dst || path.len() > 2)
    }

    /// Whether every ordered pair of distinct vertices is connected.
    pub fn is_connected(&self) -> bool {
        self.nodes.keys().all(|src| {
            self.nodes
                .keys()
                .filter(|dst| *dst != src)
                .all(|dst| self.are_connected(src, dst))
        })
    }

    /// Every simple path from `start` to `target`, in discovery order.
    ///
    /// Empty when `start == target` or when either vertex is absent.
    pub fn simple_paths(&self, start: &V, target: &V) -> Vec<Vec<V>> {
        self.simple_paths_bounded(start, target, None)
    }

    /// Like [`Graph::simple_paths`], skipping paths with more than
    /// `max_vertices` vertices. `None` enumerates everything.
    pub fn simple_paths_bounded(
        &self,
        start: &V,
        target: &V,
        max_vertices: Option<usize>,
    ) -> Vec<Vec<V>> {
        if start == target {
            return Vec::new();
        }
        PathWalker::new(self, start, target, max_vertices).collect()
    }

    /// A simple path from `start` to `target` with the fewest vertices.
    ///
    /// Returns an empty vector if there is none.
    pub fn start_search(&self, start: &V, target: &V) -> Vec<V> {
        self.start_search_with(start, target, None, fewest_vertices)
    }

    /// Enumerate every simple path from `start` to `target`, then let `rule`
    /// pick one. The rule is never called with an empty candidate list.
    pub fn start_search_by<F>(&self, start: &V, target: &V, rule: F) -> Vec<V>
    where
        F: FnOnce(Vec<Vec<V>>) -> Vec<V>,
    {
        self.start_search_with(start, target, None, rule)
    }

    /// [`Graph::start_search_by`] with an optional bound on path size.
    pub fn start_search_with<F>(
        &self,
        start: &V,
        target: &V,
        max_vertices: Option<usize>,
        rule: F,
    ) -> Vec<V>
    where
        F: FnOnce(Vec<Vec<V>>) -> Vec<V>,
    {
        let paths = self.simple_paths_bounded(start, target, max_vertices);
        if paths.is_empty() {
            return Vec::new();
        }
        rule(paths)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    /// Small graphs over vertices 0..6 so exhaustive search stays cheap.
    fn small_graph() -> impl Strategy<Value = Graph<u8, u32>> {
        proptest::collection::vec((0u8..6, 0u8..6, 1u32..20), 0..14).prop_map(|edges| {
            let mut g = Graph::new();
            for (src, dst, w) in edges {
                g.set_edge(src, dst, w);
            }
            g
        })
    }

    /// Plain breadth-first reachability through some vertex other than `src`.
    fn reachable(g: &Graph<u8, u32>, src: u8, dst: u8) -> bool {
        let mut seen = BTreeSet::new();
        let mut queue: VecDeque<u8> = g
            .neighbors(&src)
            .into_iter()
            .filter(|v| *v != src)
            .collect();
        while let Some(v) = queue.pop_front() {
            if v == dst {
                return true;
            }
            if seen.insert(v) {
                queue.extend(g.neighbors(&v));
            }
        }
        false
    }

    proptest! {
        /// Writing an edge creates both endpoints and the edge itself
        #[test]
        fn set_edge_creates_endpoints(mut g in small_graph(), a in 0u8..10, b in 0u8..10, w in 1u32..20) {
            g.set_edge(a, b, w);
            prop_assert!(g.contains_vertex(&a));
            prop_assert!(g.contains_vertex(&b));
            prop_assert_eq!(g.weight(&a, &b), Some(&w));
        }

        /// Removing a vertex removes every incident edge
        #[test]
        fn remove_vertex_drops_incident_edges(mut g in small_graph(), v in 0u8..6) {
            g.remove_vertex(&v);
            prop_assert!(!g.contains_vertex(&v));
            prop_assert!(g.edges().iter().all(|(src, dst, _)| *src != v && *dst != v));
        }

        /// A single vertex path is valid iff the vertex exists
        #[test]
        fn singleton_path_validity(g in small_graph(), v in 0u8..8) {
            prop_assert!(g.is_valid_path(&[]));
            prop_assert_eq!(g.is_valid_path(&[v]), g.contains_vertex(&v));
        }

        /// Search results are valid paths, and empty only when unreachable
        #[test]
        fn start_search_matches_reachability(g in small_graph(), s in 0u8..6, t in 0u8..6) {
            prop_assume!(s != t);
            let path = g.start_search(&s, &t);
            if reachable(&g, s, t) {
                prop_assert!(g.is_valid_path(&path));
                prop_assert_eq!(path.first(), Some(&s));
                prop_assert_eq!(path.last(), Some(&t));
                let distinct: BTreeSet<_> = path.iter().collect();
                prop_assert_eq!(distinct.len(), path.len());
            } else {
                prop_assert!(path.is_empty());
            }
        }

        /// are_connected agrees with plain reachability, self pairs included
        #[test]
        fn are_connected_matches_reachability(g in small_graph(), s in 0u8..6, t in 0u8..6) {
            prop_assert_eq!(g.are_connected(&s, &t), reachable(&g, s, t));
        }

        /// Path length is the sum of consecutive edge weights
        #[test]
        fn path_length_sums_weights(g in small_graph(), s in 0u8..6, t in 0u8..6) {
            let path = g.start_search(&s, &t);
            if path.len() >= 2 {
                let expected: u32 = path
                    .windows(2)
                    .map(|pair| g.weight(&pair[0], &pair[1]).copied().unwrap_or_default())
                    .sum();
                prop_assert_eq!(g.path_length(&path), Some(expected));
            }
        }

        /// Mutating a copy leaves the original untouched
        #[test]
        fn clone_is_independent(g in small_graph(), a in 0u8..10, b in 0u8..10) {
            let before = g.edges();
            let mut copy = g.clone();
            prop_assert_eq!(copy.edges(), before.clone());
            prop_assert_eq!(copy.vertices(), g.vertices());

            copy.set_edge(a, b, 99);
            copy.remove_vertex(&0);
            prop_assert_eq!(g.edges(), before);
        }
    }
}
