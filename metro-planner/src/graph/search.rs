//! Exhaustive simple-path enumeration.
//!
//! Paths are walked depth-first with an explicit stack. Each frame carries
//! its branch as a reference-counted trail, so sibling branches share their
//! common prefix and each branch sees only the vertices on its own path as
//! visited. Completed paths are yielded in the order a recursive depth-first
//! walk would discover them.

use std::rc::Rc;

use super::Graph;

/// One vertex on a branch, linked back towards the start.
struct Trail<V> {
    vertex: V,
    prev: Option<Rc<Trail<V>>>,
    len: usize,
}

impl<V: PartialEq + Clone> Trail<V> {
    fn root(vertex: V) -> Rc<Self> {
        Rc::new(Self {
            vertex,
            prev: None,
            len: 1,
        })
    }

    fn extend(self: &Rc<Self>, vertex: V) -> Rc<Self> {
        Rc::new(Self {
            vertex,
            prev: Some(Rc::clone(self)),
            len: self.len + 1,
        })
    }

    fn contains(&self, vertex: &V) -> bool {
        let mut node = Some(self);
        while let Some(trail) = node {
            if &trail.vertex == vertex {
                return true;
            }
            node = trail.prev.as_deref();
        }
        false
    }

    /// Materialise the branch as a start-to-end vertex sequence.
    fn to_path(&self) -> Vec<V> {
        let mut path = Vec::with_capacity(self.len);
        let mut node = Some(self);
        while let Some(trail) = node {
            path.push(trail.vertex.clone());
            node = trail.prev.as_deref();
        }
        path.reverse();
        path
    }
}

enum Frame<V> {
    /// Branch still looking for the target.
    Expand(Rc<Trail<V>>),
    /// Branch that has just reached the target.
    Complete(Rc<Trail<V>>),
}

/// Lazily enumerates every simple path from a start vertex to a target.
///
/// A branch stops as soon as it reaches the target. When start and target
/// are the same vertex the walker yields cycles back to it, which is what
/// [`Graph::are_connected`] relies on.
pub(super) struct PathWalker<'g, V, W> {
    graph: &'g Graph<V, W>,
    target: V,
    max_vertices: Option<usize>,
    stack: Vec<Frame<V>>,
}

impl<'g, V: Ord + Clone, W> PathWalker<'g, V, W> {
    pub(super) fn new(
        graph: &'g Graph<V, W>,
        start: &V,
        target: &V,
        max_vertices: Option<usize>,
    ) -> Self {
        let mut stack = Vec::new();
        if graph.contains_vertex(start) && graph.contains_vertex(target) {
            stack.push(Frame::Expand(Trail::root(start.clone())));
        }
        Self {
            graph,
            target: target.clone(),
            max_vertices,
            stack,
        }
    }

    fn within_bound(&self, len: usize) -> bool {
        self.max_vertices.is_none_or(|max| len <= max)
    }
}

impl<V: Ord + Clone, W> Iterator for PathWalker<'_, V, W> {
    type Item = Vec<V>;

    fn next(&mut self) -> Option<Vec<V>> {
        let graph = self.graph;
        while let Some(frame) = self.stack.pop() {
            let trail = match frame {
                Frame::Complete(trail) => return Some(trail.to_path()),
                Frame::Expand(trail) => trail,
            };

            let Some(edges) = graph.get(&trail.vertex) else {
                continue;
            };
            if !self.within_bound(trail.len + 1) {
                continue;
            }

            // Reverse push so the smallest neighbour is explored first.
            for next in edges.keys().rev() {
                if next == &self.target {
                    self.stack.push(Frame::Complete(trail.extend(next.clone())));
                } else if !trail.contains(next) {
                    self.stack.push(Frame::Expand(trail.extend(next.clone())));
                }
            }
        }
        None
    }
}

/// Default tie-break rule: the path with the fewest vertices, earliest
/// discovered on ties.
pub fn fewest_vertices<V>(paths: Vec<Vec<V>>) -> Vec<V> {
    paths.into_iter().min_by_key(Vec::len).unwrap_or_default()
}
