use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt::{self, Debug, Formatter};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyError<N>
where
    N: Debug,
{
    #[error("cycle detected in dependency graph: {0:?}")]
    Cycle(DepRoute<N>),
    #[error("duplicate edge in dependency graph: {0:?}")]
    DuplicateEdge(DepRoute<N>),
}

/// A path through the graph, used for error reporting.
pub struct DepRoute<N> {
    route: Vec<N>,
}

impl<N: Debug> Debug for DepRoute<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for node in &self.route {
            if !first {
                write!(f, " -> ")?;
            }
            write!(f, "{node:?}")?;
            first = false;
        }
        Ok(())
    }
}

/// Directed dependency graph between registered slots.
///
/// Edges point from a dependency to its dependents, so `dependents(node)`
/// answers "what must recompute when `node` changes".
#[derive(Debug, Default)]
pub struct Graph<N>
where
    N: Debug + Copy + Ord,
{
    edges: Vec<(N, N)>,

    // Transitive-dependents cache, invalidated on every new edge.
    reach_cache: BTreeMap<N, BTreeSet<N>>,
}

impl<N> Graph<N>
where
    N: Debug + Copy + Ord,
{
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            reach_cache: BTreeMap::new(),
        }
    }

    pub fn route_to(&mut self, from: N, to: N) {
        self.edges.push((from, to));
        self.reach_cache.clear();
    }

    /// All transitive dependents of `node` (excluding `node` itself unless
    /// it sits on a cycle). BFS over the edge list, cached per node.
    pub fn dependents(&mut self, node: N) -> &BTreeSet<N> {
        self.reach_cache.entry(node).or_insert_with(|| {
            let mut reached = BTreeSet::new();
            let mut queue = VecDeque::from([node]);
            while let Some(current) = queue.pop_front() {
                for (from, to) in &self.edges {
                    if *from == current && reached.insert(*to) {
                        queue.push_back(*to);
                    }
                }
            }
            reached
        })
    }

    /// Check the graph is a DAG with unique edges.
    ///
    /// Kahn's algorithm; when it stalls, a DFS extracts one concrete cycle
    /// for the error message.
    pub fn verify(&self) -> Result<(), TopologyError<N>> {
        let mut seen = BTreeSet::new();
        for edge in &self.edges {
            if !seen.insert(*edge) {
                return Err(TopologyError::DuplicateEdge(DepRoute {
                    route: vec![edge.0, edge.1],
                }));
            }
        }

        let mut in_degree = BTreeMap::<N, usize>::new();
        for (from, to) in &self.edges {
            in_degree.entry(*from).or_insert(0);
            *in_degree.entry(*to).or_insert(0) += 1;
        }

        let mut ready: VecDeque<N> = in_degree
            .iter()
            .filter(|(_, degree)| **degree == 0)
            .map(|(node, _)| *node)
            .collect();
        let mut remaining = in_degree.len();

        while let Some(node) = ready.pop_front() {
            remaining -= 1;
            for (from, to) in &self.edges {
                if *from != node {
                    continue;
                }
                if let Some(degree) = in_degree.get_mut(to) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.push_back(*to);
                    }
                }
            }
        }

        if remaining == 0 {
            return Ok(());
        }

        // Some nodes never reached in-degree zero: a cycle exists among them.
        let stuck: Vec<N> = in_degree
            .into_iter()
            .filter(|(_, degree)| *degree > 0)
            .map(|(node, _)| node)
            .collect();
        Err(TopologyError::Cycle(DepRoute {
            route: self.find_cycle(&stuck).unwrap_or(stuck),
        }))
    }

    fn find_cycle(&self, nodes: &[N]) -> Option<Vec<N>> {
        for &start in nodes {
            let mut path = vec![start];
            let mut on_path = BTreeSet::from([start]);
            if let Some(cycle) = self.walk_cycle(nodes, &mut path, &mut on_path) {
                return Some(cycle);
            }
        }
        None
    }

    fn walk_cycle(&self, nodes: &[N], path: &mut Vec<N>, on_path: &mut BTreeSet<N>) -> Option<Vec<N>> {
        let current = *path.last()?;
        for (from, to) in &self.edges {
            if *from != current || !nodes.contains(to) {
                continue;
            }
            if on_path.contains(to) {
                let start = path.iter().position(|n| n == to)?;
                let mut cycle = path[start..].to_vec();
                cycle.push(*to);
                return Some(cycle);
            }
            path.push(*to);
            on_path.insert(*to);
            if let Some(cycle) = self.walk_cycle(nodes, path, on_path) {
                return Some(cycle);
            }
            on_path.remove(to);
            path.pop();
        }
        None
    }
}
