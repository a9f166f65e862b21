use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock};

use gridroute_core::{GraphConfig, Node, Point3, Weight};

use crate::traits::WeightedGraph;

/// Weighted directed graph over grid cells.
///
/// The graph is populated once (see [`Graph::add_cells`]) and then queried
/// read-only. Nodes are never removed; each one keeps the index it was
/// registered with, which is also the order [`Graph::nodes`] returns.
#[derive(Clone, Debug)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) index: HashMap<Node, usize>,
    // Outgoing edges per node, keyed by target index.
    pub(crate) adjacency: Vec<BTreeMap<usize, Weight>>,
    // Registered nodes per position, in registration order.
    pub(crate) positions: HashMap<Point3, Vec<usize>>,
    pub(crate) num_edges: usize,
    pub(crate) start: Vec<Node>,
    pub(crate) end: Vec<Node>,
    pub(crate) config: GraphConfig,
    // Worker pool sized by `config`, built on the first dispatch.
    pub(crate) pool: OnceLock<Arc<rayon::ThreadPool>>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}

impl Graph {
    /// Create an empty graph that will be built with `config`.
    pub fn new(config: GraphConfig) -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            positions: HashMap::new(),
            num_edges: 0,
            start: Vec::new(),
            end: Vec::new(),
            config,
            pool: OnceLock::new(),
        }
    }

    /// Register `node` if absent. Returns `true` on first registration.
    pub fn add_node(&mut self, node: Node) -> bool {
        self.register(node).1
    }

    /// Register every node of `nodes`, in order.
    pub fn add_nodes<I: IntoIterator<Item = Node>>(&mut self, nodes: I) {
        for node in nodes {
            self.add_node(node);
        }
    }

    /// Add the edge `u -> v`, registering both endpoints first.
    ///
    /// An existing `u -> v` edge has its weight replaced; the previous
    /// weight is returned and the edge count is left unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `weight` is not finite and strictly positive.
    pub fn add_directed_edge(&mut self, u: Node, v: Node, weight: Weight) -> Option<Weight> {
        assert!(
            weight.is_finite() && weight > 0.0,
            "edge weight must be finite and positive, got {weight}"
        );
        let (ui, _) = self.register(u);
        let (vi, _) = self.register(v);
        let previous = self.adjacency[ui].insert(vi, weight);
        if previous.is_none() {
            self.num_edges += 1;
        }
        previous
    }

    fn register(&mut self, node: Node) -> (usize, bool) {
        if let Some(&i) = self.index.get(&node) {
            return (i, false);
        }
        let i = self.nodes.len();
        self.positions.entry(node.pos).or_default().push(i);
        self.index.insert(node.clone(), i);
        self.nodes.push(node);
        self.adjacency.push(BTreeMap::new());
        (i, true)
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct directed edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn contains(&self, node: &Node) -> bool {
        self.index.contains_key(node)
    }

    /// All registered nodes in registration order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Outgoing edges of `node` as `(neighbor, weight)` pairs, in neighbor
    /// registration order. Empty if `node` is not registered.
    pub fn neighbors(&self, node: &Node) -> Vec<(&Node, Weight)> {
        match self.index.get(node) {
            Some(&i) => self.adjacency[i]
                .iter()
                .map(|(&j, &w)| (&self.nodes[j], w))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Weight of the edge `u -> v`, if present.
    pub fn edge_weight(&self, u: &Node, v: &Node) -> Option<Weight> {
        let ui = *self.index.get(u)?;
        let vi = *self.index.get(v)?;
        self.adjacency[ui].get(&vi).copied()
    }

    /// Registered nodes at `pos`, whatever their colour, in registration
    /// order.
    pub fn nodes_at(&self, pos: Point3) -> impl Iterator<Item = &Node> + '_ {
        self.positions
            .get(&pos)
            .into_iter()
            .flatten()
            .map(|&i| &self.nodes[i])
    }

    /// Route origins collected while building, duplicates included.
    #[inline]
    pub fn starts(&self) -> &[Node] {
        &self.start
    }

    /// Route destinations collected while building, without duplicates.
    #[inline]
    pub fn ends(&self) -> &[Node] {
        &self.end
    }

    #[inline]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }
}

impl WeightedGraph for Graph {
    #[inline]
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    fn index_of(&self, node: &Node) -> Option<usize> {
        self.index.get(node).copied()
    }

    #[inline]
    fn node_at(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    fn edges(&self, idx: usize, buf: &mut Vec<(usize, Weight)>) {
        buf.extend(self.adjacency[idx].iter().map(|(&j, &w)| (j, w)));
    }
}
