use gridroute_core::{Node, Weight};

/// Read-only view of a weighted directed graph with densely indexed nodes.
///
/// Indices run from `0` to `node_count() - 1` and are stable for the
/// lifetime of the graph.
pub trait WeightedGraph {
    fn node_count(&self) -> usize;

    /// Index of `node`, or `None` if it was never registered.
    fn index_of(&self, node: &Node) -> Option<usize>;

    /// The node stored at `idx`. Panics if `idx` is out of range.
    fn node_at(&self, idx: usize) -> &Node;

    /// Append the outgoing edges of `idx` as `(target, weight)` pairs into
    /// `buf`. The caller clears `buf` before calling. Weights must be > 0.
    fn edges(&self, idx: usize, buf: &mut Vec<(usize, Weight)>);
}
