use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridroute_core::{Node, Weight};

use crate::Graph;
use crate::error::RouteError;
use crate::route::Route;
use crate::traits::WeightedGraph;

const NO_PARENT: usize = usize::MAX;

/// Open-list entry ordered by distance, then by node, smallest first.
struct Candidate<'a> {
    dist: Weight,
    node: &'a Node,
    idx: usize,
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate<'_> {}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest first.
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute the cheapest route from `start` to `end`.
///
/// Returns the node sequence including both endpoints and its total
/// weight, or an empty route when `end` cannot be reached. Ties between
/// equally distant nodes are settled in [`Node`] order, so the result is
/// the same on every run.
///
/// Both nodes must be registered in `graph`.
pub fn dijkstra<G: WeightedGraph + ?Sized>(
    graph: &G,
    start: &Node,
    end: &Node,
) -> Result<Route, RouteError> {
    let si = graph
        .index_of(start)
        .ok_or_else(|| RouteError::NodeNotFound(start.clone()))?;
    let ti = graph
        .index_of(end)
        .ok_or_else(|| RouteError::NodeNotFound(end.clone()))?;

    let n = graph.node_count();
    let mut dist = vec![Weight::INFINITY; n];
    let mut parent = vec![NO_PARENT; n];
    let mut settled = vec![false; n];

    dist[si] = 0.0;
    let mut open = BinaryHeap::new();
    open.push(Candidate {
        dist: 0.0,
        node: graph.node_at(si),
        idx: si,
    });

    let mut nbuf = Vec::new();
    while let Some(current) = open.pop() {
        let ci = current.idx;
        if settled[ci] {
            continue;
        }
        settled[ci] = true;
        if ci == ti {
            break;
        }

        nbuf.clear();
        graph.edges(ci, &mut nbuf);
        for &(ni, w) in &nbuf {
            if settled[ni] {
                continue;
            }
            let tentative = current.dist + w;
            if tentative < dist[ni] {
                dist[ni] = tentative;
                parent[ni] = ci;
                open.push(Candidate {
                    dist: tentative,
                    node: graph.node_at(ni),
                    idx: ni,
                });
            }
        }
    }

    // Walk back from the goal.
    let mut path = Vec::new();
    let mut ci = ti;
    while ci != NO_PARENT {
        path.push(graph.node_at(ci).clone());
        ci = parent[ci];
    }
    path.reverse();

    if path.first() != Some(start) || path.last() != Some(end) {
        log::debug!("No path found from {start} to {end}");
        return Ok(Route::empty());
    }

    Ok(Route {
        nodes: path,
        weight: dist[ti],
    })
}

impl Graph {
    /// Cheapest route from `start` to `end`; see [`dijkstra`].
    pub fn shortest_path(&self, start: &Node, end: &Node) -> Result<Route, RouteError> {
        dijkstra(self, start, end)
    }
}
