//! Turning a labeled cell list into a [`Graph`].

use std::collections::HashMap;
use std::path::Path;

use gridroute_core::{Color, DEFAULT_WEIGHT, GraphConfig, Node, Point3, Weight};

use crate::Graph;
use crate::error::RouteError;

impl Graph {
    /// Build a graph from `cells` with the given configuration.
    pub fn from_cells<I>(cells: I, config: GraphConfig) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        let mut g = Self::new(config);
        g.add_cells(cells);
        g
    }

    /// Load the configuration from `config_path` (default weights when
    /// `None`) and build a graph from `cells`.
    ///
    /// A configuration that cannot be loaded aborts construction.
    pub fn load<I>(cells: I, config_path: Option<&Path>) -> Result<Self, RouteError>
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        let config = GraphConfig::load(config_path)?;
        Ok(Self::from_cells(cells, config))
    }

    /// Add the nodes and edges derived from `cells`.
    ///
    /// Same floor: every ordered pair of distinct cells that are orthogonal
    /// neighbours (or share a position) gets an edge unless either one is a
    /// wall. Red cells are recorded as route origins and green cells as
    /// destinations.
    ///
    /// Between floors: every registered pair stacked one floor apart gets an
    /// edge weighted `between_floors_weight`, unless either node is green.
    pub fn add_cells<I>(&mut self, cells: I)
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        let cells: Vec<Node> = cells.into_iter().map(Into::into).collect();

        let mut by_pos: HashMap<Point3, Vec<usize>> = HashMap::new();
        for (i, cell) in cells.iter().enumerate() {
            by_pos.entry(cell.pos).or_default().push(i);
        }

        let mut candidates = Vec::new();
        for node in &cells {
            if node.color.is_start() {
                self.start.push(node.clone());
            } else if node.color.is_end() && !self.end.contains(node) {
                self.end.push(node.clone());
            }
            if node.color.is_wall() {
                continue;
            }

            // Visit neighbours in input order.
            candidates.clear();
            for p in node.pos.floor_adjacent() {
                if let Some(ids) = by_pos.get(&p) {
                    candidates.extend_from_slice(ids);
                }
            }
            candidates.sort_unstable();

            for &j in &candidates {
                let other = &cells[j];
                if other == node || other.color.is_wall() {
                    continue;
                }
                let weight = same_floor_weight(&self.config, &node.color, &other.color);
                self.add_directed_edge(node.clone(), other.clone(), weight);
            }
        }

        self.link_floors();

        log::debug!(
            "Graph built from {} cells: {} nodes, {} edges, {} starts, {} ends",
            cells.len(),
            self.num_nodes(),
            self.num_edges(),
            self.start.len(),
            self.end.len()
        );
    }

    fn link_floors(&mut self) {
        let weight = self.config.between_floors_weight();
        let mut pairs = Vec::new();
        for (i, a) in self.nodes.iter().enumerate() {
            if a.color.is_end() || a.color.is_wall() {
                continue;
            }
            let mut above_below: Vec<usize> = a
                .pos
                .vertical_neighbors()
                .filter_map(|p| self.positions.get(&p))
                .flatten()
                .copied()
                .collect();
            above_below.sort_unstable();
            for j in above_below {
                let b = &self.nodes[j];
                if !b.color.is_end() && !b.color.is_wall() {
                    pairs.push((i, j));
                }
            }
        }
        for (i, j) in pairs {
            let (a, b) = (self.nodes[i].clone(), self.nodes[j].clone());
            self.add_directed_edge(a, b, weight);
        }
    }
}

/// Weight of a same-floor edge from a `from` cell to a `to` cell.
///
/// Plain terrain costs 1. As soon as either side is white or gray the edge
/// costs 1 if either side is white, and otherwise the override configured
/// for the source colour.
pub fn same_floor_weight(config: &GraphConfig, from: &Color, to: &Color) -> Weight {
    if !(from.is_light_obstacle() || to.is_light_obstacle()) {
        return DEFAULT_WEIGHT;
    }
    if *from == Color::White || *to == Color::White {
        DEFAULT_WEIGHT
    } else {
        config.color_weight(from)
    }
}
