//! Approximate routes for several origins from a single searched route.
//!
//! Only the first origin is searched. Every other origin replays the same
//! sequence of steps from its own position, snapping to whatever node is
//! registered at each landing spot. The result is cheap but carries no
//! guarantee of being a valid or optimal route.

use gridroute_core::{Node, Point3, Weight};

use crate::Graph;
use crate::error::RouteError;

/// The route assigned to one origin.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartRoute {
    pub start: Node,
    pub nodes: Vec<Node>,
    /// Total weight of the searched route; `None` for translated ones.
    pub weight: Option<Weight>,
}

/// One route per origin, in origin order. The first is the searched one.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extrapolation {
    pub routes: Vec<StartRoute>,
}

impl Extrapolation {
    /// The searched route.
    pub fn primary(&self) -> Option<&StartRoute> {
        self.routes.first()
    }

    /// The first route assigned to `start`.
    pub fn get(&self, start: &Node) -> Option<&StartRoute> {
        self.routes.iter().find(|r| &r.start == start)
    }

    /// All routes flattened into one sequence: the searched route, then
    /// each translated route without its origin.
    pub fn combined(&self) -> Vec<Node> {
        let mut out = Vec::new();
        for (i, r) in self.routes.iter().enumerate() {
            let skip = if i == 0 { 0 } else { 1 };
            out.extend(r.nodes.iter().skip(skip).cloned());
        }
        out
    }
}

impl Graph {
    /// Search the route from `starts[0]` to `end` and translate it to every
    /// other origin.
    ///
    /// For each step of the searched route the displacement (x, y and floor
    /// alike) is applied to the origin's current position; the first node
    /// registered at the landing position (any colour) is appended and
    /// becomes the new position. When nothing is registered there the previous node is
    /// repeated, so every translated route has the searched route's length.
    /// If the searched route is empty, so are the translated ones.
    pub fn extrapolate(&self, starts: &[Node], end: &Node) -> Result<Extrapolation, RouteError> {
        let Some(first) = starts.first() else {
            return Ok(Extrapolation::default());
        };
        if let Some(missing) = starts.iter().find(|s| !self.contains(s)) {
            log::warn!("Start node {missing} not in graph");
            return Err(RouteError::NodeNotFound(missing.clone()));
        }

        let primary = self.shortest_path(first, end)?;
        let steps: Vec<Option<Point3>> = primary
            .nodes
            .windows(2)
            .map(|w| w[1].pos.checked_sub(w[0].pos))
            .collect();
        let found = !primary.is_empty();

        let mut routes = Vec::with_capacity(starts.len());
        routes.push(StartRoute {
            start: first.clone(),
            nodes: primary.nodes,
            weight: Some(primary.weight),
        });

        for start in &starts[1..] {
            let nodes = if found {
                self.translate(start, &steps)
            } else {
                Vec::new()
            };
            routes.push(StartRoute {
                start: start.clone(),
                nodes,
                weight: None,
            });
        }

        Ok(Extrapolation { routes })
    }

    fn translate(&self, start: &Node, steps: &[Option<Point3>]) -> Vec<Node> {
        let mut nodes = Vec::with_capacity(steps.len() + 1);
        let mut cursor = start.clone();
        nodes.push(cursor.clone());
        for step in steps {
            // A landing spot outside the i32 range counts as unregistered.
            let landing = step.and_then(|d| cursor.pos.checked_add(d));
            if let Some(next) = landing.and_then(|p| self.nodes_at(p).next()) {
                cursor = next.clone();
            }
            nodes.push(cursor.clone());
        }
        nodes
    }
}
