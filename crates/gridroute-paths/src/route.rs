//! Route results and the top-level routing entry point.

use gridroute_core::{Node, Weight};

use crate::Graph;
use crate::error::RouteError;
use crate::extrapolate::Extrapolation;

/// A sequence of nodes from a start to an end, with its total weight.
///
/// The empty route (no nodes, weight 0) means "no path".
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub nodes: Vec<Node>,
    pub weight: Weight,
}

impl Route {
    /// The "no path" result.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn start(&self) -> Option<&Node> {
        self.nodes.first()
    }

    #[inline]
    pub fn end(&self) -> Option<&Node> {
        self.nodes.last()
    }
}

/// What [`Graph::find_route`] produced.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteOutcome {
    /// One origin: the cheapest route to any destination.
    Single(Route),
    /// Several origins: one searched route plus translated approximations.
    MultiStart(Extrapolation),
}

impl RouteOutcome {
    /// Whether no route was found at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(r) => r.is_empty(),
            Self::MultiStart(e) => e.primary().is_none_or(|r| r.nodes.is_empty()),
        }
    }
}

impl Graph {
    /// Route between the origins and destinations collected while building.
    ///
    /// With one origin, every destination is searched and the cheapest route
    /// wins. With several origins, the route from the first origin to the
    /// first destination is searched and the others are extrapolated from
    /// it; further destinations are ignored. Without any origin or
    /// destination the result is an empty route.
    ///
    /// Fails with [`RouteError::NodeNotFound`] when an origin or destination
    /// never made it into the graph.
    pub fn find_route(&self) -> Result<RouteOutcome, RouteError> {
        match self.starts() {
            [] => Ok(RouteOutcome::Single(Route::empty())),
            [start] => {
                let route = if self.ends().is_empty() {
                    Route::empty()
                } else {
                    self.shortest_to_any(start, self.ends())?
                };
                Ok(RouteOutcome::Single(route))
            }
            starts => {
                let Some(end) = self.ends().first() else {
                    return Ok(RouteOutcome::Single(Route::empty()));
                };
                if self.ends().len() > 1 {
                    log::debug!(
                        "{} origins: routing to {end} only, {} other destinations ignored",
                        starts.len(),
                        self.ends().len() - 1
                    );
                }
                Ok(RouteOutcome::MultiStart(self.extrapolate(starts, end)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridroute_core::GraphConfig;

    #[test]
    fn empty_graph_has_no_route() {
        let g = Graph::from_cells(Vec::<Node>::new(), GraphConfig::default());
        let out = g.find_route().unwrap();
        assert_eq!(out, RouteOutcome::Single(Route::empty()));
        assert!(out.is_empty());
    }

    #[test]
    fn no_destination_has_no_route() {
        let g = Graph::from_cells(
            [(0, 0, 0, "red"), (1, 0, 0, "white")],
            GraphConfig::default(),
        );
        assert_eq!(g.find_route().unwrap(), RouteOutcome::Single(Route::empty()));
    }

    #[test]
    fn single_origin_uses_cheapest_destination() {
        // red at x=0, greens at x=2 and x=4 along a white corridor.
        let g = Graph::from_cells(
            [
                (0, 0, 0, "red"),
                (1, 0, 0, "white"),
                (2, 0, 0, "green"),
                (3, 0, 0, "white"),
                (4, 0, 0, "green"),
            ],
            GraphConfig::default(),
        );
        let RouteOutcome::Single(route) = g.find_route().unwrap() else {
            panic!("expected a single route");
        };
        assert_eq!(route.end(), Some(&Node::new(2, 0, 0, "green")));
        assert_eq!(route.weight, 2.0);
        assert_eq!(route.len(), 3);
    }

    #[test]
    fn isolated_origin_is_an_error() {
        let g = Graph::from_cells(
            [(0, 0, 0, "red"), (5, 0, 0, "white"), (6, 0, 0, "green")],
            GraphConfig::default(),
        );
        let err = g.find_route().unwrap_err();
        assert!(matches!(err, RouteError::NodeNotFound(ref n) if n.color.is_start()));
    }

    #[test]
    fn several_origins_extrapolate() {
        let g = Graph::from_cells(
            [
                (0, 0, 0, "red"),
                (0, 1, 0, "red"),
                (1, 0, 0, "white"),
                (1, 1, 0, "white"),
                (2, 0, 0, "green"),
                (2, 1, 0, "white"),
            ],
            GraphConfig::default(),
        );
        let RouteOutcome::MultiStart(ex) = g.find_route().unwrap() else {
            panic!("expected extrapolated routes");
        };
        assert_eq!(ex.routes.len(), 2);
        assert_eq!(ex.routes[0].weight, Some(2.0));
        assert_eq!(
            ex.routes[1].nodes,
            vec![
                Node::new(0, 1, 0, "red"),
                Node::new(1, 1, 0, "white"),
                Node::new(2, 1, 0, "white"),
            ]
        );
    }
}
