//! Shortest-path routing over labeled 3D cell grids.
//!
//! A [`Graph`] is built once from a list of coloured cells and then queried
//! read-only:
//!
//! - **Construction** from cells and a weight configuration
//!   ([`Graph::from_cells`], [`Graph::load`])
//! - **Dijkstra** single-pair search ([`Graph::shortest_path`], [`dijkstra`])
//! - **Dispatch** of one origin to many destinations on a worker pool
//!   ([`Graph::shortest_to_any`])
//! - **Extrapolation** of one searched route to several origins
//!   ([`Graph::extrapolate`])
//! - **Routing** between the red origins and green destinations found in
//!   the cells ([`Graph::find_route`])
//!
//! # Colour rules
//!
//! | Colour | Role |
//! |---|---|
//! | red | origin |
//! | green | destination, never linked across floors |
//! | black | wall, never linked |
//! | white | free passage, weight 1 |
//! | lightgray, darkgray | weight 1 next to white, else the source cell's `{colour}_weight` |
//! | anything else | plain terrain, weight 1 |

mod builder;
mod dijkstra;
mod dispatch;
mod error;
mod extrapolate;
mod graph;
mod route;
mod traits;

pub use builder::same_floor_weight;
pub use dijkstra::dijkstra;
pub use error::RouteError;
pub use extrapolate::{Extrapolation, StartRoute};
pub use graph::Graph;
pub use route::{Route, RouteOutcome};
pub use traits::WeightedGraph;

pub use gridroute_core::{Color, DispatchOptions, GraphConfig, Node, Point3, Weight};
