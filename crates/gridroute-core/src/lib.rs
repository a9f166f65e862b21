//! **gridroute-core** — value types for floor-plan routing.
//!
//! This crate provides the types shared by the routing crates: cell
//! positions, colour labels, graph nodes, and the weight configuration that
//! drives graph construction.

pub mod color;
pub mod config;
pub mod geom;
pub mod node;

pub use color::Color;
pub use config::{ConfigError, DEFAULT_WEIGHT, DispatchOptions, GraphConfig, Weight};
pub use geom::{Point3, chebyshev};
pub use node::Node;
