use std::fmt;

use gridroute_core::{ConfigError, Node};

/// Errors reported by graph construction and routing.
///
/// A query with no route is not an error; it yields an empty
/// [`Route`](crate::Route).
#[derive(Debug)]
pub enum RouteError {
    /// A start or end node was never registered in the graph.
    NodeNotFound(Node),
    /// The search worker pool could not be created.
    WorkerPool(String),
    /// The weight configuration could not be loaded.
    Config(ConfigError),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeNotFound(node) => write!(f, "node {node} not found in graph"),
            Self::WorkerPool(msg) => write!(f, "cannot start search workers: {msg}"),
            Self::Config(e) => write!(f, "graph config: {e}"),
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for RouteError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<rayon::ThreadPoolBuildError> for RouteError {
    fn from(e: rayon::ThreadPoolBuildError) -> Self {
        Self::WorkerPool(e.to_string())
    }
}
