//! Fan-out of single-pair searches over many destinations.

use std::sync::Arc;

use gridroute_core::{DispatchOptions, Node};
use rayon::ThreadPool;
use rayon::prelude::*;

use crate::Graph;
use crate::error::RouteError;
use crate::route::Route;

impl Graph {
    /// Cheapest route from `start` to any of `ends`, using the dispatch
    /// settings from the graph's configuration.
    pub fn shortest_to_any(&self, start: &Node, ends: &[Node]) -> Result<Route, RouteError> {
        self.shortest_to_any_with(start, ends, self.config().dispatch())
    }

    /// Cheapest route from `start` to any of `ends`.
    ///
    /// `ends` is split into batches of `opts.batch_size`; batches run in
    /// parallel on a pool of `opts.pool_size` threads and each batch is
    /// searched sequentially. The result does not depend on the sizing: the
    /// cheapest route wins and ties go to the earliest destination in
    /// `ends`. Destinations that cannot be reached are skipped; if none can,
    /// the empty route is returned.
    pub fn shortest_to_any_with(
        &self,
        start: &Node,
        ends: &[Node],
        opts: DispatchOptions,
    ) -> Result<Route, RouteError> {
        if ends.len() > opts.warn_threshold {
            log::warn!(
                "{} end candidates for {start}, routing may take a while",
                ends.len()
            );
        }
        if !self.contains(start) {
            log::warn!("Start node {start} not in graph");
            return Err(RouteError::NodeNotFound(start.clone()));
        }
        if let Some(missing) = ends.iter().find(|e| !self.contains(e)) {
            log::warn!("End node {missing} not in graph");
            return Err(RouteError::NodeNotFound(missing.clone()));
        }
        if ends.is_empty() {
            return Ok(Route::empty());
        }

        let pool = self.worker_pool(opts.pool_size)?;
        let batches: Vec<&[Node]> = ends.chunks(opts.batch_size.max(1)).collect();

        let routes: Vec<Vec<Route>> = pool.install(|| {
            batches
                .par_iter()
                .map(|batch| {
                    batch
                        .iter()
                        .map(|end| self.shortest_path(start, end))
                        .collect::<Result<Vec<_>, _>>()
                })
                .collect::<Result<Vec<_>, _>>()
        })?;

        Ok(cheapest(routes.into_iter().flatten()))
    }

    /// A pool of `size` threads. The configured size is built once and
    /// shared by every later dispatch on this graph; other sizes get a pool
    /// of their own.
    fn worker_pool(&self, size: usize) -> Result<Arc<ThreadPool>, RouteError> {
        let size = size.max(1);
        let build = || rayon::ThreadPoolBuilder::new().num_threads(size).build();
        if size != self.config.dispatch().pool_size.max(1) {
            return Ok(Arc::new(build()?));
        }
        if let Some(pool) = self.pool.get() {
            return Ok(Arc::clone(pool));
        }
        let pool = Arc::new(build()?);
        log::debug!("Worker pool of {size} threads created");
        Ok(Arc::clone(self.pool.get_or_init(|| pool)))
    }
}

/// First minimum-weight non-empty route, or the empty route.
fn cheapest<I: IntoIterator<Item = Route>>(routes: I) -> Route {
    let mut best: Option<Route> = None;
    for route in routes {
        if route.is_empty() {
            continue;
        }
        match &best {
            Some(b) if b.weight <= route.weight => {}
            _ => best = Some(route),
        }
    }
    best.unwrap_or_default()
}
