//! Exchange - owns the routing graph for a fixed pool list

use crate::error::Result;
use crate::graph::Graph;
use crate::router::{NoopObserver, NumericPolicy, RouteExplorer, SwapObserver};
use crate::types::{Pool, RouteAndRate};

/// A fixed set of pools and the graph built from them.
///
/// The graph is built once in the constructor and never changes, so a shared
/// `&Exchange` can serve searches from several threads at once.
pub struct Exchange {
    graph: Graph,
    policy: NumericPolicy,
    observer: Box<dyn SwapObserver + Send + Sync>,
}

impl Exchange {
    /// Accept the pools as given, degenerate reserves included
    pub fn new(pools: &[Pool]) -> Self {
        Self {
            graph: Graph::build(pools),
            policy: NumericPolicy::Propagate,
            observer: Box::new(NoopObserver),
        }
    }

    /// Validate every pool up front and fail searches on non-finite amounts
    pub fn strict(pools: &[Pool]) -> Result<Self> {
        Ok(Self {
            graph: Graph::try_build(pools)?,
            policy: NumericPolicy::Reject,
            observer: Box::new(NoopObserver),
        })
    }

    pub fn with_observer(mut self, observer: impl SwapObserver + Send + Sync + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn policy(&self) -> NumericPolicy {
        self.policy
    }

    /// Every loop-free route from `from_token` to `destination` with its rate,
    /// in depth-first discovery order
    pub fn find_all_paths(
        &self,
        from_token: &str,
        amount: f64,
        destination: &str,
    ) -> Result<Vec<RouteAndRate>> {
        RouteExplorer::new(&self.graph)
            .with_observer(self.observer.as_ref())
            .with_policy(self.policy)
            .find_all_paths(from_token, amount, destination)
    }
}
