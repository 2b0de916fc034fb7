//! Route explorer - enumerates every loop-free route between two assets

use crate::calculator;
use crate::error::{Result, RouterError};
use crate::graph::{Graph, PoolEdge};
use crate::types::route::{RouteAndRate, SwapHop};
use log::debug;
use std::collections::HashSet;
use std::slice;

/// Receives every swap the explorer projects while walking the graph
#[cfg_attr(test, mockall::automock)]
pub trait SwapObserver {
    fn on_swap(&self, hop: &SwapHop);
}

/// Discards all hops
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SwapObserver for NoopObserver {
    fn on_swap(&self, _hop: &SwapHop) {}
}

/// Emits one `debug!` line per hop
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SwapObserver for LogObserver {
    fn on_swap(&self, hop: &SwapHop) {
        let impact = calculator::calculate_price_impact(
            hop.amount_in,
            hop.amount_out,
            hop.reserve_in,
            hop.reserve_out,
        );
        debug!(
            "{} -> {}: reserve_in={} reserve_out={} amount_in={} amount_out={} impact={:.4}%",
            hop.from,
            hop.to,
            hop.reserve_in,
            hop.reserve_out,
            hop.amount_in,
            hop.amount_out,
            impact * 100.0
        );
    }
}

static NOOP_OBSERVER: NoopObserver = NoopObserver;

/// What to do when a projected amount stops being a finite number
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumericPolicy {
    /// Carry NaN/inf through to the emitted rate
    #[default]
    Propagate,
    /// Fail the search on a non-finite amount or an unusable input amount
    Reject,
}

/// Remaining edges of one node on the current branch and the amount held there
struct Frame<'g> {
    edges: slice::Iter<'g, PoolEdge>,
    amount: f64,
}

/// Depth-first search over a built [`Graph`]
pub struct RouteExplorer<'a> {
    graph: &'a Graph,
    observer: &'a dyn SwapObserver,
    policy: NumericPolicy,
}

impl<'a> RouteExplorer<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            observer: &NOOP_OBSERVER,
            policy: NumericPolicy::default(),
        }
    }

    pub fn with_observer(mut self, observer: &'a dyn SwapObserver) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_policy(mut self, policy: NumericPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Find every route from `source` to `destination`
    ///
    /// Routes come back in discovery order: edges are tried in graph order
    /// and each branch is fully expanded before its next sibling. No asset
    /// appears twice on a route and the source is never revisited, so the
    /// route length is bounded by the number of assets.
    ///
    /// Under [`NumericPolicy::Propagate`] this never fails.
    pub fn find_all_paths(
        &self,
        source: &str,
        amount_in: f64,
        destination: &str,
    ) -> Result<Vec<RouteAndRate>> {
        if self.policy == NumericPolicy::Reject && !(amount_in.is_finite() && amount_in > 0.0) {
            return Err(RouterError::InvalidAmount(amount_in));
        }

        let routes = self.explore(source, destination, amount_in)?;
        debug!(
            "Found {} routes from {} to {}",
            routes.len(),
            source,
            destination
        );
        Ok(routes)
    }

    /// Walks the graph with an explicit stack so route length is not bounded
    /// by the thread stack. `path` and `visited` hold the current branch,
    /// starting with the source, and shrink as frames are popped.
    fn explore(
        &self,
        source: &str,
        destination: &str,
        amount_in: f64,
    ) -> Result<Vec<RouteAndRate>> {
        let mut found = Vec::new();

        if source == destination {
            // The source is implied and never emitted
            found.push(RouteAndRate::new(Vec::new(), amount_in, amount_in));
            return Ok(found);
        }

        let mut path: Vec<&str> = vec![source];
        let mut visited: HashSet<&str> = HashSet::from([source]);
        let mut stack = vec![Frame {
            edges: self.graph.edges(source).unwrap_or_default().iter(),
            amount: amount_in,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(edge) = frame.edges.next() else {
                stack.pop();
                if let Some(node) = path.pop() {
                    visited.remove(node);
                }
                continue;
            };

            // Avoid cycles
            if visited.contains(edge.symbol.as_str()) {
                continue;
            }

            let amount = frame.amount;
            let node = path.last().copied().unwrap_or(source);
            let amount_out = calculator::calculate_amount_out(amount, edge.amount_a, edge.amount_b);
            self.observer.on_swap(&SwapHop {
                from: node.to_string(),
                to: edge.symbol.clone(),
                reserve_in: edge.amount_a,
                reserve_out: edge.amount_b,
                amount_in: amount,
                amount_out,
            });

            if self.policy == NumericPolicy::Reject && !amount_out.is_finite() {
                return Err(RouterError::NonFiniteAmount {
                    from: node.to_string(),
                    to: edge.symbol.clone(),
                    amount: amount_out,
                });
            }

            if edge.symbol == destination {
                let route = path[1..]
                    .iter()
                    .map(|s| s.to_string())
                    .chain(std::iter::once(edge.symbol.clone()))
                    .collect();
                found.push(RouteAndRate::new(route, amount_out, amount_in));
                continue;
            }

            // Nodes without pools yield an empty frame and unwind on the next pass
            path.push(&edge.symbol);
            visited.insert(&edge.symbol);
            stack.push(Frame {
                edges: self.graph.edges(&edge.symbol).unwrap_or_default().iter(),
                amount: amount_out,
            });
        }

        Ok(found)
    }
}
