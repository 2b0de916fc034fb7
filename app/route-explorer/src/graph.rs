//! Adjacency structure built from a pool list

use crate::error::Result;
use crate::types::pool::Pool;
use log::debug;
use std::collections::HashMap;

/// Directed edge from a local asset to a neighbor through one pool
#[derive(Debug, Clone, PartialEq)]
pub struct PoolEdge {
    /// Neighbor asset symbol
    pub symbol: String,
    /// Pool reserve of the local asset
    pub amount_a: f64,
    /// Pool reserve of the neighbor asset
    pub amount_b: f64,
}

/// Bidirectional routing graph keyed by asset symbol.
///
/// Every pool contributes one edge in each direction. Parallel pools between
/// the same two assets stay as separate edges, and edge lists keep pool input
/// order. The graph is read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: HashMap<String, Vec<PoolEdge>>,
}

impl Graph {
    /// Build the graph without validating reserves or symbols
    pub fn build(pools: &[Pool]) -> Self {
        let mut graph = Self::default();

        for pool in pools {
            let (reserve_a, reserve_b) = pool.get_reserves(true);

            // Add edge from A to B
            graph.push_edge(
                &pool.token_a.symbol,
                PoolEdge {
                    symbol: pool.token_b.symbol.clone(),
                    amount_a: reserve_a,
                    amount_b: reserve_b,
                },
            );

            // Add edge from B to A
            let (reserve_in, reserve_out) = pool.get_reserves(false);
            graph.push_edge(
                &pool.token_b.symbol,
                PoolEdge {
                    symbol: pool.token_a.symbol.clone(),
                    amount_a: reserve_in,
                    amount_b: reserve_out,
                },
            );
        }

        debug!(
            "Built graph: {} assets, {} edges from {} pools",
            graph.node_count(),
            graph.edge_count(),
            pools.len()
        );

        graph
    }

    /// Build the graph, rejecting self-referential pools and reserves that
    /// are not finite and strictly positive
    pub fn try_build(pools: &[Pool]) -> Result<Self> {
        for (index, pool) in pools.iter().enumerate() {
            pool.validate(index)?;
        }
        Ok(Self::build(pools))
    }

    /// Append an edge to `from`'s list, creating the node if absent
    fn push_edge(&mut self, from: &str, edge: PoolEdge) {
        match self.nodes.get_mut(from) {
            Some(edges) => edges.push(edge),
            None => {
                self.nodes.insert(from.to_string(), vec![edge]);
            }
        }
    }

    /// Outgoing edges of `symbol`, or `None` if no pool touches it
    pub fn edges(&self, symbol: &str) -> Option<&[PoolEdge]> {
        self.nodes.get(symbol).map(Vec::as_slice)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.nodes.contains_key(symbol)
    }

    /// Number of distinct assets
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges (twice the pool count)
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Vec::len).sum()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }
}
