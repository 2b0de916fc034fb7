//! Route Explorer
//!
//! This library enumerates every loop-free swap route between two assets
//! across a network of two-asset constant-product pools, and prices each
//! route by composing the AMM output formula hop by hop.

pub mod calculator;
pub mod config;
pub mod error;
pub mod exchange;
pub mod graph;
pub mod loader;
pub mod router;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, RouterError};
pub use exchange::Exchange;
pub use graph::{Graph, PoolEdge};
pub use router::{NumericPolicy, RouteExplorer, SwapObserver};
pub use types::{Pool, RouteAndRate, SwapHop, TokenAmount};
