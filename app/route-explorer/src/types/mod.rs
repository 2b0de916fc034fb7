pub mod pool;
pub mod route;

pub use pool::{Pool, TokenAmount};
pub use route::{RouteAndRate, SwapHop};
