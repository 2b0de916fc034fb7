pub mod explorer;

pub use explorer::{LogObserver, NoopObserver, NumericPolicy, RouteExplorer, SwapObserver};
