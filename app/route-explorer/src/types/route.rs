//! Route results and per-hop swap records

use serde::Serialize;

/// A single swap projected along one edge of a route
#[derive(Debug, Clone, PartialEq)]
pub struct SwapHop {
    /// Asset being sold
    pub from: String,
    /// Asset being bought
    pub to: String,
    /// Pool reserve of `from`
    pub reserve_in: f64,
    /// Pool reserve of `to`
    pub reserve_out: f64,
    /// Amount of `from` swapped in
    pub amount_in: f64,
    /// Projected amount of `to` received
    pub amount_out: f64,
}

/// A loop-free route from the source asset to the destination and its rate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteAndRate {
    /// Assets visited after the source, ending at the destination
    pub route: Vec<String>,
    /// Destination amount received per unit of source amount supplied
    pub rate: f64,
    /// Projected amount delivered at the destination
    pub amount_out: f64,
}

impl RouteAndRate {
    pub fn new(route: Vec<String>, amount_out: f64, amount_in: f64) -> Self {
        Self {
            route,
            rate: amount_out / amount_in,
            amount_out,
        }
    }

    /// Get the number of swaps in the route
    pub fn hop_count(&self) -> usize {
        self.route.len()
    }

    /// Check if this is a direct swap (single hop)
    pub fn is_direct(&self) -> bool {
        self.route.len() == 1
    }

    /// False for NaN or infinite rates, which JSON output writes as `null`
    pub fn has_finite_rate(&self) -> bool {
        self.rate.is_finite() && self.amount_out.is_finite()
    }

    /// Last asset of the route
    pub fn destination(&self) -> Option<&str> {
        self.route.last().map(String::as_str)
    }
}
