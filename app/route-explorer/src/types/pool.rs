//! Two-asset pool records as supplied by callers

use crate::error::{Result, RouterError};
use serde::{Deserialize, Serialize};

/// One side of a pool: an asset symbol and the reserve held for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenAmount {
    pub symbol: String,
    pub amount: f64,
}

impl TokenAmount {
    pub fn new(symbol: impl Into<String>, amount: f64) -> Self {
        Self {
            symbol: symbol.into(),
            amount,
        }
    }
}

/// A constant-product liquidity pool holding exactly two assets
///
/// Serialized as `{"tokenA": {"symbol", "amount"}, "tokenB": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    pub token_a: TokenAmount,
    pub token_b: TokenAmount,
}

impl Pool {
    pub fn new(
        symbol_a: impl Into<String>,
        amount_a: f64,
        symbol_b: impl Into<String>,
        amount_b: f64,
    ) -> Self {
        Self {
            token_a: TokenAmount::new(symbol_a, amount_a),
            token_b: TokenAmount::new(symbol_b, amount_b),
        }
    }

    /// Get reserves for a given direction
    pub fn get_reserves(&self, a_to_b: bool) -> (f64, f64) {
        if a_to_b {
            (self.token_a.amount, self.token_b.amount)
        } else {
            (self.token_b.amount, self.token_a.amount)
        }
    }

    /// Both sides name the same asset
    pub fn is_self_referential(&self) -> bool {
        self.token_a.symbol == self.token_b.symbol
    }

    /// Strict check used by validated graph construction.
    ///
    /// `index` is the pool's position in the input list and is only used
    /// for error reporting.
    pub fn validate(&self, index: usize) -> Result<()> {
        if self.is_self_referential() {
            return Err(RouterError::SelfReferentialPool {
                index,
                symbol: self.token_a.symbol.clone(),
            });
        }

        for side in [&self.token_a, &self.token_b] {
            if !side.amount.is_finite() || side.amount <= 0.0 {
                return Err(RouterError::InvalidLiquidity {
                    index,
                    reason: format!("{} reserve is {}", side.symbol, side.amount),
                });
            }
        }

        Ok(())
    }
}
