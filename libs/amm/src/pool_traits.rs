//! Pool trait definitions for directional quoting

use crate::error::Result;
use crate::fee::FeeRate;
use crate::pricing::ReservePair;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which side of the pool the trader sells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapDirection {
    /// Sell token A, receive token B
    AtoB,
    /// Sell token B, receive token A
    BtoA,
}

impl SwapDirection {
    pub fn reverse(self) -> Self {
        match self {
            SwapDirection::AtoB => SwapDirection::BtoA,
            SwapDirection::BtoA => SwapDirection::AtoB,
        }
    }
}

/// Two-sided pool that can be quoted in either direction
pub trait AmmPool {
    /// Current reserves as (token A, token B) in human units
    fn reserves(&self) -> (Decimal, Decimal);

    /// Fee charged on swaps through this pool
    fn fee_rate(&self) -> FeeRate;

    /// Reserves oriented input-first for `direction`
    fn oriented(&self, direction: SwapDirection) -> Result<ReservePair> {
        let (reserve_a, reserve_b) = self.reserves();
        match direction {
            SwapDirection::AtoB => ReservePair::new(reserve_a, reserve_b),
            SwapDirection::BtoA => ReservePair::new(reserve_b, reserve_a),
        }
    }
}

/// Point-in-time reserves of a pool, as read from its token accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolSnapshot {
    pub reserve_a: Decimal,
    pub reserve_b: Decimal,
    pub fee: FeeRate,
}

impl PoolSnapshot {
    pub fn new(reserve_a: Decimal, reserve_b: Decimal, fee: FeeRate) -> Self {
        Self {
            reserve_a,
            reserve_b,
            fee,
        }
    }
}

impl AmmPool for PoolSnapshot {
    fn reserves(&self) -> (Decimal, Decimal) {
        (self.reserve_a, self.reserve_b)
    }

    fn fee_rate(&self) -> FeeRate {
        self.fee
    }
}
