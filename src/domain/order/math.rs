//! Fill-amount math: converting a taker-side quantity into the maker side.

use super::SignedOrder;
use crate::shared::Amount;
use num_bigint::BigUint;

/// Computes how much maker asset a taker fill of a given size releases.
pub trait FillAmountCalculator: Send + Sync {
    fn maker_fill_amount(&self, order: &SignedOrder, taker_fill_amount: &Amount) -> Amount;
}

/// `floor(taker_fill * makerAssetAmount / takerAssetAmount)`.
///
/// Rounds toward zero like exchange settlement, so the result never exceeds
/// what the maker actually releases. An order with a zero taker amount has
/// nothing fillable.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloorFillCalculator;

impl FillAmountCalculator for FloorFillCalculator {
    fn maker_fill_amount(&self, order: &SignedOrder, taker_fill_amount: &Amount) -> Amount {
        if order.taker_asset_amount.is_zero() {
            return Amount::zero();
        }
        let numerator: BigUint =
            taker_fill_amount.as_biguint() * order.maker_asset_amount.as_biguint();
        Amount::new(numerator / order.taker_asset_amount.as_biguint())
    }
}
