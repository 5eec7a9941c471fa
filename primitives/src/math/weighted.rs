// Copyright 2024-2025 Forecasting Technologies LTD.
//
// This file is part of Zeitgeist.
//
// Zeitgeist is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published by the
// Free Software Foundation, either version 3 of the License, or (at
// your option) any later version.
//
// Zeitgeist is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Zeitgeist. If not, see <https://www.gnu.org/licenses/>.
//
// This file incorporates work covered by the license above but
// published without copyright notice by Balancer Labs
// (<https://balancer.finance>, contact@balancer.finance) in the
// balancer-core repository
// <https://github.com/balancer-labs/balancer-core>.

//! Pricing formulas of the weighted constant-product market maker.
//!
//! Weights are denormalized. All values use 18 decimals. Every function rounds in the direction
//! of the underlying fixed point operations, which is down.

use crate::{
    constants::BASE,
    math::{
        checked_ops_res::{CheckedAddRes, CheckedSubRes},
        fixed::{bdiv, bmul, bpow},
    },
};
use sp_runtime::DispatchError;

/// Spot price of `asset_in` in units of `asset_out`, including the swap fee.
///
/// `spot = (balance_in / weight_in) / (balance_out / weight_out) * 1 / (1 - swap_fee)`
pub fn calc_spot_price(
    balance_in: u128,
    weight_in: u128,
    balance_out: u128,
    weight_out: u128,
    swap_fee: u128,
) -> Result<u128, DispatchError> {
    let numer = bdiv(balance_in, weight_in)?;
    let denom = bdiv(balance_out, weight_out)?;
    let ratio = bdiv(numer, denom)?;
    let scale = bdiv(BASE, BASE.checked_sub_res(&swap_fee)?)?;
    bmul(ratio, scale)
}

/// Amount of `asset_out` received for `amount_in` of `asset_in`.
///
/// `amount_out = balance_out * (1 - (balance_in / (balance_in + amount_in * (1 - swap_fee)))
/// ^ (weight_in / weight_out))`
pub fn calc_out_given_in(
    balance_in: u128,
    weight_in: u128,
    balance_out: u128,
    weight_out: u128,
    amount_in: u128,
    swap_fee: u128,
) -> Result<u128, DispatchError> {
    let weight_ratio = bdiv(weight_in, weight_out)?;
    let adjusted_in = bmul(amount_in, BASE.checked_sub_res(&swap_fee)?)?;
    let y = bdiv(balance_in, balance_in.checked_add_res(&adjusted_in)?)?;
    let pow = bpow(y, weight_ratio)?;
    bmul(balance_out, BASE.checked_sub_res(&pow)?)
}

/// Amount of `asset_in` required to receive `amount_out` of `asset_out`.
///
/// `amount_in = balance_in * ((balance_out / (balance_out - amount_out))
/// ^ (weight_out / weight_in) - 1) / (1 - swap_fee)`
pub fn calc_in_given_out(
    balance_in: u128,
    weight_in: u128,
    balance_out: u128,
    weight_out: u128,
    amount_out: u128,
    swap_fee: u128,
) -> Result<u128, DispatchError> {
    let weight_ratio = bdiv(weight_out, weight_in)?;
    let diff = balance_out.checked_sub_res(&amount_out)?;
    let y = bdiv(balance_out, diff)?;
    let foo = bpow(y, weight_ratio)?.checked_sub_res(&BASE)?;
    let amount_in = bmul(balance_in, foo)?;
    bdiv(amount_in, BASE.checked_sub_res(&swap_fee)?)
}

/// Fee multiplier `1 - (1 - normalized_weight) * swap_fee` of single asset operations.
///
/// Only the share of a single asset deposit or withdrawal which is implicitly traded against the
/// other assets of the pool is charged.
fn single_asset_fee_factor(normalized_weight: u128, swap_fee: u128) -> Result<u128, DispatchError> {
    let zaz = bmul(BASE.checked_sub_res(&normalized_weight)?, swap_fee)?;
    BASE.checked_sub_res(&zaz)
}

/// Pool shares minted for depositing `amount_in` of a single asset.
pub fn calc_pool_out_given_single_in(
    balance_in: u128,
    weight_in: u128,
    pool_supply: u128,
    total_weight: u128,
    amount_in: u128,
    swap_fee: u128,
) -> Result<u128, DispatchError> {
    let normalized_weight = bdiv(weight_in, total_weight)?;
    let amount_in_after_fee =
        bmul(amount_in, single_asset_fee_factor(normalized_weight, swap_fee)?)?;

    let new_balance_in = balance_in.checked_add_res(&amount_in_after_fee)?;
    let asset_in_ratio = bdiv(new_balance_in, balance_in)?;

    let pool_ratio = bpow(asset_in_ratio, normalized_weight)?;
    let new_pool_supply = bmul(pool_ratio, pool_supply)?;
    new_pool_supply.checked_sub_res(&pool_supply)
}

/// Amount of a single asset required to mint `pool_amount_out` shares.
pub fn calc_single_in_given_pool_out(
    balance_in: u128,
    weight_in: u128,
    pool_supply: u128,
    total_weight: u128,
    pool_amount_out: u128,
    swap_fee: u128,
) -> Result<u128, DispatchError> {
    let normalized_weight = bdiv(weight_in, total_weight)?;
    let new_pool_supply = pool_supply.checked_add_res(&pool_amount_out)?;
    let pool_ratio = bdiv(new_pool_supply, pool_supply)?;

    let boo = bdiv(BASE, normalized_weight)?;
    let asset_in_ratio = bpow(pool_ratio, boo)?;
    let new_balance_in = bmul(asset_in_ratio, balance_in)?;
    let amount_in_after_fee = new_balance_in.checked_sub_res(&balance_in)?;

    bdiv(amount_in_after_fee, single_asset_fee_factor(normalized_weight, swap_fee)?)
}

/// Amount of a single asset paid out for burning `pool_amount_in` shares.
///
/// The exit fee is deducted from `pool_amount_in` before the shares are redeemed.
pub fn calc_single_out_given_pool_in(
    balance_out: u128,
    weight_out: u128,
    pool_supply: u128,
    total_weight: u128,
    pool_amount_in: u128,
    swap_fee: u128,
    exit_fee: u128,
) -> Result<u128, DispatchError> {
    let normalized_weight = bdiv(weight_out, total_weight)?;

    let pool_amount_in_after_exit_fee = bmul(pool_amount_in, BASE.checked_sub_res(&exit_fee)?)?;
    let new_pool_supply = pool_supply.checked_sub_res(&pool_amount_in_after_exit_fee)?;
    let pool_ratio = bdiv(new_pool_supply, pool_supply)?;

    let asset_out_ratio = bpow(pool_ratio, bdiv(BASE, normalized_weight)?)?;
    let new_balance_out = bmul(asset_out_ratio, balance_out)?;
    let amount_out_before_fee = balance_out.checked_sub_res(&new_balance_out)?;

    bmul(amount_out_before_fee, single_asset_fee_factor(normalized_weight, swap_fee)?)
}

/// Pool shares burned to withdraw `amount_out` of a single asset, exit fee included.
pub fn calc_pool_in_given_single_out(
    balance_out: u128,
    weight_out: u128,
    pool_supply: u128,
    total_weight: u128,
    amount_out: u128,
    swap_fee: u128,
    exit_fee: u128,
) -> Result<u128, DispatchError> {
    let normalized_weight = bdiv(weight_out, total_weight)?;
    let amount_out_before_fee =
        bdiv(amount_out, single_asset_fee_factor(normalized_weight, swap_fee)?)?;

    let new_balance_out = balance_out.checked_sub_res(&amount_out_before_fee)?;
    let asset_out_ratio = bdiv(new_balance_out, balance_out)?;

    let pool_ratio = bpow(asset_out_ratio, normalized_weight)?;
    let new_pool_supply = bmul(pool_ratio, pool_supply)?;
    let pool_amount_in_after_exit_fee = pool_supply.checked_sub_res(&new_pool_supply)?;

    bdiv(pool_amount_in_after_exit_fee, BASE.checked_sub_res(&exit_fee)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx;
    use test_case::test_case;

    const FEE: u128 = 3 * BASE / 1_000;
    const TOLERANCE: u128 = 100_000_000_000;

    #[test_case(100 * BASE, BASE, 100 * BASE, BASE, 0, BASE)]
    #[test_case(100 * BASE, BASE, 100 * BASE, BASE, FEE, 1_003_009_027_081_243_731)]
    #[test_case(100 * BASE, 2 * BASE, 50 * BASE, BASE, FEE, 1_003_009_027_081_243_731)]
    #[test_case(200 * BASE, BASE, 100 * BASE, BASE, 0, 2 * BASE)]
    fn calc_spot_price_works(
        balance_in: u128,
        weight_in: u128,
        balance_out: u128,
        weight_out: u128,
        swap_fee: u128,
        expected: u128,
    ) {
        assert_eq!(
            calc_spot_price(balance_in, weight_in, balance_out, weight_out, swap_fee),
            Ok(expected)
        );
    }

    #[test_case(100 * BASE, BASE, 100 * BASE, BASE, 10 * BASE, 9_066_108_938_801_491_315)]
    #[test_case(100 * BASE, 2 * BASE, 50 * BASE, BASE, 10 * BASE, 8_655_137_282_350_409_800)]
    #[test_case(100 * BASE, BASE, 100 * BASE, 3 * BASE, 10 * BASE, 3_118_261_153_252_457_628)]
    fn calc_out_given_in_works(
        balance_in: u128,
        weight_in: u128,
        balance_out: u128,
        weight_out: u128,
        amount_in: u128,
        expected: u128,
    ) {
        let amount_out =
            calc_out_given_in(balance_in, weight_in, balance_out, weight_out, amount_in, FEE)
                .unwrap();
        assert_approx!(amount_out, expected, TOLERANCE);
    }

    #[test_case(100 * BASE, BASE, 100 * BASE, BASE, 10 * BASE, 11_144_544_745_347_152_568)]
    #[test_case(100 * BASE, 2 * BASE, 50 * BASE, BASE, 5 * BASE, 5_425_531_934_750_228_418)]
    #[test_case(100 * BASE, BASE, 100 * BASE, 3 * BASE, 10 * BASE, 37_286_069_456_655_288_224)]
    fn calc_in_given_out_works(
        balance_in: u128,
        weight_in: u128,
        balance_out: u128,
        weight_out: u128,
        amount_out: u128,
        expected: u128,
    ) {
        let amount_in =
            calc_in_given_out(balance_in, weight_in, balance_out, weight_out, amount_out, FEE)
                .unwrap();
        assert_approx!(amount_in, expected, TOLERANCE);
    }

    #[test]
    fn calc_in_given_out_fails_if_pool_would_be_drained() {
        assert!(calc_in_given_out(100 * BASE, BASE, 100 * BASE, BASE, 101 * BASE, FEE).is_err());
    }

    #[test]
    fn round_trip_through_swap_loses_value() {
        let amount_out = calc_out_given_in(100 * BASE, BASE, 100 * BASE, BASE, 10 * BASE, FEE)
            .unwrap();
        let amount_in =
            calc_in_given_out(100 * BASE, BASE, 100 * BASE, BASE, amount_out, FEE).unwrap();
        more_asserts::assert_le!(amount_in, 10 * BASE + TOLERANCE);
        assert_approx!(amount_in, 10 * BASE, TOLERANCE);
    }

    #[test_case(100 * BASE, BASE, 100 * BASE, 2 * BASE, 10 * BASE, 4_873_733_603_796_141_381)]
    #[test_case(100 * BASE, BASE, 100 * BASE, 3 * BASE, 10 * BASE, 3_221_754_923_308_183_736)]
    fn calc_pool_out_given_single_in_works(
        balance_in: u128,
        weight_in: u128,
        pool_supply: u128,
        total_weight: u128,
        amount_in: u128,
        expected: u128,
    ) {
        let pool_out = calc_pool_out_given_single_in(
            balance_in,
            weight_in,
            pool_supply,
            total_weight,
            amount_in,
            FEE,
        )
        .unwrap();
        assert_approx!(pool_out, expected, TOLERANCE);
    }

    #[test_case(100 * BASE, BASE, 100 * BASE, 2 * BASE, 10 * BASE, 21_031_547_320_981_472_208)]
    #[test_case(100 * BASE, BASE, 100 * BASE, 3 * BASE, 5 * BASE, 15_794_088_176_352_705_410)]
    fn calc_single_in_given_pool_out_works(
        balance_in: u128,
        weight_in: u128,
        pool_supply: u128,
        total_weight: u128,
        pool_amount_out: u128,
        expected: u128,
    ) {
        let amount_in = calc_single_in_given_pool_out(
            balance_in,
            weight_in,
            pool_supply,
            total_weight,
            pool_amount_out,
            FEE,
        )
        .unwrap();
        assert_approx!(amount_in, expected, TOLERANCE);
    }

    #[test_case(0, 18_971_500_000_000_000_000)]
    #[test_case(BASE / 100, 18_791_670_150_000_000_000)]
    fn calc_single_out_given_pool_in_works(exit_fee: u128, expected: u128) {
        let amount_out = calc_single_out_given_pool_in(
            100 * BASE,
            BASE,
            100 * BASE,
            2 * BASE,
            10 * BASE,
            FEE,
            exit_fee,
        )
        .unwrap();
        assert_approx!(amount_out, expected, TOLERANCE);
    }

    #[test_case(0, 5_139_588_095_876_739_995)]
    #[test_case(BASE / 100, 5_191_503_127_148_222_217)]
    fn calc_pool_in_given_single_out_works(exit_fee: u128, expected: u128) {
        let pool_in = calc_pool_in_given_single_out(
            100 * BASE,
            BASE,
            100 * BASE,
            2 * BASE,
            10 * BASE,
            FEE,
            exit_fee,
        )
        .unwrap();
        assert_approx!(pool_in, expected, TOLERANCE);
    }
}
