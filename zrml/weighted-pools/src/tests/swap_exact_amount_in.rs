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

use super::*;
use fcx_primitives::{assert_approx, constants::MIN_FEE, math::weighted::calc_out_given_in};

#[test]
fn swap_exact_amount_in_works() {
    ExtBuilder::default().build().execute_with(|| {
        let pool_id = create_finalized_pool();
        let spot_price_before = WeightedPools::get_spot_price(pool_id, ASSET_A, ASSET_B).unwrap();
        assert_eq!(spot_price_before, 1_003_009_027_081_243_731);
        let expected_amount_out = calc_out_given_in(_100, _1, _100, _1, _10, _3_1000).unwrap();
        assert_approx!(expected_amount_out, 9_066_108_938_801_491_315, 100_000_000_000);

        assert_ok!(WeightedPools::swap_exact_amount_in(
            RuntimeOrigin::signed(BOB),
            pool_id,
            ASSET_A,
            _10,
            ASSET_B,
            _1,
            _2,
        ));

        let spot_price_after = WeightedPools::get_spot_price(pool_id, ASSET_A, ASSET_B).unwrap();
        System::assert_last_event(
            Event::SwapExecuted {
                who: BOB,
                pool_id,
                asset_in: ASSET_A,
                asset_out: ASSET_B,
                amount_in: _10,
                amount_out: expected_amount_out,
                protocol_fee_amount: 0,
                spot_price_before,
                spot_price_after,
            }
            .into(),
        );
        assert!(spot_price_after > spot_price_before);
        assert_eq!(pool_balance(pool_id, ASSET_A), _100 + _10);
        assert_eq!(pool_balance(pool_id, ASSET_B), _100 - expected_amount_out);
        assert_eq!(free_balance(ASSET_A, &BOB), INITIAL_BALANCE - _10);
        assert_eq!(free_balance(ASSET_B, &BOB), INITIAL_BALANCE + expected_amount_out);
        assert_pool_is_backed(pool_id);
    });
}

#[test]
fn swapping_back_and_forth_does_not_yield_a_profit() {
    ExtBuilder::default().build().execute_with(|| {
        let pool_id = create_finalized_pool();
        assert_ok!(WeightedPools::swap_exact_amount_in(
            RuntimeOrigin::signed(BOB),
            pool_id,
            ASSET_A,
            _10,
            ASSET_B,
            0,
            _2,
        ));
        let amount_b = free_balance(ASSET_B, &BOB) - INITIAL_BALANCE;
        assert_ok!(WeightedPools::swap_exact_amount_in(
            RuntimeOrigin::signed(BOB),
            pool_id,
            ASSET_B,
            amount_b,
            ASSET_A,
            0,
            _2,
        ));
        assert!(free_balance(ASSET_A, &BOB) < INITIAL_BALANCE);
        assert_eq!(free_balance(ASSET_B, &BOB), INITIAL_BALANCE);
        assert_pool_is_backed(pool_id);
    });
}

#[test]
fn swap_exact_amount_in_works_on_public_open_pool() {
    ExtBuilder::default().build().execute_with(|| {
        let pool_id = create_pool(vec![(ASSET_A, _100, _1), (ASSET_B, _100, _3)]);
        assert_ok!(WeightedPools::set_public_swap(RuntimeOrigin::signed(ALICE), pool_id, true));
        let expected_amount_out = calc_out_given_in(_100, _1, _100, _3, _1, MIN_FEE).unwrap();
        assert_ok!(WeightedPools::swap_exact_amount_in(
            RuntimeOrigin::signed(DAVE),
            pool_id,
            ASSET_A,
            _1,
            ASSET_B,
            expected_amount_out,
            _10,
        ));
        assert_eq!(free_balance(ASSET_B, &DAVE), INITIAL_BALANCE + expected_amount_out);
    });
}

#[test]
fn swap_exact_amount_in_fails_if_swap_is_not_public() {
    ExtBuilder::default().build().execute_with(|| {
        let pool_id = create_pool(vec![(ASSET_A, _100, _1), (ASSET_B, _100, _1)]);
        assert_noop!(
            WeightedPools::swap_exact_amount_in(
                RuntimeOrigin::signed(BOB),
                pool_id,
                ASSET_A,
                _1,
                ASSET_B,
                0,
                _2,
            ),
            Error::<Runtime>::SwapNotPublic
        );
    });
}

#[test]
fn swap_exact_amount_in_fails_on_unbound_asset() {
    ExtBuilder::default().build().execute_with(|| {
        let pool_id = create_finalized_pool();
        assert_noop!(
            WeightedPools::swap_exact_amount_in(
                RuntimeOrigin::signed(BOB),
                pool_id,
                ASSET_C,
                _1,
                ASSET_B,
                0,
                _2,
            ),
            Error::<Runtime>::NotBound
        );
    });
}

#[test]
fn swap_exact_amount_in_fails_if_trader_has_no_pool_role() {
    ExtBuilder::default().build().execute_with(|| {
        let pool_id = create_finalized_pool();
        assert_noop!(
            WeightedPools::swap_exact_amount_in(
                RuntimeOrigin::signed(CHARLIE),
                pool_id,
                ASSET_A,
                _1,
                ASSET_B,
                0,
                _2,
            ),
            Error::<Runtime>::RolesMismatch
        );
    });
}

#[test]
fn swap_exact_amount_in_fails_if_amount_in_exceeds_max_in_ratio() {
    ExtBuilder::default().build().execute_with(|| {
        let pool_id = create_finalized_pool();
        assert_noop!(
            WeightedPools::swap_exact_amount_in(
                RuntimeOrigin::signed(BOB),
                pool_id,
                ASSET_A,
                _50 + 1,
                ASSET_B,
                0,
                _10,
            ),
            Error::<Runtime>::MaxInRatio
        );
    });
}

#[test]
fn swap_exact_amount_in_fails_if_spot_price_exceeds_max_price() {
    ExtBuilder::default().build().execute_with(|| {
        let pool_id = create_finalized_pool();
        assert_noop!(
            WeightedPools::swap_exact_amount_in(
                RuntimeOrigin::signed(BOB),
                pool_id,
                ASSET_A,
                _1,
                ASSET_B,
                0,
                _1,
            ),
            Error::<Runtime>::BadLimitPrice
        );
        let spot_price = WeightedPools::get_spot_price(pool_id, ASSET_A, ASSET_B).unwrap();
        assert_noop!(
            WeightedPools::swap_exact_amount_in(
                RuntimeOrigin::signed(BOB),
                pool_id,
                ASSET_A,
                _1,
                ASSET_B,
                0,
                spot_price,
            ),
            Error::<Runtime>::LimitPrice
        );
    });
}

#[test]
fn swap_exact_amount_in_fails_if_amount_out_is_too_low() {
    ExtBuilder::default().build().execute_with(|| {
        let pool_id = create_finalized_pool();
        let amount_out = calc_out_given_in(_100, _1, _100, _1, _10, _3_1000).unwrap();
        assert_noop!(
            WeightedPools::swap_exact_amount_in(
                RuntimeOrigin::signed(BOB),
                pool_id,
                ASSET_A,
                _10,
                ASSET_B,
                amount_out + 1,
                _2,
            ),
            Error::<Runtime>::LimitOut
        );
    });
}
