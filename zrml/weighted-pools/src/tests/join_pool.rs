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
use fcx_primitives::constants::INIT_POOL_SUPPLY;

#[test]
fn join_pool_works() {
    ExtBuilder::default().build().execute_with(|| {
        let pool_id = create_finalized_pool();
        assert_ok!(WeightedPools::join_pool(
            RuntimeOrigin::signed(BOB),
            pool_id,
            _10,
            vec![_10, _10]
        ));
        System::assert_last_event(
            Event::PoolJoined { who: BOB, pool_id, pool_amount: _10, amounts_in: vec![_10, _10] }
                .into(),
        );
        assert_eq!(WeightedPools::total_supply(pool_id), INIT_POOL_SUPPLY + _10);
        assert_eq!(free_balance(Asset::PoolShare(pool_id), &BOB), _10);
        assert_eq!(free_balance(ASSET_A, &BOB), INITIAL_BALANCE - _10);
        assert_eq!(free_balance(ASSET_B, &BOB), INITIAL_BALANCE - _10);
        assert_eq!(pool_balance(pool_id, ASSET_A), _100 + _10);
        assert_eq!(pool_balance(pool_id, ASSET_B), _100 + _10);
        assert_pool_is_backed(pool_id);
    });
}

#[test]
fn join_pool_keeps_the_spot_price() {
    ExtBuilder::default().build().execute_with(|| {
        let pool_id = create_finalized_pool_with(
            vec![(ASSET_A, _100, _1), (ASSET_B, _50, _3), (ASSET_C, _20, _2)],
            _3_1000,
        );
        let spot_price_before = WeightedPools::get_spot_price(pool_id, ASSET_B, ASSET_C).unwrap();
        assert_ok!(WeightedPools::join_pool(
            RuntimeOrigin::signed(DAVE),
            pool_id,
            _50,
            vec![_100, _100, _100]
        ));
        assert_eq!(pool_balance(pool_id, ASSET_A), _100 + _50);
        assert_eq!(pool_balance(pool_id, ASSET_B), _50 + 25 * BASE);
        assert_eq!(pool_balance(pool_id, ASSET_C), _20 + _10);
        assert_eq!(
            WeightedPools::get_spot_price(pool_id, ASSET_B, ASSET_C).unwrap(),
            spot_price_before
        );
    });
}

#[test]
fn join_pool_fails_on_open_pool() {
    ExtBuilder::default().build().execute_with(|| {
        let pool_id = create_pool(vec![(ASSET_A, _100, _1), (ASSET_B, _100, _1)]);
        assert_noop!(
            WeightedPools::join_pool(RuntimeOrigin::signed(BOB), pool_id, _10, vec![_10, _10]),
            Error::<Runtime>::NotFinalized
        );
    });
}

#[test]
fn join_pool_fails_if_sender_is_not_whitelisted() {
    ExtBuilder::default().build().execute_with(|| {
        let pool_id = create_finalized_pool();
        assert_noop!(
            WeightedPools::join_pool(RuntimeOrigin::signed(CHARLIE), pool_id, _10, vec![_10, _10]),
            Error::<Runtime>::NotWhitelisted
        );
    });
}

#[test]
fn join_pool_fails_on_incorrect_vec_len() {
    ExtBuilder::default().build().execute_with(|| {
        let pool_id = create_finalized_pool();
        assert_noop!(
            WeightedPools::join_pool(RuntimeOrigin::signed(BOB), pool_id, _10, vec![_10]),
            Error::<Runtime>::IncorrectVecLen
        );
    });
}

#[test]
fn join_pool_fails_if_amount_in_exceeds_maximum() {
    ExtBuilder::default().build().execute_with(|| {
        let pool_id = create_finalized_pool();
        assert_noop!(
            WeightedPools::join_pool(
                RuntimeOrigin::signed(BOB),
                pool_id,
                _10,
                vec![_10, _10 - 1]
            ),
            Error::<Runtime>::LimitIn
        );
    });
}

#[test]
fn join_pool_fails_on_dust() {
    ExtBuilder::default().build().execute_with(|| {
        let pool_id = create_finalized_pool();
        assert_noop!(
            WeightedPools::join_pool(RuntimeOrigin::signed(BOB), pool_id, 1, vec![_1, _1]),
            Error::<Runtime>::MathApproximation
        );
    });
}
