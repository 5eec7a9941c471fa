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
use fcx_primitives::constants::{MAX_POOL_SUPPLY, MIN_POOL_SUPPLY};
use test_case::test_case;

#[test]
fn create_pool_works() {
    ExtBuilder::default().build().execute_with(|| {
        let crp_id = new_rights_pool(default_params(), Rights::none());
        assert_ok!(RightsPools::create_pool(
            RuntimeOrigin::signed(ALICE),
            crp_id,
            INITIAL_SUPPLY,
            MINIMUM_WEIGHT_CHANGE_BLOCK_PERIOD,
            ADD_TOKEN_TIME_LOCK_IN_BLOCKS,
        ));
        let pool_id = underlying(crp_id);
        System::assert_last_event(
            Event::PoolCreated { crp_id, pool_id, initial_supply: INITIAL_SUPPLY, cap: Balance::MAX }
                .into(),
        );

        let crp_account = RightsPools::rights_pool_account(crp_id);
        let pool = fcx_weighted_pools::Pools::<Runtime>::get(pool_id).unwrap();
        assert_eq!(pool.controller, crp_account);
        assert_eq!(pool.swap_fee, _3_1000);
        assert!(pool.public_swap);
        assert!(!pool.is_finalized());
        assert_eq!(WeightedPools::get_current_tokens(pool_id).unwrap(), vec![ASSET_A, ASSET_B]);
        assert_eq!(pool_balance(crp_id, ASSET_A), _100);
        assert_eq!(pool_weight(crp_id, ASSET_B), _5);

        assert_eq!(shares(crp_id, &ALICE), INITIAL_SUPPLY);
        assert_eq!(RightsPools::total_supply(crp_id), INITIAL_SUPPLY);
        assert_eq!(free_balance(ASSET_A, &ALICE), INITIAL_BALANCE - _100);
        assert_relay_is_empty(crp_id);

        let crp = Pools::<Runtime>::get(crp_id).unwrap();
        assert_eq!(crp.minimum_weight_change_block_period, MINIMUM_WEIGHT_CHANGE_BLOCK_PERIOD);
        assert_eq!(crp.add_token_time_lock_in_blocks, ADD_TOKEN_TIME_LOCK_IN_BLOCKS);
    });
}

#[test]
fn create_pool_caps_supply_if_cap_is_configurable() {
    ExtBuilder::default().build().execute_with(|| {
        let crp_id = create_rights_pool(Rights::none().with(Permission::ChangeCap));
        assert_eq!(Pools::<Runtime>::get(crp_id).unwrap().cap, INITIAL_SUPPLY);
    });
}

#[test]
fn create_pool_fails_if_called_twice() {
    ExtBuilder::default().build().execute_with(|| {
        let crp_id = create_rights_pool(Rights::none());
        assert_noop!(
            RightsPools::create_pool(RuntimeOrigin::signed(ALICE), crp_id, INITIAL_SUPPLY, 10, 5),
            Error::<Runtime>::PoolAlreadyCreated
        );
    });
}

#[test]
fn create_pool_fails_if_sender_is_not_controller() {
    ExtBuilder::default().build().execute_with(|| {
        let crp_id = new_rights_pool(default_params(), Rights::all());
        assert_noop!(
            RightsPools::create_pool(RuntimeOrigin::signed(BOB), crp_id, INITIAL_SUPPLY, 10, 5),
            Error::<Runtime>::NotController
        );
    });
}

#[test]
fn create_pool_fails_on_unknown_rights_pool() {
    ExtBuilder::default().build().execute_with(|| {
        assert_noop!(
            RightsPools::create_pool(RuntimeOrigin::signed(ALICE), 7, INITIAL_SUPPLY, 10, 5),
            Error::<Runtime>::RightsPoolNotFound
        );
    });
}

#[test_case(MIN_POOL_SUPPLY - 1)]
#[test_case(MAX_POOL_SUPPLY + 1)]
fn create_pool_fails_on_initial_supply_out_of_bounds(initial_supply: Balance) {
    ExtBuilder::default().build().execute_with(|| {
        let crp_id = new_rights_pool(default_params(), Rights::all());
        assert_noop!(
            RightsPools::create_pool(RuntimeOrigin::signed(ALICE), crp_id, initial_supply, 10, 5),
            Error::<Runtime>::InitialSupplyOutOfBounds
        );
    });
}

#[test]
fn create_pool_fails_if_time_lock_exceeds_weight_change_period() {
    ExtBuilder::default().build().execute_with(|| {
        let crp_id = new_rights_pool(default_params(), Rights::all());
        assert_noop!(
            RightsPools::create_pool(RuntimeOrigin::signed(ALICE), crp_id, INITIAL_SUPPLY, 4, 5),
            Error::<Runtime>::InconsistentTokenTimeLock
        );
    });
}

#[test]
fn create_pool_fails_on_duplicate_tokens() {
    ExtBuilder::default().build().execute_with(|| {
        let params = pool_params(vec![(ASSET_A, _100, _5), (ASSET_A, _100, _5)], _3_1000);
        let crp_id = new_rights_pool(params, Rights::all());
        assert_noop!(
            RightsPools::create_pool(RuntimeOrigin::signed(ALICE), crp_id, INITIAL_SUPPLY, 10, 5),
            fcx_weighted_pools::Error::<Runtime>::IsBound
        );
    });
}

#[test]
fn underlying_pool_is_not_controlled_by_rights_pool_controller() {
    ExtBuilder::default().build().execute_with(|| {
        let crp_id = create_rights_pool(Rights::all());
        assert_noop!(
            WeightedPools::set_swap_fee(RuntimeOrigin::signed(ALICE), underlying(crp_id), _1_100),
            fcx_weighted_pools::Error::<Runtime>::NotController
        );
        assert_noop!(
            WeightedPools::rebind(
                RuntimeOrigin::signed(ALICE),
                underlying(crp_id),
                ASSET_A,
                _1,
                _1
            ),
            fcx_weighted_pools::Error::<Runtime>::NotController
        );
    });
}
