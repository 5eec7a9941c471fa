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

#![cfg(all(feature = "mock", test))]

mod create_pool;
mod new_rights_pool;
mod rights;

use crate::{mock::*, types::*, *};
use fcx_primitives::{
    constants::BASE,
    types::{AccountIdTest, Asset, Balance, PoolId, Role},
};
use frame_support::{assert_noop, assert_ok};
use orml_traits::MultiCurrency;
use sp_runtime::DispatchResult;

const _1: Balance = BASE;
const _2: Balance = 2 * BASE;
const _5: Balance = 5 * BASE;
const _10: Balance = 10 * BASE;
const _20: Balance = 20 * BASE;
const _50: Balance = 50 * BASE;
const _100: Balance = 100 * BASE;
const _200: Balance = 200 * BASE;
const _1_10: Balance = BASE / 10;
const _1_100: Balance = BASE / 100;
const _1_1000: Balance = BASE / 1_000;
const _3_1000: Balance = 3 * BASE / 1_000;

const ASSET_A: Asset = Asset::Token(0);
const ASSET_B: Asset = Asset::Token(1);
const ASSET_C: Asset = Asset::Token(2);
const ASSET_D: Asset = Asset::Token(3);

const INITIAL_SUPPLY: Balance = _100;
const MINIMUM_WEIGHT_CHANGE_BLOCK_PERIOD: u64 = 10;
const ADD_TOKEN_TIME_LOCK_IN_BLOCKS: u64 = 5;

fn pool_params(tokens: Vec<(Asset, Balance, Balance)>, swap_fee: Balance) -> PoolParams {
    PoolParams {
        tokens: tokens.iter().map(|(asset, _, _)| *asset).collect::<Vec<_>>().try_into().unwrap(),
        balances: tokens
            .iter()
            .map(|(_, balance, _)| *balance)
            .collect::<Vec<_>>()
            .try_into()
            .unwrap(),
        weights: tokens
            .iter()
            .map(|(_, _, weight)| *weight)
            .collect::<Vec<_>>()
            .try_into()
            .unwrap(),
        swap_fee,
        protocol_fee: 0,
    }
}

/// `_100` of `ASSET_A` and `ASSET_B` with weight `_5` each and a swap fee of 0.3%.
fn default_params() -> PoolParams {
    pool_params(vec![(ASSET_A, _100, _5), (ASSET_B, _100, _5)], _3_1000)
}

/// Registers a rights pool controlled by `ALICE`.
fn new_rights_pool(params: PoolParams, rights: Rights) -> PoolId {
    let crp_id = NextRightsPoolId::<Runtime>::get();
    assert_ok!(RightsPools::new_rights_pool(RuntimeOrigin::signed(ALICE), params, rights));
    crp_id
}

/// Registers a rights pool with `params` and creates its underlying pool with the default
/// supply, period and time lock.
fn create_rights_pool_with(params: PoolParams, rights: Rights) -> PoolId {
    let crp_id = new_rights_pool(params, rights);
    assert_ok!(RightsPools::create_pool(
        RuntimeOrigin::signed(ALICE),
        crp_id,
        INITIAL_SUPPLY,
        MINIMUM_WEIGHT_CHANGE_BLOCK_PERIOD,
        ADD_TOKEN_TIME_LOCK_IN_BLOCKS,
    ));
    crp_id
}

fn create_rights_pool(rights: Rights) -> PoolId {
    create_rights_pool_with(default_params(), rights)
}

fn underlying(crp_id: PoolId) -> PoolId {
    RightsPools::underlying_pool(crp_id).unwrap()
}

fn pool_balance(crp_id: PoolId, asset: Asset) -> Balance {
    WeightedPools::get_balance(underlying(crp_id), asset).unwrap()
}

fn pool_weight(crp_id: PoolId, asset: Asset) -> Balance {
    WeightedPools::get_denormalized_weight(underlying(crp_id), asset).unwrap()
}

fn free_balance(asset: Asset, who: &AccountIdTest) -> Balance {
    AssetManager::free_balance(asset, who)
}

fn shares(crp_id: PoolId, who: &AccountIdTest) -> Balance {
    free_balance(Asset::SmartPoolShare(crp_id), who)
}

/// Asserts that the rights pool account holds no tokens and that the underlying pool is backed
/// by its account.
fn assert_relay_is_empty(crp_id: PoolId) {
    let crp_account = RightsPools::rights_pool_account(crp_id);
    let pool_id = underlying(crp_id);
    let pool_account = WeightedPools::pool_account(pool_id);
    for asset in WeightedPools::get_current_tokens(pool_id).unwrap() {
        assert_eq!(free_balance(asset, &crp_account), 0);
        assert_eq!(
            WeightedPools::get_balance(pool_id, asset).unwrap()
                + fcx_weighted_pools::ProtocolFeesAccrued::<Runtime>::get(pool_id, asset),
            free_balance(asset, &pool_account),
        );
    }
}

fn run_to_block(n: u64) {
    System::set_block_number(n);
}
