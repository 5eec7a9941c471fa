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

mod join_pool;
mod swap_exact_amount_in;

use crate::{mock::*, *};
use fcx_primitives::{
    constants::BASE,
    types::{AccountIdTest, Asset, Balance, PoolId},
};
use frame_support::{assert_noop, assert_ok};
use orml_traits::MultiCurrency;

const _1: Balance = BASE;
const _2: Balance = 2 * BASE;
const _3: Balance = 3 * BASE;
const _10: Balance = 10 * BASE;
const _20: Balance = 20 * BASE;
const _50: Balance = 50 * BASE;
const _100: Balance = 100 * BASE;
const _1_10: Balance = BASE / 10;
const _1_100: Balance = BASE / 100;
const _3_1000: Balance = 3 * BASE / 1_000;

const ASSET_A: Asset = Asset::Token(0);
const ASSET_B: Asset = Asset::Token(1);
const ASSET_C: Asset = Asset::Token(2);
const ASSET_D: Asset = Asset::Token(3);

/// Creates an open pool controlled by `ALICE` and binds `tokens` as `(asset, balance, weight)`.
fn create_pool(tokens: Vec<(Asset, Balance, Balance)>) -> PoolId {
    let pool_id = NextPoolId::<Runtime>::get();
    assert_ok!(WeightedPools::create_pool(RuntimeOrigin::signed(ALICE)));
    for (asset, balance, weight) in tokens {
        assert_ok!(WeightedPools::bind(
            RuntimeOrigin::signed(ALICE),
            pool_id,
            asset,
            balance,
            weight
        ));
    }
    pool_id
}

/// Creates and finalizes a pool holding `_100` of `ASSET_A` and `ASSET_B` with equal weights and a
/// swap fee of 0.3%.
fn create_finalized_pool() -> PoolId {
    create_finalized_pool_with(vec![(ASSET_A, _100, _1), (ASSET_B, _100, _1)], _3_1000)
}

fn create_finalized_pool_with(tokens: Vec<(Asset, Balance, Balance)>, swap_fee: Balance) -> PoolId {
    let pool_id = create_pool(tokens);
    assert_ok!(WeightedPools::set_swap_fee(RuntimeOrigin::signed(ALICE), pool_id, swap_fee));
    assert_ok!(WeightedPools::finalize(RuntimeOrigin::signed(ALICE), pool_id));
    pool_id
}

fn pool_balance(pool_id: PoolId, asset: Asset) -> Balance {
    WeightedPools::get_balance(pool_id, asset).unwrap()
}

fn free_balance(asset: Asset, who: &AccountIdTest) -> Balance {
    AssetManager::free_balance(asset, who)
}

/// Asserts that the recorded balances of the pool match the pool account, up to unclaimed protocol
/// fees.
fn assert_pool_is_backed(pool_id: PoolId) {
    let pool_account = WeightedPools::pool_account(pool_id);
    for asset in WeightedPools::get_current_tokens(pool_id).unwrap() {
        assert_eq!(
            pool_balance(pool_id, asset) + ProtocolFeesAccrued::<Runtime>::get(pool_id, asset),
            free_balance(asset, &pool_account),
        );
    }
}
