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

#![allow(
    // Auto-generated code is a no man's land
    clippy::arithmetic_side_effects
)]
#![cfg(feature = "runtime-benchmarks")]

use super::*;
use crate::{
    types::{PoolParams, Rights},
    Pallet as RightsPools,
};
use alloc::vec;
use fcx_primitives::{
    constants::{BASE, MAX_BOUND_TOKENS, MIN_BOUND_TOKENS},
    traits::{AccessControlBenchmarkHelper, WeightedPoolApi},
    types::{Asset, Balance, PoolId, Role},
};
use frame_benchmarking::{account, benchmarks, whitelisted_caller};
use frame_support::BoundedVec;
use frame_system::{pallet_prelude::BlockNumberFor, Pallet as System, RawOrigin};
use orml_traits::MultiCurrency;
use sp_runtime::DispatchError;

const LIQUIDITY: Balance = 100 * BASE;
const WEIGHT: Balance = 2 * BASE;
const INITIAL_SUPPLY: Balance = 100 * BASE;
const MINIMUM_WEIGHT_CHANGE_BLOCK_PERIOD: u32 = 10;
const ADD_TOKEN_TIME_LOCK_IN_BLOCKS: u32 = 5;

fn setup_caller<T: Config>() -> Result<T::AccountId, DispatchError> {
    let caller: T::AccountId = whitelisted_caller();
    T::BenchmarkHelper::add_role(Role::SuperAdmin, &caller)?;
    T::BenchmarkHelper::add_role(Role::Unrestricted, &caller)?;
    for index in 0..MAX_BOUND_TOKENS {
        T::AssetManager::deposit(Asset::Token(index), &caller, 1_000 * LIQUIDITY)?;
    }
    Ok(caller)
}

/// Parameters for a pool of the first `n` tokens with equal weights, a swap fee of 1% and a
/// protocol fee of 0.1%.
fn pool_params(n: u32) -> PoolParams {
    PoolParams {
        tokens: BoundedVec::truncate_from((0..n).map(Asset::Token).collect()),
        balances: BoundedVec::truncate_from(vec![LIQUIDITY; n as usize]),
        weights: BoundedVec::truncate_from(vec![WEIGHT; n as usize]),
        swap_fee: BASE / 100,
        protocol_fee: BASE / 1_000,
    }
}

/// Registers a rights pool of `n` tokens holding every right and creates its underlying pool.
/// The cap is lifted and `caller` is whitelisted so that liquidity may be provided freely.
fn create_rights_pool<T: Config>(caller: &T::AccountId, n: u32) -> Result<PoolId, DispatchError> {
    let crp_id = RightsPools::<T>::do_new_rights_pool(caller.clone(), pool_params(n), Rights::all())?;
    RightsPools::<T>::do_create_pool(
        caller.clone(),
        crp_id,
        INITIAL_SUPPLY,
        MINIMUM_WEIGHT_CHANGE_BLOCK_PERIOD.into(),
        ADD_TOKEN_TIME_LOCK_IN_BLOCKS.into(),
    )?;
    RightsPools::<T>::do_set_cap(caller.clone(), crp_id, Balance::MAX)?;
    RightsPools::<T>::do_whitelist_liquidity_provider(caller.clone(), crp_id, caller.clone())?;
    Ok(crp_id)
}

fn schedule_gradual_update<T: Config>(
    caller: &T::AccountId,
    crp_id: PoolId,
    n: u32,
) -> Result<BlockNumberFor<T>, DispatchError> {
    let start_block = System::<T>::block_number();
    let end_block = start_block + (2 * MINIMUM_WEIGHT_CHANGE_BLOCK_PERIOD).into();
    RightsPools::<T>::do_update_weights_gradually(
        caller.clone(),
        crp_id,
        vec![BASE; n as usize],
        start_block,
        end_block,
    )?;
    Ok(start_block)
}

benchmarks! {
    new_rights_pool {
        let n in MIN_BOUND_TOKENS..MAX_BOUND_TOKENS;
        let caller = setup_caller::<T>()?;
    }: _(RawOrigin::Signed(caller), pool_params(n), Rights::all())
    verify {
        assert!(RightsPools::<T>::is_rights_pool(0));
    }

    create_pool {
        let n in MIN_BOUND_TOKENS..MAX_BOUND_TOKENS;
        let caller = setup_caller::<T>()?;
        let crp_id = RightsPools::<T>::do_new_rights_pool(
            caller.clone(),
            pool_params(n),
            Rights::all(),
        )?;
    }: _(
        RawOrigin::Signed(caller),
        crp_id,
        INITIAL_SUPPLY,
        MINIMUM_WEIGHT_CHANGE_BLOCK_PERIOD.into(),
        ADD_TOKEN_TIME_LOCK_IN_BLOCKS.into()
    )
    verify {
        assert_eq!(RightsPools::<T>::total_supply(crp_id), INITIAL_SUPPLY);
    }

    set_swap_fee {
        let caller = setup_caller::<T>()?;
        let crp_id = create_rights_pool::<T>(&caller, MIN_BOUND_TOKENS)?;
    }: _(RawOrigin::Signed(caller), crp_id, BASE / 10)
    verify {
        let pool_id = RightsPools::<T>::underlying_pool(crp_id)?;
        assert_eq!(T::WeightedPools::swap_fee(pool_id), Ok(BASE / 10));
    }

    set_protocol_fee {
        let caller = setup_caller::<T>()?;
        let crp_id = create_rights_pool::<T>(&caller, MIN_BOUND_TOKENS)?;
    }: _(RawOrigin::Signed(caller), crp_id, BASE / 200)

    set_public_swap {
        let caller = setup_caller::<T>()?;
        let crp_id = create_rights_pool::<T>(&caller, MIN_BOUND_TOKENS)?;
    }: _(RawOrigin::Signed(caller), crp_id, false)

    set_roles {
        let caller = setup_caller::<T>()?;
        let crp_id = create_rights_pool::<T>(&caller, MIN_BOUND_TOKENS)?;
        let roles = vec![Role::SuperAdmin, Role::Admin, Role::Restricted, Role::Unrestricted];
    }: _(RawOrigin::Signed(caller), crp_id, roles)

    set_cap {
        let caller = setup_caller::<T>()?;
        let crp_id = create_rights_pool::<T>(&caller, MIN_BOUND_TOKENS)?;
    }: _(RawOrigin::Signed(caller), crp_id, 2 * INITIAL_SUPPLY)

    set_controller {
        let caller = setup_caller::<T>()?;
        let crp_id = create_rights_pool::<T>(&caller, MIN_BOUND_TOKENS)?;
        let controller: T::AccountId = account("controller", 0, 0);
    }: _(RawOrigin::Signed(caller), crp_id, controller)

    update_weight {
        let caller = setup_caller::<T>()?;
        let crp_id = create_rights_pool::<T>(&caller, MAX_BOUND_TOKENS)?;
        let asset = Asset::Token(0);
    }: _(RawOrigin::Signed(caller), crp_id, asset, 2 * WEIGHT)
    verify {
        let pool_id = RightsPools::<T>::underlying_pool(crp_id)?;
        assert_eq!(T::WeightedPools::denormalized_weight(pool_id, asset), Ok(2 * WEIGHT));
    }

    update_weights_gradually {
        let n in MIN_BOUND_TOKENS..MAX_BOUND_TOKENS;
        let caller = setup_caller::<T>()?;
        let crp_id = create_rights_pool::<T>(&caller, n)?;
        let start_block = System::<T>::block_number();
        let end_block = start_block + MINIMUM_WEIGHT_CHANGE_BLOCK_PERIOD.into();
    }: _(RawOrigin::Signed(caller), crp_id, vec![BASE; n as usize], start_block, end_block)
    verify {
        assert!(GradualUpdates::<T>::contains_key(crp_id));
    }

    poke_weights {
        let n in MIN_BOUND_TOKENS..MAX_BOUND_TOKENS;
        let caller = setup_caller::<T>()?;
        let crp_id = create_rights_pool::<T>(&caller, n)?;
        let start_block = schedule_gradual_update::<T>(&caller, crp_id, n)?;
        System::<T>::set_block_number(start_block + MINIMUM_WEIGHT_CHANGE_BLOCK_PERIOD.into());
    }: _(RawOrigin::Signed(caller), crp_id)

    commit_add_token {
        let caller = setup_caller::<T>()?;
        let crp_id = create_rights_pool::<T>(&caller, MAX_BOUND_TOKENS - 1)?;
        let asset = Asset::Token(MAX_BOUND_TOKENS - 1);
    }: _(RawOrigin::Signed(caller), crp_id, asset, LIQUIDITY, WEIGHT)
    verify {
        assert!(NewTokens::<T>::contains_key(crp_id));
    }

    apply_add_token {
        let caller = setup_caller::<T>()?;
        let crp_id = create_rights_pool::<T>(&caller, MAX_BOUND_TOKENS - 1)?;
        let asset = Asset::Token(MAX_BOUND_TOKENS - 1);
        RightsPools::<T>::do_commit_add_token(caller.clone(), crp_id, asset, LIQUIDITY, WEIGHT)?;
        let now = System::<T>::block_number();
        System::<T>::set_block_number(now + ADD_TOKEN_TIME_LOCK_IN_BLOCKS.into());
    }: _(RawOrigin::Signed(caller), crp_id)
    verify {
        let pool_id = RightsPools::<T>::underlying_pool(crp_id)?;
        assert!(T::WeightedPools::is_bound(pool_id, asset));
    }

    remove_token {
        let caller = setup_caller::<T>()?;
        let crp_id = create_rights_pool::<T>(&caller, MAX_BOUND_TOKENS)?;
        let asset = Asset::Token(0);
    }: _(RawOrigin::Signed(caller), crp_id, asset)
    verify {
        let pool_id = RightsPools::<T>::underlying_pool(crp_id)?;
        assert!(!T::WeightedPools::is_bound(pool_id, asset));
    }

    whitelist_liquidity_provider {
        let caller = setup_caller::<T>()?;
        let crp_id = create_rights_pool::<T>(&caller, MIN_BOUND_TOKENS)?;
        let provider: T::AccountId = account("provider", 0, 0);
    }: _(RawOrigin::Signed(caller), crp_id, provider.clone())
    verify {
        assert!(LiquidityProviders::<T>::contains_key(crp_id, &provider));
    }

    remove_whitelisted_liquidity_provider {
        let caller = setup_caller::<T>()?;
        let crp_id = create_rights_pool::<T>(&caller, MIN_BOUND_TOKENS)?;
        let provider: T::AccountId = account("provider", 0, 0);
        RightsPools::<T>::do_whitelist_liquidity_provider(caller.clone(), crp_id, provider.clone())?;
    }: _(RawOrigin::Signed(caller), crp_id, provider.clone())
    verify {
        assert!(!LiquidityProviders::<T>::contains_key(crp_id, &provider));
    }

    join_pool {
        let n in MIN_BOUND_TOKENS..MAX_BOUND_TOKENS;
        let caller = setup_caller::<T>()?;
        let crp_id = create_rights_pool::<T>(&caller, n)?;
        let max_amounts_in = vec![Balance::MAX; n as usize];
    }: _(RawOrigin::Signed(caller), crp_id, BASE, max_amounts_in)
    verify {
        assert_eq!(RightsPools::<T>::total_supply(crp_id), INITIAL_SUPPLY + BASE);
    }

    exit_pool {
        let n in MIN_BOUND_TOKENS..MAX_BOUND_TOKENS;
        let caller = setup_caller::<T>()?;
        let crp_id = create_rights_pool::<T>(&caller, n)?;
        let min_amounts_out = vec![0; n as usize];
    }: _(RawOrigin::Signed(caller), crp_id, BASE, min_amounts_out)

    joinswap_extern_amount_in {
        let caller = setup_caller::<T>()?;
        let crp_id = create_rights_pool::<T>(&caller, MIN_BOUND_TOKENS)?;
    }: _(RawOrigin::Signed(caller), crp_id, Asset::Token(0), LIQUIDITY / 10, 0)

    joinswap_pool_amount_out {
        let caller = setup_caller::<T>()?;
        let crp_id = create_rights_pool::<T>(&caller, MIN_BOUND_TOKENS)?;
    }: _(RawOrigin::Signed(caller), crp_id, Asset::Token(0), BASE, Balance::MAX)

    exitswap_pool_amount_in {
        let caller = setup_caller::<T>()?;
        let crp_id = create_rights_pool::<T>(&caller, MIN_BOUND_TOKENS)?;
    }: _(RawOrigin::Signed(caller), crp_id, Asset::Token(0), BASE, 0)

    exitswap_extern_amount_out {
        let caller = setup_caller::<T>()?;
        let crp_id = create_rights_pool::<T>(&caller, MIN_BOUND_TOKENS)?;
    }: _(RawOrigin::Signed(caller), crp_id, Asset::Token(0), BASE, Balance::MAX)

    claim_protocol_fees {
        let n in MIN_BOUND_TOKENS..MAX_BOUND_TOKENS;
        let caller = setup_caller::<T>()?;
        let crp_id = create_rights_pool::<T>(&caller, n)?;
    }: _(RawOrigin::Signed(caller), crp_id)

    impl_benchmark_test_suite!(
        RightsPools,
        crate::mock::ExtBuilder::default().build(),
        crate::mock::Runtime
    );
}
