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
use crate::{types::PoolRoles, Pallet as WeightedPools};
use alloc::{vec, vec::Vec};
use fcx_primitives::{
    constants::{BASE, MAX_BOUND_TOKENS, MIN_BOUND_TOKENS},
    traits::AccessControlBenchmarkHelper,
    types::{Asset, Balance, PoolId, Role},
};
use frame_benchmarking::{account, benchmarks, whitelisted_caller};
use frame_system::RawOrigin;
use orml_traits::MultiCurrency;
use sp_runtime::DispatchError;

const LIQUIDITY: Balance = 100 * BASE;

fn setup_caller<T: Config>() -> Result<T::AccountId, DispatchError> {
    let caller: T::AccountId = whitelisted_caller();
    T::BenchmarkHelper::add_role(Role::SuperAdmin, &caller)?;
    T::BenchmarkHelper::add_role(Role::Unrestricted, &caller)?;
    for index in 0..MAX_BOUND_TOKENS {
        T::AssetManager::deposit(Asset::Token(index), &caller, 1_000 * LIQUIDITY)?;
    }
    Ok(caller)
}

/// Creates a pool holding `n` tokens with equal weights, a swap fee of 1% and a protocol fee of
/// 0.1%.
fn create_pool<T: Config>(
    caller: &T::AccountId,
    n: u32,
    finalize: bool,
) -> Result<PoolId, DispatchError> {
    let pool_id = WeightedPools::<T>::do_create_pool(caller.clone())?;
    for index in 0..n {
        WeightedPools::<T>::do_bind(caller.clone(), pool_id, Asset::Token(index), LIQUIDITY, BASE)?;
    }
    WeightedPools::<T>::do_set_swap_fee(caller.clone(), pool_id, BASE / 100)?;
    WeightedPools::<T>::do_set_protocol_fee(caller.clone(), pool_id, BASE / 1_000)?;
    if finalize {
        WeightedPools::<T>::do_finalize(caller.clone(), pool_id)?;
    }
    Ok(pool_id)
}

benchmarks! {
    create_pool {
        let caller = setup_caller::<T>()?;
    }: _(RawOrigin::Signed(caller))
    verify {
        assert!(WeightedPools::<T>::is_pool(0));
    }

    bind {
        let caller = setup_caller::<T>()?;
        let pool_id = create_pool::<T>(&caller, 1, false)?;
        let asset = Asset::Token(1);
    }: _(RawOrigin::Signed(caller), pool_id, asset, LIQUIDITY, BASE)
    verify {
        assert!(WeightedPools::<T>::is_bound(pool_id, asset));
    }

    rebind {
        let caller = setup_caller::<T>()?;
        let pool_id = create_pool::<T>(&caller, MIN_BOUND_TOKENS, false)?;
    }: _(RawOrigin::Signed(caller), pool_id, Asset::Token(0), 2 * LIQUIDITY, 2 * BASE)
    verify {
        assert_eq!(WeightedPools::<T>::get_balance(pool_id, Asset::Token(0)), Ok(2 * LIQUIDITY));
    }

    unbind {
        let caller = setup_caller::<T>()?;
        let pool_id = create_pool::<T>(&caller, MAX_BOUND_TOKENS, false)?;
    }: _(RawOrigin::Signed(caller), pool_id, Asset::Token(0))
    verify {
        assert!(!WeightedPools::<T>::is_bound(pool_id, Asset::Token(0)));
    }

    finalize {
        let caller = setup_caller::<T>()?;
        let pool_id = create_pool::<T>(&caller, MIN_BOUND_TOKENS, false)?;
    }: _(RawOrigin::Signed(caller), pool_id)
    verify {
        assert_eq!(WeightedPools::<T>::is_finalized(pool_id), Ok(true));
    }

    set_swap_fee {
        let caller = setup_caller::<T>()?;
        let pool_id = create_pool::<T>(&caller, 0, false)?;
    }: _(RawOrigin::Signed(caller), pool_id, BASE / 10)

    set_protocol_fee {
        let caller = setup_caller::<T>()?;
        let pool_id = create_pool::<T>(&caller, 0, false)?;
    }: _(RawOrigin::Signed(caller), pool_id, BASE / 100)

    set_public_swap {
        let caller = setup_caller::<T>()?;
        let pool_id = create_pool::<T>(&caller, 0, false)?;
    }: _(RawOrigin::Signed(caller), pool_id, true)
    verify {
        assert_eq!(WeightedPools::<T>::is_public_swap(pool_id), Ok(true));
    }

    set_controller {
        let caller = setup_caller::<T>()?;
        let pool_id = create_pool::<T>(&caller, 0, false)?;
        let controller: T::AccountId = account("controller", 0, 0);
    }: _(RawOrigin::Signed(caller), pool_id, controller)

    set_roles {
        let caller = setup_caller::<T>()?;
        let pool_id = create_pool::<T>(&caller, 0, false)?;
        let roles = PoolRoles::truncate_from(vec![
            Role::SuperAdmin,
            Role::Admin,
            Role::Restricted,
            Role::Unrestricted,
        ]);
    }: _(RawOrigin::Signed(caller), pool_id, roles)

    gulp {
        let caller = setup_caller::<T>()?;
        let pool_id = create_pool::<T>(&caller, MIN_BOUND_TOKENS, true)?;
        let asset = Asset::Token(0);
        T::AssetManager::deposit(asset, &WeightedPools::<T>::pool_account(pool_id), BASE)?;
    }: _(RawOrigin::Signed(caller), pool_id, asset)
    verify {
        assert_eq!(WeightedPools::<T>::get_balance(pool_id, asset), Ok(LIQUIDITY + BASE));
    }

    swap_exact_amount_in {
        let caller = setup_caller::<T>()?;
        let pool_id = create_pool::<T>(&caller, MIN_BOUND_TOKENS, true)?;
    }: _(
        RawOrigin::Signed(caller),
        pool_id,
        Asset::Token(0),
        LIQUIDITY / 10,
        Asset::Token(1),
        0,
        Balance::MAX
    )

    swap_exact_amount_out {
        let caller = setup_caller::<T>()?;
        let pool_id = create_pool::<T>(&caller, MIN_BOUND_TOKENS, true)?;
    }: _(
        RawOrigin::Signed(caller),
        pool_id,
        Asset::Token(0),
        Balance::MAX,
        Asset::Token(1),
        LIQUIDITY / 10,
        Balance::MAX
    )

    join_pool {
        let n in MIN_BOUND_TOKENS..MAX_BOUND_TOKENS;
        let caller = setup_caller::<T>()?;
        let pool_id = create_pool::<T>(&caller, n, true)?;
        let max_amounts_in = vec![Balance::MAX; n as usize];
    }: _(RawOrigin::Signed(caller.clone()), pool_id, BASE, max_amounts_in)

    exit_pool {
        let n in MIN_BOUND_TOKENS..MAX_BOUND_TOKENS;
        let caller = setup_caller::<T>()?;
        let pool_id = create_pool::<T>(&caller, n, true)?;
        let min_amounts_out = vec![0; n as usize];
    }: _(RawOrigin::Signed(caller), pool_id, BASE, min_amounts_out)

    joinswap_extern_amount_in {
        let caller = setup_caller::<T>()?;
        let pool_id = create_pool::<T>(&caller, MIN_BOUND_TOKENS, true)?;
    }: _(RawOrigin::Signed(caller), pool_id, Asset::Token(0), LIQUIDITY / 10, 0)

    joinswap_pool_amount_out {
        let caller = setup_caller::<T>()?;
        let pool_id = create_pool::<T>(&caller, MIN_BOUND_TOKENS, true)?;
    }: _(RawOrigin::Signed(caller), pool_id, Asset::Token(0), BASE, Balance::MAX)

    exitswap_pool_amount_in {
        let caller = setup_caller::<T>()?;
        let pool_id = create_pool::<T>(&caller, MIN_BOUND_TOKENS, true)?;
    }: _(RawOrigin::Signed(caller), pool_id, Asset::Token(0), BASE, 0)

    exitswap_extern_amount_out {
        let caller = setup_caller::<T>()?;
        let pool_id = create_pool::<T>(&caller, MIN_BOUND_TOKENS, true)?;
    }: _(RawOrigin::Signed(caller), pool_id, Asset::Token(0), BASE, Balance::MAX)

    claim_protocol_fees {
        let n in MIN_BOUND_TOKENS..MAX_BOUND_TOKENS;
        let caller = setup_caller::<T>()?;
        let pool_id = create_pool::<T>(&caller, n, true)?;
        let assets: Vec<Asset> = (0..n).map(Asset::Token).collect();
        for (index, asset_in) in assets.iter().enumerate() {
            let asset_out = assets[(index + 1) % assets.len()];
            WeightedPools::<T>::do_swap_exact_amount_in(
                caller.clone(),
                pool_id,
                *asset_in,
                BASE,
                asset_out,
                0,
                Balance::MAX,
            )?;
        }
    }: _(RawOrigin::Signed(caller), pool_id)
    verify {
        assert_eq!(ProtocolFeesAccrued::<T>::iter_prefix(pool_id).count(), 0);
    }

    set_fee_collector {
        let caller = setup_caller::<T>()?;
        let fee_collector: T::AccountId = account("collector", 0, 0);
    }: _(RawOrigin::Signed(caller), fee_collector)

    collect {
        let caller = setup_caller::<T>()?;
        FeeCollector::<T>::put(caller.clone());
        let asset = Asset::Token(0);
        T::AssetManager::deposit(asset, &WeightedPools::<T>::pallet_account(), BASE)?;
    }: _(RawOrigin::Signed(caller), asset)
    verify {
        assert_eq!(T::AssetManager::free_balance(asset, &WeightedPools::<T>::pallet_account()), 0);
    }

    impl_benchmark_test_suite!(
        WeightedPools,
        crate::mock::ExtBuilder::default().build(),
        crate::mock::Runtime
    );
}
