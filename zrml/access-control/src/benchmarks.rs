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
use crate::{types::RoleGrant, Pallet as AccessControl};
use alloc::vec::Vec;
use fcx_primitives::types::Role;
use frame_benchmarking::{account, benchmarks, whitelisted_caller};
use frame_support::{pallet_prelude::Get, BoundedVec};
use frame_system::RawOrigin;

fn admin<T: Config>() -> Result<T::AccountId, &'static str> {
    let caller: T::AccountId = whitelisted_caller();
    AccessControl::<T>::insert_role(Role::SuperAdmin, &caller)?;
    AccessControl::<T>::insert_role(Role::Admin, &caller)?;
    Ok(caller)
}

fn accounts<T: Config>(n: u32) -> Vec<T::AccountId> {
    (0..n).map(|i| account("member", i, 0)).collect()
}

benchmarks! {
    grant_role {
        let caller = admin::<T>()?;
        let who: T::AccountId = account("member", 0, 0);
        AccessControl::<T>::insert_role(Role::Restricted, &who)?;
    }: _(RawOrigin::Signed(caller), Role::Unrestricted, who.clone())
    verify {
        assert!(AccessControl::<T>::has_role(Role::Unrestricted, &who));
    }

    grant_roles {
        let n in 1..T::MaxRoleGrants::get();
        let caller = admin::<T>()?;
        let grants: BoundedVec<_, T::MaxRoleGrants> = accounts::<T>(n)
            .into_iter()
            .map(|account| RoleGrant { role: Role::Unrestricted, account })
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_| "too many grants")?;
    }: _(RawOrigin::Signed(caller), grants)
    verify {
        assert_eq!(AccessControl::<T>::get_role_member_count(Role::Unrestricted), n);
    }

    revoke_role {
        let caller = admin::<T>()?;
        let who: T::AccountId = account("member", 0, 0);
        AccessControl::<T>::insert_role(Role::Restricted, &who)?;
    }: _(RawOrigin::Signed(caller), Role::Restricted, who.clone())
    verify {
        assert!(!AccessControl::<T>::whitelisted(&who));
    }

    renounce_role {
        let who: T::AccountId = whitelisted_caller();
        AccessControl::<T>::insert_role(Role::Restricted, &who)?;
    }: _(RawOrigin::Signed(who.clone()), Role::Restricted, who.clone())
    verify {
        assert!(!AccessControl::<T>::whitelisted(&who));
    }

    blacklist {
        let n in 1..T::MaxRoleGrants::get();
        let caller = admin::<T>()?;
        let members = accounts::<T>(n);
        for who in members.iter() {
            AccessControl::<T>::insert_role(Role::Admin, who)?;
            AccessControl::<T>::insert_role(Role::Restricted, who)?;
        }
        let members: BoundedVec<_, T::MaxRoleGrants> =
            members.try_into().map_err(|_| "too many accounts")?;
    }: _(RawOrigin::Signed(caller), members)
    verify {
        assert_eq!(AccessControl::<T>::get_role_member_count(Role::Restricted), 0);
    }

    impl_benchmark_test_suite!(
        AccessControl,
        crate::mock::ExtBuilder::default().build(),
        crate::mock::Runtime,
    );
}
