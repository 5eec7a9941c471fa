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

#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarks;
pub mod mock;
#[cfg(test)]
mod tests;
pub mod types;
pub mod weights;

pub use pallet::*;

#[frame_support::pallet]
mod pallet {
    use crate::{
        types::{AccountRoles, RoleGrant},
        weights::WeightInfoZeitgeist,
    };
    use alloc::vec::Vec;
    use core::marker::PhantomData;
    use fcx_primitives::{
        traits::{AccessControlApi, AccessControlBenchmarkHelper},
        types::{Role, Tier},
    };
    use frame_support::{
        ensure,
        pallet_prelude::{BoundedVec, DispatchError, DispatchResult, StorageMap, ValueQuery},
        traits::{BuildGenesisConfig, Get, IsType, StorageVersion},
        transactional, Blake2_128Concat, DefaultNoBound, Twox64Concat,
    };
    use frame_system::{ensure_signed, pallet_prelude::OriginFor};

    const LOG_TARGET: &str = "runtime::fcx-access-control";

    /// The current storage version.
    const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

    pub(crate) type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
    pub(crate) type RoleGrantsOf<T> =
        BoundedVec<RoleGrant<AccountIdOf<T>>, <T as Config>::MaxRoleGrants>;
    pub(crate) type AccountsOf<T> = BoundedVec<AccountIdOf<T>, <T as Config>::MaxRoleGrants>;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Maximum number of grants in a single `grant_roles` call and accounts in a single
        /// `blacklist` call.
        #[pallet::constant]
        type MaxRoleGrants: Get<u32>;

        /// Maximum number of members of a single role.
        #[pallet::constant]
        type MaxRoleMembers: Get<u32>;

        type WeightInfo: WeightInfoZeitgeist;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(PhantomData<T>);

    /// Maps accounts to the roles they hold. Accounts without any role are not stored.
    #[pallet::storage]
    pub type Roles<T: Config> =
        StorageMap<_, Blake2_128Concat, AccountIdOf<T>, AccountRoles, ValueQuery>;

    /// The members of each role, in no particular order.
    #[pallet::storage]
    pub type RoleMembers<T: Config> = StorageMap<
        _,
        Twox64Concat,
        Role,
        BoundedVec<AccountIdOf<T>, T::MaxRoleMembers>,
        ValueQuery,
    >;

    #[pallet::genesis_config]
    #[derive(DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// The initial super admin. Receives `SuperAdmin` and `Admin`. Building the genesis
        /// without one panics.
        pub super_admin: Option<AccountIdOf<T>>,
        pub admins: Vec<AccountIdOf<T>>,
        pub restricted: Vec<AccountIdOf<T>>,
        pub unrestricted: Vec<AccountIdOf<T>>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let Some(super_admin) = &self.super_admin else {
                panic!("Genesis config requires a super admin");
            };
            let grants = [(Role::SuperAdmin, super_admin), (Role::Admin, super_admin)]
                .into_iter()
                .chain(self.admins.iter().map(|who| (Role::Admin, who)))
                .chain(self.restricted.iter().map(|who| (Role::Restricted, who)))
                .chain(self.unrestricted.iter().map(|who| (Role::Unrestricted, who)));
            for (role, who) in grants {
                if let Err(err) = Pallet::<T>::insert_role(role, who) {
                    panic!("Failed to grant {:?} at genesis: {:?}", role, err);
                }
            }
        }
    }

    #[pallet::event]
    #[pallet::generate_deposit(fn deposit_event)]
    pub enum Event<T>
    where
        T: Config,
    {
        /// `account` received `role`.
        RoleGranted { role: Role, account: AccountIdOf<T>, sender: AccountIdOf<T> },
        /// `account` lost `role`, either by revocation, renunciation or by receiving the other
        /// swap tier.
        RoleRevoked { role: Role, account: AccountIdOf<T>, sender: AccountIdOf<T> },
        /// All roles of `account` were revoked.
        Blacklisted { account: AccountIdOf<T>, sender: AccountIdOf<T> },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The sender must be an admin.
        Unauthorized,
        /// Roles can only be renounced by the account which holds them.
        CanOnlyRenounceForSelf,
        /// The last super admin can't be removed.
        LastSuperAdmin,
        /// There is no member at the specified index.
        RoleMemberIndexOutOfBounds,
        /// The role has reached its maximum number of members.
        TooManyRoleMembers,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Grants `role` to `account`.
        ///
        /// Granting a swap tier replaces the other tier if `account` holds it. Granting a role
        /// which `account` already holds has no effect.
        ///
        /// Must be called by an admin.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::grant_role())]
        #[transactional]
        pub fn grant_role(
            origin: OriginFor<T>,
            role: Role,
            account: AccountIdOf<T>,
        ) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            ensure!(Self::is_admin(&sender), Error::<T>::Unauthorized);

            Self::do_grant_role(&sender, role, account)
        }

        /// Grants multiple roles at once. See `grant_role`.
        ///
        /// # Weight
        ///
        /// Complexity: `O(n)`, where `n` is the number of grants.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::grant_roles(grants.len() as u32))]
        #[transactional]
        pub fn grant_roles(origin: OriginFor<T>, grants: RoleGrantsOf<T>) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            ensure!(Self::is_admin(&sender), Error::<T>::Unauthorized);

            for RoleGrant { role, account } in grants {
                Self::do_grant_role(&sender, role, account)?;
            }

            Ok(())
        }

        /// Revokes `role` from `account`. Revoking a role which `account` doesn't hold has no
        /// effect.
        ///
        /// Must be called by an admin.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::revoke_role())]
        #[transactional]
        pub fn revoke_role(
            origin: OriginFor<T>,
            role: Role,
            account: AccountIdOf<T>,
        ) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            ensure!(Self::is_admin(&sender), Error::<T>::Unauthorized);

            Self::do_revoke_role(&sender, role, account)
        }

        /// Gives up `role`. `account` must be the sender.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::renounce_role())]
        #[transactional]
        pub fn renounce_role(
            origin: OriginFor<T>,
            role: Role,
            account: AccountIdOf<T>,
        ) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            ensure!(sender == account, Error::<T>::CanOnlyRenounceForSelf);

            Self::do_revoke_role(&sender, role, account)
        }

        /// Revokes every role from each of `accounts`.
        ///
        /// Must be called by an admin.
        ///
        /// # Weight
        ///
        /// Complexity: `O(n)`, where `n` is the number of accounts.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::blacklist(accounts.len() as u32))]
        #[transactional]
        pub fn blacklist(origin: OriginFor<T>, accounts: AccountsOf<T>) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            ensure!(Self::is_admin(&sender), Error::<T>::Unauthorized);

            for account in accounts {
                for role in [Role::SuperAdmin, Role::Admin, Role::Restricted, Role::Unrestricted] {
                    Self::remove_role(role, &account)?;
                }
                Self::deposit_event(Event::Blacklisted { account, sender: sender.clone() });
            }

            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        pub fn has_role(role: Role, who: &AccountIdOf<T>) -> bool {
            Roles::<T>::get(who).has(role)
        }

        /// Returns `true` if `who` holds `Admin` or `SuperAdmin`.
        pub fn is_admin(who: &AccountIdOf<T>) -> bool {
            Roles::<T>::get(who).is_admin()
        }

        /// Returns `true` if `who` holds a swap tier.
        pub fn whitelisted(who: &AccountIdOf<T>) -> bool {
            Roles::<T>::get(who).tier.is_some()
        }

        /// Returns the roles of `who` as `[admin, restricted, unrestricted]`.
        pub fn get_roles(who: &AccountIdOf<T>) -> [Option<Role>; 3] {
            let roles = Roles::<T>::get(who);
            [Role::Admin, Role::Restricted, Role::Unrestricted]
                .map(|role| if roles.has(role) { Some(role) } else { None })
        }

        pub fn get_role_member(role: Role, index: u32) -> Result<AccountIdOf<T>, DispatchError> {
            RoleMembers::<T>::get(role)
                .get(index as usize)
                .cloned()
                .ok_or(Error::<T>::RoleMemberIndexOutOfBounds.into())
        }

        pub fn get_role_member_count(role: Role) -> u32 {
            RoleMembers::<T>::decode_len(role).unwrap_or(0) as u32
        }

        fn do_grant_role(
            sender: &AccountIdOf<T>,
            role: Role,
            account: AccountIdOf<T>,
        ) -> DispatchResult {
            if Self::has_role(role, &account) {
                return Ok(());
            }

            if let Some(tier) = Self::insert_role(role, &account)? {
                Self::deposit_event(Event::RoleRevoked {
                    role: tier.into(),
                    account: account.clone(),
                    sender: sender.clone(),
                });
            }
            Self::deposit_event(Event::RoleGranted { role, account, sender: sender.clone() });

            Ok(())
        }

        fn do_revoke_role(
            sender: &AccountIdOf<T>,
            role: Role,
            account: AccountIdOf<T>,
        ) -> DispatchResult {
            if Self::remove_role(role, &account)? {
                Self::deposit_event(Event::RoleRevoked { role, account, sender: sender.clone() });
            }

            Ok(())
        }

        /// Adds `role` to `who` and returns the swap tier it replaced, if any. Emits no events.
        pub(crate) fn insert_role(
            role: Role,
            who: &AccountIdOf<T>,
        ) -> Result<Option<Tier>, DispatchError> {
            let mut roles = Roles::<T>::get(who);
            if roles.has(role) {
                return Ok(None);
            }

            let replaced = roles.insert(role);
            if let Some(tier) = replaced {
                Self::remove_member(tier.into(), who);
            }
            RoleMembers::<T>::try_mutate(role, |members| {
                members.try_push(who.clone()).map_err(|_| Error::<T>::TooManyRoleMembers)
            })?;
            Roles::<T>::insert(who, roles);

            Ok(replaced)
        }

        /// Removes `role` from `who`. Returns `false` if `who` didn't hold `role`.
        fn remove_role(role: Role, who: &AccountIdOf<T>) -> Result<bool, DispatchError> {
            let mut roles = Roles::<T>::get(who);
            if !roles.has(role) {
                return Ok(false);
            }
            if role == Role::SuperAdmin {
                ensure!(
                    Self::get_role_member_count(Role::SuperAdmin) > 1,
                    Error::<T>::LastSuperAdmin
                );
            }

            roles.remove(role);
            Self::remove_member(role, who);
            if roles.is_empty() {
                Roles::<T>::remove(who);
            } else {
                Roles::<T>::insert(who, roles);
            }

            Ok(true)
        }

        fn remove_member(role: Role, who: &AccountIdOf<T>) {
            RoleMembers::<T>::mutate(role, |members| {
                if let Some(index) = members.iter().position(|member| member == who) {
                    members.swap_remove(index);
                } else {
                    log::warn!(
                        target: LOG_TARGET,
                        "Role {:?} is missing member {:?}",
                        role,
                        who,
                    );
                    debug_assert!(false, "Role members out of sync with account roles");
                }
            });
        }
    }

    impl<T: Config> AccessControlApi for Pallet<T> {
        type AccountId = AccountIdOf<T>;

        fn is_admin(who: &Self::AccountId) -> bool {
            Self::is_admin(who)
        }

        fn has_role(role: Role, who: &Self::AccountId) -> bool {
            Self::has_role(role, who)
        }

        fn whitelisted(who: &Self::AccountId) -> bool {
            Self::whitelisted(who)
        }
    }

    impl<T: Config> AccessControlBenchmarkHelper<AccountIdOf<T>> for Pallet<T> {
        fn add_role(role: Role, who: &AccountIdOf<T>) -> DispatchResult {
            Self::insert_role(role, who).map(|_| ())
        }
    }
}
