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
mod pool_storage;
#[cfg(test)]
mod tests;
pub mod traits;
pub mod types;
pub mod weights;

pub use pallet::*;

#[frame_support::pallet]
mod pallet {
    use crate::{
        traits::PoolStorage,
        types::{Pool, PoolRoles, PoolStatus, Record},
        weights::WeightInfoZeitgeist,
    };
    use alloc::vec::Vec;
    use core::marker::PhantomData;
    use fcx_primitives::{
        constants::{
            INIT_POOL_SUPPLY, MAX_BOUND_TOKENS, MAX_FEE, MAX_IN_RATIO, MAX_OUT_RATIO,
            MAX_TOTAL_WEIGHT, MAX_WEIGHT, MIN_BALANCE, MIN_BOUND_TOKENS, MIN_FEE, MIN_WEIGHT,
        },
        math::{
            checked_ops_res::{CheckedAddRes, CheckedSubRes},
            fixed::{bdiv, bmul},
            weighted::{
                calc_in_given_out, calc_out_given_in, calc_pool_in_given_single_out,
                calc_pool_out_given_single_in, calc_single_in_given_pool_out,
                calc_single_out_given_pool_in, calc_spot_price,
            },
        },
        traits::{AccessControlApi, WeightedPoolApi},
        types::{Asset, Balance, PoolId, Role},
    };
    #[cfg(feature = "runtime-benchmarks")]
    use fcx_primitives::traits::AccessControlBenchmarkHelper;
    use frame_support::{
        ensure,
        pallet_prelude::{
            DispatchError, DispatchResult, OptionQuery, StorageDoubleMap, StorageMap,
            StorageValue, ValueQuery,
        },
        traits::{Get, IsType, StorageVersion},
        transactional, Blake2_128Concat, PalletId, Twox64Concat,
    };
    use frame_system::{ensure_signed, pallet_prelude::OriginFor};
    use orml_traits::MultiCurrency;
    use sp_runtime::traits::AccountIdConversion;

    const LOG_TARGET: &str = "runtime::fcx-weighted-pools";

    /// The current storage version.
    const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

    pub(crate) type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
    pub(crate) type PoolOf<T> = Pool<AccountIdOf<T>>;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Role registry which gates pool creation, swaps and joins.
        type AccessControl: AccessControlApi<AccountId = Self::AccountId>;

        /// Custody of pool tokens and issuance of pool shares.
        type AssetManager: MultiCurrency<Self::AccountId, CurrencyId = Asset, Balance = Balance>;

        #[cfg(feature = "runtime-benchmarks")]
        type BenchmarkHelper: AccessControlBenchmarkHelper<Self::AccountId>;

        /// Fraction of redeemed pool shares which is withheld on exit. Zero in most
        /// configurations.
        #[pallet::constant]
        type ExitFee: Get<Balance>;

        /// Identifier of this pallet, used to derive pool accounts and the account which holds
        /// exit fees.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        type WeightInfo: WeightInfoZeitgeist;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(PhantomData<T>);

    #[pallet::storage]
    pub type NextPoolId<T> = StorageValue<_, PoolId, ValueQuery>;

    #[pallet::storage]
    pub type Pools<T: Config> = StorageMap<_, Twox64Concat, PoolId, PoolOf<T>, OptionQuery>;

    /// Protocol fees which were taken from swaps and are not yet claimed by the controller. They
    /// are held by the pool account but are not part of the pool's balances.
    #[pallet::storage]
    pub type ProtocolFeesAccrued<T> =
        StorageDoubleMap<_, Twox64Concat, PoolId, Blake2_128Concat, Asset, Balance, ValueQuery>;

    /// The account which may collect the exit fees.
    #[pallet::storage]
    pub type FeeCollector<T: Config> = StorageValue<_, AccountIdOf<T>, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(fn deposit_event)]
    pub enum Event<T>
    where
        T: Config,
    {
        PoolCreated { pool_id: PoolId, controller: AccountIdOf<T>, pool_account: AccountIdOf<T> },
        TokenBound { pool_id: PoolId, asset: Asset, balance: Balance, weight: Balance },
        TokenRebound { pool_id: PoolId, asset: Asset, balance: Balance, weight: Balance },
        TokenUnbound { pool_id: PoolId, asset: Asset, balance: Balance },
        /// The pool was finalized and `initial_supply` pool shares were minted to the controller.
        PoolFinalized { pool_id: PoolId, initial_supply: Balance },
        SwapFeeChanged { pool_id: PoolId, swap_fee: Balance },
        ProtocolFeeChanged { pool_id: PoolId, protocol_fee: Balance },
        PublicSwapChanged { pool_id: PoolId, public_swap: bool },
        ControllerChanged { pool_id: PoolId, controller: AccountIdOf<T> },
        RolesChanged { pool_id: PoolId, roles: PoolRoles },
        /// The recorded balance of `asset` was synchronized with the pool account.
        Gulped { pool_id: PoolId, asset: Asset, balance: Balance },
        /// `who` swapped `amount_in` units of `asset_in` for `amount_out` units of `asset_out`.
        /// `protocol_fee_amount` units of `asset_in` were set aside for the controller.
        SwapExecuted {
            who: AccountIdOf<T>,
            pool_id: PoolId,
            asset_in: Asset,
            asset_out: Asset,
            amount_in: Balance,
            amount_out: Balance,
            protocol_fee_amount: Balance,
            spot_price_before: Balance,
            spot_price_after: Balance,
        },
        /// `who` deposited `amounts_in` (in the order of the pool's tokens) for `pool_amount`
        /// pool shares.
        PoolJoined {
            who: AccountIdOf<T>,
            pool_id: PoolId,
            pool_amount: Balance,
            amounts_in: Vec<Balance>,
        },
        /// `who` redeemed `pool_amount` pool shares for `amounts_out`. `exit_fee` of the shares
        /// were withheld.
        PoolExited {
            who: AccountIdOf<T>,
            pool_id: PoolId,
            pool_amount: Balance,
            exit_fee: Balance,
            amounts_out: Vec<Balance>,
        },
        PoolJoinedWithSingleAsset {
            who: AccountIdOf<T>,
            pool_id: PoolId,
            asset: Asset,
            amount_in: Balance,
            pool_amount: Balance,
        },
        PoolExitedWithSingleAsset {
            who: AccountIdOf<T>,
            pool_id: PoolId,
            asset: Asset,
            amount_out: Balance,
            pool_amount: Balance,
            exit_fee: Balance,
        },
        ProtocolFeesClaimed { pool_id: PoolId, controller: AccountIdOf<T>, fees: Vec<(Asset, Balance)> },
        FeeCollectorChanged { fee_collector: AccountIdOf<T> },
        ExitFeesCollected { asset: Asset, fee_collector: AccountIdOf<T>, amount: Balance },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The pool does not exist.
        PoolNotFound,
        /// The sender is not the controller of the pool.
        NotController,
        /// The sender is not an admin.
        NotAdmin,
        /// The sender is not the fee collector.
        NotFeeCollector,
        /// The pool is finalized.
        IsFinalized,
        /// The pool is not finalized.
        NotFinalized,
        /// The token is already bound to the pool.
        IsBound,
        /// The token is not bound to the pool.
        NotBound,
        /// The pool can't hold more tokens.
        MaxTokens,
        /// The pool doesn't hold enough tokens.
        MinTokens,
        /// The weight is below the minimum weight.
        MinWeight,
        /// The weight is above the maximum weight.
        MaxWeight,
        /// The balance is below the minimum balance.
        MinBalance,
        /// The total weight would exceed the maximum total weight.
        MaxTotalWeight,
        /// The fee is below the minimum fee.
        MinFee,
        /// The fee is above the maximum fee.
        MaxFee,
        /// The protocol fee would exceed the swap fee.
        InvalidFee,
        /// Swapping is disabled.
        SwapNotPublic,
        /// The sender holds none of the roles which may swap in this pool.
        RolesMismatch,
        /// The sender is not whitelisted.
        NotWhitelisted,
        /// The amount in exceeds the maximum ratio of the balance in.
        MaxInRatio,
        /// The amount out exceeds the maximum ratio of the balance out.
        MaxOutRatio,
        /// The spot price already exceeds the maximum price.
        BadLimitPrice,
        /// The spot price after the swap would exceed the maximum price.
        LimitPrice,
        /// The amount in exceeds the specified maximum.
        LimitIn,
        /// The amount out falls below the specified minimum.
        LimitOut,
        /// The result of the calculation is inconsistent due to rounding.
        MathApproximation,
        /// The length of the amounts doesn't match the number of tokens.
        IncorrectVecLen,
        /// More roles were specified than there are roles.
        TooManyRoles,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Creates an open pool controlled by the sender, who must be an admin.
        ///
        /// The pool starts with the minimum swap fee, no protocol fee and swapping disabled.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create_pool())]
        #[transactional]
        pub fn create_pool(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(T::AccessControl::is_admin(&who), Error::<T>::NotAdmin);

            Self::do_create_pool(who)?;

            Ok(())
        }

        /// Adds `asset` to an open pool and transfers `balance` from the controller to the pool.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::bind())]
        #[transactional]
        pub fn bind(
            origin: OriginFor<T>,
            #[pallet::compact] pool_id: PoolId,
            asset: Asset,
            #[pallet::compact] balance: Balance,
            #[pallet::compact] weight: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_bind(who, pool_id, asset, balance, weight)
        }

        /// Changes the balance and weight of a bound token. Increases of the balance are
        /// transferred from the controller, decreases are transferred to the controller.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::rebind())]
        #[transactional]
        pub fn rebind(
            origin: OriginFor<T>,
            #[pallet::compact] pool_id: PoolId,
            asset: Asset,
            #[pallet::compact] balance: Balance,
            #[pallet::compact] weight: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_rebind(who, pool_id, asset, balance, weight)
        }

        /// Removes `asset` from an open pool and transfers its balance to the controller.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::unbind())]
        #[transactional]
        pub fn unbind(
            origin: OriginFor<T>,
            #[pallet::compact] pool_id: PoolId,
            asset: Asset,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_unbind(who, pool_id, asset)
        }

        /// Freezes the token set, enables swapping and mints the initial pool shares to the
        /// controller. There is no way back.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::finalize())]
        #[transactional]
        pub fn finalize(origin: OriginFor<T>, #[pallet::compact] pool_id: PoolId) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_finalize(who, pool_id)
        }

        /// Sets the swap fee of an open pool.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::set_swap_fee())]
        #[transactional]
        pub fn set_swap_fee(
            origin: OriginFor<T>,
            #[pallet::compact] pool_id: PoolId,
            #[pallet::compact] swap_fee: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_set_swap_fee(who, pool_id, swap_fee)
        }

        /// Sets the protocol fee of an open pool. The protocol fee must not exceed the swap fee.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::set_protocol_fee())]
        #[transactional]
        pub fn set_protocol_fee(
            origin: OriginFor<T>,
            #[pallet::compact] pool_id: PoolId,
            #[pallet::compact] protocol_fee: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_set_protocol_fee(who, pool_id, protocol_fee)
        }

        /// Enables or disables swapping in an open pool.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::set_public_swap())]
        #[transactional]
        pub fn set_public_swap(
            origin: OriginFor<T>,
            #[pallet::compact] pool_id: PoolId,
            public_swap: bool,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_set_public_swap(who, pool_id, public_swap)
        }

        /// Hands control of the pool to `controller`.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::set_controller())]
        #[transactional]
        pub fn set_controller(
            origin: OriginFor<T>,
            #[pallet::compact] pool_id: PoolId,
            controller: AccountIdOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::try_mutate_pool(&pool_id, |pool| {
                Self::ensure_controller(pool, &who)?;
                pool.controller = controller.clone();
                Ok(())
            })?;

            Self::deposit_event(Event::ControllerChanged { pool_id, controller });

            Ok(())
        }

        /// Sets the roles of which traders must hold at least one to swap in the pool.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::set_roles())]
        #[transactional]
        pub fn set_roles(
            origin: OriginFor<T>,
            #[pallet::compact] pool_id: PoolId,
            roles: PoolRoles,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_set_roles(who, pool_id, roles)
        }

        /// Sets the recorded balance of `asset` to the balance of the pool account, excluding
        /// unclaimed protocol fees. Anyone may call this.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::gulp())]
        #[transactional]
        pub fn gulp(
            origin: OriginFor<T>,
            #[pallet::compact] pool_id: PoolId,
            asset: Asset,
        ) -> DispatchResult {
            ensure_signed(origin)?;

            Self::do_gulp(pool_id, asset)
        }

        /// Swaps exactly `amount_in` units of `asset_in` for at least `min_amount_out` units of
        /// `asset_out`.
        ///
        /// The swap is rejected if the spot price of `asset_in` in units of `asset_out` exceeds
        /// `max_price` before or after the swap.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::swap_exact_amount_in())]
        #[transactional]
        pub fn swap_exact_amount_in(
            origin: OriginFor<T>,
            #[pallet::compact] pool_id: PoolId,
            asset_in: Asset,
            #[pallet::compact] amount_in: Balance,
            asset_out: Asset,
            #[pallet::compact] min_amount_out: Balance,
            #[pallet::compact] max_price: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_swap_exact_amount_in(
                who,
                pool_id,
                asset_in,
                amount_in,
                asset_out,
                min_amount_out,
                max_price,
            )?;

            Ok(())
        }

        /// Swaps at most `max_amount_in` units of `asset_in` for exactly `amount_out` units of
        /// `asset_out`. See `swap_exact_amount_in` for `max_price`.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::swap_exact_amount_out())]
        #[transactional]
        pub fn swap_exact_amount_out(
            origin: OriginFor<T>,
            #[pallet::compact] pool_id: PoolId,
            asset_in: Asset,
            #[pallet::compact] max_amount_in: Balance,
            asset_out: Asset,
            #[pallet::compact] amount_out: Balance,
            #[pallet::compact] max_price: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_swap_exact_amount_out(
                who,
                pool_id,
                asset_in,
                max_amount_in,
                asset_out,
                amount_out,
                max_price,
            )?;

            Ok(())
        }

        /// Mints `pool_amount_out` pool shares in exchange for the proportional amount of every
        /// token of the pool.
        ///
        /// `max_amounts_in` are the maximum amounts of the tokens, in the order in which the
        /// tokens were bound.
        ///
        /// # Weight
        ///
        /// Complexity: `O(n)`, where `n` is the number of tokens in the pool.
        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::join_pool(max_amounts_in.len() as u32))]
        #[transactional]
        pub fn join_pool(
            origin: OriginFor<T>,
            #[pallet::compact] pool_id: PoolId,
            #[pallet::compact] pool_amount_out: Balance,
            max_amounts_in: Vec<Balance>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_join_pool(who, pool_id, pool_amount_out, max_amounts_in)
        }

        /// Redeems `pool_amount_in` pool shares for the proportional amount of every token of
        /// the pool, minus the exit fee.
        ///
        /// # Weight
        ///
        /// Complexity: `O(n)`, where `n` is the number of tokens in the pool.
        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::exit_pool(min_amounts_out.len() as u32))]
        #[transactional]
        pub fn exit_pool(
            origin: OriginFor<T>,
            #[pallet::compact] pool_id: PoolId,
            #[pallet::compact] pool_amount_in: Balance,
            min_amounts_out: Vec<Balance>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_exit_pool(who, pool_id, pool_amount_in, min_amounts_out)
        }

        /// Deposits exactly `amount_in` units of `asset_in` for at least `min_pool_amount_out`
        /// pool shares.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(15)]
        #[pallet::weight(T::WeightInfo::joinswap_extern_amount_in())]
        #[transactional]
        pub fn joinswap_extern_amount_in(
            origin: OriginFor<T>,
            #[pallet::compact] pool_id: PoolId,
            asset_in: Asset,
            #[pallet::compact] amount_in: Balance,
            #[pallet::compact] min_pool_amount_out: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_joinswap_extern_amount_in(
                who,
                pool_id,
                asset_in,
                amount_in,
                min_pool_amount_out,
            )?;

            Ok(())
        }

        /// Deposits at most `max_amount_in` units of `asset_in` for exactly `pool_amount_out`
        /// pool shares.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(16)]
        #[pallet::weight(T::WeightInfo::joinswap_pool_amount_out())]
        #[transactional]
        pub fn joinswap_pool_amount_out(
            origin: OriginFor<T>,
            #[pallet::compact] pool_id: PoolId,
            asset_in: Asset,
            #[pallet::compact] pool_amount_out: Balance,
            #[pallet::compact] max_amount_in: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_joinswap_pool_amount_out(who, pool_id, asset_in, pool_amount_out, max_amount_in)?;

            Ok(())
        }

        /// Redeems exactly `pool_amount_in` pool shares for at least `min_amount_out` units of
        /// `asset_out`.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(17)]
        #[pallet::weight(T::WeightInfo::exitswap_pool_amount_in())]
        #[transactional]
        pub fn exitswap_pool_amount_in(
            origin: OriginFor<T>,
            #[pallet::compact] pool_id: PoolId,
            asset_out: Asset,
            #[pallet::compact] pool_amount_in: Balance,
            #[pallet::compact] min_amount_out: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_exitswap_pool_amount_in(who, pool_id, asset_out, pool_amount_in, min_amount_out)?;

            Ok(())
        }

        /// Redeems at most `max_pool_amount_in` pool shares for exactly `amount_out` units of
        /// `asset_out`.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(18)]
        #[pallet::weight(T::WeightInfo::exitswap_extern_amount_out())]
        #[transactional]
        pub fn exitswap_extern_amount_out(
            origin: OriginFor<T>,
            #[pallet::compact] pool_id: PoolId,
            asset_out: Asset,
            #[pallet::compact] amount_out: Balance,
            #[pallet::compact] max_pool_amount_in: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_exitswap_extern_amount_out(
                who,
                pool_id,
                asset_out,
                amount_out,
                max_pool_amount_in,
            )?;

            Ok(())
        }

        /// Transfers all protocol fees accrued by the pool to the controller.
        ///
        /// # Weight
        ///
        /// Complexity: `O(n)`, where `n` is the number of assets with unclaimed fees.
        #[pallet::call_index(19)]
        #[pallet::weight(T::WeightInfo::claim_protocol_fees(MAX_BOUND_TOKENS))]
        #[transactional]
        pub fn claim_protocol_fees(
            origin: OriginFor<T>,
            #[pallet::compact] pool_id: PoolId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_claim_protocol_fees(who, pool_id)?;

            Ok(())
        }

        /// Sets the account which may collect exit fees. Must be called by an admin.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(20)]
        #[pallet::weight(T::WeightInfo::set_fee_collector())]
        #[transactional]
        pub fn set_fee_collector(
            origin: OriginFor<T>,
            fee_collector: AccountIdOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(T::AccessControl::is_admin(&who), Error::<T>::NotAdmin);

            FeeCollector::<T>::put(fee_collector.clone());

            Self::deposit_event(Event::FeeCollectorChanged { fee_collector });

            Ok(())
        }

        /// Transfers all exit fees paid in `asset` to the fee collector, who must be the sender.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(21)]
        #[pallet::weight(T::WeightInfo::collect())]
        #[transactional]
        pub fn collect(origin: OriginFor<T>, asset: Asset) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(FeeCollector::<T>::get().as_ref() == Some(&who), Error::<T>::NotFeeCollector);

            let pallet_account = Self::pallet_account();
            let amount = T::AssetManager::free_balance(asset, &pallet_account);
            T::AssetManager::transfer(asset, &pallet_account, &who, amount)?;

            Self::deposit_event(Event::ExitFeesCollected { asset, fee_collector: who, amount });

            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        /// The account which holds the tokens of `pool_id`.
        pub fn pool_account(pool_id: PoolId) -> AccountIdOf<T> {
            T::PalletId::get().into_sub_account_truncating(pool_id)
        }

        /// The account which holds the exit fees.
        pub fn pallet_account() -> AccountIdOf<T> {
            T::PalletId::get().into_account_truncating()
        }

        pub fn is_pool(pool_id: PoolId) -> bool {
            Pools::<T>::contains_key(pool_id)
        }

        pub fn is_bound(pool_id: PoolId, asset: Asset) -> bool {
            Pools::<T>::get(pool_id).is_some_and(|pool| pool.is_bound(&asset))
        }

        pub fn is_finalized(pool_id: PoolId) -> Result<bool, DispatchError> {
            Ok(Self::get(pool_id)?.is_finalized())
        }

        pub fn is_public_swap(pool_id: PoolId) -> Result<bool, DispatchError> {
            Ok(Self::get(pool_id)?.public_swap)
        }

        /// Total issuance of the shares of `pool_id`.
        pub fn total_supply(pool_id: PoolId) -> Balance {
            T::AssetManager::total_issuance(Asset::PoolShare(pool_id))
        }

        pub fn get_current_tokens(pool_id: PoolId) -> Result<Vec<Asset>, DispatchError> {
            Ok(Self::get(pool_id)?.assets())
        }

        pub fn get_final_tokens(pool_id: PoolId) -> Result<Vec<Asset>, DispatchError> {
            let pool = Self::get(pool_id)?;
            ensure!(pool.is_finalized(), Error::<T>::NotFinalized);
            Ok(pool.assets())
        }

        pub fn get_balance(pool_id: PoolId, asset: Asset) -> Result<Balance, DispatchError> {
            Ok(Self::record_of(&Self::get(pool_id)?, &asset)?.balance)
        }

        pub fn get_denormalized_weight(
            pool_id: PoolId,
            asset: Asset,
        ) -> Result<Balance, DispatchError> {
            Ok(Self::record_of(&Self::get(pool_id)?, &asset)?.weight)
        }

        pub fn get_total_denormalized_weight(pool_id: PoolId) -> Result<Balance, DispatchError> {
            Ok(Self::get(pool_id)?.total_weight)
        }

        pub fn get_normalized_weight(pool_id: PoolId, asset: Asset) -> Result<Balance, DispatchError> {
            let pool = Self::get(pool_id)?;
            bdiv(Self::record_of(&pool, &asset)?.weight, pool.total_weight)
        }

        /// Spot price of `asset_in` in units of `asset_out`, including the swap fee.
        pub fn get_spot_price(
            pool_id: PoolId,
            asset_in: Asset,
            asset_out: Asset,
        ) -> Result<Balance, DispatchError> {
            let pool = Self::get(pool_id)?;
            Self::spot_price(&pool, &asset_in, &asset_out, pool.swap_fee)
        }

        /// Spot price of `asset_in` in units of `asset_out`, excluding the swap fee.
        pub fn get_spot_price_sans_fee(
            pool_id: PoolId,
            asset_in: Asset,
            asset_out: Asset,
        ) -> Result<Balance, DispatchError> {
            let pool = Self::get(pool_id)?;
            Self::spot_price(&pool, &asset_in, &asset_out, 0)
        }

        fn spot_price(
            pool: &PoolOf<T>,
            asset_in: &Asset,
            asset_out: &Asset,
            swap_fee: Balance,
        ) -> Result<Balance, DispatchError> {
            let record_in = Self::record_of(pool, asset_in)?;
            let record_out = Self::record_of(pool, asset_out)?;
            calc_spot_price(
                record_in.balance,
                record_in.weight,
                record_out.balance,
                record_out.weight,
                swap_fee,
            )
        }

        fn record_of(pool: &PoolOf<T>, asset: &Asset) -> Result<Record, DispatchError> {
            pool.record(asset).ok_or(Error::<T>::NotBound.into())
        }

        fn record_mut<'a>(
            pool: &'a mut PoolOf<T>,
            asset: &Asset,
        ) -> Result<&'a mut Record, DispatchError> {
            pool.records.get_mut(asset).ok_or(Error::<T>::NotBound.into())
        }

        fn ensure_controller(pool: &PoolOf<T>, who: &AccountIdOf<T>) -> DispatchResult {
            ensure!(pool.controller == *who, Error::<T>::NotController);
            Ok(())
        }

        fn ensure_open(pool: &PoolOf<T>) -> DispatchResult {
            ensure!(!pool.is_finalized(), Error::<T>::IsFinalized);
            Ok(())
        }

        fn ensure_finalized(pool: &PoolOf<T>) -> DispatchResult {
            ensure!(pool.is_finalized(), Error::<T>::NotFinalized);
            Ok(())
        }

        fn ensure_whitelisted(who: &AccountIdOf<T>) -> DispatchResult {
            ensure!(T::AccessControl::whitelisted(who), Error::<T>::NotWhitelisted);
            Ok(())
        }

        /// Moves `exit_fee` pool shares of `who` to the pallet account and burns the rest of
        /// `pool_amount_in`.
        fn redeem_pool_shares(
            who: &AccountIdOf<T>,
            pool_id: PoolId,
            pool_amount_in: Balance,
            exit_fee: Balance,
        ) -> DispatchResult {
            let pool_shares = Asset::PoolShare(pool_id);
            if exit_fee != 0 {
                T::AssetManager::transfer(pool_shares, who, &Self::pallet_account(), exit_fee)?;
            }
            T::AssetManager::withdraw(pool_shares, who, pool_amount_in.checked_sub_res(&exit_fee)?)
        }

        pub(crate) fn do_create_pool(controller: AccountIdOf<T>) -> Result<PoolId, DispatchError> {
            let pool_id = Self::add(Pool::new(controller.clone(), MIN_FEE))?;

            Self::deposit_event(Event::PoolCreated {
                pool_id,
                controller,
                pool_account: Self::pool_account(pool_id),
            });

            Ok(pool_id)
        }

        pub(crate) fn do_bind(
            who: AccountIdOf<T>,
            pool_id: PoolId,
            asset: Asset,
            balance: Balance,
            weight: Balance,
        ) -> DispatchResult {
            Self::try_mutate_pool(&pool_id, |pool| {
                Self::ensure_controller(pool, &who)?;
                ensure!(!pool.is_bound(&asset), Error::<T>::IsBound);
                Self::ensure_open(pool)?;
                pool.tokens.try_push(asset).map_err(|_| Error::<T>::MaxTokens)?;
                pool.records
                    .try_insert(asset, Record::default())
                    .map_err(|_| Error::<T>::MaxTokens)?;
                Self::rebind_record(pool, pool_id, asset, balance, weight)
            })?;

            Self::deposit_event(Event::TokenBound { pool_id, asset, balance, weight });

            Ok(())
        }

        pub(crate) fn do_rebind(
            who: AccountIdOf<T>,
            pool_id: PoolId,
            asset: Asset,
            balance: Balance,
            weight: Balance,
        ) -> DispatchResult {
            Self::try_mutate_pool(&pool_id, |pool| {
                Self::ensure_controller(pool, &who)?;
                ensure!(pool.is_bound(&asset), Error::<T>::NotBound);
                Self::ensure_open(pool)?;
                Self::rebind_record(pool, pool_id, asset, balance, weight)
            })?;

            Self::deposit_event(Event::TokenRebound { pool_id, asset, balance, weight });

            Ok(())
        }

        /// Validates and stores the new record of a bound `asset` and moves the balance
        /// difference between the controller and the pool account.
        fn rebind_record(
            pool: &mut PoolOf<T>,
            pool_id: PoolId,
            asset: Asset,
            balance: Balance,
            weight: Balance,
        ) -> DispatchResult {
            ensure!(weight >= MIN_WEIGHT, Error::<T>::MinWeight);
            ensure!(weight <= MAX_WEIGHT, Error::<T>::MaxWeight);
            ensure!(balance >= MIN_BALANCE, Error::<T>::MinBalance);

            let old = Self::record_of(pool, &asset)?;
            let total_weight =
                pool.total_weight.checked_sub_res(&old.weight)?.checked_add_res(&weight)?;
            ensure!(total_weight <= MAX_TOTAL_WEIGHT, Error::<T>::MaxTotalWeight);

            let pool_account = Self::pool_account(pool_id);
            if balance > old.balance {
                let amount = balance.checked_sub_res(&old.balance)?;
                T::AssetManager::transfer(asset, &pool.controller, &pool_account, amount)?;
            } else if balance < old.balance {
                let amount = old.balance.checked_sub_res(&balance)?;
                T::AssetManager::transfer(asset, &pool_account, &pool.controller, amount)?;
            }

            pool.total_weight = total_weight;
            *Self::record_mut(pool, &asset)? = Record { balance, weight };

            Ok(())
        }

        pub(crate) fn do_unbind(
            who: AccountIdOf<T>,
            pool_id: PoolId,
            asset: Asset,
        ) -> DispatchResult {
            let balance = Self::try_mutate_pool(&pool_id, |pool| {
                Self::ensure_controller(pool, &who)?;
                ensure!(pool.is_bound(&asset), Error::<T>::NotBound);
                Self::ensure_open(pool)?;

                let record = pool.records.remove(&asset).ok_or(Error::<T>::NotBound)?;
                pool.tokens.retain(|token| *token != asset);
                pool.total_weight = pool.total_weight.checked_sub_res(&record.weight)?;
                T::AssetManager::transfer(
                    asset,
                    &Self::pool_account(pool_id),
                    &pool.controller,
                    record.balance,
                )?;

                Ok(record.balance)
            })?;

            Self::deposit_event(Event::TokenUnbound { pool_id, asset, balance });

            Ok(())
        }

        pub(crate) fn do_finalize(who: AccountIdOf<T>, pool_id: PoolId) -> DispatchResult {
            Self::try_mutate_pool(&pool_id, |pool| {
                Self::ensure_controller(pool, &who)?;
                Self::ensure_open(pool)?;
                ensure!(pool.tokens.len() >= MIN_BOUND_TOKENS as usize, Error::<T>::MinTokens);

                pool.status = PoolStatus::Finalized;
                pool.public_swap = true;
                T::AssetManager::deposit(Asset::PoolShare(pool_id), &who, INIT_POOL_SUPPLY)?;

                log::debug!(
                    target: LOG_TARGET,
                    "Finalized pool {:?} with tokens {:?}",
                    pool_id,
                    pool.tokens,
                );

                Ok(())
            })?;

            Self::deposit_event(Event::PoolFinalized { pool_id, initial_supply: INIT_POOL_SUPPLY });

            Ok(())
        }

        pub(crate) fn do_set_swap_fee(
            who: AccountIdOf<T>,
            pool_id: PoolId,
            swap_fee: Balance,
        ) -> DispatchResult {
            Self::try_mutate_pool(&pool_id, |pool| {
                Self::ensure_open(pool)?;
                Self::ensure_controller(pool, &who)?;
                ensure!(swap_fee >= MIN_FEE, Error::<T>::MinFee);
                ensure!(swap_fee <= MAX_FEE, Error::<T>::MaxFee);
                ensure!(swap_fee >= pool.protocol_fee, Error::<T>::InvalidFee);
                pool.swap_fee = swap_fee;
                Ok(())
            })?;

            Self::deposit_event(Event::SwapFeeChanged { pool_id, swap_fee });

            Ok(())
        }

        pub(crate) fn do_set_protocol_fee(
            who: AccountIdOf<T>,
            pool_id: PoolId,
            protocol_fee: Balance,
        ) -> DispatchResult {
            Self::try_mutate_pool(&pool_id, |pool| {
                Self::ensure_open(pool)?;
                Self::ensure_controller(pool, &who)?;
                ensure!(protocol_fee <= MAX_FEE, Error::<T>::MaxFee);
                ensure!(protocol_fee <= pool.swap_fee, Error::<T>::InvalidFee);
                pool.protocol_fee = protocol_fee;
                Ok(())
            })?;

            Self::deposit_event(Event::ProtocolFeeChanged { pool_id, protocol_fee });

            Ok(())
        }

        pub(crate) fn do_set_public_swap(
            who: AccountIdOf<T>,
            pool_id: PoolId,
            public_swap: bool,
        ) -> DispatchResult {
            Self::try_mutate_pool(&pool_id, |pool| {
                Self::ensure_open(pool)?;
                Self::ensure_controller(pool, &who)?;
                pool.public_swap = public_swap;
                Ok(())
            })?;

            Self::deposit_event(Event::PublicSwapChanged { pool_id, public_swap });

            Ok(())
        }

        pub(crate) fn do_set_roles(
            who: AccountIdOf<T>,
            pool_id: PoolId,
            roles: PoolRoles,
        ) -> DispatchResult {
            Self::try_mutate_pool(&pool_id, |pool| {
                Self::ensure_controller(pool, &who)?;
                pool.roles = roles.clone();
                Ok(())
            })?;

            Self::deposit_event(Event::RolesChanged { pool_id, roles });

            Ok(())
        }

        pub(crate) fn do_gulp(pool_id: PoolId, asset: Asset) -> DispatchResult {
            let balance = Self::try_mutate_pool(&pool_id, |pool| {
                let free_balance =
                    T::AssetManager::free_balance(asset, &Self::pool_account(pool_id));
                let balance = free_balance
                    .checked_sub_res(&ProtocolFeesAccrued::<T>::get(pool_id, asset))?;
                Self::record_mut(pool, &asset)?.balance = balance;
                Ok(balance)
            })?;

            log::debug!(
                target: LOG_TARGET,
                "Gulped {:?} of pool {:?}, new balance {:?}",
                asset,
                pool_id,
                balance,
            );
            Self::deposit_event(Event::Gulped { pool_id, asset, balance });

            Ok(())
        }

        /// Checks that `who` may swap `asset_in` for `asset_out` in `pool` and returns the
        /// records of both assets.
        fn ensure_can_swap(
            pool: &PoolOf<T>,
            who: &AccountIdOf<T>,
            asset_in: &Asset,
            asset_out: &Asset,
        ) -> Result<(Record, Record), DispatchError> {
            let record_in = Self::record_of(pool, asset_in)?;
            let record_out = Self::record_of(pool, asset_out)?;
            ensure!(pool.public_swap, Error::<T>::SwapNotPublic);
            ensure!(T::AccessControl::has_any_role(&pool.roles, who), Error::<T>::RolesMismatch);
            Ok((record_in, record_out))
        }

        /// Books a swap of `amount_in` for `amount_out` into `pool`, checks the spot price
        /// movement and moves the funds. Returns the spot price after the swap.
        #[allow(clippy::too_many_arguments)]
        fn execute_swap(
            who: &AccountIdOf<T>,
            pool: &mut PoolOf<T>,
            pool_id: PoolId,
            asset_in: Asset,
            amount_in: Balance,
            asset_out: Asset,
            amount_out: Balance,
            spot_price_before: Balance,
            max_price: Balance,
        ) -> DispatchResult {
            let protocol_fee_amount = bmul(amount_in, pool.protocol_fee)?;
            let record_in = Self::record_mut(pool, &asset_in)?;
            record_in.balance = record_in
                .balance
                .checked_add_res(&amount_in.checked_sub_res(&protocol_fee_amount)?)?;
            let record_out = Self::record_mut(pool, &asset_out)?;
            record_out.balance = record_out.balance.checked_sub_res(&amount_out)?;

            let spot_price_after = Self::spot_price(pool, &asset_in, &asset_out, pool.swap_fee)?;
            ensure!(spot_price_after >= spot_price_before, Error::<T>::MathApproximation);
            ensure!(spot_price_after <= max_price, Error::<T>::LimitPrice);
            ensure!(
                spot_price_before <= bdiv(amount_in, amount_out)?,
                Error::<T>::MathApproximation
            );

            let pool_account = Self::pool_account(pool_id);
            T::AssetManager::transfer(asset_in, who, &pool_account, amount_in)?;
            T::AssetManager::transfer(asset_out, &pool_account, who, amount_out)?;
            if protocol_fee_amount != 0 {
                ProtocolFeesAccrued::<T>::try_mutate(pool_id, asset_in, |fees| {
                    *fees = fees.checked_add_res(&protocol_fee_amount)?;
                    Ok::<_, DispatchError>(())
                })?;
            }

            Self::deposit_event(Event::SwapExecuted {
                who: who.clone(),
                pool_id,
                asset_in,
                asset_out,
                amount_in,
                amount_out,
                protocol_fee_amount,
                spot_price_before,
                spot_price_after,
            });

            Ok(())
        }

        /// Returns the amount out.
        pub(crate) fn do_swap_exact_amount_in(
            who: AccountIdOf<T>,
            pool_id: PoolId,
            asset_in: Asset,
            amount_in: Balance,
            asset_out: Asset,
            min_amount_out: Balance,
            max_price: Balance,
        ) -> Result<Balance, DispatchError> {
            Self::try_mutate_pool(&pool_id, |pool| {
                let (record_in, record_out) =
                    Self::ensure_can_swap(pool, &who, &asset_in, &asset_out)?;
                ensure!(
                    amount_in <= bmul(record_in.balance, MAX_IN_RATIO)?,
                    Error::<T>::MaxInRatio
                );

                let spot_price_before = Self::spot_price(pool, &asset_in, &asset_out, pool.swap_fee)?;
                ensure!(spot_price_before <= max_price, Error::<T>::BadLimitPrice);

                let amount_out = calc_out_given_in(
                    record_in.balance,
                    record_in.weight,
                    record_out.balance,
                    record_out.weight,
                    amount_in,
                    pool.swap_fee,
                )?;
                ensure!(amount_out >= min_amount_out, Error::<T>::LimitOut);

                Self::execute_swap(
                    &who,
                    pool,
                    pool_id,
                    asset_in,
                    amount_in,
                    asset_out,
                    amount_out,
                    spot_price_before,
                    max_price,
                )?;

                Ok(amount_out)
            })
        }

        /// Returns the amount in.
        pub(crate) fn do_swap_exact_amount_out(
            who: AccountIdOf<T>,
            pool_id: PoolId,
            asset_in: Asset,
            max_amount_in: Balance,
            asset_out: Asset,
            amount_out: Balance,
            max_price: Balance,
        ) -> Result<Balance, DispatchError> {
            Self::try_mutate_pool(&pool_id, |pool| {
                let (record_in, record_out) =
                    Self::ensure_can_swap(pool, &who, &asset_in, &asset_out)?;
                ensure!(
                    amount_out <= bmul(record_out.balance, MAX_OUT_RATIO)?,
                    Error::<T>::MaxOutRatio
                );

                let spot_price_before = Self::spot_price(pool, &asset_in, &asset_out, pool.swap_fee)?;
                ensure!(spot_price_before <= max_price, Error::<T>::BadLimitPrice);

                let amount_in = calc_in_given_out(
                    record_in.balance,
                    record_in.weight,
                    record_out.balance,
                    record_out.weight,
                    amount_out,
                    pool.swap_fee,
                )?;
                ensure!(amount_in <= max_amount_in, Error::<T>::LimitIn);

                Self::execute_swap(
                    &who,
                    pool,
                    pool_id,
                    asset_in,
                    amount_in,
                    asset_out,
                    amount_out,
                    spot_price_before,
                    max_price,
                )?;

                Ok(amount_in)
            })
        }

        pub(crate) fn do_join_pool(
            who: AccountIdOf<T>,
            pool_id: PoolId,
            pool_amount_out: Balance,
            max_amounts_in: Vec<Balance>,
        ) -> DispatchResult {
            let amounts_in = Self::try_mutate_pool(&pool_id, |pool| {
                Self::ensure_finalized(pool)?;
                Self::ensure_whitelisted(&who)?;
                ensure!(max_amounts_in.len() == pool.tokens.len(), Error::<T>::IncorrectVecLen);

                let ratio = bdiv(pool_amount_out, Self::total_supply(pool_id))?;
                ensure!(ratio != 0, Error::<T>::MathApproximation);

                let pool_account = Self::pool_account(pool_id);
                let mut amounts_in = Vec::with_capacity(max_amounts_in.len());
                for (asset, max_amount_in) in pool.assets().into_iter().zip(max_amounts_in) {
                    let record = Self::record_mut(pool, &asset)?;
                    let amount_in = bmul(ratio, record.balance)?;
                    ensure!(amount_in != 0, Error::<T>::MathApproximation);
                    ensure!(amount_in <= max_amount_in, Error::<T>::LimitIn);
                    record.balance = record.balance.checked_add_res(&amount_in)?;
                    T::AssetManager::transfer(asset, &who, &pool_account, amount_in)?;
                    amounts_in.push(amount_in);
                }
                T::AssetManager::deposit(Asset::PoolShare(pool_id), &who, pool_amount_out)?;

                Ok(amounts_in)
            })?;

            Self::deposit_event(Event::PoolJoined {
                who,
                pool_id,
                pool_amount: pool_amount_out,
                amounts_in,
            });

            Ok(())
        }

        pub(crate) fn do_exit_pool(
            who: AccountIdOf<T>,
            pool_id: PoolId,
            pool_amount_in: Balance,
            min_amounts_out: Vec<Balance>,
        ) -> DispatchResult {
            let (exit_fee, amounts_out) = Self::try_mutate_pool(&pool_id, |pool| {
                Self::ensure_finalized(pool)?;
                ensure!(min_amounts_out.len() == pool.tokens.len(), Error::<T>::IncorrectVecLen);

                let exit_fee = bmul(pool_amount_in, T::ExitFee::get())?;
                let pool_amount_in_after_exit_fee = pool_amount_in.checked_sub_res(&exit_fee)?;
                let ratio = bdiv(pool_amount_in_after_exit_fee, Self::total_supply(pool_id))?;
                ensure!(ratio != 0, Error::<T>::MathApproximation);

                Self::redeem_pool_shares(&who, pool_id, pool_amount_in, exit_fee)?;

                let pool_account = Self::pool_account(pool_id);
                let mut amounts_out = Vec::with_capacity(min_amounts_out.len());
                for (asset, min_amount_out) in pool.assets().into_iter().zip(min_amounts_out) {
                    let record = Self::record_mut(pool, &asset)?;
                    let amount_out = bmul(ratio, record.balance)?;
                    ensure!(amount_out != 0, Error::<T>::MathApproximation);
                    ensure!(amount_out >= min_amount_out, Error::<T>::LimitOut);
                    record.balance = record.balance.checked_sub_res(&amount_out)?;
                    T::AssetManager::transfer(asset, &pool_account, &who, amount_out)?;
                    amounts_out.push(amount_out);
                }

                Ok((exit_fee, amounts_out))
            })?;

            Self::deposit_event(Event::PoolExited {
                who,
                pool_id,
                pool_amount: pool_amount_in,
                exit_fee,
                amounts_out,
            });

            Ok(())
        }

        /// Returns the amount of pool shares minted.
        pub(crate) fn do_joinswap_extern_amount_in(
            who: AccountIdOf<T>,
            pool_id: PoolId,
            asset_in: Asset,
            amount_in: Balance,
            min_pool_amount_out: Balance,
        ) -> Result<Balance, DispatchError> {
            let pool_amount_out = Self::try_mutate_pool(&pool_id, |pool| {
                Self::ensure_finalized(pool)?;
                let record = Self::record_of(pool, &asset_in)?;
                Self::ensure_whitelisted(&who)?;
                ensure!(amount_in <= bmul(record.balance, MAX_IN_RATIO)?, Error::<T>::MaxInRatio);

                let pool_amount_out = calc_pool_out_given_single_in(
                    record.balance,
                    record.weight,
                    Self::total_supply(pool_id),
                    pool.total_weight,
                    amount_in,
                    pool.swap_fee,
                )?;
                ensure!(pool_amount_out >= min_pool_amount_out, Error::<T>::LimitOut);

                Self::record_mut(pool, &asset_in)?.balance =
                    record.balance.checked_add_res(&amount_in)?;
                T::AssetManager::transfer(asset_in, &who, &Self::pool_account(pool_id), amount_in)?;
                T::AssetManager::deposit(Asset::PoolShare(pool_id), &who, pool_amount_out)?;

                Ok(pool_amount_out)
            })?;

            Self::deposit_event(Event::PoolJoinedWithSingleAsset {
                who,
                pool_id,
                asset: asset_in,
                amount_in,
                pool_amount: pool_amount_out,
            });

            Ok(pool_amount_out)
        }

        /// Returns the amount of `asset_in` deposited.
        pub(crate) fn do_joinswap_pool_amount_out(
            who: AccountIdOf<T>,
            pool_id: PoolId,
            asset_in: Asset,
            pool_amount_out: Balance,
            max_amount_in: Balance,
        ) -> Result<Balance, DispatchError> {
            let amount_in = Self::try_mutate_pool(&pool_id, |pool| {
                Self::ensure_finalized(pool)?;
                let record = Self::record_of(pool, &asset_in)?;
                Self::ensure_whitelisted(&who)?;

                let amount_in = calc_single_in_given_pool_out(
                    record.balance,
                    record.weight,
                    Self::total_supply(pool_id),
                    pool.total_weight,
                    pool_amount_out,
                    pool.swap_fee,
                )?;
                ensure!(amount_in != 0, Error::<T>::MathApproximation);
                ensure!(amount_in <= max_amount_in, Error::<T>::LimitIn);
                ensure!(amount_in <= bmul(record.balance, MAX_IN_RATIO)?, Error::<T>::MaxInRatio);

                Self::record_mut(pool, &asset_in)?.balance =
                    record.balance.checked_add_res(&amount_in)?;
                T::AssetManager::transfer(asset_in, &who, &Self::pool_account(pool_id), amount_in)?;
                T::AssetManager::deposit(Asset::PoolShare(pool_id), &who, pool_amount_out)?;

                Ok(amount_in)
            })?;

            Self::deposit_event(Event::PoolJoinedWithSingleAsset {
                who,
                pool_id,
                asset: asset_in,
                amount_in,
                pool_amount: pool_amount_out,
            });

            Ok(amount_in)
        }

        /// Returns the amount of `asset_out` withdrawn.
        pub(crate) fn do_exitswap_pool_amount_in(
            who: AccountIdOf<T>,
            pool_id: PoolId,
            asset_out: Asset,
            pool_amount_in: Balance,
            min_amount_out: Balance,
        ) -> Result<Balance, DispatchError> {
            let exit_fee_ratio = T::ExitFee::get();
            let (amount_out, exit_fee) = Self::try_mutate_pool(&pool_id, |pool| {
                Self::ensure_finalized(pool)?;
                let record = Self::record_of(pool, &asset_out)?;

                let amount_out = calc_single_out_given_pool_in(
                    record.balance,
                    record.weight,
                    Self::total_supply(pool_id),
                    pool.total_weight,
                    pool_amount_in,
                    pool.swap_fee,
                    exit_fee_ratio,
                )?;
                ensure!(amount_out >= min_amount_out, Error::<T>::LimitOut);
                ensure!(
                    amount_out <= bmul(record.balance, MAX_OUT_RATIO)?,
                    Error::<T>::MaxOutRatio
                );

                let exit_fee = bmul(pool_amount_in, exit_fee_ratio)?;
                Self::record_mut(pool, &asset_out)?.balance =
                    record.balance.checked_sub_res(&amount_out)?;
                Self::redeem_pool_shares(&who, pool_id, pool_amount_in, exit_fee)?;
                T::AssetManager::transfer(
                    asset_out,
                    &Self::pool_account(pool_id),
                    &who,
                    amount_out,
                )?;

                Ok((amount_out, exit_fee))
            })?;

            Self::deposit_event(Event::PoolExitedWithSingleAsset {
                who,
                pool_id,
                asset: asset_out,
                amount_out,
                pool_amount: pool_amount_in,
                exit_fee,
            });

            Ok(amount_out)
        }

        /// Returns the amount of pool shares redeemed.
        pub(crate) fn do_exitswap_extern_amount_out(
            who: AccountIdOf<T>,
            pool_id: PoolId,
            asset_out: Asset,
            amount_out: Balance,
            max_pool_amount_in: Balance,
        ) -> Result<Balance, DispatchError> {
            let exit_fee_ratio = T::ExitFee::get();
            let (pool_amount_in, exit_fee) = Self::try_mutate_pool(&pool_id, |pool| {
                Self::ensure_finalized(pool)?;
                let record = Self::record_of(pool, &asset_out)?;
                ensure!(
                    amount_out <= bmul(record.balance, MAX_OUT_RATIO)?,
                    Error::<T>::MaxOutRatio
                );

                let pool_amount_in = calc_pool_in_given_single_out(
                    record.balance,
                    record.weight,
                    Self::total_supply(pool_id),
                    pool.total_weight,
                    amount_out,
                    pool.swap_fee,
                    exit_fee_ratio,
                )?;
                ensure!(pool_amount_in != 0, Error::<T>::MathApproximation);
                ensure!(pool_amount_in <= max_pool_amount_in, Error::<T>::LimitIn);

                let exit_fee = bmul(pool_amount_in, exit_fee_ratio)?;
                Self::record_mut(pool, &asset_out)?.balance =
                    record.balance.checked_sub_res(&amount_out)?;
                Self::redeem_pool_shares(&who, pool_id, pool_amount_in, exit_fee)?;
                T::AssetManager::transfer(
                    asset_out,
                    &Self::pool_account(pool_id),
                    &who,
                    amount_out,
                )?;

                Ok((pool_amount_in, exit_fee))
            })?;

            Self::deposit_event(Event::PoolExitedWithSingleAsset {
                who,
                pool_id,
                asset: asset_out,
                amount_out,
                pool_amount: pool_amount_in,
                exit_fee,
            });

            Ok(pool_amount_in)
        }

        pub(crate) fn do_claim_protocol_fees(
            who: AccountIdOf<T>,
            pool_id: PoolId,
        ) -> Result<Vec<(Asset, Balance)>, DispatchError> {
            let pool = Self::get(pool_id)?;
            Self::ensure_controller(&pool, &who)?;

            let pool_account = Self::pool_account(pool_id);
            let mut fees: Vec<(Asset, Balance)> =
                ProtocolFeesAccrued::<T>::drain_prefix(pool_id).collect();
            fees.sort_unstable_by_key(|(asset, _)| *asset);
            for (asset, amount) in fees.iter() {
                T::AssetManager::transfer(*asset, &pool_account, &who, *amount)?;
            }

            log::debug!(target: LOG_TARGET, "Claimed protocol fees {:?} of pool {:?}", fees, pool_id);
            Self::deposit_event(Event::ProtocolFeesClaimed {
                pool_id,
                controller: who,
                fees: fees.clone(),
            });

            Ok(fees)
        }
    }

    impl<T: Config> WeightedPoolApi for Pallet<T> {
        type AccountId = AccountIdOf<T>;
        type Asset = Asset;
        type Balance = Balance;
        type PoolId = PoolId;

        fn create_pool(controller: Self::AccountId) -> Result<PoolId, DispatchError> {
            Self::do_create_pool(controller)
        }

        fn pool_account(pool_id: PoolId) -> Self::AccountId {
            Self::pool_account(pool_id)
        }

        fn bind(
            who: &Self::AccountId,
            pool_id: PoolId,
            asset: Asset,
            balance: Balance,
            weight: Balance,
        ) -> DispatchResult {
            Self::do_bind(who.clone(), pool_id, asset, balance, weight)
        }

        fn rebind(
            who: &Self::AccountId,
            pool_id: PoolId,
            asset: Asset,
            balance: Balance,
            weight: Balance,
        ) -> DispatchResult {
            Self::do_rebind(who.clone(), pool_id, asset, balance, weight)
        }

        fn unbind(who: &Self::AccountId, pool_id: PoolId, asset: Asset) -> DispatchResult {
            Self::do_unbind(who.clone(), pool_id, asset)
        }

        fn set_swap_fee(who: &Self::AccountId, pool_id: PoolId, swap_fee: Balance) -> DispatchResult {
            Self::do_set_swap_fee(who.clone(), pool_id, swap_fee)
        }

        fn set_protocol_fee(
            who: &Self::AccountId,
            pool_id: PoolId,
            protocol_fee: Balance,
        ) -> DispatchResult {
            Self::do_set_protocol_fee(who.clone(), pool_id, protocol_fee)
        }

        fn set_public_swap(
            who: &Self::AccountId,
            pool_id: PoolId,
            public_swap: bool,
        ) -> DispatchResult {
            Self::do_set_public_swap(who.clone(), pool_id, public_swap)
        }

        fn set_roles(who: &Self::AccountId, pool_id: PoolId, roles: Vec<Role>) -> DispatchResult {
            let roles = PoolRoles::try_from(roles).map_err(|_| Error::<T>::TooManyRoles)?;
            Self::do_set_roles(who.clone(), pool_id, roles)
        }

        fn claim_protocol_fees(
            who: &Self::AccountId,
            pool_id: PoolId,
        ) -> Result<Vec<(Asset, Balance)>, DispatchError> {
            Self::do_claim_protocol_fees(who.clone(), pool_id)
        }

        fn balance(pool_id: PoolId, asset: Asset) -> Result<Balance, DispatchError> {
            Self::get_balance(pool_id, asset)
        }

        fn denormalized_weight(pool_id: PoolId, asset: Asset) -> Result<Balance, DispatchError> {
            Self::get_denormalized_weight(pool_id, asset)
        }

        fn total_denormalized_weight(pool_id: PoolId) -> Result<Balance, DispatchError> {
            Self::get_total_denormalized_weight(pool_id)
        }

        fn current_tokens(pool_id: PoolId) -> Result<Vec<Asset>, DispatchError> {
            Self::get_current_tokens(pool_id)
        }

        fn swap_fee(pool_id: PoolId) -> Result<Balance, DispatchError> {
            Ok(Self::get(pool_id)?.swap_fee)
        }

        fn is_bound(pool_id: PoolId, asset: Asset) -> bool {
            Self::is_bound(pool_id, asset)
        }

        fn exit_fee() -> Balance {
            T::ExitFee::get()
        }

        fn exit_fee_account() -> Self::AccountId {
            Self::pallet_account()
        }
    }
}
