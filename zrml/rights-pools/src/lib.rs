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
        types::{
            GradualUpdate, NewToken, Permission, PoolParams, Rights, RightsPool, StartToken,
        },
        weights::WeightInfoZeitgeist,
    };
    use alloc::vec::Vec;
    use core::marker::PhantomData;
    use fcx_primitives::{
        constants::{
            MAX_BOUND_TOKENS, MAX_FEE, MAX_IN_RATIO, MAX_OUT_RATIO, MAX_POOL_SUPPLY,
            MAX_TOTAL_WEIGHT, MAX_WEIGHT, MIN_BALANCE, MIN_BOUND_TOKENS, MIN_FEE,
            MIN_POOL_SUPPLY, MIN_WEIGHT,
        },
        ensure_or_warn,
        math::{
            checked_ops_res::{CheckedAddRes, CheckedSubRes},
            fixed::{bdiv, bmul},
            weighted::{
                calc_pool_in_given_single_out, calc_pool_out_given_single_in,
                calc_single_in_given_pool_out, calc_single_out_given_pool_in,
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
        transactional, Blake2_128Concat, BoundedVec, PalletId, Twox64Concat,
    };
    use frame_system::{
        ensure_signed,
        pallet_prelude::{BlockNumberFor, OriginFor},
    };
    use orml_traits::MultiCurrency;
    use sp_runtime::traits::{AccountIdConversion, SaturatedConversion, Saturating};

    const LOG_TARGET: &str = "runtime::fcx-rights-pools";

    /// The current storage version.
    const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

    pub(crate) type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
    pub(crate) type GradualUpdateOf<T> = GradualUpdate<BlockNumberFor<T>>;
    pub(crate) type NewTokenOf<T> = NewToken<BlockNumberFor<T>>;
    pub(crate) type RightsPoolOf<T> = RightsPool<AccountIdOf<T>, BlockNumberFor<T>>;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Role registry which gates the creation of rights pools and joins.
        type AccessControl: AccessControlApi<AccountId = Self::AccountId>;

        /// Custody of tokens and issuance of rights pool shares.
        type AssetManager: MultiCurrency<Self::AccountId, CurrencyId = Asset, Balance = Balance>;

        #[cfg(feature = "runtime-benchmarks")]
        type BenchmarkHelper: AccessControlBenchmarkHelper<Self::AccountId>;

        /// Identifier of this pallet, used to derive the accounts of rights pools.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// The weighted pools which back the rights pools.
        type WeightedPools: WeightedPoolApi<
            AccountId = Self::AccountId,
            Asset = Asset,
            Balance = Balance,
            PoolId = PoolId,
        >;

        type WeightInfo: WeightInfoZeitgeist;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(PhantomData<T>);

    #[pallet::storage]
    pub type NextRightsPoolId<T> = StorageValue<_, PoolId, ValueQuery>;

    #[pallet::storage]
    pub type Pools<T: Config> =
        StorageMap<_, Twox64Concat, PoolId, RightsPoolOf<T>, OptionQuery>;

    /// Running weight transitions, removed once they are completed by `poke_weights`.
    #[pallet::storage]
    pub type GradualUpdates<T: Config> =
        StorageMap<_, Twox64Concat, PoolId, GradualUpdateOf<T>, OptionQuery>;

    /// Tokens committed by `commit_add_token` which are not yet applied.
    #[pallet::storage]
    pub type NewTokens<T: Config> = StorageMap<_, Twox64Concat, PoolId, NewTokenOf<T>, OptionQuery>;

    /// Accounts allowed to join rights pools with the `WhitelistLps` right.
    #[pallet::storage]
    pub type LiquidityProviders<T: Config> =
        StorageDoubleMap<_, Twox64Concat, PoolId, Blake2_128Concat, AccountIdOf<T>, (), OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(fn deposit_event)]
    pub enum Event<T>
    where
        T: Config,
    {
        RightsPoolCreated { crp_id: PoolId, controller: AccountIdOf<T>, rights: Rights },
        /// The underlying pool was created and `initial_supply` shares were minted to the
        /// controller.
        PoolCreated { crp_id: PoolId, pool_id: PoolId, initial_supply: Balance, cap: Balance },
        SwapFeeChanged { crp_id: PoolId, swap_fee: Balance },
        ProtocolFeeChanged { crp_id: PoolId, protocol_fee: Balance },
        PublicSwapChanged { crp_id: PoolId, public_swap: bool },
        RolesChanged { crp_id: PoolId, roles: Vec<Role> },
        CapChanged { crp_id: PoolId, cap: Balance },
        ControllerChanged { crp_id: PoolId, controller: AccountIdOf<T> },
        WeightUpdated { crp_id: PoolId, asset: Asset, weight: Balance },
        GradualUpdateScheduled {
            crp_id: PoolId,
            start_block: BlockNumberFor<T>,
            end_block: BlockNumberFor<T>,
            end_weights: Vec<Balance>,
        },
        /// The weights were moved along the running gradual update.
        WeightsPoked { crp_id: PoolId, weights: Vec<Balance> },
        TokenCommitted { crp_id: PoolId, asset: Asset, balance: Balance, weight: Balance },
        /// A committed token was bound and `pool_amount` shares were minted to the controller.
        TokenAdded {
            crp_id: PoolId,
            asset: Asset,
            balance: Balance,
            weight: Balance,
            pool_amount: Balance,
        },
        /// A token was unbound and `pool_amount` shares were burned from the controller.
        TokenRemoved { crp_id: PoolId, asset: Asset, balance: Balance, pool_amount: Balance },
        LiquidityProviderWhitelisted { crp_id: PoolId, who: AccountIdOf<T> },
        LiquidityProviderRemoved { crp_id: PoolId, who: AccountIdOf<T> },
        PoolJoined {
            who: AccountIdOf<T>,
            crp_id: PoolId,
            pool_amount: Balance,
            amounts_in: Vec<Balance>,
        },
        PoolExited {
            who: AccountIdOf<T>,
            crp_id: PoolId,
            pool_amount: Balance,
            exit_fee: Balance,
            amounts_out: Vec<Balance>,
        },
        PoolJoinedWithSingleAsset {
            who: AccountIdOf<T>,
            crp_id: PoolId,
            asset: Asset,
            amount_in: Balance,
            pool_amount: Balance,
        },
        PoolExitedWithSingleAsset {
            who: AccountIdOf<T>,
            crp_id: PoolId,
            asset: Asset,
            amount_out: Balance,
            pool_amount: Balance,
            exit_fee: Balance,
        },
        ProtocolFeesClaimed {
            crp_id: PoolId,
            controller: AccountIdOf<T>,
            fees: Vec<(Asset, Balance)>,
        },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The rights pool does not exist.
        RightsPoolNotFound,
        /// The sender is not the controller of the rights pool.
        NotController,
        /// The sender is not an admin.
        NotAdmin,
        /// The rights pool may not pause swapping.
        NotPausableSwap,
        /// The rights pool may not change its swap fee.
        NotConfigurableSwapFee,
        /// The rights pool may not change its weights.
        NotConfigurableWeights,
        /// The rights pool may not add or remove tokens.
        CannotAddRemoveTokens,
        /// The rights pool may not whitelist liquidity providers.
        NotPermittedToWhitelist,
        /// The rights pool may not change its cap.
        NotConfigurableCap,
        /// The rights pool may not change its protocol fee.
        NotConfigurableProtocolFee,
        /// There is no permission with this index.
        InvalidPermission,
        /// The underlying pool was already created.
        PoolAlreadyCreated,
        /// The underlying pool was not created yet.
        PoolNotCreated,
        /// Too few tokens.
        MinTokens,
        /// Too many tokens.
        MaxTokens,
        /// The number of start balances doesn't match the number of tokens.
        BalancesMismatch,
        /// The number of start weights doesn't match the number of tokens.
        WeightsMismatch,
        /// The fee is below the minimum fee.
        MinFee,
        /// The fee is above the maximum fee.
        MaxFee,
        /// The protocol fee would exceed the swap fee.
        InvalidFee,
        /// The initial supply is outside of the permitted range.
        InitialSupplyOutOfBounds,
        /// The minimum weight change period is shorter than the token time lock.
        InconsistentTokenTimeLock,
        /// A gradual update is running.
        NoUpdateDuringGradual,
        /// The weight is below the minimum weight.
        MinWeight,
        /// The weight is above the maximum weight.
        MaxWeight,
        /// The balance is below the minimum balance.
        MinBalance,
        /// The total weight would exceed the maximum total weight.
        MaxTotalWeight,
        /// The end block is not after the start block.
        InvalidBlockRange,
        /// The gradual update is shorter than the minimum weight change period.
        WeightChangeTooFast,
        /// The length of the list doesn't match the number of tokens.
        IncorrectVecLen,
        /// A token add is pending.
        PendingTokenAdd,
        /// The token is already bound.
        IsBound,
        /// The token is not bound.
        NotBound,
        /// No token add was committed.
        NoTokenCommitted,
        /// The time lock of the committed token has not elapsed yet.
        TimelockNotElapsed,
        /// Tokens can't be removed while a token add is pending.
        RemoveWithAddPending,
        /// The account is not on the liquidity provider whitelist of the rights pool.
        NotOnWhitelist,
        /// The sender is not whitelisted in the access control registry.
        NotWhitelisted,
        /// The total supply of shares would exceed the cap.
        CapExceeded,
        /// The amount in exceeds the maximum ratio of the balance in.
        MaxInRatio,
        /// The amount out exceeds the maximum ratio of the balance out.
        MaxOutRatio,
        /// The amount in exceeds the specified maximum.
        LimitIn,
        /// The amount out falls below the specified minimum.
        LimitOut,
        /// The result of the calculation is inconsistent due to rounding.
        MathApproximation,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Registers a rights pool controlled by the sender, who must be an admin. The underlying
        /// pool is created by a subsequent call to `create_pool`.
        ///
        /// # Weight
        ///
        /// Complexity: `O(n)`, where `n` is the number of tokens.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::new_rights_pool(params.tokens.len() as u32))]
        #[transactional]
        pub fn new_rights_pool(
            origin: OriginFor<T>,
            params: PoolParams,
            rights: Rights,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(T::AccessControl::is_admin(&who), Error::<T>::NotAdmin);

            Self::do_new_rights_pool(who, params, rights)?;

            Ok(())
        }

        /// Creates the underlying pool, binds the start tokens from the sender's funds and mints
        /// `initial_supply` shares to the sender.
        ///
        /// # Weight
        ///
        /// Complexity: `O(n)`, where `n` is the number of tokens.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::create_pool(MAX_BOUND_TOKENS))]
        #[transactional]
        pub fn create_pool(
            origin: OriginFor<T>,
            #[pallet::compact] crp_id: PoolId,
            #[pallet::compact] initial_supply: Balance,
            minimum_weight_change_block_period: BlockNumberFor<T>,
            add_token_time_lock_in_blocks: BlockNumberFor<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_create_pool(
                who,
                crp_id,
                initial_supply,
                minimum_weight_change_block_period,
                add_token_time_lock_in_blocks,
            )
        }

        /// Requires `ChangeSwapFee`.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::set_swap_fee())]
        #[transactional]
        pub fn set_swap_fee(
            origin: OriginFor<T>,
            #[pallet::compact] crp_id: PoolId,
            #[pallet::compact] swap_fee: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_set_swap_fee(who, crp_id, swap_fee)
        }

        /// Requires `ChangeProtocolFee`.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::set_protocol_fee())]
        #[transactional]
        pub fn set_protocol_fee(
            origin: OriginFor<T>,
            #[pallet::compact] crp_id: PoolId,
            #[pallet::compact] protocol_fee: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_set_protocol_fee(who, crp_id, protocol_fee)
        }

        /// Requires `PauseSwapping`.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::set_public_swap())]
        #[transactional]
        pub fn set_public_swap(
            origin: OriginFor<T>,
            #[pallet::compact] crp_id: PoolId,
            public_swap: bool,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_set_public_swap(who, crp_id, public_swap)
        }

        /// Sets the roles which may swap in the underlying pool.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::set_roles())]
        #[transactional]
        pub fn set_roles(
            origin: OriginFor<T>,
            #[pallet::compact] crp_id: PoolId,
            roles: Vec<Role>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_set_roles(who, crp_id, roles)
        }

        /// Sets the maximum total supply of shares. Requires `ChangeCap`.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::set_cap())]
        #[transactional]
        pub fn set_cap(
            origin: OriginFor<T>,
            #[pallet::compact] crp_id: PoolId,
            #[pallet::compact] cap: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_set_cap(who, crp_id, cap)
        }

        /// Hands control of the rights pool to `controller`.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::set_controller())]
        #[transactional]
        pub fn set_controller(
            origin: OriginFor<T>,
            #[pallet::compact] crp_id: PoolId,
            controller: AccountIdOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_set_controller(who, crp_id, controller)
        }

        /// Changes the weight of a single token while keeping its price. Tokens and shares are
        /// moved between the controller and the pool in proportion to the weight change.
        /// Requires `ChangeWeights`.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::update_weight())]
        #[transactional]
        pub fn update_weight(
            origin: OriginFor<T>,
            #[pallet::compact] crp_id: PoolId,
            asset: Asset,
            #[pallet::compact] new_weight: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_update_weight(who, crp_id, asset, new_weight)
        }

        /// Schedules a linear transition of all weights to `new_weights`, which are listed in the
        /// order of the pool's tokens. The transition is applied by `poke_weights`. Requires
        /// `ChangeWeights`.
        ///
        /// # Weight
        ///
        /// Complexity: `O(n)`, where `n` is the number of tokens.
        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::update_weights_gradually(new_weights.len() as u32))]
        #[transactional]
        pub fn update_weights_gradually(
            origin: OriginFor<T>,
            #[pallet::compact] crp_id: PoolId,
            new_weights: Vec<Balance>,
            start_block: BlockNumberFor<T>,
            end_block: BlockNumberFor<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_update_weights_gradually(who, crp_id, new_weights, start_block, end_block)
        }

        /// Moves the weights along the running gradual update. May be called by anyone.
        ///
        /// # Weight
        ///
        /// Complexity: `O(n)`, where `n` is the number of tokens.
        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::poke_weights(MAX_BOUND_TOKENS))]
        #[transactional]
        pub fn poke_weights(origin: OriginFor<T>, #[pallet::compact] crp_id: PoolId) -> DispatchResult {
            ensure_signed(origin)?;

            Self::do_poke_weights(crp_id)
        }

        /// Announces that `asset` will be added. The token may be added with `apply_add_token`
        /// once the time lock has elapsed. Requires `AddRemoveTokens`.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::commit_add_token())]
        #[transactional]
        pub fn commit_add_token(
            origin: OriginFor<T>,
            #[pallet::compact] crp_id: PoolId,
            asset: Asset,
            #[pallet::compact] balance: Balance,
            #[pallet::compact] weight: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_commit_add_token(who, crp_id, asset, balance, weight)
        }

        /// Binds the committed token. Requires `AddRemoveTokens`.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::apply_add_token())]
        #[transactional]
        pub fn apply_add_token(
            origin: OriginFor<T>,
            #[pallet::compact] crp_id: PoolId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_apply_add_token(who, crp_id)
        }

        /// Unbinds `asset`, transfers its balance to the controller and burns the corresponding
        /// shares of the controller. Requires `AddRemoveTokens`.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::remove_token())]
        #[transactional]
        pub fn remove_token(
            origin: OriginFor<T>,
            #[pallet::compact] crp_id: PoolId,
            asset: Asset,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_remove_token(who, crp_id, asset)
        }

        /// Requires `WhitelistLps`.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::whitelist_liquidity_provider())]
        #[transactional]
        pub fn whitelist_liquidity_provider(
            origin: OriginFor<T>,
            #[pallet::compact] crp_id: PoolId,
            provider: AccountIdOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_whitelist_liquidity_provider(who, crp_id, provider)
        }

        /// Requires `WhitelistLps`.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(15)]
        #[pallet::weight(T::WeightInfo::remove_whitelisted_liquidity_provider())]
        #[transactional]
        pub fn remove_whitelisted_liquidity_provider(
            origin: OriginFor<T>,
            #[pallet::compact] crp_id: PoolId,
            provider: AccountIdOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_remove_whitelisted_liquidity_provider(who, crp_id, provider)
        }

        /// Mints `pool_amount_out` shares to the sender in exchange for a proportional amount of
        /// every token.
        ///
        /// # Weight
        ///
        /// Complexity: `O(n)`, where `n` is the number of tokens.
        #[pallet::call_index(16)]
        #[pallet::weight(T::WeightInfo::join_pool(max_amounts_in.len() as u32))]
        #[transactional]
        pub fn join_pool(
            origin: OriginFor<T>,
            #[pallet::compact] crp_id: PoolId,
            #[pallet::compact] pool_amount_out: Balance,
            max_amounts_in: Vec<Balance>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_join_pool(who, crp_id, pool_amount_out, max_amounts_in)
        }

        /// Redeems `pool_amount_in` shares of the sender for a proportional amount of every
        /// token, minus the exit fee.
        ///
        /// # Weight
        ///
        /// Complexity: `O(n)`, where `n` is the number of tokens.
        #[pallet::call_index(17)]
        #[pallet::weight(T::WeightInfo::exit_pool(min_amounts_out.len() as u32))]
        #[transactional]
        pub fn exit_pool(
            origin: OriginFor<T>,
            #[pallet::compact] crp_id: PoolId,
            #[pallet::compact] pool_amount_in: Balance,
            min_amounts_out: Vec<Balance>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_exit_pool(who, crp_id, pool_amount_in, min_amounts_out)
        }

        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(18)]
        #[pallet::weight(T::WeightInfo::joinswap_extern_amount_in())]
        #[transactional]
        pub fn joinswap_extern_amount_in(
            origin: OriginFor<T>,
            #[pallet::compact] crp_id: PoolId,
            asset_in: Asset,
            #[pallet::compact] amount_in: Balance,
            #[pallet::compact] min_pool_amount_out: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_joinswap_extern_amount_in(who, crp_id, asset_in, amount_in, min_pool_amount_out)?;

            Ok(())
        }

        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(19)]
        #[pallet::weight(T::WeightInfo::joinswap_pool_amount_out())]
        #[transactional]
        pub fn joinswap_pool_amount_out(
            origin: OriginFor<T>,
            #[pallet::compact] crp_id: PoolId,
            asset_in: Asset,
            #[pallet::compact] pool_amount_out: Balance,
            #[pallet::compact] max_amount_in: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_joinswap_pool_amount_out(who, crp_id, asset_in, pool_amount_out, max_amount_in)?;

            Ok(())
        }

        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(20)]
        #[pallet::weight(T::WeightInfo::exitswap_pool_amount_in())]
        #[transactional]
        pub fn exitswap_pool_amount_in(
            origin: OriginFor<T>,
            #[pallet::compact] crp_id: PoolId,
            asset_out: Asset,
            #[pallet::compact] pool_amount_in: Balance,
            #[pallet::compact] min_amount_out: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_exitswap_pool_amount_in(who, crp_id, asset_out, pool_amount_in, min_amount_out)?;

            Ok(())
        }

        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(21)]
        #[pallet::weight(T::WeightInfo::exitswap_extern_amount_out())]
        #[transactional]
        pub fn exitswap_extern_amount_out(
            origin: OriginFor<T>,
            #[pallet::compact] crp_id: PoolId,
            asset_out: Asset,
            #[pallet::compact] amount_out: Balance,
            #[pallet::compact] max_pool_amount_in: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_exitswap_extern_amount_out(
                who,
                crp_id,
                asset_out,
                amount_out,
                max_pool_amount_in,
            )?;

            Ok(())
        }

        /// Claims the protocol fees of the underlying pool and forwards them to the controller.
        ///
        /// # Weight
        ///
        /// Complexity: `O(n)`, where `n` is the number of assets with unclaimed fees.
        #[pallet::call_index(22)]
        #[pallet::weight(T::WeightInfo::claim_protocol_fees(MAX_BOUND_TOKENS))]
        #[transactional]
        pub fn claim_protocol_fees(
            origin: OriginFor<T>,
            #[pallet::compact] crp_id: PoolId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_claim_protocol_fees(who, crp_id)
        }
    }

    impl<T: Config> Pallet<T> {
        /// The account which controls the underlying pool and relays its tokens.
        pub fn rights_pool_account(crp_id: PoolId) -> AccountIdOf<T> {
            T::PalletId::get().into_sub_account_truncating(crp_id)
        }

        pub fn is_rights_pool(crp_id: PoolId) -> bool {
            Pools::<T>::contains_key(crp_id)
        }

        /// Returns whether the rights pool was created with the permission at `index`.
        pub fn has_permission(crp_id: PoolId, index: u8) -> Result<bool, DispatchError> {
            let permission = Permission::from_index(index).ok_or(Error::<T>::InvalidPermission)?;
            Ok(Self::rights_pool(crp_id)?.rights.has(permission))
        }

        /// Returns whether `who` may join the rights pool, ignoring the access control registry.
        pub fn can_provide_liquidity(crp_id: PoolId, who: &AccountIdOf<T>) -> bool {
            match Pools::<T>::get(crp_id) {
                Some(crp) if crp.rights.has(Permission::WhitelistLps) => {
                    LiquidityProviders::<T>::contains_key(crp_id, who)
                }
                Some(_) => true,
                None => false,
            }
        }

        pub fn total_supply(crp_id: PoolId) -> Balance {
            T::AssetManager::total_issuance(Asset::SmartPoolShare(crp_id))
        }

        /// Returns the id of the underlying pool.
        pub fn underlying_pool(crp_id: PoolId) -> Result<PoolId, DispatchError> {
            Self::ensure_pool_created(&Self::rights_pool(crp_id)?)
        }

        fn rights_pool(crp_id: PoolId) -> Result<RightsPoolOf<T>, DispatchError> {
            Pools::<T>::get(crp_id).ok_or(Error::<T>::RightsPoolNotFound.into())
        }

        fn missing_right(permission: Permission) -> Error<T> {
            match permission {
                Permission::PauseSwapping => Error::<T>::NotPausableSwap,
                Permission::ChangeSwapFee => Error::<T>::NotConfigurableSwapFee,
                Permission::ChangeWeights => Error::<T>::NotConfigurableWeights,
                Permission::AddRemoveTokens => Error::<T>::CannotAddRemoveTokens,
                Permission::WhitelistLps => Error::<T>::NotPermittedToWhitelist,
                Permission::ChangeCap => Error::<T>::NotConfigurableCap,
                Permission::ChangeProtocolFee => Error::<T>::NotConfigurableProtocolFee,
            }
        }

        fn ensure_right(crp: &RightsPoolOf<T>, permission: Permission) -> DispatchResult {
            ensure!(crp.rights.has(permission), Self::missing_right(permission));
            Ok(())
        }

        fn ensure_controller(crp: &RightsPoolOf<T>, who: &AccountIdOf<T>) -> DispatchResult {
            ensure!(crp.controller == *who, Error::<T>::NotController);
            Ok(())
        }

        /// Loads the rights pool and checks `permission` first and the controller second.
        fn ensure_permitted(
            who: &AccountIdOf<T>,
            crp_id: PoolId,
            permission: Permission,
        ) -> Result<RightsPoolOf<T>, DispatchError> {
            let crp = Self::rights_pool(crp_id)?;
            Self::ensure_right(&crp, permission)?;
            Self::ensure_controller(&crp, who)?;
            Ok(crp)
        }

        fn ensure_pool_created(crp: &RightsPoolOf<T>) -> Result<PoolId, DispatchError> {
            crp.pool_id.ok_or(Error::<T>::PoolNotCreated.into())
        }

        fn ensure_no_gradual_update(crp_id: PoolId) -> DispatchResult {
            ensure!(!GradualUpdates::<T>::contains_key(crp_id), Error::<T>::NoUpdateDuringGradual);
            Ok(())
        }

        fn ensure_weight_in_bounds(weight: Balance) -> DispatchResult {
            ensure!(weight >= MIN_WEIGHT, Error::<T>::MinWeight);
            ensure!(weight <= MAX_WEIGHT, Error::<T>::MaxWeight);
            Ok(())
        }

        fn ensure_can_join(
            crp: &RightsPoolOf<T>,
            crp_id: PoolId,
            who: &AccountIdOf<T>,
        ) -> DispatchResult {
            if crp.rights.has(Permission::WhitelistLps) {
                ensure!(
                    LiquidityProviders::<T>::contains_key(crp_id, who),
                    Error::<T>::NotOnWhitelist
                );
            }
            ensure!(T::AccessControl::whitelisted(who), Error::<T>::NotWhitelisted);
            Ok(())
        }

        fn ensure_within_cap(
            crp: &RightsPoolOf<T>,
            crp_id: PoolId,
            pool_amount_out: Balance,
        ) -> DispatchResult {
            let total_supply = Self::total_supply(crp_id).checked_add_res(&pool_amount_out)?;
            ensure!(total_supply <= crp.cap, Error::<T>::CapExceeded);
            Ok(())
        }

        /// Moves `amount` of `asset` from `who` through the rights pool account into the
        /// underlying pool.
        fn pull_underlying(
            who: &AccountIdOf<T>,
            crp_id: PoolId,
            pool_id: PoolId,
            asset: Asset,
            amount: Balance,
        ) -> DispatchResult {
            let crp_account = Self::rights_pool_account(crp_id);
            let balance = T::WeightedPools::balance(pool_id, asset)?;
            let weight = T::WeightedPools::denormalized_weight(pool_id, asset)?;
            T::AssetManager::transfer(asset, who, &crp_account, amount)?;
            T::WeightedPools::rebind(
                &crp_account,
                pool_id,
                asset,
                balance.checked_add_res(&amount)?,
                weight,
            )
        }

        /// Moves `amount` of `asset` from the underlying pool through the rights pool account to
        /// `who`.
        fn push_underlying(
            who: &AccountIdOf<T>,
            crp_id: PoolId,
            pool_id: PoolId,
            asset: Asset,
            amount: Balance,
        ) -> DispatchResult {
            let crp_account = Self::rights_pool_account(crp_id);
            let balance = T::WeightedPools::balance(pool_id, asset)?;
            let weight = T::WeightedPools::denormalized_weight(pool_id, asset)?;
            T::WeightedPools::rebind(
                &crp_account,
                pool_id,
                asset,
                balance.checked_sub_res(&amount)?,
                weight,
            )?;
            T::AssetManager::transfer(asset, &crp_account, who, amount)
        }

        /// Moves `exit_fee` shares of `who` to the exit fee account of the weighted pools and
        /// burns the rest of `pool_amount_in`.
        fn redeem_shares(
            who: &AccountIdOf<T>,
            crp_id: PoolId,
            pool_amount_in: Balance,
            exit_fee: Balance,
        ) -> DispatchResult {
            let shares = Asset::SmartPoolShare(crp_id);
            if exit_fee != 0 {
                T::AssetManager::transfer(
                    shares,
                    who,
                    &T::WeightedPools::exit_fee_account(),
                    exit_fee,
                )?;
            }
            T::AssetManager::withdraw(shares, who, pool_amount_in.checked_sub_res(&exit_fee)?)
        }

        pub(crate) fn do_new_rights_pool(
            who: AccountIdOf<T>,
            params: PoolParams,
            rights: Rights,
        ) -> Result<PoolId, DispatchError> {
            let PoolParams { tokens, balances, weights, swap_fee, protocol_fee } = params;
            ensure!(tokens.len() >= MIN_BOUND_TOKENS as usize, Error::<T>::MinTokens);
            ensure!(balances.len() == tokens.len(), Error::<T>::BalancesMismatch);
            ensure!(weights.len() == tokens.len(), Error::<T>::WeightsMismatch);
            ensure!(swap_fee >= MIN_FEE, Error::<T>::MinFee);
            ensure!(swap_fee <= MAX_FEE, Error::<T>::MaxFee);
            ensure!(protocol_fee <= swap_fee, Error::<T>::InvalidFee);

            let start_tokens: Vec<StartToken> = tokens
                .into_iter()
                .zip(balances.into_iter().zip(weights))
                .map(|(asset, (balance, weight))| StartToken { asset, balance, weight })
                .collect();
            let start_tokens =
                BoundedVec::try_from(start_tokens).map_err(|_| Error::<T>::MaxTokens)?;

            let crp_id = NextRightsPoolId::<T>::get();
            NextRightsPoolId::<T>::put(crp_id.checked_add_res(&1)?);
            Pools::<T>::insert(
                crp_id,
                RightsPool::new(who.clone(), rights, start_tokens, swap_fee, protocol_fee),
            );

            Self::deposit_event(Event::RightsPoolCreated { crp_id, controller: who, rights });

            Ok(crp_id)
        }

        pub(crate) fn do_create_pool(
            who: AccountIdOf<T>,
            crp_id: PoolId,
            initial_supply: Balance,
            minimum_weight_change_block_period: BlockNumberFor<T>,
            add_token_time_lock_in_blocks: BlockNumberFor<T>,
        ) -> DispatchResult {
            let mut crp = Self::rights_pool(crp_id)?;
            Self::ensure_controller(&crp, &who)?;
            ensure!(crp.pool_id.is_none(), Error::<T>::PoolAlreadyCreated);
            ensure!(
                minimum_weight_change_block_period >= add_token_time_lock_in_blocks,
                Error::<T>::InconsistentTokenTimeLock
            );
            ensure!(
                (MIN_POOL_SUPPLY..=MAX_POOL_SUPPLY).contains(&initial_supply),
                Error::<T>::InitialSupplyOutOfBounds
            );

            let crp_account = Self::rights_pool_account(crp_id);
            let pool_id = T::WeightedPools::create_pool(crp_account.clone())?;
            T::WeightedPools::set_swap_fee(&crp_account, pool_id, crp.swap_fee)?;
            T::WeightedPools::set_protocol_fee(&crp_account, pool_id, crp.protocol_fee)?;
            for token in crp.start_tokens.iter() {
                T::AssetManager::transfer(token.asset, &who, &crp_account, token.balance)?;
                T::WeightedPools::bind(
                    &crp_account,
                    pool_id,
                    token.asset,
                    token.balance,
                    token.weight,
                )?;
            }
            T::WeightedPools::set_public_swap(&crp_account, pool_id, true)?;
            T::AssetManager::deposit(Asset::SmartPoolShare(crp_id), &who, initial_supply)?;

            if crp.rights.has(Permission::ChangeCap) {
                crp.cap = initial_supply;
            }
            crp.pool_id = Some(pool_id);
            crp.minimum_weight_change_block_period = minimum_weight_change_block_period;
            crp.add_token_time_lock_in_blocks = add_token_time_lock_in_blocks;
            let cap = crp.cap;
            Pools::<T>::insert(crp_id, crp);

            Self::deposit_event(Event::PoolCreated { crp_id, pool_id, initial_supply, cap });

            Ok(())
        }

        pub(crate) fn do_set_swap_fee(
            who: AccountIdOf<T>,
            crp_id: PoolId,
            swap_fee: Balance,
        ) -> DispatchResult {
            let crp = Self::ensure_permitted(&who, crp_id, Permission::ChangeSwapFee)?;
            let pool_id = Self::ensure_pool_created(&crp)?;

            T::WeightedPools::set_swap_fee(&Self::rights_pool_account(crp_id), pool_id, swap_fee)?;

            Self::deposit_event(Event::SwapFeeChanged { crp_id, swap_fee });

            Ok(())
        }

        pub(crate) fn do_set_protocol_fee(
            who: AccountIdOf<T>,
            crp_id: PoolId,
            protocol_fee: Balance,
        ) -> DispatchResult {
            let crp = Self::ensure_permitted(&who, crp_id, Permission::ChangeProtocolFee)?;
            let pool_id = Self::ensure_pool_created(&crp)?;

            T::WeightedPools::set_protocol_fee(
                &Self::rights_pool_account(crp_id),
                pool_id,
                protocol_fee,
            )?;

            Self::deposit_event(Event::ProtocolFeeChanged { crp_id, protocol_fee });

            Ok(())
        }

        pub(crate) fn do_set_public_swap(
            who: AccountIdOf<T>,
            crp_id: PoolId,
            public_swap: bool,
        ) -> DispatchResult {
            let crp = Self::ensure_permitted(&who, crp_id, Permission::PauseSwapping)?;
            let pool_id = Self::ensure_pool_created(&crp)?;

            T::WeightedPools::set_public_swap(
                &Self::rights_pool_account(crp_id),
                pool_id,
                public_swap,
            )?;

            Self::deposit_event(Event::PublicSwapChanged { crp_id, public_swap });

            Ok(())
        }

        pub(crate) fn do_set_roles(
            who: AccountIdOf<T>,
            crp_id: PoolId,
            roles: Vec<Role>,
        ) -> DispatchResult {
            let crp = Self::rights_pool(crp_id)?;
            Self::ensure_controller(&crp, &who)?;
            let pool_id = Self::ensure_pool_created(&crp)?;

            T::WeightedPools::set_roles(&Self::rights_pool_account(crp_id), pool_id, roles.clone())?;

            Self::deposit_event(Event::RolesChanged { crp_id, roles });

            Ok(())
        }

        pub(crate) fn do_set_cap(who: AccountIdOf<T>, crp_id: PoolId, cap: Balance) -> DispatchResult {
            let mut crp = Self::ensure_permitted(&who, crp_id, Permission::ChangeCap)?;
            Self::ensure_pool_created(&crp)?;

            crp.cap = cap;
            Pools::<T>::insert(crp_id, crp);

            Self::deposit_event(Event::CapChanged { crp_id, cap });

            Ok(())
        }

        pub(crate) fn do_set_controller(
            who: AccountIdOf<T>,
            crp_id: PoolId,
            controller: AccountIdOf<T>,
        ) -> DispatchResult {
            let mut crp = Self::rights_pool(crp_id)?;
            Self::ensure_controller(&crp, &who)?;

            crp.controller = controller.clone();
            Pools::<T>::insert(crp_id, crp);

            Self::deposit_event(Event::ControllerChanged { crp_id, controller });

            Ok(())
        }

        pub(crate) fn do_update_weight(
            who: AccountIdOf<T>,
            crp_id: PoolId,
            asset: Asset,
            new_weight: Balance,
        ) -> DispatchResult {
            let crp = Self::ensure_permitted(&who, crp_id, Permission::ChangeWeights)?;
            let pool_id = Self::ensure_pool_created(&crp)?;
            Self::ensure_no_gradual_update(crp_id)?;
            Self::ensure_weight_in_bounds(new_weight)?;
            ensure!(T::WeightedPools::is_bound(pool_id, asset), Error::<T>::NotBound);

            let current_weight = T::WeightedPools::denormalized_weight(pool_id, asset)?;
            if new_weight == current_weight {
                return Ok(());
            }

            let balance = T::WeightedPools::balance(pool_id, asset)?;
            let total_weight = T::WeightedPools::total_denormalized_weight(pool_id)?;
            let total_supply = Self::total_supply(crp_id);
            let crp_account = Self::rights_pool_account(crp_id);
            let shares = Asset::SmartPoolShare(crp_id);

            if new_weight < current_weight {
                let delta_weight = current_weight.checked_sub_res(&new_weight)?;
                let pool_amount = bmul(total_supply, bdiv(delta_weight, total_weight)?)?;
                let delta_balance = bmul(balance, bdiv(delta_weight, current_weight)?)?;
                let new_balance = balance.checked_sub_res(&delta_balance)?;
                ensure!(new_balance >= MIN_BALANCE, Error::<T>::MinBalance);

                T::WeightedPools::rebind(&crp_account, pool_id, asset, new_balance, new_weight)?;
                T::AssetManager::transfer(asset, &crp_account, &who, delta_balance)?;
                T::AssetManager::withdraw(shares, &who, pool_amount)?;
            } else {
                let delta_weight = new_weight.checked_sub_res(&current_weight)?;
                ensure!(
                    total_weight.checked_add_res(&delta_weight)? <= MAX_TOTAL_WEIGHT,
                    Error::<T>::MaxTotalWeight
                );
                let pool_amount = bmul(total_supply, bdiv(delta_weight, total_weight)?)?;
                let delta_balance = bmul(balance, bdiv(delta_weight, current_weight)?)?;

                T::AssetManager::transfer(asset, &who, &crp_account, delta_balance)?;
                T::WeightedPools::rebind(
                    &crp_account,
                    pool_id,
                    asset,
                    balance.checked_add_res(&delta_balance)?,
                    new_weight,
                )?;
                T::AssetManager::deposit(shares, &who, pool_amount)?;
            }

            Self::deposit_event(Event::WeightUpdated { crp_id, asset, weight: new_weight });

            Ok(())
        }

        pub(crate) fn do_update_weights_gradually(
            who: AccountIdOf<T>,
            crp_id: PoolId,
            new_weights: Vec<Balance>,
            start_block: BlockNumberFor<T>,
            end_block: BlockNumberFor<T>,
        ) -> DispatchResult {
            let crp = Self::ensure_permitted(&who, crp_id, Permission::ChangeWeights)?;
            let pool_id = Self::ensure_pool_created(&crp)?;
            ensure!(!NewTokens::<T>::contains_key(crp_id), Error::<T>::PendingTokenAdd);

            let now = frame_system::Pallet::<T>::block_number();
            let start_block = start_block.max(now);
            ensure!(end_block > start_block, Error::<T>::InvalidBlockRange);
            ensure!(
                end_block.saturating_sub(start_block) >= crp.minimum_weight_change_block_period,
                Error::<T>::WeightChangeTooFast
            );

            let tokens = T::WeightedPools::current_tokens(pool_id)?;
            ensure!(new_weights.len() == tokens.len(), Error::<T>::IncorrectVecLen);
            let mut weights_sum: Balance = 0;
            for weight in new_weights.iter() {
                Self::ensure_weight_in_bounds(*weight)?;
                weights_sum = weights_sum.checked_add_res(weight)?;
            }
            ensure!(weights_sum <= MAX_TOTAL_WEIGHT, Error::<T>::MaxTotalWeight);

            let start_weights = tokens
                .into_iter()
                .map(|asset| T::WeightedPools::denormalized_weight(pool_id, asset))
                .collect::<Result<Vec<_>, _>>()?;
            let update = GradualUpdate {
                start_block,
                end_block,
                start_weights: BoundedVec::try_from(start_weights)
                    .map_err(|_| Error::<T>::MaxTokens)?,
                end_weights: BoundedVec::try_from(new_weights.clone())
                    .map_err(|_| Error::<T>::MaxTokens)?,
            };
            GradualUpdates::<T>::insert(crp_id, update);

            log::debug!(
                target: LOG_TARGET,
                "Scheduled gradual update of rights pool {:?} to {:?} from block {:?} to {:?}",
                crp_id,
                new_weights,
                start_block,
                end_block,
            );
            Self::deposit_event(Event::GradualUpdateScheduled {
                crp_id,
                start_block,
                end_block,
                end_weights: new_weights,
            });

            Ok(())
        }

        /// Interpolates the weights of `update` at block `now`, which must not be before the start
        /// block.
        fn interpolate_weights(
            update: &GradualUpdateOf<T>,
            now: BlockNumberFor<T>,
        ) -> Result<Vec<Balance>, DispatchError> {
            if now >= update.end_block {
                return Ok(update.end_weights.to_vec());
            }
            let block_period: u128 =
                update.end_block.saturating_sub(update.start_block).saturated_into();
            let blocks_elapsed: u128 = now.saturating_sub(update.start_block).saturated_into();

            let mut weights = Vec::with_capacity(update.end_weights.len());
            for (start_weight, end_weight) in
                update.start_weights.iter().zip(update.end_weights.iter())
            {
                let weight = if start_weight >= end_weight {
                    let delta_per_block =
                        bdiv(start_weight.checked_sub_res(end_weight)?, block_period)?;
                    start_weight.checked_sub_res(&bmul(delta_per_block, blocks_elapsed)?)?
                } else {
                    let delta_per_block =
                        bdiv(end_weight.checked_sub_res(start_weight)?, block_period)?;
                    start_weight.checked_add_res(&bmul(delta_per_block, blocks_elapsed)?)?
                };
                weights.push(weight);
            }

            Ok(weights)
        }

        pub(crate) fn do_poke_weights(crp_id: PoolId) -> DispatchResult {
            let crp = Self::rights_pool(crp_id)?;
            Self::ensure_right(&crp, Permission::ChangeWeights)?;
            let pool_id = Self::ensure_pool_created(&crp)?;

            let Some(update) = GradualUpdates::<T>::get(crp_id) else {
                return Ok(());
            };
            let now = frame_system::Pallet::<T>::block_number();
            if now < update.start_block {
                return Ok(());
            }

            let tokens = T::WeightedPools::current_tokens(pool_id)?;
            ensure_or_warn!(
                tokens.len() == update.end_weights.len(),
                LOG_TARGET,
                Error::<T>::IncorrectVecLen,
                "Gradual update of rights pool {:?} doesn't match its tokens",
                crp_id,
            );
            let weights = Self::interpolate_weights(&update, now)?;

            let crp_account = Self::rights_pool_account(crp_id);
            let mut decreasing = Vec::new();
            let mut increasing = Vec::new();
            for (asset, weight) in tokens.into_iter().zip(weights.iter().copied()) {
                let current_weight = T::WeightedPools::denormalized_weight(pool_id, asset)?;
                if weight < current_weight {
                    decreasing.push((asset, weight));
                } else if weight > current_weight {
                    increasing.push((asset, weight));
                }
            }
            for (asset, weight) in decreasing.into_iter().chain(increasing) {
                let balance = T::WeightedPools::balance(pool_id, asset)?;
                T::WeightedPools::rebind(&crp_account, pool_id, asset, balance, weight)?;
            }

            if now >= update.end_block {
                GradualUpdates::<T>::remove(crp_id);
            }

            log::debug!(
                target: LOG_TARGET,
                "Poked weights of rights pool {:?} at block {:?}: {:?}",
                crp_id,
                now,
                weights,
            );
            Self::deposit_event(Event::WeightsPoked { crp_id, weights });

            Ok(())
        }

        pub(crate) fn do_commit_add_token(
            who: AccountIdOf<T>,
            crp_id: PoolId,
            asset: Asset,
            balance: Balance,
            weight: Balance,
        ) -> DispatchResult {
            let crp = Self::ensure_permitted(&who, crp_id, Permission::AddRemoveTokens)?;
            let pool_id = Self::ensure_pool_created(&crp)?;
            Self::ensure_no_gradual_update(crp_id)?;
            ensure!(!T::WeightedPools::is_bound(pool_id, asset), Error::<T>::IsBound);
            Self::ensure_weight_in_bounds(weight)?;
            ensure!(balance >= MIN_BALANCE, Error::<T>::MinBalance);

            let commit_block = frame_system::Pallet::<T>::block_number();
            NewTokens::<T>::insert(crp_id, NewToken { asset, balance, weight, commit_block });

            log::debug!(
                target: LOG_TARGET,
                "Committed {:?} to rights pool {:?} at block {:?}",
                asset,
                crp_id,
                commit_block,
            );
            Self::deposit_event(Event::TokenCommitted { crp_id, asset, balance, weight });

            Ok(())
        }

        pub(crate) fn do_apply_add_token(who: AccountIdOf<T>, crp_id: PoolId) -> DispatchResult {
            let crp = Self::ensure_permitted(&who, crp_id, Permission::AddRemoveTokens)?;
            let pool_id = Self::ensure_pool_created(&crp)?;
            let NewToken { asset, balance, weight, commit_block } =
                NewTokens::<T>::get(crp_id).ok_or(Error::<T>::NoTokenCommitted)?;
            let now = frame_system::Pallet::<T>::block_number();
            ensure!(
                now >= commit_block.saturating_add(crp.add_token_time_lock_in_blocks),
                Error::<T>::TimelockNotElapsed
            );

            let total_weight = T::WeightedPools::total_denormalized_weight(pool_id)?;
            ensure!(
                total_weight.checked_add_res(&weight)? <= MAX_TOTAL_WEIGHT,
                Error::<T>::MaxTotalWeight
            );
            let pool_amount = bdiv(bmul(Self::total_supply(crp_id), weight)?, total_weight)?;

            NewTokens::<T>::remove(crp_id);
            let crp_account = Self::rights_pool_account(crp_id);
            T::AssetManager::transfer(asset, &who, &crp_account, balance)?;
            T::WeightedPools::bind(&crp_account, pool_id, asset, balance, weight)?;
            T::AssetManager::deposit(Asset::SmartPoolShare(crp_id), &who, pool_amount)?;

            log::debug!(
                target: LOG_TARGET,
                "Added {:?} to rights pool {:?}, minted {:?} shares",
                asset,
                crp_id,
                pool_amount,
            );
            Self::deposit_event(Event::TokenAdded { crp_id, asset, balance, weight, pool_amount });

            Ok(())
        }

        pub(crate) fn do_remove_token(
            who: AccountIdOf<T>,
            crp_id: PoolId,
            asset: Asset,
        ) -> DispatchResult {
            let crp = Self::ensure_permitted(&who, crp_id, Permission::AddRemoveTokens)?;
            let pool_id = Self::ensure_pool_created(&crp)?;
            ensure!(!NewTokens::<T>::contains_key(crp_id), Error::<T>::RemoveWithAddPending);
            Self::ensure_no_gradual_update(crp_id)?;
            ensure!(T::WeightedPools::is_bound(pool_id, asset), Error::<T>::NotBound);
            let tokens = T::WeightedPools::current_tokens(pool_id)?;
            ensure!(tokens.len() > MIN_BOUND_TOKENS as usize, Error::<T>::MinTokens);

            let weight = T::WeightedPools::denormalized_weight(pool_id, asset)?;
            let total_weight = T::WeightedPools::total_denormalized_weight(pool_id)?;
            let pool_amount = bdiv(bmul(Self::total_supply(crp_id), weight)?, total_weight)?;
            let balance = T::WeightedPools::balance(pool_id, asset)?;

            let crp_account = Self::rights_pool_account(crp_id);
            T::WeightedPools::unbind(&crp_account, pool_id, asset)?;
            T::AssetManager::transfer(asset, &crp_account, &who, balance)?;
            T::AssetManager::withdraw(Asset::SmartPoolShare(crp_id), &who, pool_amount)?;

            Self::deposit_event(Event::TokenRemoved { crp_id, asset, balance, pool_amount });

            Ok(())
        }

        pub(crate) fn do_whitelist_liquidity_provider(
            who: AccountIdOf<T>,
            crp_id: PoolId,
            provider: AccountIdOf<T>,
        ) -> DispatchResult {
            Self::ensure_permitted(&who, crp_id, Permission::WhitelistLps)?;

            LiquidityProviders::<T>::insert(crp_id, &provider, ());

            Self::deposit_event(Event::LiquidityProviderWhitelisted { crp_id, who: provider });

            Ok(())
        }

        pub(crate) fn do_remove_whitelisted_liquidity_provider(
            who: AccountIdOf<T>,
            crp_id: PoolId,
            provider: AccountIdOf<T>,
        ) -> DispatchResult {
            Self::ensure_permitted(&who, crp_id, Permission::WhitelistLps)?;
            ensure!(
                LiquidityProviders::<T>::contains_key(crp_id, &provider),
                Error::<T>::NotOnWhitelist
            );

            LiquidityProviders::<T>::remove(crp_id, &provider);

            Self::deposit_event(Event::LiquidityProviderRemoved { crp_id, who: provider });

            Ok(())
        }

        pub(crate) fn do_join_pool(
            who: AccountIdOf<T>,
            crp_id: PoolId,
            pool_amount_out: Balance,
            max_amounts_in: Vec<Balance>,
        ) -> DispatchResult {
            let crp = Self::rights_pool(crp_id)?;
            let pool_id = Self::ensure_pool_created(&crp)?;
            Self::ensure_can_join(&crp, crp_id, &who)?;
            Self::ensure_within_cap(&crp, crp_id, pool_amount_out)?;
            let tokens = T::WeightedPools::current_tokens(pool_id)?;
            ensure!(max_amounts_in.len() == tokens.len(), Error::<T>::IncorrectVecLen);

            let ratio = bdiv(pool_amount_out, Self::total_supply(crp_id))?;
            ensure!(ratio != 0, Error::<T>::MathApproximation);

            let mut amounts_in = Vec::with_capacity(tokens.len());
            for (asset, max_amount_in) in tokens.into_iter().zip(max_amounts_in) {
                let amount_in = bmul(ratio, T::WeightedPools::balance(pool_id, asset)?)?;
                ensure!(amount_in != 0, Error::<T>::MathApproximation);
                ensure!(amount_in <= max_amount_in, Error::<T>::LimitIn);
                Self::pull_underlying(&who, crp_id, pool_id, asset, amount_in)?;
                amounts_in.push(amount_in);
            }
            T::AssetManager::deposit(Asset::SmartPoolShare(crp_id), &who, pool_amount_out)?;

            Self::deposit_event(Event::PoolJoined {
                who,
                crp_id,
                pool_amount: pool_amount_out,
                amounts_in,
            });

            Ok(())
        }

        pub(crate) fn do_exit_pool(
            who: AccountIdOf<T>,
            crp_id: PoolId,
            pool_amount_in: Balance,
            min_amounts_out: Vec<Balance>,
        ) -> DispatchResult {
            let crp = Self::rights_pool(crp_id)?;
            let pool_id = Self::ensure_pool_created(&crp)?;
            let tokens = T::WeightedPools::current_tokens(pool_id)?;
            ensure!(min_amounts_out.len() == tokens.len(), Error::<T>::IncorrectVecLen);

            let exit_fee = bmul(pool_amount_in, T::WeightedPools::exit_fee())?;
            let pool_amount_in_after_exit_fee = pool_amount_in.checked_sub_res(&exit_fee)?;
            let ratio = bdiv(pool_amount_in_after_exit_fee, Self::total_supply(crp_id))?;
            ensure!(ratio != 0, Error::<T>::MathApproximation);

            Self::redeem_shares(&who, crp_id, pool_amount_in, exit_fee)?;

            let mut amounts_out = Vec::with_capacity(tokens.len());
            for (asset, min_amount_out) in tokens.into_iter().zip(min_amounts_out) {
                let amount_out = bmul(ratio, T::WeightedPools::balance(pool_id, asset)?)?;
                ensure!(amount_out != 0, Error::<T>::MathApproximation);
                ensure!(amount_out >= min_amount_out, Error::<T>::LimitOut);
                Self::push_underlying(&who, crp_id, pool_id, asset, amount_out)?;
                amounts_out.push(amount_out);
            }

            Self::deposit_event(Event::PoolExited {
                who,
                crp_id,
                pool_amount: pool_amount_in,
                exit_fee,
                amounts_out,
            });

            Ok(())
        }

        /// Returns the amount of shares minted.
        pub(crate) fn do_joinswap_extern_amount_in(
            who: AccountIdOf<T>,
            crp_id: PoolId,
            asset_in: Asset,
            amount_in: Balance,
            min_pool_amount_out: Balance,
        ) -> Result<Balance, DispatchError> {
            let crp = Self::rights_pool(crp_id)?;
            let pool_id = Self::ensure_pool_created(&crp)?;
            Self::ensure_can_join(&crp, crp_id, &who)?;
            ensure!(T::WeightedPools::is_bound(pool_id, asset_in), Error::<T>::NotBound);
            let balance_in = T::WeightedPools::balance(pool_id, asset_in)?;
            ensure!(amount_in <= bmul(balance_in, MAX_IN_RATIO)?, Error::<T>::MaxInRatio);

            let pool_amount_out = calc_pool_out_given_single_in(
                balance_in,
                T::WeightedPools::denormalized_weight(pool_id, asset_in)?,
                Self::total_supply(crp_id),
                T::WeightedPools::total_denormalized_weight(pool_id)?,
                amount_in,
                T::WeightedPools::swap_fee(pool_id)?,
            )?;
            ensure!(pool_amount_out >= min_pool_amount_out, Error::<T>::LimitOut);
            Self::ensure_within_cap(&crp, crp_id, pool_amount_out)?;

            Self::pull_underlying(&who, crp_id, pool_id, asset_in, amount_in)?;
            T::AssetManager::deposit(Asset::SmartPoolShare(crp_id), &who, pool_amount_out)?;

            Self::deposit_event(Event::PoolJoinedWithSingleAsset {
                who,
                crp_id,
                asset: asset_in,
                amount_in,
                pool_amount: pool_amount_out,
            });

            Ok(pool_amount_out)
        }

        /// Returns the amount of `asset_in` deposited.
        pub(crate) fn do_joinswap_pool_amount_out(
            who: AccountIdOf<T>,
            crp_id: PoolId,
            asset_in: Asset,
            pool_amount_out: Balance,
            max_amount_in: Balance,
        ) -> Result<Balance, DispatchError> {
            let crp = Self::rights_pool(crp_id)?;
            let pool_id = Self::ensure_pool_created(&crp)?;
            Self::ensure_can_join(&crp, crp_id, &who)?;
            ensure!(T::WeightedPools::is_bound(pool_id, asset_in), Error::<T>::NotBound);
            Self::ensure_within_cap(&crp, crp_id, pool_amount_out)?;
            let balance_in = T::WeightedPools::balance(pool_id, asset_in)?;

            let amount_in = calc_single_in_given_pool_out(
                balance_in,
                T::WeightedPools::denormalized_weight(pool_id, asset_in)?,
                Self::total_supply(crp_id),
                T::WeightedPools::total_denormalized_weight(pool_id)?,
                pool_amount_out,
                T::WeightedPools::swap_fee(pool_id)?,
            )?;
            ensure!(amount_in != 0, Error::<T>::MathApproximation);
            ensure!(amount_in <= max_amount_in, Error::<T>::LimitIn);
            ensure!(amount_in <= bmul(balance_in, MAX_IN_RATIO)?, Error::<T>::MaxInRatio);

            Self::pull_underlying(&who, crp_id, pool_id, asset_in, amount_in)?;
            T::AssetManager::deposit(Asset::SmartPoolShare(crp_id), &who, pool_amount_out)?;

            Self::deposit_event(Event::PoolJoinedWithSingleAsset {
                who,
                crp_id,
                asset: asset_in,
                amount_in,
                pool_amount: pool_amount_out,
            });

            Ok(amount_in)
        }

        /// Returns the amount of `asset_out` withdrawn.
        pub(crate) fn do_exitswap_pool_amount_in(
            who: AccountIdOf<T>,
            crp_id: PoolId,
            asset_out: Asset,
            pool_amount_in: Balance,
            min_amount_out: Balance,
        ) -> Result<Balance, DispatchError> {
            let crp = Self::rights_pool(crp_id)?;
            let pool_id = Self::ensure_pool_created(&crp)?;
            ensure!(T::WeightedPools::is_bound(pool_id, asset_out), Error::<T>::NotBound);
            let balance_out = T::WeightedPools::balance(pool_id, asset_out)?;
            let exit_fee_ratio = T::WeightedPools::exit_fee();

            let amount_out = calc_single_out_given_pool_in(
                balance_out,
                T::WeightedPools::denormalized_weight(pool_id, asset_out)?,
                Self::total_supply(crp_id),
                T::WeightedPools::total_denormalized_weight(pool_id)?,
                pool_amount_in,
                T::WeightedPools::swap_fee(pool_id)?,
                exit_fee_ratio,
            )?;
            ensure!(amount_out >= min_amount_out, Error::<T>::LimitOut);
            ensure!(amount_out <= bmul(balance_out, MAX_OUT_RATIO)?, Error::<T>::MaxOutRatio);

            let exit_fee = bmul(pool_amount_in, exit_fee_ratio)?;
            Self::redeem_shares(&who, crp_id, pool_amount_in, exit_fee)?;
            Self::push_underlying(&who, crp_id, pool_id, asset_out, amount_out)?;

            Self::deposit_event(Event::PoolExitedWithSingleAsset {
                who,
                crp_id,
                asset: asset_out,
                amount_out,
                pool_amount: pool_amount_in,
                exit_fee,
            });

            Ok(amount_out)
        }

        /// Returns the amount of shares redeemed.
        pub(crate) fn do_exitswap_extern_amount_out(
            who: AccountIdOf<T>,
            crp_id: PoolId,
            asset_out: Asset,
            amount_out: Balance,
            max_pool_amount_in: Balance,
        ) -> Result<Balance, DispatchError> {
            let crp = Self::rights_pool(crp_id)?;
            let pool_id = Self::ensure_pool_created(&crp)?;
            ensure!(T::WeightedPools::is_bound(pool_id, asset_out), Error::<T>::NotBound);
            let balance_out = T::WeightedPools::balance(pool_id, asset_out)?;
            ensure!(amount_out <= bmul(balance_out, MAX_OUT_RATIO)?, Error::<T>::MaxOutRatio);
            let exit_fee_ratio = T::WeightedPools::exit_fee();

            let pool_amount_in = calc_pool_in_given_single_out(
                balance_out,
                T::WeightedPools::denormalized_weight(pool_id, asset_out)?,
                Self::total_supply(crp_id),
                T::WeightedPools::total_denormalized_weight(pool_id)?,
                amount_out,
                T::WeightedPools::swap_fee(pool_id)?,
                exit_fee_ratio,
            )?;
            ensure!(pool_amount_in != 0, Error::<T>::MathApproximation);
            ensure!(pool_amount_in <= max_pool_amount_in, Error::<T>::LimitIn);

            let exit_fee = bmul(pool_amount_in, exit_fee_ratio)?;
            Self::redeem_shares(&who, crp_id, pool_amount_in, exit_fee)?;
            Self::push_underlying(&who, crp_id, pool_id, asset_out, amount_out)?;

            Self::deposit_event(Event::PoolExitedWithSingleAsset {
                who,
                crp_id,
                asset: asset_out,
                amount_out,
                pool_amount: pool_amount_in,
                exit_fee,
            });

            Ok(pool_amount_in)
        }

        pub(crate) fn do_claim_protocol_fees(who: AccountIdOf<T>, crp_id: PoolId) -> DispatchResult {
            let crp = Self::rights_pool(crp_id)?;
            Self::ensure_controller(&crp, &who)?;
            let pool_id = Self::ensure_pool_created(&crp)?;

            let crp_account = Self::rights_pool_account(crp_id);
            let fees = T::WeightedPools::claim_protocol_fees(&crp_account, pool_id)?;
            for (asset, amount) in fees.iter() {
                T::AssetManager::transfer(*asset, &crp_account, &who, *amount)?;
            }

            Self::deposit_event(Event::ProtocolFeesClaimed { crp_id, controller: who, fees });

            Ok(())
        }
    }
}
