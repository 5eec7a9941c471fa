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

use crate::types::Role;
use alloc::vec::Vec;
use sp_runtime::{DispatchError, DispatchResult};

/// Controller-level access to weighted pools.
///
/// Implementations perform the same checks as the corresponding extrinsics, with `who` standing
/// in for the signed origin. In particular, `who` must be the controller of the pool for all
/// mutating functions.
pub trait WeightedPoolApi {
    type AccountId;
    type Asset;
    type Balance;
    type PoolId;

    /// Creates an open pool controlled by `controller` and returns its id.
    ///
    /// Unlike the `create_pool` extrinsic, this doesn't check that `controller` is an admin.
    fn create_pool(controller: Self::AccountId) -> Result<Self::PoolId, DispatchError>;

    /// Returns the account which holds the reserves of `pool_id`.
    fn pool_account(pool_id: Self::PoolId) -> Self::AccountId;

    /// Binds `asset` to the pool, transferring `balance` from `who` to the pool.
    fn bind(
        who: &Self::AccountId,
        pool_id: Self::PoolId,
        asset: Self::Asset,
        balance: Self::Balance,
        weight: Self::Balance,
    ) -> DispatchResult;

    /// Sets the balance and weight of a bound asset. The balance difference is moved between
    /// `who` and the pool.
    fn rebind(
        who: &Self::AccountId,
        pool_id: Self::PoolId,
        asset: Self::Asset,
        balance: Self::Balance,
        weight: Self::Balance,
    ) -> DispatchResult;

    /// Removes `asset` from the pool and transfers its whole balance to `who`.
    fn unbind(who: &Self::AccountId, pool_id: Self::PoolId, asset: Self::Asset) -> DispatchResult;

    fn set_swap_fee(
        who: &Self::AccountId,
        pool_id: Self::PoolId,
        swap_fee: Self::Balance,
    ) -> DispatchResult;

    fn set_protocol_fee(
        who: &Self::AccountId,
        pool_id: Self::PoolId,
        protocol_fee: Self::Balance,
    ) -> DispatchResult;

    fn set_public_swap(
        who: &Self::AccountId,
        pool_id: Self::PoolId,
        public_swap: bool,
    ) -> DispatchResult;

    fn set_roles(
        who: &Self::AccountId,
        pool_id: Self::PoolId,
        roles: Vec<Role>,
    ) -> DispatchResult;

    /// Transfers all protocol fees accrued by the pool to `who` and returns them, sorted by
    /// asset.
    fn claim_protocol_fees(
        who: &Self::AccountId,
        pool_id: Self::PoolId,
    ) -> Result<Vec<(Self::Asset, Self::Balance)>, DispatchError>;

    /// Returns the recorded balance of `asset` in the pool.
    fn balance(pool_id: Self::PoolId, asset: Self::Asset) -> Result<Self::Balance, DispatchError>;

    fn denormalized_weight(
        pool_id: Self::PoolId,
        asset: Self::Asset,
    ) -> Result<Self::Balance, DispatchError>;

    fn total_denormalized_weight(pool_id: Self::PoolId) -> Result<Self::Balance, DispatchError>;

    /// Returns the bound assets in the order they were bound.
    fn current_tokens(pool_id: Self::PoolId) -> Result<Vec<Self::Asset>, DispatchError>;

    fn swap_fee(pool_id: Self::PoolId) -> Result<Self::Balance, DispatchError>;

    fn is_bound(pool_id: Self::PoolId, asset: Self::Asset) -> bool;

    /// Fraction of redeemed pool shares which is charged as exit fee.
    fn exit_fee() -> Self::Balance;

    /// Returns the account which receives exit fees.
    fn exit_fee_account() -> Self::AccountId;
}
