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

use crate::types::PoolStatus;
use alloc::{vec, vec::Vec};
use fcx_primitives::{
    constants::MAX_BOUND_TOKENS,
    types::{Asset, Balance, Role},
};
use frame_support::{traits::ConstU32, BoundedBTreeMap, BoundedVec};
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

pub type MaxBoundTokens = ConstU32<MAX_BOUND_TOKENS>;
/// Upper bound on the number of roles which may swap in a pool. There are four roles.
pub type MaxPoolRoles = ConstU32<4>;
pub type PoolRoles = BoundedVec<Role, MaxPoolRoles>;

/// Balance and denormalized weight of a bound token.
#[derive(
    Clone, Copy, Decode, Default, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo,
)]
pub struct Record {
    pub balance: Balance,
    pub weight: Balance,
}

#[derive(Clone, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct Pool<AccountId> {
    pub controller: AccountId,
    /// Bound tokens in the order they were bound.
    pub tokens: BoundedVec<Asset, MaxBoundTokens>,
    pub records: BoundedBTreeMap<Asset, Record, MaxBoundTokens>,
    /// Sum of the weights of all bound tokens.
    pub total_weight: Balance,
    pub swap_fee: Balance,
    /// Share of every amount swapped in which is set aside for the controller.
    pub protocol_fee: Balance,
    pub public_swap: bool,
    pub status: PoolStatus,
    /// Roles of which traders must hold at least one to swap.
    pub roles: PoolRoles,
}

impl<AccountId> Pool<AccountId> {
    pub fn new(controller: AccountId, swap_fee: Balance) -> Self {
        Pool {
            controller,
            tokens: Default::default(),
            records: Default::default(),
            total_weight: 0,
            swap_fee,
            protocol_fee: 0,
            public_swap: false,
            status: PoolStatus::Open,
            roles: Self::default_roles(),
        }
    }

    /// `Admin`, `Restricted` and `Unrestricted` may swap in a new pool.
    pub fn default_roles() -> PoolRoles {
        BoundedVec::truncate_from(vec![Role::Admin, Role::Restricted, Role::Unrestricted])
    }

    pub fn is_bound(&self, asset: &Asset) -> bool {
        self.records.contains_key(asset)
    }

    pub fn is_finalized(&self) -> bool {
        self.status == PoolStatus::Finalized
    }

    pub fn record(&self, asset: &Asset) -> Option<Record> {
        self.records.get(asset).copied()
    }

    pub fn assets(&self) -> Vec<Asset> {
        self.tokens.to_vec()
    }
}
