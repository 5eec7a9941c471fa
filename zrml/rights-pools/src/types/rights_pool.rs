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

use crate::types::{MaxBoundTokens, Rights};
use fcx_primitives::types::{Asset, Balance, PoolId};
use frame_support::BoundedVec;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// Configuration of a rights pool as passed to `new_rights_pool`. `balances` and `weights` are
/// listed in the order of `tokens`. Lists longer than `MAX_BOUND_TOKENS` fail to decode.
#[derive(Clone, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct PoolParams {
    pub tokens: BoundedVec<Asset, MaxBoundTokens>,
    pub balances: BoundedVec<Balance, MaxBoundTokens>,
    pub weights: BoundedVec<Balance, MaxBoundTokens>,
    pub swap_fee: Balance,
    pub protocol_fee: Balance,
}

/// Start balance and weight of a token of a rights pool.
#[derive(Clone, Copy, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct StartToken {
    pub asset: Asset,
    pub balance: Balance,
    pub weight: Balance,
}

#[derive(Clone, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct RightsPool<AccountId, BlockNumber> {
    pub controller: AccountId,
    pub rights: Rights,
    /// Tokens bound when the underlying pool is created.
    pub start_tokens: BoundedVec<StartToken, MaxBoundTokens>,
    pub swap_fee: Balance,
    pub protocol_fee: Balance,
    /// The underlying weighted pool. `None` until `create_pool` is called.
    pub pool_id: Option<PoolId>,
    /// Upper bound on the total supply of rights pool shares.
    pub cap: Balance,
    pub minimum_weight_change_block_period: BlockNumber,
    pub add_token_time_lock_in_blocks: BlockNumber,
}

impl<AccountId, BlockNumber: Default> RightsPool<AccountId, BlockNumber> {
    pub fn new(
        controller: AccountId,
        rights: Rights,
        start_tokens: BoundedVec<StartToken, MaxBoundTokens>,
        swap_fee: Balance,
        protocol_fee: Balance,
    ) -> Self {
        RightsPool {
            controller,
            rights,
            start_tokens,
            swap_fee,
            protocol_fee,
            pool_id: None,
            cap: Balance::MAX,
            minimum_weight_change_block_period: Default::default(),
            add_token_time_lock_in_blocks: Default::default(),
        }
    }
}
