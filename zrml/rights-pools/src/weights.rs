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

use core::marker::PhantomData;
use frame_support::{traits::Get, weights::Weight};

/// Weight functions needed for fcx_rights_pools (fcx-rights-pools).
pub trait WeightInfoZeitgeist {
    fn new_rights_pool(n: u32) -> Weight;
    fn create_pool(n: u32) -> Weight;
    fn set_swap_fee() -> Weight;
    fn set_protocol_fee() -> Weight;
    fn set_public_swap() -> Weight;
    fn set_roles() -> Weight;
    fn set_cap() -> Weight;
    fn set_controller() -> Weight;
    fn update_weight() -> Weight;
    fn update_weights_gradually(n: u32) -> Weight;
    fn poke_weights(n: u32) -> Weight;
    fn commit_add_token() -> Weight;
    fn apply_add_token() -> Weight;
    fn remove_token() -> Weight;
    fn whitelist_liquidity_provider() -> Weight;
    fn remove_whitelisted_liquidity_provider() -> Weight;
    fn join_pool(n: u32) -> Weight;
    fn exit_pool(n: u32) -> Weight;
    fn joinswap_extern_amount_in() -> Weight;
    fn joinswap_pool_amount_out() -> Weight;
    fn exitswap_pool_amount_in() -> Weight;
    fn exitswap_extern_amount_out() -> Weight;
    fn claim_protocol_fees(n: u32) -> Weight;
}

/// Weight functions for fcx_rights_pools (fcx-rights-pools).
pub struct WeightInfo<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfoZeitgeist for WeightInfo<T> {
    /// Storage: `AccessControl::Roles` (r:1 w:0)
    /// Storage: `RightsPools::NextRightsPoolId` (r:1 w:1)
    /// Storage: `RightsPools::Pools` (r:0 w:1)
    /// The range of component `n` is `[2, 8]`.
    fn new_rights_pool(n: u32) -> Weight {
        Weight::from_parts(24_310_000, 4_018)
            .saturating_add(Weight::from_parts(1_210_000, 0).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    /// Storage: `RightsPools::Pools` (r:1 w:1)
    /// Storage: `WeightedPools::NextPoolId` (r:1 w:1)
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    /// Storage: `Tokens::Accounts` (r:3 w:3)
    /// Storage: `Tokens::TotalIssuance` (r:1 w:1)
    /// The range of component `n` is `[2, 8]`.
    fn create_pool(n: u32) -> Weight {
        Weight::from_parts(102_450_000, 7_386)
            .saturating_add(Weight::from_parts(61_930_000, 2_603).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(5))
            .saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(n.into())))
            .saturating_add(T::DbWeight::get().writes(5))
            .saturating_add(T::DbWeight::get().writes((2_u64).saturating_mul(n.into())))
    }
    /// Storage: `RightsPools::Pools` (r:1 w:0)
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    fn set_swap_fee() -> Weight {
        Weight::from_parts(29_870_000, 4_018)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `RightsPools::Pools` (r:1 w:0)
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    fn set_protocol_fee() -> Weight {
        Weight::from_parts(29_640_000, 4_018)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `RightsPools::Pools` (r:1 w:0)
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    fn set_public_swap() -> Weight {
        Weight::from_parts(28_990_000, 4_018)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `RightsPools::Pools` (r:1 w:0)
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    fn set_roles() -> Weight {
        Weight::from_parts(30_520_000, 4_018)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `RightsPools::Pools` (r:1 w:1)
    fn set_cap() -> Weight {
        Weight::from_parts(18_230_000, 4_018)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `RightsPools::Pools` (r:1 w:1)
    fn set_controller() -> Weight {
        Weight::from_parts(18_760_000, 4_018)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `RightsPools::Pools` (r:1 w:0)
    /// Storage: `RightsPools::GradualUpdates` (r:1 w:0)
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    /// Storage: `Tokens::Accounts` (r:4 w:4)
    /// Storage: `Tokens::TotalIssuance` (r:1 w:1)
    fn update_weight() -> Weight {
        Weight::from_parts(128_640_000, 11_122)
            .saturating_add(T::DbWeight::get().reads(8))
            .saturating_add(T::DbWeight::get().writes(6))
    }
    /// Storage: `RightsPools::Pools` (r:1 w:0)
    /// Storage: `RightsPools::NewTokens` (r:1 w:0)
    /// Storage: `WeightedPools::Pools` (r:1 w:0)
    /// Storage: `RightsPools::GradualUpdates` (r:0 w:1)
    /// The range of component `n` is `[2, 8]`.
    fn update_weights_gradually(n: u32) -> Weight {
        Weight::from_parts(33_180_000, 4_018)
            .saturating_add(Weight::from_parts(540_000, 0).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `RightsPools::Pools` (r:1 w:0)
    /// Storage: `RightsPools::GradualUpdates` (r:1 w:1)
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    /// The range of component `n` is `[2, 8]`.
    fn poke_weights(n: u32) -> Weight {
        Weight::from_parts(31_470_000, 4_018)
            .saturating_add(Weight::from_parts(9_860_000, 0).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    /// Storage: `RightsPools::Pools` (r:1 w:0)
    /// Storage: `RightsPools::GradualUpdates` (r:1 w:0)
    /// Storage: `WeightedPools::Pools` (r:1 w:0)
    /// Storage: `RightsPools::NewTokens` (r:0 w:1)
    fn commit_add_token() -> Weight {
        Weight::from_parts(31_020_000, 4_018)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `RightsPools::Pools` (r:1 w:0)
    /// Storage: `RightsPools::NewTokens` (r:1 w:1)
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    /// Storage: `Tokens::Accounts` (r:3 w:3)
    /// Storage: `Tokens::TotalIssuance` (r:1 w:1)
    fn apply_add_token() -> Weight {
        Weight::from_parts(112_380_000, 8_799)
            .saturating_add(T::DbWeight::get().reads(7))
            .saturating_add(T::DbWeight::get().writes(7))
    }
    /// Storage: `RightsPools::Pools` (r:1 w:0)
    /// Storage: `RightsPools::NewTokens` (r:1 w:0)
    /// Storage: `RightsPools::GradualUpdates` (r:1 w:0)
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    /// Storage: `Tokens::Accounts` (r:3 w:3)
    /// Storage: `Tokens::TotalIssuance` (r:1 w:1)
    fn remove_token() -> Weight {
        Weight::from_parts(109_870_000, 8_799)
            .saturating_add(T::DbWeight::get().reads(8))
            .saturating_add(T::DbWeight::get().writes(5))
    }
    /// Storage: `RightsPools::Pools` (r:1 w:0)
    /// Storage: `RightsPools::LiquidityProviders` (r:0 w:1)
    fn whitelist_liquidity_provider() -> Weight {
        Weight::from_parts(19_450_000, 4_018)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `RightsPools::Pools` (r:1 w:0)
    /// Storage: `RightsPools::LiquidityProviders` (r:1 w:1)
    fn remove_whitelisted_liquidity_provider() -> Weight {
        Weight::from_parts(22_160_000, 4_018)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `RightsPools::Pools` (r:1 w:0)
    /// Storage: `AccessControl::Roles` (r:1 w:0)
    /// Storage: `Tokens::TotalIssuance` (r:1 w:1)
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    /// Storage: `Tokens::Accounts` (r:1 w:1)
    /// The range of component `n` is `[2, 8]`.
    fn join_pool(n: u32) -> Weight {
        Weight::from_parts(48_720_000, 4_018)
            .saturating_add(Weight::from_parts(52_310_000, 7_772).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(5))
            .saturating_add(T::DbWeight::get().reads((3_u64).saturating_mul(n.into())))
            .saturating_add(T::DbWeight::get().writes(3))
            .saturating_add(T::DbWeight::get().writes((3_u64).saturating_mul(n.into())))
    }
    /// Storage: `RightsPools::Pools` (r:1 w:0)
    /// Storage: `Tokens::TotalIssuance` (r:1 w:1)
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    /// Storage: `Tokens::Accounts` (r:2 w:2)
    /// The range of component `n` is `[2, 8]`.
    fn exit_pool(n: u32) -> Weight {
        Weight::from_parts(46_050_000, 4_018)
            .saturating_add(Weight::from_parts(51_880_000, 7_772).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(5))
            .saturating_add(T::DbWeight::get().reads((3_u64).saturating_mul(n.into())))
            .saturating_add(T::DbWeight::get().writes(4))
            .saturating_add(T::DbWeight::get().writes((3_u64).saturating_mul(n.into())))
    }
    /// Storage: `RightsPools::Pools` (r:1 w:0)
    /// Storage: `AccessControl::Roles` (r:1 w:0)
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    /// Storage: `Tokens::TotalIssuance` (r:1 w:1)
    /// Storage: `Tokens::Accounts` (r:4 w:4)
    fn joinswap_extern_amount_in() -> Weight {
        Weight::from_parts(141_270_000, 11_122)
            .saturating_add(T::DbWeight::get().reads(8))
            .saturating_add(T::DbWeight::get().writes(6))
    }
    /// Storage: `RightsPools::Pools` (r:1 w:0)
    /// Storage: `AccessControl::Roles` (r:1 w:0)
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    /// Storage: `Tokens::TotalIssuance` (r:1 w:1)
    /// Storage: `Tokens::Accounts` (r:4 w:4)
    fn joinswap_pool_amount_out() -> Weight {
        Weight::from_parts(143_930_000, 11_122)
            .saturating_add(T::DbWeight::get().reads(8))
            .saturating_add(T::DbWeight::get().writes(6))
    }
    /// Storage: `RightsPools::Pools` (r:1 w:0)
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    /// Storage: `Tokens::TotalIssuance` (r:1 w:1)
    /// Storage: `Tokens::Accounts` (r:4 w:4)
    fn exitswap_pool_amount_in() -> Weight {
        Weight::from_parts(139_510_000, 11_122)
            .saturating_add(T::DbWeight::get().reads(7))
            .saturating_add(T::DbWeight::get().writes(6))
    }
    /// Storage: `RightsPools::Pools` (r:1 w:0)
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    /// Storage: `Tokens::TotalIssuance` (r:1 w:1)
    /// Storage: `Tokens::Accounts` (r:4 w:4)
    fn exitswap_extern_amount_out() -> Weight {
        Weight::from_parts(142_060_000, 11_122)
            .saturating_add(T::DbWeight::get().reads(7))
            .saturating_add(T::DbWeight::get().writes(6))
    }
    /// Storage: `RightsPools::Pools` (r:1 w:0)
    /// Storage: `WeightedPools::Pools` (r:1 w:0)
    /// Storage: `WeightedPools::ProtocolFeesAccrued` (r:9 w:8)
    /// The range of component `n` is `[0, 8]`.
    fn claim_protocol_fees(n: u32) -> Weight {
        Weight::from_parts(27_310_000, 4_018)
            .saturating_add(Weight::from_parts(38_470_000, 5_196).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(n.into())))
            .saturating_add(T::DbWeight::get().writes((3_u64).saturating_mul(n.into())))
    }
}
