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

/// Weight functions needed for fcx_weighted_pools (fcx-weighted-pools).
pub trait WeightInfoZeitgeist {
    fn create_pool() -> Weight;
    fn bind() -> Weight;
    fn rebind() -> Weight;
    fn unbind() -> Weight;
    fn finalize() -> Weight;
    fn set_swap_fee() -> Weight;
    fn set_protocol_fee() -> Weight;
    fn set_public_swap() -> Weight;
    fn set_controller() -> Weight;
    fn set_roles() -> Weight;
    fn gulp() -> Weight;
    fn swap_exact_amount_in() -> Weight;
    fn swap_exact_amount_out() -> Weight;
    fn join_pool(n: u32) -> Weight;
    fn exit_pool(n: u32) -> Weight;
    fn joinswap_extern_amount_in() -> Weight;
    fn joinswap_pool_amount_out() -> Weight;
    fn exitswap_pool_amount_in() -> Weight;
    fn exitswap_extern_amount_out() -> Weight;
    fn claim_protocol_fees(n: u32) -> Weight;
    fn set_fee_collector() -> Weight;
    fn collect() -> Weight;
}

/// Weight functions for fcx_weighted_pools (fcx-weighted-pools).
pub struct WeightInfo<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfoZeitgeist for WeightInfo<T> {
    /// Storage: `AccessControl::Roles` (r:1 w:0)
    /// Storage: `WeightedPools::NextPoolId` (r:1 w:1)
    /// Storage: `WeightedPools::Pools` (r:0 w:1)
    fn create_pool() -> Weight {
        Weight::from_parts(21_340_000, 4_018)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    /// Storage: `Tokens::Accounts` (r:2 w:2)
    /// Storage: `System::Account` (r:1 w:1)
    fn bind() -> Weight {
        Weight::from_parts(58_920_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(4))
    }
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    /// Storage: `Tokens::Accounts` (r:2 w:2)
    /// Storage: `System::Account` (r:1 w:1)
    fn rebind() -> Weight {
        Weight::from_parts(57_410_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(4))
    }
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    /// Storage: `Tokens::Accounts` (r:2 w:2)
    /// Storage: `System::Account` (r:1 w:1)
    fn unbind() -> Weight {
        Weight::from_parts(55_060_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(4))
    }
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    /// Storage: `Tokens::Accounts` (r:1 w:1)
    /// Storage: `Tokens::TotalIssuance` (r:1 w:1)
    /// Storage: `System::Account` (r:1 w:1)
    fn finalize() -> Weight {
        Weight::from_parts(46_780_000, 4_018)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(4))
    }
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    fn set_swap_fee() -> Weight {
        Weight::from_parts(15_920_000, 4_018)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    fn set_protocol_fee() -> Weight {
        Weight::from_parts(15_880_000, 4_018)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    fn set_public_swap() -> Weight {
        Weight::from_parts(15_510_000, 4_018)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    fn set_controller() -> Weight {
        Weight::from_parts(15_700_000, 4_018)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    fn set_roles() -> Weight {
        Weight::from_parts(16_230_000, 4_018)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    /// Storage: `Tokens::Accounts` (r:1 w:0)
    /// Storage: `WeightedPools::ProtocolFeesAccrued` (r:1 w:0)
    fn gulp() -> Weight {
        Weight::from_parts(24_370_000, 4_018)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    /// Storage: `AccessControl::Roles` (r:1 w:0)
    /// Storage: `Tokens::Accounts` (r:4 w:4)
    /// Storage: `System::Account` (r:2 w:2)
    /// Storage: `WeightedPools::ProtocolFeesAccrued` (r:1 w:1)
    fn swap_exact_amount_in() -> Weight {
        Weight::from_parts(121_650_000, 11_432)
            .saturating_add(T::DbWeight::get().reads(9))
            .saturating_add(T::DbWeight::get().writes(8))
    }
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    /// Storage: `AccessControl::Roles` (r:1 w:0)
    /// Storage: `Tokens::Accounts` (r:4 w:4)
    /// Storage: `System::Account` (r:2 w:2)
    /// Storage: `WeightedPools::ProtocolFeesAccrued` (r:1 w:1)
    fn swap_exact_amount_out() -> Weight {
        Weight::from_parts(123_940_000, 11_432)
            .saturating_add(T::DbWeight::get().reads(9))
            .saturating_add(T::DbWeight::get().writes(8))
    }
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    /// Storage: `AccessControl::Roles` (r:1 w:0)
    /// Storage: `Tokens::TotalIssuance` (r:1 w:1)
    /// Storage: `Tokens::Accounts` (r:17 w:17)
    /// Storage: `System::Account` (r:2 w:2)
    /// The range of component `n` is `[2, 8]`.
    fn join_pool(n: u32) -> Weight {
        Weight::from_parts(46_120_000, 6_196)
            .saturating_add(Weight::from_parts(28_440_000, 0).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(5))
            .saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(n.into())))
            .saturating_add(T::DbWeight::get().writes(4))
            .saturating_add(T::DbWeight::get().writes((2_u64).saturating_mul(n.into())))
            .saturating_add(Weight::from_parts(0, 2_609).saturating_mul(n.into()))
    }
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    /// Storage: `Tokens::TotalIssuance` (r:1 w:1)
    /// Storage: `Tokens::Accounts` (r:18 w:18)
    /// Storage: `System::Account` (r:3 w:3)
    /// The range of component `n` is `[2, 8]`.
    fn exit_pool(n: u32) -> Weight {
        Weight::from_parts(55_830_000, 8_799)
            .saturating_add(Weight::from_parts(28_950_000, 0).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(6))
            .saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(n.into())))
            .saturating_add(T::DbWeight::get().writes(6))
            .saturating_add(T::DbWeight::get().writes((2_u64).saturating_mul(n.into())))
            .saturating_add(Weight::from_parts(0, 2_609).saturating_mul(n.into()))
    }
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    /// Storage: `AccessControl::Roles` (r:1 w:0)
    /// Storage: `Tokens::TotalIssuance` (r:1 w:1)
    /// Storage: `Tokens::Accounts` (r:3 w:3)
    /// Storage: `System::Account` (r:2 w:2)
    fn joinswap_extern_amount_in() -> Weight {
        Weight::from_parts(104_210_000, 8_799)
            .saturating_add(T::DbWeight::get().reads(8))
            .saturating_add(T::DbWeight::get().writes(7))
    }
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    /// Storage: `AccessControl::Roles` (r:1 w:0)
    /// Storage: `Tokens::TotalIssuance` (r:1 w:1)
    /// Storage: `Tokens::Accounts` (r:3 w:3)
    /// Storage: `System::Account` (r:2 w:2)
    fn joinswap_pool_amount_out() -> Weight {
        Weight::from_parts(106_560_000, 8_799)
            .saturating_add(T::DbWeight::get().reads(8))
            .saturating_add(T::DbWeight::get().writes(7))
    }
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    /// Storage: `Tokens::TotalIssuance` (r:1 w:1)
    /// Storage: `Tokens::Accounts` (r:4 w:4)
    /// Storage: `System::Account` (r:3 w:3)
    fn exitswap_pool_amount_in() -> Weight {
        Weight::from_parts(112_390_000, 11_432)
            .saturating_add(T::DbWeight::get().reads(9))
            .saturating_add(T::DbWeight::get().writes(9))
    }
    /// Storage: `WeightedPools::Pools` (r:1 w:1)
    /// Storage: `Tokens::TotalIssuance` (r:1 w:1)
    /// Storage: `Tokens::Accounts` (r:4 w:4)
    /// Storage: `System::Account` (r:3 w:3)
    fn exitswap_extern_amount_out() -> Weight {
        Weight::from_parts(114_020_000, 11_432)
            .saturating_add(T::DbWeight::get().reads(9))
            .saturating_add(T::DbWeight::get().writes(9))
    }
    /// Storage: `WeightedPools::Pools` (r:1 w:0)
    /// Storage: `WeightedPools::ProtocolFeesAccrued` (r:9 w:8)
    /// Storage: `Tokens::Accounts` (r:16 w:16)
    /// Storage: `System::Account` (r:1 w:1)
    /// The range of component `n` is `[1, 8]`.
    fn claim_protocol_fees(n: u32) -> Weight {
        Weight::from_parts(32_470_000, 4_018)
            .saturating_add(Weight::from_parts(31_160_000, 0).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().reads((3_u64).saturating_mul(n.into())))
            .saturating_add(T::DbWeight::get().writes(1))
            .saturating_add(T::DbWeight::get().writes((3_u64).saturating_mul(n.into())))
            .saturating_add(Weight::from_parts(0, 2_609).saturating_mul(n.into()))
    }
    /// Storage: `AccessControl::Roles` (r:1 w:0)
    /// Storage: `WeightedPools::FeeCollector` (r:0 w:1)
    fn set_fee_collector() -> Weight {
        Weight::from_parts(12_040_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `WeightedPools::FeeCollector` (r:1 w:0)
    /// Storage: `Tokens::Accounts` (r:2 w:2)
    /// Storage: `System::Account` (r:1 w:1)
    fn collect() -> Weight {
        Weight::from_parts(49_360_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(3))
    }
}
