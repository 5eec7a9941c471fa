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

/// Weight functions needed for fcx_access_control (fcx-access-control).
pub trait WeightInfoZeitgeist {
    fn grant_role() -> Weight;
    fn grant_roles(n: u32) -> Weight;
    fn revoke_role() -> Weight;
    fn renounce_role() -> Weight;
    fn blacklist(n: u32) -> Weight;
}

/// Weight functions for fcx_access_control (fcx-access-control).
pub struct WeightInfo<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfoZeitgeist for WeightInfo<T> {
    /// Storage: `AccessControl::Roles` (r:1 w:1)
    /// Storage: `AccessControl::RoleMembers` (r:2 w:2)
    fn grant_role() -> Weight {
        Weight::from_parts(24_510_000, 33_000)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    /// Storage: `AccessControl::Roles` (r:256 w:256)
    /// Storage: `AccessControl::RoleMembers` (r:512 w:512)
    /// The range of component `n` is `[1, 256]`.
    fn grant_roles(n: u32) -> Weight {
        Weight::from_parts(3_120_000, 3_593)
            .saturating_add(Weight::from_parts(21_870_000, 0).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads((3_u64).saturating_mul(n.into())))
            .saturating_add(T::DbWeight::get().writes((3_u64).saturating_mul(n.into())))
            .saturating_add(Weight::from_parts(0, 33_000).saturating_mul(n.into()))
    }
    /// Storage: `AccessControl::Roles` (r:1 w:1)
    /// Storage: `AccessControl::RoleMembers` (r:1 w:1)
    fn revoke_role() -> Weight {
        Weight::from_parts(22_140_000, 33_000)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    /// Storage: `AccessControl::Roles` (r:1 w:1)
    /// Storage: `AccessControl::RoleMembers` (r:1 w:1)
    fn renounce_role() -> Weight {
        Weight::from_parts(21_730_000, 33_000)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    /// Storage: `AccessControl::Roles` (r:256 w:256)
    /// Storage: `AccessControl::RoleMembers` (r:4 w:4)
    /// The range of component `n` is `[1, 256]`.
    fn blacklist(n: u32) -> Weight {
        Weight::from_parts(15_800_000, 131_000)
            .saturating_add(Weight::from_parts(18_310_000, 0).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().reads((1_u64).saturating_mul(n.into())))
            .saturating_add(T::DbWeight::get().writes(4))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(n.into())))
    }
}
