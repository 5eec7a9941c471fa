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

use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

/// Roles tracked by the access control registry.
#[cfg_attr(feature = "std", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
#[derive(
    Clone, Copy, Debug, Decode, Eq, Encode, MaxEncodedLen, Ord, PartialEq, PartialOrd, TypeInfo,
)]
pub enum Role {
    SuperAdmin,
    Admin,
    Restricted,
    Unrestricted,
}

impl Role {
    /// Returns the swap tier this role stands for, if any.
    pub fn tier(&self) -> Option<Tier> {
        match self {
            Role::Restricted => Some(Tier::Restricted),
            Role::Unrestricted => Some(Tier::Unrestricted),
            Role::SuperAdmin | Role::Admin => None,
        }
    }
}

/// Swap tier of an account. An account holds at most one tier at any time.
#[cfg_attr(feature = "std", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
#[derive(
    Clone, Copy, Debug, Decode, Eq, Encode, MaxEncodedLen, Ord, PartialEq, PartialOrd, TypeInfo,
)]
pub enum Tier {
    Restricted,
    Unrestricted,
}

impl From<Tier> for Role {
    fn from(tier: Tier) -> Role {
        match tier {
            Tier::Restricted => Role::Restricted,
            Tier::Unrestricted => Role::Unrestricted,
        }
    }
}
