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

use crate::types::PoolId;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

/// Every asset the pools can hold or issue.
///
/// `PoolShare` and `SmartPoolShare` are minted and burned by the pool pallets; all other variants
/// are external tokens which the pools only reference.
#[cfg_attr(feature = "std", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
#[derive(
    Clone, Copy, Debug, Decode, Eq, Encode, MaxEncodedLen, Ord, PartialEq, PartialOrd, TypeInfo,
)]
pub enum Asset {
    Native,
    Token(u32),
    /// Share of a finalized weighted pool.
    PoolShare(PoolId),
    /// Share of a configurable rights pool.
    SmartPoolShare(PoolId),
}

impl Asset {
    pub fn is_pool_share(&self) -> bool {
        matches!(self, Asset::PoolShare(_) | Asset::SmartPoolShare(_))
    }

    pub fn is_token(&self) -> bool {
        !self.is_pool_share()
    }
}
