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

pub use crate::{
    asset::*,
    role::{Role, Tier},
};

/// Signed counter-part of Balance
pub type Amount = i128;

/// Balance of an account. All balances, weights, fees and prices handled by the pools are
/// 18-decimal fixed point numbers of this type.
pub type Balance = u128;

/// An index to a block.
pub type BlockNumber = u64;

/// ORML adapter
pub type BasicCurrencyAdapter<R, B> = orml_currencies::BasicCurrencyAdapter<R, B, Amount, Balance>;

pub type CurrencyId = Asset;

/// A hash of some data used by the chain.
pub type Hash = sp_core::H256;

/// The identifier of a weighted pool or a configurable rights pool.
pub type PoolId = u128;

// Tests

pub type AccountIdTest = u128;
