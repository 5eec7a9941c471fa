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

#![allow(
    // Constants parameters inside `parameter_types!` already check
    // arithmetic operations at compile time
    clippy::arithmetic_side_effects
)]

#[cfg(feature = "mock")]
pub mod mock;

use crate::types::Balance;
use frame_support::PalletId;

// Definitions for currency
pub const BASE: u128 = 1_000_000_000_000_000_000;
pub const CENT: Balance = BASE / 100;
pub const MILLI: Balance = CENT / 10;
pub const MICRO: Balance = MILLI / 1000;

// Fixed point math
/// Smallest term of the binomial series used by `bpow_approx`.
pub const BPOW_PRECISION: u128 = BASE / 10_000_000_000;
/// Lower bound on the base of `bpow_approx`.
pub const BPOW_APPROX_BASE_MIN: u128 = BASE / 4;
/// Upper bound on the base of `bpow_approx`.
pub const BPOW_APPROX_BASE_MAX: u128 = 7 * BASE / 4;
/// Maximum number of terms of the binomial series used by `bpow_approx`.
pub const BPOW_APPROX_MAX_ITERATIONS: u128 = 100;
/// Maximum integer part of the exponent accepted by `bpow`.
pub const MAX_BPOW_EXPONENT: u128 = 64;

// Weighted pools
//
// These should not be config parameters to avoid misconfigurations.
/// Initial supply of pool shares minted to the controller when a pool is finalized.
pub const INIT_POOL_SUPPLY: Balance = 100 * BASE;
/// Maximum ratio of the in-balance that can be swapped in with a single swap.
pub const MAX_IN_RATIO: Balance = BASE / 2;
/// Maximum ratio of the out-balance that can be swapped out with a single swap.
pub const MAX_OUT_RATIO: Balance = BASE / 3 + 1;
pub const MAX_BOUND_TOKENS: u32 = 8;
pub const MIN_BOUND_TOKENS: u32 = 2;
pub const MAX_FEE: Balance = BASE / 10;
pub const MIN_FEE: Balance = BASE / 1_000_000;
pub const MAX_TOTAL_WEIGHT: Balance = 50 * BASE;
pub const MAX_WEIGHT: Balance = 50 * BASE;
pub const MIN_WEIGHT: Balance = BASE;
/// Minimum balance of any bound token.
pub const MIN_BALANCE: Balance = BASE / 1_000_000_000_000;
/// Pallet identifier of the weighted pools, used to derive pool accounts.
pub const WEIGHTED_POOLS_PALLET_ID: PalletId = PalletId(*b"fcx/wpls");

// Rights pools
pub const MAX_POOL_SUPPLY: Balance = 1_000_000_000 * BASE;
pub const MIN_POOL_SUPPLY: Balance = 100 * BASE;
/// Pallet identifier of the rights pools, used to derive the account of each rights pool.
pub const RIGHTS_POOLS_PALLET_ID: PalletId = PalletId(*b"fcx/crps");
