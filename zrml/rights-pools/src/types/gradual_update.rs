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

use crate::types::MaxBoundTokens;
use fcx_primitives::types::Balance;
use frame_support::BoundedVec;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// A linear transition of all weights of a rights pool from `start_weights` at `start_block` to
/// `end_weights` at `end_block`. Weights are listed in the order of the pool's tokens.
#[derive(Clone, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct GradualUpdate<BlockNumber> {
    pub start_block: BlockNumber,
    pub end_block: BlockNumber,
    pub start_weights: BoundedVec<Balance, MaxBoundTokens>,
    pub end_weights: BoundedVec<Balance, MaxBoundTokens>,
}
