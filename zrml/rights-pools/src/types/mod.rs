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

mod gradual_update;
mod new_token;
mod rights;
mod rights_pool;

pub use gradual_update::*;
pub use new_token::*;
pub use rights::*;
pub use rights_pool::*;

use fcx_primitives::constants::MAX_BOUND_TOKENS;
use frame_support::traits::ConstU32;

pub type MaxBoundTokens = ConstU32<MAX_BOUND_TOKENS>;
