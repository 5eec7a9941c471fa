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

use crate::types::Role;
use sp_runtime::DispatchResult;

/// Sets up roles in benchmarks of pallets which only have read access to the role registry.
pub trait AccessControlBenchmarkHelper<AccountId> {
    /// Grants `role` to `who` without checking the caller.
    fn add_role(role: Role, who: &AccountId) -> DispatchResult;
}
