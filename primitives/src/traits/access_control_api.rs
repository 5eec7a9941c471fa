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

/// Read access to the role registry, used by the pool pallets to gate callers.
pub trait AccessControlApi {
    type AccountId;

    /// Returns `true` if `who` holds `Admin` or `SuperAdmin`.
    fn is_admin(who: &Self::AccountId) -> bool;

    fn has_role(role: Role, who: &Self::AccountId) -> bool;

    /// Returns `true` if `who` holds at least one of `roles`.
    fn has_any_role(roles: &[Role], who: &Self::AccountId) -> bool {
        roles.iter().any(|role| Self::has_role(*role, who))
    }

    /// Returns `true` if `who` holds a swap tier, i.e. `Restricted` or `Unrestricted`.
    ///
    /// Administrative roles alone don't whitelist an account.
    fn whitelisted(who: &Self::AccountId) -> bool;
}
