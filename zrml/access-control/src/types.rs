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

use fcx_primitives::types::{Role, Tier};
use frame_support::pallet_prelude::{Decode, Encode, MaxEncodedLen, TypeInfo};
use sp_runtime::RuntimeDebug;

/// The roles held by a single account.
#[derive(
    Clone, Copy, Debug, Decode, Default, Encode, Eq, MaxEncodedLen, PartialEq, TypeInfo,
)]
pub struct AccountRoles {
    pub super_admin: bool,
    pub admin: bool,
    pub tier: Option<Tier>,
}

impl AccountRoles {
    pub fn has(&self, role: Role) -> bool {
        match role {
            Role::SuperAdmin => self.super_admin,
            Role::Admin => self.admin,
            Role::Restricted | Role::Unrestricted => self.tier.map(Role::from) == Some(role),
        }
    }

    /// Returns `true` if the account holds `Admin` or `SuperAdmin`.
    pub fn is_admin(&self) -> bool {
        self.super_admin || self.admin
    }

    pub fn is_empty(&self) -> bool {
        !self.super_admin && !self.admin && self.tier.is_none()
    }

    /// Adds `role` and returns the tier it replaced, if any.
    pub(crate) fn insert(&mut self, role: Role) -> Option<Tier> {
        match role {
            Role::SuperAdmin => {
                self.super_admin = true;
                None
            }
            Role::Admin => {
                self.admin = true;
                None
            }
            Role::Restricted | Role::Unrestricted => {
                let replaced = self.tier.take();
                self.tier = role.tier();
                replaced.filter(|tier| Some(*tier) != self.tier)
            }
        }
    }

    pub(crate) fn remove(&mut self, role: Role) {
        match role {
            Role::SuperAdmin => self.super_admin = false,
            Role::Admin => self.admin = false,
            Role::Restricted | Role::Unrestricted => {
                if self.has(role) {
                    self.tier = None;
                }
            }
        }
    }
}

/// A single entry of a batched grant.
#[derive(Clone, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct RoleGrant<AccountId> {
    pub role: Role,
    pub account: AccountId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Role::Restricted, Role::Unrestricted, Some(Tier::Restricted))]
    #[test_case(Role::Unrestricted, Role::Restricted, Some(Tier::Unrestricted))]
    #[test_case(Role::Restricted, Role::Restricted, None)]
    #[test_case(Role::Admin, Role::Restricted, None)]
    fn insert_toggles_tier(first: Role, second: Role, replaced: Option<Tier>) {
        let mut roles = AccountRoles::default();
        roles.insert(first);
        assert_eq!(roles.insert(second), replaced);
        assert!(roles.has(second));
    }

    #[test]
    fn remove_ignores_other_tier() {
        let mut roles = AccountRoles::default();
        roles.insert(Role::Restricted);
        roles.remove(Role::Unrestricted);
        assert!(roles.has(Role::Restricted));
        roles.remove(Role::Restricted);
        assert!(roles.is_empty());
    }
}
