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

use crate::{mock::*, types::RoleGrant, Error, Event, RoleMembers, Roles};
use fcx_primitives::{
    constants::mock::MaxRoleGrants,
    traits::AccessControlApi,
    types::{AccountIdTest, Role},
};
use frame_support::{assert_noop, assert_ok, BoundedVec};
use sp_runtime::BuildStorage;
use test_case::test_case;

fn grants(
    grants: Vec<(Role, AccountIdTest)>,
) -> BoundedVec<RoleGrant<AccountIdTest>, MaxRoleGrants> {
    grants
        .into_iter()
        .map(|(role, account)| RoleGrant { role, account })
        .collect::<Vec<_>>()
        .try_into()
        .unwrap()
}

fn accounts(accounts: Vec<AccountIdTest>) -> BoundedVec<AccountIdTest, MaxRoleGrants> {
    accounts.try_into().unwrap()
}

#[test]
fn genesis_grants_super_admin_both_admin_roles() {
    ExtBuilder::default().build().execute_with(|| {
        assert!(AccessControl::has_role(Role::SuperAdmin, &ALICE));
        assert!(AccessControl::has_role(Role::Admin, &ALICE));
        assert_eq!(AccessControl::get_role_member(Role::Admin, 0), Ok(ALICE));
        assert_eq!(AccessControl::get_role_member_count(Role::Admin), 1);
        assert_eq!(AccessControl::get_role_member_count(Role::SuperAdmin), 1);
        assert_eq!(AccessControl::get_roles(&ALICE), [Some(Role::Admin), None, None]);
    });
}

#[test]
fn genesis_seeds_tiers() {
    ExtBuilder::default()
        .admins(vec![BOB])
        .restricted(vec![CHARLIE])
        .unrestricted(vec![DAVE])
        .build()
        .execute_with(|| {
            assert!(AccessControl::is_admin(&BOB));
            assert!(!AccessControl::has_role(Role::SuperAdmin, &BOB));
            assert_eq!(AccessControl::get_roles(&CHARLIE), [None, Some(Role::Restricted), None]);
            assert_eq!(AccessControl::get_roles(&DAVE), [None, None, Some(Role::Unrestricted)]);
        });
}

#[test]
fn genesis_seeds_every_list() {
    ExtBuilder::default()
        .admins(vec![BOB, EVE])
        .restricted(vec![CHARLIE])
        .unrestricted(vec![DAVE, EVE])
        .build()
        .execute_with(|| {
            assert_eq!(AccessControl::get_role_member_count(Role::SuperAdmin), 1);
            assert_eq!(AccessControl::get_role_member(Role::SuperAdmin, 0), Ok(ALICE));
            assert_eq!(AccessControl::get_role_member_count(Role::Admin), 3);
            assert_eq!(AccessControl::get_role_member_count(Role::Restricted), 1);
            assert_eq!(AccessControl::get_role_member_count(Role::Unrestricted), 2);
            assert!(AccessControl::is_admin(&EVE));
            assert!(AccessControl::whitelisted(&CHARLIE));
            assert!(AccessControl::whitelisted(&DAVE));
            assert_eq!(
                AccessControl::get_roles(&EVE),
                [Some(Role::Admin), None, Some(Role::Unrestricted)]
            );
        });
}

#[test]
#[should_panic(expected = "Genesis config requires a super admin")]
fn genesis_without_super_admin_panics() {
    let _ = crate::GenesisConfig::<Runtime> {
        super_admin: None,
        admins: vec![ALICE],
        restricted: vec![BOB],
        unrestricted: vec![],
    }
    .build_storage();
}

#[test]
fn admins_are_not_whitelisted() {
    ExtBuilder::default().admins(vec![BOB]).build().execute_with(|| {
        assert!(!AccessControl::whitelisted(&ALICE));
        assert!(!AccessControl::whitelisted(&BOB));
        assert!(!AccessControl::whitelisted(&CHARLIE));
        assert_ok!(AccessControl::grant_role(RuntimeOrigin::signed(ALICE), Role::Restricted, ALICE));
        assert!(AccessControl::whitelisted(&ALICE));
        assert_eq!(
            AccessControl::get_roles(&ALICE),
            [Some(Role::Admin), Some(Role::Restricted), None]
        );
    });
}

#[test]
fn grant_role_emits_event() {
    ExtBuilder::default().build().execute_with(|| {
        assert_ok!(AccessControl::grant_role(RuntimeOrigin::signed(ALICE), Role::Admin, BOB));
        System::assert_last_event(
            Event::RoleGranted { role: Role::Admin, account: BOB, sender: ALICE }.into(),
        );
        assert!(AccessControl::is_admin(&BOB));
        assert_eq!(AccessControl::get_role_member(Role::Admin, 1), Ok(BOB));
    });
}

#[test]
fn grant_role_is_a_noop_if_role_is_held() {
    ExtBuilder::default().build().execute_with(|| {
        assert_ok!(AccessControl::grant_role(RuntimeOrigin::signed(ALICE), Role::Restricted, BOB));
        let events = System::events().len();
        assert_ok!(AccessControl::grant_role(RuntimeOrigin::signed(ALICE), Role::Restricted, BOB));
        assert_eq!(System::events().len(), events);
        assert_eq!(AccessControl::get_role_member_count(Role::Restricted), 1);
    });
}

#[test_case(Role::Unrestricted, Role::Restricted)]
#[test_case(Role::Restricted, Role::Unrestricted)]
fn granting_a_tier_replaces_the_other_tier(first: Role, second: Role) {
    ExtBuilder::default().build().execute_with(|| {
        assert_ok!(AccessControl::grant_roles(
            RuntimeOrigin::signed(ALICE),
            grants(vec![(first, BOB)])
        ));
        assert!(AccessControl::has_role(first, &BOB));

        assert_ok!(AccessControl::grant_roles(
            RuntimeOrigin::signed(ALICE),
            grants(vec![(second, BOB)])
        ));
        assert!(AccessControl::has_role(second, &BOB));
        assert!(!AccessControl::has_role(first, &BOB));
        assert_eq!(AccessControl::get_role_member_count(first), 0);
        assert_eq!(AccessControl::get_role_member_count(second), 1);
        System::assert_has_event(
            Event::RoleRevoked { role: first, account: BOB, sender: ALICE }.into(),
        );
        System::assert_last_event(
            Event::RoleGranted { role: second, account: BOB, sender: ALICE }.into(),
        );
    });
}

#[test]
fn grant_roles_grants_every_role() {
    ExtBuilder::default().build().execute_with(|| {
        assert_ok!(AccessControl::grant_roles(
            RuntimeOrigin::signed(ALICE),
            grants(vec![
                (Role::Unrestricted, BOB),
                (Role::Restricted, CHARLIE),
                (Role::Admin, DAVE),
                (Role::SuperAdmin, EVE),
            ])
        ));
        assert!(AccessControl::has_role(Role::Unrestricted, &BOB));
        assert!(AccessControl::has_role(Role::Restricted, &CHARLIE));
        assert!(AccessControl::has_role(Role::Admin, &DAVE));
        assert!(AccessControl::has_role(Role::SuperAdmin, &EVE));
        assert!(AccessControl::is_admin(&EVE));
    });
}

#[test]
fn grant_roles_handles_many_accounts() {
    ExtBuilder::default().build().execute_with(|| {
        let batch = (100..250).map(|account| (Role::Unrestricted, account)).collect();
        assert_ok!(AccessControl::grant_roles(RuntimeOrigin::signed(ALICE), grants(batch)));
        assert_eq!(AccessControl::get_role_member_count(Role::Unrestricted), 150);
    });
}

#[test_case(Role::Admin)]
#[test_case(Role::Restricted)]
#[test_case(Role::SuperAdmin)]
fn grant_role_fails_if_sender_is_not_admin(role: Role) {
    ExtBuilder::default().unrestricted(vec![BOB]).build().execute_with(|| {
        assert_noop!(
            AccessControl::grant_role(RuntimeOrigin::signed(BOB), role, CHARLIE),
            Error::<Runtime>::Unauthorized
        );
        assert_noop!(
            AccessControl::grant_roles(RuntimeOrigin::signed(BOB), grants(vec![(role, CHARLIE)])),
            Error::<Runtime>::Unauthorized
        );
    });
}

#[test]
fn revoke_role_works() {
    ExtBuilder::default().restricted(vec![BOB]).build().execute_with(|| {
        assert_ok!(AccessControl::revoke_role(RuntimeOrigin::signed(ALICE), Role::Restricted, BOB));
        System::assert_last_event(
            Event::RoleRevoked { role: Role::Restricted, account: BOB, sender: ALICE }.into(),
        );
        assert_eq!(AccessControl::get_roles(&BOB), [None, None, None]);
        assert!(!Roles::<Runtime>::contains_key(BOB));
        assert!(RoleMembers::<Runtime>::get(Role::Restricted).is_empty());
    });
}

#[test]
fn revoke_role_ignores_roles_not_held() {
    ExtBuilder::default().build().execute_with(|| {
        assert_ok!(AccessControl::revoke_role(RuntimeOrigin::signed(ALICE), Role::Restricted, BOB));
        assert!(System::events().is_empty());
    });
}

#[test]
fn revoke_role_fails_if_sender_is_not_admin() {
    ExtBuilder::default().build().execute_with(|| {
        assert_noop!(
            AccessControl::revoke_role(RuntimeOrigin::signed(BOB), Role::Admin, ALICE),
            Error::<Runtime>::Unauthorized
        );
    });
}

#[test]
fn renounce_role_works() {
    ExtBuilder::default().restricted(vec![BOB]).build().execute_with(|| {
        assert_ok!(AccessControl::renounce_role(RuntimeOrigin::signed(BOB), Role::Restricted, BOB));
        assert_eq!(AccessControl::get_roles(&BOB), [None, None, None]);
        System::assert_last_event(
            Event::RoleRevoked { role: Role::Restricted, account: BOB, sender: BOB }.into(),
        );
    });
}

#[test]
fn renounce_role_fails_for_other_accounts() {
    ExtBuilder::default().restricted(vec![BOB]).build().execute_with(|| {
        assert_noop!(
            AccessControl::renounce_role(RuntimeOrigin::signed(ALICE), Role::Restricted, BOB),
            Error::<Runtime>::CanOnlyRenounceForSelf
        );
    });
}

#[test]
fn last_super_admin_cannot_be_removed() {
    ExtBuilder::default().build().execute_with(|| {
        assert_noop!(
            AccessControl::renounce_role(RuntimeOrigin::signed(ALICE), Role::SuperAdmin, ALICE),
            Error::<Runtime>::LastSuperAdmin
        );
        assert_noop!(
            AccessControl::revoke_role(RuntimeOrigin::signed(ALICE), Role::SuperAdmin, ALICE),
            Error::<Runtime>::LastSuperAdmin
        );
        assert_noop!(
            AccessControl::blacklist(RuntimeOrigin::signed(ALICE), accounts(vec![ALICE])),
            Error::<Runtime>::LastSuperAdmin
        );

        assert_ok!(AccessControl::grant_role(RuntimeOrigin::signed(ALICE), Role::SuperAdmin, BOB));
        assert_ok!(AccessControl::renounce_role(
            RuntimeOrigin::signed(ALICE),
            Role::SuperAdmin,
            ALICE
        ));
        assert_eq!(AccessControl::get_role_member(Role::SuperAdmin, 0), Ok(BOB));
    });
}

#[test]
fn blacklist_strips_every_role() {
    ExtBuilder::default()
        .unrestricted(vec![BOB])
        .restricted(vec![CHARLIE])
        .admins(vec![DAVE])
        .build()
        .execute_with(|| {
            assert_ok!(AccessControl::grant_role(
                RuntimeOrigin::signed(ALICE),
                Role::SuperAdmin,
                EVE
            ));
            assert_ok!(AccessControl::blacklist(
                RuntimeOrigin::signed(ALICE),
                accounts(vec![BOB, CHARLIE, DAVE, EVE])
            ));
            for who in [BOB, CHARLIE, DAVE, EVE] {
                assert_eq!(AccessControl::get_roles(&who), [None, None, None]);
                assert!(!AccessControl::has_role(Role::SuperAdmin, &who));
                System::assert_has_event(Event::Blacklisted { account: who, sender: ALICE }.into());
            }
            assert_eq!(AccessControl::get_role_member_count(Role::SuperAdmin), 1);
            assert_eq!(AccessControl::get_role_member_count(Role::Admin), 1);
        });
}

#[test]
fn blacklist_fails_if_sender_is_not_admin() {
    ExtBuilder::default().build().execute_with(|| {
        assert_noop!(
            AccessControl::blacklist(RuntimeOrigin::signed(BOB), accounts(vec![CHARLIE])),
            Error::<Runtime>::Unauthorized
        );
    });
}

#[test]
fn get_role_member_fails_out_of_bounds() {
    ExtBuilder::default().build().execute_with(|| {
        assert_eq!(
            AccessControl::get_role_member(Role::Admin, 1),
            Err(Error::<Runtime>::RoleMemberIndexOutOfBounds.into())
        );
        assert_eq!(
            AccessControl::get_role_member(Role::Restricted, 0),
            Err(Error::<Runtime>::RoleMemberIndexOutOfBounds.into())
        );
    });
}

#[test]
fn role_members_stay_enumerable_after_removal() {
    ExtBuilder::default().restricted(vec![BOB, CHARLIE, DAVE]).build().execute_with(|| {
        assert_ok!(AccessControl::revoke_role(RuntimeOrigin::signed(ALICE), Role::Restricted, BOB));
        let count = AccessControl::get_role_member_count(Role::Restricted);
        assert_eq!(count, 2);
        let mut members: Vec<_> = (0..count)
            .map(|index| AccessControl::get_role_member(Role::Restricted, index).unwrap())
            .collect();
        members.sort();
        assert_eq!(members, vec![CHARLIE, DAVE]);
    });
}

#[test]
fn access_control_api_matches_pallet() {
    ExtBuilder::default().admins(vec![BOB]).restricted(vec![CHARLIE]).build().execute_with(|| {
        assert!(<AccessControl as AccessControlApi>::is_admin(&BOB));
        assert!(<AccessControl as AccessControlApi>::whitelisted(&CHARLIE));
        assert!(<AccessControl as AccessControlApi>::has_any_role(
            &[Role::Admin, Role::Unrestricted],
            &BOB
        ));
        assert!(!<AccessControl as AccessControlApi>::has_any_role(
            &[Role::Admin, Role::Unrestricted],
            &CHARLIE
        ));
    });
}
