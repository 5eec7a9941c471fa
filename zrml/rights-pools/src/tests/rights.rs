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

use super::*;
use test_case::test_case;

type CallOf = fn(AccountIdTest, PoolId) -> DispatchResult;

fn set_public_swap(who: AccountIdTest, crp_id: PoolId) -> DispatchResult {
    RightsPools::set_public_swap(RuntimeOrigin::signed(who), crp_id, false)
}

fn set_swap_fee(who: AccountIdTest, crp_id: PoolId) -> DispatchResult {
    RightsPools::set_swap_fee(RuntimeOrigin::signed(who), crp_id, _1_100)
}

fn update_weight(who: AccountIdTest, crp_id: PoolId) -> DispatchResult {
    RightsPools::update_weight(RuntimeOrigin::signed(who), crp_id, ASSET_A, _10)
}

fn update_weights_gradually(who: AccountIdTest, crp_id: PoolId) -> DispatchResult {
    RightsPools::update_weights_gradually(
        RuntimeOrigin::signed(who),
        crp_id,
        vec![_10, _5],
        1,
        100,
    )
}

fn commit_add_token(who: AccountIdTest, crp_id: PoolId) -> DispatchResult {
    RightsPools::commit_add_token(RuntimeOrigin::signed(who), crp_id, ASSET_C, _100, _5)
}

fn apply_add_token(who: AccountIdTest, crp_id: PoolId) -> DispatchResult {
    RightsPools::apply_add_token(RuntimeOrigin::signed(who), crp_id)
}

fn remove_token(who: AccountIdTest, crp_id: PoolId) -> DispatchResult {
    RightsPools::remove_token(RuntimeOrigin::signed(who), crp_id, ASSET_A)
}

fn whitelist_liquidity_provider(who: AccountIdTest, crp_id: PoolId) -> DispatchResult {
    RightsPools::whitelist_liquidity_provider(RuntimeOrigin::signed(who), crp_id, BOB)
}

fn remove_whitelisted_liquidity_provider(who: AccountIdTest, crp_id: PoolId) -> DispatchResult {
    RightsPools::remove_whitelisted_liquidity_provider(RuntimeOrigin::signed(who), crp_id, BOB)
}

fn set_cap(who: AccountIdTest, crp_id: PoolId) -> DispatchResult {
    RightsPools::set_cap(RuntimeOrigin::signed(who), crp_id, _200)
}

fn set_protocol_fee(who: AccountIdTest, crp_id: PoolId) -> DispatchResult {
    RightsPools::set_protocol_fee(RuntimeOrigin::signed(who), crp_id, _1_1000)
}

#[test_case(set_public_swap, Permission::PauseSwapping, Error::<Runtime>::NotPausableSwap)]
#[test_case(set_swap_fee, Permission::ChangeSwapFee, Error::<Runtime>::NotConfigurableSwapFee)]
#[test_case(update_weight, Permission::ChangeWeights, Error::<Runtime>::NotConfigurableWeights)]
#[test_case(
    update_weights_gradually,
    Permission::ChangeWeights,
    Error::<Runtime>::NotConfigurableWeights
)]
#[test_case(commit_add_token, Permission::AddRemoveTokens, Error::<Runtime>::CannotAddRemoveTokens)]
#[test_case(apply_add_token, Permission::AddRemoveTokens, Error::<Runtime>::CannotAddRemoveTokens)]
#[test_case(remove_token, Permission::AddRemoveTokens, Error::<Runtime>::CannotAddRemoveTokens)]
#[test_case(
    whitelist_liquidity_provider,
    Permission::WhitelistLps,
    Error::<Runtime>::NotPermittedToWhitelist
)]
#[test_case(
    remove_whitelisted_liquidity_provider,
    Permission::WhitelistLps,
    Error::<Runtime>::NotPermittedToWhitelist
)]
#[test_case(set_cap, Permission::ChangeCap, Error::<Runtime>::NotConfigurableCap)]
#[test_case(
    set_protocol_fee,
    Permission::ChangeProtocolFee,
    Error::<Runtime>::NotConfigurableProtocolFee
)]
fn missing_right_is_checked_before_controller(
    call: CallOf,
    permission: Permission,
    error: Error<Runtime>,
) {
    ExtBuilder::default().build().execute_with(|| {
        let rights = Permission::ALL
            .iter()
            .filter(|p| **p != permission)
            .fold(Rights::none(), |rights, p| rights.with(*p));
        let crp_id = create_rights_pool(rights);
        assert_noop!(call(ALICE, crp_id), error);
        assert_noop!(call(BOB, crp_id), error);
    });
}

#[test_case(set_public_swap)]
#[test_case(set_swap_fee)]
#[test_case(update_weight)]
#[test_case(update_weights_gradually)]
#[test_case(commit_add_token)]
#[test_case(apply_add_token)]
#[test_case(remove_token)]
#[test_case(whitelist_liquidity_provider)]
#[test_case(remove_whitelisted_liquidity_provider)]
#[test_case(set_cap)]
#[test_case(set_protocol_fee)]
fn granted_right_requires_controller(call: CallOf) {
    ExtBuilder::default().build().execute_with(|| {
        let crp_id = create_rights_pool(Rights::all());
        assert_noop!(call(BOB, crp_id), Error::<Runtime>::NotController);
    });
}

#[test]
fn update_weight_fails_without_weight_right() {
    ExtBuilder::default().build().execute_with(|| {
        let crp_id = create_rights_pool(Rights::none().with(Permission::ChangeSwapFee));
        assert_noop!(
            RightsPools::update_weight(RuntimeOrigin::signed(ALICE), crp_id, ASSET_A, _10),
            Error::<Runtime>::NotConfigurableWeights
        );
    });
}

#[test]
fn administrative_calls_fail_before_pool_is_created() {
    ExtBuilder::default().build().execute_with(|| {
        let crp_id = new_rights_pool(default_params(), Rights::all());
        assert_noop!(set_swap_fee(ALICE, crp_id), Error::<Runtime>::PoolNotCreated);
        assert_noop!(update_weight(ALICE, crp_id), Error::<Runtime>::PoolNotCreated);
        assert_noop!(set_cap(ALICE, crp_id), Error::<Runtime>::PoolNotCreated);
        assert_noop!(
            RightsPools::join_pool(RuntimeOrigin::signed(BOB), crp_id, _1, vec![_1, _1]),
            Error::<Runtime>::PoolNotCreated
        );
    });
}

#[test]
fn has_permission_works() {
    ExtBuilder::default().build().execute_with(|| {
        let crp_id = new_rights_pool(
            default_params(),
            Rights::from_permissions(&[Permission::ChangeSwapFee, Permission::ChangeCap]),
        );
        assert_eq!(RightsPools::has_permission(crp_id, 0), Ok(false));
        assert_eq!(RightsPools::has_permission(crp_id, 1), Ok(true));
        assert_eq!(RightsPools::has_permission(crp_id, 5), Ok(true));
        assert_eq!(RightsPools::has_permission(crp_id, 6), Ok(false));
        assert_eq!(
            RightsPools::has_permission(crp_id, 7),
            Err(Error::<Runtime>::InvalidPermission.into())
        );
        assert_eq!(
            RightsPools::has_permission(crp_id + 1, 0),
            Err(Error::<Runtime>::RightsPoolNotFound.into())
        );
    });
}

#[test]
fn set_controller_works() {
    ExtBuilder::default().build().execute_with(|| {
        let crp_id = create_rights_pool(Rights::all());
        assert_ok!(RightsPools::set_controller(RuntimeOrigin::signed(ALICE), crp_id, BOB));
        System::assert_last_event(Event::ControllerChanged { crp_id, controller: BOB }.into());
        assert_noop!(set_swap_fee(ALICE, crp_id), Error::<Runtime>::NotController);
        assert_ok!(set_swap_fee(BOB, crp_id));
    });
}

#[test]
fn set_controller_fails_if_sender_is_not_controller() {
    ExtBuilder::default().build().execute_with(|| {
        let crp_id = create_rights_pool(Rights::all());
        assert_noop!(
            RightsPools::set_controller(RuntimeOrigin::signed(BOB), crp_id, BOB),
            Error::<Runtime>::NotController
        );
    });
}

#[test]
fn set_roles_works_without_rights() {
    ExtBuilder::default().build().execute_with(|| {
        let crp_id = create_rights_pool(Rights::none());
        let roles = vec![Role::Unrestricted];
        assert_ok!(RightsPools::set_roles(RuntimeOrigin::signed(ALICE), crp_id, roles.clone()));
        System::assert_last_event(Event::RolesChanged { crp_id, roles: roles.clone() }.into());
        let pool = fcx_weighted_pools::Pools::<Runtime>::get(underlying(crp_id)).unwrap();
        assert_eq!(pool.roles.to_vec(), roles);

        // `DAVE` is restricted and may no longer swap.
        assert_noop!(
            WeightedPools::swap_exact_amount_in(
                RuntimeOrigin::signed(DAVE),
                underlying(crp_id),
                ASSET_A,
                _1,
                ASSET_B,
                0,
                _2,
            ),
            fcx_weighted_pools::Error::<Runtime>::RolesMismatch
        );
    });
}

#[test]
fn set_roles_fails_if_sender_is_not_controller() {
    ExtBuilder::default().build().execute_with(|| {
        let crp_id = create_rights_pool(Rights::all());
        assert_noop!(
            RightsPools::set_roles(RuntimeOrigin::signed(BOB), crp_id, vec![Role::Admin]),
            Error::<Runtime>::NotController
        );
    });
}
