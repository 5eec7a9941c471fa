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
use fcx_primitives::constants::{MAX_BOUND_TOKENS, MAX_FEE, MIN_FEE};
use parity_scale_codec::{Decode, Encode};
use test_case::test_case;

#[test]
fn new_rights_pool_works() {
    ExtBuilder::default().build().execute_with(|| {
        let rights = Rights::from_permissions(&[Permission::ChangeWeights, Permission::ChangeCap]);
        assert_ok!(RightsPools::new_rights_pool(
            RuntimeOrigin::signed(ALICE),
            default_params(),
            rights
        ));
        System::assert_last_event(
            Event::RightsPoolCreated { crp_id: 0, controller: ALICE, rights }.into(),
        );
        assert!(RightsPools::is_rights_pool(0));
        assert!(!RightsPools::is_rights_pool(1));
        assert_eq!(NextRightsPoolId::<Runtime>::get(), 1);

        let crp = Pools::<Runtime>::get(0).unwrap();
        assert_eq!(crp.controller, ALICE);
        assert_eq!(crp.pool_id, None);
        assert_eq!(crp.cap, Balance::MAX);
        assert_eq!(crp.start_tokens.len(), 2);
        assert_eq!(
            crp.start_tokens[1],
            StartToken { asset: ASSET_B, balance: _100, weight: _5 }
        );
    });
}

#[test]
fn new_rights_pool_fails_if_sender_is_not_admin() {
    ExtBuilder::default().build().execute_with(|| {
        assert_noop!(
            RightsPools::new_rights_pool(
                RuntimeOrigin::signed(BOB),
                default_params(),
                Rights::all()
            ),
            Error::<Runtime>::NotAdmin
        );
    });
}

#[test]
fn new_rights_pool_fails_on_too_few_tokens() {
    ExtBuilder::default().build().execute_with(|| {
        let params = pool_params(vec![(ASSET_A, _100, _1)], _3_1000);
        assert_noop!(
            RightsPools::new_rights_pool(RuntimeOrigin::signed(ALICE), params, Rights::all()),
            Error::<Runtime>::MinTokens
        );
    });
}

#[test]
fn pool_params_with_too_many_tokens_fail_to_decode() {
    let n = MAX_BOUND_TOKENS as usize + 1;
    let tokens: Vec<Asset> = (0..n as u32).map(Asset::Token).collect();
    let encoded = (tokens, vec![_100; n], vec![_1; n], _3_1000, 0 as Balance).encode();
    assert!(PoolParams::decode(&mut &encoded[..]).is_err());

    let n = MAX_BOUND_TOKENS as usize;
    let tokens: Vec<Asset> = (0..n as u32).map(Asset::Token).collect();
    let encoded = (tokens, vec![_100; n], vec![_1; n], _3_1000, 0 as Balance).encode();
    let params = PoolParams::decode(&mut &encoded[..]).unwrap();
    assert_eq!(params.tokens.len(), n);
}

#[test]
fn new_rights_pool_fails_on_mismatched_balances() {
    ExtBuilder::default().build().execute_with(|| {
        let mut params = default_params();
        params.balances.pop();
        assert_noop!(
            RightsPools::new_rights_pool(RuntimeOrigin::signed(ALICE), params, Rights::all()),
            Error::<Runtime>::BalancesMismatch
        );
    });
}

#[test]
fn new_rights_pool_fails_on_mismatched_weights() {
    ExtBuilder::default().build().execute_with(|| {
        let mut params = default_params();
        params.weights.try_push(_1).unwrap();
        assert_noop!(
            RightsPools::new_rights_pool(RuntimeOrigin::signed(ALICE), params, Rights::all()),
            Error::<Runtime>::WeightsMismatch
        );
    });
}

#[test_case(MIN_FEE - 1, 0, Error::<Runtime>::MinFee)]
#[test_case(MAX_FEE + 1, 0, Error::<Runtime>::MaxFee)]
#[test_case(_1_1000, _3_1000, Error::<Runtime>::InvalidFee)]
fn new_rights_pool_fails_on_invalid_fees(
    swap_fee: Balance,
    protocol_fee: Balance,
    error: Error<Runtime>,
) {
    ExtBuilder::default().build().execute_with(|| {
        let params = PoolParams { swap_fee, protocol_fee, ..default_params() };
        assert_noop!(
            RightsPools::new_rights_pool(RuntimeOrigin::signed(ALICE), params, Rights::all()),
            error
        );
    });
}
