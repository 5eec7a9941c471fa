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

#![cfg(feature = "mock")]

use crate as fcx_access_control;
use fcx_primitives::{
    constants::mock::{BlockHashCount, MaxRoleGrants, MaxRoleMembers},
    types::{AccountIdTest, Hash},
};
use frame_support::{construct_runtime, traits::Everything};
use frame_system::mocking::MockBlock;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

pub const ALICE: AccountIdTest = 0;
pub const BOB: AccountIdTest = 1;
pub const CHARLIE: AccountIdTest = 2;
pub const DAVE: AccountIdTest = 3;
pub const EVE: AccountIdTest = 4;

construct_runtime!(
    pub enum Runtime {
        AccessControl: fcx_access_control,
        System: frame_system,
    }
);

impl crate::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type MaxRoleGrants = MaxRoleGrants;
    type MaxRoleMembers = MaxRoleMembers;
    type WeightInfo = fcx_access_control::weights::WeightInfo<Runtime>;
}

impl frame_system::Config for Runtime {
    type AccountData = ();
    type AccountId = AccountIdTest;
    type BaseCallFilter = Everything;
    type Block = MockBlock<Runtime>;
    type BlockHashCount = BlockHashCount;
    type BlockLength = ();
    type BlockWeights = ();
    type RuntimeCall = RuntimeCall;
    type RuntimeTask = RuntimeTask;
    type DbWeight = ();
    type RuntimeEvent = RuntimeEvent;
    type Hash = Hash;
    type Hashing = BlakeTwo256;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Nonce = u64;
    type MaxConsumers = frame_support::traits::ConstU32<16>;
    type MultiBlockMigrator = ();
    type OnKilledAccount = ();
    type OnNewAccount = ();
    type RuntimeOrigin = RuntimeOrigin;
    type PalletInfo = PalletInfo;
    type PreInherents = ();
    type PostInherents = ();
    type PostTransactions = ();
    type SingleBlockMigrations = ();
    type SS58Prefix = ();
    type SystemWeightInfo = ();
    type Version = ();
    type OnSetCode = ();
}

pub struct ExtBuilder {
    super_admin: AccountIdTest,
    admins: Vec<AccountIdTest>,
    restricted: Vec<AccountIdTest>,
    unrestricted: Vec<AccountIdTest>,
}

impl Default for ExtBuilder {
    fn default() -> Self {
        Self { super_admin: ALICE, admins: vec![], restricted: vec![], unrestricted: vec![] }
    }
}

impl ExtBuilder {
    pub fn admins(mut self, admins: Vec<AccountIdTest>) -> Self {
        self.admins = admins;
        self
    }

    pub fn restricted(mut self, restricted: Vec<AccountIdTest>) -> Self {
        self.restricted = restricted;
        self
    }

    pub fn unrestricted(mut self, unrestricted: Vec<AccountIdTest>) -> Self {
        self.unrestricted = unrestricted;
        self
    }

    pub fn build(self) -> sp_io::TestExternalities {
        let mut t = frame_system::GenesisConfig::<Runtime>::default().build_storage().unwrap();

        // see the logs in tests when using `RUST_LOG=debug cargo test -- --nocapture`
        let _ = env_logger::builder().is_test(true).try_init();

        fcx_access_control::GenesisConfig::<Runtime> {
            super_admin: Some(self.super_admin),
            admins: self.admins,
            restricted: self.restricted,
            unrestricted: self.unrestricted,
        }
        .assimilate_storage(&mut t)
        .unwrap();

        let mut t: sp_io::TestExternalities = t.into();

        t.execute_with(|| System::set_block_number(1));

        t
    }
}
