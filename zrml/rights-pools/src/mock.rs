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

use crate as fcx_rights_pools;
use fcx_primitives::{
    constants::{
        mock::{
            BlockHashCount, ExistentialDeposit, ExistentialDeposits, GetNativeCurrencyId,
            MaxLocks, MaxReserves, MaxRoleGrants, MaxRoleMembers, RightsPoolsPalletId,
            WeightedPoolsPalletId,
        },
        BASE,
    },
    types::{AccountIdTest, Amount, Asset, Balance, BasicCurrencyAdapter, CurrencyId, Hash},
};
use frame_support::{construct_runtime, parameter_types, traits::Everything};
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

pub const INITIAL_BALANCE: Balance = 1_000 * BASE;

/// Tokens with which every test account is endowed.
pub const TOKENS: [Asset; 4] = [Asset::Token(0), Asset::Token(1), Asset::Token(2), Asset::Token(3)];

parameter_types! {
    pub static ExitFee: Balance = 0;
}

construct_runtime!(
    pub enum Runtime {
        AccessControl: fcx_access_control,
        AssetManager: orml_currencies,
        Balances: pallet_balances,
        RightsPools: fcx_rights_pools,
        System: frame_system,
        Tokens: orml_tokens,
        WeightedPools: fcx_weighted_pools,
    }
);

impl crate::Config for Runtime {
    type AccessControl = AccessControl;
    type AssetManager = AssetManager;
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = AccessControl;
    type PalletId = RightsPoolsPalletId;
    type RuntimeEvent = RuntimeEvent;
    type WeightedPools = WeightedPools;
    type WeightInfo = fcx_rights_pools::weights::WeightInfo<Runtime>;
}

impl fcx_weighted_pools::Config for Runtime {
    type AccessControl = AccessControl;
    type AssetManager = AssetManager;
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = AccessControl;
    type ExitFee = ExitFee;
    type PalletId = WeightedPoolsPalletId;
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = fcx_weighted_pools::weights::WeightInfo<Runtime>;
}

impl fcx_access_control::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type MaxRoleGrants = MaxRoleGrants;
    type MaxRoleMembers = MaxRoleMembers;
    type WeightInfo = fcx_access_control::weights::WeightInfo<Runtime>;
}

impl frame_system::Config for Runtime {
    type AccountData = pallet_balances::AccountData<Balance>;
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

impl orml_currencies::Config for Runtime {
    type GetNativeCurrencyId = GetNativeCurrencyId;
    type MultiCurrency = Tokens;
    type NativeCurrency = BasicCurrencyAdapter<Runtime, Balances>;
    type WeightInfo = ();
}

impl orml_tokens::Config for Runtime {
    type Amount = Amount;
    type Balance = Balance;
    type CurrencyId = CurrencyId;
    type DustRemovalWhitelist = Everything;
    type RuntimeEvent = RuntimeEvent;
    type ExistentialDeposits = ExistentialDeposits;
    type MaxLocks = ();
    type MaxReserves = MaxReserves;
    type CurrencyHooks = ();
    type ReserveIdentifier = [u8; 8];
    type WeightInfo = ();
}

impl pallet_balances::Config for Runtime {
    type AccountStore = System;
    type Balance = Balance;
    type DustRemoval = ();
    type FreezeIdentifier = ();
    type RuntimeHoldReason = ();
    type RuntimeEvent = RuntimeEvent;
    type ExistentialDeposit = ExistentialDeposit;
    type MaxFreezes = ();
    type MaxLocks = MaxLocks;
    type MaxReserves = MaxReserves;
    type ReserveIdentifier = [u8; 8];
    type RuntimeFreezeReason = ();
    type WeightInfo = ();
}

pub struct ExtBuilder {
    accounts: Vec<AccountIdTest>,
    exit_fee: Balance,
}

impl Default for ExtBuilder {
    fn default() -> Self {
        Self { accounts: vec![ALICE, BOB, CHARLIE, DAVE, EVE], exit_fee: 0 }
    }
}

impl ExtBuilder {
    pub fn exit_fee(mut self, exit_fee: Balance) -> Self {
        self.exit_fee = exit_fee;
        self
    }

    /// `ALICE` is the super admin. `ALICE` and `BOB` are unrestricted, `DAVE` is restricted,
    /// `CHARLIE` and `EVE` hold no roles.
    pub fn build(self) -> sp_io::TestExternalities {
        let mut t = frame_system::GenesisConfig::<Runtime>::default().build_storage().unwrap();

        // see the logs in tests when using `RUST_LOG=debug cargo test -- --nocapture`
        let _ = env_logger::builder().is_test(true).try_init();

        pallet_balances::GenesisConfig::<Runtime> {
            balances: self.accounts.iter().map(|who| (*who, INITIAL_BALANCE)).collect(),
        }
        .assimilate_storage(&mut t)
        .unwrap();

        orml_tokens::GenesisConfig::<Runtime> {
            balances: self
                .accounts
                .iter()
                .flat_map(|who| TOKENS.iter().map(move |asset| (*who, *asset, INITIAL_BALANCE)))
                .collect(),
        }
        .assimilate_storage(&mut t)
        .unwrap();

        fcx_access_control::GenesisConfig::<Runtime> {
            super_admin: Some(ALICE),
            admins: vec![],
            restricted: vec![DAVE],
            unrestricted: vec![ALICE, BOB],
        }
        .assimilate_storage(&mut t)
        .unwrap();

        ExitFee::set(self.exit_fee);

        let mut t: sp_io::TestExternalities = t.into();

        t.execute_with(|| System::set_block_number(1));

        t
    }
}
