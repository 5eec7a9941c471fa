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

use parity_scale_codec::{Decode, Encode, Error as CodecError, Input, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// A single right which the creator of a rights pool may reserve for its controller.
///
/// The discriminant is the index of the corresponding bit in [`Rights`].
#[derive(
    Clone, Copy, Decode, Encode, Eq, MaxEncodedLen, Ord, PartialEq, PartialOrd, RuntimeDebug, TypeInfo,
)]
pub enum Permission {
    PauseSwapping = 0,
    ChangeSwapFee = 1,
    ChangeWeights = 2,
    AddRemoveTokens = 3,
    WhitelistLps = 4,
    ChangeCap = 5,
    ChangeProtocolFee = 6,
}

impl Permission {
    pub const ALL: [Permission; 7] = [
        Permission::PauseSwapping,
        Permission::ChangeSwapFee,
        Permission::ChangeWeights,
        Permission::AddRemoveTokens,
        Permission::WhitelistLps,
        Permission::ChangeCap,
        Permission::ChangeProtocolFee,
    ];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Bitmap of [`Permission`]s. Fixed when the rights pool is created. Decoding fails on bits
/// which don't belong to a permission.
#[derive(Clone, Copy, Default, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct Rights(u8);

impl Rights {
    pub const fn none() -> Self {
        Rights(0)
    }

    pub fn all() -> Self {
        Self::from_permissions(&Permission::ALL)
    }

    pub fn from_permissions(permissions: &[Permission]) -> Self {
        permissions.iter().fold(Self::none(), |rights, permission| rights.with(*permission))
    }

    #[must_use]
    pub fn with(self, permission: Permission) -> Self {
        Rights(self.0 | permission.bit())
    }

    pub fn has(&self, permission: Permission) -> bool {
        self.0 & permission.bit() != 0
    }

    pub fn bits(&self) -> u8 {
        self.0
    }
}

impl From<u8> for Rights {
    /// Bits which don't belong to a permission are dropped.
    fn from(bits: u8) -> Self {
        let mask = Self::all().0;
        Rights(bits & mask)
    }
}

impl Decode for Rights {
    fn decode<I: Input>(input: &mut I) -> Result<Self, CodecError> {
        let bits = u8::decode(input)?;
        let rights = Rights::from(bits);
        if rights.0 != bits {
            return Err("Rights contain unknown permission bits".into());
        }
        Ok(rights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Permission::PauseSwapping, 0b0000_0001)]
    #[test_case(Permission::ChangeSwapFee, 0b0000_0010)]
    #[test_case(Permission::ChangeWeights, 0b0000_0100)]
    #[test_case(Permission::AddRemoveTokens, 0b0000_1000)]
    #[test_case(Permission::WhitelistLps, 0b0001_0000)]
    #[test_case(Permission::ChangeCap, 0b0010_0000)]
    #[test_case(Permission::ChangeProtocolFee, 0b0100_0000)]
    fn permission_maps_to_its_bit(permission: Permission, bits: u8) {
        let rights = Rights::none().with(permission);
        assert_eq!(rights.bits(), bits);
        assert!(rights.has(permission));
        assert_eq!(Permission::from_index(permission as u8), Some(permission));
    }

    #[test]
    fn from_index_rejects_unknown_bits() {
        assert_eq!(Permission::from_index(7), None);
        assert_eq!(Permission::from_index(u8::MAX), None);
    }

    #[test]
    fn from_bits_drops_unknown_bits() {
        assert_eq!(Rights::from(u8::MAX), Rights::all());
        assert_eq!(Rights::from(0b1000_0100), Rights::none().with(Permission::ChangeWeights));
    }

    #[test_case(0b1000_0000)]
    #[test_case(0b1000_0100)]
    #[test_case(u8::MAX)]
    fn decode_rejects_unknown_bits(bits: u8) {
        assert!(Rights::decode(&mut &[bits][..]).is_err());
    }

    #[test]
    fn decode_accepts_known_bits() {
        let rights = Rights::from_permissions(&[Permission::ChangeWeights, Permission::ChangeCap]);
        assert_eq!(Rights::decode(&mut &rights.encode()[..]), Ok(rights));
        assert_eq!(Rights::decode(&mut &Rights::all().encode()[..]), Ok(Rights::all()));
    }

    #[test]
    fn none_has_no_permission() {
        assert!(Permission::ALL.iter().all(|permission| !Rights::none().has(*permission)));
    }
}
