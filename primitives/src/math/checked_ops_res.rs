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

//! Checked arithmetic which reports failures as `DispatchError::Arithmetic`.

use sp_arithmetic::{
    traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub},
    ArithmeticError,
};
use sp_runtime::DispatchError;

macro_rules! impl_checked_op_res {
    ($res_trait:ident, $res_fn:ident, $op_trait:ident, $op_fn:ident, $error:ident) => {
        pub trait $res_trait
        where
            Self: Sized,
        {
            fn $res_fn(&self, other: &Self) -> Result<Self, DispatchError>;
        }

        impl<T> $res_trait for T
        where
            T: $op_trait,
        {
            #[inline]
            fn $res_fn(&self, other: &Self) -> Result<Self, DispatchError> {
                self.$op_fn(other).ok_or(DispatchError::Arithmetic(ArithmeticError::$error))
            }
        }
    };
}

impl_checked_op_res!(CheckedAddRes, checked_add_res, CheckedAdd, checked_add, Overflow);
impl_checked_op_res!(CheckedSubRes, checked_sub_res, CheckedSub, checked_sub, Underflow);
impl_checked_op_res!(CheckedMulRes, checked_mul_res, CheckedMul, checked_mul, Overflow);
impl_checked_op_res!(CheckedDivRes, checked_div_res, CheckedDiv, checked_div, DivisionByZero);

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(u128::MAX, 1, Err(DispatchError::Arithmetic(ArithmeticError::Overflow)))]
    #[test_case(1, 2, Ok(3))]
    fn checked_add_res_works(a: u128, b: u128, expected: Result<u128, DispatchError>) {
        assert_eq!(a.checked_add_res(&b), expected);
    }

    #[test_case(0, 1, Err(DispatchError::Arithmetic(ArithmeticError::Underflow)))]
    #[test_case(3, 2, Ok(1))]
    fn checked_sub_res_works(a: u128, b: u128, expected: Result<u128, DispatchError>) {
        assert_eq!(a.checked_sub_res(&b), expected);
    }

    #[test_case(u128::MAX, 2, Err(DispatchError::Arithmetic(ArithmeticError::Overflow)))]
    #[test_case(3, 2, Ok(6))]
    fn checked_mul_res_works(a: u128, b: u128, expected: Result<u128, DispatchError>) {
        assert_eq!(a.checked_mul_res(&b), expected);
    }

    #[test_case(1, 0, Err(DispatchError::Arithmetic(ArithmeticError::DivisionByZero)))]
    #[test_case(7, 2, Ok(3))]
    fn checked_div_res_works(a: u128, b: u128, expected: Result<u128, DispatchError>) {
        assert_eq!(a.checked_div_res(&b), expected);
    }
}
