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
//
// This file incorporates work covered by the license above but
// published without copyright notice by Balancer Labs
// (<https://balancer.finance>, contact@balancer.finance) in the
// balancer-core repository
// <https://github.com/balancer-labs/balancer-core>.

//! 18-decimal fixed point arithmetic.
//!
//! All values are scaled by [`BASE`]. Products and quotients are computed with a 256-bit
//! intermediate, so they only fail if the final result does not fit into a `u128`. Results are
//! rounded down.

use crate::{
    constants::{
        BASE, BPOW_APPROX_BASE_MAX, BPOW_APPROX_BASE_MIN, BPOW_APPROX_MAX_ITERATIONS,
        BPOW_PRECISION, MAX_BPOW_EXPONENT,
    },
    math::checked_ops_res::{CheckedAddRes, CheckedDivRes, CheckedMulRes, CheckedSubRes},
};
use sp_arithmetic::{helpers_128bit::multiply_by_rational_with_rounding, ArithmeticError, Rounding};
use sp_runtime::DispatchError;

pub fn btoi(a: u128) -> Result<u128, DispatchError> {
    a.checked_div_res(&BASE)
}

pub fn bfloor(a: u128) -> Result<u128, DispatchError> {
    btoi(a)?.checked_mul_res(&BASE)
}

/// Returns `|a - b|` and whether `a - b` is negative.
pub fn bsub_sign(a: u128, b: u128) -> Result<(u128, bool), DispatchError> {
    Ok(if a >= b { (a.checked_sub_res(&b)?, false) } else { (b.checked_sub_res(&a)?, true) })
}

/// Computes `a * b / BASE`, rounding down.
pub fn bmul(a: u128, b: u128) -> Result<u128, DispatchError> {
    multiply_by_rational_with_rounding(a, b, BASE, Rounding::Down)
        .ok_or(DispatchError::Arithmetic(ArithmeticError::Overflow))
}

/// Computes `a * BASE / b`, rounding down.
///
/// # Errors
///
/// Returns `DivisionByZero` if `b` is zero and `Overflow` if the result does not fit.
pub fn bdiv(a: u128, b: u128) -> Result<u128, DispatchError> {
    if b == 0 {
        return Err(DispatchError::Arithmetic(ArithmeticError::DivisionByZero));
    }
    multiply_by_rational_with_rounding(a, BASE, b, Rounding::Down)
        .ok_or(DispatchError::Arithmetic(ArithmeticError::Overflow))
}

/// Computes `a ** n` for a fixed point `a` and an integer `n` by repeated squaring.
pub fn bpowi(a: u128, n: u128) -> Result<u128, DispatchError> {
    let mut z = if n % 2 != 0 { a } else { BASE };

    let mut b = a;
    let mut m = n.checked_div_res(&2)?;

    while m != 0 {
        b = bmul(b, b)?;

        if m % 2 != 0 {
            z = bmul(z, b)?;
        }

        m = m.checked_div_res(&2)?;
    }

    Ok(z)
}

/// Compute the power `base ** exp`.
///
/// The integral part of `exp` is handled by [`bpowi`], the fractional part by [`bpow_approx`].
///
/// # Arguments
///
/// * `base`: The base. If `exp` has a fractional part, `base` must be an element of
///   `[BASE / 4, 7 * BASE / 4]`.
/// * `exp`: The exponent, at most `MAX_BPOW_EXPONENT * BASE + BASE - 1`.
///
/// # Errors
///
/// If this function encounters an arithmetic over/underflow, or if the numerical limits
/// for `base` or `exp` (specified above) are violated, a `DispatchError` is returned.
pub fn bpow(base: u128, exp: u128) -> Result<u128, DispatchError> {
    let whole = bfloor(exp)?;
    let remain = exp.checked_sub_res(&whole)?;

    let exp_int = btoi(whole)?;
    if exp_int > MAX_BPOW_EXPONENT {
        return Err(DispatchError::Other("[bpow]: exponent too large"));
    }
    let whole_pow = bpowi(base, exp_int)?;

    if remain == 0 {
        return Ok(whole_pow);
    }

    let partial_result = bpow_approx(base, remain)?;
    bmul(whole_pow, partial_result)
}

/// Compute an estimate of the power `base ** exp`.
///
/// # Arguments
///
/// * `base`: The base, an element of `[BASE / 4, 7 * BASE / 4]`
/// * `exp`: The exponent, an element of `[0, BASE]`
///
/// # Errors
///
/// If this function encounters an arithmetic over/underflow, or if the numerical limits
/// for `base` or `exp` (specified above) are violated, a `DispatchError::Other` is
/// returned.
pub fn bpow_approx(base: u128, exp: u128) -> Result<u128, DispatchError> {
    // We use the binomial power series for this calculation. We stop adding terms to
    // the result as soon as one term is smaller than `BPOW_PRECISION`. (Thanks to the
    // limits on `base` and `exp`, this means that the total error should not exceed
    // `4 * BPOW_PRECISION`.)
    if exp > BASE {
        return Err(DispatchError::Other("[bpow_approx]: expected exp <= BASE"));
    }
    if base < BPOW_APPROX_BASE_MIN {
        return Err(DispatchError::Other("[bpow_approx]: expected base >= BASE / 4"));
    }
    if base > BPOW_APPROX_BASE_MAX {
        return Err(DispatchError::Other("[bpow_approx]: expected base <= 7 * BASE / 4"));
    }

    let a = exp;
    let (x, xneg) = bsub_sign(base, BASE)?;
    let mut term = BASE;
    let mut sum = term;
    let mut negative = false;

    // term(k) = numer / denom
    //         = (product(a - i - 1, i=1-->k) * x^k) / (k!)
    // each iteration, multiply previous term by (a-(k-1)) * x / k
    // continue until term is less than precision
    for i in 1..=BPOW_APPROX_MAX_ITERATIONS {
        if term < BPOW_PRECISION {
            break;
        }

        let big_k = i.checked_mul_res(&BASE)?;
        let (c, cneg) = bsub_sign(a, big_k.checked_sub_res(&BASE)?)?;
        term = bmul(term, bmul(c, x)?)?;
        term = bdiv(term, big_k)?;
        if term == 0 {
            break;
        }

        if xneg {
            negative = !negative;
        }
        if cneg {
            negative = !negative;
        }
        if negative {
            // Never underflows. In fact, the absolute value of the terms is strictly
            // decreasing thanks to the numerical limits.
            sum = sum.checked_sub_res(&term)?;
        } else {
            sum = sum.checked_add_res(&term)?;
        }
    }

    // If term is still large, then MAX_ITERATIONS was violated (can't happen with the current
    // limits).
    if term >= BPOW_PRECISION {
        return Err(DispatchError::Other("[bpow_approx] Maximum number of iterations exceeded"));
    }

    Ok(sum)
}

/// Method syntax for [`bmul`].
pub trait FixedMul
where
    Self: Sized,
{
    fn bmul(&self, other: Self) -> Result<Self, DispatchError>;
}

/// Method syntax for [`bdiv`].
pub trait FixedDiv
where
    Self: Sized,
{
    fn bdiv(&self, other: Self) -> Result<Self, DispatchError>;
}

impl FixedMul for u128 {
    fn bmul(&self, other: Self) -> Result<Self, DispatchError> {
        bmul(*self, other)
    }
}

impl FixedDiv for u128 {
    fn bdiv(&self, other: Self) -> Result<Self, DispatchError> {
        bdiv(*self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx;
    use test_case::test_case;

    const OVERFLOW: DispatchError = DispatchError::Arithmetic(ArithmeticError::Overflow);
    const DIV_BY_ZERO: DispatchError = DispatchError::Arithmetic(ArithmeticError::DivisionByZero);

    #[test_case(0, 3 * BASE, Ok(0))]
    #[test_case(2 * BASE, 3 * BASE, Ok(6 * BASE))]
    #[test_case(BASE / 2, 3, Ok(1); "rounds down")]
    #[test_case(1, 1, Ok(0); "dust vanishes")]
    #[test_case(u128::MAX, BASE, Ok(u128::MAX); "wide intermediate")]
    #[test_case(80_000 * BASE, 12 * BASE, Ok(960_000 * BASE); "large balances")]
    #[test_case(u128::MAX, 2 * BASE, Err(OVERFLOW))]
    fn bmul_works(a: u128, b: u128, expected: Result<u128, DispatchError>) {
        assert_eq!(bmul(a, b), expected);
        assert_eq!(a.bmul(b), expected);
    }

    #[test_case(BASE, 0, Err(DIV_BY_ZERO))]
    #[test_case(0, BASE, Ok(0))]
    #[test_case(6 * BASE, 3 * BASE, Ok(2 * BASE))]
    #[test_case(BASE, 3 * BASE, Ok(333_333_333_333_333_333); "rounds down")]
    #[test_case(2 * BASE, 3 * BASE, Ok(666_666_666_666_666_666); "rounds down again")]
    #[test_case(80_000 * BASE, 40 * BASE, Ok(2_000 * BASE); "large balances")]
    #[test_case(u128::MAX, BASE / 2, Err(OVERFLOW))]
    fn bdiv_works(a: u128, b: u128, expected: Result<u128, DispatchError>) {
        assert_eq!(bdiv(a, b), expected);
        assert_eq!(a.bdiv(b), expected);
    }

    #[test]
    fn bsub_sign_reports_sign() {
        assert_eq!(bsub_sign(5, 3), Ok((2, false)));
        assert_eq!(bsub_sign(3, 5), Ok((2, true)));
        assert_eq!(bsub_sign(3, 3), Ok((0, false)));
    }

    #[test_case(2 * BASE, 0, BASE)]
    #[test_case(2 * BASE, 1, 2 * BASE)]
    #[test_case(2 * BASE, 10, 1_024 * BASE)]
    #[test_case(BASE / 2, 2, BASE / 4)]
    fn bpowi_works(base: u128, n: u128, expected: u128) {
        assert_eq!(bpowi(base, n), Ok(expected));
    }

    #[test_case(2 * BASE, 3 * BASE, 8 * BASE; "integral exponent")]
    #[test_case(BASE / 2, 2 * BASE, BASE / 4; "integral exponent below one")]
    #[test_case(1_210_000_000_000_000_000, BASE / 2, 1_100_000_000_000_000_000; "sqrt above one")]
    #[test_case(810_000_000_000_000_000, BASE / 2, 900_000_000_000_000_000; "sqrt below one")]
    #[test_case(BASE / 2, 3 * BASE / 2, 353_553_390_593_273_762; "mixed exponent below one")]
    #[test_case(3 * BASE / 2, 5 * BASE / 2, 2_755_675_960_631_075_360; "mixed exponent above one")]
    #[test_case(3 * BASE / 4, 333_333_333_300_000_000, 908_560_296_424_782_379; "cube root")]
    #[test_case(1_700_000_000_000_000_000, 9 * BASE / 10, 1_612_144_734_874_071_805; "near max base")]
    fn bpow_approximates_power(base: u128, exp: u128, expected: u128) {
        assert_approx!(bpow(base, exp).unwrap(), expected, 1_000_000_000);
    }

    #[test_case(BASE / 5, BASE / 2; "base too small")]
    #[test_case(2 * BASE, BASE / 2; "base too large")]
    fn bpow_fails_on_base_out_of_bounds(base: u128, exp: u128) {
        assert!(matches!(bpow(base, exp), Err(DispatchError::Other(_))));
    }

    #[test]
    fn bpow_approx_rejects_exponent_above_one() {
        assert!(matches!(bpow_approx(BASE, 2 * BASE), Err(DispatchError::Other(_))));
    }

    #[test]
    fn bpow_rejects_huge_exponents() {
        assert_eq!(
            bpow(BASE, (MAX_BPOW_EXPONENT + 1) * BASE),
            Err(DispatchError::Other("[bpow]: exponent too large"))
        );
        assert_eq!(bpow(BASE, MAX_BPOW_EXPONENT * BASE), Ok(BASE));
    }
}
