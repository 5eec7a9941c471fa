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

/// Asserts that two unsigned values differ by at most `$tolerance`.
///
/// Used to compare results of the fixed point math against reference values, which are only
/// correct up to rounding.
#[macro_export]
macro_rules! assert_approx {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        match (&$left, &$right, &$tolerance) {
            (left_val, right_val, tolerance_val) => {
                let diff = if *left_val > *right_val {
                    *left_val - *right_val
                } else {
                    *right_val - *left_val
                };
                if diff > *tolerance_val {
                    panic!(
                        "assertion `left approx== right` failed\n      left: {}\n     right: {}\n \
                         tolerance: {}\ndifference: {}",
                        *left_val, *right_val, *tolerance_val, diff
                    );
                }
            }
        }
    };
}

/// Logs `$message` as a warning to `$log_target` and returns `$error` unless `$condition` holds.
/// In tests, a violated condition also panics.
///
/// Meant for conditions that the surrounding code already guarantees.
#[macro_export]
macro_rules! ensure_or_warn {
    ($condition:expr, $log_target:expr, $error:expr, $message:literal $(, $message_args:expr)* $(,)?) => {
        if !$condition {
            $crate::log::warn!(target: $log_target, $message $(, $message_args)*);
            #[cfg(test)]
            panic!($message $(, $message_args)*);
            #[cfg(not(test))]
            return Err($error.into());
        }
    };
}
