#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// The default precision for [`equal`].
///
/// It is small enough to keep distinct 8-bit channel values apart, since those
/// differ by at least `1/255`, and large enough to absorb the rounding noise of
/// a handful of floating point operations on unit-range quantities.
pub const DEFAULT_PRECISION: f64 = 1e-9;

/// Determine whether the two floats are equal within [`DEFAULT_PRECISION`].
///
/// ```
/// # use tinct::equal;
/// assert!(equal(1.0, 1.000_000_000_1));
/// assert!(!equal(1.0, 1.000_000_001));
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
#[inline]
pub fn equal(x: f64, y: f64) -> bool {
    equal_within(x, y, DEFAULT_PRECISION)
}

/// Determine whether the two floats differ by at most the given precision.
///
/// The result for not-a-number or infinite operands is unspecified. None of
/// this crate's conversions produce them from 8-bit inputs.
#[cfg_attr(feature = "pyffi", pyfunction)]
#[inline]
pub fn equal_within(x: f64, y: f64, precision: f64) -> bool {
    (x - y).abs() <= precision
}

// --------------------------------------------------------------------------------------------------------------------

/// The rounding factor used by [`to_eq_bits`], i.e., 10 to the number of
/// significant decimals.
const ROUNDING_FACTOR: f64 = 1e9;

/// Helper function to normalize a floating point number before equality
/// testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: f64) -> u64 {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}
