use num_bigint::BigUint;

/// Working precision of the integer square root: twice the f64 mantissa width
/// plus three guard bits, enough for one round-to-odd step before the final
/// rounding to f64.
const SQRT_PRECISION_BITS: i64 = 2 * f64::MANTISSA_DIGITS as i64 + 3;

/// Exact sums over a sample of at least two non-negative integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleStats {
    count: u128,
    sum: u128,
    sum_of_squares: u128,
}

impl SampleStats {
    /// Returns `None` for fewer than two samples.
    pub fn compute(data: &[usize]) -> Option<SampleStats> {
        if data.len() < 2 {
            return None;
        }
        let (sum, sum_of_squares) = data.iter().fold((0u128, 0u128), |(sum, squares), value| {
            let value = *value as u128;
            (sum + value, squares + value * value)
        });

        Some(SampleStats {
            count: data.len() as u128,
            sum,
            sum_of_squares,
        })
    }

    /// Bessel-corrected variance as an exact fraction `(numerator, denominator)`:
    /// `(n * Σx² - (Σx)²) / (n * (n - 1))`.
    pub fn variance(&self) -> (BigUint, BigUint) {
        let count = BigUint::from(self.count);
        let sum = BigUint::from(self.sum);
        let numerator = &count * BigUint::from(self.sum_of_squares) - &sum * &sum;
        let denominator = &count * BigUint::from(self.count - 1);
        (numerator, denominator)
    }

    /// Sample standard deviation, correctly rounded to the nearest f64.
    pub fn std_dev(&self) -> f64 {
        let (numerator, denominator) = self.variance();
        sqrt_of_ratio(&numerator, &denominator)
    }
}

/// Square root of `numerator / denominator` with a single rounding to f64.
fn sqrt_of_ratio(numerator: &BigUint, denominator: &BigUint) -> f64 {
    if numerator.bits() == 0 {
        return 0.0;
    }
    // scale the ratio by 4^-shift so its root carries ~55 significant bits
    let shift = (numerator.bits() as i64 - denominator.bits() as i64 - SQRT_PRECISION_BITS)
        .div_euclid(2);
    let root = if shift >= 0 {
        isqrt_round_to_odd(numerator, &(denominator << (2 * shift) as usize))
    } else {
        isqrt_round_to_odd(&(numerator << (-2 * shift) as usize), denominator)
    };
    let root = u64::try_from(&root).expect("scaled root has at most 56 bits");
    root as f64 * 2f64.powi(shift as i32)
}

/// `isqrt(numerator / denominator)`, with the low bit set when inexact.
fn isqrt_round_to_odd(numerator: &BigUint, denominator: &BigUint) -> BigUint {
    let root = (numerator / denominator).sqrt();
    if &(&root * &root) * denominator == *numerator {
        root
    } else {
        root | BigUint::from(1u8)
    }
}
