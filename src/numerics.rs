//! Numeric primitives: digit-ranged random integers, gcd/lcm folds, ratio
//! reduction, and an exact always-reduced fraction type.
//!
//! Everything random here is pure over an injected `Rng`, so a seeded
//! generator replays the same values (see `sampling` / `logic`).

use std::fmt;

use rand::Rng;

/// Attempts for the bounded local resampling loops before falling back.
const RESAMPLE_ATTEMPTS: usize = 10;

/// Uniform random integer with exactly `digits` digits, i.e. in
/// `[10^(digits-1), 10^digits - 1]`. `digits` must be >= 1.
pub fn rand_int_with_digits(rng: &mut impl Rng, digits: u32) -> i64 {
  let lo = 10i64.pow(digits - 1);
  let hi = 10i64.pow(digits) - 1;
  rng.gen_range(lo..=hi)
}

/// Uniform integer in `[lo, hi]`, resampled while zero. Bounded, with
/// fallback 1 on exhaustion; a range collapsing to {0} is on the caller.
pub fn rand_nonzero(rng: &mut impl Rng, lo: i64, hi: i64) -> i64 {
  for _ in 0..RESAMPLE_ATTEMPTS {
    let x = rng.gen_range(lo..=hi);
    if x != 0 {
      return x;
    }
  }
  1
}

/// Random denominator with `digits` digits, resampled while < 2 so that a
/// proper numerator (1 <= num < den) always exists. Bounded, fallback 2.
pub fn rand_denominator(rng: &mut impl Rng, digits: u32) -> i64 {
  for _ in 0..RESAMPLE_ATTEMPTS {
    let d = rand_int_with_digits(rng, digits);
    if d >= 2 {
      return d;
    }
  }
  2
}

/// Greatest common divisor, non-negative. `gcd(0, x) = |x|`.
pub fn gcd(a: i64, b: i64) -> i64 {
  let (mut a, mut b) = (a.abs(), b.abs());
  while b != 0 {
    let t = a % b;
    a = b;
    b = t;
  }
  a
}

/// Least common multiple. `lcm(x, 0) = 0`.
pub fn lcm(a: i64, b: i64) -> i64 {
  if a == 0 || b == 0 {
    return 0;
  }
  (a * b).abs() / gcd(a, b)
}

/// Iterated gcd over a slice, folded from 0 (`gcd(0, x) = x`).
pub fn gcd_many(nums: &[i64]) -> i64 {
  nums.iter().fold(0, |acc, &n| gcd(acc, n))
}

/// Iterated lcm over a slice, folded from 1.
pub fn lcm_many(nums: &[i64]) -> i64 {
  nums.iter().fold(1, |acc, &n| lcm(acc, n))
}

/// Divide both legs of a ratio by their gcd.
pub fn reduce_ratio(a: i64, b: i64) -> (i64, i64) {
  let g = gcd(a, b).max(1);
  (a / g, b / g)
}

/// Exact rational with `denom > 0`, reduced to lowest terms on construction.
/// Derived equality is value equality because of that invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fraction {
  numer: i64,
  denom: i64,
}

impl Fraction {
  /// Build a reduced fraction. A zero denominator is the division-by-zero
  /// condition; generators resample instead of propagating it into a drill.
  pub fn new(numer: i64, denom: i64) -> Result<Self, String> {
    if denom == 0 {
      return Err("division by zero: fraction denominator is 0".to_string());
    }
    let sign = if denom < 0 { -1 } else { 1 };
    Ok(Self::reduced(numer * sign, denom * sign))
  }

  pub fn from_int(n: i64) -> Self {
    Self { numer: n, denom: 1 }
  }

  // Callers guarantee denom > 0.
  fn reduced(numer: i64, denom: i64) -> Self {
    let g = gcd(numer, denom).max(1);
    Self { numer: numer / g, denom: denom / g }
  }

  pub fn add(self, rhs: Self) -> Self {
    Self::reduced(self.numer * rhs.denom + rhs.numer * self.denom, self.denom * rhs.denom)
  }

  pub fn sub(self, rhs: Self) -> Self {
    Self::reduced(self.numer * rhs.denom - rhs.numer * self.denom, self.denom * rhs.denom)
  }

  pub fn mul(self, rhs: Self) -> Self {
    Self::reduced(self.numer * rhs.numer, self.denom * rhs.denom)
  }

  /// Exact division; a zero divisor is the division-by-zero condition.
  pub fn div(self, rhs: Self) -> Result<Self, String> {
    if rhs.numer == 0 {
      return Err("division by zero: dividing by a zero fraction".to_string());
    }
    let sign = if rhs.numer < 0 { -1 } else { 1 };
    Ok(Self::reduced(self.numer * rhs.denom * sign, self.denom * rhs.numer.abs()))
  }

  pub fn is_negative(&self) -> bool {
    self.numer < 0
  }

  /// Decimal value, for mixed fraction/decimal arithmetic.
  pub fn value(&self) -> f64 {
    self.numer as f64 / self.denom as f64
  }
}

impl fmt::Display for Fraction {
  /// Canonical text: a bare integer when the denominator is 1, else "n/d".
  /// The value is reduced at construction; formatting never reduces.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.denom == 1 {
      write!(f, "{}", self.numer)
    } else {
      write!(f, "{}/{}", self.numer, self.denom)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::SeedableRng;
  use rand_chacha::ChaCha8Rng;

  #[test]
  fn gcd_of_48_and_180_is_12() {
    assert_eq!(gcd(48, 180), 12);
    assert_eq!(gcd_many(&[48, 180]), 12);
  }

  #[test]
  fn lcm_fold_over_three_numbers() {
    assert_eq!(lcm_many(&[4, 6, 8]), 24);
    assert_eq!(lcm(4, 6), 12);
  }

  #[test]
  fn gcd_edge_values() {
    assert_eq!(gcd(0, 7), 7);
    assert_eq!(gcd(7, 0), 7);
    assert_eq!(gcd(-12, 18), 6);
    assert_eq!(gcd_many(&[]), 0);
    assert_eq!(lcm_many(&[]), 1);
  }

  #[test]
  fn ratio_reduction() {
    assert_eq!(reduce_ratio(12, 18), (2, 3));
    assert_eq!(reduce_ratio(7, 5), (7, 5));
    assert_eq!(reduce_ratio(30, 30), (1, 1));
  }

  #[test]
  fn fractions_are_reduced_on_construction() {
    let f = Fraction::new(2, 4).expect("valid fraction");
    assert_eq!(f, Fraction::new(1, 2).expect("valid fraction"));
    assert_eq!(f.to_string(), "1/2");
    let g = Fraction::new(3, -9).expect("valid fraction");
    assert_eq!(g.to_string(), "-1/3");
    assert!(g.is_negative());
  }

  #[test]
  fn fraction_zero_denominator_is_an_error() {
    assert!(Fraction::new(1, 0).is_err());
  }

  #[test]
  fn fraction_arithmetic_is_exact() {
    let half = Fraction::new(1, 2).expect("valid");
    let third = Fraction::new(1, 3).expect("valid");
    assert_eq!(half.add(third), Fraction::new(5, 6).expect("valid"));
    assert_eq!(half.sub(third), Fraction::new(1, 6).expect("valid"));
    assert_eq!(half.mul(third), Fraction::new(1, 6).expect("valid"));
    assert_eq!(half.div(third).expect("nonzero divisor"), Fraction::new(3, 2).expect("valid"));
  }

  #[test]
  fn fraction_division_by_zero_fraction_is_an_error() {
    let half = Fraction::new(1, 2).expect("valid");
    assert!(half.div(Fraction::from_int(0)).is_err());
  }

  #[test]
  fn fraction_display_uses_integer_form_for_denominator_one() {
    assert_eq!(Fraction::new(6, 3).expect("valid").to_string(), "2");
    assert_eq!(Fraction::new(5, 6).expect("valid").to_string(), "5/6");
    assert_eq!(Fraction::new(-1, 6).expect("valid").to_string(), "-1/6");
  }

  #[test]
  fn digit_ranged_integers_stay_in_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for _ in 0..200 {
      let n = rand_int_with_digits(&mut rng, 3);
      assert!((100..=999).contains(&n));
      let one = rand_int_with_digits(&mut rng, 1);
      assert!((1..=9).contains(&one));
    }
  }

  #[test]
  fn rand_nonzero_never_returns_zero() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    for _ in 0..200 {
      assert_ne!(rand_nonzero(&mut rng, -3, 3), 0);
    }
  }

  #[test]
  fn rand_denominator_is_at_least_two() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..200 {
      assert!(rand_denominator(&mut rng, 1) >= 2);
      assert!(rand_denominator(&mut rng, 2) >= 10);
    }
  }
}
