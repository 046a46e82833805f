//! Answer grading: compare an expected answer with what the student typed.
//!
//! Both sides arrive as text. The expected side decides which form applies,
//! in a fixed precedence (remainder, ratio, fraction, division expression,
//! plain numeric, exact text); the user side is then parsed against that
//! form. Unparsable or blank input is simply an incorrect answer, never an
//! error.

use tracing::debug;

use crate::numerics::reduce_ratio;
use crate::util::trunc_for_log;

/// Absolute tolerance for decimal comparison. Sized to absorb the rounding
/// the generators apply while still separating one-place-short answers.
pub const ANSWER_TOLERANCE: f64 = 1e-6;

/// Quotient/remainder connective in division answers.
pub const REMAINDER_WORD: &str = "あまり";

fn parse_int(s: &str) -> Option<i64> {
  s.trim().parse::<i64>().ok()
}

fn parse_float(s: &str) -> Option<f64> {
  let t = s.trim();
  if t.is_empty() {
    return None;
  }
  t.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `"q あまり r"`, spacing around the connective optional.
fn parse_remainder(s: &str) -> Option<(i64, i64)> {
  let (q, r) = s.trim().split_once(REMAINDER_WORD)?;
  Some((parse_int(q)?, parse_int(r)?))
}

/// `"a:b"` with both legs positive integers.
fn parse_ratio(s: &str) -> Option<(i64, i64)> {
  let (a, b) = s.trim().split_once(':')?;
  let (a, b) = (parse_int(a)?, parse_int(b)?);
  if a <= 0 || b <= 0 {
    return None;
  }
  Some((a, b))
}

/// `"n/d"` with integer parts and a nonzero denominator.
fn parse_fraction(s: &str) -> Option<(i64, i64)> {
  let (n, d) = s.trim().split_once('/')?;
  let (n, d) = (parse_int(n)?, parse_int(d)?);
  if d == 0 {
    return None;
  }
  Some((n, d))
}

/// `"x / y"` with real parts and a nonzero divisor.
fn parse_division(s: &str) -> Option<(f64, f64)> {
  let (x, y) = s.trim().split_once('/')?;
  let (x, y) = (parse_float(x)?, parse_float(y)?);
  if y == 0.0 {
    return None;
  }
  Some((x, y))
}

/// A bare real number, or a fraction/division form taken at its value.
fn numeric_value(s: &str) -> Option<f64> {
  if let Some(v) = parse_float(s) {
    return Some(v);
  }
  parse_division(s).map(|(x, y)| x / y)
}

/// True when `user` is an acceptable rendition of `expected`.
pub fn answers_match(expected: &str, user: &str) -> bool {
  let expected = expected.trim();
  let user = user.trim();
  // A blank sheet line is never accidentally equal to anything.
  if user.is_empty() {
    return false;
  }

  // Remainder pairs match exactly, no tolerance.
  if let Some(e) = parse_remainder(expected) {
    return parse_remainder(user) == Some(e);
  }

  // Ratios match when the reduced pairs coincide.
  if let Some((ea, eb)) = parse_ratio(expected) {
    return match parse_ratio(user) {
      Some((ua, ub)) => reduce_ratio(ea, eb) == reduce_ratio(ua, ub),
      None => false,
    };
  }

  // Integer fractions: exact rational equality (reduction-independent), or
  // a decimal within tolerance.
  if let Some((en, ed)) = parse_fraction(expected) {
    if let Some((un, ud)) = parse_fraction(user) {
      return en as i128 * ud as i128 == un as i128 * ed as i128;
    }
    return match parse_float(user) {
      Some(v) => (v - en as f64 / ed as f64).abs() <= ANSWER_TOLERANCE,
      None => false,
    };
  }

  // Division expressions with non-integer parts: compare quotients.
  if let Some((ex, ey)) = parse_division(expected) {
    let quotient = ex / ey;
    return match numeric_value(user) {
      Some(v) => (v - quotient).abs() <= ANSWER_TOLERANCE,
      None => false,
    };
  }

  // Plain numerics within tolerance; a fraction-form user answer is taken
  // at its decimal value.
  if let Some(ev) = parse_float(expected) {
    return match numeric_value(user) {
      Some(v) => (v - ev).abs() <= ANSWER_TOLERANCE,
      None => false,
    };
  }

  // Fallback: exact text.
  expected == user
}

/// Grade a sequence of (expected, user) pairs, returning per-pair verdicts
/// and the number correct.
pub fn grade_pairs<'a, I>(pairs: I) -> (Vec<bool>, usize)
where
  I: IntoIterator<Item = (&'a str, &'a str)>,
{
  let mut results = Vec::new();
  let mut correct = 0usize;
  for (expected, user) in pairs {
    let ok = answers_match(expected, user);
    if ok {
      correct += 1;
    } else {
      debug!(
        target: "drill",
        expected = %trunc_for_log(expected, 64),
        user = %trunc_for_log(user, 64),
        "answer graded incorrect"
      );
    }
    results.push(ok);
  }
  (results, correct)
}
