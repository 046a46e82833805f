//! Problem generators, one function per topic family.
//!
//! Every generator is pure over the injected `Rng`: the same generator state
//! always yields the same problem, which is what makes seeded drill batches
//! reproducible. Infix questions end with " ="; word problems are full
//! sentences. Division-style degeneracies are ruled out locally (operand
//! construction or bounded resampling); answer-level screening such as the
//! negative-result rejection lives in `sampling`.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::curriculum::{GeneratorKind, PercentMode};
use crate::domain::{Answer, Problem};
use crate::numerics::{
  gcd_many, lcm_many, rand_denominator, rand_int_with_digits, rand_nonzero, reduce_ratio, Fraction,
};
use crate::util::round_to;

/// Generate one problem for a curriculum binding.
pub fn generate(kind: &GeneratorKind, rng: &mut impl Rng) -> Problem {
  match *kind {
    GeneratorKind::SumDiff { digits, terms } => sum_diff(rng, digits, terms),
    GeneratorKind::Multiply { a_digits, b_digits } => multiply(rng, a_digits, b_digits),
    GeneratorKind::DivRemainder { lo, hi } => div_remainder(rng, lo, hi),
    GeneratorKind::LargeSumDiff { digits } => large_sum_diff(rng, digits),
    GeneratorKind::DecimalAddSub { places } => decimal_add_sub(rng, places),
    GeneratorKind::DecimalMulDiv { places } => decimal_mul_div(rng, places),
    GeneratorKind::DecimalMixed { places, terms } => decimal_mixed(rng, places, terms),
    GeneratorKind::GcdQuery { lo, hi, counts } => gcd_query(rng, lo, hi, counts),
    GeneratorKind::LcmQuery { lo, hi, counts } => lcm_query(rng, lo, hi, counts),
    GeneratorKind::FractionAddSub { den_digits, terms } => fraction_add_sub(rng, den_digits, terms),
    GeneratorKind::FractionStory { den_digits, terms } => fraction_story(rng, den_digits, terms),
    GeneratorKind::FractionMixedOps { terms } => fraction_mixed_ops(rng, terms),
    GeneratorKind::FractionDecimalProduct => fraction_decimal_product(rng),
    GeneratorKind::Percent { mode } => percent(rng, mode),
    GeneratorKind::RatioScale => ratio_scale(rng),
    GeneratorKind::RatioReduce => ratio_reduce(rng),
    GeneratorKind::FracDecimalCombo => frac_decimal_combo(rng),
    GeneratorKind::InverseOp => inverse_op(rng),
    GeneratorKind::Proportion { solve_for_k } => proportion(rng, solve_for_k),
  }
}

/// `terms` integers of `digits` digits joined by random +/-, accumulated
/// left to right.
pub fn sum_diff(rng: &mut impl Rng, digits: u32, terms: usize) -> Problem {
  let nums: Vec<i64> = (0..terms).map(|_| rand_int_with_digits(rng, digits)).collect();
  let ops = ['+', '-'];
  let mut expr = nums[0].to_string();
  let mut val = nums[0];
  for &n in &nums[1..] {
    let op = *ops.choose(rng).unwrap_or(&'+');
    if op == '+' {
      val += n;
    } else {
      val -= n;
    }
    expr.push_str(&format!(" {} {}", op, n));
  }
  Problem::new(format!("{} =", expr), Answer::Integer(val))
}

/// Column multiplication with factor widths in digits.
pub fn multiply(rng: &mut impl Rng, a_digits: u32, b_digits: u32) -> Problem {
  let a = rand_int_with_digits(rng, a_digits);
  let b = rand_int_with_digits(rng, b_digits);
  Problem::new(format!("{} × {} =", a, b), Answer::Integer(a * b))
}

/// Dividend in `[lo, hi]` (lo >= 2), divisor in 2..=9 capped by the
/// dividend. An exact division is bumped to a nonzero remainder by
/// resampling r in [1, divisor-1] and recomputing the dividend, so the
/// answer always carries a real remainder.
pub fn div_remainder(rng: &mut impl Rng, lo: i64, hi: i64) -> Problem {
  let mut a = rng.gen_range(lo..=hi);
  let b = rand_nonzero(rng, 2, a.min(9).max(2));
  let q = a / b;
  let mut r = a % b;
  if r == 0 {
    r = rng.gen_range(1..b);
    a = q * b + r;
  }
  Problem::new(
    format!("{} ÷ {} =", a, b),
    Answer::Remainder { quotient: q, remainder: r },
  )
}

/// Two same-width terms joined by a random +/-.
pub fn large_sum_diff(rng: &mut impl Rng, digits: u32) -> Problem {
  let a = rand_int_with_digits(rng, digits);
  let b = rand_int_with_digits(rng, digits);
  let ops = ['+', '-'];
  let op = *ops.choose(rng).unwrap_or(&'+');
  let val = if op == '+' { a + b } else { a - b };
  Problem::new(format!("{} {} {} =", a, op, b), Answer::Integer(val))
}

fn rand_decimal(rng: &mut impl Rng, lo: f64, hi: f64, places: u32) -> f64 {
  round_to(rng.gen_range(lo..hi), places)
}

/// Decimal + or -. Operands in [1, 100) at `places`; the result keeps one
/// extra place for safety against carry.
pub fn decimal_add_sub(rng: &mut impl Rng, places: u32) -> Problem {
  let a = rand_decimal(rng, 1.0, 100.0, places);
  let b = rand_decimal(rng, 1.0, 100.0, places);
  let ops = ['+', '-'];
  let op = *ops.choose(rng).unwrap_or(&'+');
  let val = round_to(if op == '+' { a + b } else { a - b }, places + 1);
  Problem::new(
    format!("{:.*} {} {:.*} =", places as usize, a, op, places as usize, b),
    Answer::Decimal { value: val, scale: places + 1 },
  )
}

/// Decimal x or /. Operands in [0.5, 50) at `places`; a divisor that lands
/// on exactly zero is resampled once. The result keeps two extra places.
pub fn decimal_mul_div(rng: &mut impl Rng, places: u32) -> Problem {
  let a = rand_decimal(rng, 0.5, 50.0, places);
  let mut b = rand_decimal(rng, 0.5, 50.0, places);
  let ops = ['×', '÷'];
  let op = *ops.choose(rng).unwrap_or(&'×');
  let val = if op == '×' {
    a * b
  } else {
    if b == 0.0 {
      b = rand_decimal(rng, 0.5, 50.0, places);
    }
    a / b
  };
  let val = round_to(val, places + 2);
  Problem::new(
    format!("{:.*} {} {:.*} =", places as usize, a, op, places as usize, b),
    Answer::Decimal { value: val, scale: places + 2 },
  )
}

/// Left-to-right chain of `terms` decimal operands over random + - x /.
pub fn decimal_mixed(rng: &mut impl Rng, places: u32, terms: usize) -> Problem {
  let ops = ['+', '-', '×', '÷'];
  let mut val = rand_decimal(rng, 0.5, 50.0, places);
  let mut expr = format!("{:.*}", places as usize, val);
  for _ in 1..terms {
    let mut n = rand_decimal(rng, 0.5, 50.0, places);
    let op = *ops.choose(rng).unwrap_or(&'+');
    match op {
      '+' => val += n,
      '-' => val -= n,
      '×' => val *= n,
      _ => {
        if n == 0.0 {
          n = rand_decimal(rng, 0.5, 50.0, places);
        }
        val /= n;
      }
    }
    expr.push_str(&format!(" {} {:.*}", op, places as usize, n));
  }
  let val = round_to(val, places + 2);
  Problem::new(format!("{} =", expr), Answer::Decimal { value: val, scale: places + 2 })
}

fn join_nums(nums: &[i64]) -> String {
  nums.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(", ")
}

/// "Find the greatest common divisor" over a few numbers in `[lo, hi]`.
pub fn gcd_query(rng: &mut impl Rng, lo: i64, hi: i64, counts: &[usize]) -> Problem {
  let count = *counts.choose(rng).unwrap_or(&2);
  let nums: Vec<i64> = (0..count).map(|_| rng.gen_range(lo..=hi)).collect();
  let g = gcd_many(&nums);
  Problem::new(
    format!("次の数の最大公約数を求めよ: {}", join_nums(&nums)),
    Answer::Integer(g),
  )
}

/// "Find the least common multiple" over a few numbers in `[lo, hi]`.
pub fn lcm_query(rng: &mut impl Rng, lo: i64, hi: i64, counts: &[usize]) -> Problem {
  let count = *counts.choose(rng).unwrap_or(&2);
  let nums: Vec<i64> = (0..count).map(|_| rng.gen_range(lo..=hi)).collect();
  let m = lcm_many(&nums);
  Problem::new(
    format!("次の数の最小公倍数を求めよ: {}", join_nums(&nums)),
    Answer::Integer(m),
  )
}

/// Proper fraction with a `digits`-wide denominator and 1 <= num < den.
/// Construction cannot fail (den >= 2 by `rand_denominator`).
fn rand_proper_fraction(rng: &mut impl Rng, den_digits: u32) -> Fraction {
  let den = rand_denominator(rng, den_digits);
  let num = rng.gen_range(1..den);
  Fraction::new(num, den).unwrap_or_else(|_| Fraction::from_int(1))
}

/// Proper fraction with denominator in 2..=12 (mixed-arithmetic menu).
fn rand_small_fraction(rng: &mut impl Rng) -> Fraction {
  let den = rng.gen_range(2..=12);
  let num = rng.gen_range(1..den);
  Fraction::new(num, den).unwrap_or_else(|_| Fraction::from_int(1))
}

/// `terms` proper fractions joined by random +/-, folded exactly.
pub fn fraction_add_sub(rng: &mut impl Rng, den_digits: u32, terms: usize) -> Problem {
  let fractions: Vec<Fraction> = (0..terms).map(|_| rand_proper_fraction(rng, den_digits)).collect();
  let ops = ['+', '-'];
  let mut val = fractions[0];
  let mut expr = fractions[0].to_string();
  for &fr in &fractions[1..] {
    let op = *ops.choose(rng).unwrap_or(&'+');
    val = if op == '+' { val.add(fr) } else { val.sub(fr) };
    expr.push_str(&format!(" {} {}", op, fr));
  }
  Problem::new(format!("{} =", expr), Answer::Fraction(val))
}

/// Fraction sum wrapped in a word-problem sentence (G4 L5).
pub fn fraction_story(rng: &mut impl Rng, den_digits: u32, terms: usize) -> Problem {
  let base = fraction_add_sub(rng, den_digits, terms);
  let expr = base.question.trim_end_matches(" =").to_string();
  Problem::new(format!("りんごの重さは {} とします。合計の重さは？", expr), base.answer)
}

/// `terms` proper fractions over random + - x /, folded exactly. Operands
/// are nonzero by construction, so / never hits the zero-divisor condition.
pub fn fraction_mixed_ops(rng: &mut impl Rng, terms: usize) -> Problem {
  let ops = ['+', '-', '×', '÷'];
  let fractions: Vec<Fraction> = (0..terms).map(|_| rand_small_fraction(rng)).collect();
  let mut val = fractions[0];
  let mut expr = fractions[0].to_string();
  for &fr in &fractions[1..] {
    let op = *ops.choose(rng).unwrap_or(&'+');
    val = match op {
      '+' => val.add(fr),
      '-' => val.sub(fr),
      '×' => val.mul(fr),
      _ => val.div(fr).unwrap_or(val),
    };
    expr.push_str(&format!(" {} {}", op, fr));
  }
  Problem::new(format!("{} =", expr), Answer::Fraction(val))
}

/// Coin flip: decimal x fraction (decimal answer, 3 places) or fraction x
/// fraction (exact reduced product).
pub fn fraction_decimal_product(rng: &mut impl Rng) -> Problem {
  if rng.gen_bool(0.5) {
    let a = rand_decimal(rng, 0.1, 9.9, 1);
    let fr = rand_small_fraction(rng);
    let val = round_to(a * fr.value(), 3);
    Problem::new(format!("{:.1} × {} =", a, fr), Answer::Decimal { value: val, scale: 3 })
  } else {
    let f1 = rand_small_fraction(rng);
    let f2 = rand_small_fraction(rng);
    Problem::new(format!("{} × {} =", f1, f2), Answer::Fraction(f1.mul(f2)))
  }
}

const PERCENT_MENU: [i64; 8] = [5, 10, 12, 20, 25, 30, 40, 50];
const PERCENT_REVERSE_MENU: [i64; 5] = [120, 150, 80, 75, 200];
const PERCENT_CHAIN_MENU: [i64; 3] = [10, 20, 25];

/// Percentage drills. Basic asks for p% of a base or a single increase or
/// decrease; Reverse recovers the base; Chain applies an increase followed
/// by a decrease.
pub fn percent(rng: &mut impl Rng, mode: PercentMode) -> Problem {
  match mode {
    PercentMode::Basic => {
      let base = rng.gen_range(50..=500i64);
      let p = *PERCENT_MENU.choose(rng).unwrap_or(&10);
      let kind = *["of", "up", "down"].choose(rng).unwrap_or(&"of");
      match kind {
        "of" => Problem::new(
          format!("{} の {}% は？", base, p),
          Answer::Decimal { value: base as f64 * p as f64 / 100.0, scale: 2 },
        ),
        "up" => Problem::new(
          format!("{} を {}% 増やすと？", base, p),
          Answer::Decimal { value: round_to(base as f64 * (1.0 + p as f64 / 100.0), 2), scale: 2 },
        ),
        _ => Problem::new(
          format!("{} を {}% 減らすと？", base, p),
          Answer::Decimal { value: round_to(base as f64 * (1.0 - p as f64 / 100.0), 2), scale: 2 },
        ),
      }
    }
    PercentMode::Reverse => {
      let p = *PERCENT_REVERSE_MENU.choose(rng).unwrap_or(&120);
      let y = rng.gen_range(100..=600i64);
      let x = round_to(y as f64 * 100.0 / p as f64, 2);
      Problem::new(
        format!("ある数の {}% が {}。元の数はいくつ？", p, y),
        Answer::Decimal { value: x, scale: 2 },
      )
    }
    PercentMode::Chain => {
      let base = rng.gen_range(100..=800i64);
      let p1 = *PERCENT_CHAIN_MENU.choose(rng).unwrap_or(&10);
      let p2 = *PERCENT_CHAIN_MENU.choose(rng).unwrap_or(&10);
      let val = round_to(base as f64 * (1.0 + p1 as f64 / 100.0) * (1.0 - p2 as f64 / 100.0), 2);
      Problem::new(
        format!("{} を {}%増やし、その後 {}%減らすと？", base, p1, p2),
        Answer::Decimal { value: val, scale: 2 },
      )
    }
  }
}

/// Scale a ratio by a random factor.
pub fn ratio_scale(rng: &mut impl Rng) -> Problem {
  let a = rng.gen_range(2..=30i64);
  let b = rng.gen_range(2..=30i64);
  let k = rng.gen_range(2..=9i64);
  Problem::new(
    format!("{}:{} を {}倍した比を求めよ。", a, b, k),
    Answer::Ratio(a * k, b * k),
  )
}

/// Reduce a ratio to lowest terms.
pub fn ratio_reduce(rng: &mut impl Rng) -> Problem {
  let a = rng.gen_range(2..=30i64);
  let b = rng.gen_range(2..=30i64);
  let (ra, rb) = reduce_ratio(a, b);
  Problem::new(format!("{}:{} を最も簡単な比に直せ。", a, b), Answer::Ratio(ra, rb))
}

/// Coin flip: decimal (+ - x /) fraction, or fraction (+ -) decimal. A
/// negative result is possible and left for the sampling wrapper to reject.
pub fn frac_decimal_combo(rng: &mut impl Rng) -> Problem {
  let fr = rand_small_fraction(rng);
  if rng.gen_bool(0.5) {
    let a = rand_decimal(rng, 0.1, 9.9, 1);
    let ops = ['+', '-', '×', '÷'];
    let op = *ops.choose(rng).unwrap_or(&'+');
    let val = match op {
      '+' => a + fr.value(),
      '-' => a - fr.value(),
      '×' => a * fr.value(),
      _ => a / fr.value(),
    };
    Problem::new(
      format!("{:.1} {} {} =", a, op, fr),
      Answer::Decimal { value: round_to(val, 3), scale: 3 },
    )
  } else {
    let a = rand_decimal(rng, 0.1, 9.9, 2);
    let ops = ['+', '-'];
    let op = *ops.choose(rng).unwrap_or(&'+');
    let val = if op == '+' { fr.value() + a } else { fr.value() - a };
    Problem::new(
      format!("{} {} {:.2} =", fr, op, a),
      Answer::Decimal { value: round_to(val, 3), scale: 3 },
    )
  }
}

/// Solve-the-box: `[] op a = b`, answered with the inverse operation. The
/// multiplication case answers the exact fraction b/a (an integer once
/// reduced, whenever a divides b).
pub fn inverse_op(rng: &mut impl Rng) -> Problem {
  let a = rng.gen_range(2..=20i64);
  let b = rng.gen_range(2..=20i64);
  let ops = ['+', '-', '×', '÷'];
  let op = *ops.choose(rng).unwrap_or(&'+');
  let answer = match op {
    '+' => Answer::Integer(b - a),
    '-' => Answer::Integer(b + a),
    '×' => match Fraction::new(b, a) {
      Ok(fr) => Answer::Fraction(fr),
      // a >= 2, unreachable
      Err(_) => Answer::Integer(b),
    },
    _ => Answer::Integer(b * a),
  };
  Problem::new(format!("□ {} {} = {} の □ を求めよ。", op, a, b), answer)
}

/// Direct (`y = kx`) or inverse (`xy = k`) proportion, sampled so the asked
/// value is an exact integer in both directions. Higher levels ask for the
/// constant k instead of a coordinate.
pub fn proportion(rng: &mut impl Rng, solve_for_k: bool) -> Problem {
  if rng.gen_bool(0.5) {
    let k = rng.gen_range(1..=9i64);
    let x = rng.gen_range(2..=20i64);
    let y = k * x;
    if solve_for_k {
      Problem::new(
        format!("y = kx。x={} のとき y={}。k を求めよ。", x, y),
        Answer::Integer(k),
      )
    } else {
      Problem::new(format!("y = {}x。x={} のとき y は？", k, x), Answer::Integer(y))
    }
  } else {
    let x = rng.gen_range(2..=20i64);
    let y = rng.gen_range(2..=20i64);
    let k = x * y;
    if solve_for_k {
      Problem::new(
        format!("xy = k。x={} のとき y={}。k を求めよ。", x, y),
        Answer::Integer(k),
      )
    } else {
      Problem::new(format!("xy = {}。x={} のとき y は？", k, x), Answer::Integer(y))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::SeedableRng;
  use rand_chacha::ChaCha8Rng;

  fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
  }

  fn infix_tokens(question: &str) -> Vec<String> {
    question
      .trim_end_matches(" =")
      .split_whitespace()
      .map(|t| t.to_string())
      .collect()
  }

  #[test]
  fn sum_diff_question_matches_its_answer() {
    let mut rng = rng(11);
    for _ in 0..100 {
      let p = sum_diff(&mut rng, 2, 3);
      let tokens = infix_tokens(&p.question);
      assert_eq!(tokens.len(), 5);
      let mut val: i64 = tokens[0].parse().expect("first operand");
      for pair in tokens[1..].chunks(2) {
        let n: i64 = pair[1].parse().expect("operand");
        match pair[0].as_str() {
          "+" => val += n,
          "-" => val -= n,
          other => panic!("unexpected operator {other}"),
        }
        assert!((10..=99).contains(&n));
      }
      assert_eq!(p.answer, Answer::Integer(val));
    }
  }

  #[test]
  fn multiply_question_matches_its_answer() {
    let mut rng = rng(12);
    for _ in 0..100 {
      let p = multiply(&mut rng, 3, 2);
      let tokens = infix_tokens(&p.question);
      assert_eq!(tokens[1], "×");
      let a: i64 = tokens[0].parse().expect("a");
      let b: i64 = tokens[2].parse().expect("b");
      assert!((100..=999).contains(&a));
      assert!((10..=99).contains(&b));
      assert_eq!(p.answer, Answer::Integer(a * b));
    }
  }

  #[test]
  fn div_remainder_keeps_its_invariants() {
    let mut rng = rng(13);
    for _ in 0..300 {
      let p = div_remainder(&mut rng, 10, 200);
      let tokens = infix_tokens(&p.question);
      assert_eq!(tokens[1], "÷");
      let a: i64 = tokens[0].parse().expect("dividend");
      let b: i64 = tokens[2].parse().expect("divisor");
      match p.answer {
        Answer::Remainder { quotient, remainder } => {
          assert!(quotient >= 1);
          assert!(remainder >= 1 && remainder < b, "remainder {} for divisor {}", remainder, b);
          assert_eq!(a, quotient * b + remainder);
          assert!((2..=9).contains(&b));
        }
        other => panic!("expected remainder answer, got {other:?}"),
      }
    }
  }

  #[test]
  fn decimal_add_sub_recomputes_from_the_question() {
    let mut rng = rng(14);
    for _ in 0..200 {
      let p = decimal_add_sub(&mut rng, 2);
      let tokens = infix_tokens(&p.question);
      let a: f64 = tokens[0].parse().expect("a");
      let b: f64 = tokens[2].parse().expect("b");
      let expected = round_to(if tokens[1] == "+" { a + b } else { a - b }, 3);
      match p.answer {
        Answer::Decimal { value, scale } => {
          assert_eq!(scale, 3);
          assert!((value - expected).abs() < 1e-9);
        }
        other => panic!("expected decimal answer, got {other:?}"),
      }
    }
  }

  #[test]
  fn decimal_mul_div_recomputes_from_the_question() {
    let mut rng = rng(15);
    for _ in 0..200 {
      let p = decimal_mul_div(&mut rng, 1);
      let tokens = infix_tokens(&p.question);
      let a: f64 = tokens[0].parse().expect("a");
      let b: f64 = tokens[2].parse().expect("b");
      let expected = round_to(if tokens[1] == "×" { a * b } else { a / b }, 3);
      match p.answer {
        Answer::Decimal { value, scale } => {
          assert_eq!(scale, 3);
          assert!((value - expected).abs() < 1e-9);
        }
        other => panic!("expected decimal answer, got {other:?}"),
      }
    }
  }

  #[test]
  fn gcd_query_answer_divides_every_listed_number() {
    let mut rng = rng(16);
    for _ in 0..200 {
      let p = gcd_query(&mut rng, 30, 100, &[2]);
      let (_, list) = p.question.split_once(": ").expect("number list");
      let nums: Vec<i64> =
        list.split(", ").map(|n| n.parse().expect("listed number")).collect();
      assert_eq!(nums.len(), 2);
      assert!(nums.iter().all(|n| (30..=100).contains(n)));
      assert_eq!(p.answer, Answer::Integer(gcd_many(&nums)));
      assert!(p.question.starts_with("次の数の最大公約数を求めよ"));
    }
  }

  #[test]
  fn lcm_query_answer_is_a_multiple_of_every_listed_number() {
    let mut rng = rng(17);
    for _ in 0..200 {
      let p = lcm_query(&mut rng, 10, 50, &[3]);
      let (_, list) = p.question.split_once(": ").expect("number list");
      let nums: Vec<i64> =
        list.split(", ").map(|n| n.parse().expect("listed number")).collect();
      assert_eq!(nums.len(), 3);
      let m = p.answer.as_integer().expect("integer answer");
      assert!(nums.iter().all(|n| m % n == 0));
      assert_eq!(m, lcm_many(&nums));
      assert!(p.question.starts_with("次の数の最小公倍数を求めよ"));
    }
  }

  #[test]
  fn fraction_add_sub_folds_exactly() {
    let mut rng = rng(18);
    for _ in 0..200 {
      let p = fraction_add_sub(&mut rng, 1, 3);
      let tokens = infix_tokens(&p.question);
      assert_eq!(tokens.len(), 5);
      let parse = |t: &str| {
        let (n, d) = t.split_once('/').expect("fraction operand");
        Fraction::new(n.parse().expect("numer"), d.parse().expect("denom")).expect("valid")
      };
      let mut val = parse(&tokens[0]);
      for pair in tokens[1..].chunks(2) {
        let fr = parse(&pair[1]);
        val = if pair[0] == "+" { val.add(fr) } else { val.sub(fr) };
      }
      assert_eq!(p.answer, Answer::Fraction(val));
    }
  }

  #[test]
  fn fraction_story_wraps_the_expression() {
    let mut rng = rng(19);
    let p = fraction_story(&mut rng, 1, 2);
    assert!(p.question.starts_with("りんごの重さは "));
    assert!(p.question.ends_with(" とします。合計の重さは？"));
    assert!(!p.question.contains('='));
    assert!(matches!(p.answer, Answer::Fraction(_)));
  }

  #[test]
  fn fraction_mixed_ops_folds_exactly() {
    let mut rng = rng(20);
    for _ in 0..200 {
      let p = fraction_mixed_ops(&mut rng, 3);
      let tokens = infix_tokens(&p.question);
      let parse = |t: &str| {
        let (n, d) = t.split_once('/').expect("fraction operand");
        let den: i64 = d.parse().expect("denom");
        assert!(den <= 12);
        Fraction::new(n.parse().expect("numer"), den).expect("valid")
      };
      let mut val = parse(&tokens[0]);
      for pair in tokens[1..].chunks(2) {
        let fr = parse(&pair[1]);
        val = match pair[0].as_str() {
          "+" => val.add(fr),
          "-" => val.sub(fr),
          "×" => val.mul(fr),
          _ => val.div(fr).expect("nonzero operand"),
        };
      }
      assert_eq!(p.answer, Answer::Fraction(val));
    }
  }

  #[test]
  fn ratio_scale_multiplies_both_legs() {
    let mut rng = rng(21);
    for _ in 0..200 {
      let p = ratio_scale(&mut rng);
      let (pair, rest) = p.question.split_once(' ').expect("ratio then clause");
      let (a, b) = pair.split_once(':').expect("ratio pair");
      let a: i64 = a.parse().expect("left leg");
      let b: i64 = b.parse().expect("right leg");
      let k: i64 = rest
        .split_once('倍')
        .and_then(|(k, _)| k.strip_prefix("を "))
        .expect("factor")
        .parse()
        .expect("factor value");
      assert_eq!(p.answer, Answer::Ratio(a * k, b * k));
    }
  }

  #[test]
  fn ratio_reduce_produces_coprime_legs() {
    let mut rng = rng(22);
    for _ in 0..200 {
      let p = ratio_reduce(&mut rng);
      let (pair, _) = p.question.split_once(' ').expect("ratio then clause");
      let (a, b) = pair.split_once(':').expect("ratio pair");
      let a: i64 = a.parse().expect("left leg");
      let b: i64 = b.parse().expect("right leg");
      match p.answer {
        Answer::Ratio(ra, rb) => {
          assert_eq!((ra, rb), reduce_ratio(a, b));
          assert_eq!(crate::numerics::gcd(ra, rb), 1);
        }
        other => panic!("expected ratio answer, got {other:?}"),
      }
    }
  }

  #[test]
  fn percent_modes_phrase_their_questions() {
    let mut rng = rng(23);
    for _ in 0..50 {
      let p = percent(&mut rng, PercentMode::Basic);
      assert!(p.question.contains('%'));
      let r = percent(&mut rng, PercentMode::Reverse);
      assert!(r.question.starts_with("ある数の "));
      let c = percent(&mut rng, PercentMode::Chain);
      assert!(c.question.contains("増やし") && c.question.contains("減らすと"));
      for q in [p, r, c] {
        assert!(!q.answer.is_negative());
      }
    }
  }

  #[test]
  fn inverse_op_answer_satisfies_the_equation() {
    let mut rng = rng(24);
    for _ in 0..300 {
      let p = inverse_op(&mut rng);
      let tokens: Vec<&str> = p.question.split_whitespace().collect();
      assert_eq!(tokens[0], "□");
      let op = tokens[1];
      let a: i64 = tokens[2].parse().expect("a");
      let b: i64 = tokens[4].parse().expect("b");
      match (op, &p.answer) {
        ("+", Answer::Integer(x)) => assert_eq!(x + a, b),
        ("-", Answer::Integer(x)) => assert_eq!(x - a, b),
        ("÷", Answer::Integer(x)) => assert_eq!(x / a, b),
        ("×", Answer::Fraction(fr)) => {
          assert_eq!(fr.mul(Fraction::from_int(a)), Fraction::from_int(b));
        }
        other => panic!("unexpected op/answer pairing {other:?}"),
      }
    }
  }

  #[test]
  fn proportion_answers_are_exact_integers() {
    let mut rng = rng(25);
    for _ in 0..200 {
      let p = proportion(&mut rng, false);
      let v = p.answer.as_integer().expect("integer answer");
      assert!(v >= 1);
      let k = proportion(&mut rng, true);
      assert!(k.question.contains("k を求めよ"));
      assert!(k.answer.as_integer().expect("integer answer") >= 1);
    }
  }

  #[test]
  fn same_rng_state_reproduces_the_same_problem() {
    for kind in [
      GeneratorKind::SumDiff { digits: 3, terms: 3 },
      GeneratorKind::DecimalMixed { places: 1, terms: 3 },
      GeneratorKind::FracDecimalCombo,
      GeneratorKind::Percent { mode: PercentMode::Chain },
    ] {
      let a = generate(&kind, &mut rng(99));
      let b = generate(&kind, &mut rng(99));
      assert_eq!(a, b);
    }
  }
}
