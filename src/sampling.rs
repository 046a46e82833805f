//! Bounded rejection-resampling around the generators.
//!
//! One reusable combinator plus the drill acceptance rules: negative answers
//! never ship, and GCD/LCM query bindings additionally exclude the
//! degenerate answer 1. When the retry budget runs out the last candidate is
//! returned as-is, so generation always terminates with a problem in hand.

use rand::Rng;
use tracing::debug;

use crate::curriculum::LevelDef;
use crate::domain::{Answer, AnswerClass, Problem};
use crate::generators;

/// Retry budget for the answer-level screening. Acceptance probability per
/// attempt is high for every curriculum binding, so exhaustion is a
/// theoretical edge rather than an expected path.
pub const MAX_RETRIES: usize = 100;

/// Call `gen` until `accept` passes or `max_attempts` runs out, returning
/// the last candidate either way. `max_attempts` counts calls to `gen` and
/// must be >= 1.
pub fn resample_until<R: Rng, T>(
  rng: &mut R,
  max_attempts: usize,
  mut gen: impl FnMut(&mut R) -> T,
  mut accept: impl FnMut(&T) -> bool,
) -> T {
  let mut last = gen(rng);
  if accept(&last) {
    return last;
  }
  for _ in 1..max_attempts {
    last = gen(rng);
    if accept(&last) {
      return last;
    }
  }
  debug!(target: "drill", max_attempts, "resample budget exhausted, keeping last candidate");
  last
}

/// Answer-level acceptance for a curriculum binding.
pub fn acceptable(class: AnswerClass, answer: &Answer) -> bool {
  if answer.is_negative() {
    return false;
  }
  match class {
    AnswerClass::GcdQuery | AnswerClass::LcmQuery => answer.as_integer() != Some(1),
    AnswerClass::General => true,
  }
}

/// One screened problem for a level binding.
pub fn generate_checked(def: &LevelDef, rng: &mut impl Rng) -> Problem {
  let class = def.gen.answer_class();
  resample_until(
    rng,
    MAX_RETRIES,
    |rng| generators::generate(&def.gen, rng),
    |p| acceptable(class, &p.answer),
  )
}

/// Exactly `count` screened problems.
pub fn generate_batch(def: &LevelDef, count: usize, rng: &mut impl Rng) -> Vec<Problem> {
  let mut problems = Vec::with_capacity(count);
  for _ in 0..count {
    problems.push(generate_checked(def, rng));
  }
  problems
}
