//! Curriculum map: (grade, topic, level) -> generator binding.
//!
//! The whole map is a static const table. Every binding carries the preset
//! label shown to teachers plus the generator and its fixed parameters, so
//! resolving a request is a lookup, never a computation. Levels are 1..=5
//! and each topic defines all five.

use crate::domain::{AnswerClass, Grade};

/// A generator with its per-level parameters, const-constructible so the
/// whole curriculum can live in static tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeneratorKind {
  /// `terms` integers of `digits` digits joined by random +/-.
  SumDiff { digits: u32, terms: usize },
  /// Column multiplication, factor widths in digits.
  Multiply { a_digits: u32, b_digits: u32 },
  /// Division with a nonzero remainder, dividend in `[lo, hi]`.
  DivRemainder { lo: i64, hi: i64 },
  /// Two same-width terms joined by random +/-.
  LargeSumDiff { digits: u32 },
  /// Decimal + or -, operands fixed to `places` decimal places.
  DecimalAddSub { places: u32 },
  /// Decimal x or /, operands fixed to `places` decimal places.
  DecimalMulDiv { places: u32 },
  /// Left-to-right decimal chain over + - x /.
  DecimalMixed { places: u32, terms: usize },
  /// "Find the greatest common divisor" over `counts` numbers in `[lo, hi]`.
  GcdQuery { lo: i64, hi: i64, counts: &'static [usize] },
  /// "Find the least common multiple" over `counts` numbers in `[lo, hi]`.
  LcmQuery { lo: i64, hi: i64, counts: &'static [usize] },
  /// Proper fractions joined by random +/-.
  FractionAddSub { den_digits: u32, terms: usize },
  /// Fraction sum wrapped in a word-problem sentence.
  FractionStory { den_digits: u32, terms: usize },
  /// Proper fractions over random + - x /.
  FractionMixedOps { terms: usize },
  /// Coin flip: decimal x fraction, or fraction x fraction.
  FractionDecimalProduct,
  /// Percentage drills, see `PercentMode`.
  Percent { mode: PercentMode },
  /// Scale a ratio by a random factor.
  RatioScale,
  /// Reduce a ratio to lowest terms.
  RatioReduce,
  /// Coin flip: decimal (+ - x /) fraction, or fraction (+ -) decimal.
  FracDecimalCombo,
  /// Solve-the-box drills: `[] op a = b`.
  InverseOp,
  /// Direct (`y = kx`) or inverse (`xy = k`) proportion.
  Proportion { solve_for_k: bool },
}

/// Percentage question family for `GeneratorKind::Percent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PercentMode {
  /// "of" / "increase by" / "decrease by", picked per problem.
  Basic,
  /// Recover the base from a known percentage of it.
  Reverse,
  /// Increase then decrease chain.
  Chain,
}

impl GeneratorKind {
  /// Derived from the binding itself so the degenerate-answer screening in
  /// `sampling` can never drift out of sync with the curriculum table.
  pub fn answer_class(&self) -> AnswerClass {
    match self {
      GeneratorKind::GcdQuery { .. } => AnswerClass::GcdQuery,
      GeneratorKind::LcmQuery { .. } => AnswerClass::LcmQuery,
      _ => AnswerClass::General,
    }
  }
}

/// One level row: the preset label teachers see plus the generator binding.
#[derive(Clone, Copy, Debug)]
pub struct LevelDef {
  pub preset: &'static str,
  pub gen: GeneratorKind,
}

/// One topic with its five level rows (index = level - 1).
#[derive(Clone, Copy, Debug)]
pub struct TopicDef {
  pub slug: &'static str,
  pub name_ja: &'static str,
  pub levels: [LevelDef; 5],
}

/// All topics of one grade.
#[derive(Clone, Copy, Debug)]
pub struct GradeDef {
  pub grade: Grade,
  pub topics: &'static [TopicDef],
}

macro_rules! lvl {
  ($preset:expr, $gen:expr) => {
    LevelDef {
      preset: $preset,
      gen: $gen,
    }
  };
}

const G3_TOPICS: &[TopicDef] = &[
  TopicDef {
    slug: "integer-sum-difference",
    name_ja: "整数のたし算・ひき算",
    levels: [
      lvl!("2桁・2項の和差算", GeneratorKind::SumDiff { digits: 2, terms: 2 }),
      lvl!("2桁・3項の和差算", GeneratorKind::SumDiff { digits: 2, terms: 3 }),
      lvl!("3桁・3項の和差算", GeneratorKind::SumDiff { digits: 3, terms: 3 }),
      lvl!("4桁・4項の和差算", GeneratorKind::SumDiff { digits: 4, terms: 4 }),
      lvl!("5桁・5項の和差算", GeneratorKind::SumDiff { digits: 5, terms: 5 }),
    ],
  },
  TopicDef {
    slug: "column-multiplication",
    name_ja: "かけ算の筆算",
    levels: [
      lvl!("2桁×1桁", GeneratorKind::Multiply { a_digits: 2, b_digits: 1 }),
      lvl!("3桁×1桁", GeneratorKind::Multiply { a_digits: 3, b_digits: 1 }),
      lvl!("2桁×2桁", GeneratorKind::Multiply { a_digits: 2, b_digits: 2 }),
      lvl!("3桁×2桁", GeneratorKind::Multiply { a_digits: 3, b_digits: 2 }),
      lvl!("3桁×3桁", GeneratorKind::Multiply { a_digits: 3, b_digits: 3 }),
    ],
  },
  TopicDef {
    slug: "division-with-remainder",
    name_ja: "わり算（あまりあり）",
    levels: [
      lvl!("2〜50", GeneratorKind::DivRemainder { lo: 2, hi: 50 }),
      lvl!("10〜200", GeneratorKind::DivRemainder { lo: 10, hi: 200 }),
      lvl!("50〜1000", GeneratorKind::DivRemainder { lo: 50, hi: 1000 }),
      lvl!("200〜5000", GeneratorKind::DivRemainder { lo: 200, hi: 5000 }),
      lvl!("1000〜20000", GeneratorKind::DivRemainder { lo: 1000, hi: 20000 }),
    ],
  },
];

const G4_TOPICS: &[TopicDef] = &[
  TopicDef {
    slug: "large-number-arithmetic",
    name_ja: "大きな数と筆算",
    levels: [
      lvl!("4桁・2項の和差算", GeneratorKind::LargeSumDiff { digits: 4 }),
      lvl!("5桁・2項の和差算", GeneratorKind::LargeSumDiff { digits: 5 }),
      lvl!("6桁・2項の和差算", GeneratorKind::LargeSumDiff { digits: 6 }),
      lvl!("3桁・2項の積", GeneratorKind::Multiply { a_digits: 3, b_digits: 3 }),
      lvl!("4桁・2項の積", GeneratorKind::Multiply { a_digits: 4, b_digits: 4 }),
    ],
  },
  TopicDef {
    slug: "decimal-four-operations",
    name_ja: "小数の四則",
    levels: [
      lvl!("小数第1位・2項の和差算", GeneratorKind::DecimalAddSub { places: 1 }),
      lvl!("小数第2位・2項の和差算", GeneratorKind::DecimalAddSub { places: 2 }),
      lvl!("小数第1位・2項の積商算", GeneratorKind::DecimalMulDiv { places: 1 }),
      lvl!("小数第2位・2項の積商算", GeneratorKind::DecimalMulDiv { places: 2 }),
      lvl!("小数第1位・3項の混合算", GeneratorKind::DecimalMixed { places: 1, terms: 3 }),
    ],
  },
  TopicDef {
    slug: "divisor-multiple",
    name_ja: "約数・倍数（計算）",
    levels: [
      lvl!("30〜100の2数の最大公約数", GeneratorKind::GcdQuery { lo: 30, hi: 100, counts: &[2] }),
      lvl!("50〜200の2数の最大公約数", GeneratorKind::GcdQuery { lo: 50, hi: 200, counts: &[2] }),
      lvl!("2桁〜3桁の2数の最大公約数", GeneratorKind::GcdQuery { lo: 10, hi: 999, counts: &[2] }),
      lvl!("3数の最小公倍数", GeneratorKind::LcmQuery { lo: 10, hi: 50, counts: &[3] }),
      lvl!("3数の最大公約数", GeneratorKind::GcdQuery { lo: 10, hi: 200, counts: &[3] }),
    ],
  },
  TopicDef {
    slug: "fraction-add-subtract",
    name_ja: "分数のたし算・ひき算",
    levels: [
      lvl!("分母1桁・2項の和差算", GeneratorKind::FractionAddSub { den_digits: 1, terms: 2 }),
      lvl!("分母2桁・2項の和差算", GeneratorKind::FractionAddSub { den_digits: 2, terms: 2 }),
      lvl!("分母1桁・3項の和差算", GeneratorKind::FractionAddSub { den_digits: 1, terms: 3 }),
      lvl!("分母2桁・3項の和差算", GeneratorKind::FractionAddSub { den_digits: 2, terms: 3 }),
      lvl!("文章題", GeneratorKind::FractionStory { den_digits: 1, terms: 2 }),
    ],
  },
];

const G5_TOPICS: &[TopicDef] = &[
  TopicDef {
    slug: "fraction-mixed-operations",
    name_ja: "分数の四則混合",
    levels: [
      lvl!("2項の四則混合", GeneratorKind::FractionMixedOps { terms: 2 }),
      lvl!("3項の四則混合", GeneratorKind::FractionMixedOps { terms: 3 }),
      lvl!("3項の四則混合", GeneratorKind::FractionMixedOps { terms: 3 }),
      lvl!("3項の四則混合", GeneratorKind::FractionMixedOps { terms: 3 }),
      lvl!("3項の四則混合", GeneratorKind::FractionMixedOps { terms: 3 }),
    ],
  },
  TopicDef {
    slug: "fraction-decimal-multiply",
    name_ja: "小数×分数・分数×分数",
    levels: [
      lvl!("小数×分数／分数×分数", GeneratorKind::FractionDecimalProduct),
      lvl!("小数×分数／分数×分数", GeneratorKind::FractionDecimalProduct),
      lvl!("小数×分数／分数×分数", GeneratorKind::FractionDecimalProduct),
      lvl!("小数×分数／分数×分数", GeneratorKind::FractionDecimalProduct),
      lvl!("小数×分数／分数×分数", GeneratorKind::FractionDecimalProduct),
    ],
  },
  TopicDef {
    slug: "percentage-basics",
    name_ja: "割合の基本計算",
    levels: [
      lvl!("〜の％・増減", GeneratorKind::Percent { mode: PercentMode::Basic }),
      lvl!("〜の％・増減", GeneratorKind::Percent { mode: PercentMode::Basic }),
      lvl!("元の数を求める", GeneratorKind::Percent { mode: PercentMode::Reverse }),
      lvl!("増減の連続", GeneratorKind::Percent { mode: PercentMode::Chain }),
      lvl!("増減の連続", GeneratorKind::Percent { mode: PercentMode::Chain }),
    ],
  },
  TopicDef {
    slug: "ratio-basics",
    name_ja: "比の基本計算",
    levels: [
      lvl!("比の倍化", GeneratorKind::RatioScale),
      lvl!("比の倍化", GeneratorKind::RatioScale),
      lvl!("比の倍化", GeneratorKind::RatioScale),
      lvl!("比の簡約", GeneratorKind::RatioReduce),
      lvl!("比の簡約", GeneratorKind::RatioReduce),
    ],
  },
];

const G6_TOPICS: &[TopicDef] = &[
  TopicDef {
    slug: "fraction-decimal-combined",
    name_ja: "分数・小数の複合計算",
    levels: [
      lvl!("分数と小数の混合", GeneratorKind::FracDecimalCombo),
      lvl!("分数と小数の混合", GeneratorKind::FracDecimalCombo),
      lvl!("分数と小数の混合", GeneratorKind::FracDecimalCombo),
      lvl!("分数と小数の混合", GeneratorKind::FracDecimalCombo),
      lvl!("分数と小数の混合", GeneratorKind::FracDecimalCombo),
    ],
  },
  TopicDef {
    slug: "inverse-operation",
    name_ja: "逆算（□を求める）",
    levels: [
      lvl!("基本", GeneratorKind::InverseOp),
      lvl!("基本", GeneratorKind::InverseOp),
      lvl!("基本", GeneratorKind::InverseOp),
      lvl!("基本", GeneratorKind::InverseOp),
      lvl!("基本", GeneratorKind::InverseOp),
    ],
  },
  TopicDef {
    slug: "gcd-lcm",
    name_ja: "最大公約数・最小公倍数",
    levels: [
      lvl!("2〜3数の最大公約数", GeneratorKind::GcdQuery { lo: 10, hi: 200, counts: &[2, 3] }),
      lvl!("2〜3数の最大公約数", GeneratorKind::GcdQuery { lo: 10, hi: 200, counts: &[2, 3] }),
      lvl!("2〜3数の最大公約数", GeneratorKind::GcdQuery { lo: 10, hi: 200, counts: &[2, 3] }),
      lvl!("2〜3数の最小公倍数", GeneratorKind::LcmQuery { lo: 10, hi: 60, counts: &[2, 3] }),
      lvl!("2〜3数の最小公倍数", GeneratorKind::LcmQuery { lo: 10, hi: 60, counts: &[2, 3] }),
    ],
  },
  TopicDef {
    slug: "proportion",
    name_ja: "比例・反比例の基本計算",
    levels: [
      lvl!("値を求める", GeneratorKind::Proportion { solve_for_k: false }),
      lvl!("値を求める", GeneratorKind::Proportion { solve_for_k: false }),
      lvl!("値を求める", GeneratorKind::Proportion { solve_for_k: false }),
      lvl!("定数を求める", GeneratorKind::Proportion { solve_for_k: true }),
      lvl!("定数を求める", GeneratorKind::Proportion { solve_for_k: true }),
    ],
  },
];

/// The full map, in menu order.
pub const CURRICULUM: &[GradeDef] = &[
  GradeDef { grade: Grade::G3, topics: G3_TOPICS },
  GradeDef { grade: Grade::G4, topics: G4_TOPICS },
  GradeDef { grade: Grade::G5, topics: G5_TOPICS },
  GradeDef { grade: Grade::G6, topics: G6_TOPICS },
];

/// Topics offered for a grade.
pub fn topics(grade: Grade) -> &'static [TopicDef] {
  match grade {
    Grade::G3 => G3_TOPICS,
    Grade::G4 => G4_TOPICS,
    Grade::G5 => G5_TOPICS,
    Grade::G6 => G6_TOPICS,
  }
}

/// Look up a topic by its slug within a grade.
pub fn find_topic(grade: Grade, slug: &str) -> Option<&'static TopicDef> {
  topics(grade).iter().find(|t| t.slug == slug)
}

/// Resolve a (grade, topic, level) binding. `level` is 1-based.
pub fn find_level(grade: Grade, slug: &str, level: u8) -> Option<(&'static TopicDef, &'static LevelDef)> {
  if !(1..=5).contains(&level) {
    return None;
  }
  let topic = find_topic(grade, slug)?;
  Some((topic, &topic.levels[(level - 1) as usize]))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_binding_resolves() {
    for def in CURRICULUM {
      for topic in def.topics {
        for level in 1..=5u8 {
          let (t, l) = find_level(def.grade, topic.slug, level).expect("binding must exist");
          assert_eq!(t.slug, topic.slug);
          assert!(!l.preset.is_empty());
        }
      }
    }
  }

  #[test]
  fn grades_cover_expected_topic_counts() {
    assert_eq!(topics(Grade::G3).len(), 3);
    assert_eq!(topics(Grade::G4).len(), 4);
    assert_eq!(topics(Grade::G5).len(), 4);
    assert_eq!(topics(Grade::G6).len(), 4);
  }

  #[test]
  fn slugs_are_unique_within_a_grade() {
    for def in CURRICULUM {
      for (i, a) in def.topics.iter().enumerate() {
        for b in &def.topics[i + 1..] {
          assert_ne!(a.slug, b.slug);
        }
      }
    }
  }

  #[test]
  fn out_of_range_levels_do_not_resolve() {
    assert!(find_level(Grade::G3, "integer-sum-difference", 0).is_none());
    assert!(find_level(Grade::G3, "integer-sum-difference", 6).is_none());
    assert!(find_level(Grade::G3, "no-such-topic", 1).is_none());
    // Topics do not leak across grades.
    assert!(find_level(Grade::G3, "gcd-lcm", 1).is_none());
  }

  #[test]
  fn answer_class_follows_the_binding() {
    let divisor_multiple = find_topic(Grade::G4, "divisor-multiple").expect("topic");
    let classes: Vec<AnswerClass> =
      divisor_multiple.levels.iter().map(|l| l.gen.answer_class()).collect();
    assert_eq!(
      classes,
      vec![
        AnswerClass::GcdQuery,
        AnswerClass::GcdQuery,
        AnswerClass::GcdQuery,
        AnswerClass::LcmQuery,
        AnswerClass::GcdQuery,
      ]
    );

    let gcd_lcm = find_topic(Grade::G6, "gcd-lcm").expect("topic");
    assert_eq!(gcd_lcm.levels[0].gen.answer_class(), AnswerClass::GcdQuery);
    assert_eq!(gcd_lcm.levels[2].gen.answer_class(), AnswerClass::GcdQuery);
    assert_eq!(gcd_lcm.levels[3].gen.answer_class(), AnswerClass::LcmQuery);
    assert_eq!(gcd_lcm.levels[4].gen.answer_class(), AnswerClass::LcmQuery);

    let sums = find_topic(Grade::G3, "integer-sum-difference").expect("topic");
    assert!(sums.levels.iter().all(|l| l.gen.answer_class() == AnswerClass::General));
  }
}
