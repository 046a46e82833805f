//! Domain models used by the backend: grades, the canonical answer value,
//! and generated drill problems.

use std::fmt;

use crate::numerics::Fraction;
use crate::util::format_decimal;

/// Elementary-school grades covered by the drill curriculum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Grade {
  G3,
  G4,
  G5,
  G6,
}

impl Grade {
  pub const ALL: [Grade; 4] = [Grade::G3, Grade::G4, Grade::G5, Grade::G6];

  /// ASCII code used on the API surface ("G3" .. "G6").
  pub fn code(&self) -> &'static str {
    match self {
      Grade::G3 => "G3",
      Grade::G4 => "G4",
      Grade::G5 => "G5",
      Grade::G6 => "G6",
    }
  }

  /// Japanese label shown on worksheets ("小3" .. "小6").
  pub fn label_ja(&self) -> &'static str {
    match self {
      Grade::G3 => "小3",
      Grade::G4 => "小4",
      Grade::G5 => "小5",
      Grade::G6 => "小6",
    }
  }

  /// Accepts the ASCII code (either case) or the Japanese label.
  pub fn parse(s: &str) -> Option<Grade> {
    match s.trim() {
      "G3" | "g3" | "小3" => Some(Grade::G3),
      "G4" | "g4" | "小4" => Some(Grade::G4),
      "G5" | "g5" | "小5" => Some(Grade::G5),
      "G6" | "g6" | "小6" => Some(Grade::G6),
      _ => None,
    }
  }
}

impl fmt::Display for Grade {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

/// Canonical value of a drill answer. Each tag has exactly one text form
/// (see `Display`); conversion to text happens only at the wire boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum Answer {
  Integer(i64),
  /// Already rounded to `scale` places; `scale` bounds the printed digits.
  Decimal { value: f64, scale: u32 },
  Fraction(Fraction),
  /// Left and right legs, both positive by construction.
  Ratio(i64, i64),
  Remainder { quotient: i64, remainder: i64 },
}

impl Answer {
  /// Negative answers are rejected by the sampling wrapper. Ratios are
  /// exempt: their legs are generated positive. Decimals tolerate the
  /// rounding dust a subtraction can leave behind.
  pub fn is_negative(&self) -> bool {
    match self {
      Answer::Integer(v) => *v < 0,
      Answer::Decimal { value, .. } => *value < -1e-12,
      Answer::Fraction(fr) => fr.is_negative(),
      Answer::Ratio(_, _) => false,
      Answer::Remainder { quotient, .. } => *quotient < 0,
    }
  }

  /// Integer payload, if this is a plain integer answer.
  pub fn as_integer(&self) -> Option<i64> {
    match self {
      Answer::Integer(v) => Some(*v),
      _ => None,
    }
  }
}

impl fmt::Display for Answer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Answer::Integer(v) => write!(f, "{}", v),
      Answer::Decimal { value, scale } => f.write_str(&format_decimal(*value, *scale)),
      Answer::Fraction(fr) => write!(f, "{}", fr),
      Answer::Ratio(a, b) => write!(f, "{}:{}", a, b),
      Answer::Remainder { quotient, remainder } => write!(f, "{} あまり {}", quotient, remainder),
    }
  }
}

/// How a curriculum binding's answers are screened by the sampling wrapper.
/// GCD/LCM query answers additionally exclude the degenerate value 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerClass {
  General,
  GcdQuery,
  LcmQuery,
}

/// One generated drill problem. Question text is presentation-ready; the
/// answer stays typed until the wire boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
  pub question: String,
  pub answer: Answer,
}

impl Problem {
  pub fn new(question: impl Into<String>, answer: Answer) -> Self {
    Self { question: question.into(), answer }
  }
}
