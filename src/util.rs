//! Small utility helpers used across modules.

/// Round to `places` decimal places (half away from zero).
pub fn round_to(value: f64, places: u32) -> f64 {
  let factor = 10f64.powi(places as i32);
  (value * factor).round() / factor
}

/// Format an already-rounded decimal with at most `scale` places, trimming
/// trailing zeros ("36.00" -> "36", "35.60" -> "35.6").
pub fn format_decimal(value: f64, scale: u32) -> String {
  // -0.0 must never print with a sign.
  let value = if value == 0.0 { 0.0 } else { value };
  let s = format!("{:.*}", scale as usize, value);
  if !s.contains('.') {
    return s;
  }
  s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge request/response payloads. The cut is
/// floored to a char boundary so multibyte answers stay intact.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    return s.to_string();
  }
  let mut cut = max;
  while cut > 0 && !s.is_char_boundary(cut) {
    cut -= 1;
  }
  format!("{}… ({} bytes total)", &s[..cut], s.len())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn round_to_places() {
    assert_eq!(round_to(0.125, 2), 0.13);
    assert_eq!(round_to(1.25, 1), 1.3);
    assert_eq!(round_to(3.14159, 2), 3.14);
    assert_eq!(round_to(12.0, 3), 12.0);
  }

  #[test]
  fn format_decimal_trims_trailing_zeros() {
    assert_eq!(format_decimal(36.0, 2), "36");
    assert_eq!(format_decimal(35.6, 2), "35.6");
    assert_eq!(format_decimal(0.483, 3), "0.483");
    assert_eq!(format_decimal(7.105, 3), "7.105");
  }

  #[test]
  fn format_decimal_never_prints_signed_zero() {
    assert_eq!(format_decimal(-0.0, 2), "0");
  }

  #[test]
  fn trunc_for_log_respects_char_boundaries() {
    let s = "あまりあまりあまり";
    let t = trunc_for_log(s, 10);
    assert!(t.starts_with("あまり"));
    assert!(t.contains("27 bytes total"));
    assert_eq!(trunc_for_log("short", 10), "short");
  }
}
