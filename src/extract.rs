//! Pull typed values out of free-text answers.
//!
//! Two extractors, both total: a parenthesized-pair scanner for the Nash
//! domain and a first-integer scanner for the distance/cost domains. A
//! missing or malformed match is a valid outcome, never an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::normalize::normalize;

static PAREN_GROUPS: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\(([^()]*)\)").expect("hardcoded regex"));

static FIRST_INT: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"-?\d+").expect("hardcoded regex"));

/// Extract all `(a, b)` pairs from raw answer text, each side normalized.
///
/// Groups that do not split on a comma into exactly two non-empty parts
/// are skipped. Duplicates are kept here; callers compare as sets.
///
///     "Sunt două: (Sus, Stânga) și (Jos, Dreapta)"
///         -> [("sus", "stanga"), ("jos", "dreapta")]
pub fn extract_pairs(text: &str) -> Vec<(String, String)> {
  let mut pairs = Vec::new();
  for caps in PAREN_GROUPS.captures_iter(text) {
    let inside = &caps[1];
    let parts: Vec<&str> = inside.split(',').map(str::trim).collect();
    if parts.len() != 2 {
      continue;
    }
    let (a, b) = (parts[0], parts[1]);
    if a.is_empty() || b.is_empty() {
      continue;
    }
    pairs.push((normalize(a), normalize(b)));
  }
  pairs
}

/// Individual strategy labels mentioned inside a list of equilibrium
/// strings like `"(Sus, Stânga)"`. Only the first parenthesis group of
/// each string is considered. Used for the table-label credit tier.
pub fn extract_labels(equilibria: &[String]) -> Vec<String> {
  let mut labels = Vec::new();
  for eq in equilibria {
    let Some(caps) = PAREN_GROUPS.captures(eq) else { continue };
    for part in caps[1].split(',') {
      let p = part.trim();
      if !p.is_empty() && !labels.contains(&p.to_string()) {
        labels.push(p.to_string());
      }
    }
  }
  labels
}

/// First (optionally negative) integer in the answer, if any.
/// Values that overflow `i64` degrade to `None`, the same tier as
/// "no number given".
pub fn first_int(text: &str) -> Option<i64> {
  FIRST_INT.find(text).and_then(|m| m.as_str().parse::<i64>().ok())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn pairs_are_normalized_and_malformed_groups_skipped() {
    let pairs = extract_pairs("Cred că (Sus, Stânga), poate (Jos; Dreapta) sau (A,B,C) sau ()");
    assert_eq!(pairs, vec![("sus".to_string(), "stanga".to_string())]);
  }

  #[test]
  fn pairs_handles_multiple_groups() {
    let pairs = extract_pairs("(Sus, Stânga) și (Jos, Dreapta)");
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[1], ("jos".to_string(), "dreapta".to_string()));
  }

  #[test]
  fn labels_come_from_first_group_only() {
    let eqs = vec!["(Sus, Stânga)".to_string(), "(Jos, Dreapta)".to_string()];
    let labels = extract_labels(&eqs);
    assert_eq!(labels, vec!["Sus", "Stânga", "Jos", "Dreapta"]);
  }

  #[test]
  fn first_int_finds_negatives_and_ignores_text() {
    assert_eq!(first_int("distanța este -3 sau 4"), Some(-3));
    assert_eq!(first_int("costul e 12"), Some(12));
    assert_eq!(first_int("nu există drum"), None);
  }

  #[test]
  fn absurdly_long_numbers_degrade_to_none() {
    assert_eq!(first_int("99999999999999999999999999"), None);
  }
}
