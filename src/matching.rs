//! Lexical coverage scoring between a student answer and a target
//! strategy phrase.
//!
//! The measure is asymmetric on purpose: only coverage of the target's
//! significant words matters, extra words in the answer never cost
//! anything. A verbose but complete answer scores like an exact one.

use std::collections::HashSet;

use crate::normalize::normalize;

/// Common connector words ignored on both sides of the comparison.
const FILLER_WORDS: &[&str] = &["cu", "si", "sau", "pentru", "de", "la"];

/// How a candidate phrase matched the student's answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchKind {
  /// Identical after normalization.
  Exact,
  /// Every significant target word present.
  Complete,
  /// At least half of the target words present.
  Partial,
  /// Some target words present, under half.
  Incomplete,
  /// Nothing in common.
  None,
}

impl MatchKind {
  /// Counts as a full hit for the perfect-match tiers.
  pub fn is_full(self) -> bool {
    matches!(self, MatchKind::Exact | MatchKind::Complete)
  }
}

fn significant_words(normalized: &str) -> HashSet<&str> {
  normalized
    .split_whitespace()
    .filter(|w| !FILLER_WORDS.contains(w))
    .collect()
}

/// Score how well `student_answer` covers `target_phrase`.
///
/// Tiering on coverage = |target ∩ student| / |target|:
///   coverage == 1.0        -> (100, Complete)
///   coverage >= 0.5        -> (80 * coverage, Partial)
///   0 < coverage < 0.5     -> (50 * coverage, Incomplete)
///   coverage == 0          -> (0, None)
/// with an exact-equality short-circuit at (100, Exact).
pub fn match_score(student_answer: &str, target_phrase: &str) -> (u8, MatchKind) {
  let student_norm = normalize(student_answer);
  let target_norm = normalize(target_phrase);

  if student_norm == target_norm {
    return (100, MatchKind::Exact);
  }

  let target_words = significant_words(&target_norm);
  let student_words = significant_words(&student_norm);

  if target_words.is_empty() {
    return (0, MatchKind::None);
  }

  let common = target_words.intersection(&student_words).count();
  let coverage = common as f64 / target_words.len() as f64;

  if coverage == 1.0 {
    return (100, MatchKind::Complete);
  }
  if coverage >= 0.5 {
    return ((80.0 * coverage) as u8, MatchKind::Partial);
  }
  if coverage > 0.0 {
    return ((50.0 * coverage) as u8, MatchKind::Incomplete);
  }
  (0, MatchKind::None)
}

/// Best match for the answer across a list of candidate phrases.
///
/// Returns `(score, phrase, kind)`; a strictly higher score wins, so on
/// ties the first-seen candidate is kept. An empty list yields
/// `(0, "", None)`.
pub fn find_best_match<'a>(student_answer: &str, candidates: &'a [String]) -> (u8, &'a str, MatchKind) {
  let mut best_score = 0u8;
  let mut best_phrase = "";
  let mut best_kind = MatchKind::None;

  for candidate in candidates {
    let (score, kind) = match_score(student_answer, candidate);
    if score > best_score {
      best_score = score;
      best_phrase = candidate;
      best_kind = kind;
    }
  }

  (best_score, best_phrase, best_kind)
}

/// How many of the knowledge-entry keywords occur (as normalized
/// substrings) in the text.
pub fn keyword_hits(text: &str, keywords: &[String]) -> usize {
  let text_norm = normalize(text);
  keywords.iter().filter(|kw| text_norm.contains(&normalize(kw))).count()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn owned(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
  }

  #[test]
  fn exact_match_scores_100() {
    let (score, kind) = match_score("backtracking cu forward checking", "Backtracking cu Forward Checking");
    assert_eq!((score, kind), (100, MatchKind::Exact));
  }

  #[test]
  fn complete_coverage_ignores_extra_words() {
    let (score, kind) = match_score(
      "aș folosi backtracking combinat cu forward checking aici",
      "Backtracking cu Forward Checking",
    );
    assert_eq!((score, kind), (100, MatchKind::Complete));
  }

  #[test]
  fn majority_coverage_lands_in_partial_band() {
    // target has 3 significant words, student covers 2 -> 80 * 2/3 = 53
    let (score, kind) = match_score("backtracking cu checking", "Backtracking cu Forward Checking");
    assert_eq!(kind, MatchKind::Partial);
    assert_eq!(score, 53);
  }

  #[test]
  fn low_coverage_lands_in_incomplete_band() {
    // 1 of 3 significant words -> 50 * 1/3 = 16
    let (score, kind) = match_score("ceva cu backtracking", "Backtracking cu Forward Checking");
    assert_eq!(kind, MatchKind::Incomplete);
    assert_eq!(score, 16);
  }

  #[test]
  fn filler_words_never_count() {
    let (score, kind) = match_score("cu si sau pentru de la", "Backtracking");
    assert_eq!((score, kind), (0, MatchKind::None));
  }

  #[test]
  fn coverage_is_monotonic_in_student_words() {
    let target = "Backtracking cu Forward Checking";
    let (smaller, _) = match_score("forward", target);
    let (larger, _) = match_score("forward checking", target);
    assert!(larger >= smaller);
  }

  #[test]
  fn best_match_keeps_first_seen_on_ties() {
    let candidates = owned(&["DFS", "Depth-First Search"]);
    let (score, phrase, kind) = find_best_match("dfs", &candidates);
    assert_eq!((score, phrase), (100, "DFS"));
    assert!(kind.is_full());
  }

  #[test]
  fn best_match_on_empty_list_is_none() {
    let (score, phrase, kind) = find_best_match("orice", &[]);
    assert_eq!((score, phrase, kind), (0, "", MatchKind::None));
  }

  #[test]
  fn keyword_hits_are_diacritic_insensitive() {
    let kws = owned(&["constrângeri", "csp", "forward checking"]);
    assert_eq!(keyword_hits("am folosit constrangeri si CSP", &kws), 2);
  }
}
