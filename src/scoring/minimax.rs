//! Game-tree (minimax + alpha-beta) answer policy.
//!
//! Two independent binary components, additive: 70 points for the root
//! value, 30 for the visited-leaf count. Not a first-match ladder on
//! purpose — both components always contribute.

use super::ScoreResult;

/// Score a claimed `(root value, visited leaves)` pair against the
/// solver's ground truth. Missing claims score their component 0.
pub fn evaluate_minimax_answer(
  correct_root_value: i64,
  correct_visited_leaves: u32,
  student_root_value: Option<i64>,
  student_visited_leaves: Option<u32>,
) -> ScoreResult {
  let mut score = 0u8;
  let mut parts: Vec<&str> = Vec::new();

  if student_root_value == Some(correct_root_value) {
    score += 70;
    parts.push("Valoarea din rădăcină este corectă.");
  } else {
    parts.push("Valoarea din rădăcină este greșită.");
  }

  if student_visited_leaves == Some(correct_visited_leaves) {
    score += 30;
    parts.push("Numărul de frunze vizitate este corect.");
  } else {
    parts.push("Numărul de frunze vizitate este greșit.");
  }

  ScoreResult::new(score, parts.join(" "))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn both_right_scores_100() {
    let r = evaluate_minimax_answer(7, 5, Some(7), Some(5));
    assert_eq!(r.score, 100);
    assert!(r.feedback.contains("rădăcină este corectă"));
    assert!(r.feedback.contains("frunze vizitate este corect"));
  }

  #[test]
  fn root_right_leaves_wrong_scores_70() {
    let r = evaluate_minimax_answer(7, 5, Some(7), Some(6));
    assert_eq!(r.score, 70);
  }

  #[test]
  fn leaves_right_root_wrong_scores_30() {
    let r = evaluate_minimax_answer(7, 5, Some(0), Some(5));
    assert_eq!(r.score, 30);
  }

  #[test]
  fn both_wrong_scores_0() {
    let r = evaluate_minimax_answer(7, 5, Some(8), Some(9));
    assert_eq!(r.score, 0);
    assert!(r.feedback.contains("greșită"));
  }

  #[test]
  fn missing_claims_score_their_component_0() {
    let r = evaluate_minimax_answer(7, 5, None, Some(5));
    assert_eq!(r.score, 30);
    assert_eq!(evaluate_minimax_answer(7, 5, None, None).score, 0);
  }
}
