//! Shared policy for the numeric path domains: BFS distance on graphs
//! and A* cost on grids. Identical ladder, different ground truth and
//! wording, so the domain differences live in a small table.

use super::{clamp_score, run_ladder, Rule, ScoreResult};
use crate::extract::first_int;
use crate::normalize::normalize;
use crate::util::fill_template;

/// Ground truth for one path question, as computed by the solver.
#[derive(Clone, Copy, Debug)]
pub struct CostTruth {
  pub has_path: bool,
  pub correct: Option<i64>,
}

/// Wording and keywords that distinguish the two numeric domains.
pub struct CostDomain {
  /// Tokens that show the student at least engaged with the task.
  pub attempt_keywords: &'static [&'static str],
  pub no_path_correct: &'static str,
  pub no_path_incorrect: &'static str,
  pub attempted: &'static str,
  pub invalid: &'static str,
  pub exact: &'static str,
  /// Template with `{correct}` and `{val}` placeholders.
  pub partial: &'static str,
}

/// Grid A* cost wording.
pub static GRID_COST: CostDomain = CostDomain {
  attempt_keywords: &["drum", "path"],
  no_path_correct: "Corect – nu există drum valid.",
  no_path_incorrect: "Incorect – pentru acest grid nu există drum valid.",
  attempted: "Ai încercat, dar nu ai dat un cost numeric.",
  invalid: "Răspuns invalid. Scrie un număr (cost) sau 'Nu există drum'.",
  exact: "Perfect! Costul minim este corect.",
  partial: "Parțial. Costul corect este {correct}, iar tu ai răspuns {val}.",
};

/// Graph BFS distance wording.
pub static GRAPH_DISTANCE: CostDomain = CostDomain {
  attempt_keywords: &["drum", "path", "bfs"],
  no_path_correct: "Corect – nu există drum valid.",
  no_path_incorrect: "Incorect – pentru acest graf nu există drum valid.",
  attempted: "Ai încercat, dar nu ai dat o distanță numerică.",
  invalid: "Răspuns invalid. Scrie un număr sau 'Nu există drum'.",
  exact: "Perfect! Distanța minimă (BFS) este corectă.",
  partial: "Parțial. Distanța corectă este {correct}, iar tu ai răspuns {val}.",
};

struct CostSignals {
  has_path: bool,
  correct: Option<i64>,
  answer_norm: String,
  extracted: Option<i64>,
  domain: &'static CostDomain,
}

const RULES: &[Rule<CostSignals>] = &[
  // No valid path in the ground truth: only a negation earns credit.
  Rule {
    applies: |s| !s.has_path || s.correct.is_none(),
    resolve: |s| {
      if s.answer_norm.contains("nu") {
        ScoreResult::new(100, s.domain.no_path_correct)
      } else {
        ScoreResult::new(0, s.domain.no_path_incorrect)
      }
    },
  },
  // No number in the answer: small credit for an on-topic attempt.
  Rule {
    applies: |s| s.extracted.is_none(),
    resolve: |s| {
      let attempted = s.domain.attempt_keywords.iter().any(|kw| s.answer_norm.contains(kw));
      if attempted {
        ScoreResult::new(10, s.domain.attempted)
      } else {
        ScoreResult::new(0, s.domain.invalid)
      }
    },
  },
  Rule {
    applies: |s| s.extracted == s.correct,
    resolve: |s| ScoreResult::new(100, s.domain.exact),
  },
];

// Linear decay: each unit off the correct value costs 10 points from a
// base of 80, floored at 0.
fn partial_credit(s: &CostSignals) -> ScoreResult {
  let (Some(val), Some(correct)) = (s.extracted, s.correct) else {
    return ScoreResult::new(0, s.domain.invalid);
  };
  let diff = val.saturating_sub(correct).saturating_abs();
  let score = clamp_score(80i64.saturating_sub(diff.saturating_mul(10)));
  let feedback = fill_template(
    s.domain.partial,
    &[("correct", &correct.to_string()), ("val", &val.to_string())],
  );
  ScoreResult::new(score, feedback)
}

/// Evaluate a free-text answer for a numeric path domain.
pub fn evaluate_cost_answer(domain: &'static CostDomain, truth: CostTruth, answer: &str) -> ScoreResult {
  let answer_norm = normalize(answer);
  let signals = CostSignals {
    has_path: truth.has_path,
    correct: truth.correct,
    extracted: first_int(&answer_norm),
    answer_norm,
    domain,
  };
  run_ladder(RULES, &signals, partial_credit)
}

#[cfg(test)]
mod tests {
  use super::*;

  const TRUTH_5: CostTruth = CostTruth { has_path: true, correct: Some(5) };
  const NO_PATH: CostTruth = CostTruth { has_path: false, correct: None };

  #[test]
  fn exact_cost_scores_100() {
    let r = evaluate_cost_answer(&GRID_COST, TRUTH_5, "5");
    assert_eq!((r.score, r.feedback.as_str()), (100, "Perfect! Costul minim este corect."));
  }

  #[test]
  fn off_by_two_decays_to_60() {
    let r = evaluate_cost_answer(&GRID_COST, TRUTH_5, "cred că 7");
    assert_eq!(r.score, 60);
    assert_eq!(r.feedback, "Parțial. Costul corect este 5, iar tu ai răspuns 7.");
  }

  #[test]
  fn decay_floors_at_zero() {
    let r = evaluate_cost_answer(&GRAPH_DISTANCE, CostTruth { has_path: true, correct: Some(2) }, "30");
    assert_eq!(r.score, 0);
  }

  #[test]
  fn negation_wins_when_no_path_exists() {
    let r = evaluate_cost_answer(&GRID_COST, NO_PATH, "Nu există drum");
    assert_eq!(r.score, 100);
    let r = evaluate_cost_answer(&GRID_COST, NO_PATH, "costul este 4");
    assert_eq!((r.score, r.feedback.as_str()), (0, "Incorect – pentru acest grid nu există drum valid."));
  }

  #[test]
  fn keyword_without_number_earns_attempt_credit() {
    let r = evaluate_cost_answer(&GRAPH_DISTANCE, TRUTH_5, "am căutat un drum cu bfs");
    assert_eq!(r.score, 10);
    let r = evaluate_cost_answer(&GRAPH_DISTANCE, TRUTH_5, "habar nu am");
    // "nu" only matters in the no-path branch; here it is just a non-answer
    assert_eq!(r.score, 0);
    assert_eq!(r.feedback, "Răspuns invalid. Scrie un număr sau 'Nu există drum'.");
  }

  #[test]
  fn graph_wording_differs_from_grid_wording() {
    let g = evaluate_cost_answer(&GRAPH_DISTANCE, NO_PATH, "45");
    assert_eq!(g.feedback, "Incorect – pentru acest graf nu există drum valid.");
  }

  #[test]
  fn score_stays_in_range_for_hostile_inputs() {
    for ans in ["", "-999999", "999999999", "((((", "nu nu nu 3 nu", "π"] {
      let r = evaluate_cost_answer(&GRID_COST, TRUTH_5, ans);
      assert!(r.score <= 100);
      assert!(!r.feedback.is_empty());
    }
  }
}
