//! The answer-scoring engine: tiered, per-domain policies that turn a
//! student's free-text answer plus solver ground truth into a score in
//! [0, 100] and a feedback message.
//!
//! Every policy is a pure function of (ground truth, answer, knowledge
//! base). Nothing here fails: unparseable or empty input routes to the
//! lowest-credit tier of its domain.

pub mod cost;
pub mod minimax;
pub mod nash;
pub mod quiz;

pub use cost::{evaluate_cost_answer, CostTruth, GRAPH_DISTANCE, GRID_COST};
pub use minimax::evaluate_minimax_answer;
pub use nash::evaluate_nash_answer;
pub use quiz::evaluate_quiz_answer;

/// Outcome of one evaluation call. `score` is always in [0, 100];
/// `feedback` is non-empty for every reachable tier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreResult {
  pub score: u8,
  pub feedback: String,
  pub correct_answer: Option<String>,
  pub detailed_analysis: Option<String>,
}

impl ScoreResult {
  pub fn new(score: u8, feedback: impl Into<String>) -> Self {
    ScoreResult {
      score: score.min(100),
      feedback: feedback.into(),
      correct_answer: None,
      detailed_analysis: None,
    }
  }

  pub fn with_answer(mut self, correct_answer: impl Into<String>) -> Self {
    self.correct_answer = Some(correct_answer.into());
    self
  }

  pub fn with_analysis(mut self, detailed_analysis: impl Into<String>) -> Self {
    self.detailed_analysis = Some(detailed_analysis.into());
    self
  }
}

/// Clamp an intermediate score computation into the valid range.
pub fn clamp_score(raw: i64) -> u8 {
  raw.clamp(0, 100) as u8
}

/// One rung of a decision ladder: if `applies` holds for the precomputed
/// signals, `resolve` produces the final result and evaluation stops.
pub struct Rule<S> {
  pub applies: fn(&S) -> bool,
  pub resolve: fn(&S) -> ScoreResult,
}

/// Run an ordered ladder top-down; the first matching rule wins,
/// `fallback` handles everything the ladder let through.
pub fn run_ladder<S>(rules: &[Rule<S>], signals: &S, fallback: fn(&S) -> ScoreResult) -> ScoreResult {
  for rule in rules {
    if (rule.applies)(signals) {
      return (rule.resolve)(signals);
    }
  }
  fallback(signals)
}

#[cfg(test)]
mod tests {
  use super::*;

  struct Signals {
    value: i64,
  }

  const RULES: &[Rule<Signals>] = &[
    Rule { applies: |s| s.value == 0, resolve: |_| ScoreResult::new(100, "zero") },
    Rule { applies: |s| s.value > 0, resolve: |_| ScoreResult::new(50, "pozitiv") },
  ];

  #[test]
  fn first_matching_rule_wins() {
    let r = run_ladder(RULES, &Signals { value: 0 }, |_| ScoreResult::new(0, "implicit"));
    assert_eq!((r.score, r.feedback.as_str()), (100, "zero"));
  }

  #[test]
  fn fallback_handles_unmatched_signals() {
    let r = run_ladder(RULES, &Signals { value: -2 }, |_| ScoreResult::new(0, "implicit"));
    assert_eq!((r.score, r.feedback.as_str()), (0, "implicit"));
  }

  #[test]
  fn clamp_keeps_scores_in_range() {
    assert_eq!(clamp_score(-40), 0);
    assert_eq!(clamp_score(60), 60);
    assert_eq!(clamp_score(170), 100);
  }
}
