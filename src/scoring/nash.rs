//! Nash-equilibrium answer policy: count correctly named `(row, col)`
//! pairs against the ground-truth equilibrium set.
//!
//! Pairs are compared after normalization and in any order of
//! appearance. Mentioning a table label without pairing it correctly
//! earns the small recognition tier.

use std::collections::HashSet;

use super::{run_ladder, Rule, ScoreResult};
use crate::extract::{extract_labels, extract_pairs};
use crate::normalize::normalize;

struct NashSignals {
  total: usize,
  matched: usize,
  answer_norm: String,
  used_table_label: bool,
}

/// Correct equilibrium strings like `"(Sus, Stânga)"` reduced to
/// normalized pair tuples.
fn normalized_truth(correct_equilibria: &[String]) -> HashSet<(String, String)> {
  correct_equilibria
    .iter()
    .flat_map(|eq| extract_pairs(eq))
    .collect()
}

const RULES: &[Rule<NashSignals>] = &[
  // Game without a pure equilibrium: only a negation earns credit.
  Rule {
    applies: |s| s.total == 0,
    resolve: |s| {
      if s.answer_norm.contains("nu") {
        ScoreResult::new(100, "Corect – pentru acest joc nu există echilibru Nash pur.")
      } else {
        ScoreResult::new(0, "Răspuns incorect. Pentru acest joc nu există echilibru Nash pur.")
      }
    },
  },
  Rule {
    applies: |s| s.matched > 0,
    resolve: |s| {
      let score = (100.0 * s.matched as f64 / s.total as f64).round() as u8;
      let feedback = if score == 100 {
        "Perfect! Ai identificat toate echilibrele Nash.".to_string()
      } else if s.matched == 1 && s.total > 1 {
        format!("Parțial corect – ai identificat 1 din {} echilibre Nash.", s.total)
      } else {
        format!("Parțial corect – ai identificat {} din {} echilibre Nash.", s.matched, s.total)
      };
      ScoreResult::new(score, feedback)
    },
  },
  // Right vocabulary, wrong (or missing) pairing.
  Rule {
    applies: |s| s.used_table_label,
    resolve: |_| ScoreResult::new(10, "Ai folosit etichete din tabel, dar nu ai indicat un echilibru corect."),
  },
];

fn completely_wrong(_: &NashSignals) -> ScoreResult {
  ScoreResult::new(
    0,
    "Răspuns incorect. Încearcă să identifici perechile unde ambii jucători au răspunsuri optime.",
  )
}

/// Evaluate a free-text answer against the equilibrium set computed by
/// the solver (strings like `"(Sus, Stânga)"`).
pub fn evaluate_nash_answer(correct_equilibria: &[String], answer: &str) -> ScoreResult {
  let answer_norm = normalize(answer);
  let truth = normalized_truth(correct_equilibria);

  let claimed: HashSet<(String, String)> = extract_pairs(answer).into_iter().collect();
  let matched = claimed.intersection(&truth).count();

  let used_table_label = extract_labels(correct_equilibria)
    .iter()
    .any(|label| answer_norm.contains(&normalize(label)));

  let signals = NashSignals {
    total: correct_equilibria.len(),
    matched,
    answer_norm,
    used_table_label,
  };
  run_ladder(RULES, &signals, completely_wrong)
}
