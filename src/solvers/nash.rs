//! Pure Nash equilibria of a bimatrix game: cells where both players
//! play a best response.

use std::collections::BTreeSet;

/// Player 1 best responses: for each column, the rows maximizing p1's payoff.
/// Player 2 best responses: for each row, the columns maximizing p2's payoff.
fn best_responses(payoffs: &[Vec<i64>], by_row: bool) -> BTreeSet<(usize, usize)> {
  let mut res = BTreeSet::new();
  let rows = payoffs.len();
  let cols = payoffs.first().map_or(0, Vec::len);

  if by_row {
    for r in 0..rows {
      let Some(m) = payoffs[r].iter().max() else { continue };
      for c in 0..cols {
        if payoffs[r][c] == *m {
          res.insert((r, c));
        }
      }
    }
  } else {
    for c in 0..cols {
      let Some(m) = (0..rows).map(|r| payoffs[r][c]).max() else { continue };
      for r in 0..rows {
        if payoffs[r][c] == m {
          res.insert((r, c));
        }
      }
    }
  }
  res
}

/// All pure-strategy Nash equilibria, sorted row-major.
pub fn pure_nash_equilibria(p1: &[Vec<i64>], p2: &[Vec<i64>]) -> Vec<(usize, usize)> {
  let br_p1 = best_responses(p1, false);
  let br_p2 = best_responses(p2, true);
  br_p1.intersection(&br_p2).copied().collect()
}
