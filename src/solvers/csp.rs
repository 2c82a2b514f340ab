//! CSP solving by backtracking, plain and with the MRV heuristic.
//!
//! Constraints are binary inequalities: the two named variables must
//! take different values. Both solvers count recursion steps so the
//! frontend can show how much work each ordering saved.

use std::collections::HashMap;

pub type Assignment = HashMap<String, String>;

fn is_valid(assignment: &Assignment, constraints: &[(String, String)]) -> bool {
  for (x, y) in constraints {
    if let (Some(vx), Some(vy)) = (assignment.get(x), assignment.get(y)) {
      if vx == vy {
        return false;
      }
    }
  }
  true
}

/// Plain backtracking in the given variable order.
/// Returns `(solution, steps)`; `steps` counts recursive calls.
pub fn backtracking(
  variables: &[String],
  domains: &HashMap<String, Vec<String>>,
  constraints: &[(String, String)],
) -> (Option<Assignment>, u64) {
  let mut assignment = Assignment::new();
  let mut steps = 0;
  let found = descend(variables, domains, constraints, &mut assignment, 0, &mut steps);
  (found.then_some(assignment), steps)
}

fn descend(
  variables: &[String],
  domains: &HashMap<String, Vec<String>>,
  constraints: &[(String, String)],
  assignment: &mut Assignment,
  index: usize,
  steps: &mut u64,
) -> bool {
  *steps += 1;

  if index == variables.len() {
    return true;
  }

  let var = &variables[index];
  for value in domains.get(var).into_iter().flatten() {
    assignment.insert(var.clone(), value.clone());
    if is_valid(assignment, constraints)
      && descend(variables, domains, constraints, assignment, index + 1, steps)
    {
      return true;
    }
    assignment.remove(var);
  }

  false
}

/// Backtracking with Minimum Remaining Values: always branch on the
/// unassigned variable with the fewest values still consistent with the
/// current assignment.
pub fn backtracking_mrv(
  variables: &[String],
  domains: &HashMap<String, Vec<String>>,
  constraints: &[(String, String)],
) -> (Option<Assignment>, u64) {
  let mut assignment = Assignment::new();
  let mut steps = 0;
  let found = descend_mrv(variables, domains, constraints, &mut assignment, &mut steps);
  (found.then_some(assignment), steps)
}

fn legal_values<'a>(
  var: &str,
  domains: &'a HashMap<String, Vec<String>>,
  constraints: &[(String, String)],
  assignment: &Assignment,
) -> Vec<&'a String> {
  let mut legal = Vec::new();
  for value in domains.get(var).into_iter().flatten() {
    let conflicts = constraints.iter().any(|(x, y)| {
      (x == var && assignment.get(y) == Some(value)) || (y == var && assignment.get(x) == Some(value))
    });
    if !conflicts {
      legal.push(value);
    }
  }
  legal
}

fn descend_mrv(
  variables: &[String],
  domains: &HashMap<String, Vec<String>>,
  constraints: &[(String, String)],
  assignment: &mut Assignment,
  steps: &mut u64,
) -> bool {
  *steps += 1;

  let unassigned: Vec<&String> = variables.iter().filter(|v| !assignment.contains_key(*v)).collect();
  let Some(var) = unassigned
    .iter()
    .min_by_key(|v| legal_values(v, domains, constraints, assignment).len())
    .copied()
  else {
    return true;
  };

  let candidates: Vec<String> = legal_values(var, domains, constraints, assignment)
    .into_iter()
    .cloned()
    .collect();
  for value in candidates {
    assignment.insert(var.clone(), value);
    if descend_mrv(variables, domains, constraints, assignment, steps) {
      return true;
    }
    assignment.remove(var);
  }

  false
}

#[cfg(test)]
mod tests {
  use super::*;

  fn vars(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
  }

  fn triangle() -> (Vec<String>, HashMap<String, Vec<String>>, Vec<(String, String)>) {
    let variables = vars(&["X1", "X2", "X3"]);
    let colors = vars(&["roșu", "verde", "albastru"]);
    let domains = variables.iter().map(|v| (v.clone(), colors.clone())).collect();
    let constraints = vec![
      ("X1".to_string(), "X2".to_string()),
      ("X2".to_string(), "X3".to_string()),
      ("X1".to_string(), "X3".to_string()),
    ];
    (variables, domains, constraints)
  }

  #[test]
  fn colors_a_triangle_with_three_colors() {
    let (variables, domains, constraints) = triangle();
    let (solution, steps) = backtracking(&variables, &domains, &constraints);
    let solution = solution.expect("3-coloring exists");
    assert_eq!(solution.len(), 3);
    assert!(is_valid(&solution, &constraints));
    assert!(steps > 0);
  }

  #[test]
  fn two_colors_cannot_color_a_triangle() {
    let (variables, _, constraints) = triangle();
    let two: Vec<String> = vars(&["roșu", "verde"]);
    let domains: HashMap<String, Vec<String>> =
      variables.iter().map(|v| (v.clone(), two.clone())).collect();
    let (solution, _) = backtracking(&variables, &domains, &constraints);
    assert!(solution.is_none());
    let (solution, _) = backtracking_mrv(&variables, &domains, &constraints);
    assert!(solution.is_none());
  }

  #[test]
  fn mrv_finds_a_valid_solution_too() {
    let (variables, domains, constraints) = triangle();
    let (solution, _) = backtracking_mrv(&variables, &domains, &constraints);
    let solution = solution.expect("3-coloring exists");
    assert!(is_valid(&solution, &constraints));
  }

  #[test]
  fn unconstrained_variables_take_any_value() {
    let variables = vars(&["A"]);
    let domains: HashMap<String, Vec<String>> = [("A".to_string(), vars(&["x"]))].into();
    let (solution, steps) = backtracking(&variables, &domains, &[]);
    assert_eq!(solution.unwrap().get("A").map(String::as_str), Some("x"));
    assert_eq!(steps, 2);
  }

  #[test]
  fn missing_domain_means_no_solution() {
    let variables = vars(&["A", "B"]);
    let domains: HashMap<String, Vec<String>> = [("A".to_string(), vars(&["x"]))].into();
    let (solution, _) = backtracking(&variables, &domains, &[]);
    assert!(solution.is_none());
  }
}
