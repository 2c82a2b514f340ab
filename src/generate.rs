//! Random problem-instance generation for every quiz domain.
//!
//! Flow per domain:
//! 1) sample an instance from the static tables below (or build one
//!    randomly within the documented bounds),
//! 2) phrase the question text,
//! 3) hand the instance to the frontend; the solver computes ground
//!    truth on demand and the scoring engine grades the reply.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::{NodeType, QuizDifficulty, TreeNode};
use crate::knowledge::KnowledgeBase;
use crate::protocol::{CspProblem, GraphProblem, NashGenerateOut, PathProblem, QuizGenerateOut};
use crate::util::fill_template;

// ---------------------------------------------------------------------
// Grid path (A*)
// ---------------------------------------------------------------------

const GRID_SIZES: &[usize] = &[5, 6, 7];
const OBSTACLE_PROBS: &[f64] = &[0.18, 0.22, 0.25];
const GRID_ATTEMPTS: usize = 20;

const PATH_QUESTION: &str =
  "Găsește costul minim (număr de pași) de la START la GOAL pe grid (4-direcții). \
   Obstacolele sunt celulele cu 1. Poți folosi A* (heuristică Manhattan). \
   Răspunde doar cu un număr (ex: 10) sau scrie 'Nu există drum'.";

/// NxN grid with random obstacles plus distinct free start/goal cells.
pub fn generate_path_question() -> PathProblem {
  let mut rng = rand::thread_rng();
  let n = *GRID_SIZES.choose(&mut rng).unwrap_or(&5);
  let obstacle_prob = *OBSTACLE_PROBS.choose(&mut rng).unwrap_or(&0.2);

  let mut grid = vec![vec![0u8; n]; n];
  let mut start = (0, 0);
  let mut goal = (n - 1, n - 1);

  for _ in 0..GRID_ATTEMPTS {
    grid = (0..n)
      .map(|_| (0..n).map(|_| u8::from(rng.gen::<f64>() < obstacle_prob)).collect())
      .collect();
    start = (rng.gen_range(0..n), rng.gen_range(0..n));
    goal = (rng.gen_range(0..n), rng.gen_range(0..n));
    if start != goal {
      break;
    }
  }

  // Start/goal must always be walkable, whatever the obstacle roll said.
  grid[start.0][start.1] = 0;
  grid[goal.0][goal.1] = 0;

  PathProblem { grid, start, goal, question: PATH_QUESTION.to_string() }
}

// ---------------------------------------------------------------------
// Graph (BFS)
// ---------------------------------------------------------------------

fn add_edge(g: &mut HashMap<String, Vec<String>>, u: &str, v: &str, directed: bool) {
  let fwd = g.entry(u.to_string()).or_default();
  if !fwd.contains(&v.to_string()) {
    fwd.push(v.to_string());
  }
  if !directed {
    let back = g.entry(v.to_string()).or_default();
    if !back.contains(&u.to_string()) {
      back.push(u.to_string());
    }
  }
}

/// Small graph (6..10 nodes), 35% directed, with a guaranteed spine so
/// the graph is never completely shattered. Neighbour lists are sorted
/// so BFS (and therefore the graded distance) is deterministic.
pub fn generate_graph_question() -> GraphProblem {
  let mut rng = rand::thread_rng();
  let n = rng.gen_range(6..=10);
  let directed = rng.gen::<f64>() < 0.35;
  let nodes: Vec<String> = (0..n).map(|i| char::from(b'A' + i as u8).to_string()).collect();

  let mut graph: HashMap<String, Vec<String>> =
    nodes.iter().map(|v| (v.clone(), Vec::new())).collect();

  for i in 0..n - 1 {
    add_edge(&mut graph, &nodes[i], &nodes[i + 1], directed);
  }

  let extra_edges = rng.gen_range(n..=n * 2);
  for _ in 0..extra_edges {
    let Some(u) = nodes.choose(&mut rng) else { continue };
    let Some(v) = nodes.choose(&mut rng) else { continue };
    if u != v {
      add_edge(&mut graph, u, v, directed);
    }
  }

  for neighbors in graph.values_mut() {
    neighbors.sort();
    neighbors.dedup();
  }

  let mut endpoints = nodes.clone();
  endpoints.shuffle(&mut rng);
  let (start, goal) = (endpoints[0].clone(), endpoints[1].clone());

  let question = format!(
    "Găsește distanța minimă (număr de muchii) de la START la GOAL folosind BFS.\nGraf {}.\nRăspunde doar cu un număr (ex: 3) sau scrie 'Nu există drum'.",
    if directed { "ORIENTAT" } else { "NEORIENTAT" }
  );

  GraphProblem { graph, start, goal, question }
}

// ---------------------------------------------------------------------
// Nash
// ---------------------------------------------------------------------

struct NashGameDef {
  p1_payoffs: [[i64; 2]; 2],
  p2_payoffs: [[i64; 2]; 2],
  p1_strategies: [&'static str; 2],
  p2_strategies: [&'static str; 2],
  question_text: &'static str,
}

const NASH_GAMES: &[NashGameDef] = &[
  NashGameDef {
    p1_payoffs: [[3, 1], [0, 2]],
    p2_payoffs: [[3, 0], [1, 2]],
    p1_strategies: ["Sus", "Jos"],
    p2_strategies: ["Stânga", "Dreapta"],
    question_text: "Pentru jocul de mai jos, există echilibru Nash pur?",
  },
  NashGameDef {
    p1_payoffs: [[2, 0], [3, 1]],
    p2_payoffs: [[2, 3], [0, 1]],
    p1_strategies: ["U", "D"],
    p2_strategies: ["L", "R"],
    question_text: "Identificați echilibrul Nash (dacă există) pentru jocul următor:",
  },
  NashGameDef {
    p1_payoffs: [[1, 4], [2, 3]],
    p2_payoffs: [[3, 2], [1, 4]],
    p1_strategies: ["A", "B"],
    p2_strategies: ["X", "Y"],
    question_text: "Există un echilibru Nash pur pentru acest joc?",
  },
];

pub fn generate_nash_question() -> NashGenerateOut {
  let mut rng = rand::thread_rng();
  let game = NASH_GAMES.choose(&mut rng).unwrap_or(&NASH_GAMES[0]);
  NashGenerateOut {
    question: game.question_text.to_string(),
    p1_strategies: game.p1_strategies.iter().map(|s| s.to_string()).collect(),
    p2_strategies: game.p2_strategies.iter().map(|s| s.to_string()).collect(),
    p1_payoffs: game.p1_payoffs.iter().map(|r| r.to_vec()).collect(),
    p2_payoffs: game.p2_payoffs.iter().map(|r| r.to_vec()).collect(),
  }
}

// ---------------------------------------------------------------------
// Alpha-beta game tree
// ---------------------------------------------------------------------

/// Alternating MAX/MIN tree with integer leaves.
/// `depth` counts decision levels: depth 0 is a bare leaf.
pub fn generate_tree(depth: u8, branching: u8, value_min: i64, value_max: i64, root_type: NodeType) -> TreeNode {
  let mut rng = rand::thread_rng();
  let (lo, hi) = if value_min <= value_max { (value_min, value_max) } else { (value_max, value_min) };
  generate_tree_with(&mut rng, depth, branching.max(1), lo, hi, root_type)
}

fn generate_tree_with(
  rng: &mut impl Rng,
  depth: u8,
  branching: u8,
  value_min: i64,
  value_max: i64,
  node_type: NodeType,
) -> TreeNode {
  if depth == 0 {
    return TreeNode::leaf(rng.gen_range(value_min..=value_max));
  }
  let children = (0..branching)
    .map(|_| generate_tree_with(rng, depth - 1, branching, value_min, value_max, node_type.opposite()))
    .collect();
  TreeNode::internal(node_type, children)
}

// ---------------------------------------------------------------------
// Strategy quiz
// ---------------------------------------------------------------------

struct QuizProblemDef {
  name: &'static str,
  instances: &'static [&'static str],
}

const QUIZ_PROBLEMS: &[QuizProblemDef] = &[
  QuizProblemDef {
    name: "N-Queens",
    instances: &["tablă 4x4", "tablă 8x8", "tablă 12x12", "tablă de dimensiune N generică"],
  },
  QuizProblemDef {
    name: "Hanoi",
    instances: &["3 discuri și 3 tijuri", "5 discuri și 4 tijuri", "n discuri și k tijuri (k ≥ 3)", "4 discuri și 3 tijuri"],
  },
  QuizProblemDef {
    name: "Graph Coloring",
    instances: &["graf cu 5 noduri și 7 muchii", "graf complet K₅", "graf bipartit K₃,₃", "graf cu 10 noduri și 15 muchii"],
  },
  QuizProblemDef {
    name: "Knight's Tour",
    instances: &["tablă de șah 8x8", "tablă 5x5", "tablă dreptunghiulară 6x8", "tablă de dimensiune m×n"],
  },
];

const QUESTION_TEMPLATES: &[&str] = &[
  "Pentru problema {problem} pe {instance}, care este cea mai potrivită strategie de rezolvare dintre următoarele? ",
  "Dat fiind {problem} cu {instance}, ce strategie de căutare este optimă?",
  "Care strategie recomandați pentru rezolvarea problemei {problem} în cazul {instance}?",
  "În contextul problemei {problem} ({instance}), care este algoritmul cel mai eficient?",
  "Identificați strategia optimă pentru {problem} având {instance}.",
];

const ALL_STRATEGIES: &[&str] = &[
  "BFS (Breadth-First Search)",
  "DFS (Depth-First Search)",
  "Backtracking",
  "Backtracking cu Forward Checking",
  "A* (A-star)",
  "Hill Climbing",
  "Iterative Deepening",
  "UCS (Uniform Cost Search)",
  "Greedy Best-First Search",
  "Backtracking cu MRV",
];

fn quiz_options(kb: &KnowledgeBase, problem_name: &str, num_options: usize, rng: &mut impl Rng) -> Vec<String> {
  let Some(entry) = kb.get(problem_name) else {
    let mut pool: Vec<String> = ALL_STRATEGIES.iter().map(|s| s.to_string()).collect();
    pool.shuffle(rng);
    pool.truncate(num_options);
    return pool;
  };

  let mut options = vec![entry.optimal.clone()];
  for alt in &entry.acceptable {
    if *alt != entry.optimal && options.len() < num_options {
      options.push(alt.clone());
    }
  }

  let mut remaining: Vec<String> = ALL_STRATEGIES
    .iter()
    .map(|s| s.to_string())
    .filter(|s| !options.contains(s))
    .collect();
  while options.len() < num_options && !remaining.is_empty() {
    let idx = rng.gen_range(0..remaining.len());
    options.push(remaining.swap_remove(idx));
  }

  options.shuffle(rng);
  options
}

/// Random strategy question; difficulty controls the number of options
/// (hard additionally asks for a short justification).
pub fn generate_quiz_question(kb: &KnowledgeBase, difficulty: Option<QuizDifficulty>) -> QuizGenerateOut {
  let mut rng = rand::thread_rng();
  let difficulty = difficulty.unwrap_or_else(|| {
    *[QuizDifficulty::Easy, QuizDifficulty::Medium, QuizDifficulty::Hard]
      .choose(&mut rng)
      .unwrap_or(&QuizDifficulty::Medium)
  });

  let problem = QUIZ_PROBLEMS.choose(&mut rng).unwrap_or(&QUIZ_PROBLEMS[0]);
  let instance = problem.instances.choose(&mut rng).unwrap_or(&problem.instances[0]);
  let template = QUESTION_TEMPLATES.choose(&mut rng).unwrap_or(&QUESTION_TEMPLATES[0]);

  let mut question_text = fill_template(template, &[("problem", problem.name), ("instance", *instance)]);

  let options = quiz_options(kb, problem.name, difficulty.option_count(), &mut rng);
  let listing: Vec<String> = options
    .iter()
    .enumerate()
    .map(|(i, opt)| format!("{}. {}", char::from(b'A' + i as u8), opt))
    .collect();
  question_text.push_str(&format!("\n\nOpțiuni:\n{}", listing.join("\n")));
  if difficulty == QuizDifficulty::Hard {
    question_text.push_str("\n\n**Bonus:** Explicați pe scurt de ce ați ales această strategie.");
  }

  QuizGenerateOut {
    question_text,
    problem_name: problem.name.to_string(),
    instance_description: instance.to_string(),
    difficulty: difficulty.as_str().to_string(),
    options: Some(options),
  }
}

// ---------------------------------------------------------------------
// CSP instances
// ---------------------------------------------------------------------

const CSP_COLORS: &[&str] = &["roșu", "verde", "albastru", "galben", "mov"];

/// Random binary CSP: generic variables, value pools of varying size,
/// random inequality constraints between distinct variables.
pub fn generate_random_csp(
  num_variables: usize,
  domain_size_min: usize,
  domain_size_max: usize,
  num_constraints: usize,
) -> CspProblem {
  let mut rng = rand::thread_rng();
  let n = num_variables.max(2);
  let (lo, hi) = if domain_size_min <= domain_size_max {
    (domain_size_min.max(1), domain_size_max.max(1))
  } else {
    (domain_size_max.max(1), domain_size_min.max(1))
  };

  let variables: Vec<String> = (1..=n).map(|i| format!("X{i}")).collect();
  let domains: HashMap<String, Vec<String>> = variables
    .iter()
    .map(|v| {
      let size = rng.gen_range(lo..=hi);
      (v.clone(), (1..=size).map(|i| format!("v{i}")).collect())
    })
    .collect();

  let mut constraints: Vec<(String, String)> = Vec::new();
  for _ in 0..num_constraints {
    let i = rng.gen_range(0..n);
    let j = rng.gen_range(0..n);
    if i == j {
      continue;
    }
    let pair = (variables[i].clone(), variables[j].clone());
    let mirrored = (pair.1.clone(), pair.0.clone());
    if !constraints.contains(&pair) && !constraints.contains(&mirrored) {
      constraints.push(pair);
    }
  }

  CspProblem { variables, domains, constraints }
}

/// Random graph-coloring CSP: nodes share a color pool, each edge is an
/// inequality constraint.
pub fn generate_graph_coloring(num_nodes: usize, edge_probability: f64, num_colors: usize) -> CspProblem {
  let mut rng = rand::thread_rng();
  let n = num_nodes.max(2);
  let colors: Vec<String> = CSP_COLORS
    .iter()
    .cycle()
    .take(num_colors.clamp(1, CSP_COLORS.len()))
    .map(|s| s.to_string())
    .collect();

  let variables: Vec<String> = (1..=n).map(|i| format!("N{i}")).collect();
  let domains: HashMap<String, Vec<String>> =
    variables.iter().map(|v| (v.clone(), colors.clone())).collect();

  let mut constraints: Vec<(String, String)> = Vec::new();
  for i in 0..n {
    for j in (i + 1)..n {
      if rng.gen::<f64>() < edge_probability {
        constraints.push((variables[i].clone(), variables[j].clone()));
      }
    }
  }
  // A couple of guaranteed edges keep degenerate instances interesting.
  if constraints.is_empty() {
    constraints.push((variables[0].clone(), variables[1].clone()));
  }

  CspProblem { variables, domains, constraints }
}

/// Scheduling CSP: consecutive tasks compete for slots and must differ.
pub fn generate_scheduling_problem(num_tasks: usize, num_time_slots: usize) -> CspProblem {
  let n = num_tasks.max(2);
  let slots: Vec<String> = (1..=num_time_slots.max(2)).map(|i| format!("slot{i}")).collect();

  let variables: Vec<String> = (1..=n).map(|i| format!("T{i}")).collect();
  let domains: HashMap<String, Vec<String>> =
    variables.iter().map(|v| (v.clone(), slots.clone())).collect();

  let constraints: Vec<(String, String)> = (0..n - 1)
    .map(|i| (variables[i].clone(), variables[i + 1].clone()))
    .collect();

  CspProblem { variables, domains, constraints }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::solvers::graph::bfs_shortest_path;

  #[test]
  fn grid_question_has_free_distinct_endpoints() {
    for _ in 0..25 {
      let q = generate_path_question();
      assert!(GRID_SIZES.contains(&q.grid.len()));
      assert_ne!(q.start, q.goal);
      assert_eq!(q.grid[q.start.0][q.start.1], 0);
      assert_eq!(q.grid[q.goal.0][q.goal.1], 0);
    }
  }

  #[test]
  fn graph_question_spine_keeps_a_route_from_a() {
    for _ in 0..25 {
      let q = generate_graph_question();
      let n = q.graph.len();
      assert!((6..=10).contains(&n));
      assert_ne!(q.start, q.goal);
      // the spine guarantees A reaches the last node even when directed
      let last = char::from(b'A' + (n - 1) as u8).to_string();
      assert!(bfs_shortest_path(&q.graph, "A", &last).is_some());
      for neighbors in q.graph.values() {
        let mut sorted = neighbors.clone();
        sorted.sort();
        assert_eq!(*neighbors, sorted);
      }
    }
  }

  #[test]
  fn nash_question_is_one_of_the_known_games() {
    let q = generate_nash_question();
    assert!(NASH_GAMES.iter().any(|g| g.question_text == q.question));
    assert_eq!(q.p1_payoffs.len(), 2);
    assert_eq!(q.p2_strategies.len(), 2);
  }

  #[test]
  fn generated_tree_has_requested_shape() {
    let tree = generate_tree(3, 2, 0, 15, NodeType::Max);
    fn check(node: &TreeNode, depth: u8, expected: Option<NodeType>) {
      if depth == 0 {
        assert!(node.is_leaf());
        let v = node.value.unwrap();
        assert!((0..=15).contains(&v));
        return;
      }
      assert_eq!(node.node_type, expected);
      let children = node.children.as_ref().unwrap();
      assert_eq!(children.len(), 2);
      for child in children {
        check(child, depth - 1, expected.map(NodeType::opposite));
      }
    }
    check(&tree, 3, Some(NodeType::Max));
  }

  #[test]
  fn quiz_options_always_contain_the_optimal_strategy() {
    let kb = KnowledgeBase::builtin();
    for _ in 0..25 {
      let q = generate_quiz_question(&kb, Some(QuizDifficulty::Medium));
      let options = q.options.expect("medium difficulty has options");
      assert_eq!(options.len(), 5);
      let optimal = &kb.get(&q.problem_name).unwrap().optimal;
      assert!(options.contains(optimal));
      assert!(q.question_text.contains("Opțiuni:"));
    }
  }

  #[test]
  fn hard_quiz_asks_for_a_justification() {
    let kb = KnowledgeBase::builtin();
    let q = generate_quiz_question(&kb, Some(QuizDifficulty::Hard));
    assert_eq!(q.options.as_ref().map(Vec::len), Some(7));
    assert!(q.question_text.contains("**Bonus:**"));
  }

  #[test]
  fn random_csp_respects_bounds() {
    let p = generate_random_csp(5, 2, 3, 6);
    assert_eq!(p.variables.len(), 5);
    for v in &p.variables {
      let d = &p.domains[v];
      assert!((2..=3).contains(&d.len()));
    }
    for (x, y) in &p.constraints {
      assert_ne!(x, y);
    }
  }

  #[test]
  fn graph_coloring_instance_is_solvable_shape() {
    let p = generate_graph_coloring(5, 0.4, 3);
    assert_eq!(p.variables.len(), 5);
    assert!(!p.constraints.is_empty());
    assert!(p.domains.values().all(|d| d.len() == 3));
  }

  #[test]
  fn scheduling_chains_consecutive_tasks() {
    let p = generate_scheduling_problem(4, 3);
    assert_eq!(p.constraints.len(), 3);
    assert_eq!(p.constraints[0], ("T1".to_string(), "T2".to_string()));
  }
}
