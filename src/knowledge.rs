//! Static knowledge base for the strategy quiz: per problem, the ranked
//! strategy categories and the explanation shown back to the student.
//!
//! Built once at startup and shared read-only; entries loaded from the
//! optional TOML config are merged over the built-in table by problem
//! name. Lookup is by exact name, an unknown name is a defined miss.

use std::collections::HashMap;

use serde::Deserialize;

/// One problem's strategy taxonomy and explanatory text.
#[derive(Clone, Debug, Deserialize)]
pub struct KnowledgeEntry {
  pub problem: String,
  pub optimal: String,
  #[serde(default)]
  pub very_good: Vec<String>,
  #[serde(default)]
  pub acceptable: Vec<String>,
  #[serde(default)]
  pub suboptimal: Vec<String>,
  #[serde(default)]
  pub wrong: Vec<String>,
  #[serde(default)]
  pub keywords: Vec<String>,
  pub explanation: String,
}

/// Optimal-strategy answer for the `search /solve` surface.
#[derive(Clone, Debug)]
pub struct StrategyAdvice {
  pub optimal_strategy: String,
  pub alternative_strategies: Vec<String>,
  pub explanation: String,
}

#[derive(Clone, Debug, Default)]
pub struct KnowledgeBase {
  entries: HashMap<String, KnowledgeEntry>,
}

macro_rules! entry {
  ($problem:expr, $optimal:expr,
   vg: [$($vg:expr),* $(,)?],
   ok: [$($ok:expr),* $(,)?],
   sub: [$($sub:expr),* $(,)?],
   wrong: [$($wrong:expr),* $(,)?],
   kw: [$($kw:expr),* $(,)?],
   $explanation:expr) => {
    KnowledgeEntry {
      problem: $problem.into(),
      optimal: $optimal.into(),
      very_good: vec![$($vg.into()),*],
      acceptable: vec![$($ok.into()),*],
      suboptimal: vec![$($sub.into()),*],
      wrong: vec![$($wrong.into()),*],
      keywords: vec![$($kw.into()),*],
      explanation: $explanation.into(),
    }
  };
}

impl KnowledgeBase {
  /// The built-in table. Text is kept exactly as graded in production;
  /// scoring fidelity depends on these strings.
  pub fn builtin() -> Self {
    let entries = vec![
      entry!(
        "N-Queens", "Backtracking cu Forward Checking",
        vg: ["Backtracking cu Forward Checking", "Backtracking cu constrângeri"],
        ok: ["Backtracking"],
        sub: ["DFS", "Depth-First Search"],
        wrong: ["BFS", "Breadth-First Search", "A*", "Hill Climbing", "Greedy"],
        kw: ["constrângeri", "csp", "revenire", "pruning", "forward checking"],
        "N-Queens este o problemă de satisfacere a constrângerilor (CSP). \
         Backtracking cu Forward Checking este optim deoarece elimină valorile invalide \
         din domenii înainte de a încerca următoarea atribuire, reducând dramatic spațiul de căutare."
      ),
      entry!(
        "Hanoi", "DFS",
        vg: ["DFS", "Depth-First Search"],
        ok: ["Iterative Deepening"],
        sub: ["BFS", "Breadth-First Search"],
        wrong: ["A*", "Hill Climbing", "Backtracking", "Greedy"],
        kw: ["recursiv", "stivă", "adâncime", "memorie limitată"],
        "Turnurile Hanoi au o soluție recursivă naturală, iar DFS urmează \
         exact acest pattern. Iterative Deepening poate fi folosit pentru soluții optime \
         cu memorie limitată."
      ),
      entry!(
        "Graph Coloring", "Backtracking cu MRV",
        vg: ["Backtracking cu MRV", "Backtracking cu Forward Checking"],
        ok: ["Backtracking"],
        sub: ["DFS", "Depth-First Search", "Greedy"],
        wrong: ["BFS", "Breadth-First Search", "A*", "UCS", "Hill Climbing"],
        kw: ["constrângeri", "csp", "mrv", "euristică", "minimum remaining values"],
        "Graph Coloring este CSP.  Backtracking cu MRV (Minimum Remaining Values) \
         este optim deoarece alege întâi variabilele cu cele mai puține opțiuni rămase, \
         detectând rapid situațiile fără soluție și reducând dramatic spațiul de căutare."
      ),
      entry!(
        "Knight's Tour", "Backtracking cu Warnsdorff",
        vg: ["Backtracking cu Warnsdorff", "Backtracking cu euristică", "Backtracking cu heuristic"],
        ok: ["Backtracking"],
        sub: ["DFS", "Depth-First Search"],
        wrong: ["BFS", "Breadth-First Search", "A*", "Hill Climbing", "Greedy", "UCS"],
        kw: ["warnsdorff", "euristică", "exhaustiv", "revenire", "heuristic"],
        "Knight's Tour necesită explorarea exhaustivă cu revenire.  \
         Backtracking cu heuristica Warnsdorff (alegerea mutării către poziția cu cele mai puține opțiuni) \
         reduce dramatic timpul de căutare de la ore la secunde."
      ),
    ];

    let mut kb = Self::default();
    for e in entries {
      kb.insert(e);
    }
    kb
  }

  /// Insert or replace an entry, keyed by its problem name.
  pub fn insert(&mut self, entry: KnowledgeEntry) {
    self.entries.insert(entry.problem.clone(), entry);
  }

  pub fn get(&self, problem_name: &str) -> Option<&KnowledgeEntry> {
    self.entries.get(problem_name)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  #[allow(dead_code)]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Optimal strategy plus accepted alternatives for a problem.
  /// `None` for an unknown problem name.
  pub fn advice(&self, problem_name: &str) -> Option<StrategyAdvice> {
    let e = self.get(problem_name)?;
    let mut alternatives = e.very_good.clone();
    alternatives.extend(e.acceptable.iter().cloned());
    Some(StrategyAdvice {
      optimal_strategy: e.optimal.clone(),
      alternative_strategies: alternatives,
      explanation: e.explanation.clone(),
    })
  }
}
