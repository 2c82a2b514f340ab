//! Core operations shared by the HTTP handlers: solve each domain's
//! instance and grade student answers against the supplied ground truth.
//!
//! Everything here is synchronous and pure apart from logging; the
//! handlers stay thin wrappers around these entry points.

use tracing::{info, instrument};

use crate::knowledge::KnowledgeBase;
use crate::protocol::*;
use crate::scoring::{
  evaluate_cost_answer, evaluate_minimax_answer, evaluate_nash_answer, evaluate_quiz_answer,
  CostTruth, GRAPH_DISTANCE, GRID_COST,
};
use crate::solvers::alphabeta::alphabeta_minimax;
use crate::solvers::csp::{backtracking, backtracking_mrv};
use crate::solvers::graph::bfs_shortest_path;
use crate::solvers::nash::pure_nash_equilibria;
use crate::solvers::path::a_star_shortest_path;
use crate::util::trunc_for_log;

// -------- solve --------

#[instrument(level = "debug", skip(problem))]
pub fn solve_path(problem: &PathProblem) -> PathSolveOut {
  match a_star_shortest_path(&problem.grid, problem.start, problem.goal) {
    Some((cost, path)) => PathSolveOut {
      has_path: true,
      cost: Some(cost),
      path,
      message: "Drum minim găsit.".into(),
    },
    None => PathSolveOut {
      has_path: false,
      cost: None,
      path: Vec::new(),
      message: "Nu există drum valid.".into(),
    },
  }
}

#[instrument(level = "debug", skip(problem))]
pub fn solve_graph(problem: &GraphProblem) -> GraphSolveOut {
  match bfs_shortest_path(&problem.graph, &problem.start, &problem.goal) {
    Some((distance, path)) => GraphSolveOut {
      has_path: true,
      distance: Some(distance),
      path,
      message: "Drum minim găsit (BFS).".into(),
    },
    None => GraphSolveOut {
      has_path: false,
      distance: None,
      path: Vec::new(),
      message: "Nu există drum valid (BFS).".into(),
    },
  }
}

#[instrument(level = "debug", skip(problem))]
pub fn solve_nash(problem: &NashProblem) -> NashSolveOut {
  let label = |list: &[String], idx: usize| list.get(idx).cloned().unwrap_or_else(|| idx.to_string());

  let equilibria: Vec<NashEquilibriumOut> = pure_nash_equilibria(&problem.p1_payoffs, &problem.p2_payoffs)
    .into_iter()
    .map(|(row, col)| NashEquilibriumOut {
      row,
      col,
      name: format!("({}, {})", label(&problem.p1_strategies, row), label(&problem.p2_strategies, col)),
    })
    .collect();

  if equilibria.is_empty() {
    NashSolveOut {
      has_equilibrium: false,
      equilibria,
      message: "Nu există echilibru Nash pur.".into(),
    }
  } else {
    NashSolveOut {
      has_equilibrium: true,
      equilibria,
      message: "Există cel puțin un echilibru Nash pur.".into(),
    }
  }
}

#[instrument(level = "debug", skip(problem))]
pub fn solve_alphabeta(problem: &AlphaBetaProblem) -> AlphaBetaSolveOut {
  let run = alphabeta_minimax(&problem.root);
  AlphaBetaSolveOut {
    root_value: run.root_value,
    visited_leaves: run.visited_leaves,
    trace: run.trace,
    message: "Soluție calculată cu MinMax + Alpha-Beta.".into(),
  }
}

#[instrument(level = "debug", skip(kb))]
pub fn solve_search(kb: &KnowledgeBase, problem_name: &str) -> Option<SearchSolutionOut> {
  kb.advice(problem_name).map(|advice| SearchSolutionOut {
    problem_name: problem_name.to_string(),
    optimal_strategy: advice.optimal_strategy,
    alternative_strategies: advice.alternative_strategies,
    explanation: advice.explanation,
  })
}

#[instrument(level = "debug", skip(problem))]
pub fn solve_csp(problem: &CspProblem) -> CspSolutionOut {
  let (solution, steps) = backtracking(&problem.variables, &problem.domains, &problem.constraints);
  match solution {
    Some(solution) => CspSolutionOut { solution, steps, message: "Soluție găsită.".into() },
    None => CspSolutionOut {
      solution: Default::default(),
      steps,
      message: "Nu există soluție validă.".into(),
    },
  }
}

#[instrument(level = "debug", skip(problem))]
pub fn solve_csp_mrv(problem: &CspProblem) -> CspSolutionOut {
  let (solution, steps) = backtracking_mrv(&problem.variables, &problem.domains, &problem.constraints);
  match solution {
    Some(solution) => CspSolutionOut { solution, steps, message: "Soluție găsită cu MRV.".into() },
    None => CspSolutionOut {
      solution: Default::default(),
      steps,
      message: "Nu există soluție validă (MRV).".into(),
    },
  }
}

// -------- evaluate --------

#[instrument(level = "info", skip(req), fields(answer_len = req.student_answer.len()))]
pub fn evaluate_path(req: &PathEvaluateIn) -> ScoreOut {
  let truth = CostTruth { has_path: req.has_path, correct: req.correct_cost };
  let result = evaluate_cost_answer(&GRID_COST, truth, &req.student_answer);
  info!(target: "quiz", score = result.score, answer = %trunc_for_log(&req.student_answer, 80), "Grid answer evaluated");
  ScoreOut { score: result.score, feedback: result.feedback }
}

#[instrument(level = "info", skip(req), fields(answer_len = req.student_answer.len()))]
pub fn evaluate_graph(req: &GraphEvaluateIn) -> ScoreOut {
  let truth = CostTruth { has_path: req.has_path, correct: req.correct_distance };
  let result = evaluate_cost_answer(&GRAPH_DISTANCE, truth, &req.student_answer);
  info!(target: "quiz", score = result.score, answer = %trunc_for_log(&req.student_answer, 80), "Graph answer evaluated");
  ScoreOut { score: result.score, feedback: result.feedback }
}

#[instrument(level = "info", skip(req), fields(answer_len = req.student_answer.len(), equilibria = req.correct_equilibria.len()))]
pub fn evaluate_nash(req: &NashEvaluateIn) -> ScoreOut {
  let result = evaluate_nash_answer(&req.correct_equilibria, &req.student_answer);
  info!(target: "quiz", score = result.score, answer = %trunc_for_log(&req.student_answer, 80), "Nash answer evaluated");
  ScoreOut { score: result.score, feedback: result.feedback }
}

#[instrument(level = "info", skip(req))]
pub fn evaluate_alphabeta(req: &AlphaBetaEvaluateIn) -> ScoreOut {
  let result = evaluate_minimax_answer(
    req.correct_root_value,
    req.correct_visited_leaves,
    req.student_root_value,
    req.student_visited_leaves,
  );
  info!(target: "quiz", score = result.score, "Alpha-beta answer evaluated");
  ScoreOut { score: result.score, feedback: result.feedback }
}

#[instrument(level = "info", skip(kb, req), fields(problem = %req.problem_name, answer_len = req.student_answer.len()))]
pub fn evaluate_search(kb: &KnowledgeBase, req: &SearchEvaluateIn) -> SearchEvaluateOut {
  let result = evaluate_quiz_answer(
    kb,
    &req.problem_name,
    &req.student_answer,
    req.instance_description.as_deref(),
  );
  info!(target: "quiz", problem = %req.problem_name, score = result.score, answer = %trunc_for_log(&req.student_answer, 80), "Strategy answer evaluated");
  SearchEvaluateOut {
    score: result.score,
    feedback: result.feedback,
    correct_answer: result.correct_answer.unwrap_or_else(|| "N/A".into()),
    detailed_analysis: result.detailed_analysis,
  }
}
