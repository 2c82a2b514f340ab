//! HTTP endpoint handlers. These are thin wrappers that forward to core
//! logic; each handler is instrumented and logs basic result info.

use std::sync::Arc;

use axum::{
  extract::{Query, State},
  http::StatusCode,
  response::IntoResponse,
  Json,
};
use tracing::{info, instrument};

use crate::domain::{NodeType, QuizDifficulty};
use crate::generate;
use crate::logic::*;
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_root() -> impl IntoResponse {
  Json(RootOut { message: "Serverul este activ.".into() })
}

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse {
  Json(HealthOut { status: "ok" })
}

#[instrument(level = "info")]
pub async fn http_ready() -> impl IntoResponse {
  Json(ReadyOut { ready: true })
}

// -------- grid path (A*) --------

#[instrument(level = "info")]
pub async fn http_path_generate() -> impl IntoResponse {
  let q = generate::generate_path_question();
  info!(target: "quiz", n = q.grid.len(), "Grid question served");
  Json(q)
}

#[instrument(level = "info", skip(body))]
pub async fn http_path_solve(Json(body): Json<PathProblem>) -> impl IntoResponse {
  Json(solve_path(&body))
}

#[instrument(level = "info", skip(body))]
pub async fn http_path_evaluate(Json(body): Json<PathEvaluateIn>) -> impl IntoResponse {
  Json(evaluate_path(&body))
}

// -------- graph (BFS) --------

#[instrument(level = "info")]
pub async fn http_graph_generate() -> impl IntoResponse {
  let q = generate::generate_graph_question();
  info!(target: "quiz", nodes = q.graph.len(), "Graph question served");
  Json(q)
}

#[instrument(level = "info", skip(body))]
pub async fn http_graph_solve(Json(body): Json<GraphProblem>) -> impl IntoResponse {
  Json(solve_graph(&body))
}

#[instrument(level = "info", skip(body))]
pub async fn http_graph_evaluate(Json(body): Json<GraphEvaluateIn>) -> impl IntoResponse {
  Json(evaluate_graph(&body))
}

// -------- nash --------

#[instrument(level = "info")]
pub async fn http_nash_generate() -> impl IntoResponse {
  Json(generate::generate_nash_question())
}

#[instrument(level = "info", skip(body))]
pub async fn http_nash_solve(Json(body): Json<NashProblem>) -> impl IntoResponse {
  Json(solve_nash(&body))
}

#[instrument(level = "info", skip(body))]
pub async fn http_nash_evaluate(Json(body): Json<NashEvaluateIn>) -> impl IntoResponse {
  Json(evaluate_nash(&body))
}

// -------- alpha-beta --------

#[instrument(level = "info", skip(body), fields(depth = body.depth, branching = body.branching))]
pub async fn http_alphabeta_generate(Json(body): Json<GenerateTreeIn>) -> impl IntoResponse {
  // Same bounds the request schema documents; anything outside is pulled
  // back in instead of letting the tree size blow up.
  let depth = body.depth.clamp(2, 5);
  let branching = body.branching.clamp(2, 4);
  let value_min = body.value_min.clamp(-50, 50);
  let value_max = body.value_max.clamp(-50, 50);

  let root = generate::generate_tree(depth, branching, value_min, value_max, NodeType::Max);
  Json(AlphaBetaGenerateOut {
    question: "Pentru arborele de mai jos, care este valoarea din rădăcină și câte frunze sunt vizitate cu MinMax + Alpha-Beta?".into(),
    root,
    meta: TreeMetaOut {
      depth,
      branching,
      value_range: [value_min, value_max],
    },
  })
}

#[instrument(level = "info", skip(body))]
pub async fn http_alphabeta_solve(Json(body): Json<AlphaBetaProblem>) -> impl IntoResponse {
  Json(solve_alphabeta(&body))
}

#[instrument(level = "info", skip(body))]
pub async fn http_alphabeta_evaluate(Json(body): Json<AlphaBetaEvaluateIn>) -> impl IntoResponse {
  Json(evaluate_alphabeta(&body))
}

// -------- strategy quiz --------

#[instrument(level = "info", skip(state, q))]
pub async fn http_search_generate(
  State(state): State<Arc<AppState>>,
  Query(q): Query<QuizQuery>,
) -> impl IntoResponse {
  let difficulty = q.difficulty.as_deref().and_then(QuizDifficulty::parse);
  let out = generate::generate_quiz_question(&state.knowledge, difficulty);
  info!(target: "quiz", problem = %out.problem_name, difficulty = %out.difficulty, "Strategy question served");
  Json(out)
}

#[instrument(level = "info", skip(state, body), fields(problem = %body.problem_name))]
pub async fn http_search_solve(
  State(state): State<Arc<AppState>>,
  Json(body): Json<SearchProblemIn>,
) -> impl IntoResponse {
  match solve_search(&state.knowledge, &body.problem_name) {
    Some(solution) => Json(solution).into_response(),
    None => (
      StatusCode::NOT_FOUND,
      Json(ErrorOut { message: format!("Problemă necunoscută: {}", body.problem_name) }),
    )
      .into_response(),
  }
}

#[instrument(level = "info", skip(state, body), fields(problem = %body.problem_name))]
pub async fn http_search_evaluate(
  State(state): State<Arc<AppState>>,
  Json(body): Json<SearchEvaluateIn>,
) -> impl IntoResponse {
  Json(evaluate_search(&state.knowledge, &body))
}

// -------- csp --------

#[instrument(level = "info", skip(body), fields(problem_type = %body.problem_type))]
pub async fn http_csp_generate(Json(body): Json<GenerateCspIn>) -> impl IntoResponse {
  let problem = match body.problem_type.as_str() {
    "graph_coloring" => generate::generate_graph_coloring(body.num_variables, body.edge_probability, body.num_colors),
    "scheduling" => generate::generate_scheduling_problem(body.num_variables, body.num_time_slots),
    _ => generate::generate_random_csp(
      body.num_variables,
      body.domain_size_min,
      body.domain_size_max,
      body.num_constraints,
    ),
  };
  Json(problem)
}

#[instrument(level = "info", skip(body))]
pub async fn http_csp_solve(Json(body): Json<CspProblem>) -> impl IntoResponse {
  Json(solve_csp(&body))
}

#[instrument(level = "info", skip(body))]
pub async fn http_csp_solve_mrv(Json(body): Json<CspProblem>) -> impl IntoResponse {
  Json(solve_csp_mrv(&body))
}
