//! Public request/response structs for the HTTP endpoints (serde ready).
//! Wire names stay snake_case; keep this small and stable so backend and
//! frontend can evolve independently.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::TreeNode;

//
// Health
//

#[derive(Serialize)]
pub struct RootOut {
    pub message: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct ReadyOut {
    pub ready: bool,
}

/// Score + feedback, shared by the numeric and Nash evaluate endpoints.
#[derive(Serialize)]
pub struct ScoreOut {
    pub score: u8,
    pub feedback: String,
}

//
// Grid path (A*)
//

/// Grid problem: `0` free cell, `1` obstacle. Doubles as the /generate
/// response and the /solve request.
#[derive(Debug, Serialize, Deserialize)]
pub struct PathProblem {
    pub grid: Vec<Vec<u8>>,
    pub start: (usize, usize),
    pub goal: (usize, usize),
    pub question: String,
}

#[derive(Serialize)]
pub struct PathSolveOut {
    pub has_path: bool,
    pub cost: Option<usize>,
    pub path: Vec<(usize, usize)>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct PathEvaluateIn {
    pub student_answer: String,
    #[serde(default)]
    pub correct_cost: Option<i64>,
    pub has_path: bool,
}

//
// Graph (BFS)
//

#[derive(Debug, Serialize, Deserialize)]
pub struct GraphProblem {
    pub graph: HashMap<String, Vec<String>>,
    pub start: String,
    pub goal: String,
    pub question: String,
}

#[derive(Serialize)]
pub struct GraphSolveOut {
    pub has_path: bool,
    pub distance: Option<usize>,
    pub path: Vec<String>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct GraphEvaluateIn {
    pub student_answer: String,
    #[serde(default)]
    pub correct_distance: Option<i64>,
    pub has_path: bool,
}

//
// Nash
//

#[derive(Debug, Serialize, Deserialize)]
pub struct NashProblem {
    pub p1_payoffs: Vec<Vec<i64>>,
    pub p2_payoffs: Vec<Vec<i64>>,
    pub p1_strategies: Vec<String>,
    pub p2_strategies: Vec<String>,
}

#[derive(Serialize)]
pub struct NashGenerateOut {
    pub question: String,
    pub p1_strategies: Vec<String>,
    pub p2_strategies: Vec<String>,
    pub p1_payoffs: Vec<Vec<i64>>,
    pub p2_payoffs: Vec<Vec<i64>>,
}

#[derive(Serialize)]
pub struct NashEquilibriumOut {
    pub row: usize,
    pub col: usize,
    pub name: String,
}

#[derive(Serialize)]
pub struct NashSolveOut {
    pub has_equilibrium: bool,
    pub equilibria: Vec<NashEquilibriumOut>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct NashEvaluateIn {
    pub student_answer: String,
    #[serde(default)]
    pub correct_equilibria: Vec<String>,
}

//
// Alpha-beta game tree
//

fn default_depth() -> u8 { 3 }
fn default_branching() -> u8 { 2 }
fn default_value_min() -> i64 { 0 }
fn default_value_max() -> i64 { 15 }

#[derive(Debug, Deserialize)]
pub struct GenerateTreeIn {
    #[serde(default = "default_depth")]
    pub depth: u8,
    #[serde(default = "default_branching")]
    pub branching: u8,
    #[serde(default = "default_value_min")]
    pub value_min: i64,
    #[serde(default = "default_value_max")]
    pub value_max: i64,
}

#[derive(Serialize)]
pub struct TreeMetaOut {
    pub depth: u8,
    pub branching: u8,
    pub value_range: [i64; 2],
}

#[derive(Serialize)]
pub struct AlphaBetaGenerateOut {
    pub question: String,
    pub root: TreeNode,
    pub meta: TreeMetaOut,
}

#[derive(Debug, Deserialize)]
pub struct AlphaBetaProblem {
    pub root: TreeNode,
}

#[derive(Serialize)]
pub struct AlphaBetaSolveOut {
    pub root_value: i64,
    pub visited_leaves: u32,
    pub trace: Vec<String>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct AlphaBetaEvaluateIn {
    #[serde(default)]
    pub student_root_value: Option<i64>,
    #[serde(default)]
    pub student_visited_leaves: Option<u32>,
    pub correct_root_value: i64,
    pub correct_visited_leaves: u32,
}

//
// Strategy quiz
//

#[derive(Debug, Deserialize)]
pub struct QuizQuery {
    pub difficulty: Option<String>,
}

#[derive(Serialize)]
pub struct QuizGenerateOut {
    pub question_text: String,
    pub problem_name: String,
    pub instance_description: String,
    pub difficulty: String,
    pub options: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct SearchProblemIn {
    pub problem_name: String,
    #[serde(default)]
    pub instance_description: Option<String>,
}

#[derive(Serialize)]
pub struct SearchSolutionOut {
    pub problem_name: String,
    pub optimal_strategy: String,
    pub alternative_strategies: Vec<String>,
    pub explanation: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchEvaluateIn {
    pub problem_name: String,
    pub student_answer: String,
    #[serde(default)]
    pub instance_description: Option<String>,
}

#[derive(Serialize)]
pub struct SearchEvaluateOut {
    pub score: u8,
    pub feedback: String,
    pub correct_answer: String,
    pub detailed_analysis: Option<String>,
}

//
// CSP
//

#[derive(Debug, Serialize, Deserialize)]
pub struct CspProblem {
    pub variables: Vec<String>,
    pub domains: HashMap<String, Vec<String>>,
    pub constraints: Vec<(String, String)>,
}

#[derive(Serialize)]
pub struct CspSolutionOut {
    pub solution: HashMap<String, String>,
    pub steps: u64,
    pub message: String,
}

fn default_problem_type() -> String { "random".to_string() }
fn default_num_variables() -> usize { 4 }
fn default_edge_probability() -> f64 { 0.4 }
fn default_num_colors() -> usize { 3 }
fn default_num_time_slots() -> usize { 3 }
fn default_domain_size_min() -> usize { 2 }
fn default_domain_size_max() -> usize { 4 }
fn default_num_constraints() -> usize { 4 }

#[derive(Debug, Deserialize)]
pub struct GenerateCspIn {
    #[serde(default = "default_problem_type")]
    pub problem_type: String,
    #[serde(default = "default_num_variables")]
    pub num_variables: usize,
    #[serde(default = "default_edge_probability")]
    pub edge_probability: f64,
    #[serde(default = "default_num_colors")]
    pub num_colors: usize,
    #[serde(default = "default_num_time_slots")]
    pub num_time_slots: usize,
    #[serde(default = "default_domain_size_min")]
    pub domain_size_min: usize,
    #[serde(default = "default_domain_size_max")]
    pub domain_size_max: usize,
    #[serde(default = "default_num_constraints")]
    pub num_constraints: usize,
}

/// Error payload for requests the service can answer but not fulfil
/// (e.g. an unknown problem name on /search/solve).
#[derive(Serialize)]
pub struct ErrorOut {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_tree_request_fills_defaults() {
        let req: GenerateTreeIn = serde_json::from_str("{}").unwrap();
        assert_eq!((req.depth, req.branching, req.value_min, req.value_max), (3, 2, 0, 15));
    }

    #[test]
    fn csp_constraints_parse_as_string_pairs() {
        let p: CspProblem = serde_json::from_str(
            r#"{"variables":["X1","X2"],"domains":{"X1":["a"],"X2":["a","b"]},"constraints":[["X1","X2"]]}"#,
        )
        .unwrap();
        assert_eq!(p.constraints, vec![("X1".to_string(), "X2".to_string())]);
    }

    #[test]
    fn evaluate_requests_tolerate_missing_optionals() {
        let req: PathEvaluateIn =
            serde_json::from_str(r#"{"student_answer":"nu există drum","has_path":false}"#).unwrap();
        assert!(req.correct_cost.is_none());

        let req: AlphaBetaEvaluateIn =
            serde_json::from_str(r#"{"correct_root_value":3,"correct_visited_leaves":4}"#).unwrap();
        assert!(req.student_root_value.is_none());
    }
}
