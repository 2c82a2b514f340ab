//! Minimax with alpha-beta pruning over the generated game tree.
//!
//! Besides the root value the solver reports how many leaves were
//! actually evaluated (the pruning payoff the question asks about) and
//! a human-readable trace the frontend can replay step by step.

use crate::domain::{NodeType, TreeNode};

const NEG_INF: i64 = -1_000_000_000;
const POS_INF: i64 = 1_000_000_000;

/// Result of one alpha-beta run.
#[derive(Clone, Debug)]
pub struct AlphaBetaRun {
  pub root_value: i64,
  pub visited_leaves: u32,
  pub trace: Vec<String>,
}

/// Solve the tree, counting evaluated leaves and recording a trace.
pub fn alphabeta_minimax(root: &TreeNode) -> AlphaBetaRun {
  let mut run = AlphaBetaRun { root_value: 0, visited_leaves: 0, trace: Vec::new() };
  run.root_value = descend(root, NEG_INF, POS_INF, 0, &mut run.visited_leaves, &mut run.trace);
  run
}

fn descend(node: &TreeNode, mut alpha: i64, mut beta: i64, depth: usize, visited: &mut u32, trace: &mut Vec<String>) -> i64 {
  let indent = "  ".repeat(depth);

  if let Some(value) = node.value {
    *visited += 1;
    trace.push(format!("{indent}Leaf -> {value}"));
    return value;
  }

  let (Some(node_type), Some(children)) = (node.node_type, node.children.as_ref()) else {
    trace.push(format!("{indent}Nod invalid (fără copii/type)."));
    return 0;
  };
  if children.is_empty() {
    trace.push(format!("{indent}Nod invalid (fără copii/type)."));
    return 0;
  }

  match node_type {
    NodeType::Max => {
      let mut v = NEG_INF;
      trace.push(format!("{indent}MAX node (α={alpha}, β={beta})"));
      for (idx, child) in children.iter().enumerate() {
        let child_val = descend(child, alpha, beta, depth + 1, visited, trace);
        v = v.max(child_val);
        alpha = alpha.max(v);
        trace.push(format!("{indent}  -> after child {}: v={v}, α={alpha}, β={beta}", idx + 1));
        if beta <= alpha {
          trace.push(format!("{indent}  PRUNE (β<=α) la MAX după copilul {}", idx + 1));
          break;
        }
      }
      v
    }
    NodeType::Min => {
      let mut v = POS_INF;
      trace.push(format!("{indent}MIN node (α={alpha}, β={beta})"));
      for (idx, child) in children.iter().enumerate() {
        let child_val = descend(child, alpha, beta, depth + 1, visited, trace);
        v = v.min(child_val);
        beta = beta.min(v);
        trace.push(format!("{indent}  -> after child {}: v={v}, α={alpha}, β={beta}", idx + 1));
        if beta <= alpha {
          trace.push(format!("{indent}  PRUNE (β<=α) la MIN după copilul {}", idx + 1));
          break;
        }
      }
      v
    }
  }
}
