//! Domain models shared by generators, solvers and the scoring engine.

use serde::{Deserialize, Serialize};

/// Whose turn a game-tree node represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeType {
  #[serde(rename = "MAX")]
  Max,
  #[serde(rename = "MIN")]
  Min,
}

impl NodeType {
  pub fn opposite(self) -> Self {
    match self {
      NodeType::Max => NodeType::Min,
      NodeType::Min => NodeType::Max,
    }
  }
}

/// A minimax tree node: internal nodes carry `node_type` + `children`,
/// leaves carry `value`. Both shapes share one struct so the JSON the
/// frontend renders stays a single recursive object.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TreeNode {
  #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
  pub node_type: Option<NodeType>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub children: Option<Vec<TreeNode>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub value: Option<i64>,
}

impl TreeNode {
  pub fn leaf(value: i64) -> Self {
    TreeNode { node_type: None, children: None, value: Some(value) }
  }

  pub fn internal(node_type: NodeType, children: Vec<TreeNode>) -> Self {
    TreeNode { node_type: Some(node_type), children: Some(children), value: None }
  }

  pub fn is_leaf(&self) -> bool {
    self.value.is_some()
  }
}

/// Difficulty of a generated strategy-quiz question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizDifficulty {
  Easy,
  Medium,
  Hard,
}

impl QuizDifficulty {
  /// Number of multiple-choice options shown at this difficulty.
  pub fn option_count(self) -> usize {
    match self {
      QuizDifficulty::Easy => 3,
      QuizDifficulty::Medium => 5,
      QuizDifficulty::Hard => 7,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      QuizDifficulty::Easy => "easy",
      QuizDifficulty::Medium => "medium",
      QuizDifficulty::Hard => "hard",
    }
  }

  pub fn parse(s: &str) -> Option<Self> {
    match s {
      "easy" => Some(QuizDifficulty::Easy),
      "medium" => Some(QuizDifficulty::Medium),
      "hard" => Some(QuizDifficulty::Hard),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tree_node_roundtrips_through_json() {
    let tree = TreeNode::internal(
      NodeType::Max,
      vec![TreeNode::leaf(3), TreeNode::internal(NodeType::Min, vec![TreeNode::leaf(1)])],
    );
    let json = serde_json::to_string(&tree).unwrap();
    assert!(json.contains("\"type\":\"MAX\""));
    let back: TreeNode = serde_json::from_str(&json).unwrap();
    assert!(!back.is_leaf());
    assert_eq!(back.children.as_ref().unwrap()[0].value, Some(3));
  }

  #[test]
  fn difficulty_parses_wire_names() {
    assert_eq!(QuizDifficulty::parse("hard"), Some(QuizDifficulty::Hard));
    assert_eq!(QuizDifficulty::parse("extreme"), None);
    assert_eq!(QuizDifficulty::Medium.option_count(), 5);
  }
}
