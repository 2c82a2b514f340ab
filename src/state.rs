//! Application state: the injected, immutable knowledge base.
//!
//! Scoring is pure and stateless, so unlike a session-keeping service
//! there are no mutable stores here — just the knowledge table, built
//! once at startup (built-in entries plus optional TOML overrides) and
//! shared read-only by every request.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::config::load_knowledge_config_from_env;
use crate::knowledge::KnowledgeBase;

#[derive(Clone)]
pub struct AppState {
    pub knowledge: Arc<KnowledgeBase>,
}

impl AppState {
    /// Build state from env: built-in knowledge table, then TOML overrides.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let mut kb = KnowledgeBase::builtin();

        if let Some(cfg) = load_knowledge_config_from_env() {
            for entry in cfg.problems {
                info!(target: "quiz", problem = %entry.problem, "Knowledge entry from config");
                kb.insert(entry);
            }
        }

        info!(target: "quiz", entries = kb.len(), "Knowledge base ready");

        Self { knowledge: Arc::new(kb) }
    }

    /// Build state around a fixed knowledge table (tests, alternate banks).
    #[allow(dead_code)]
    pub fn with_knowledge(kb: KnowledgeBase) -> Self {
        Self { knowledge: Arc::new(kb) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeBase;

    #[test]
    fn default_state_carries_the_builtin_table() {
        let state = AppState::new();
        assert!(state.knowledge.get("N-Queens").is_some());
    }

    #[test]
    fn alternate_tables_can_be_injected() {
        let state = AppState::with_knowledge(KnowledgeBase::default());
        assert!(state.knowledge.is_empty());
    }
}
