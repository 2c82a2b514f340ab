//! SmarTest · AI-course quiz backend
//!
//! - Axum HTTP API: generate / solve / evaluate per problem domain
//! - Free-text answers graded locally against solver ground truth
//! - Static knowledge base, extendable from TOML
//!
//! Important env variables:
//!   PORT            : u16 (default 8000)
//!   KNOWLEDGE_CONFIG_PATH : path to TOML knowledge overrides
//!   LOG_LEVEL       : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT      : "pretty" (default) or "json"

mod telemetry;
mod util;
mod domain;
mod normalize;
mod extract;
mod matching;
mod knowledge;
mod config;
mod scoring;
mod solvers;
mod generate;
mod state;
mod protocol;
mod logic;
mod routes;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::routes::build_router;
use crate::state::AppState;

#[instrument(level = "info", skip_all)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  // Build shared application state (knowledge base from built-ins + TOML).
  let state = Arc::new(AppState::new());

  // Build the HTTP router with routes, CORS and tracing layers.
  let app = build_router(state.clone());

  // Read port from env or default to 8000.
  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "smartest_backend", %addr, "HTTP server listening");
  axum::serve(listener, app).await?;
  Ok(())
}
