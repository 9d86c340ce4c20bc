//! # Contract Review Core
//!
//! Request handling for the trade-contract review endpoint:
//!
//! - **`config`** - Validated provider configuration and runtime environment
//! - **`prompt`** - Language-specific lawyer prompts and length capping
//! - **`provider`** - Single-shot DashScope client
//! - **`analysis`** - The axum handler and error-to-response mapping
//! - **`middleware`** - Permissive CORS headers on every response
//! - **`server`** - Router wiring for the analysis endpoint
//! - **`state`** - Read-only state shared by all requests

pub mod analysis;
pub mod config;
pub mod middleware;
pub mod prompt;
pub mod provider;
pub mod server;
pub mod state;

pub use config::{ApiKey, ProviderConfig, RuntimeEnvironment};
pub use provider::InferenceClient;
pub use server::build_analysis_router;
pub use state::AnalysisState;
