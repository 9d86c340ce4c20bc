//! # Contract Review Types
//!
//! Core types, models, and error definitions for the contract review service.
//!
//! - **`error`** - Typed errors for request analysis and startup configuration
//! - **`models`** - Inbound request, outbound result, and prompt language
//! - **`protocol`** - DashScope text-generation request/response shapes
//!
//! ## Architecture Role
//!
//! ```text
//!          contract-review-types (this crate)
//!                        │
//!                        ▼
//!              contract-review-core
//!                        │
//!                        ▼
//!             contract-review-server
//! ```

pub mod error;
pub mod models;
pub mod protocol;

pub use error::{AnalysisError, ConfigError};
pub use models::{AnalysisRequest, AnalysisResult, Language};
