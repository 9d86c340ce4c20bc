//! Router-level middleware.

pub mod cors;

pub use cors::{apply_cors_headers, cors_headers};
