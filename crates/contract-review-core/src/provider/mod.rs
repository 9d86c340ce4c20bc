//! Outbound call to the DashScope provider.

mod client;

pub use client::{build_http_client, InferenceClient};
