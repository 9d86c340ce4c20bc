//! Protocol definitions for the upstream provider.
//!
//! Only Alibaba DashScope's native text-generation API is spoken.

pub mod dashscope;

pub use dashscope::{
    DashScopeMessage, DashScopeRole, GenerationRequest, GenerationResponse, ProviderContent,
};
