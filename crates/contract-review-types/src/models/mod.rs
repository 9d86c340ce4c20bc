//! Domain models for the contract review service.
//!
//! Everything here lives for the duration of one request.

mod analysis;
mod language;

pub use analysis::{AnalysisRequest, AnalysisResult, DEFAULT_LANGUAGE_CODE, MIN_TEXT_CHARS};
pub use language::Language;
