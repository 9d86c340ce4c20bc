use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use contract_review_types::{AnalysisError, AnalysisRequest, AnalysisResult, Language};

use super::response::{failure_response, method_not_allowed};
use crate::prompt::build_prompt;
use crate::state::AnalysisState;

/// Entry point for every method on the analysis routes.
///
/// Pre-flight short-circuits, anything but POST is 405, and all analysis
/// failures are rendered here rather than propagated.
pub async fn handle_analysis(
    State(state): State<AnalysisState>,
    method: Method,
    body: Bytes,
) -> Response {
    tracing::info!("📨 [Analyze] {} request received ({} bytes)", method, body.len());

    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    if method != Method::POST {
        return method_not_allowed(&method);
    }

    match analyze(&state, &body).await {
        Ok(result) => (StatusCode::OK, Json(AnalysisResult::success(result))).into_response(),
        Err(err) => failure_response(&err, state.environment()),
    }
}

/// Validate, prompt, call the provider once, and extract the generated text.
pub async fn analyze(state: &AnalysisState, body: &[u8]) -> Result<String, AnalysisError> {
    let request = AnalysisRequest::from_body(body);
    let text = request.validated_text()?;

    let lang_code = request.lang_code();
    if Language::recognize(lang_code).is_none() {
        tracing::debug!("[Analyze] Unrecognised lang {:?}, using fallback template", lang_code);
    }
    let language = request.language();

    tracing::info!(
        "📝 [Analyze] Prompting provider: lang={}, text_len={}",
        lang_code,
        text.chars().count()
    );

    let prompt = build_prompt(language, text);
    let response = state.client().generate(prompt).await?;

    Ok(response.content().into_text())
}
