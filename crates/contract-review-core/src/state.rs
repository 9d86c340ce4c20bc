//! Shared, read-only handler state.

use std::sync::Arc;

use crate::config::RuntimeEnvironment;
use crate::provider::InferenceClient;

#[derive(Clone)]
pub struct AnalysisState {
    pub(crate) inner: Arc<AnalysisStateInner>,
}

pub struct AnalysisStateInner {
    pub client: InferenceClient,
    pub environment: RuntimeEnvironment,
}

impl AnalysisState {
    pub fn new(client: InferenceClient, environment: RuntimeEnvironment) -> Self {
        Self { inner: Arc::new(AnalysisStateInner { client, environment }) }
    }

    pub fn client(&self) -> &InferenceClient {
        &self.inner.client
    }

    pub fn environment(&self) -> RuntimeEnvironment {
        self.inner.environment
    }
}
