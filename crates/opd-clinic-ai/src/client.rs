//! HTTP client for the external structuring service.
//!
//! Fire-once, await-completion, no retry: a failed call surfaces as a
//! single [`StructuringError::Service`] and the user resubmits.

use crate::structuring::{StructuringRequest, StructuringResponse, StructuringResult};
use crate::StructuringError;

/// Client for the hosted speech-structuring endpoint.
pub struct StructuringClient {
    endpoint: String,
    http: reqwest::blocking::Client,
}

impl StructuringClient {
    /// Create a client for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one dictation for structuring.
    pub fn structure(
        &self,
        request: &StructuringRequest,
    ) -> StructuringResult<StructuringResponse> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| StructuringError::Service(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StructuringError::Service(format!(
                "endpoint returned {}",
                response.status()
            )));
        }

        response
            .json::<StructuringResponse>()
            .map_err(|e| StructuringError::Service(e.to_string()))
    }
}
