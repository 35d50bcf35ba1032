//! REST implementation of the persistence gateway.

use crate::error::{GatewayError, GatewayResult};
use crate::gateway::PersistenceGateway;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use vitae_types::{ResumeId, SectionId};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct RearrangeBody<'a> {
    #[serde(rename = "sectionIds")]
    section_ids: &'a [SectionId],
}

/// Persists section orders via the resume REST API.
///
/// Issues `PATCH {base_url}/resumes/{id}/rearrange` with the full id order
/// as JSON. Retry policy is deliberately left to callers.
#[derive(Debug)]
pub struct HttpGateway {
    base_url: String,
    client: reqwest::Client,
    bearer_token: Option<String>,
}

impl HttpGateway {
    /// Creates a gateway against the given API base URL.
    pub fn new(base_url: impl Into<String>) -> GatewayResult<Self> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(GatewayError::Config("base URL must not be empty".into()));
        }
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        Ok(Self {
            base_url,
            client,
            bearer_token: None,
        })
    }

    /// Attaches a bearer token sent with every request.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    fn rearrange_url(&self, resume_id: &ResumeId) -> String {
        format!(
            "{}/resumes/{}/rearrange",
            self.base_url.trim_end_matches('/'),
            resume_id
        )
    }
}

#[async_trait]
impl PersistenceGateway for HttpGateway {
    async fn rearrange(
        &self,
        resume_id: &ResumeId,
        section_ids: &[SectionId],
    ) -> GatewayResult<()> {
        let url = self.rearrange_url(resume_id);
        debug!(resume_id = %resume_id, sections = section_ids.len(), "persisting section order");

        let mut request = self
            .client
            .patch(&url)
            .json(&RearrangeBody { section_ids });
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.as_u16() == 429 {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(1);
            return Err(GatewayError::RateLimited { retry_after_secs });
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}
