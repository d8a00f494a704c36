use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;
use url::Url;
use uuid::Uuid;

use crate::domain::ports::RegistrationFormsPort;

/// HTTP adapter for the external registration-forms service.
pub struct HttpFormsClient {
    client: reqwest::Client,
    base: Url,
}

#[derive(Debug, Deserialize)]
struct CreateFormResp {
    url: String,
}

impl HttpFormsClient {
    pub fn new(client: reqwest::Client, base: Url) -> Self {
        Self { client, base }
    }
}

#[async_trait]
impl RegistrationFormsPort for HttpFormsClient {
    #[instrument(
        name = "events.http.forms.create_form",
        skip_all,
        fields(base = %self.base, event_id = %event_id)
    )]
    async fn create_form(&self, event_id: Uuid, title: &str) -> anyhow::Result<Option<String>> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("invalid forms base URL"))?
            .extend(&["api", "forms"]);

        let response = self
            .client
            .post(url.as_str())
            .json(&serde_json::json!({ "eventId": event_id, "title": title }))
            .send()
            .await
            .with_context(|| "POST /api/forms")?;

        if !response.status().is_success() {
            anyhow::bail!("forms service returned HTTP {}", response.status());
        }

        let body: CreateFormResp = response
            .json()
            .await
            .context("forms service returned malformed body")?;
        Ok(Some(body.url))
    }
}

/// Used when no forms integration is configured.
pub struct DisabledForms;

#[async_trait]
impl RegistrationFormsPort for DisabledForms {
    async fn create_form(&self, _event_id: Uuid, _title: &str) -> anyhow::Result<Option<String>> {
        Ok(None)
    }
}
