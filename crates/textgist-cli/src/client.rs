//! HTTP client for the summarize endpoint.

use crate::error::{CliError, Result};
use crate::view::SummaryView;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::time::Duration;
use textgist_domain::{InputSource, SummaryRequest};

#[derive(Debug, Deserialize)]
struct SummaryBody {
    summary: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Sends summary requests to a TextGist server
pub struct SummaryClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SummaryClient {
    /// Create a client for the summarize `endpoint`
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// The summarize endpoint in use
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit `request` and wait for the summary
    pub async fn summarize(&self, request: &SummaryRequest) -> Result<SummaryView> {
        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form(request))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .map(|error| error.detail)
                .unwrap_or(body);
            return Err(CliError::Server {
                status: status.as_u16(),
                detail,
            });
        }

        let parsed: SummaryBody = serde_json::from_str(&body)?;
        Ok(SummaryView::new(parsed.summary))
    }
}

fn form(request: &SummaryRequest) -> Form {
    let form = Form::new().text("summary_length", request.length.as_str());
    match &request.source {
        InputSource::Text(text) => form.text("text_input", text.clone()),
        InputSource::Url(url) => form.text("url", url.clone()),
        InputSource::File(upload) => form.part(
            "file",
            Part::bytes(upload.bytes.clone()).file_name(upload.filename.clone()),
        ),
    }
}
