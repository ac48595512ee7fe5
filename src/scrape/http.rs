//! Thin session client wrapping reqwest.
//!
//! One `SessionClient` holds one cookie jar. The scraper constructs a
//! fresh client per call, so the ASP.NET session cookie set by the form
//! page GET is replayed on the search POST and never shared across
//! concurrent calls. No retries: one request, one answer.

use crate::error::ScrapeError;
use std::time::Duration;
use url::Url;

/// Cookie-bearing HTTP client for a single scrape cycle.
pub struct SessionClient {
    client: reqwest::Client,
}

impl SessionClient {
    /// Create a client with a fresh cookie jar and the given user-agent.
    pub fn new(user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(user_agent)
            .build()
            .unwrap_or_else(|e| {
                // The fallback client has no cookie jar, so the search
                // POST would lose the ASP.NET session cookie.
                tracing::warn!("session client builder failed, cookies disabled: {e}");
                reqwest::Client::default()
            });
        Self { client }
    }

    /// GET a page and return its body text. Non-success statuses are
    /// upstream errors.
    pub async fn get(&self, url: Url, timeout: Duration) -> Result<String, ScrapeError> {
        let resp = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.text().await?)
    }

    /// POST url-encoded form fields and return the response body text.
    pub async fn post_form(
        &self,
        url: Url,
        fields: &[(String, String)],
        timeout: Duration,
    ) -> Result<String, ScrapeError> {
        let resp = self
            .client
            .post(url)
            .timeout(timeout)
            .form(fields)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.text().await?)
    }
}
