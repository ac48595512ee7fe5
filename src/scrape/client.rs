//! Session-bound scraper: the two-step search cycle and detail fetch.

use crate::config::Config;
use crate::error::ScrapeError;
use crate::scrape::detail::parse_detail;
use crate::scrape::http::SessionClient;
use crate::scrape::results::parse_results;
use crate::scrape::tokens::FormTokens;
use crate::types::{InmateDetail, InmateSummary, SearchQuery};
use tracing::debug;
use url::Url;

/// Scraping client for one search or detail cycle.
///
/// Holds its own [`SessionClient`] (and therefore its own cookie jar);
/// construct one per call rather than sharing across tasks. Nothing is
/// retained between calls beyond the jar.
pub struct RosterClient {
    config: Config,
    http: SessionClient,
}

impl RosterClient {
    /// Create a client with a fresh session.
    pub fn new(config: Config) -> Self {
        let http = SessionClient::new(&config.user_agent);
        Self { config, http }
    }

    /// Run a search: GET the form page, lift the postback tokens, POST
    /// them back with the query fields, parse the grid.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<InmateSummary>, ScrapeError> {
        debug!(
            last_name = %query.last_name,
            first_name = %query.first_name,
            booking_number = %query.booking_number,
            "fetching search form"
        );
        let form_page = self
            .http
            .get(self.config.base_url.clone(), self.config.get_timeout)
            .await?;
        let tokens = FormTokens::extract(&form_page);

        let fields = tokens.into_form_fields(query);
        let results_page = self
            .http
            .post_form(
                self.endpoint("SearchResults.aspx"),
                &fields,
                self.config.post_timeout,
            )
            .await?;

        let inmates = parse_results(&results_page)?;
        debug!(count = inmates.len(), "search parsed");
        Ok(inmates)
    }

    /// Fetch and parse one inmate's detail page.
    ///
    /// A page yielding neither labels nor charges is a structure
    /// mismatch. For an unknown id the upstream renders exactly that,
    /// so the caller treats it as "not found".
    pub async fn details(&self, inmate_id: &str) -> Result<InmateDetail, ScrapeError> {
        let mut url = self.endpoint("InmateDetail.aspx");
        url.query_pairs_mut().append_pair("InmateID", inmate_id);

        debug!(%inmate_id, "fetching detail page");
        let page = self.http.get(url, self.config.get_timeout).await?;

        let detail = parse_detail(&page);
        if detail.is_empty() {
            return Err(ScrapeError::ParseMismatch(
                "detail page has no labels or charges",
            ));
        }
        Ok(detail)
    }

    /// Resolve an application page against the configured base URL.
    fn endpoint(&self, page: &str) -> Url {
        let mut url = self.config.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(page);
        }
        url
    }
}
