//! The GitHub REST API client behind a deployment lookup.

use async_trait::async_trait;
use reqwest::{RequestBuilder, header};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};

use crate::config::LookupConfig;
use crate::error::{LookupError, Result};
use crate::workflow::{Jobs, WorkflowRuns, WorkflowsProvider};

const ACCEPT_HEADER: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = "deploy-lookup/0.1";

/// A client for the GitHub Actions endpoints of one repository.
///
/// The credential lives in the client rather than in process-wide state, so
/// independent lookups can carry independent configurations.
#[derive(Debug, Clone)]
pub struct ActionsClient {
    http: reqwest::Client,
    config: LookupConfig,
}

impl ActionsClient {
    /// Creates a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Config`] when a required configuration field is
    /// empty, before any network call is made.
    pub fn new(config: LookupConfig) -> Result<Self> {
        config.validate()?;
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, config })
    }

    /// The configuration this client queries with.
    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Builds a request for GitHub REST API.
    fn request_builder(&self, url: &str) -> RequestBuilder {
        self.http
            .get(url)
            .header(header::ACCEPT, ACCEPT_HEADER)
            .bearer_auth(&self.config.token)
            .header("X-GitHub-Api-Version", API_VERSION)
            .header(header::USER_AGENT, USER_AGENT)
    }

    fn runs_url(&self, workflow_file: &str, per_page: u8) -> String {
        format!(
            "{}/repos/{}/{}/actions/workflows/{workflow_file}/runs?per_page={per_page}&status=success",
            self.config.api_base, self.config.owner, self.config.repo
        )
    }

    fn jobs_url(&self, run_id: u64) -> String {
        format!(
            "{}/repos/{}/{}/actions/runs/{run_id}/jobs",
            self.config.api_base, self.config.owner, self.config.repo
        )
    }

    async fn fetch_json<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!("fetching {url}…");

        let response = self.request_builder(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            error!("failed to fetch {url}: {}", status.as_u16());
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::Fetch {
                url: String::from(url),
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl WorkflowsProvider for ActionsClient {
    async fn successful_runs(&self, workflow_file: &str, per_page: u8) -> Result<WorkflowRuns> {
        let url = self.runs_url(workflow_file, per_page);
        let runs: WorkflowRuns = self.fetch_json(&url).await?;
        info!(
            "fetched {} of {} successful runs from {url}",
            runs.workflow_runs.len(),
            runs.total_count
        );
        Ok(runs)
    }

    async fn run_jobs(&self, run_id: u64) -> Result<Jobs> {
        let url = self.jobs_url(run_id);
        let jobs: Jobs = self.fetch_json(&url).await?;
        info!("fetched {} jobs from {url}", jobs.jobs.len());
        Ok(jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ActionsClient {
        ActionsClient::new(LookupConfig::new("token", "acme", "wall-print-site")).unwrap()
    }

    #[test]
    fn rejects_an_empty_token_before_any_network_call() {
        let err = ActionsClient::new(LookupConfig::new("", "acme", "site")).unwrap_err();
        assert!(matches!(err, LookupError::Config(_)));
    }

    #[test]
    fn builds_the_runs_url_with_page_size_and_status_filter() {
        assert_eq!(
            client().runs_url("deploy-nexlayer.yml", 1),
            "https://api.github.com/repos/acme/wall-print-site/actions/workflows/deploy-nexlayer.yml/runs?per_page=1&status=success"
        );
    }

    #[test]
    fn builds_the_jobs_url_from_the_run_id() {
        assert_eq!(
            client().jobs_url(30433642),
            "https://api.github.com/repos/acme/wall-print-site/actions/runs/30433642/jobs"
        );
    }

    #[test]
    fn pins_the_api_version_and_credential_on_every_request() {
        let request = client()
            .request_builder("https://api.github.com/repos/acme/wall-print-site")
            .build()
            .unwrap();

        let headers = request.headers();
        assert_eq!(headers[header::ACCEPT], ACCEPT_HEADER);
        assert_eq!(headers["X-GitHub-Api-Version"], API_VERSION);
        assert_eq!(headers[header::USER_AGENT], USER_AGENT);
        assert_eq!(headers[header::AUTHORIZATION], "Bearer token");
    }
}
