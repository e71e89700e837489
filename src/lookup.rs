//! Finds the latest successful deployment of a repository.

use serde::Serialize;
use tokio::select;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::error::{LookupError, Result};
use crate::workflow::job::select_deploy_job;
use crate::workflow::run::short_sha;
use crate::workflow::{WorkflowRun, WorkflowsProvider};

/// Only the newest run matters; the listing endpoint sorts newest first.
const RUN_PAGE_SIZE: u8 = 1;

/// What a completed lookup found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// A successful deployment exists; here is where to inspect it.
    Found(DeploymentSummary),
    /// The workflow has no successful run yet. Expected on fresh
    /// repositories, not an error.
    NoSuccessfulRuns,
    /// The newest successful run reports no jobs.
    NoJobs,
}

/// Summary of the latest successful deployment.
///
/// Serializes with the field names of the command's JSON output. The summary
/// links to the run page only; the concrete deployment URL lives in the run's
/// logs and is not resolved here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentSummary {
    /// The provider-assigned run identifier.
    pub run_id: u64,
    /// The run's web page.
    pub run_url: String,
    /// The full 40-character commit hash the run was triggered from.
    pub commit: String,
    /// When the run was created, as reported by the provider (ISO-8601).
    pub created_at: String,
}

impl DeploymentSummary {
    fn from_run(run: WorkflowRun) -> Self {
        Self {
            run_id: run.id,
            run_url: run.html_url,
            commit: run.head_sha,
            created_at: run.created_at,
        }
    }

    /// The commit hash truncated for human-readable output. The full value
    /// stays in [`commit`](Self::commit).
    pub fn short_commit(&self) -> &str {
        short_sha(&self.commit)
    }
}

/// Looks up the latest successful run of `workflow_file` and the job that
/// deployed it.
///
/// Issues two dependent requests through `provider`, sequentially and without
/// retries. Empty listings are normal outcomes, not errors; the caller decides
/// whether to re-invoke. Cancelling `cancel` aborts the lookup before the next
/// request is issued.
///
/// # Errors
///
/// Returns [`LookupError::Fetch`] or [`LookupError::Http`] when either request
/// fails, and [`LookupError::Cancelled`] when the token is cancelled first.
pub async fn find_latest_deployment(
    provider: &dyn WorkflowsProvider,
    workflow_file: &str,
    cancel: &CancellationToken,
) -> Result<LookupOutcome> {
    let runs = select! {
        biased;
        _ = cancel.cancelled() => return Err(LookupError::Cancelled),
        result = provider.successful_runs(workflow_file, RUN_PAGE_SIZE) => result?,
    };

    let Some(run) = runs.workflow_runs.into_iter().next() else {
        info!("no successful deployment of {workflow_file} yet");
        return Ok(LookupOutcome::NoSuccessfulRuns);
    };

    let jobs = select! {
        biased;
        _ = cancel.cancelled() => return Err(LookupError::Cancelled),
        result = provider.run_jobs(run.id) => result?,
    };

    let Some(job) = select_deploy_job(&jobs.jobs) else {
        info!("no jobs found for {run}");
        return Ok(LookupOutcome::NoJobs);
    };

    // The job confirms the run deployed; only the run's metadata is reported.
    debug!("selected job {} ({}) of {run}", job.name, job.id);
    Ok(LookupOutcome::Found(DeploymentSummary::from_run(run)))
}
