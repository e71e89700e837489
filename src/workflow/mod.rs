//! Data models and queries for GitHub Actions workflows.

use async_trait::async_trait;

use crate::error::Result;

pub mod job;
pub mod run;

pub use job::{Job, Jobs};
pub use run::{WorkflowRun, WorkflowRuns};

/// The two workflow queries a deployment lookup depends on.
///
/// [`ActionsClient`](crate::ActionsClient) implements this against the GitHub
/// REST API; tests implement it with canned data.
#[async_trait]
pub trait WorkflowsProvider: Send + Sync {
    /// Lists the most recent successful runs of a workflow, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoint answers with a non-success status or
    /// the transport fails.
    async fn successful_runs(&self, workflow_file: &str, per_page: u8) -> Result<WorkflowRuns>;

    /// Lists the jobs belonging to a workflow run.
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoint answers with a non-success status or
    /// the transport fails.
    async fn run_jobs(&self, run_id: u64) -> Result<Jobs>;
}
