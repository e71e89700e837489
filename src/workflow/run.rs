//! Workflow runs from GitHub REST API.

use std::fmt::Display;

use serde::Deserialize;

/// Truncates a commit hash to the 7-character short form used everywhere a
/// human reads it. Hashes shorter than that are kept whole.
pub fn short_sha(sha: &str) -> &str {
    sha.get(..7).unwrap_or(sha)
}

/// Represents a page of workflow runs from GitHub REST API.
#[derive(Debug, Deserialize, Clone)]
pub struct WorkflowRuns {
    /// How many runs match the query in total, across all pages.
    pub total_count: u64,
    /// The runs on this page, newest first.
    pub workflow_runs: Vec<WorkflowRun>,
}

/// Represents a workflow run from GitHub REST API.
#[derive(Debug, Deserialize, Clone)]
pub struct WorkflowRun {
    pub id: u64,
    pub html_url: String,
    pub head_sha: String,
    pub created_at: String,
}

impl Display for WorkflowRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "run {} ({} at {})",
            self.id,
            short_sha(&self.head_sha),
            self.html_url
        )
    }
}
