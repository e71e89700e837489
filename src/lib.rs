//! Looks up the latest successful GitHub Actions deployment of a repository.
//!
//! The lookup issues two sequential requests against the GitHub REST API: one
//! for the most recent successful run of the deployment workflow, one for that
//! run's jobs. It reports where a human can inspect the deployment (run id,
//! run page URL, commit, timestamp) — it does not resolve the deployment URL
//! itself, which only appears in the run's logs.
//!
//! ```no_run
//! use deploy_lookup::config::DEFAULT_WORKFLOW_FILE;
//! use deploy_lookup::{ActionsClient, LookupConfig, LookupOutcome, find_latest_deployment};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> deploy_lookup::Result<()> {
//! let client = ActionsClient::new(LookupConfig::new("ghp_token", "acme", "wall-print-site"))?;
//! let cancel = CancellationToken::new();
//! match find_latest_deployment(&client, DEFAULT_WORKFLOW_FILE, &cancel).await? {
//!     LookupOutcome::Found(summary) => println!("latest deployment: {}", summary.run_url),
//!     LookupOutcome::NoSuccessfulRuns => println!("no successful deployment yet"),
//!     LookupOutcome::NoJobs => println!("no jobs recorded for the latest run"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod env;
pub mod error;
pub mod lookup;
pub mod workflow;

pub use client::ActionsClient;
pub use config::LookupConfig;
pub use error::{LookupError, Result};
pub use lookup::{DeploymentSummary, LookupOutcome, find_latest_deployment};
