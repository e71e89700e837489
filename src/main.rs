//! Command-line lookup of the latest successful deployment.
//!
//! Takes the access token, repository owner, and repository name as positional
//! arguments, each falling back to the conventional GitHub environment
//! variables. Prints a human-readable summary followed by a machine-readable
//! JSON block.

use std::process::ExitCode;

use anyhow::Result;
use chrono::{DateTime, Local};
use deploy_lookup::{
    ActionsClient, DeploymentSummary, LookupConfig, LookupError, LookupOutcome, env,
    find_latest_deployment,
};
use tokio::signal;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match resolve_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            usage();
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error fetching deployment info: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Builds the lookup configuration from positional arguments, falling back to
/// the environment for whichever values are absent.
fn resolve_config() -> deploy_lookup::Result<LookupConfig> {
    let mut args = std::env::args().skip(1);

    let token = args
        .next()
        .or_else(env::token)
        .ok_or_else(|| LookupError::Config(format!("{} is required", env::TOKEN_VAR)))?;
    let owner = args.next().or_else(env::owner).ok_or_else(|| {
        LookupError::Config(format!("a repository owner is required, see {}", env::OWNER_VAR))
    })?;
    let repo = args.next().or_else(env::repo).ok_or_else(|| {
        LookupError::Config(format!(
            "a repository name is required, see {}",
            env::REPOSITORY_VAR
        ))
    })?;

    Ok(LookupConfig::new(token, owner, repo))
}

fn usage() {
    eprintln!("Usage: deploy-lookup [TOKEN] [OWNER] [REPO]");
    eprintln!();
    eprintln!(
        "Arguments fall back to the {}, {}, and {} environment variables.",
        env::TOKEN_VAR,
        env::OWNER_VAR,
        env::REPOSITORY_VAR
    );
}

async fn run(config: LookupConfig) -> Result<ExitCode> {
    let workflow_file = config.workflow_file.clone();
    let target = format!("{}/{}", config.owner, config.repo);
    let client = ActionsClient::new(config)?;

    let cancel = CancellationToken::new();
    let watcher = cancel.clone();
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            watcher.cancel();
        }
    });

    println!("Fetching the latest deployment of {target}…");
    println!();

    let outcome = match find_latest_deployment(&client, &workflow_file, &cancel).await {
        Ok(outcome) => outcome,
        Err(LookupError::Cancelled) => {
            eprintln!("Lookup cancelled.");
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err.into()),
    };

    match outcome {
        LookupOutcome::Found(summary) => print_summary(&summary)?,
        LookupOutcome::NoSuccessfulRuns => println!("No successful deployments found yet."),
        LookupOutcome::NoJobs => println!("No jobs found for the latest workflow run."),
    }
    Ok(ExitCode::SUCCESS)
}

fn print_summary(summary: &DeploymentSummary) -> Result<()> {
    println!("Latest deployment found!");
    println!("  Deployed at: {}", deployed_at_display(&summary.created_at));
    println!("  Workflow run: {}", summary.run_url);
    println!("  Commit: {}", summary.short_commit());
    println!();
    println!("The deployment URL is not resolved automatically; check the run page for it.");
    println!();
    println!("Deployment info (JSON):");
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

/// Renders the provider timestamp in local time, keeping the raw value when it
/// does not parse.
fn deployed_at_display(created_at: &str) -> String {
    DateTime::parse_from_rfc3339(created_at)
        .map(|timestamp| {
            timestamp
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S %Z")
                .to_string()
        })
        .unwrap_or_else(|_| String::from(created_at))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn an_unparsable_timestamp_is_rendered_raw() {
        assert_eq!(deployed_at_display("soon"), "soon");
    }

    #[test]
    fn a_provider_timestamp_parses() {
        assert!(DateTime::parse_from_rfc3339("2026-01-20T17:42:40Z").is_ok());
    }
}
