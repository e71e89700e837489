//! Explicit configuration for a deployment lookup.
//!
//! Everything the lookup needs is carried in a [`LookupConfig`] passed at call
//! time; nothing is read from ambient process state unless the caller opts in
//! through [`LookupConfig::from_env`](crate::env).

use crate::error::{LookupError, Result};

/// The base URL of the GitHub REST API.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// The workflow file that performs deployments.
pub const DEFAULT_WORKFLOW_FILE: &str = "deploy-nexlayer.yml";

/// Configuration for a single deployment lookup.
#[derive(Clone)]
pub struct LookupConfig {
    /// The access token presented as a bearer credential. Required.
    pub token: String,
    /// The repository owner. Required.
    pub owner: String,
    /// The repository name. Required.
    pub repo: String,
    /// The workflow file whose runs are queried. Defaults to
    /// [`DEFAULT_WORKFLOW_FILE`].
    pub workflow_file: String,
    /// The API host to query. Defaults to [`GITHUB_API_BASE`]; overridable so
    /// tests can point the client at a local server.
    pub api_base: String,
}

impl LookupConfig {
    /// Creates a configuration with the default workflow file and API host.
    pub fn new(
        token: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            owner: owner.into(),
            repo: repo.into(),
            workflow_file: String::from(DEFAULT_WORKFLOW_FILE),
            api_base: String::from(GITHUB_API_BASE),
        }
    }

    /// Replaces the workflow file whose runs are queried.
    #[must_use]
    pub fn with_workflow_file(mut self, workflow_file: impl Into<String>) -> Self {
        self.workflow_file = workflow_file.into();
        self
    }

    /// Replaces the API host to query.
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Checks that every required field is present.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Config`] when the token, owner, or repository
    /// name is empty.
    pub fn validate(&self) -> Result<()> {
        if self.token.is_empty() {
            return Err(LookupError::Config(String::from(
                "an access token is required",
            )));
        }
        if self.owner.is_empty() {
            return Err(LookupError::Config(String::from(
                "a repository owner is required",
            )));
        }
        if self.repo.is_empty() {
            return Err(LookupError::Config(String::from(
                "a repository name is required",
            )));
        }
        Ok(())
    }
}

// The token never appears in debug output.
impl std::fmt::Debug for LookupConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupConfig")
            .field("token", &"<redacted>")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("workflow_file", &self.workflow_file)
            .field("api_base", &self.api_base)
            .finish()
    }
}

/// Splits an `owner/repo` identifier into its two halves.
///
/// # Errors
///
/// Returns [`LookupError::Config`] when either half is missing.
pub fn split_repository(repository: &str) -> Result<(&str, &str)> {
    match repository.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => Ok((owner, repo)),
        _ => Err(LookupError::Config(format!(
            "invalid repository `{repository}`, expected the owner/repo format"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_a_complete_config() {
        assert!(LookupConfig::new("token", "acme", "site").validate().is_ok());
    }

    #[test]
    fn validate_rejects_a_missing_token() {
        let err = LookupConfig::new("", "acme", "site").validate().unwrap_err();
        assert!(matches!(err, LookupError::Config(_)));
        assert!(err.to_string().contains("token"));
    }

    #[test]
    fn validate_rejects_a_missing_owner() {
        let err = LookupConfig::new("token", "", "site").validate().unwrap_err();
        assert!(err.to_string().contains("owner"));
    }

    #[test]
    fn defaults_point_at_github() {
        let config = LookupConfig::new("token", "acme", "site");
        assert_eq!(config.api_base, GITHUB_API_BASE);
        assert_eq!(config.workflow_file, DEFAULT_WORKFLOW_FILE);
    }

    #[test]
    fn debug_output_redacts_the_token() {
        let rendered = format!("{:?}", LookupConfig::new("ghp_secret", "acme", "site"));
        assert!(!rendered.contains("ghp_secret"));
        assert!(rendered.contains("acme"));
    }

    #[test]
    fn split_repository_accepts_owner_slash_repo() {
        assert_eq!(
            split_repository("acme/wall-print-site").unwrap(),
            ("acme", "wall-print-site")
        );
    }

    #[test]
    fn split_repository_rejects_ill_formed_values() {
        assert!(split_repository("acme").is_err());
        assert!(split_repository("acme/").is_err());
        assert!(split_repository("/site").is_err());
    }
}
