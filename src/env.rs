//! Reads lookup configuration from the process environment.
//!
//! The lookup itself never touches the environment; these readers exist for
//! callers (such as the bundled command) that want the conventional GitHub
//! variables as a fallback for missing arguments.

#![cfg(feature = "env")]

use std::env;

use crate::config::{LookupConfig, split_repository};
use crate::error::{LookupError, Result};

/// The variable holding the access token.
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";

/// The variable holding the repository owner.
pub const OWNER_VAR: &str = "GITHUB_REPOSITORY_OWNER";

/// The variable holding the `owner/repo` repository identifier.
pub const REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";

/// Reads the access token from [`TOKEN_VAR`].
pub fn token() -> Option<String> {
    env::var(TOKEN_VAR).ok().filter(|value| !value.is_empty())
}

/// Reads the repository owner from [`OWNER_VAR`], falling back to the owner
/// half of [`REPOSITORY_VAR`].
pub fn owner() -> Option<String> {
    env::var(OWNER_VAR)
        .ok()
        .filter(|value| !value.is_empty())
        .or_else(|| {
            let repository = env::var(REPOSITORY_VAR).ok()?;
            let (owner, _) = split_repository(&repository).ok()?;
            Some(String::from(owner))
        })
}

/// Reads the repository name from the repo half of [`REPOSITORY_VAR`].
pub fn repo() -> Option<String> {
    let repository = env::var(REPOSITORY_VAR).ok()?;
    let (_, repo) = split_repository(&repository).ok()?;
    Some(String::from(repo))
}

impl LookupConfig {
    /// Builds a configuration entirely from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Config`] when any of the three variables is
    /// absent or empty.
    pub fn from_env() -> Result<Self> {
        let token =
            token().ok_or_else(|| LookupError::Config(format!("{TOKEN_VAR} is not set")))?;
        let owner = owner().ok_or_else(|| {
            LookupError::Config(format!("neither {OWNER_VAR} nor {REPOSITORY_VAR} is set"))
        })?;
        let repo =
            repo().ok_or_else(|| LookupError::Config(format!("{REPOSITORY_VAR} is not set")))?;
        Ok(Self::new(token, owner, repo))
    }
}
