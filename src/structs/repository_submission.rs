use serde::{Deserialize, Serialize};
use crate::enums::repository_provider::RepositoryProvider;
use crate::errors::{CodeGuardError, CodeGuardResult};

pub const EMPTY_URL_MESSAGE: &str = "Repository URL cannot be empty.";
pub const MISSING_TOKEN_MESSAGE: &str = "Personal Access Token (PAT) is required for GitHub.";

/// A "connect repository" form submission.
#[derive(Clone, Serialize, Deserialize)]
pub struct RepositorySubmission {
    pub provider: RepositoryProvider,
    pub url: String,
    #[serde(default)]
    pub token: Option<String>,
}

impl RepositorySubmission {
    pub fn new(provider: RepositoryProvider, url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            provider,
            url: url.into(),
            token,
        }
    }

    pub fn validate(&self) -> CodeGuardResult<()> {
        if self.url.trim().is_empty() {
            return Err(CodeGuardError::validation_error("url", EMPTY_URL_MESSAGE));
        }

        let has_token = self.token.as_deref().is_some_and(|token| !token.trim().is_empty());
        if self.provider.requires_token() && !has_token {
            return Err(CodeGuardError::validation_error("token", MISSING_TOKEN_MESSAGE));
        }

        Ok(())
    }
}

// Hand-written so the token never reaches a log line.
impl std::fmt::Debug for RepositorySubmission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepositorySubmission")
            .field("provider", &self.provider)
            .field("url", &self.url)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .finish()
    }
}
