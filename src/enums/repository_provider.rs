use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::errors::CodeGuardError;

/// Where a connected repository is hosted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryProvider {
    /// Source host (GitHub); needs a personal access token.
    #[value(name = "github")]
    GitHub,
    /// Cloud host (AWS CodeCommit).
    #[value(name = "aws")]
    Aws,
}

impl RepositoryProvider {
    pub fn requires_token(&self) -> bool {
        matches!(self, Self::GitHub)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::Aws => "AWS CodeCommit",
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::Aws => "aws",
        }
    }
}

impl fmt::Display for RepositoryProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for RepositoryProvider {
    type Err = CodeGuardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "github" => Ok(Self::GitHub),
            "aws" | "codecommit" => Ok(Self::Aws),
            other => Err(CodeGuardError::validation_error_with_hint(
                "provider",
                &format!("Unknown repository provider '{}'.", other),
                "Use 'github' or 'aws'",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_github_requires_a_token() {
        assert!(RepositoryProvider::GitHub.requires_token());
        assert!(!RepositoryProvider::Aws.requires_token());
    }

    #[test]
    fn parses_tags_case_insensitively() {
        assert_eq!("GitHub".parse::<RepositoryProvider>().unwrap(), RepositoryProvider::GitHub);
        assert_eq!("codecommit".parse::<RepositoryProvider>().unwrap(), RepositoryProvider::Aws);
        assert!("gitlab".parse::<RepositoryProvider>().unwrap_err().is_validation());
    }
}
