use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use uuid::Uuid;
use crate::config::constants::{scan_poll_interval, scan_simulation_delay};
use crate::errors::{CodeGuardError, CodeGuardResult};
use crate::helpers::repository_helper::derive_repository_name;
use crate::helpers::simulated_findings::simulated_findings;
use crate::structs::connected_repository::ConnectedRepository;
use crate::structs::repository_submission::RepositorySubmission;

/// Registry of connected repositories with a simulated background scan.
///
/// Repositories are kept in submission order. Each submission schedules its
/// own timer; nothing cancels it.
#[derive(Clone)]
pub struct RepositoryScanner {
    repositories: Arc<RwLock<Vec<ConnectedRepository>>>,
    scan_delay: Duration,
}

impl Default for RepositoryScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryScanner {
    pub fn new() -> Self {
        Self::with_scan_delay(scan_simulation_delay())
    }

    pub fn with_scan_delay(scan_delay: Duration) -> Self {
        Self {
            repositories: Arc::new(RwLock::new(Vec::new())),
            scan_delay,
        }
    }

    /// Validate the submission, register the repository as scanning and
    /// schedule its completion. The token is only checked, never kept.
    pub async fn submit(&self, submission: RepositorySubmission) -> CodeGuardResult<ConnectedRepository> {
        submission.validate()?;

        let url = submission.url.trim().to_string();
        let repository = ConnectedRepository::scanning(
            Uuid::new_v4().to_string(),
            derive_repository_name(&url),
            url,
            submission.provider,
        );

        self.repositories.write().await.push(repository.clone());
        log::info!(
            "📦 Connected {} repository '{}' ({}), scan started",
            repository.provider.display_name(),
            repository.name,
            repository.id
        );

        let repositories = Arc::clone(&self.repositories);
        let delay = self.scan_delay;
        let id = repository.id.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut repositories = repositories.write().await;
            if let Some(repository) = repositories.iter_mut().find(|r| r.id == id) {
                let findings = simulated_findings(repository);
                if repository.complete(findings) {
                    log::info!("✅ Scan completed for '{}'", repository.name);
                }
            }
        });

        Ok(repository)
    }

    pub async fn list(&self) -> Vec<ConnectedRepository> {
        self.repositories.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> CodeGuardResult<ConnectedRepository> {
        self.repositories
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| CodeGuardError::RepositoryNotFound { id: id.to_string() })
    }

    /// Poll until the repository leaves `scanning` or `timeout` elapses.
    pub async fn wait_for_scan(&self, id: &str, timeout: Duration) -> CodeGuardResult<ConnectedRepository> {
        let deadline = Instant::now() + timeout;

        loop {
            let repository = self.get(id).await?;
            if repository.status.is_terminal() {
                return Ok(repository);
            }

            if Instant::now() >= deadline {
                return Err(CodeGuardError::analysis_error(
                    "scan",
                    &format!("repository '{}' is still scanning after {}s", repository.name, timeout.as_secs()),
                    true,
                ));
            }

            tokio::time::sleep(scan_poll_interval()).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::repository_provider::RepositoryProvider;
    use crate::enums::scan_status::ScanStatus;

    #[tokio::test(start_paused = true)]
    async fn rejected_submissions_register_nothing() {
        let scanner = RepositoryScanner::new();

        let blank_url = RepositorySubmission::new(RepositoryProvider::Aws, " ", None);
        assert!(scanner.submit(blank_url).await.is_err());

        let no_token = RepositorySubmission::new(RepositoryProvider::GitHub, "https://github.com/a/b", None);
        assert_eq!(scanner.submit(no_token).await.unwrap_err().field(), Some("token"));

        assert!(scanner.list().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_id_is_not_found() {
        let scanner = RepositoryScanner::new();
        let error = scanner.get("missing").await.unwrap_err();
        assert_eq!(error, CodeGuardError::RepositoryNotFound { id: "missing".to_string() });
    }

    #[tokio::test(start_paused = true)]
    async fn wait_times_out_while_scanning() {
        let scanner = RepositoryScanner::with_scan_delay(Duration::from_secs(60));
        let submission = RepositorySubmission::new(RepositoryProvider::Aws, "https://host/user/slow.git", None);
        let repository = scanner.submit(submission).await.unwrap();

        let error = scanner.wait_for_scan(&repository.id, Duration::from_secs(1)).await.unwrap_err();
        assert!(matches!(error, CodeGuardError::AnalysisError { .. }));
        assert_eq!(scanner.get(&repository.id).await.unwrap().status, ScanStatus::Scanning);
    }
}
