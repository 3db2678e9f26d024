use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::repository_provider::RepositoryProvider;
use crate::enums::scan_status::ScanStatus;
use crate::structs::display_record::DisplayRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedRepository {
    pub id: String,
    pub name: String,
    pub url: String,
    pub provider: RepositoryProvider,
    pub status: ScanStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<DisplayRecord>>,
    pub submitted_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl ConnectedRepository {
    pub fn scanning(id: String, name: String, url: String, provider: RepositoryProvider) -> Self {
        Self {
            id,
            name,
            url,
            provider,
            status: ScanStatus::Scanning,
            results: None,
            submitted_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Attach scan results. Only a scanning repository can complete, so the
    /// entry is mutated at most once; returns whether the transition happened.
    pub fn complete(&mut self, results: Vec<DisplayRecord>) -> bool {
        if self.status != ScanStatus::Scanning {
            return false;
        }

        self.status = ScanStatus::Completed;
        self.results = Some(results);
        self.completed_at = Some(Utc::now());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository() -> ConnectedRepository {
        ConnectedRepository::scanning(
            "1".to_string(),
            "myrepo".to_string(),
            "https://host/user/myrepo.git".to_string(),
            RepositoryProvider::Aws,
        )
    }

    #[test]
    fn completes_exactly_once() {
        let mut repo = repository();
        let record = DisplayRecord::new("r".to_string(), "t".to_string(), "c".to_string());

        assert!(repo.complete(vec![record.clone()]));
        assert_eq!(repo.status, ScanStatus::Completed);
        assert!(repo.completed_at.is_some());

        assert!(!repo.complete(vec![record.clone(), record]));
        assert_eq!(repo.results.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn serializes_status_and_provider_tags() {
        let json = serde_json::to_value(repository()).unwrap();
        assert_eq!(json["status"], "scanning");
        assert_eq!(json["provider"], "aws");
        assert!(json.get("results").is_none());
    }
}
