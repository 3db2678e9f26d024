use std::time::Duration;
use futures::future::join_all;
use codeguard_cli::enums::repository_provider::RepositoryProvider;
use codeguard_cli::enums::scan_status::ScanStatus;
use codeguard_cli::enums::severity::Severity;
use codeguard_cli::services::repository_scanner::RepositoryScanner;
use codeguard_cli::structs::repository_submission::{RepositorySubmission, MISSING_TOKEN_MESSAGE};
use tokio::time::Instant;
use tokio_test::{assert_err, assert_ok};

const WAIT: Duration = Duration::from_secs(30);

fn aws(url: &str) -> RepositorySubmission {
    RepositorySubmission::new(RepositoryProvider::Aws, url, None)
}

#[tokio::test(start_paused = true)]
async fn codecommit_repository_completes_after_the_delay() {
    let scanner = RepositoryScanner::new();
    let started = Instant::now();

    let repository = assert_ok!(scanner.submit(aws("https://host/user/myrepo.git")).await);
    assert_eq!(repository.name, "myrepo");
    assert_eq!(repository.status, ScanStatus::Scanning);
    assert!(repository.results.is_none());

    let scanned = assert_ok!(scanner.wait_for_scan(&repository.id, WAIT).await);
    assert!(started.elapsed() >= Duration::from_secs(4));
    assert_eq!(scanned.status, ScanStatus::Completed);

    let results = scanned.results.expect("completed scans carry results");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, format!("scan-general-{}", repository.id));
    assert_eq!(results[0].title, "General Scan for myrepo");
    assert_eq!(results[0].severity, Some(Severity::High));
    assert_eq!(results[1].id, format!("scan-aws-{}", repository.id));
    assert_eq!(results[1].title, "AWS Well-Architected Scan for myrepo");
    assert_eq!(results[1].severity, Some(Severity::Info));
    assert_eq!(results[1].code_block_language.as_deref(), Some("terraform"));
}

#[tokio::test(start_paused = true)]
async fn github_without_token_registers_nothing() {
    let scanner = RepositoryScanner::new();

    let submission = RepositorySubmission::new(RepositoryProvider::GitHub, "https://github.com/org/api", Some(String::new()));
    let error = assert_err!(scanner.submit(submission).await);

    assert_eq!(error.to_string(), MISSING_TOKEN_MESSAGE);
    assert!(scanner.list().await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn github_with_token_is_accepted() {
    let scanner = RepositoryScanner::new();

    let submission = RepositorySubmission::new(
        RepositoryProvider::GitHub,
        "https://github.com/org/api",
        Some("ghp_token".to_string()),
    );
    let repository = assert_ok!(scanner.submit(submission).await);

    assert_eq!(repository.name, "api");
    assert_eq!(repository.provider, RepositoryProvider::GitHub);
}

#[tokio::test(start_paused = true)]
async fn url_without_a_path_gets_a_fallback_name() {
    let scanner = RepositoryScanner::new();
    let repository = assert_ok!(scanner.submit(aws("https://host")).await);
    assert_eq!(repository.name, "Unknown Repository");
}

#[tokio::test(start_paused = true)]
async fn listing_keeps_submission_order() {
    let scanner = RepositoryScanner::new();

    let first = assert_ok!(scanner.submit(aws("https://host/team/alpha.git")).await);
    tokio::time::sleep(Duration::from_secs(2)).await;
    let second = assert_ok!(scanner.submit(aws("https://host/team/beta.git")).await);

    // alpha finishes while beta is still scanning
    let alpha = assert_ok!(scanner.wait_for_scan(&first.id, WAIT).await);
    assert_eq!(alpha.status, ScanStatus::Completed);
    let listed = scanner.list().await;
    assert_eq!(listed.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(), ["alpha", "beta"]);
    assert_eq!(listed[1].status, ScanStatus::Scanning);

    assert_ok!(scanner.wait_for_scan(&second.id, WAIT).await);
    let listed = scanner.list().await;
    assert_eq!(listed.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), [first.id.as_str(), second.id.as_str()]);
    assert!(listed.iter().all(|r| r.status == ScanStatus::Completed));
}

#[tokio::test(start_paused = true)]
async fn simultaneous_scans_have_independent_timers() {
    let scanner = RepositoryScanner::new();
    let started = Instant::now();

    let ids = [
        assert_ok!(scanner.submit(aws("https://host/a/one")).await).id,
        assert_ok!(scanner.submit(aws("https://host/a/two")).await).id,
        assert_ok!(scanner.submit(aws("https://host/a/three")).await).id,
    ];

    let scanned = join_all(ids.iter().map(|id| scanner.wait_for_scan(id, WAIT))).await;
    assert!(scanned.iter().all(|result| matches!(result, Ok(r) if r.status == ScanStatus::Completed)));

    // all three ran in parallel, not back to back
    assert!(started.elapsed() < Duration::from_secs(8));
}
