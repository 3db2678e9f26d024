use crate::enums::severity::Severity;
use crate::structs::connected_repository::ConnectedRepository;
use crate::structs::display_record::DisplayRecord;

const GENERAL_SCAN_SUMMARY: &str = "The repository scan found 3 medium-severity issues related to outdated dependencies and 1 high-severity issue with improper error handling.";
const FRAMEWORK_SCAN_SUMMARY: &str = "The IaC configuration follows most AWS best practices. One suggestion is to enable multi-AZ deployment for the RDS instance for better reliability.";
const FRAMEWORK_SCAN_SNIPPET: &str = "resource \"aws_db_instance\" \"default\" {\n  multi_az = true\n}";

/// Canned findings attached when a simulated scan completes.
pub fn simulated_findings(repository: &ConnectedRepository) -> Vec<DisplayRecord> {
    vec![
        DisplayRecord::new(
            format!("scan-general-{}", repository.id),
            format!("General Scan for {}", repository.name),
            GENERAL_SCAN_SUMMARY.to_string(),
        )
        .with_severity(Severity::High),
        DisplayRecord::new(
            format!("scan-aws-{}", repository.id),
            format!("AWS Well-Architected Scan for {}", repository.name),
            FRAMEWORK_SCAN_SUMMARY.to_string(),
        )
        .with_code_block(FRAMEWORK_SCAN_SNIPPET.to_string(), "terraform".to_string())
        .with_severity(Severity::Info),
    ]
}
