pub mod config_helper;
pub mod json_extractor;
pub mod repository_helper;
pub mod simulated_findings;
