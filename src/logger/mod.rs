pub mod spinner;
pub mod report_logger;
