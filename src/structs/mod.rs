pub mod ai;
pub mod config;
pub mod cli;
pub mod api_response;
pub mod display_record;
pub mod analysis_request;
pub mod analysis_round;
pub mod code_analysis_output;
pub mod improve_code_output;
pub mod connected_repository;
pub mod repository_submission;
pub mod analysis_settings;
pub mod setting_toggle;
