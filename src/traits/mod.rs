pub mod ai_provider;
pub mod analysis_service;
