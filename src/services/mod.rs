pub mod ai_providers;
pub mod prompt_flows;
pub mod analysis_dispatcher;
pub mod repository_scanner;
pub mod settings_store;
pub mod app_context;
