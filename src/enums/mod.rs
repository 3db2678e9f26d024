pub mod commands;
pub mod ai_provider_error;
pub mod severity;
pub mod scan_status;
pub mod repository_provider;
pub mod analysis_kind;
pub mod analysis_outcome;
pub mod architecture_pillar;
pub mod design_principle;
