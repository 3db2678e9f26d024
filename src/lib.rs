//! CodeGuard: AI code review that runs a general security analysis and an
//! AWS Well-Architected analysis side by side, plus a simulated repository
//! scanner and in-memory analysis preferences.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod prompts;
pub mod services;
pub mod structs;
pub mod traits;
pub mod ui;
pub mod workers;
