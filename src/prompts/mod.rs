pub mod code_analysis_prompt;
pub mod improve_code_prompt;
