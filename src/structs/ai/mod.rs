pub mod anthropic;
pub mod openai;
pub mod gemini;
pub mod api_error;
