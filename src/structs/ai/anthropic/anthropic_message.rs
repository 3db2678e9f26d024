use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct AnthropicMessage {
    pub role: String,
    pub content: String,
}
