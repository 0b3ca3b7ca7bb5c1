use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ChatLlmRequest {
    pub message: String,
    pub history: Option<Vec<String>>,
    pub user_id: Option<String>,
    #[serde(default)]
    pub include_products: bool,
}

impl ChatLlmRequest {
    pub fn user_id(&self) -> &str {
        super::user_id_or_default(&self.user_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatLlmResponse {
    pub message: String,
    pub reply: String,
    pub llm_used: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
