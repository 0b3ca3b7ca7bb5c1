use std::time::Duration;

use axum::{extract::State, Json};
use tracing::{info, warn};

use crate::{
    catalog::{CatalogResult, CatalogStore},
    llm::{LlmClient, LlmError},
    models::{ChatLlmRequest, ChatLlmResponse, InventoryRecord, Product},
    AppState,
};

/// Products summarised into the system prompt.
pub const PROMPT_PRODUCTS: usize = 12;
/// Most recent history entries forwarded to the model.
pub const HISTORY_WINDOW: usize = 6;

pub const OFFLINE_REPLY: &str =
    "I'm running in offline mode. Tell me a category (like shirts or blazers) and I'll recommend items!";
pub const FALLBACK_REPLY: &str =
    "I’m here to help with products, stock, and try-ons! Tell me what you need.";

const SYSTEM_INSTRUCTION: &str = "You are Setu AI, a retail assistant for ABFRL. Be concise, friendly, and recommend only from the catalog below. \
If user mentions shirts/blazers/jeans/etc., pick matching items. \
Always end with a short CTA: 'Open catalog' pointing to /catalog.\n";

/// System instruction followed by one line per product.
pub fn catalog_prompt(products: &[Product], inventory: &[InventoryRecord]) -> String {
    let lines: Vec<String> = products
        .iter()
        .take(PROMPT_PRODUCTS)
        .map(|p| {
            let stock = inventory
                .iter()
                .find(|inv| inv.product_id == p.id)
                .map(|inv| inv.online_stock.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            format!(
                "- {} (id:{}, category:{}, color:{}, price:₹{}, stock:{})",
                p.name, p.id, p.category, p.color, p.price, stock
            )
        })
        .collect();

    format!("{}Catalog:\n{}", SYSTEM_INSTRUCTION, lines.join("\n"))
}

/// Ordered prompt parts: optional catalog context, recent history, then the
/// user's message.
pub async fn compose_prompt(catalog: &CatalogStore, request: &ChatLlmRequest) -> CatalogResult<Vec<String>> {
    let mut parts = Vec::new();

    if request.include_products {
        let products = catalog.fetch_all_products().await?;
        let inventory = catalog.fetch_all_inventory().await?;
        parts.push(catalog_prompt(&products, &inventory));
    }

    if let Some(history) = &request.history {
        let start = history.len().saturating_sub(HISTORY_WINDOW);
        parts.extend(history[start..].iter().cloned());
    }

    parts.push(request.message.clone());
    Ok(parts)
}

fn offline() -> ChatLlmResponse {
    ChatLlmResponse {
        message: "LLM is not configured. Please set GOOGLE_GENAI_API_KEY.".to_string(),
        reply: OFFLINE_REPLY.to_string(),
        llm_used: false,
        error: None,
    }
}

fn fallback(error: String) -> ChatLlmResponse {
    ChatLlmResponse {
        message: "LLM call failed, falling back".to_string(),
        reply: FALLBACK_REPLY.to_string(),
        llm_used: false,
        error: Some(error),
    }
}

/// Every path yields a reply; provider trouble is reported in `error` only.
pub async fn respond(
    llm: Option<&dyn LlmClient>,
    catalog: &CatalogStore,
    request: &ChatLlmRequest,
    timeout: Duration,
) -> ChatLlmResponse {
    let Some(llm) = llm else {
        return offline();
    };

    let parts = match compose_prompt(catalog, request).await {
        Ok(parts) => parts,
        Err(err) => return fallback(err.to_string()),
    };

    let outcome = match tokio::time::timeout(timeout, llm.generate(&parts)).await {
        Ok(result) => result,
        Err(_) => Err(LlmError::Timeout(timeout)),
    };

    match outcome {
        Ok(reply) => ChatLlmResponse {
            message: "LLM response generated".to_string(),
            reply,
            llm_used: true,
            error: None,
        },
        Err(err) => fallback(err.to_string()),
    }
}

// ── POST /chat-llm ───────────────────────────────────────────────────────────

pub async fn chat_llm(
    State(state): State<AppState>,
    Json(payload): Json<ChatLlmRequest>,
) -> Json<ChatLlmResponse> {
    let response = respond(state.llm.as_deref(), &state.catalog, &payload, state.llm_timeout).await;

    if let Some(error) = &response.error {
        warn!(user_id = payload.user_id(), error = %error, "LLM call failed, using fallback reply");
    } else {
        info!(
            user_id = payload.user_id(),
            llm_used = response.llm_used,
            include_products = payload.include_products,
            "Chat reply sent"
        );
    }

    Json(response)
}
