pub mod chat;
pub mod inventory;
pub mod order;
pub mod product;
pub mod tryon;
pub mod user;

pub use chat::*;
pub use inventory::*;
pub use order::*;
pub use product::*;
pub use tryon::*;
pub use user::*;

/// Profile used by the storefront when the caller sends none (or `null`).
pub const DEFAULT_USER_ID: &str = "user_001";

pub(crate) fn user_id_or_default(user_id: &Option<String>) -> &str {
    user_id.as_deref().unwrap_or(DEFAULT_USER_ID)
}
