use serde::Deserialize;
use validator::Validate;

/// Form posted to `POST /clip/`. Content is capped at 65536 characters.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BroadcastRequest {
    #[validate(length(max = 65536, message = "Clipboard content is too large"))]
    pub content: String,
}
