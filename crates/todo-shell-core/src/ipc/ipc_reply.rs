use serde::Serialize;
use serde_json::{Value, json};

/// Reply to a synchronous renderer request.
#[derive(Debug, Clone, PartialEq)]
pub struct IpcReply {
    /// Id of the request being answered.
    pub id: u64,
    /// Returned value.
    pub value: Value,
}

impl IpcReply {
    /// Failed request: `{ "error": message }`.
    pub fn error(id: u64, error: &impl std::fmt::Display) -> Self {
        Self {
            id,
            value: json!({ "error": error.to_string() }),
        }
    }
}

/// Result of `file-paste`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasteResult {
    /// Whether the clipboard held an image.
    pub has_image: bool,
    /// Temp PNG the image was written to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Base64 encoded PNG bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl PasteResult {
    /// Clipboard held no image.
    pub fn empty() -> Self {
        Self {
            has_image: false,
            filename: None,
            raw: None,
        }
    }
}
