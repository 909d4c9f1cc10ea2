use serde::{Deserialize, Serialize};

/// Outcome of a soft-idempotent insert. A duplicate key is not an error:
/// the response carries a null id and a message instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertReceiptDto {
    pub inserted_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl InsertReceiptDto {
    pub fn inserted(id: i64) -> Self {
        Self {
            inserted_id: Some(id),
            message: None,
        }
    }

    pub fn duplicate(message: impl Into<String>) -> Self {
        Self {
            inserted_id: None,
            message: Some(message.into()),
        }
    }
}

/// Outcome of an update that may match nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReceiptDto {
    pub matched_count: u64,
}
