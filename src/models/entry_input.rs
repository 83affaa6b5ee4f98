use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw entry fields as submitted by the client. Everything arrives as
/// strings and passes through the validator before it reaches the store.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EntryInput {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

/// Response for entry mutations without a body of their own
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EntryMutationResponse {
    pub success: bool,
    pub message: Option<String>,
}
