//! Published site blob.

use serde::{Deserialize, Serialize};

use crate::section::Visibility;

/// The JSON document the edge worker serves for one published site,
/// stored under the project's slug or custom domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishBlob {
    pub html: String,
    pub css: String,
    pub visibility: Visibility,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    pub updated_at: String,
}
