//! Request payload types for Harvest write endpoints.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::Serialize;

/// A file attachment for `POST /candidates/{id}/attachments`.
///
/// The API expects the file content base64-encoded; [`Attachment::new`]
/// takes the raw bytes and encodes them.
#[derive(Debug, Clone, Serialize)]
pub struct Attachment {
    /// File name shown in Greenhouse.
    pub filename: String,
    /// Attachment kind, e.g. "resume" or "cover_letter".
    #[serde(rename = "type")]
    pub kind: String,
    /// Base64-encoded file content.
    pub content: String,
    /// MIME type of the file, e.g. "application/pdf".
    pub content_type: String,
}

impl Attachment {
    /// Build an attachment from raw file bytes.
    pub fn new(
        filename: impl Into<String>,
        kind: impl Into<String>,
        content: &[u8],
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            kind: kind.into(),
            content: BASE64.encode(content),
            content_type: content_type.into(),
        }
    }
}
