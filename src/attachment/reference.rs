use serde::{Deserialize, Serialize};

use super::{MimeType, TransformDescription};
use crate::ids::ContentId;

/// Where an attachment's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSource {
    /// Not yet persisted; a locator the persistence layer can read from.
    Local { uri: String },
    /// Already persisted under a content id.
    Persisted { content_id: ContentId },
}

/// One piece of content a message wants to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentRef {
    pub source: ContentSource,
    pub mime_type: MimeType,

    /// Size in bytes of the source content, before any transform.
    pub size_bytes: u64,

    pub transform: TransformDescription,
}

impl AttachmentRef {
    pub fn new(source: ContentSource, mime_type: MimeType, size_bytes: u64) -> Self {
        Self {
            source,
            mime_type,
            size_bytes,
            transform: TransformDescription::None,
        }
    }

    pub fn with_transform(mut self, transform: TransformDescription) -> Self {
        self.transform = transform;
        self
    }
}
