use serde::{Deserialize, Serialize};

use super::AttachmentRef;
use crate::ids::MessageId;

/// One outgoing message: an ordered list of attachment references plus an
/// opaque identity. The planner only compares the identity; everything else
/// about the message (recipient, body, timestamps) stays with the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub id: MessageId,
    pub attachments: Vec<AttachmentRef>,
}

impl OutgoingMessage {
    pub fn new(id: MessageId, attachments: Vec<AttachmentRef>) -> Self {
        Self { id, attachments }
    }
}
