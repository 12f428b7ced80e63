//! Test fixtures and helper functions for graph tests.

use std::cell::Cell;

use anyhow::Result;

use crate::attachment::{
    AttachmentRef, ContentSource, MimeType, OutgoingMessage, TransformDescription,
};
use crate::ids::{MessageId, PlaceholderId};

/// Creates an [`AttachmentRef`] backed by a not-yet-persisted local source.
pub fn local_attachment(uri: &str) -> AttachmentRef {
    AttachmentRef::new(
        ContentSource::Local {
            uri: uri.to_string(),
        },
        MimeType::image_jpeg(),
        1024,
    )
}

/// Creates an [`AttachmentRef`] with an explicit transform.
pub fn transformed_attachment(uri: &str, transform: TransformDescription) -> AttachmentRef {
    local_attachment(uri).with_transform(transform)
}

/// Creates an [`OutgoingMessage`] with a readable id.
pub fn message(id: &str, attachments: Vec<AttachmentRef>) -> OutgoingMessage {
    OutgoingMessage::new(MessageId::from(id), attachments)
}

/// A materializer minting deterministic ids `ph-0`, `ph-1`, ... in call
/// order. Deterministic on purpose: two builds of the same batch produce
/// comparable plans.
pub fn sequential_materializer(
) -> impl Fn(&OutgoingMessage, &AttachmentRef) -> Result<PlaceholderId> {
    let calls = Cell::new(0usize);
    move |_message, _attachment| {
        let n = calls.get();
        calls.set(n + 1);
        Ok(PlaceholderId::from(format!("ph-{n}")))
    }
}

/// A materializer that fails on the call with index `fail_at` (0-based)
/// and mints sequential ids before that.
pub fn failing_materializer(
    fail_at: usize,
) -> impl Fn(&OutgoingMessage, &AttachmentRef) -> Result<PlaceholderId> {
    let calls = Cell::new(0usize);
    move |_message, _attachment| {
        let n = calls.get();
        calls.set(n + 1);
        if n == fail_at {
            anyhow::bail!("simulated persistence failure");
        }
        Ok(PlaceholderId::from(format!("ph-{n}")))
    }
}

/// Scenario batch: `message_count` messages, each carrying the same
/// `contents` in the same order.
pub fn fan_out_batch(message_count: usize, contents: &[AttachmentRef]) -> Vec<OutgoingMessage> {
    (0..message_count)
        .map(|i| message(&format!("msg-{i}"), contents.to_vec()))
        .collect()
}
