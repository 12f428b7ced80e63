use anyhow::Result;

use crate::attachment::{AttachmentRef, OutgoingMessage};
use crate::ids::PlaceholderId;

/// Creates the persisted destination record for one (message, attachment)
/// occurrence, ahead of upload.
///
/// The graph builder calls this exactly once per occurrence it records —
/// never for a duplicate reference skipped within the same message. There
/// is no partial-success mode: a failure aborts planning for the whole
/// batch before any chain is enqueued. Placeholders created before the
/// failing call are orphaned and must be reconciled by the persistence
/// layer.
pub trait PlaceholderMaterializerPort {
    fn materialize(
        &self,
        message: &OutgoingMessage,
        attachment: &AttachmentRef,
    ) -> Result<PlaceholderId>;
}

/// Plain closures work as materializers, which keeps call sites and tests
/// free of one-off adapter types.
impl<F> PlaceholderMaterializerPort for F
where
    F: Fn(&OutgoingMessage, &AttachmentRef) -> Result<PlaceholderId>,
{
    fn materialize(
        &self,
        message: &OutgoingMessage,
        attachment: &AttachmentRef,
    ) -> Result<PlaceholderId> {
        self(message, attachment)
    }
}
