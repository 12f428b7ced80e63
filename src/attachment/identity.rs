use serde::{Deserialize, Serialize};

use super::{AttachmentRef, ContentSource, TransformDescription};

/// Comparable key for "this exact content after this exact transform".
///
/// Equal identities are guaranteed, by construction, to produce
/// byte-identical output once processed; the planner relies on this to
/// upload each distinct output exactly once. The resolver biases toward
/// under-merging: when two references cannot be proven identical (an
/// [`TransformDescription::Opaque`] transform, for example) they receive
/// distinct identities and cost one redundant upload instead of risking
/// a false merge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttachmentIdentity {
    source: ContentSource,
    transform: TransformDescription,
}

impl AttachmentIdentity {
    /// Resolves the identity of one attachment reference.
    ///
    /// Pure and total: no side effects, never fails.
    pub fn of(attachment: &AttachmentRef) -> Self {
        Self {
            source: attachment.source.clone(),
            transform: attachment.transform.clone(),
        }
    }

    pub fn source(&self) -> &ContentSource {
        &self.source
    }

    pub fn transform(&self) -> &TransformDescription {
        &self.transform
    }
}
