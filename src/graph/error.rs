use thiserror::Error;

use crate::ids::{ChainId, MessageId};

#[derive(Debug, Error)]
pub enum PlanError {
    /// The persistence callback failed for one occurrence. Fatal to the
    /// whole batch: no chains were produced, and placeholders created
    /// before the failure are left for the persistence layer to reconcile.
    #[error("placeholder materialization failed for message {message_id}: {source}")]
    Materialization {
        message_id: MessageId,
        #[source]
        source: anyhow::Error,
    },

    /// The deferred queue was drained a second time. Plans are single-use.
    #[error("deferred queue already consumed")]
    AlreadyConsumed,

    /// The job runner rejected a chain during hand-off.
    #[error("job submission failed for chain {chain_id}: {source}")]
    Submission {
        chain_id: ChainId,
        #[source]
        source: anyhow::Error,
    },
}
