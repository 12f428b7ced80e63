use anyhow::Result;

use crate::jobs::JobChain;

/// Accepts one planned chain for execution.
///
/// The submitter owns everything about running the chain: worker pool,
/// retry policy, persistence. The only obligation it takes on is the
/// chain's sequential-dependency contract — a stage runs only after the
/// previous stage succeeded. Chains for different groups carry no ordering
/// relationship and may run concurrently.
#[async_trait::async_trait]
pub trait JobSubmitterPort {
    async fn submit(&self, chain: JobChain) -> Result<()>;
}
