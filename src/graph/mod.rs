//! Upload dependency graph: content-addressed dedup plus job-chain planning.
//!
//! ## Design overview
//!
//! A batch of outgoing messages is consumed once into a graph of
//! *dependency groups*: all (message, attachment) occurrences across the
//! batch whose references resolve to the same [`AttachmentIdentity`] land
//! in one group, and each group becomes exactly one [`JobChain`] —
//! compress, upload, and (when siblings exist) one copy stage fanning the
//! uploaded result out. Identical content therefore crosses the network
//! exactly once regardless of how many messages carry it.
//!
//! Ordering is deterministic throughout: groups appear in first-occurrence
//! order over the batch, members within a group in message encounter
//! order, and the first-recorded member is the upload source. Repeated
//! planning of the same ordered batch reproduces the same plan.
//!
//! The graph is built once, consumed once, and discarded. It is not
//! designed to be mutated, merged with another batch, or reused; draining
//! the deferred queue a second time is an explicit error.

mod error;
mod planner;

#[cfg(test)]
mod tests;

pub use error::PlanError;

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::attachment::{AttachmentIdentity, OutgoingMessage};
use crate::ids::{ChainId, MessageId, PlaceholderId};
use crate::jobs::JobChain;
use crate::ports::{JobSubmitterPort, PlaceholderMaterializerPort};

/// One recorded (message, identity) occurrence: the placeholder that was
/// materialized for it and the chain that produces its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub message_id: MessageId,
    pub placeholder_id: PlaceholderId,
    pub chain_id: ChainId,
}

/// All occurrences across the batch sharing one identity.
///
/// A group's size equals the number of *distinct* messages referencing
/// the identity: a message that references the same identity twice
/// contributes exactly one membership.
#[derive(Debug, Clone)]
pub struct DependencyGroup {
    identity: AttachmentIdentity,
    chain_id: ChainId,
    members: Vec<Node>,
    message_ids: HashSet<MessageId>,
}

impl DependencyGroup {
    fn new(identity: AttachmentIdentity) -> Self {
        Self {
            identity,
            chain_id: ChainId::new(),
            members: Vec::new(),
            message_ids: HashSet::new(),
        }
    }

    pub fn identity(&self) -> &AttachmentIdentity {
        &self.identity
    }

    pub fn chain_id(&self) -> &ChainId {
        &self.chain_id
    }

    /// Members in message encounter order. Never empty: a group only
    /// exists once its first occurrence is recorded.
    pub fn members(&self) -> &[Node] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlanState {
    Built,
    Consumed,
}

/// The planned upload work for one batch of outgoing messages.
///
/// Built once per batch via [`UploadDependencyGraph::build`], then drained
/// once via [`UploadDependencyGraph::consume_deferred_queue`] (or
/// [`UploadDependencyGraph::submit_all`]). The dependency map and the
/// per-message node view stay readable after consumption — they are pure
/// projections of the batch.
#[derive(Debug)]
pub struct UploadDependencyGraph {
    groups: Vec<DependencyGroup>,
    message_nodes: HashMap<MessageId, Vec<Node>>,
    deferred: Vec<JobChain>,
    state: PlanState,
}

impl UploadDependencyGraph {
    /// Builds the dependency graph for one ordered batch.
    ///
    /// Messages are visited in batch order and attachments in list order.
    /// Each occurrence resolves to an [`AttachmentIdentity`]; the first
    /// sighting of an identity creates its group, and a message that has
    /// already been recorded under an identity is skipped. For every
    /// occurrence actually recorded, `materializer` is invoked exactly
    /// once to create the destination record.
    ///
    /// All-or-nothing: if any materialization fails the whole plan is
    /// discarded and nothing reaches the deferred queue.
    ///
    /// An empty batch is not an error; it yields an empty map and an
    /// empty (still single-use) queue.
    pub fn build(
        messages: &[OutgoingMessage],
        materializer: &dyn PlaceholderMaterializerPort,
    ) -> Result<Self, PlanError> {
        let mut groups: Vec<DependencyGroup> = Vec::new();
        let mut index: HashMap<AttachmentIdentity, usize> = HashMap::new();
        let mut message_nodes: HashMap<MessageId, Vec<Node>> = HashMap::new();

        for message in messages {
            for attachment in &message.attachments {
                let identity = AttachmentIdentity::of(attachment);
                let group_idx = *index.entry(identity.clone()).or_insert_with(|| {
                    groups.push(DependencyGroup::new(identity.clone()));
                    groups.len() - 1
                });

                let group = &mut groups[group_idx];
                if !group.message_ids.insert(message.id.clone()) {
                    // Same identity referenced again by the same message.
                    continue;
                }

                let placeholder_id =
                    materializer
                        .materialize(message, attachment)
                        .map_err(|source| {
                            warn!(
                                message_id = %message.id,
                                "aborting batch plan: placeholder materialization failed"
                            );
                            PlanError::Materialization {
                                message_id: message.id.clone(),
                                source,
                            }
                        })?;

                let node = Node {
                    message_id: message.id.clone(),
                    placeholder_id,
                    chain_id: group.chain_id.clone(),
                };
                group.members.push(node.clone());
                message_nodes
                    .entry(message.id.clone())
                    .or_default()
                    .push(node);
            }
        }

        let deferred: Vec<JobChain> = groups.iter().map(planner::plan).collect();

        debug!(
            message_count = messages.len(),
            group_count = groups.len(),
            "built upload dependency graph"
        );

        Ok(Self {
            groups,
            message_nodes,
            deferred,
            state: PlanState::Built,
        })
    }

    /// Dependency groups in discovery order.
    pub fn groups(&self) -> &[DependencyGroup] {
        &self.groups
    }

    /// The nodes recorded for one message, in that message's own
    /// encounter order. Empty for an unknown message or one that carried
    /// no attachments.
    ///
    /// Callers use this to reparent placeholders onto the persisted
    /// message row and to make the message-send job depend on the chains
    /// that feed it.
    pub fn nodes_for_message(&self, id: &MessageId) -> &[Node] {
        self.message_nodes.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Drains the plan: one chain per dependency group, in group
    /// discovery order.
    ///
    /// Single-use. A second drain returns [`PlanError::AlreadyConsumed`]
    /// rather than guessing at silently-correct reuse semantics.
    pub fn consume_deferred_queue(&mut self) -> Result<Vec<JobChain>, PlanError> {
        match self.state {
            PlanState::Consumed => Err(PlanError::AlreadyConsumed),
            PlanState::Built => {
                self.state = PlanState::Consumed;
                Ok(std::mem::take(&mut self.deferred))
            }
        }
    }

    /// Drains the deferred queue and hands every chain to `submitter`, in
    /// order. Returns the submitted chain ids.
    ///
    /// A submission error propagates immediately; the queue counts as
    /// consumed either way, since chains already handed over cannot be
    /// un-planned.
    pub async fn submit_all(
        &mut self,
        submitter: &dyn JobSubmitterPort,
    ) -> Result<Vec<ChainId>, PlanError> {
        let chains = self.consume_deferred_queue()?;
        let mut submitted = Vec::with_capacity(chains.len());

        for chain in chains {
            let chain_id = chain.id.clone();
            submitter
                .submit(chain)
                .await
                .map_err(|source| PlanError::Submission {
                    chain_id: chain_id.clone(),
                    source,
                })?;
            submitted.push(chain_id);
        }

        debug!(chain_count = submitted.len(), "submitted planned chains");
        Ok(submitted)
    }
}
