//! Job specifications handed to the external job runner.
//!
//! These shapes, and the ordering rules of the chain planner, are the entire
//! contract this crate owes the runner. A chain is a pure data description;
//! enforcing that each stage starts only after its predecessor succeeds,
//! retrying, and persisting progress all belong to the runner.

use serde::{Deserialize, Serialize};

use crate::ids::{ChainId, PlaceholderId};

/// One stage of a job chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "job")]
pub enum JobSpec {
    /// Compress the occurrence's content in place.
    Compress { placeholder: PlaceholderId },
    /// Upload the compressed content and record the remote reference.
    Upload { placeholder: PlaceholderId },
    /// Fan the uploaded remote reference out to sibling occurrences.
    /// `destinations` is never empty.
    Copy {
        source: PlaceholderId,
        destinations: Vec<PlaceholderId>,
    },
}

/// An ordered list of job specifications with a strict sequential-dependency
/// contract: a later stage never begins before its predecessor completes
/// successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobChain {
    pub id: ChainId,
    pub steps: Vec<JobSpec>,
}

impl JobChain {
    /// The placeholder whose content this chain compresses and uploads.
    pub fn source(&self) -> Option<&PlaceholderId> {
        match self.steps.first() {
            Some(JobSpec::Compress { placeholder }) => Some(placeholder),
            _ => None,
        }
    }

    /// Number of sibling occurrences the upload is copied to.
    pub fn destination_count(&self) -> usize {
        self.steps
            .iter()
            .map(|step| match step {
                JobSpec::Copy { destinations, .. } => destinations.len(),
                _ => 0,
            })
            .sum()
    }
}
