//! Turns one dependency group into its job chain.

use super::DependencyGroup;
use crate::jobs::{JobChain, JobSpec};

/// Plans the chain for one group.
///
/// The upload source is the group's first-recorded member. This is a
/// deliberate, documented tie-break (first seen in batch order), chosen so
/// that repeated planning of the same ordered batch is reproducible; it is
/// not an accident of iteration order. Every other member becomes a copy
/// destination, in recorded order.
///
/// Shape: `[compress, upload]` for a group of one, `[compress, upload,
/// copy]` otherwise, with exactly `len - 1` destinations. Groups are never
/// empty by construction, so this is total over valid input.
pub(super) fn plan(group: &DependencyGroup) -> JobChain {
    let source = group.members()[0].placeholder_id.clone();

    let mut steps = vec![
        JobSpec::Compress {
            placeholder: source.clone(),
        },
        JobSpec::Upload {
            placeholder: source.clone(),
        },
    ];

    let destinations: Vec<_> = group.members()[1..]
        .iter()
        .map(|node| node.placeholder_id.clone())
        .collect();

    if !destinations.is_empty() {
        steps.push(JobSpec::Copy {
            source,
            destinations,
        });
    }

    JobChain {
        id: group.chain_id().clone(),
        steps,
    }
}
