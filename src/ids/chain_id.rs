use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifier of one planned job chain, assigned per dependency group at
/// build time. Lets callers wire message-send jobs to depend on the chain
/// that feeds them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainId(String);

impl_id!(ChainId);
