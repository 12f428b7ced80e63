use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Opaque identity of one outgoing message. Only used for equality and
/// dedup inside the planner; never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(String);

impl_id!(MessageId);
