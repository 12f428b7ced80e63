use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifier of already-persisted attachment content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentId(String);

impl_id!(ContentId);
