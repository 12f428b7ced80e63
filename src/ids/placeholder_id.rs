use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifier of the persisted record for one (message, attachment)
/// occurrence, minted by the persistence layer before upload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaceholderId(String);

impl_id!(PlaceholderId);
