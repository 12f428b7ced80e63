use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Uniqueness token for a transform that cannot be described canonically.
/// Two opaque transforms compare equal only if they carry the same token,
/// so an undescribable transform never merges with anything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransformToken(String);

impl_id!(TransformToken);
