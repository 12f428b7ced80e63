//! ID type wrappers for type safety.

mod id_macro;

pub mod chain_id;
pub mod content_id;
pub mod message_id;
pub mod placeholder_id;
pub mod transform_token;

pub use chain_id::ChainId;
pub use content_id::ContentId;
pub use message_id::MessageId;
pub use placeholder_id::PlaceholderId;
pub use transform_token::TransformToken;
