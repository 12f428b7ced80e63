//! Outgoing attachment domain models.

mod identity;
mod message;
mod mime;
mod reference;
mod transform;

pub use identity::AttachmentIdentity;
pub use message::OutgoingMessage;
pub use mime::MimeType;
pub use reference::{AttachmentRef, ContentSource};
pub use transform::{MediaQuality, TransformDescription, TrimRange};
