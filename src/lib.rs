//! # sendgraph
//!
//! Attachment upload planning core for batched outgoing messages.
//!
//! Given an ordered batch of messages, each carrying attachment references,
//! this crate decides which attachments represent identical post-processed
//! content and produces a minimal set of job chains so that identical content
//! is compressed and uploaded exactly once, with cheap copy operations fanning
//! the uploaded result out to every message that needs it.
//!
//! This crate contains pure planning logic without any infrastructure
//! dependencies. Placeholder persistence and job execution are reached
//! through ports implemented by the host application.

pub mod attachment;
pub mod graph;
pub mod ids;
pub mod jobs;
pub mod ports;

// Re-export commonly used types at the crate root
pub use attachment::{
    AttachmentIdentity, AttachmentRef, ContentSource, MimeType, OutgoingMessage,
    TransformDescription,
};
pub use graph::{DependencyGroup, Node, PlanError, UploadDependencyGraph};
pub use ids::{ChainId, ContentId, MessageId, PlaceholderId, TransformToken};
pub use jobs::{JobChain, JobSpec};
