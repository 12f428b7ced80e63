//! Port interfaces for the planning core
//!
//! Ports define the contract between the planner and the infrastructure
//! that surrounds it, following Hexagonal Architecture: the core stays
//! independent of persistence and job execution, and the host application
//! supplies implementations.

mod job_submitter;
mod materializer;


pub use job_submitter::JobSubmitterPort;
pub use materializer::PlaceholderMaterializerPort;
