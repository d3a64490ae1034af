//! # Session Manager
//!
//! In-memory registry of pipeline execution sessions. Sessions record one
//! execution's lifecycle and outcome; a background sweeper evicts entries
//! older than a retention window regardless of completion status.

pub mod error;
pub mod registry;
pub mod structs;

// Re-exports
pub use error::SessionError;
pub use registry::{spawn_sweeper, ExecutionRegistry};
pub use structs::{ExecutionStatus, PipelineExecution};
