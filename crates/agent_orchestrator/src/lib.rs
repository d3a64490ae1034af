//! agent_orchestrator - Builds and executes ordered agent pipelines
//!
//! This crate is the heart of the system, responsible for:
//! - Wrapping one completion provider per agent (`agent`)
//! - Linking agents into a strictly linear chain (`pipeline`)
//! - Driving a chain to completion, blocking or observable (`executor`)
//! - Typed progress events for observers (`events`)

pub mod agent;
pub mod error;
pub mod events;
pub mod executor;
pub mod memory;
pub mod pipeline;

pub use agent::Agent;
pub use error::{AgentError, PipelineError};
pub use events::PipelineEvent;
pub use executor::{run, run_streaming, ChannelSink, EventSink, NoopSink};
pub use memory::{ConversationMemory, Exchange};
pub use pipeline::Pipeline;
