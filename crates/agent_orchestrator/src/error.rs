//! Orchestrator error types

use llm_provider::ProviderError;
use thiserror::Error;

use crate::memory::MemoryError;

/// Failure of a single agent's `handle` call.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("prompt validation failed: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Backend(#[from] ProviderError),

    #[error("memory error: {0}")]
    Memory(#[from] MemoryError),
}

/// Failure of a pipeline run as a whole.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("pipeline has no agents")]
    EmptyPipeline,

    #[error("agent '{agent}' failed: {source}")]
    AgentFailed {
        agent: String,
        #[source]
        source: AgentError,
    },
}
