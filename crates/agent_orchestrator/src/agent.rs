//! A single pipeline member wrapping one completion provider.

use std::sync::Arc;

use llm_provider::CompletionProvider;

use crate::error::AgentError;
use crate::memory::ConversationMemory;

/// A named unit of work in a pipeline.
///
/// Owns its provider handle and conversation memory. Topology fields
/// (`next_agent`, `is_last`) are recomputed by [`Pipeline::link`] from the
/// agent's position in the chain and must not be set by hand.
///
/// [`Pipeline::link`]: crate::pipeline::Pipeline::link
pub struct Agent {
    pub name: String,
    pub role: String,
    pub system_msg: String,
    pub provider_name: String,
    pub model: String,
    provider: Arc<dyn CompletionProvider>,
    memory: ConversationMemory,
    /// Name of the successor agent, absent for the terminal agent.
    pub(crate) next_agent: Option<String>,
    pub(crate) is_last: bool,
    pub verbose: bool,
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("name", &self.name)
            .field("role", &self.role)
            .field("system_msg", &self.system_msg)
            .field("provider_name", &self.provider_name)
            .field("model", &self.model)
            .field("memory", &self.memory)
            .field("next_agent", &self.next_agent)
            .field("is_last", &self.is_last)
            .field("verbose", &self.verbose)
            .finish_non_exhaustive()
    }
}

impl Agent {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        system_msg: impl Into<String>,
        model: impl Into<String>,
        provider: Arc<dyn CompletionProvider>,
    ) -> Self {
        let provider_name = provider.name().to_string();
        Self {
            name: name.into(),
            role: role.into(),
            system_msg: system_msg.into(),
            provider_name,
            model: model.into(),
            provider,
            memory: ConversationMemory::new(),
            next_agent: None,
            is_last: false,
            verbose: true,
        }
    }

    /// Process one input: validate, call the provider, persist the exchange.
    ///
    /// The fixed system instruction is prepended before validation, so an
    /// empty input is still acceptable as long as the instruction itself is
    /// non-empty.
    pub async fn handle(&mut self, input: &str) -> Result<String, AgentError> {
        if self.verbose {
            tracing::info!(agent = %self.name, input = %input, "received input");
        }

        let prompt = format!("{}\n{}", self.system_msg, input);
        validate_prompt(&prompt)?;

        let output = self.provider.complete(&prompt).await?;

        if self.verbose {
            tracing::info!(agent = %self.name, output = %output, "responded");
        }

        self.memory.save(input, &output)?;

        if self.is_last && self.verbose {
            tracing::info!(agent = %self.name, "end of pipeline");
        }

        Ok(output)
    }

    /// Successor agent name, absent for the terminal agent.
    pub fn next_agent(&self) -> Option<&str> {
        self.next_agent.as_deref()
    }

    pub fn is_last(&self) -> bool {
        self.is_last
    }

    /// Retained exchanges, oldest first.
    pub fn memory(&self) -> &ConversationMemory {
        &self.memory
    }
}

fn validate_prompt(prompt: &str) -> Result<(), AgentError> {
    if prompt.is_empty() {
        return Err(AgentError::Validation("prompt cannot be empty".to_string()));
    }
    if prompt.trim().is_empty() {
        return Err(AgentError::Validation(
            "prompt cannot be only whitespace".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::tests_support::ScriptedProvider;

    #[tokio::test]
    async fn handle_rejects_whitespace_only_prompt() {
        let provider = Arc::new(ScriptedProvider::new(vec![Ok("unused".to_string())]));
        let mut agent = Agent::new("A", "helper", "  ", "test-model", provider.clone());

        let err = agent.handle(" \t ").await.unwrap_err();
        assert!(matches!(err, AgentError::Validation(_)));
        assert_eq!(provider.calls(), 0, "provider must not be invoked");
    }

    #[tokio::test]
    async fn handle_records_exchange_on_success() {
        let provider = Arc::new(ScriptedProvider::new(vec![Ok("out".to_string())]));
        let mut agent = Agent::new("A", "helper", "Be helpful.", "test-model", provider);

        let output = agent.handle("in").await.unwrap();
        assert_eq!(output, "out");
        assert_eq!(agent.memory().len(), 1);
        assert_eq!(agent.memory().exchanges()[0].input, "in");
        assert_eq!(agent.memory().exchanges()[0].output, "out");
    }

    #[tokio::test]
    async fn handle_propagates_backend_failure() {
        let provider = Arc::new(ScriptedProvider::new(vec![Err("rate limited".to_string())]));
        let mut agent = Agent::new("A", "helper", "Be helpful.", "test-model", provider);

        let err = agent.handle("in").await.unwrap_err();
        assert!(matches!(err, AgentError::Backend(_)));
        assert!(agent.memory().is_empty(), "failed call must not be saved");
    }
}
