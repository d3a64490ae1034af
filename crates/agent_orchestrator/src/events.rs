//! Typed progress events emitted during a pipeline run.
//!
//! Events carry the SSE event name out of band (see [`PipelineEvent::event_type`])
//! and serialize to the data payload only, so the enum is untagged.

use serde::Serialize;

use crate::agent::Agent;
use crate::error::AgentError;

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PipelineEvent {
    Started {
        agent_name: String,
        agent_role: String,
        message: String,
    },
    Processing {
        agent_name: String,
        agent_role: String,
        message: String,
        input_length: usize,
        agent_input: String,
    },
    Completed {
        agent_name: String,
        agent_role: String,
        message: String,
        output_length: usize,
        is_last: bool,
        agent_output: String,
        agent_input: String,
    },
    Handoff {
        from_agent: String,
        to_agent: String,
        message: String,
    },
    Error {
        agent_name: String,
        agent_role: String,
        message: String,
    },
}

impl PipelineEvent {
    /// SSE event name for this event.
    pub fn event_type(&self) -> &'static str {
        match self {
            PipelineEvent::Started { .. } => "agent_started",
            PipelineEvent::Processing { .. } => "agent_processing",
            PipelineEvent::Completed { .. } => "agent_completed",
            PipelineEvent::Handoff { .. } => "agent_handoff",
            PipelineEvent::Error { .. } => "agent_error",
        }
    }

    pub(crate) fn started(agent: &Agent) -> Self {
        PipelineEvent::Started {
            agent_name: agent.name.clone(),
            agent_role: agent.role.clone(),
            message: format!("Agent '{}' ({}) starting...", agent.name, agent.role),
        }
    }

    pub(crate) fn processing(agent: &Agent, input: &str) -> Self {
        PipelineEvent::Processing {
            agent_name: agent.name.clone(),
            agent_role: agent.role.clone(),
            message: format!("Agent '{}' processing input...", agent.name),
            input_length: input.len(),
            agent_input: input.to_string(),
        }
    }

    pub(crate) fn completed(agent: &Agent, input: &str, output: &str) -> Self {
        PipelineEvent::Completed {
            agent_name: agent.name.clone(),
            agent_role: agent.role.clone(),
            message: format!("Agent '{}' completed successfully", agent.name),
            output_length: output.len(),
            is_last: agent.is_last(),
            agent_output: output.to_string(),
            agent_input: input.to_string(),
        }
    }

    pub(crate) fn handoff(from_agent: &str, to_agent: &str) -> Self {
        PipelineEvent::Handoff {
            from_agent: from_agent.to_string(),
            to_agent: to_agent.to_string(),
            message: format!("Handing off from '{from_agent}' to '{to_agent}'"),
        }
    }

    pub(crate) fn error(agent: &Agent, err: &AgentError) -> Self {
        PipelineEvent::Error {
            agent_name: agent.name.clone(),
            agent_role: agent.role.clone(),
            message: format!("Agent '{}' failed: {err}", agent.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_payload_fields_without_tag() {
        let event = PipelineEvent::Handoff {
            from_agent: "A".to_string(),
            to_agent: "B".to_string(),
            message: "Handing off from 'A' to 'B'".to_string(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["from_agent"], "A");
        assert_eq!(value["to_agent"], "B");
        assert!(value.get("type").is_none());
        assert_eq!(event.event_type(), "agent_handoff");
    }
}
