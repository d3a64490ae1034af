//! Validation and agent construction shared by the pipeline controllers.

use std::collections::HashSet;

use agent_orchestrator::Agent;
use llm_provider::{create_provider, ProviderKind};

use crate::dto::{AgentConfig, ExecutePipelineRequest};
use crate::error::ApiError;

/// Check required fields, agent list presence and name uniqueness for the
/// single-request execution endpoints. Runs before any agent is built.
pub(crate) fn validate_execute_request(req: &ExecutePipelineRequest) -> Result<(), ApiError> {
    if req.name.trim().is_empty() || req.first_prompt.trim().is_empty() {
        return Err(ApiError::Validation(
            "Missing required fields: name, first_prompt".to_string(),
        ));
    }
    if req.agents.is_empty() {
        return Err(ApiError::Validation(
            "At least one agent is required".to_string(),
        ));
    }
    for (i, agent) in req.agents.iter().enumerate() {
        if agent.name.trim().is_empty()
            || agent.role.trim().is_empty()
            || agent.system_msg.trim().is_empty()
            || agent.provider.trim().is_empty()
        {
            return Err(ApiError::Validation(format!(
                "Agent {} missing required fields: name, role, system_msg, provider",
                i + 1
            )));
        }
    }
    validate_agent_order(&req.agents)
}

/// Agents must have unique names within one pipeline.
pub(crate) fn validate_agent_order(agents: &[AgentConfig]) -> Result<(), ApiError> {
    let mut seen = HashSet::new();
    for (i, agent) in agents.iter().enumerate() {
        if !seen.insert(agent.name.as_str()) {
            return Err(ApiError::Validation(format!(
                "Agent validation failed: duplicate agent name '{}' at position {}",
                agent.name,
                i + 1
            )));
        }
    }
    Ok(())
}

/// Build one agent from its config, resolving the provider and model.
pub(crate) fn build_agent(config: &AgentConfig) -> Result<Agent, ApiError> {
    let kind: ProviderKind = config
        .provider
        .parse()
        .map_err(|err| ApiError::from_provider_error(&config.name, err))?;

    let model = config
        .model
        .clone()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| kind.default_model().to_string());

    let provider = create_provider(kind.as_str(), Some(&model))
        .map_err(|err| ApiError::from_provider_error(&config.name, err))?;

    Ok(Agent::new(
        &config.name,
        &config.role,
        &config.system_msg,
        &model,
        provider,
    ))
}

/// Build the full agent list; the first failure aborts construction.
pub(crate) fn build_agents(configs: &[AgentConfig]) -> Result<Vec<Agent>, ApiError> {
    configs.iter().map(build_agent).collect()
}
