//! Request/response types for the HTTP surface.

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct CreatePipelineRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub first_prompt: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreatePipelineResponse {
    pub pipeline_id: String,
    pub message: String,
}

#[derive(Deserialize, Debug)]
pub struct AddAgentRequest {
    #[serde(default)]
    pub pipeline_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub system_msg: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AddAgentResponse {
    pub agent_id: String,
    /// Zero-based position of the agent in the pipeline's call order.
    pub position: usize,
    pub message: String,
}

#[derive(Deserialize, Debug)]
pub struct StartPipelineRequest {
    #[serde(default)]
    pub pipeline_id: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct StartPipelineResponse {
    pub result: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AgentConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub system_msg: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ExecutePipelineRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub first_prompt: String,
    #[serde(default)]
    pub agents: Vec<AgentConfig>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ExecutePipelineResponse {
    pub result: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub time: String,
}
