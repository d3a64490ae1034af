use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use agent_orchestrator::PipelineError;
use llm_provider::ProviderError;
use serde::Serialize;
use thiserror::Error;

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Pipeline '{0}' not found")]
    PipelineNotFound(String),

    #[error("Failed to create agent '{agent}': {message}")]
    AgentConstruction { agent: String, message: String },

    #[error("Pipeline execution failed: {0}")]
    Execution(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Map a provider-construction failure for `agent`.
    ///
    /// Unsupported provider names are a client fault (the message already
    /// enumerates the supported set); anything else is a construction
    /// failure on the server side.
    pub fn from_provider_error(agent: &str, err: ProviderError) -> Self {
        match err {
            ProviderError::UnsupportedProvider { .. } => ApiError::Validation(err.to_string()),
            other => ApiError::AgentConstruction {
                agent: agent.to_string(),
                message: other.to_string(),
            },
        }
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::EmptyPipeline => {
                ApiError::Validation("At least one agent is required".to_string())
            }
            failed @ PipelineError::AgentFailed { .. } => ApiError::Execution(failed.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::PipelineNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::AgentConstruction { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Execution(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
