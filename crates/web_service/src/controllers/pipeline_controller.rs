//! Build-then-reuse pipeline registry endpoints.

use actix_web::{post, web, HttpResponse};
use agent_orchestrator::{executor, Pipeline};
use session_manager::PipelineExecution;

use crate::controllers::helpers::build_agent;
use crate::dto::{
    AddAgentRequest, AddAgentResponse, AgentConfig, CreatePipelineRequest, CreatePipelineResponse,
    StartPipelineRequest, StartPipelineResponse,
};
use crate::error::{ApiError, Result};
use crate::state::{generate_id, AppState, AGENT_PREFIX, EXECUTION_PREFIX, PIPELINE_PREFIX};

#[post("/create")]
async fn create_pipeline(
    state: web::Data<AppState>,
    req: web::Json<CreatePipelineRequest>,
) -> Result<HttpResponse> {
    let req = req.into_inner();
    if req.name.trim().is_empty() || req.first_prompt.trim().is_empty() {
        return Err(ApiError::Validation(
            "Missing required fields: name, first_prompt".to_string(),
        ));
    }

    let pipeline_id = generate_id(PIPELINE_PREFIX);
    let pipeline = Pipeline::new(&req.name, &req.first_prompt);
    state.pipelines.insert(pipeline_id.clone(), pipeline).await;

    tracing::info!(pipeline_id = %pipeline_id, name = %req.name, "pipeline created");

    Ok(HttpResponse::Created().json(CreatePipelineResponse {
        pipeline_id,
        message: format!("Pipeline '{}' created successfully", req.name),
    }))
}

#[post("/add-agent")]
async fn add_agent(
    state: web::Data<AppState>,
    req: web::Json<AddAgentRequest>,
) -> Result<HttpResponse> {
    let req = req.into_inner();
    if req.pipeline_id.trim().is_empty()
        || req.name.trim().is_empty()
        || req.role.trim().is_empty()
        || req.system_msg.trim().is_empty()
        || req.provider.trim().is_empty()
    {
        return Err(ApiError::Validation(
            "Missing required fields: pipeline_id, name, role, system_msg, provider".to_string(),
        ));
    }

    let pipeline = state
        .pipelines
        .get(&req.pipeline_id)
        .await
        .ok_or_else(|| ApiError::PipelineNotFound(req.pipeline_id.clone()))?;

    let agent = build_agent(&AgentConfig {
        name: req.name.clone(),
        role: req.role,
        system_msg: req.system_msg,
        provider: req.provider,
        model: req.model,
    })?;

    let mut pipeline = pipeline.lock().await;
    if pipeline.agent_names().iter().any(|name| name == &req.name) {
        return Err(ApiError::Validation(format!(
            "Agent validation failed: duplicate agent name '{}'",
            req.name
        )));
    }
    pipeline.push_agent(agent);
    let position = pipeline.len() - 1;

    tracing::info!(
        pipeline_id = %req.pipeline_id,
        agent = %req.name,
        position,
        "agent added to pipeline"
    );

    Ok(HttpResponse::Created().json(AddAgentResponse {
        agent_id: generate_id(AGENT_PREFIX),
        position,
        message: format!("Agent '{}' added successfully", req.name),
    }))
}

#[post("/start")]
async fn start_pipeline(
    state: web::Data<AppState>,
    req: web::Json<StartPipelineRequest>,
) -> Result<HttpResponse> {
    let req = req.into_inner();
    let pipeline = state
        .pipelines
        .get(&req.pipeline_id)
        .await
        .ok_or_else(|| ApiError::PipelineNotFound(req.pipeline_id.clone()))?;

    // Serializes concurrent starts of the same pipeline; the store lock is
    // already released.
    let mut pipeline = pipeline.lock().await;

    let execution_id = generate_id(EXECUTION_PREFIX);
    let execution = PipelineExecution::new(
        &execution_id,
        &pipeline.name,
        &pipeline.first_prompt,
        pipeline.agent_names(),
    );
    state.executions.insert(execution).await;

    match executor::run(&mut pipeline).await {
        Ok(result) => {
            let _ = state
                .executions
                .complete(&execution_id, Ok(result.clone()))
                .await;
            Ok(HttpResponse::Ok().json(StartPipelineResponse {
                result,
                message: format!("Pipeline '{}' executed successfully", pipeline.name),
            }))
        }
        Err(err) => {
            let _ = state
                .executions
                .complete(&execution_id, Err(err.to_string()))
                .await;
            Err(err.into())
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/pipelines")
            .service(create_pipeline)
            .service(add_agent)
            .service(start_pipeline),
    );
}
