//! Single-request pipeline execution, blocking and streaming.

use std::time::Duration;

use actix_web::{post, web, HttpResponse};
use actix_web_lab::{sse, util::InfallibleStream};
use agent_orchestrator::{executor, Pipeline};
use serde_json::json;
use session_manager::PipelineExecution;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::controllers::helpers::{build_agents, validate_execute_request};
use crate::dto::{ExecutePipelineRequest, ExecutePipelineResponse};
use crate::error::Result;
use crate::state::{generate_id, AppState, EXECUTION_PREFIX};
use crate::streaming::{send_error_and_end, send_event, SseSink};

const SSE_CHANNEL_CAPACITY: usize = 32;
const SSE_KEEP_ALIVE: Duration = Duration::from_secs(15);

fn assemble_pipeline(req: &ExecutePipelineRequest) -> Result<Pipeline> {
    let agents = build_agents(&req.agents)?;
    let mut pipeline = Pipeline::new(&req.name, &req.first_prompt);
    for agent in agents {
        pipeline.push_agent(agent);
    }
    Ok(pipeline)
}

#[post("/execute")]
async fn execute_pipeline(
    state: web::Data<AppState>,
    req: web::Json<ExecutePipelineRequest>,
) -> Result<HttpResponse> {
    let req = req.into_inner();
    validate_execute_request(&req)?;
    let mut pipeline = assemble_pipeline(&req)?;

    let execution_id = generate_id(EXECUTION_PREFIX);
    let execution = PipelineExecution::new(
        &execution_id,
        &req.name,
        &req.first_prompt,
        pipeline.agent_names(),
    );
    state.executions.insert(execution).await;

    tracing::info!(
        execution_id = %execution_id,
        pipeline = %req.name,
        agents = pipeline.len(),
        "executing pipeline"
    );

    match executor::run(&mut pipeline).await {
        Ok(result) => {
            let _ = state
                .executions
                .complete(&execution_id, Ok(result.clone()))
                .await;
            Ok(HttpResponse::Ok().json(ExecutePipelineResponse {
                result,
                message: format!("Pipeline '{}' executed successfully", req.name),
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

#[post("/execute/stream")]
async fn execute_pipeline_stream(
    state: web::Data<AppState>,
    req: web::Json<ExecutePipelineRequest>,
) -> sse::Sse<InfallibleStream<ReceiverStream<sse::Event>>> {
    let req = req.into_inner();
    let (tx, rx) = mpsc::channel::<sse::Event>(SSE_CHANNEL_CAPACITY);
    let stream = sse::Sse::from_infallible_receiver(rx).with_keep_alive(SSE_KEEP_ALIVE);

    // Pre-execution failures are reported on the stream itself: the SSE
    // response has already committed a 200 status.
    let pipeline = match validate_execute_request(&req).and_then(|_| assemble_pipeline(&req)) {
        Ok(pipeline) => pipeline,
        Err(err) => {
            tokio::spawn(async move { send_error_and_end(&tx, err.to_string()).await });
            return stream;
        }
    };

    let execution_id = generate_id(EXECUTION_PREFIX);
    let execution = PipelineExecution::new(
        &execution_id,
        &req.name,
        &req.first_prompt,
        pipeline.agent_names(),
    );
    state.executions.insert(execution).await;

    let executions = state.executions.clone();
    tokio::spawn(run_streaming_pipeline(
        pipeline,
        req,
        execution_id,
        executions,
        tx,
    ));

    stream
}

/// Drive one streaming run to completion. Runs detached: a client
/// disconnect stops delivery but not execution, and the session outcome is
/// recorded either way.
async fn run_streaming_pipeline(
    mut pipeline: Pipeline,
    req: ExecutePipelineRequest,
    execution_id: String,
    executions: session_manager::ExecutionRegistry,
    tx: mpsc::Sender<sse::Event>,
) {
    send_event(
        &tx,
        "status",
        &json!({
            "type": "pipeline_started",
            "message": format!(
                "Starting pipeline '{}' with {} agent(s)",
                req.name,
                req.agents.len()
            ),
            "execution_id": execution_id,
        }),
    )
    .await;

    let sink = SseSink::new(tx.clone());
    match executor::run_streaming(&mut pipeline, &sink).await {
        Ok(result) => {
            let _ = executions
                .complete(&execution_id, Ok(result.clone()))
                .await;
            send_event(
                &tx,
                "status",
                &json!({
                    "type": "pipeline_completed",
                    "message": format!("Pipeline '{}' executed successfully!", req.name),
                    "result": result,
                }),
            )
            .await;
        }
        Err(err) => {
            let _ = executions
                .complete(&execution_id, Err(err.to_string()))
                .await;
            send_event(
                &tx,
                "error",
                &json!({
                    "type": "pipeline_error",
                    "message": format!("Pipeline execution failed: {err}"),
                }),
            )
            .await;
        }
    }

    send_event(
        &tx,
        "end",
        &json!({ "type": "pipeline_end", "execution_id": execution_id }),
    )
    .await;
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/pipelines")
            .service(execute_pipeline)
            .service(execute_pipeline_stream),
    );
}
