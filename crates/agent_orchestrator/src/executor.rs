//! Pipeline traversal.
//!
//! One iterative routine drives both execution contracts: the streaming
//! variant pushes typed events through an [`EventSink`], and the blocking
//! variant is the same traversal with a no-op sink.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::PipelineError;
use crate::events::PipelineEvent;
use crate::pipeline::Pipeline;

/// Receives progress events during a run.
///
/// Delivery is fire-and-forget: a sink whose consumer has gone away must
/// swallow the event rather than fail the run (client disconnect does not
/// cancel in-flight execution).
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn emit(&self, event: PipelineEvent);
}

/// Sink for the blocking contract: discards every event.
pub struct NoopSink;

#[async_trait]
impl EventSink for NoopSink {
    async fn emit(&self, _event: PipelineEvent) {}
}

/// Sink pushing events into a tokio mpsc channel, one event per send.
pub struct ChannelSink {
    tx: mpsc::Sender<PipelineEvent>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::Sender<PipelineEvent>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl EventSink for ChannelSink {
    async fn emit(&self, event: PipelineEvent) {
        if self.tx.send(event).await.is_err() {
            tracing::debug!("event receiver dropped, discarding pipeline event");
        }
    }
}

/// Run the pipeline to completion, discarding progress events.
pub async fn run(pipeline: &mut Pipeline) -> Result<String, PipelineError> {
    run_streaming(pipeline, &NoopSink).await
}

/// Run the pipeline, emitting events around every hop.
///
/// Per visited agent the sink observes exactly one `Processing` followed by
/// either `Completed` or `Error`, with one `Handoff` per transition between
/// consecutive agents. A single `Started` event precedes the first hop.
/// The first failing agent aborts the remainder of the chain.
pub async fn run_streaming<S: EventSink>(
    pipeline: &mut Pipeline,
    sink: &S,
) -> Result<String, PipelineError> {
    pipeline.link()?;

    sink.emit(PipelineEvent::started(&pipeline.agents[0])).await;

    let mut input = pipeline.first_prompt.clone();
    for index in 0..pipeline.agents.len() {
        let agent = &mut pipeline.agents[index];
        sink.emit(PipelineEvent::processing(agent, &input)).await;

        let output = match agent.handle(&input).await {
            Ok(output) => output,
            Err(err) => {
                sink.emit(PipelineEvent::error(agent, &err)).await;
                tracing::error!(agent = %agent.name, error = %err, "pipeline hop failed");
                return Err(PipelineError::AgentFailed {
                    agent: agent.name.clone(),
                    source: err,
                });
            }
        };

        sink.emit(PipelineEvent::completed(agent, &input, &output))
            .await;

        if agent.is_last() {
            return Ok(output);
        }

        if let Some(to_agent) = agent.next_agent().map(str::to_string) {
            let from_agent = agent.name.clone();
            sink.emit(PipelineEvent::handoff(&from_agent, &to_agent))
                .await;
        }

        input = output;
    }

    // Unreachable after a successful link: the last agent is terminal and
    // returns above. Kept as a safe fallback.
    Ok(input)
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::mpsc;

    use super::tests_support::ScriptedProvider;
    use super::*;
    use crate::agent::Agent;

    fn scripted_agent(name: &str, provider: &Arc<ScriptedProvider>) -> Agent {
        let mut agent = Agent::new(
            name,
            "role",
            format!("You are {name}."),
            "test-model",
            provider.clone(),
        );
        agent.verbose = false;
        agent
    }

    #[tokio::test]
    async fn run_composes_agent_outputs_in_order() {
        let researcher = Arc::new(ScriptedProvider::new(vec![Ok("summary".to_string())]));
        let writer = Arc::new(ScriptedProvider::new(vec![Ok("post".to_string())]));

        let mut pipeline = Pipeline::new("content", "Summarize X");
        pipeline.push_agent(scripted_agent("Researcher", &researcher));
        pipeline.push_agent(scripted_agent("Writer", &writer));

        let result = run(&mut pipeline).await.unwrap();
        assert_eq!(result, "post");

        // The writer received the researcher's output as its input.
        assert_eq!(pipeline.agents()[1].memory().exchanges()[0].input, "summary");
    }

    #[tokio::test]
    async fn run_fails_on_empty_pipeline() {
        let mut pipeline = Pipeline::new("empty", "prompt");
        assert!(matches!(
            run(&mut pipeline).await,
            Err(PipelineError::EmptyPipeline)
        ));
    }

    #[tokio::test]
    async fn first_failure_aborts_remaining_agents() {
        let ok = Arc::new(ScriptedProvider::new(vec![Ok("fine".to_string())]));
        let failing = Arc::new(ScriptedProvider::new(vec![Err("boom".to_string())]));
        let never_called = Arc::new(ScriptedProvider::new(vec![Ok("unreachable".to_string())]));

        let mut pipeline = Pipeline::new("fails", "go");
        pipeline.push_agent(scripted_agent("A", &ok));
        pipeline.push_agent(scripted_agent("B", &failing));
        pipeline.push_agent(scripted_agent("C", &never_called));

        let err = run(&mut pipeline).await.unwrap_err();
        match err {
            PipelineError::AgentFailed { agent, .. } => assert_eq!(agent, "B"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(never_called.calls(), 0);
    }

    #[tokio::test]
    async fn streaming_emits_exact_event_sequence() {
        let providers: Vec<_> = (0..3)
            .map(|i| Arc::new(ScriptedProvider::new(vec![Ok(format!("out{i}"))])))
            .collect();

        let mut pipeline = Pipeline::new("observed", "start");
        for (i, provider) in providers.iter().enumerate() {
            pipeline.push_agent(scripted_agent(&format!("agent{i}"), provider));
        }

        let (tx, mut rx) = mpsc::channel(32);
        let sink = ChannelSink::new(tx);
        let result = run_streaming(&mut pipeline, &sink).await.unwrap();
        assert_eq!(result, "out2");

        drop(sink);
        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }

        let types: Vec<_> = events.iter().map(|e| e.event_type()).collect();
        assert_eq!(
            types,
            vec![
                "agent_started",
                "agent_processing",
                "agent_completed",
                "agent_handoff",
                "agent_processing",
                "agent_completed",
                "agent_handoff",
                "agent_processing",
                "agent_completed",
            ]
        );
    }

    #[tokio::test]
    async fn streaming_failure_ends_with_error_event() {
        let ok = Arc::new(ScriptedProvider::new(vec![Ok("fine".to_string())]));
        let failing = Arc::new(ScriptedProvider::new(vec![Err("boom".to_string())]));

        let mut pipeline = Pipeline::new("fails", "go");
        pipeline.push_agent(scripted_agent("A", &ok));
        pipeline.push_agent(scripted_agent("B", &failing));

        let (tx, mut rx) = mpsc::channel(32);
        let sink = ChannelSink::new(tx);
        let err = run_streaming(&mut pipeline, &sink).await.unwrap_err();
        assert!(matches!(err, PipelineError::AgentFailed { .. }));

        drop(sink);
        let mut types = Vec::new();
        while let Some(event) = rx.recv().await {
            types.push(event.event_type());
        }
        assert_eq!(
            types,
            vec![
                "agent_started",
                "agent_processing",
                "agent_completed",
                "agent_handoff",
                "agent_processing",
                "agent_error",
            ]
        );
    }

    #[tokio::test]
    async fn dropped_receiver_does_not_fail_the_run() {
        let provider = Arc::new(ScriptedProvider::new(vec![Ok("done".to_string())]));
        let mut pipeline = Pipeline::new("detached", "go");
        pipeline.push_agent(scripted_agent("A", &provider));

        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let sink = ChannelSink::new(tx);

        let result = run_streaming(&mut pipeline, &sink).await.unwrap();
        assert_eq!(result, "done");
    }
}
