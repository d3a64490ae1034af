//! SSE plumbing for the streaming execution endpoint.
//!
//! Events flow through a tokio mpsc channel into an `actix-web-lab` SSE
//! response; each send is framed as `event:`/`data:` lines and flushed
//! immediately. A send to a disconnected client is dropped silently — the
//! run itself is never cancelled by the observer going away.

use actix_web_lab::sse;
use agent_orchestrator::{EventSink, PipelineEvent};
use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::mpsc;

/// Event sink forwarding pipeline progress into an SSE channel.
pub struct SseSink {
    tx: mpsc::Sender<sse::Event>,
}

impl SseSink {
    pub fn new(tx: mpsc::Sender<sse::Event>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl EventSink for SseSink {
    async fn emit(&self, event: PipelineEvent) {
        send_event(&self.tx, event.event_type(), &event).await;
    }
}

/// Send one named SSE event with a JSON payload.
pub async fn send_event<T: Serialize>(tx: &mpsc::Sender<sse::Event>, name: &'static str, payload: &T) {
    match sse::Data::new_json(payload) {
        Ok(data) => {
            if tx.send(sse::Event::Data(data.event(name))).await.is_err() {
                tracing::debug!(event = name, "SSE client disconnected, dropping event");
            }
        }
        Err(err) => {
            tracing::error!(event = name, error = %err, "failed to serialize SSE payload");
        }
    }
}

/// Report a pre-execution failure on the stream and terminate it.
pub async fn send_error_and_end(tx: &mpsc::Sender<sse::Event>, message: String) {
    send_event(
        tx,
        "error",
        &serde_json::json!({ "type": "error", "message": message }),
    )
    .await;
    send_event(tx, "end", &serde_json::json!({ "type": "error_end" })).await;
}
