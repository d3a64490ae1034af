//! Shared application state.

use std::collections::HashMap;
use std::sync::Arc;

use agent_orchestrator::Pipeline;
use session_manager::ExecutionRegistry;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

pub const PIPELINE_PREFIX: &str = "pipeline";
pub const AGENT_PREFIX: &str = "agent";
pub const EXECUTION_PREFIX: &str = "exec";

/// Generate a prefixed unique identifier.
pub fn generate_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

/// Registered pipelines for the build-then-reuse deployment shape.
///
/// Each pipeline sits behind its own mutex so a run holds only that
/// pipeline's lock; the store lock covers the map lookups alone. Repeated
/// `start` calls on one pipeline are serialized by the pipeline mutex.
#[derive(Clone, Default)]
pub struct PipelineStore {
    inner: Arc<RwLock<HashMap<String, Arc<Mutex<Pipeline>>>>>,
}

impl PipelineStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, id: String, pipeline: Pipeline) {
        let mut pipelines = self.inner.write().await;
        pipelines.insert(id, Arc::new(Mutex::new(pipeline)));
    }

    pub async fn get(&self, id: &str) -> Option<Arc<Mutex<Pipeline>>> {
        let pipelines = self.inner.read().await;
        pipelines.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

/// State shared across workers: one store per collection, so lock scope
/// and contention stay explicit and independently testable.
pub struct AppState {
    pub pipelines: PipelineStore,
    pub executions: ExecutionRegistry,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            pipelines: PipelineStore::new(),
            executions: ExecutionRegistry::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
