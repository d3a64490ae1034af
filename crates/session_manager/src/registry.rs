//! Concurrency-safe execution session store with time-based eviction.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration as ChronoDuration, Utc};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::error::{Result, SessionError};
use crate::structs::PipelineExecution;

/// Shared registry of execution sessions.
///
/// All access goes through a single reader/writer lock: reads proceed
/// concurrently, writes exclude all other access. Cheap to clone; clones
/// share the same underlying map.
#[derive(Clone, Default)]
pub struct ExecutionRegistry {
    sessions: Arc<RwLock<HashMap<String, PipelineExecution>>>,
}

impl ExecutionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new session under its id.
    pub async fn insert(&self, execution: PipelineExecution) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(execution.id.clone(), execution);
    }

    /// Snapshot of a session by id.
    pub async fn get(&self, id: &str) -> Option<PipelineExecution> {
        let sessions = self.sessions.read().await;
        sessions.get(id).cloned()
    }

    /// Record an execution outcome, stamping the completion time.
    ///
    /// Expected to be called at most once per session; a second call
    /// overwrites the first.
    pub async fn complete(&self, id: &str, outcome: std::result::Result<String, String>) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        let execution = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;
        execution.complete(outcome);
        Ok(())
    }

    /// Remove every session created before `now - retention`, regardless of
    /// completion status. Returns the number of sessions evicted.
    pub async fn sweep(&self, retention: ChronoDuration) -> usize {
        let cutoff = Utc::now() - retention;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, execution| execution.created_at >= cutoff);
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

/// Spawn the background sweeper on a fixed interval, decoupled from any
/// specific execution. The task runs for the life of the process.
pub fn spawn_sweeper(
    registry: ExecutionRegistry,
    every: std::time::Duration,
    retention: ChronoDuration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        // The first tick fires immediately; skip it so a fresh process does
        // not sweep before anything can be registered.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let removed = registry.sweep(retention).await;
            if removed > 0 {
                tracing::debug!(removed, "swept stale execution sessions");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(id: &str) -> PipelineExecution {
        PipelineExecution::new(id, "pipeline", "prompt", vec!["A".to_string()])
    }

    #[tokio::test]
    async fn insert_then_get_returns_snapshot() {
        let registry = ExecutionRegistry::new();
        registry.insert(session("exec-1")).await;

        let found = registry.get("exec-1").await.unwrap();
        assert_eq!(found.name, "pipeline");
        assert!(registry.get("exec-missing").await.is_none());
    }

    #[tokio::test]
    async fn complete_unknown_session_is_not_found() {
        let registry = ExecutionRegistry::new();
        let err = registry
            .complete("exec-ghost", Ok("result".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::NotFound(_)));
    }

    #[tokio::test]
    async fn complete_records_outcome() {
        let registry = ExecutionRegistry::new();
        registry.insert(session("exec-1")).await;
        registry
            .complete("exec-1", Err("agent 'A' failed".to_string()))
            .await
            .unwrap();

        let found = registry.get("exec-1").await.unwrap();
        assert!(found.completed_at.is_some());
        assert_eq!(found.error.as_deref(), Some("agent 'A' failed"));
        assert!(found.result.is_none());
    }

    #[tokio::test]
    async fn sweep_honors_retention_boundary() {
        let registry = ExecutionRegistry::new();

        let fresh = session("exec-fresh");
        let mut stale = session("exec-stale");
        stale.created_at = Utc::now() - ChronoDuration::hours(2);
        // Completion status is irrelevant to eviction.
        let mut stale_completed = session("exec-stale-completed");
        stale_completed.created_at = Utc::now() - ChronoDuration::hours(2);
        stale_completed.result = Some("done".to_string());
        stale_completed.completed_at = Some(Utc::now());

        registry.insert(fresh).await;
        registry.insert(stale).await;
        registry.insert(stale_completed).await;

        let removed = registry.sweep(ChronoDuration::hours(1)).await;
        assert_eq!(removed, 2);
        assert!(registry.get("exec-fresh").await.is_some());
        assert!(registry.get("exec-stale").await.is_none());
        assert!(registry.get("exec-stale-completed").await.is_none());
    }

    #[tokio::test]
    async fn sweeper_task_evicts_on_interval() {
        let registry = ExecutionRegistry::new();
        let mut stale = session("exec-stale");
        stale.created_at = Utc::now() - ChronoDuration::hours(2);
        registry.insert(stale).await;

        let handle = spawn_sweeper(
            registry.clone(),
            std::time::Duration::from_millis(10),
            ChronoDuration::hours(1),
        );

        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        assert!(registry.is_empty().await);
        handle.abort();
    }
}
