//! Execution session data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an execution session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStatus {
    Pending,
    Succeeded,
    Failed,
}

/// One pipeline execution's lifecycle and outcome.
///
/// Either `result` or `error` may be set, never both; both absent means the
/// session is still pending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineExecution {
    pub id: String,
    pub name: String,
    pub first_prompt: String,
    pub agent_names: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PipelineExecution {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        first_prompt: impl Into<String>,
        agent_names: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            first_prompt: first_prompt.into(),
            agent_names,
            created_at: Utc::now(),
            completed_at: None,
            result: None,
            error: None,
        }
    }

    pub fn status(&self) -> ExecutionStatus {
        match (self.completed_at, &self.result, &self.error) {
            (None, _, _) => ExecutionStatus::Pending,
            (Some(_), _, Some(_)) => ExecutionStatus::Failed,
            (Some(_), _, None) => ExecutionStatus::Succeeded,
        }
    }

    /// Mark the session complete with exactly one of result/error set.
    pub(crate) fn complete(&mut self, outcome: Result<String, String>) {
        self.completed_at = Some(Utc::now());
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(error) => {
                self.error = Some(error);
                self.result = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_pending() {
        let session = PipelineExecution::new("exec-1", "p", "prompt", vec!["A".to_string()]);
        assert_eq!(session.status(), ExecutionStatus::Pending);
        assert!(session.result.is_none());
        assert!(session.error.is_none());
    }

    #[test]
    fn completion_sets_exactly_one_outcome_field() {
        let mut ok = PipelineExecution::new("exec-1", "p", "prompt", vec![]);
        ok.complete(Ok("final".to_string()));
        assert_eq!(ok.status(), ExecutionStatus::Succeeded);
        assert_eq!(ok.result.as_deref(), Some("final"));
        assert!(ok.error.is_none());

        let mut failed = PipelineExecution::new("exec-2", "p", "prompt", vec![]);
        failed.complete(Err("agent 'B' failed".to_string()));
        assert_eq!(failed.status(), ExecutionStatus::Failed);
        assert!(failed.result.is_none());
        assert_eq!(failed.error.as_deref(), Some("agent 'B' failed"));
    }
}
