//! Ordered agent chain with recomputable topology.

use crate::agent::Agent;
use crate::error::PipelineError;

/// An ordered sequence of agents executed head-to-tail.
///
/// Insertion order is semantic: it defines call order. Topology fields on
/// the agents (`next_agent`, `is_last`) are derived from that order by
/// [`Pipeline::link`] and become stale whenever membership changes.
pub struct Pipeline {
    pub name: String,
    pub first_prompt: String,
    pub(crate) agents: Vec<Agent>,
    linked: bool,
}

impl Pipeline {
    pub fn new(name: impl Into<String>, first_prompt: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            first_prompt: first_prompt.into(),
            agents: Vec::new(),
            linked: false,
        }
    }

    /// Append an agent, invalidating the current linking.
    pub fn push_agent(&mut self, agent: Agent) {
        self.agents.push(agent);
        self.linked = false;
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent_names(&self) -> Vec<String> {
        self.agents.iter().map(|a| a.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn is_linked(&self) -> bool {
        self.linked
    }

    /// Recompute successor and terminal fields from insertion order.
    ///
    /// Idempotent; the successor relation is a pure function of the agent
    /// sequence, so re-running after membership changes always yields a
    /// cycle-free linear chain with exactly one terminal agent.
    pub fn link(&mut self) -> Result<(), PipelineError> {
        if self.agents.is_empty() {
            return Err(PipelineError::EmptyPipeline);
        }

        let last_index = self.agents.len() - 1;
        let names: Vec<String> = self.agents.iter().map(|a| a.name.clone()).collect();
        for (i, agent) in self.agents.iter_mut().enumerate() {
            if i == last_index {
                agent.is_last = true;
                agent.next_agent = None;
            } else {
                agent.is_last = false;
                agent.next_agent = Some(names[i + 1].clone());
            }
        }

        self.linked = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::executor::tests_support::ScriptedProvider;

    fn test_agent(name: &str) -> Agent {
        let provider = Arc::new(ScriptedProvider::new(vec![]));
        Agent::new(name, "role", "system", "test-model", provider)
    }

    fn pipeline_with(names: &[&str]) -> Pipeline {
        let mut pipeline = Pipeline::new("test", "prompt");
        for name in names {
            pipeline.push_agent(test_agent(name));
        }
        pipeline
    }

    #[test]
    fn link_fails_on_empty_pipeline() {
        let mut pipeline = Pipeline::new("empty", "prompt");
        assert!(matches!(pipeline.link(), Err(PipelineError::EmptyPipeline)));
        assert!(!pipeline.is_linked());
    }

    #[test]
    fn link_sets_successors_and_single_terminal() {
        let mut pipeline = pipeline_with(&["A", "B", "C"]);
        pipeline.link().unwrap();

        let agents = pipeline.agents();
        assert_eq!(agents[0].next_agent(), Some("B"));
        assert_eq!(agents[1].next_agent(), Some("C"));
        assert_eq!(agents[2].next_agent(), None);

        let terminals: Vec<_> = agents.iter().filter(|a| a.is_last()).collect();
        assert_eq!(terminals.len(), 1);
        assert_eq!(terminals[0].name, "C");
        assert!(pipeline.is_linked());
    }

    #[test]
    fn link_single_agent_is_terminal() {
        let mut pipeline = pipeline_with(&["Solo"]);
        pipeline.link().unwrap();

        assert!(pipeline.agents()[0].is_last());
        assert_eq!(pipeline.agents()[0].next_agent(), None);
    }

    #[test]
    fn push_after_link_invalidates_and_relink_moves_terminal() {
        let mut pipeline = pipeline_with(&["A", "B"]);
        pipeline.link().unwrap();
        assert!(pipeline.agents()[1].is_last());

        pipeline.push_agent(test_agent("C"));
        assert!(!pipeline.is_linked());

        pipeline.link().unwrap();
        assert!(!pipeline.agents()[1].is_last());
        assert_eq!(pipeline.agents()[1].next_agent(), Some("C"));
        assert!(pipeline.agents()[2].is_last());
    }
}
