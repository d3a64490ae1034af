//! Per-agent conversation memory.
//!
//! An append-only log of (input, output) exchanges, owned by one agent and
//! mutated only through its `handle` call. Bounded so a long-lived agent in
//! the registry deployment mode cannot grow without limit.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default cap on retained exchanges per agent.
pub const DEFAULT_MAX_EXCHANGES: usize = 1000;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("conversation memory is full ({limit} exchanges)")]
    CapacityExceeded { limit: usize },
}

/// One completed request/response pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exchange {
    pub input: String,
    pub output: String,
}

/// Ordered, append-only exchange log.
#[derive(Debug, Clone)]
pub struct ConversationMemory {
    exchanges: Vec<Exchange>,
    max_exchanges: usize,
}

impl ConversationMemory {
    pub fn new() -> Self {
        Self::with_capacity_limit(DEFAULT_MAX_EXCHANGES)
    }

    pub fn with_capacity_limit(max_exchanges: usize) -> Self {
        Self {
            exchanges: Vec::new(),
            max_exchanges,
        }
    }

    /// Append one exchange to the log.
    pub fn save(&mut self, input: &str, output: &str) -> Result<(), MemoryError> {
        if self.exchanges.len() >= self.max_exchanges {
            return Err(MemoryError::CapacityExceeded {
                limit: self.max_exchanges,
            });
        }
        self.exchanges.push(Exchange {
            input: input.to_string(),
            output: output.to_string(),
        });
        Ok(())
    }

    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }
}

impl Default for ConversationMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_appends_in_order() {
        let mut memory = ConversationMemory::new();
        memory.save("a", "1").unwrap();
        memory.save("b", "2").unwrap();

        assert_eq!(memory.len(), 2);
        assert_eq!(memory.exchanges()[0].input, "a");
        assert_eq!(memory.exchanges()[1].output, "2");
    }

    #[test]
    fn save_fails_at_capacity() {
        let mut memory = ConversationMemory::with_capacity_limit(1);
        memory.save("a", "1").unwrap();

        let err = memory.save("b", "2").unwrap_err();
        assert!(matches!(err, MemoryError::CapacityExceeded { limit: 1 }));
        assert_eq!(memory.len(), 1);
    }
}
