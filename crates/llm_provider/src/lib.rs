//! # LLM Provider
//!
//! Thin completion-oriented abstraction over external text-generation APIs.
//! Each provider turns a single prompt into generated text; streaming,
//! tool use and multi-turn protocols are out of scope here.

pub mod factory;
pub mod kind;
pub mod provider;
pub mod providers;

pub use factory::create_provider;
pub use kind::ProviderKind;
pub use provider::{CompletionProvider, ProviderError, Result};
