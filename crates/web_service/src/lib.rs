//! HTTP surface for the pipeline orchestration service.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod error;
pub mod server;
pub mod state;
pub mod streaming;

pub use error::ApiError;
pub use server::{app_config, AppState};
