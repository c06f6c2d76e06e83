//! # Framework Errors
//!
//! This module defines the error type shared by the runner and every demo.
//! Each demo keeps its own domain error enum and wraps it with [`DemoError::failed`]
//! when the failure should stop the run.

/// Errors that can occur while running demos.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("Demo not found: {0}")]
    NotFound(String),
    #[error("Demo already registered: {0}")]
    Duplicate(String),
    #[error("Demo failed: {0}")]
    Failed(Box<dyn std::error::Error + Send + Sync>),
}

impl DemoError {
    /// Wraps a domain error raised inside a demo's driver sequence.
    pub fn failed(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        DemoError::Failed(Box::new(e))
    }
}
