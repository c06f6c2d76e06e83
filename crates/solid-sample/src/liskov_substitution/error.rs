//! Error types for vehicles.

use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum VehicleError {
    /// The vehicle was asked to start an engine it does not have.
    #[error("Bicycles don't have engines")]
    NoEngine,
}
