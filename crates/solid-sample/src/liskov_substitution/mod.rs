//! # Liskov Substitution
//!
//! Every implementation of a trait must be usable wherever the trait is expected.
//!
//! ## Two Policies
//!
//! - [`Bicycle`] fails `start_engine` with [`VehicleError::NoEngine`]. Put one in a fleet and
//!   [`start_all`] stops at it. This is the violation.
//! - [`NonEngineVehicle`] treats `start_engine` as a no-op. The fleet runs to completion.
//!   This is the fix.
//!
//! ```rust
//! use demo_framework::Console;
//! use solid_sample::liskov_substitution::{start_all, Bicycle, Car, Vehicle, VehicleError};
//!
//! let (console, transcript) = Console::recording();
//! let fleet: Vec<Box<dyn Vehicle>> = vec![
//!     Box::new(Car::new(console.clone())),
//!     Box::new(Bicycle),
//!     Box::new(Car::new(console.clone())),
//! ];
//!
//! assert_eq!(start_all(&fleet), Err(VehicleError::NoEngine));
//! // The first car started, the second never got the chance
//! assert_eq!(transcript.lines(), vec!["Car engine started"]);
//! ```

pub mod error;

pub use error::*;

use demo_framework::{Console, Demo, DemoError};
use tracing::{debug, instrument};

pub trait Vehicle {
    fn start_engine(&self) -> Result<(), VehicleError>;
}

pub struct Car {
    console: Console,
}

impl Car {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl Vehicle for Car {
    fn start_engine(&self) -> Result<(), VehicleError> {
        self.console.line("Car engine started");
        Ok(())
    }
}

/// Breaks the contract: callers of `start_engine` must now expect a failure.
pub struct Bicycle;

impl Vehicle for Bicycle {
    fn start_engine(&self) -> Result<(), VehicleError> {
        Err(VehicleError::NoEngine)
    }
}

/// Honors the contract: nothing to start, nothing to report.
pub struct NonEngineVehicle;

impl Vehicle for NonEngineVehicle {
    fn start_engine(&self) -> Result<(), VehicleError> {
        Ok(())
    }
}

/// Starts every vehicle in order. The first failure ends the sequence.
#[instrument(skip(vehicles), fields(count = vehicles.len()))]
pub fn start_all(vehicles: &[Box<dyn Vehicle>]) -> Result<(), VehicleError> {
    for (position, vehicle) in vehicles.iter().enumerate() {
        debug!(position, "start_engine");
        vehicle.start_engine()?;
    }
    Ok(())
}

pub struct LiskovSubstitutionDemo;

impl Demo for LiskovSubstitutionDemo {
    fn name(&self) -> &'static str {
        "liskov-substitution"
    }

    fn summary(&self) -> &'static str {
        "Any vehicle can stand in for Vehicle without breaking the caller"
    }

    fn run(&self, console: &Console) -> Result<(), DemoError> {
        let vehicles: Vec<Box<dyn Vehicle>> =
            vec![Box::new(Car::new(console.clone())), Box::new(NonEngineVehicle)];
        start_all(&vehicles).map_err(DemoError::failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_op_vehicle_is_substitutable() {
        let (console, transcript) = Console::recording();
        let vehicles: Vec<Box<dyn Vehicle>> = vec![
            Box::new(NonEngineVehicle),
            Box::new(Car::new(console.clone())),
            Box::new(NonEngineVehicle),
        ];

        assert!(start_all(&vehicles).is_ok());
        assert_eq!(transcript.lines(), vec!["Car engine started"]);
    }

    #[test]
    fn test_bicycle_error_propagates() {
        let err = Bicycle.start_engine().unwrap_err();
        assert_eq!(err.to_string(), "Bicycles don't have engines");
    }

    #[test]
    fn test_demo_output() {
        let (console, transcript) = Console::recording();
        LiskovSubstitutionDemo.run(&console).unwrap();

        assert_eq!(transcript.lines(), vec!["Car engine started"]);
    }
}
