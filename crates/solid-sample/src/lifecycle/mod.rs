//! # Demo Lifecycle
//!
//! Builds the runner that drives every principle demonstration. This is the only place
//! that names all eight demos; the demos themselves never refer to each other.
//!
//! ```rust
//! use demo_framework::Console;
//! use solid_sample::lifecycle::DemoCatalog;
//!
//! let catalog = DemoCatalog::new()?;
//! let (console, transcript) = Console::recording();
//!
//! catalog.runner().run("open-closed", &console)?;
//! assert_eq!(transcript.lines()[0], "Processing credit card payment of $100");
//! # Ok::<(), demo_framework::DemoError>(())
//! ```

use crate::dependency_injection::DependencyInjectionDemo;
use crate::dependency_inversion::DependencyInversionDemo;
use crate::dont_repeat_yourself::DontRepeatYourselfDemo;
use crate::interface_segregation::InterfaceSegregationDemo;
use crate::liskov_substitution::LiskovSubstitutionDemo;
use crate::open_closed::OpenClosedDemo;
use crate::separation_of_concerns::SeparationOfConcernsDemo;
use crate::single_responsibility::SingleResponsibilityDemo;
use demo_framework::{Console, DemoError, DemoRunner};
use tracing::info;

/// Every demo, registered in run order.
pub struct DemoCatalog {
    runner: DemoRunner,
}

impl DemoCatalog {
    pub fn new() -> Result<Self, DemoError> {
        let mut runner = DemoRunner::new();
        runner.register(DependencyInjectionDemo)?;
        runner.register(DependencyInversionDemo)?;
        runner.register(DontRepeatYourselfDemo)?;
        runner.register(InterfaceSegregationDemo)?;
        runner.register(LiskovSubstitutionDemo)?;
        runner.register(OpenClosedDemo)?;
        runner.register(SeparationOfConcernsDemo)?;
        runner.register(SingleResponsibilityDemo)?;
        info!(count = runner.len(), "Demo catalog ready");
        Ok(Self { runner })
    }

    pub fn runner(&self) -> &DemoRunner {
        &self.runner
    }

    /// Runs every demo against `console`, stopping at the first failure.
    pub fn run_all(&self, console: &Console) -> Result<usize, DemoError> {
        self.runner.run_all(console)
    }
}
