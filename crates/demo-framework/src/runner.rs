//! # Demo Runner
//!
//! This module defines the `DemoRunner`, which owns the registered demos and executes them
//! in registration order. It is the driver side of every demonstration: it opens a tracing
//! span per demo, injects the [`Console`], and reports failures.

use crate::console::Console;
use crate::demo::Demo;
use crate::error::DemoError;
use tracing::{debug, info, info_span, warn};

/// Runs a fixed, ordered set of [`Demo`]s.
///
/// # Usage Pattern
///
/// 1.  **Create**: `DemoRunner::new()`.
/// 2.  **Register**: call `register()` once per demo. Order of registration is run order.
/// 3.  **Run**: `run_all()` for everything, or `run()` for one demo by name.
///
/// ```rust
/// use demo_framework::{Console, Demo, DemoError, DemoRunner};
///
/// struct Ping;
/// impl Demo for Ping {
///     fn name(&self) -> &'static str { "ping" }
///     fn summary(&self) -> &'static str { "Replies pong" }
///     fn run(&self, console: &Console) -> Result<(), DemoError> {
///         console.line("pong");
///         Ok(())
///     }
/// }
///
/// let mut runner = DemoRunner::new();
/// runner.register(Ping).unwrap();
///
/// let (console, transcript) = Console::recording();
/// runner.run("ping", &console).unwrap();
/// assert_eq!(transcript.lines(), vec!["pong"]);
/// ```
///
/// # Failure Policy
///
/// `run_all` stops at the first demo that returns an error and hands that error back to the
/// caller. Demos registered after the failing one are not run.
#[derive(Default)]
pub struct DemoRunner {
    demos: Vec<Box<dyn Demo>>,
}

impl DemoRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a demo at the end of the run order.
    ///
    /// Fails with [`DemoError::Duplicate`] if a demo with the same name is already registered.
    pub fn register(&mut self, demo: impl Demo + 'static) -> Result<(), DemoError> {
        if self.find(demo.name()).is_some() {
            warn!(demo = demo.name(), "Duplicate registration");
            return Err(DemoError::Duplicate(demo.name().to_string()));
        }
        debug!(demo = demo.name(), position = self.demos.len(), "Registered");
        self.demos.push(Box::new(demo));
        Ok(())
    }

    /// Names of all registered demos, in run order.
    pub fn names(&self) -> Vec<&'static str> {
        self.demos.iter().map(|d| d.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.demos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.demos.is_empty()
    }

    /// Runs a single demo by name, without a header line.
    pub fn run(&self, name: &str, console: &Console) -> Result<(), DemoError> {
        let demo = self.find(name).ok_or_else(|| {
            warn!(demo = name, "Not found");
            DemoError::NotFound(name.to_string())
        })?;
        Self::execute(demo, console)
    }

    /// Runs every demo in registration order.
    ///
    /// Each demo's output is preceded by a header line `== <name>: <summary> ==`.
    /// Returns the number of demos that ran.
    pub fn run_all(&self, console: &Console) -> Result<usize, DemoError> {
        info!(count = self.demos.len(), "Running demos");
        for demo in &self.demos {
            console.line(format!("== {}: {} ==", demo.name(), demo.summary()));
            Self::execute(demo.as_ref(), console)?;
        }
        Ok(self.demos.len())
    }

    fn find(&self, name: &str) -> Option<&dyn Demo> {
        self.demos
            .iter()
            .find(|d| d.name() == name)
            .map(|d| d.as_ref())
    }

    fn execute(demo: &dyn Demo, console: &Console) -> Result<(), DemoError> {
        let span = info_span!("demo", name = demo.name());
        let _guard = span.enter();

        info!("Demo started");
        match demo.run(console) {
            Ok(()) => {
                info!("Demo finished");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Demo failed");
                Err(e)
            }
        }
    }
}
