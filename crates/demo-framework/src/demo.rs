//! # Demo Trait
//!
//! The `Demo` trait is the contract every principle demonstration implements to be run by
//! the generic [`DemoRunner`](crate::DemoRunner). It names the demo, gives a one-line summary
//! of the principle, and runs the demo's driver sequence against an injected [`Console`].
//!
//! # Architecture Note
//! Because every demonstration satisfies the same contract, the runner loop (spans, logging,
//! error reporting) is written once and reused for all of them. The runner never knows which
//! concrete demo it is driving, which is the same dependency-inversion idea the demos teach.

use crate::console::Console;
use crate::error::DemoError;

/// A self-contained demonstration that writes its output to a [`Console`].
///
/// # Example
///
/// ```rust
/// use demo_framework::{Console, Demo, DemoError};
///
/// struct Hello;
///
/// impl Demo for Hello {
///     fn name(&self) -> &'static str { "hello" }
///     fn summary(&self) -> &'static str { "Says hello" }
///     fn run(&self, console: &Console) -> Result<(), DemoError> {
///         console.line("Hello");
///         Ok(())
///     }
/// }
///
/// let (console, transcript) = Console::recording();
/// Hello.run(&console).unwrap();
/// assert_eq!(transcript.lines(), vec!["Hello"]);
/// ```
pub trait Demo {
    /// Unique, kebab-case name used to select the demo.
    fn name(&self) -> &'static str;

    /// One-line description of the principle being shown.
    fn summary(&self) -> &'static str;

    /// Runs the driver sequence.
    ///
    /// Providers built by the demo must receive `console` (or a clone of it) so that every
    /// line ends up in the same sink.
    fn run(&self, console: &Console) -> Result<(), DemoError>;
}
