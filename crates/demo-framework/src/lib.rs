//! # Demo Framework
//!
//! The plumbing shared by every principle demonstration in the workspace.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three pieces:
//!
//! 1. **Contract** ([`Demo`]) - what a demonstration is: a name, a summary, a driver sequence
//! 2. **Driver** ([`DemoRunner`]) - runs demos in order, with a tracing span per demo
//! 3. **Output** ([`Console`]) - the injected sink every provider writes its lines to
//!
//! A demo never prints directly. It receives a `Console` from the runner and passes it on
//! to the providers it builds, which lets tests swap stdout for a [`Transcript`] and assert
//! on exact lines and order.
//!
//! ```rust
//! use demo_framework::{Console, Demo, DemoError, DemoRunner};
//!
//! struct Greeting;
//!
//! impl Demo for Greeting {
//!     fn name(&self) -> &'static str { "greeting" }
//!     fn summary(&self) -> &'static str { "Prints a greeting" }
//!     fn run(&self, console: &Console) -> Result<(), DemoError> {
//!         console.line("Hello via Email!");
//!         Ok(())
//!     }
//! }
//!
//! let mut runner = DemoRunner::new();
//! runner.register(Greeting).unwrap();
//!
//! let (console, transcript) = Console::recording();
//! runner.run_all(&console).unwrap();
//! assert_eq!(
//!     transcript.lines(),
//!     vec!["== greeting: Prints a greeting ==", "Hello via Email!"]
//! );
//! ```
//!
//! ## Errors
//!
//! Demos keep their own domain error enums and convert them with [`DemoError::failed`].
//! The runner stops at the first failure.

pub mod console;
pub mod demo;
pub mod error;
pub mod runner;
pub mod tracing;

pub use console::{Console, Transcript};
pub use demo::Demo;
pub use error::DemoError;
pub use runner::DemoRunner;
