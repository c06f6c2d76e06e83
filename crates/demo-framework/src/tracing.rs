//! # Observability & Tracing
//!
//! Demo output goes to stdout through the [`Console`](crate::Console). Diagnostics go to
//! stderr through `tracing`, so the two never interleave on the same stream.
//!
//! ## What Gets Traced
//!
//! - **Runner**: registration, `Demo started` / `Demo finished`, failures with the error
//! - **Coordinators and services**: decisions with structured fields (`debug`)
//! - **Console**: every written line (`trace`)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Demo output only (default, errors only on stderr)
//! cargo run -p solid-sample
//!
//! # Demo lifecycle
//! RUST_LOG=info cargo run -p solid-sample
//!
//! # Everything, including each console line
//! RUST_LOG=trace cargo run -p solid-sample
//! ```
//!
//! With `RUST_LOG=info` each demo's lines are bracketed by its span:
//!
//! ```text
//! INFO demo{name="open-closed"}: Demo started
//! INFO demo{name="open-closed"}: Demo finished
//! ```

/// Installs the global subscriber, filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
