//! # SOLID Principles Recipe
//!
//! One module per design principle, each a self-contained demonstration built on the
//! [`demo_framework`] crate.
//!
//! ## 🗺️ Module Tour
//!
//! | Module | Principle | Capability → Providers → Coordinator |
//! |--------|-----------|---------------------------------------|
//! | [`dependency_injection`] | Dependency Injection | `MessageService` → Email/SMS/Push → `NotificationSender` |
//! | [`dependency_inversion`] | Dependency Inversion | `NotificationService` → Email/SMS → `NotificationManager` |
//! | [`dont_repeat_yourself`] | DRY | shared predicates → access checks |
//! | [`interface_segregation`] | Interface Segregation | `Switchable`, `AdjustableBrightness`, `AdjustableTemperature` → `Light`, `Thermostat` |
//! | [`liskov_substitution`] | Liskov Substitution | `Vehicle` → `Car`, `Bicycle`, `NonEngineVehicle` → `start_all` |
//! | [`open_closed`] | Open/Closed | `PaymentProcessor` → CreditCard/PayPal → `make_payment` |
//! | [`separation_of_concerns`] | Separation of Concerns | Product, Order, Payment, User services |
//! | [`single_responsibility`] | Single Responsibility | `Order`, `InvoicePrinter`, `PaymentProcessor` |
//!
//! The common thread is that a coordinator never builds its own provider: providers (and
//! the [`Console`](demo_framework::Console) they write to) are always passed in.
//!
//! ## 🚀 Running
//!
//! ```bash
//! cargo run -p solid-sample
//! RUST_LOG=debug cargo run -p solid-sample   # with diagnostics on stderr
//! ```
//!
//! ## 🧪 Testing
//!
//! Every demo is tested by running it against [`Console::recording`](demo_framework::Console::recording)
//! and comparing the transcript line by line.

pub mod dependency_injection;
pub mod dependency_inversion;
pub mod dont_repeat_yourself;
pub mod interface_segregation;
pub mod lifecycle;
pub mod liskov_substitution;
pub mod open_closed;
pub mod separation_of_concerns;
pub mod single_responsibility;
