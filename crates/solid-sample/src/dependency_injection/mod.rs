//! # Dependency Injection
//!
//! An object's dependencies are handed to it from the outside instead of being created
//! inside it.
//!
//! ## Structure
//!
//! - [`MessageService`] - the capability: "can send a message"
//! - [`EmailService`], [`SmsService`], [`PushService`] - providers
//! - [`NotificationSender`] - the coordinator, generic over the injected service
//! - [`TightlyCoupledNotificationSender`] - the anti-pattern, kept for contrast
//! - [`error`] - [`NotificationError`]
//!
//! ## Usage
//!
//! ```rust
//! use demo_framework::Console;
//! use solid_sample::dependency_injection::{EmailService, NotificationSender, SmsService};
//!
//! let (console, transcript) = Console::recording();
//!
//! let sender = NotificationSender::new(EmailService::new(console.clone()));
//! sender.notify("Hello via Email!");
//!
//! // Switching channels is a different argument, not a different sender
//! let sender = NotificationSender::new(SmsService::new(console.clone()));
//! sender.notify("Hello via SMS!");
//!
//! assert_eq!(
//!     transcript.lines(),
//!     vec!["Sending email: Hello via Email!", "Sending SMS: Hello via SMS!"]
//! );
//! ```

pub mod error;

pub use error::*;

use demo_framework::{Console, Demo, DemoError};
use tracing::{debug, instrument};

/// Anything that can deliver a message.
pub trait MessageService {
    fn send(&self, message: &str);
}

pub struct EmailService {
    console: Console,
}

impl EmailService {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl MessageService for EmailService {
    fn send(&self, message: &str) {
        self.console.line(format!("Sending email: {message}"));
    }
}

pub struct SmsService {
    console: Console,
}

impl SmsService {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl MessageService for SmsService {
    fn send(&self, message: &str) {
        self.console.line(format!("Sending SMS: {message}"));
    }
}

/// Added later without touching [`NotificationSender`].
pub struct PushService {
    console: Console,
}

impl PushService {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl MessageService for PushService {
    fn send(&self, message: &str) {
        self.console.line(format!("Sending push notification: {message}"));
    }
}

/// Sends notifications through whatever [`MessageService`] it was built with.
///
/// The sender never names a concrete service, so tests can inject a recording double
/// and production code can inject email, SMS or push.
pub struct NotificationSender<S: MessageService> {
    service: S,
}

impl<S: MessageService> NotificationSender<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    #[instrument(skip(self))]
    pub fn notify(&self, message: &str) {
        debug!("Delegating to injected service");
        self.service.send(message);
    }
}

/// The version without injection: builds its own services and picks one by tag.
///
/// Adding a channel means editing this type, and a test cannot substitute either service.
pub struct TightlyCoupledNotificationSender {
    email_service: EmailService,
    sms_service: SmsService,
}

impl TightlyCoupledNotificationSender {
    pub fn new(console: Console) -> Self {
        Self {
            email_service: EmailService::new(console.clone()),
            sms_service: SmsService::new(console),
        }
    }

    pub fn notify(&self, message: &str, method: &str) -> Result<(), NotificationError> {
        match method {
            "email" => self.email_service.send(message),
            "sms" => self.sms_service.send(message),
            other => return Err(NotificationError::UnsupportedMethod(other.to_string())),
        }
        Ok(())
    }
}

/// Email first, then SMS, through two senders of the same shape.
pub struct DependencyInjectionDemo;

impl Demo for DependencyInjectionDemo {
    fn name(&self) -> &'static str {
        "dependency-injection"
    }

    fn summary(&self) -> &'static str {
        "Dependencies are supplied from outside, not built inside"
    }

    fn run(&self, console: &Console) -> Result<(), DemoError> {
        let email_service = EmailService::new(console.clone());
        let sms_service = SmsService::new(console.clone());

        let notification_sender = NotificationSender::new(email_service);
        notification_sender.notify("Hello via Email!");

        let notification_sender_sms = NotificationSender::new(sms_service);
        notification_sender_sms.notify("Hello via SMS!");
        Ok(())
    }
}
