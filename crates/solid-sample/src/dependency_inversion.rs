//! # Dependency Inversion
//!
//! High-level modules should not depend on low-level modules; both depend on an abstraction.
//! [`NotificationManager`] only knows the [`NotificationService`] trait object it was given.

use demo_framework::{Console, Demo, DemoError};
use tracing::debug;

/// The abstraction both sides depend on.
pub trait NotificationService {
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

impl NotificationService for EmailService {
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

impl NotificationService for SmsService {
    fn send(&self, message: &str) {
        self.console.line(format!("Sending SMS: {message}"));
    }
}

/// High-level policy. Holds a boxed service so managers for different channels share one type.
pub struct NotificationManager {
    service: Box<dyn NotificationService>,
}

impl NotificationManager {
    pub fn new(service: Box<dyn NotificationService>) -> Self {
        Self { service }
    }

    pub fn notify(&self, message: &str) {
        debug!(message, "notify");
        self.service.send(message);
    }
}

pub struct DependencyInversionDemo;

impl Demo for DependencyInversionDemo {
    fn name(&self) -> &'static str {
        "dependency-inversion"
    }

    fn summary(&self) -> &'static str {
        "High-level code depends on an abstraction, not on concrete services"
    }

    fn run(&self, console: &Console) -> Result<(), DemoError> {
        let email_manager = NotificationManager::new(Box::new(EmailService::new(console.clone())));
        let sms_manager = NotificationManager::new(Box::new(SmsService::new(console.clone())));

        email_manager.notify("Hello via Email!");
        sms_manager.notify("Hello via SMS!");
        Ok(())
    }
}
