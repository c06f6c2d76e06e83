//! # Open/Closed
//!
//! Open for extension, closed for modification. [`make_payment`] is written once; new
//! payment methods are new [`PaymentProcessor`] implementations.
//!
//! ```rust
//! use demo_framework::Console;
//! use solid_sample::open_closed::{make_payment, PaymentProcessor};
//!
//! // A payment method added outside this module
//! struct GiftCard(Console);
//!
//! impl PaymentProcessor for GiftCard {
//!     fn process_payment(&self, amount: f64) {
//!         self.0.line(format!("Redeeming gift card for ${amount}"));
//!     }
//! }
//!
//! let (console, transcript) = Console::recording();
//! make_payment(&GiftCard(console), 25.0);
//! assert_eq!(transcript.lines(), vec!["Redeeming gift card for $25"]);
//! ```

use demo_framework::{Console, Demo, DemoError};

pub trait PaymentProcessor {
    /// `amount` is in dollars.
    fn process_payment(&self, amount: f64);
}

pub struct CreditCardPayment {
    console: Console,
}

impl CreditCardPayment {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl PaymentProcessor for CreditCardPayment {
    fn process_payment(&self, amount: f64) {
        self.console.line(format!("Processing credit card payment of ${amount}"));
    }
}

pub struct PayPalPayment {
    console: Console,
}

impl PayPalPayment {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl PaymentProcessor for PayPalPayment {
    fn process_payment(&self, amount: f64) {
        self.console.line(format!("Processing PayPal payment of ${amount}"));
    }
}

pub fn make_payment(payment_processor: &dyn PaymentProcessor, amount: f64) {
    payment_processor.process_payment(amount);
}

pub struct OpenClosedDemo;

impl Demo for OpenClosedDemo {
    fn name(&self) -> &'static str {
        "open-closed"
    }

    fn summary(&self) -> &'static str {
        "New payment methods extend the system without modifying it"
    }

    fn run(&self, console: &Console) -> Result<(), DemoError> {
        make_payment(&CreditCardPayment::new(console.clone()), 100.0);
        make_payment(&PayPalPayment::new(console.clone()), 150.0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_output() {
        let (console, transcript) = Console::recording();
        OpenClosedDemo.run(&console).unwrap();

        assert_eq!(
            transcript.lines(),
            vec![
                "Processing credit card payment of $100",
                "Processing PayPal payment of $150",
            ]
        );
    }

    #[test]
    fn test_fractional_amount() {
        let (console, transcript) = Console::recording();
        make_payment(&PayPalPayment::new(console), 19.99);

        assert_eq!(transcript.lines(), vec!["Processing PayPal payment of $19.99"]);
    }
}
