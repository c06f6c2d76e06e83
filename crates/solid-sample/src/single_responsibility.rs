//! # Single Responsibility
//!
//! Each type has one reason to change:
//! - [`Order`] holds the order data and its total.
//! - [`InvoicePrinter`] formats the invoice.
//! - [`PaymentProcessor`] charges the order.

use demo_framework::{Console, Demo, DemoError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub price: f64,
}

impl OrderItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub items: Vec<OrderItem>,
    pub total: f64,
}

impl Order {
    /// Builds an order; `total` is the sum of the item prices.
    pub fn new(items: Vec<OrderItem>) -> Self {
        // Folds from +0.0; an empty order totals `$0`, not `$-0`
        let total = items.iter().fold(0.0, |total, item| total + item.price);
        Self { items, total }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub method: String,
}

pub struct InvoicePrinter {
    console: Console,
}

impl InvoicePrinter {
    pub fn new(console: Console) -> Self {
        Self { console }
    }

    pub fn print_invoice(&self, order: &Order) {
        self.console.line("Invoice:");
        for item in &order.items {
            self.console.line(format!("{}: ${}", item.name, item.price));
        }
        self.console.line(format!("Total: ${}", order.total));
    }
}

pub struct PaymentProcessor {
    console: Console,
}

impl PaymentProcessor {
    pub fn new(console: Console) -> Self {
        Self { console }
    }

    pub fn process_payment(&self, order: &Order, payment_details: &PaymentDetails) {
        self.console.line(format!(
            "Processing payment of ${} with method {}",
            order.total, payment_details.method
        ));
    }
}

pub struct SingleResponsibilityDemo;

impl Demo for SingleResponsibilityDemo {
    fn name(&self) -> &'static str {
        "single-responsibility"
    }

    fn summary(&self) -> &'static str {
        "Order data, invoice printing and payment are separate types"
    }

    fn run(&self, console: &Console) -> Result<(), DemoError> {
        let order = Order::new(vec![
            OrderItem::new("Laptop", 1200.0),
            OrderItem::new("Mouse", 50.0),
        ]);
        let printer = InvoicePrinter::new(console.clone());
        let payment_processor = PaymentProcessor::new(console.clone());

        printer.print_invoice(&order);
        payment_processor.process_payment(
            &order,
            &PaymentDetails {
                method: "Credit Card".to_string(),
            },
        );
        Ok(())
    }
}
