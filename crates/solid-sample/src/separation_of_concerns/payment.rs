use super::Order;
use demo_framework::Console;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInfo {
    pub card_number: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Successful,
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Successful => write!(f, "Payment Successful"),
        }
    }
}

/// Charges orders. Knows nothing about how orders or products are stored.
pub struct PaymentService {
    console: Console,
}

impl PaymentService {
    pub fn new(console: Console) -> Self {
        Self { console }
    }

    pub fn process_payment(&self, order: &Order, _payment_info: &PaymentInfo) -> PaymentStatus {
        self.console.line(format!("Processing payment for order: {order}"));
        PaymentStatus::Successful
    }
}
