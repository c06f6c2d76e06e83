//! # Separation of Concerns
//!
//! A small e-commerce backend split into four services, each owning one concern:
//!
//! | Service | Concern | Depends on |
//! |---------|---------|------------|
//! | [`ProductService`] | Catalog: add, get, update products | nothing |
//! | [`OrderService`] | Order creation and totals | [`ProductService`] (held handle) |
//! | [`PaymentService`] | Charging an order | nothing |
//! | [`UserService`] | Registration and login | nothing |
//!
//! There is no common base type. `OrderService` composes a `ProductService` and only ever
//! calls its public methods; no service touches another's storage.
//!
//! ## Usage
//!
//! ```rust
//! use demo_framework::Console;
//! use solid_sample::separation_of_concerns::{
//!     OrderService, PaymentInfo, PaymentService, PaymentStatus, Product, ProductId,
//!     ProductService,
//! };
//!
//! let (console, transcript) = Console::recording();
//! let product_service = ProductService::new();
//! let mut order_service = OrderService::new(product_service.clone());
//! let payment_service = PaymentService::new(console);
//!
//! product_service.add_product(Product::new(ProductId(1), "Laptop", 1200.0))?;
//! let order = order_service.create_order(ProductId(1), 2)?;
//! let status = payment_service.process_payment(
//!     &order,
//!     &PaymentInfo { card_number: "1234-5678-9012-3456".into() },
//! );
//!
//! assert_eq!(order.total, 2400.0);
//! assert_eq!(status, PaymentStatus::Successful);
//! assert_eq!(transcript.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod order;
pub mod payment;
pub mod product;
pub mod user;

pub use error::*;
pub use order::*;
pub use payment::*;
pub use product::*;
pub use user::*;

use demo_framework::{Console, Demo, DemoError};
use tracing::info;

pub struct SeparationOfConcernsDemo;

impl Demo for SeparationOfConcernsDemo {
    fn name(&self) -> &'static str {
        "separation-of-concerns"
    }

    fn summary(&self) -> &'static str {
        "Products, orders, payments and users are independent services"
    }

    fn run(&self, console: &Console) -> Result<(), DemoError> {
        let product_service = ProductService::new();
        let mut order_service = OrderService::new(product_service.clone());
        let payment_service = PaymentService::new(console.clone());
        let _user_service = UserService::new();

        // Scenario: a customer orders two laptops and pays by card
        product_service
            .add_product(Product::new(ProductId(1), "Laptop", 1200.0))
            .map_err(DemoError::failed)?;
        let order = order_service
            .create_order(ProductId(1), 2)
            .map_err(DemoError::failed)?;
        let status = payment_service.process_payment(
            &order,
            &PaymentInfo {
                card_number: "1234-5678-9012-3456".to_string(),
            },
        );
        info!(order_id = %order.id, %status, "Scenario complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_output() {
        let (console, transcript) = Console::recording();
        SeparationOfConcernsDemo.run(&console).unwrap();

        assert_eq!(
            transcript.lines(),
            vec!["Processing payment for order: order_1 (2 x Laptop @ $1200, total $2400, status pending)"]
        );
    }
}
