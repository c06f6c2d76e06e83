use super::{OrderError, Product, ProductId, ProductService};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::{debug, info, instrument, warn};

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
        }
    }
}

/// Represents a customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub product: Product,
    pub quantity: u32,
    pub status: OrderStatus,
    pub total: f64,
}

impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} x {} @ ${}, total ${}, status {})",
            self.id, self.quantity, self.product.name, self.product.price, self.total, self.status
        )
    }
}

/// Processes orders. Product data is read through the [`ProductService`] it was given.
pub struct OrderService {
    product_service: ProductService,
    orders: Vec<Order>,
    next_id: u32,
}

impl OrderService {
    pub fn new(product_service: ProductService) -> Self {
        Self {
            product_service,
            orders: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a pending order for `quantity` units of a catalog product.
    ///
    /// # Errors
    /// - [`OrderError::InvalidQuantity`] when `quantity` is zero
    /// - [`OrderError::UnknownProduct`] when the catalog has no such product
    #[instrument(skip(self))]
    pub fn create_order(
        &mut self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<Order, OrderError> {
        if quantity == 0 {
            warn!("Rejected empty order");
            return Err(OrderError::InvalidQuantity {
                product_id,
                quantity,
            });
        }
        let product = self
            .product_service
            .get_product(product_id)
            .ok_or(OrderError::UnknownProduct(product_id))?;

        let order = Order {
            id: OrderId::from(self.next_id),
            total: product.price * f64::from(quantity),
            product,
            quantity,
            status: OrderStatus::Pending,
        };
        self.next_id += 1;
        debug!(?order, "Order built");

        self.orders.push(order.clone());
        info!(order_id = %order.id, size = self.orders.len(), "Created");
        Ok(order)
    }

    pub fn get_order(&self, order_id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ProductService {
        let products = ProductService::new();
        products
            .add_product(Product::new(ProductId(1), "Laptop", 1200.0))
            .unwrap();
        products
    }

    #[test]
    fn test_create_order_computes_total() {
        let mut orders = OrderService::new(catalog());

        let order = orders.create_order(ProductId(1), 2).unwrap();

        assert_eq!(order.id, OrderId(1));
        assert_eq!(order.product.name, "Laptop");
        assert_eq!(order.total, 2400.0);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(orders.orders().len(), 1);
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut orders = OrderService::new(catalog());

        let first = orders.create_order(ProductId(1), 1).unwrap();
        let second = orders.create_order(ProductId(1), 3).unwrap();

        assert_eq!(first.id.to_string(), "order_1");
        assert_eq!(second.id.to_string(), "order_2");
        assert_eq!(orders.get_order(OrderId(2)).unwrap().quantity, 3);
    }

    #[test]
    fn test_unknown_product_is_rejected() {
        let mut orders = OrderService::new(catalog());

        let result = orders.create_order(ProductId(42), 1);

        assert_eq!(result, Err(OrderError::UnknownProduct(ProductId(42))));
        assert!(orders.orders().is_empty());
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let mut orders = OrderService::new(catalog());

        let result = orders.create_order(ProductId(1), 0);

        assert!(matches!(result, Err(OrderError::InvalidQuantity { quantity: 0, .. })));
    }

    #[test]
    fn test_sees_products_added_after_construction() {
        let products = ProductService::new();
        let mut orders = OrderService::new(products.clone());
        products
            .add_product(Product::new(ProductId(5), "Monitor", 300.0))
            .unwrap();

        assert!(orders.create_order(ProductId(5), 1).is_ok());
    }

    #[test]
    fn test_order_display() {
        let mut orders = OrderService::new(catalog());
        let order = orders.create_order(ProductId(1), 2).unwrap();

        assert_eq!(
            order.to_string(),
            "order_1 (2 x Laptop @ $1200, total $2400, status pending)"
        );
    }
}
