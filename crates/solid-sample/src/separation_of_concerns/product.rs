use super::CatalogError;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;
use tracing::{debug, info, instrument};

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// Payload for updating an existing product. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
}

/// Owns the product catalog.
///
/// The service is a cheap handle: clones share one catalog, which is how
/// [`OrderService`](super::OrderService) holds on to it. The storage itself is private,
/// so every read and write goes through the methods below.
#[derive(Clone, Default)]
pub struct ProductService {
    products: Rc<RefCell<Vec<Product>>>,
}

impl ProductService {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_product(&self, product: Product) -> Result<(), CatalogError> {
        let mut products = self.products.borrow_mut();
        if products.iter().any(|p| p.id == product.id) {
            return Err(CatalogError::AlreadyExists(product.id));
        }
        products.push(product);
        info!(size = products.len(), "Product added");
        Ok(())
    }

    pub fn get_product(&self, product_id: ProductId) -> Option<Product> {
        let product = self
            .products
            .borrow()
            .iter()
            .find(|p| p.id == product_id)
            .cloned();
        debug!(%product_id, found = product.is_some(), "Get");
        product
    }

    #[instrument(skip(self))]
    pub fn update_product(
        &self,
        product_id: ProductId,
        details: ProductUpdate,
    ) -> Result<Product, CatalogError> {
        let mut products = self.products.borrow_mut();
        let product = products
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or(CatalogError::NotFound(product_id))?;

        if let Some(name) = details.name {
            product.name = name;
        }
        if let Some(price) = details.price {
            product.price = price;
        }
        info!("Product updated");
        Ok(product.clone())
    }

    pub fn len(&self) -> usize {
        self.products.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.borrow().is_empty()
    }
}
