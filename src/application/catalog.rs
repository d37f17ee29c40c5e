use crate::domain::product::{Category, Product, ProductId};
use crate::error::{CartError, Result};
use std::collections::HashMap;

/// Read-only product catalog for one session.
///
/// Keeps products in seed order and indexes them by id.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl CatalogStore {
    /// Builds the catalog from the seed feed. Duplicate ids are rejected.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if index.insert(product.id(), position).is_some() {
                return Err(CartError::ValidationError(format!(
                    "Duplicate product id {} in catalog",
                    product.id()
                )));
            }
        }
        Ok(Self { products, index })
    }

    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.index
            .get(&id)
            .and_then(|&position| self.products.get(position))
    }

    /// All products of `category`, in catalog order.
    pub fn filter_by_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.category() == category)
            .collect()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
