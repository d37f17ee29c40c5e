use super::product::{ProductId, ProductSnapshot};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Key of the storage slot holding the serialized cart.
pub const CART_STORAGE_KEY: &str = "shoppingCart";

/// One product's presence in the cart.
///
/// Only the id and quantity are persisted; product data is always
/// resolved against the catalog when a view is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: i64,
}

impl CartLine {
    pub fn new(product_id: ProductId, quantity: i64) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// A cart line resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItem {
    pub product: ProductSnapshot,
    pub quantity: i64,
}

/// A resolved cart line together with its subtotal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartViewLine {
    pub product: ProductSnapshot,
    pub quantity: i64,
    pub line_total: Decimal,
}

/// Everything a renderer needs to display the cart.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CartView {
    /// Sum of quantities over all lines.
    pub count: i64,
    pub items: Vec<CartViewLine>,
    pub total: Decimal,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Result of confirming a checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The cart had lines; it has been cleared.
    Completed { total: Decimal },
    /// Nothing to buy; the cart was left untouched.
    EmptyCart,
}
