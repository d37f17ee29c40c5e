use super::product::ProductId;
use serde::Deserialize;

/// User interaction that drives the cart.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CartAction {
    Add,
    Remove,
    Update,
    Increment,
    Decrement,
    Clear,
    Checkout,
}

/// A recorded UI event, as read from an event stream.
///
/// `product` and `quantity` are only meaningful for some actions.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct CartEvent {
    pub action: CartAction,
    pub product: Option<ProductId>,
    pub quantity: Option<i64>,
}

impl CartEvent {
    pub fn new(action: CartAction, product: Option<ProductId>, quantity: Option<i64>) -> Self {
        Self {
            action,
            product,
            quantity,
        }
    }
}
