use crate::application::catalog::CatalogStore;
use crate::domain::cart::{
    CART_STORAGE_KEY, CartItem, CartLine, CartView, CartViewLine, CheckoutOutcome,
};
use crate::domain::event::{CartAction, CartEvent};
use crate::domain::ports::{KeyValueStore, KeyValueStoreBox, RenderSinkBox};
use crate::domain::product::ProductId;
use crate::error::{CartError, Result};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

/// The shopping cart state machine.
///
/// `CartEngine` owns the ordered cart lines and borrows the catalog read-only.
/// Every mutating operation persists the full line list through the storage
/// port and then signals the render port, in that order.
pub struct CartEngine<'a> {
    catalog: &'a CatalogStore,
    store: KeyValueStoreBox,
    renderer: RenderSinkBox,
    lines: Vec<CartLine>,
}

impl<'a> CartEngine<'a> {
    /// Creates a new `CartEngine`, restoring whatever cart was persisted in `store`.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The products lines are resolved against.
    /// * `store` - The key-value slot the cart is persisted into.
    /// * `renderer` - The presentation collaborator notified after each mutation.
    pub fn new(
        catalog: &'a CatalogStore,
        store: KeyValueStoreBox,
        renderer: RenderSinkBox,
    ) -> Self {
        let lines = restore(store.as_ref());
        Self {
            catalog,
            store,
            renderer,
            lines,
        }
    }

    /// Adds `quantity` units of a product, appending a line if none exists yet.
    ///
    /// Unknown products are ignored without persisting or rendering. The
    /// quantity is not validated, but a line never survives with a quantity
    /// below one.
    pub fn add_item(&mut self, product_id: ProductId, quantity: i64) -> Result<()> {
        if self.catalog.find_by_id(product_id).is_none() {
            debug!(%product_id, "Ignoring add of unknown product");
            return Ok(());
        }

        match self.position(product_id) {
            Some(position) => {
                let remaining = self.lines.get_mut(position).map(|line| {
                    line.quantity = line.quantity.saturating_add(quantity);
                    line.quantity
                });
                if remaining.is_some_and(|q| q < 1) {
                    self.lines.remove(position);
                }
            }
            None if quantity >= 1 => self.lines.push(CartLine::new(product_id, quantity)),
            None => debug!(%product_id, quantity, "Not creating a line with a non-positive quantity"),
        }

        self.commit()
    }

    /// Removes the line for `product_id`, if any.
    pub fn remove_item(&mut self, product_id: ProductId) -> Result<()> {
        self.lines.retain(|line| line.product_id != product_id);
        self.commit()
    }

    /// Sets the quantity of an existing line; zero or below removes it.
    ///
    /// Persisting and rendering happen even when no line matches.
    pub fn update_quantity(&mut self, product_id: ProductId, new_quantity: i64) -> Result<()> {
        if let Some(position) = self.position(product_id) {
            if new_quantity > 0 {
                if let Some(line) = self.lines.get_mut(position) {
                    line.quantity = new_quantity;
                }
            } else {
                self.lines.remove(position);
            }
        }
        self.commit()
    }

    /// Bumps an existing line by one. No-op when the product is not in the cart.
    pub fn increment(&mut self, product_id: ProductId) -> Result<()> {
        self.step(product_id, 1)
    }

    /// Lowers an existing line by one, removing it at zero.
    pub fn decrement(&mut self, product_id: ProductId) -> Result<()> {
        self.step(product_id, -1)
    }

    pub fn clear_cart(&mut self) -> Result<()> {
        self.lines.clear();
        self.commit()
    }

    /// Confirms the purchase: reports the total and empties the cart.
    pub fn checkout(&mut self) -> Result<CheckoutOutcome> {
        if self.lines.is_empty() {
            return Ok(CheckoutOutcome::EmptyCart);
        }
        let total = self.calculate_total();
        self.clear_cart()?;
        info!(%total, "Checkout completed");
        Ok(CheckoutOutcome::Completed { total })
    }

    /// Sum of `price * quantity` over lines whose product is in the catalog.
    ///
    /// Saturates at `Decimal::MAX` rather than overflowing.
    pub fn calculate_total(&self) -> Decimal {
        self.lines
            .iter()
            .filter_map(|line| {
                self.catalog
                    .find_by_id(line.product_id)
                    .map(|product| product.price().times(line.quantity))
            })
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Sum of quantities over all lines, saturating at `i64::MAX`.
    pub fn item_count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |count, line| count.saturating_add(line.quantity))
    }

    /// Lines resolved against the catalog; unknown products are skipped.
    pub fn get_cart_items(&self) -> Vec<CartItem> {
        self.lines
            .iter()
            .filter_map(|line| {
                self.catalog.find_by_id(line.product_id).map(|product| CartItem {
                    product: product.snapshot(),
                    quantity: line.quantity,
                })
            })
            .collect()
    }

    /// Builds the data handed to the renderer.
    pub fn view(&self) -> CartView {
        let items = self
            .get_cart_items()
            .into_iter()
            .map(|item| CartViewLine {
                line_total: item.product.price.times(item.quantity),
                product: item.product,
                quantity: item.quantity,
            })
            .collect();

        CartView {
            count: self.item_count(),
            items,
            total: self.calculate_total(),
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn quantity_of(&self, product_id: ProductId) -> Option<i64> {
        self.lines
            .iter()
            .find(|line| line.product_id == product_id)
            .map(|line| line.quantity)
    }

    /// Writes the full line list to the storage slot, overwriting the prior value.
    pub fn persist(&self) -> Result<()> {
        let value = serde_json::to_string(&self.lines)?;
        self.store.set(CART_STORAGE_KEY, &value)
    }

    /// Hands a freshly computed view to the render port.
    pub fn signal_render(&mut self) {
        let view = self.view();
        self.renderer.render(&view);
    }

    /// Dispatches one recorded UI event.
    ///
    /// Returns the checkout outcome for `checkout` events.
    pub fn apply_event(&mut self, event: CartEvent) -> Result<Option<CheckoutOutcome>> {
        match event.action {
            CartAction::Add => {
                let product_id = required_product(&event)?;
                self.add_item(product_id, event.quantity.unwrap_or(1))?;
            }
            CartAction::Remove => self.remove_item(required_product(&event)?)?,
            CartAction::Update => {
                let product_id = required_product(&event)?;
                let quantity = event.quantity.ok_or_else(|| {
                    CartError::ValidationError("update event requires a quantity".to_string())
                })?;
                self.update_quantity(product_id, quantity)?;
            }
            CartAction::Increment => self.increment(required_product(&event)?)?,
            CartAction::Decrement => self.decrement(required_product(&event)?)?,
            CartAction::Clear => self.clear_cart()?,
            CartAction::Checkout => return self.checkout().map(Some),
        }
        Ok(None)
    }

    fn step(&mut self, product_id: ProductId, delta: i64) -> Result<()> {
        match self.quantity_of(product_id) {
            Some(quantity) => self.update_quantity(product_id, quantity.saturating_add(delta)),
            None => Ok(()),
        }
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.product_id == product_id)
    }

    fn commit(&mut self) -> Result<()> {
        self.persist()?;
        self.signal_render();
        Ok(())
    }
}

fn required_product(event: &CartEvent) -> Result<ProductId> {
    event.product.ok_or_else(|| {
        CartError::ValidationError(format!("{:?} event requires a product id", event.action))
    })
}

/// Reads the persisted cart. Absent, unreadable or malformed state yields an empty cart.
fn restore(store: &dyn KeyValueStore) -> Vec<CartLine> {
    let raw = match store.get(CART_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "Failed to read persisted cart, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<CartLine>>(&raw) {
        Ok(lines) => normalize(lines),
        Err(e) => {
            warn!(error = %e, "Discarding malformed persisted cart");
            Vec::new()
        }
    }
}

/// Drops non-positive quantities and folds duplicate ids into their first line.
fn normalize(restored: Vec<CartLine>) -> Vec<CartLine> {
    let mut lines: Vec<CartLine> = Vec::with_capacity(restored.len());
    for line in restored {
        if line.quantity < 1 {
            continue;
        }
        match lines.iter_mut().find(|l| l.product_id == line.product_id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
            None => lines.push(line),
        }
    }
    lines
}
