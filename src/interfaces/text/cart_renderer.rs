use crate::domain::cart::CartView;
use crate::domain::money::format_amount;
use crate::domain::ports::RenderSink;
use std::io::{self, Write};
use tracing::warn;

/// Message shown in place of the line list when the cart has no items.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";

/// Which parts of the cart display are present.
///
/// Each part is drawn independently; a missing one does not affect the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderHooks {
    pub count: bool,
    pub items: bool,
    pub total: bool,
}

impl Default for RenderHooks {
    fn default() -> Self {
        Self {
            count: true,
            items: true,
            total: true,
        }
    }
}

/// Renders cart views as plain text into any writer.
pub struct TextRenderer<W: Write + Send> {
    out: W,
    hooks: RenderHooks,
}

impl<W: Write + Send> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self::with_hooks(out, RenderHooks::default())
    }

    pub fn with_hooks(out: W, hooks: RenderHooks) -> Self {
        Self { out, hooks }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_view(&mut self, view: &CartView) -> io::Result<()> {
        if self.hooks.count {
            writeln!(self.out, "Items in cart: {}", view.count)?;
        }

        if self.hooks.items {
            if view.is_empty() {
                writeln!(self.out, "{EMPTY_CART_MESSAGE}")?;
            }
            for line in &view.items {
                writeln!(
                    self.out,
                    "#{:<4} {:<32} x{:<4} {:>12}",
                    line.product.id,
                    line.product.name,
                    line.quantity,
                    format_amount(line.line_total)
                )?;
            }
        }

        if self.hooks.total {
            writeln!(self.out, "Total: {}", format_amount(view.total))?;
        }

        self.out.flush()
    }
}

impl<W: Write + Send> RenderSink for TextRenderer<W> {
    fn render(&mut self, view: &CartView) {
        if let Err(e) = self.write_view(view) {
            warn!(error = %e, "Failed to render cart");
        }
    }
}

/// A render sink that discards every view.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRenderer;

impl RenderSink for NoopRenderer {
    fn render(&mut self, _view: &CartView) {}
}
