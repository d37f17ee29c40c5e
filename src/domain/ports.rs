use super::cart::CartView;
use crate::error::Result;

/// Durable key-value slot the cart is persisted into.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    /// Overwrites any prior value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Presentation collaborator notified after every cart mutation.
///
/// Rendering is fire-and-forget: implementations swallow their own failures.
pub trait RenderSink: Send {
    fn render(&mut self, view: &CartView);
}

pub type KeyValueStoreBox = Box<dyn KeyValueStore>;
pub type RenderSinkBox = Box<dyn RenderSink>;
