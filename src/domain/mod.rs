//! Domain layer: catalog and cart value types plus the ports the
//! application layer talks through.

pub mod cart;
pub mod event;
pub mod money;
pub mod ports;
pub mod product;
