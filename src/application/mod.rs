//! Application layer containing the catalog and cart orchestration.
//!
//! `CartEngine` is the single entry point for cart mutations. It talks to
//! storage and presentation only through the ports in `domain::ports`.

pub mod catalog;
pub mod engine;
