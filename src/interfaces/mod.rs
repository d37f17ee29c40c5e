//! Adapters between the outside world and the application layer:
//! CSV feeds in, text out.

pub mod csv;
pub mod text;
