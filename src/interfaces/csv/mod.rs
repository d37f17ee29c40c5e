pub mod catalog_reader;
pub mod event_reader;
