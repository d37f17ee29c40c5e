use crate::domain::event::CartEvent;
use crate::error::{CartError, Result};
use std::io::Read;

/// Recorded UI events, one per row: `action, product, quantity`.
///
/// Trailing columns an action does not need may be left out entirely.
pub struct EventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EventReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Events in stream order; a bad row yields an error without ending the stream.
    pub fn events(self) -> impl Iterator<Item = Result<CartEvent>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CartError::from))
    }
}
