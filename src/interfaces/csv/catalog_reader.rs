use crate::application::catalog::CatalogStore;
use crate::domain::money::Price;
use crate::domain::product::{Category, Product, ProductId};
use crate::error::{CartError, Result};
use serde::Deserialize;
use std::io::Read;

/// Separator between image references in the `images` column.
pub const IMAGE_SEPARATOR: char = '|';

#[derive(Debug, Deserialize)]
struct CatalogRecord {
    id: ProductId,
    name: String,
    description: String,
    price: Price,
    images: String,
    category: Category,
}

impl TryFrom<CatalogRecord> for Product {
    type Error = CartError;

    fn try_from(record: CatalogRecord) -> Result<Self> {
        let images = record
            .images
            .split(IMAGE_SEPARATOR)
            .map(str::trim)
            .filter(|img| !img.is_empty())
            .map(String::from)
            .collect();
        Product::new(
            record.id,
            record.name,
            record.description,
            record.price,
            images,
            record.category,
        )
    }
}

/// Reads the product seed feed from a CSV source.
///
/// Expected header: `id, name, description, price, images, category`.
pub struct CatalogReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CatalogReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily reads and validates products, one per row.
    pub fn products(self) -> impl Iterator<Item = Result<Product>> {
        self.reader.into_deserialize::<CatalogRecord>().map(|result| {
            let record = result?;
            Product::try_from(record)
        })
    }

    /// Reads the whole feed. Any invalid row fails the load.
    pub fn into_catalog(self) -> Result<CatalogStore> {
        let products = self.products().collect::<Result<Vec<_>>>()?;
        CatalogStore::new(products)
    }
}
