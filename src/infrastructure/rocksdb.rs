use crate::domain::ports::KeyValueStore;
use crate::error::{CartError, Result};
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family holding the key-value slots.
pub const CF_SLOTS: &str = "slots";

/// Key-value slots kept in a RocksDB column family.
///
/// Clones share one open database.
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens the database at `path`, creating it and the slots family on first use.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_slots = ColumnFamilyDescriptor::new(CF_SLOTS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_slots])?;

        Ok(Self { db: Arc::new(db) })
    }
}

impl KeyValueStore for RocksDBStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let cf = self.db.cf_handle(CF_SLOTS).ok_or_else(|| {
            CartError::InternalError(Box::new(std::io::Error::other(
                "Slots column family not found",
            )))
        })?;

        match self.db.get_cf(&cf, key.as_bytes())? {
            Some(bytes) => {
                let value = String::from_utf8(bytes).map_err(|e| {
                    CartError::InternalError(Box::new(std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        format!("Stored value is not UTF-8: {}", e),
                    )))
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let cf = self.db.cf_handle(CF_SLOTS).ok_or_else(|| {
            CartError::InternalError(Box::new(std::io::Error::other(
                "Slots column family not found",
            )))
        })?;

        self.db.put_cf(&cf, key.as_bytes(), value.as_bytes())?;
        Ok(())
    }
}
