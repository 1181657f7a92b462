//! store::batch
//!
//! Chunked bulk insertion of location records.

use super::{LocationRecord, Store, StoreError};

/// Documented batch size for bulk location inserts.
pub const BATCH_SIZE: usize = 1000;

/// Insert records through `store` in chunks of at most `batch_size`.
///
/// Stops at the first failing batch; already-inserted batches are not
/// rolled back or retried here (delivery guarantees are the store's
/// concern).
pub async fn insert_in_batches(
    store: &dyn Store,
    records: &[LocationRecord],
    batch_size: usize,
) -> Result<(), StoreError> {
    for chunk in records.chunks(batch_size.max(1)) {
        store.create_locations(chunk).await?;
    }
    Ok(())
}
