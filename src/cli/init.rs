use std::path::Path;

use crate::error::Result;
use crate::store::Store;

/// Create the store directory and database, idempotently.
pub async fn init_store(home: Option<&Path>) -> Result<()> {
    let store = Store::init(home)?;
    let pool = store.open().await?;
    pool.close().await;

    println!(
        "Initialized {} store at {}",
        store.mode.label(),
        store.store_dir.display()
    );
    Ok(())
}
