//! Clean the public directory

use anyhow::Result;
use std::fs;

use crate::Stellar;

/// Clean the public directory
pub fn run(stellar: &Stellar) -> Result<()> {
    if stellar.public_dir.exists() {
        fs::remove_dir_all(&stellar.public_dir)?;
        tracing::info!("Deleted: {:?}", stellar.public_dir);
    }

    Ok(())
}
