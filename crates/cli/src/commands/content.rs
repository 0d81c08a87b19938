use anyhow::{Result, bail};
use std::path::Path;

use crate::open_storage;

pub(crate) fn run_seed(db_path: &Path) -> Result<()> {
    let storage = open_storage(db_path)?;
    let report = storage.seed_if_empty()?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub(crate) fn run_stats(db_path: &Path) -> Result<()> {
    let storage = open_storage(db_path)?;
    let counts = storage.counts()?;
    println!("{}", serde_json::to_string_pretty(&counts)?);
    Ok(())
}

pub(crate) fn run_show(db_path: &Path, title: &str) -> Result<()> {
    let storage = open_storage(db_path)?;
    match storage.destination_by_title(title)? {
        Some(destination) => println!("{}", serde_json::to_string_pretty(&destination)?),
        None => bail!("Destination not found: {title}"),
    }
    Ok(())
}
