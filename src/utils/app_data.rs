use crate::error::Result;
use std::fs;
use std::io;
use std::path::PathBuf;

const APP_NAME: &str = "docdex";

/// Snapshot file name inside the app data directory.
const INDEX_FILE: &str = "index.db";

/// Per-user data directory for docdex, created on demand.
pub fn get_data_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "could not determine the user data directory",
        )
    })?;
    let dir = base.join(APP_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Default location for the index snapshot when the CLI is given none.
pub fn default_index_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join(INDEX_FILE))
}
