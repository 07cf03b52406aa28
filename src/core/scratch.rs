use crate::utils::error::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::Builder;

pub const FILE_PREFIX: &str = "example";
pub const PAYLOAD: &[u8] = b"Example Content";

/// Creates a uniquely named scratch file under `dir`, writes the payload and
/// removes the file again. The handle deletes the file on drop, so removal
/// also happens when the write or close fails.
pub fn write_scratch_file(dir: &Path) -> Result<PathBuf> {
    let mut file = Builder::new().prefix(FILE_PREFIX).tempfile_in(dir)?;
    let path = file.path().to_path_buf();
    tracing::info!("Created temp file: {}", path.display());

    file.write_all(PAYLOAD)?;
    file.close()?;

    Ok(path)
}
