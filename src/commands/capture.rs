use crate::io;
use anyhow::Result;
use log::{debug, info};
use std::io::Read;
use std::path::{Path, PathBuf};

pub struct CaptureConfig {
    pub path: PathBuf,
}

/// Read standard input to end-of-stream and write it to the destination file.
///
/// The destination is created if absent and truncated if present; on success
/// its contents equal exactly the text read from standard input.
pub fn handle_capture(config: CaptureConfig) -> Result<()> {
    capture_from(std::io::stdin().lock(), &config.path)
}

fn capture_from(reader: impl Read, path: &Path) -> Result<()> {
    let content = io::read_to_string(reader)?;
    debug!("read {} bytes from standard input", content.len());

    io::write_file(path, &content)?;
    info!("wrote {} bytes to {}", content.len(), path.display());

    Ok(())
}
