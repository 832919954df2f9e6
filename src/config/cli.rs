use crate::core::{Notifier, Storage};
use crate::utils::error::{ExportError, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes archives under `base_path`. Each file is staged next to its target and
/// renamed into place, so a failed write never leaves a partial archive behind.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);
        let parent = full_path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let mut staged = NamedTempFile::new_in(parent)?;
        staged.write_all(data)?;
        staged.flush()?;
        staged
            .persist(&full_path)
            .map_err(|e| ExportError::IoError(e.error))?;
        Ok(())
    }
}

/// Prints alerts to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        eprintln!("❌ {}", message);
    }
}
