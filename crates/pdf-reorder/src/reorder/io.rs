//! Document I/O operations for reordering

use crate::types::*;
use lopdf::Document;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Load a single PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    log::debug!(
        "Loaded {} ({} pages)",
        path.display(),
        doc.get_pages().len()
    );
    Ok(doc)
}

/// Save the reordered document.
///
/// The bytes go to a sibling `.part` file first and are renamed over `path`
/// only once fully written, so a failed save never leaves a truncated PDF at
/// the destination.
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>, compress: bool) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        if compress {
            doc.compress();
        }
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, ReorderError>(writer)
    })
    .await??;

    let partial = PartialFile::new(partial_path(&path));
    tokio::fs::write(partial.path(), &bytes).await?;
    tokio::fs::rename(partial.path(), &path).await?;
    partial.commit();

    log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Removes the `.part` file on drop unless it was committed.
///
/// Covers early returns and the save future being dropped mid-write,
/// e.g. when the worker task is aborted.
struct PartialFile {
    path: PathBuf,
    committed: bool,
}

impl PartialFile {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            committed: false,
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for PartialFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output.pdf"));
    name.push(".part");
    path.with_file_name(name)
}
