//! Source and destination path checks

use crate::constants::REORDERED_SUFFIX;
use crate::types::*;
use std::path::{Component, Path, PathBuf};

/// Check a source/destination pair before any PDF work starts.
///
/// Creates the destination directory when it does not exist yet.
pub async fn validate_paths(src: &Path, dst: &Path) -> Result<()> {
    if src.as_os_str().is_empty() || dst.as_os_str().is_empty() {
        return Err(invalid("Please select both source and output paths."));
    }

    let is_file = tokio::fs::metadata(src)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false);
    if !is_file {
        return Err(invalid("Source file does not exist."));
    }

    if same_path(src, dst).await? {
        return Err(invalid("Source and output paths must be different."));
    }

    let dst_dir = match dst.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if tokio::fs::metadata(&dst_dir).await.is_err() {
        log::info!("Creating output directory {}", dst_dir.display());
        tokio::fs::create_dir_all(&dst_dir).await?;
    }

    if !is_writable(&dst_dir).await {
        return Err(invalid("Output directory is not writable."));
    }

    Ok(())
}

/// `<dir>/<stem>_reordered.<ext>` next to the source file
pub fn default_output_path(src: &Path) -> PathBuf {
    let stem = src
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match src.extension() {
        Some(ext) => format!("{}{}.{}", stem, REORDERED_SUFFIX, ext.to_string_lossy()),
        None => format!("{}{}", stem, REORDERED_SUFFIX),
    };
    src.with_file_name(name)
}

fn invalid(message: &str) -> ReorderError {
    ReorderError::PathValidation(message.to_string())
}

async fn same_path(src: &Path, dst: &Path) -> Result<bool> {
    Ok(resolve_path(src).await? == resolve_path(dst).await?)
}

/// Absolute form of `path` with `.`/`..` folded away and the deepest existing
/// ancestor canonicalized, so paths that do not exist yet still compare.
async fn resolve_path(path: &Path) -> Result<PathBuf> {
    let normalized = normalize_lexically(&std::path::absolute(path)?);

    let mut existing = normalized.as_path();
    let mut rest = Vec::new();
    loop {
        if let Ok(canonical) = tokio::fs::canonicalize(existing).await {
            return Ok(rest.iter().rev().fold(canonical, |acc, part| acc.join(part)));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                rest.push(name.to_owned());
                existing = parent;
            }
            _ => return Ok(normalized),
        }
    }
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

async fn is_writable(dir: &Path) -> bool {
    let probe = dir.join(format!(".pdfr-write-probe-{}", std::process::id()));
    let created = tokio::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&probe)
        .await
        .is_ok();
    if created {
        let _ = tokio::fs::remove_file(&probe).await;
    }
    created
}
