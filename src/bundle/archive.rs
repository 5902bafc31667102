//! Zip archive packing and unpacking.

use crate::{Error, Result};
use std::fs::File;
use std::path::Path;

/// Unpacks a bundle archive into `dest`.
///
/// # Errors
///
/// Returns an error if the archive cannot be opened or is not a valid
/// zip container.
pub fn unpack(archive: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive).map_err(|e| Error::OperationFailed {
        operation: "open_bundle".to_string(),
        cause: e.to_string(),
    })?;
    let mut zip = zip::ZipArchive::new(file).map_err(|e| Error::OperationFailed {
        operation: "read_bundle".to_string(),
        cause: e.to_string(),
    })?;
    zip.extract(dest).map_err(|e| Error::OperationFailed {
        operation: "unpack_bundle".to_string(),
        cause: e.to_string(),
    })?;
    tracing::debug!(archive = %archive.display(), entries = zip.len(), "unpacked bundle");
    Ok(())
}

/// Packs the regular files at the top level of `dir` into a zip archive
/// at `archive`.
///
/// Entries are written in filename order so packing the same tree twice
/// produces the same archive layout. Subdirectories are ignored; a
/// bundle is a flat container.
///
/// # Errors
///
/// Returns an error if the directory cannot be read or the archive
/// cannot be written.
pub fn pack(dir: &Path, archive: &Path) -> Result<()> {
    let mut files: Vec<(String, std::path::PathBuf)> = Vec::new();
    let entries = std::fs::read_dir(dir).map_err(|e| Error::OperationFailed {
        operation: "read_scratch_dir".to_string(),
        cause: e.to_string(),
    })?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::OperationFailed {
            operation: "read_scratch_dir".to_string(),
            cause: e.to_string(),
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        files.push((name.to_string(), path));
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));

    let out = File::create(archive).map_err(|e| Error::OperationFailed {
        operation: "create_bundle".to_string(),
        cause: e.to_string(),
    })?;
    let mut writer = zip::ZipWriter::new(out);
    let options = zip::write::SimpleFileOptions::default();

    for (name, path) in &files {
        writer
            .start_file(name.as_str(), options)
            .map_err(|e| Error::OperationFailed {
                operation: "pack_bundle".to_string(),
                cause: format!("{name}: {e}"),
            })?;
        let mut src = File::open(path).map_err(|e| Error::OperationFailed {
            operation: "pack_bundle".to_string(),
            cause: format!("{name}: {e}"),
        })?;
        std::io::copy(&mut src, &mut writer).map_err(|e| Error::OperationFailed {
            operation: "pack_bundle".to_string(),
            cause: format!("{name}: {e}"),
        })?;
    }
    writer.finish().map_err(|e| Error::OperationFailed {
        operation: "finish_bundle".to_string(),
        cause: e.to_string(),
    })?;
    tracing::debug!(archive = %archive.display(), entries = files.len(), "packed bundle");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_pack_then_unpack_restores_files() {
        let src = TempDir::new().unwrap();
        std::fs::write(src.path().join("a.json"), b"{}").unwrap();
        std::fs::write(src.path().join("info.plist"), b"<plist/>").unwrap();

        let out = TempDir::new().unwrap();
        let archive = out.path().join("set.alfredsnippets");
        pack(src.path(), &archive).unwrap();

        let dest = TempDir::new().unwrap();
        unpack(&archive, dest.path()).unwrap();

        assert_eq!(std::fs::read(dest.path().join("a.json")).unwrap(), b"{}");
        assert_eq!(
            std::fs::read(dest.path().join("info.plist")).unwrap(),
            b"<plist/>"
        );
    }

    #[test]
    fn test_pack_skips_subdirectories() {
        let src = TempDir::new().unwrap();
        std::fs::write(src.path().join("a.json"), b"{}").unwrap();
        std::fs::create_dir(src.path().join("nested")).unwrap();
        std::fs::write(src.path().join("nested").join("b.json"), b"{}").unwrap();

        let out = TempDir::new().unwrap();
        let archive = out.path().join("set.alfredsnippets");
        pack(src.path(), &archive).unwrap();

        let dest = TempDir::new().unwrap();
        unpack(&archive, dest.path()).unwrap();
        assert!(dest.path().join("a.json").is_file());
        assert!(!dest.path().join("nested").exists());
    }

    #[test]
    fn test_unpack_rejects_garbage() {
        let dir = TempDir::new().unwrap();
        let bogus = dir.path().join("not-a.alfredsnippets");
        std::fs::write(&bogus, b"definitely not a zip").unwrap();
        assert!(unpack(&bogus, dir.path()).is_err());
    }
}
