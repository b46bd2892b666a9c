//! Export archive download and extraction.
//!
//! The archive is cached as `<file_id>.zip` under the data directory and
//! the download is skipped when a cached copy exists, so re-runs against
//! the same export are cheap.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, ExportRef, Result, Session};

use super::fleep_api::FleepClient;

/// Downloads the export archive unless it is already cached, returning
/// the archive path.
///
/// # Errors
/// Returns error if the download or the write to disk fails.
pub fn ensure_export_archive(
    client: &FleepClient,
    session: &Session,
    export: &ExportRef,
    data_dir: &Path,
) -> Result<PathBuf> {
    let archive_path = data_dir.join(format!("{}.zip", export.file_id));

    if archive_path.exists() {
        tracing::info!(path = %archive_path.display(), "Export archive already cached");
        return Ok(archive_path);
    }

    let bytes = client.download(session, &export.file_url)?;

    fs::write(&archive_path, bytes).map_err(|e| {
        AppError::io(
            format!("Failed to write archive: {}", archive_path.display()),
            e,
        )
    })?;

    tracing::info!(path = %archive_path.display(), "Export archive downloaded");

    Ok(archive_path)
}

/// Extracts the archive into the destination directory.
///
/// # Errors
/// Returns error if the archive cannot be opened or extracted.
pub fn extract_archive(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    let file = fs::File::open(archive_path).map_err(|e| {
        AppError::io(
            format!("Failed to open archive: {}", archive_path.display()),
            e,
        )
    })?;

    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| AppError::archive("Failed to read export archive", e))?;

    archive
        .extract(dest_dir)
        .map_err(|e| AppError::archive("Failed to extract export archive", e))?;

    tracing::info!(dest = %dest_dir.display(), "Export archive extracted");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_test_zip(path: &Path, entry_name: &str, content: &[u8]) {
        let file = fs::File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        writer
            .start_file(entry_name, zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content).unwrap();
        writer.finish().unwrap();
    }

    #[test]
    fn test_extract_archive() {
        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("export.zip");
        write_test_zip(&archive_path, "export.json", b"{\"contacts\": []}");

        extract_archive(&archive_path, dir.path()).unwrap();

        let extracted = fs::read_to_string(dir.path().join("export.json")).unwrap();
        assert_eq!(extracted, "{\"contacts\": []}");
    }

    #[test]
    fn test_extract_rejects_non_zip() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.zip");
        fs::write(&bogus, "definitely not a zip").unwrap();

        assert!(matches!(
            extract_archive(&bogus, dir.path()),
            Err(AppError::Archive { .. })
        ));
    }

    #[test]
    fn test_extract_missing_archive_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.zip");

        assert!(matches!(
            extract_archive(&missing, dir.path()),
            Err(AppError::Io { .. })
        ));
    }
}
