use std::fs::{self, File};
use std::io::{self, Read, Seek};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use zip::ZipArchive;

use super::{UnsafeEntry, UnzipError};

/// Extracts every entry of the zip file at `archive` into `target`, creating directories as
/// needed and overwriting existing files. Returns the number of files written.
///
/// Every entry path is checked before anything is written, so an archive containing an entry
/// that would land outside of `target` leaves the filesystem untouched.
///
/// # Errors
/// - [`UnzipError::UnsafeEntry`] if an entry path is absolute or escapes `target`.
/// - [`UnzipError::Zip`] if the archive is malformed.
/// - [`UnzipError::IO`] if reading the archive or writing an entry fails.
pub fn unzip(archive: impl AsRef<Path>, target: impl AsRef<Path>) -> Result<usize, UnzipError> {
    let archive = archive.as_ref();
    debug!(archive = %archive.display(), "opening archive");
    unzip_from(File::open(archive)?, target)
}

/// Extracts a zip archive read from `reader` into `target`. See [`unzip`].
///
/// # Errors
/// As for [`unzip`].
pub fn unzip_from<R: Read + Seek>(reader: R, target: impl AsRef<Path>) -> Result<usize, UnzipError> {
    let target = target.as_ref();
    let mut zip = ZipArchive::new(reader)?;

    let paths = (0..zip.len())
        .map(|index| enclosed_path(&mut zip, index))
        .collect::<Result<Vec<_>, _>>()?;

    fs::create_dir_all(target)?;
    let mut files = 0;
    for (index, relative) in paths.into_iter().enumerate() {
        let mut entry = zip.by_index(index)?;
        let path = target.join(relative);

        if entry.is_dir() {
            trace!(path = %path.display(), "creating directory");
            fs::create_dir_all(&path)?;
            continue;
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let bytes = io::copy(&mut entry, &mut File::create(&path)?)?;
        trace!(path = %path.display(), bytes, "extracted file");
        files += 1;
    }

    debug!(target = %target.display(), files, "extracted archive");
    Ok(files)
}

fn enclosed_path<R: Read + Seek>(zip: &mut ZipArchive<R>, index: usize) -> Result<PathBuf, UnzipError> {
    let entry = zip.by_index(index)?;
    match entry.enclosed_name() {
        Some(path) => Ok(path),
        None => Err(UnsafeEntry {
            name: entry.name().to_owned(),
        }
        .into()),
    }
}
