//! Common file system operations with unified error handling

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::Result;
use crate::error::fs::{read_failed, write_failed};

/// Largest buffer reserved up front from a declared size
const MAX_PREALLOC: usize = 16 * 1024 * 1024;

/// Buffer capacity for content that claims to be `declared` bytes long
///
/// Declared sizes come from servers and archive headers, so the reservation
/// is capped; the buffer still grows past it as bytes arrive.
pub fn capacity_hint(declared: Option<u64>) -> usize {
    declared
        .and_then(|len| usize::try_from(len).ok())
        .map_or(0, |len| len.min(MAX_PREALLOC))
}

/// Replace `path` with `bytes` in one step
///
/// Writes to a temp file in the same directory, then renames it over `path`,
/// so readers see either the old content or the new, never a partial file.
/// Creates the parent directory when missing.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(|e| write_failed(dir, e))?;

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| write_failed(path, e))?;
    temp.write_all(bytes).map_err(|e| write_failed(path, e))?;
    temp.flush().map_err(|e| write_failed(path, e))?;
    temp.persist(path).map_err(|e| write_failed(path, e.error))?;
    Ok(())
}

/// Copy `src` to `dst` through [`write_atomic`]
pub fn copy_atomic(src: &Path, dst: &Path) -> Result<()> {
    let bytes = fs::read(src).map_err(|e| read_failed(src, e))?;
    write_atomic(dst, &bytes)
}

/// Read a file that may legitimately be absent
pub fn read_optional(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(read_failed(path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_capacity_hint_is_capped() {
        assert_eq!(capacity_hint(None), 0);
        assert_eq!(capacity_hint(Some(3)), 3);
        assert_eq!(capacity_hint(Some(u64::MAX)), MAX_PREALLOC);
        assert_eq!(capacity_hint(Some(1 << 63)), MAX_PREALLOC);
    }

    #[test]
    fn test_write_atomic_creates_parents_and_replaces() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/dir/file.json");
        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");

        let leftovers: Vec<_> = fs::read_dir(path.parent().unwrap())
            .unwrap()
            .filter_map(std::result::Result::ok)
            .collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[test]
    fn test_copy_atomic() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a.zip");
        fs::write(&src, b"zip").unwrap();
        let dst = temp.path().join("out/b.zip");
        copy_atomic(&src, &dst).unwrap();
        assert_eq!(fs::read(&dst).unwrap(), b"zip");
    }

    #[test]
    fn test_copy_atomic_missing_source() {
        let temp = TempDir::new().unwrap();
        let err = copy_atomic(&temp.path().join("missing"), &temp.path().join("x")).unwrap_err();
        assert!(matches!(err, crate::error::McpkgError::FileReadFailed { .. }));
    }

    #[test]
    fn test_read_optional() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("f");
        assert_eq!(read_optional(&path).unwrap(), None);
        fs::write(&path, b"x").unwrap();
        assert_eq!(read_optional(&path).unwrap(), Some(b"x".to_vec()));
    }
}
