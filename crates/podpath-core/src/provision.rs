//! Idempotent provisioning of per-pod host directories.

use std::io::ErrorKind;
use std::path::Path;

use podpath_common::error::{PodPathError, Result};

/// What [`ensure_host_dir`] found at the derived path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provisioned {
    /// The path was absent and has been created, ancestors included.
    Created,
    /// Something already existed at the path and was left untouched.
    Existing,
}

/// Ensures `path` exists, creating it and any missing ancestors with `mode`.
///
/// The path is checked with `lstat`, so an existing entry of any type,
/// dangling symlinks included, counts as present and is never modified.
///
/// # Errors
///
/// Returns [`PodPathError::Io`] if the path cannot be inspected or created.
pub fn ensure_host_dir(path: &Path, mode: u32) -> Result<Provisioned> {
    match std::fs::symlink_metadata(path) {
        Ok(_) => {
            tracing::debug!(path = %path.display(), "host path already present");
            Ok(Provisioned::Existing)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            create_dir_all(path, mode).map_err(|source| PodPathError::Io {
                op: "mkdir",
                path: path.to_path_buf(),
                source,
            })?;
            tracing::debug!(
                path = %path.display(),
                mode = %format!("{mode:o}"),
                "created host path"
            );
            Ok(Provisioned::Created)
        }
        Err(source) => Err(PodPathError::Io {
            op: "lstat",
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(unix)]
fn create_dir_all(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    std::fs::DirBuilder::new()
        .recursive(true)
        .mode(mode)
        .create(path)
}

#[cfg(not(unix))]
fn create_dir_all(path: &Path, _mode: u32) -> std::io::Result<()> {
    std::fs::create_dir_all(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_creates_missing_ancestors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ns1").join("podA").join("uid123");
        let outcome = ensure_host_dir(&path, 0o777).expect("ensure");
        assert_eq!(outcome, Provisioned::Created);
        assert!(path.is_dir());
    }

    #[test]
    fn ensure_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ns1/podA/uid123");
        assert_eq!(ensure_host_dir(&path, 0o777).expect("first"), Provisioned::Created);
        std::fs::write(path.join("marker"), b"kept").expect("write marker");

        assert_eq!(ensure_host_dir(&path, 0o777).expect("second"), Provisioned::Existing);
        assert_eq!(std::fs::read(path.join("marker")).expect("read marker"), b"kept");
    }

    #[cfg(unix)]
    #[test]
    fn ensure_preserves_directory_identity() {
        use std::os::unix::fs::MetadataExt;

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("uid123");
        let _ = ensure_host_dir(&path, 0o777).expect("first");
        let before = std::fs::metadata(&path).expect("stat").ino();
        let _ = ensure_host_dir(&path, 0o777).expect("second");
        let after = std::fs::metadata(&path).expect("stat").ino();
        assert_eq!(before, after);
    }

    #[test]
    fn ensure_accepts_existing_non_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("uid123");
        std::fs::write(&path, b"file").expect("write");
        assert_eq!(ensure_host_dir(&path, 0o777).expect("ensure"), Provisioned::Existing);
        assert!(path.is_file());
    }

    #[cfg(unix)]
    #[test]
    fn ensure_accepts_dangling_symlink() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("link");
        std::os::unix::fs::symlink(dir.path().join("nowhere"), &path).expect("symlink");
        assert_eq!(ensure_host_dir(&path, 0o777).expect("ensure"), Provisioned::Existing);
    }

    #[test]
    fn ensure_fails_under_regular_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"file").expect("write");
        let path = blocker.join("ns1");
        let err = ensure_host_dir(&path, 0o777).unwrap_err();
        assert!(matches!(err, PodPathError::Io { .. }));
        assert!(err.to_string().starts_with("lstat "));
    }

    #[cfg(unix)]
    #[test]
    fn ensure_applies_requested_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("restricted");
        let _ = ensure_host_dir(&path, 0o700).expect("ensure");
        let mode = std::fs::metadata(&path).expect("stat").permissions().mode();
        assert_eq!(mode & 0o777, 0o700);
    }

    #[test]
    fn ensure_concurrent_calls_on_same_path_all_succeed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ns1/podA/uid123");

        let outcomes: Vec<Provisioned> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..16)
                .map(|_| scope.spawn(|| ensure_host_dir(&path, 0o777)))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("thread").expect("ensure"))
                .collect()
        });

        assert_eq!(outcomes.len(), 16);
        assert!(outcomes.contains(&Provisioned::Created));
        assert!(path.is_dir());
    }
}
