//! Bind mount execution.
//!
//! [`MountBackend`] is the seam between the driver protocol and the kernel
//! mount table. [`LinuxMounter`] issues the real syscalls; anything else
//! implementing the trait can stand in for it.

use std::path::Path;

use podpath_common::error::Result;

/// Mount table operations needed by the driver.
pub trait MountBackend {
    /// Bind-mounts `source` onto `target` with no flags beyond `MS_BIND`.
    ///
    /// # Errors
    ///
    /// Returns [`podpath_common::error::PodPathError::Mount`] if the kernel
    /// rejects the mount.
    fn bind_mount(&self, source: &Path, target: &Path) -> Result<()>;

    /// Force-unmounts `target`, even if the filesystem is busy.
    ///
    /// # Errors
    ///
    /// Returns [`podpath_common::error::PodPathError::Unmount`] if the kernel
    /// rejects the unmount.
    fn force_unmount(&self, target: &Path) -> Result<()>;
}

/// Backend that talks to the Linux kernel via `mount(2)` and `umount2(2)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinuxMounter;

impl LinuxMounter {
    /// Creates a new Linux mounter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "linux")]
impl MountBackend for LinuxMounter {
    fn bind_mount(&self, source: &Path, target: &Path) -> Result<()> {
        use nix::mount::{MsFlags, mount};
        use podpath_common::constants::BIND_FSTYPE;
        use podpath_common::error::PodPathError;

        mount(
            Some(source),
            target,
            Some(BIND_FSTYPE),
            MsFlags::MS_BIND,
            None::<&str>,
        )
        .map_err(|e| PodPathError::Mount {
            host_path: source.to_path_buf(),
            target: target.to_path_buf(),
            errno: e.to_string(),
        })?;

        tracing::info!(
            source = %source.display(),
            target = %target.display(),
            "bind mount created"
        );
        Ok(())
    }

    fn force_unmount(&self, target: &Path) -> Result<()> {
        use nix::mount::{MntFlags, umount2};
        use podpath_common::error::PodPathError;

        umount2(target, MntFlags::MNT_FORCE).map_err(|e| PodPathError::Unmount {
            target: target.to_path_buf(),
            errno: e.to_string(),
        })?;

        tracing::info!(target = %target.display(), "unmounted");
        Ok(())
    }
}

/// Stub for non-Linux platforms.
#[cfg(not(target_os = "linux"))]
impl MountBackend for LinuxMounter {
    fn bind_mount(&self, _source: &Path, _target: &Path) -> Result<()> {
        Err(podpath_common::error::PodPathError::Unsupported {
            message: "bind mounts require Linux".into(),
        })
    }

    fn force_unmount(&self, _target: &Path) -> Result<()> {
        Err(podpath_common::error::PodPathError::Unsupported {
            message: "unmounting requires Linux".into(),
        })
    }
}
