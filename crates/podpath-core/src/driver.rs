//! The Flexvolume driver protocol.
//!
//! Each operation is a stateless call that always produces exactly one
//! [`DriverOutput`]. Errors never cross the operation boundary: they are
//! logged and folded into a `Failure` result carrying their message.

use std::path::{Path, PathBuf};

use podpath_common::config::DriverConfig;
use podpath_common::error::Result;
use podpath_common::types::{Capabilities, DriverOutput, MountOptions, MountRequest};

use crate::mount::{LinuxMounter, MountBackend};
use crate::path::derive_host_path;
use crate::provision::ensure_host_dir;

/// Host path per pod mount driver.
#[derive(Debug, Clone, Default)]
pub struct Driver<M = LinuxMounter> {
    config: DriverConfig,
    mounter: M,
}

impl Driver<LinuxMounter> {
    /// Creates a driver backed by the kernel mount table.
    #[must_use]
    pub const fn new(config: DriverConfig) -> Self {
        Self::with_mounter(config, LinuxMounter::new())
    }
}

impl<M: MountBackend> Driver<M> {
    /// Creates a driver that mounts through `mounter`.
    #[must_use]
    pub const fn with_mounter(config: DriverConfig, mounter: M) -> Self {
        Self { config, mounter }
    }

    /// Returns the mount backend.
    #[must_use]
    pub const fn mounter(&self) -> &M {
        &self.mounter
    }

    /// Handles `init`: declares that no separate attach phase is needed.
    #[must_use]
    pub fn init(&self) -> DriverOutput {
        tracing::debug!("init");
        let mut output =
            DriverOutput::success().with_capabilities(Capabilities { attach: false });
        output.message = Some(podpath_common::constants::STATUS_SUCCESS.to_owned());
        output
    }

    /// Handles `mount <mount dir> <json options>`.
    ///
    /// Decodes the payload, derives and provisions the host directory, then
    /// bind-mounts it onto `mount_dir`. A failure before the mount leaves
    /// the mount table untouched; a failure of the mount itself leaves the
    /// provisioned directory in place.
    #[must_use]
    pub fn mount(&self, mount_dir: &Path, raw_options: &str) -> DriverOutput {
        let result = MountOptions::from_json(raw_options).and_then(|options| {
            self.attach(&MountRequest {
                target: mount_dir.to_path_buf(),
                options,
            })
        });
        match result {
            Ok(host_path) => {
                tracing::info!(
                    host_path = %host_path.display(),
                    target = %mount_dir.display(),
                    "volume mounted"
                );
                DriverOutput::success()
            }
            Err(e) => {
                tracing::warn!(target = %mount_dir.display(), error = %e, "mount failed");
                e.into()
            }
        }
    }

    /// Handles `unmount <mount dir>`.
    ///
    /// The host directory is never removed.
    #[must_use]
    pub fn unmount(&self, mount_dir: &Path) -> DriverOutput {
        match self.mounter.force_unmount(mount_dir) {
            Ok(()) => DriverOutput::success(),
            Err(e) => {
                tracing::warn!(target = %mount_dir.display(), error = %e, "unmount failed");
                e.into()
            }
        }
    }

    /// Handles any Flexvolume call this driver does not implement.
    #[must_use]
    pub fn not_supported(&self, call: &str) -> DriverOutput {
        tracing::debug!(call, "unsupported call");
        DriverOutput::not_supported(format!("{call} is not supported"))
    }

    /// Provisions and mounts the host directory for `request`.
    ///
    /// Returns the derived host path on success.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's error: derivation, provisioning, or
    /// the bind mount.
    pub fn attach(&self, request: &MountRequest) -> Result<PathBuf> {
        let host_path = derive_host_path(&request.options, self.config.allow_empty_segments)?;
        let provisioned = ensure_host_dir(&host_path, self.config.dir_mode)?;
        tracing::debug!(
            host_path = %host_path.display(),
            provisioned = ?provisioned,
            "host path ready"
        );
        self.mounter.bind_mount(&host_path, &request.target)?;
        Ok(host_path)
    }
}
