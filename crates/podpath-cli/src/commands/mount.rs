//! `podpath mount`: Provision and bind-mount the pod's host directory.

use std::path::PathBuf;

use clap::Args;
use podpath_common::types::DriverOutput;
use podpath_core::driver::Driver;

/// Arguments for the `mount` call.
#[derive(Args, Debug)]
pub struct MountArgs {
    /// Volume directory inside the pod's tree where the mount must appear.
    pub mount_dir: PathBuf,

    /// JSON options supplied by the orchestrator.
    pub options: String,
}

/// Executes the `mount` call.
pub fn execute(driver: &Driver, args: &MountArgs) -> DriverOutput {
    tracing::debug!(mount_dir = %args.mount_dir.display(), "mount requested");
    driver.mount(&args.mount_dir, &args.options)
}
