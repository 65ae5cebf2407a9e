//! `podpath unmount`: Force-unmount a volume directory.

use std::path::PathBuf;

use clap::Args;
use podpath_common::types::DriverOutput;
use podpath_core::driver::Driver;

/// Arguments for the `unmount` call.
#[derive(Args, Debug)]
pub struct UnmountArgs {
    /// Volume directory to unmount.
    pub mount_dir: PathBuf,
}

/// Executes the `unmount` call.
///
/// The host directory behind the mount is kept.
pub fn execute(driver: &Driver, args: &UnmountArgs) -> DriverOutput {
    tracing::debug!(mount_dir = %args.mount_dir.display(), "unmount requested");
    driver.unmount(&args.mount_dir)
}
