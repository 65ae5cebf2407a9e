//! CLI command definitions and dispatch.

pub mod init;
pub mod mount;
pub mod unmount;

use clap::{Parser, Subcommand};
use podpath_common::config::DriverConfig;
use podpath_common::types::DriverOutput;
use podpath_core::driver::Driver;

use crate::logging::LogFormat;

/// Host path per pod Flexvolume driver.
#[derive(Parser, Debug)]
#[command(
    name = podpath_common::constants::BIN_NAME,
    version,
    about,
    long_about = "Like hostPath, but creates a host directory per pod.\n\
                  For a hostPath of \"/root/hostpath\" the pod sees \
                  \"/root/hostpath/<pod namespace>/<pod name>/<pod uid>\".\n\
                  Only directories are supported.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Flexvolume call to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Accept mount options with missing or empty pod identity fields.
    #[arg(long, global = true, env = "PODPATH_ALLOW_EMPTY_SEGMENTS")]
    pub allow_empty_segments: bool,

    /// Octal permission bits for created host directories (before umask).
    #[arg(
        long,
        global = true,
        env = "PODPATH_DIR_MODE",
        default_value = "0777",
        value_parser = parse_dir_mode
    )]
    pub dir_mode: u32,

    /// Log filter directive, in `RUST_LOG` syntax.
    #[arg(long, global = true, env = podpath_common::constants::LOG_ENV)]
    pub log: Option<String>,

    /// Log line format.
    #[arg(long, global = true, env = "PODPATH_LOG_FORMAT", value_enum, default_value_t)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Builds the driver configuration from the global flags.
    #[must_use]
    pub const fn driver_config(&self) -> DriverConfig {
        DriverConfig {
            allow_empty_segments: self.allow_empty_segments,
            dir_mode: self.dir_mode,
        }
    }
}

fn parse_dir_mode(raw: &str) -> Result<u32, String> {
    podpath_common::config::parse_dir_mode(raw).map_err(|e| e.to_string())
}

/// Flexvolume calls.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Declare driver capabilities.
    Init,
    /// Provision the pod's host directory and bind-mount it.
    Mount(mount::MountArgs),
    /// Force-unmount a previously mounted volume directory.
    Unmount(unmount::UnmountArgs),
    /// Any other Flexvolume call; answered with "Not supported".
    #[command(external_subcommand)]
    Other(Vec<String>),
}

/// Dispatches the parsed call to the driver and prints its result line.
///
/// # Errors
///
/// Returns an error only if the result line cannot be written.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let driver = Driver::new(cli.driver_config());
    let output = dispatch(&driver, cli.command);
    crate::output::emit_stdout(&output)
}

fn dispatch(driver: &Driver, command: Command) -> DriverOutput {
    match command {
        Command::Init => init::execute(driver),
        Command::Mount(args) => mount::execute(driver, &args),
        Command::Unmount(args) => unmount::execute(driver, &args),
        Command::Other(call) => {
            let name = call.first().map_or("", String::as_str);
            driver.not_supported(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use podpath_common::types::DriverStatus;

    use super::*;

    #[test]
    fn parses_init() {
        let cli = Cli::try_parse_from(["podpath", "init"]).unwrap();
        assert!(matches!(cli.command, Command::Init));
    }

    #[test]
    fn parses_mount_positionals() {
        let cli = Cli::try_parse_from([
            "podpath",
            "mount",
            "/var/lib/kubelet/pods/uid123/volumes/x",
            r#"{"hostPath":"/data/hp"}"#,
        ])
        .unwrap();
        let Command::Mount(args) = cli.command else {
            panic!("expected mount");
        };
        assert_eq!(
            args.mount_dir,
            Path::new("/var/lib/kubelet/pods/uid123/volumes/x")
        );
        assert_eq!(args.options, r#"{"hostPath":"/data/hp"}"#);
    }

    #[test]
    fn mount_requires_options() {
        assert!(Cli::try_parse_from(["podpath", "mount", "/mnt/x"]).is_err());
    }

    #[test]
    fn parses_unmount() {
        let cli = Cli::try_parse_from(["podpath", "unmount", "/mnt/x"]).unwrap();
        let Command::Unmount(args) = cli.command else {
            panic!("expected unmount");
        };
        assert_eq!(args.mount_dir, Path::new("/mnt/x"));
    }

    #[test]
    fn unknown_call_is_captured() {
        let cli = Cli::try_parse_from(["podpath", "getvolumename", "{}"]).unwrap();
        let Command::Other(call) = cli.command else {
            panic!("expected external subcommand");
        };
        assert_eq!(call, vec!["getvolumename".to_owned(), "{}".to_owned()]);
    }

    #[test]
    fn unknown_call_dispatches_to_not_supported() {
        let cli = Cli::try_parse_from(["podpath", "attach", "{}", "node1"]).unwrap();
        let driver = Driver::new(cli.driver_config());
        let output = dispatch(&driver, cli.command);
        assert_eq!(output.status, DriverStatus::NotSupported);
        assert_eq!(output.message.as_deref(), Some("attach is not supported"));
    }

    #[test]
    fn init_dispatch_reports_capabilities() {
        let cli = Cli::try_parse_from(["podpath", "init"]).unwrap();
        let driver = Driver::new(cli.driver_config());
        let output = dispatch(&driver, cli.command);
        assert!(output.is_success());
        assert_eq!(output.capabilities.map(|c| c.attach), Some(false));
    }

    #[test]
    fn global_flags_shape_driver_config() {
        let cli = Cli::try_parse_from([
            "podpath",
            "--allow-empty-segments",
            "--dir-mode",
            "0750",
            "init",
        ])
        .unwrap();
        let config = cli.driver_config();
        assert!(config.allow_empty_segments);
        assert_eq!(config.dir_mode, 0o750);
    }

    #[test]
    fn invalid_dir_mode_is_rejected() {
        assert!(Cli::try_parse_from(["podpath", "--dir-mode", "rwx", "init"]).is_err());
    }

    #[test]
    fn malformed_mount_payload_dispatches_to_failure() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["podpath", "mount", target, "{not json"]).unwrap();
        let driver = Driver::new(cli.driver_config());
        let output = dispatch(&driver, cli.command);
        assert_eq!(output.status, DriverStatus::Failure);
        assert!(output.message.is_some_and(|m| !m.is_empty()));
    }
}
