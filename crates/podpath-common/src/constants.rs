//! Protocol constants and defaults.

/// Informational message returned by `init`.
pub const STATUS_SUCCESS: &str = "Success";

/// Options key carrying the pod namespace.
pub const OPT_POD_NAMESPACE: &str = "kubernetes.io/pod.namespace";

/// Options key carrying the pod name (workload identifier).
pub const OPT_POD_NAME: &str = "kubernetes.io/pod.name";

/// Options key carrying the pod UID (instance identifier).
pub const OPT_POD_UID: &str = "kubernetes.io/pod.uid";

/// Options key carrying the base host path.
pub const OPT_HOST_PATH: &str = "hostPath";

/// Permission bits for directories created on the host, before umask.
pub const DEFAULT_DIR_MODE: u32 = 0o777;

/// Filesystem type passed to `mount(2)` for bind mounts.
pub const BIND_FSTYPE: &str = "none";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "podpath";

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "PODPATH_LOG";

/// Filter applied when no log directive is configured.
///
/// Logging stays off by default: the orchestrator reads stdout and stderr
/// together and expects nothing but the result line.
pub const DEFAULT_LOG_FILTER: &str = "off";
