//! Wire types exchanged with the orchestrator.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options payload passed as the last argument of a `mount` call.
///
/// Absent keys decode to empty strings; whether that is acceptable is
/// decided by path derivation, not by decoding. Keys not listed here
/// (`kubernetes.io/fsType`, `kubernetes.io/readwrite`, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountOptions {
    /// Namespace of the pod the volume belongs to.
    #[serde(rename = "kubernetes.io/pod.namespace", default)]
    pub pod_namespace: String,
    /// Pod name, the workload identifier.
    #[serde(rename = "kubernetes.io/pod.name", default)]
    pub pod_name: String,
    /// Pod UID, the instance identifier.
    #[serde(rename = "kubernetes.io/pod.uid", default)]
    pub pod_uid: String,
    /// Base directory on the host under which per-pod directories live.
    #[serde(rename = "hostPath", default)]
    pub host_path: String,
}

impl MountOptions {
    /// Decodes the raw JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::PodPathError::Decode`] if the payload is not a
    /// JSON object of the expected shape.
    pub fn from_json(raw: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// A single attach request, rebuilt from scratch on every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountRequest {
    /// Where the bind mount must appear.
    pub target: PathBuf,
    /// Identity and base path of the volume.
    pub options: MountOptions,
}

/// Outcome of a driver call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriverStatus {
    /// The call completed.
    #[serde(rename = "Success")]
    Success,
    /// The call failed; `message` carries the reason.
    #[serde(rename = "Failure")]
    Failure,
    /// The call is not implemented by this driver.
    #[serde(rename = "Not supported")]
    NotSupported,
}

/// Lifecycle phases the driver implements, reported by `init`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Whether the orchestrator must run a separate attach phase.
    pub attach: bool,
}

/// The single JSON result line printed for every call.
///
/// Only `status` is always present. Every other field is omitted unless
/// the operation has something to say in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverOutput {
    /// Outcome of the call.
    pub status: DriverStatus,
    /// Failure reason or informational text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Attached device path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    /// Unique volume name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_name: Option<String>,
    /// Attachment state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attached: Option<String>,
    /// Capabilities declared during `init`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Capabilities>,
}

impl DriverOutput {
    /// A bare success result with no other fields.
    #[must_use]
    pub const fn success() -> Self {
        Self::with_status(DriverStatus::Success, None)
    }

    /// A failure result carrying `message`.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::with_status(DriverStatus::Failure, Some(message.into()))
    }

    /// A "not supported" result carrying `message`.
    #[must_use]
    pub fn not_supported(message: impl Into<String>) -> Self {
        Self::with_status(DriverStatus::NotSupported, Some(message.into()))
    }

    /// Adds a capability descriptor to the result.
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = Some(capabilities);
        self
    }

    /// Returns `true` if the call succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == DriverStatus::Success
    }

    /// Serializes the result to its single-line JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    const fn with_status(status: DriverStatus, message: Option<String>) -> Self {
        Self {
            status,
            message,
            device: None,
            volume_name: None,
            attached: None,
            capabilities: None,
        }
    }
}

impl From<crate::error::PodPathError> for DriverOutput {
    fn from(err: crate::error::PodPathError) -> Self {
        Self::failure(err.to_string())
    }
}
