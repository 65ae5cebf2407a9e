//! Host path derivation.
//!
//! The derived path is a pure function of the options payload: the base
//! host path followed by namespace, pod name and pod UID, in that order.

use std::path::PathBuf;

use podpath_common::constants::{OPT_HOST_PATH, OPT_POD_NAME, OPT_POD_NAMESPACE, OPT_POD_UID};
use podpath_common::error::{PodPathError, Result};
use podpath_common::types::MountOptions;

/// Derives the per-pod host directory for `options`.
///
/// Segments are joined lexically: repeated separators collapse, `.` and
/// `..` are resolved, and a segment starting with `/` never discards the
/// segments before it.
///
/// Unless `allow_empty_segments` is set, every identity field must be a
/// non-empty single path segment and the host path must be absolute.
///
/// # Errors
///
/// Returns [`PodPathError::MissingIdentity`] or
/// [`PodPathError::InvalidOption`] when validation is on and a field is
/// unusable, and [`PodPathError::MissingIdentity`] in either mode when all
/// fields are empty.
pub fn derive_host_path(options: &MountOptions, allow_empty_segments: bool) -> Result<PathBuf> {
    if !allow_empty_segments {
        validate(options)?;
    }

    let joined = [
        options.host_path.as_str(),
        options.pod_namespace.as_str(),
        options.pod_name.as_str(),
        options.pod_uid.as_str(),
    ]
    .iter()
    .filter(|segment| !segment.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join("/");

    if joined.is_empty() {
        return Err(PodPathError::MissingIdentity {
            field: OPT_HOST_PATH,
        });
    }

    let path = path_clean::clean(&joined);
    tracing::debug!(path = %path.display(), "derived host path");
    Ok(path)
}

fn validate(options: &MountOptions) -> Result<()> {
    if options.host_path.is_empty() {
        return Err(PodPathError::MissingIdentity {
            field: OPT_HOST_PATH,
        });
    }
    if !options.host_path.starts_with('/') {
        return Err(PodPathError::InvalidOption {
            field: OPT_HOST_PATH,
            value: options.host_path.clone(),
        });
    }

    for (field, value) in [
        (OPT_POD_NAMESPACE, &options.pod_namespace),
        (OPT_POD_NAME, &options.pod_name),
        (OPT_POD_UID, &options.pod_uid),
    ] {
        validate_segment(field, value)?;
    }
    Ok(())
}

fn validate_segment(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(PodPathError::MissingIdentity { field });
    }
    if value == "." || value == ".." || value.contains('/') || value.contains('\0') {
        return Err(PodPathError::InvalidOption {
            field,
            value: value.to_owned(),
        });
    }
    Ok(())
}
