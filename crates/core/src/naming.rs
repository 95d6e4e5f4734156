//! Artifact naming for filtered uploads.
//!
//! Convention: `{filter_name}-{original_filename}`, stored under the
//! artifact directory and served from [`ARTIFACT_URL_PREFIX`].

use crate::error::CoreError;

/// URL prefix the artifact directory is mounted under.
pub const ARTIFACT_URL_PREFIX: &str = "/static/images";

/// Reduce a client-supplied filename to its final path component.
///
/// Rejects names that are empty after stripping, `.`/`..`, or contain NUL.
///
/// # Examples
///
/// ```
/// use showcase_core::naming::sanitize_filename;
///
/// assert_eq!(sanitize_filename("cat.png").unwrap(), "cat.png");
/// assert_eq!(sanitize_filename("../../etc/cat.png").unwrap(), "cat.png");
/// assert_eq!(sanitize_filename(r"C:\pics\cat.png").unwrap(), "cat.png");
/// assert!(sanitize_filename("..").is_err());
/// ```
pub fn sanitize_filename(raw: &str) -> Result<String, CoreError> {
    let name = raw.rsplit(['/', '\\']).next().unwrap_or("").trim();

    if name.is_empty() || name == "." || name == ".." || name.contains('\0') {
        return Err(CoreError::Validation(format!(
            "Invalid upload filename '{raw}'"
        )));
    }
    Ok(name.to_string())
}

/// Longest artifact name, in bytes, that common filesystems accept as a
/// single path component.
pub const MAX_ARTIFACT_NAME_BYTES: usize = 255;

/// Derive the on-disk artifact name for a filter applied to an upload.
///
/// Names longer than [`MAX_ARTIFACT_NAME_BYTES`] are rejected with
/// [`CoreError::Validation`].
///
/// ```
/// use showcase_core::naming::artifact_filename;
///
/// assert_eq!(artifact_filename("blur", "cat.png").unwrap(), "blur-cat.png");
/// assert_eq!(
///     artifact_filename("edge enhance", "cat.png").unwrap(),
///     "edge enhance-cat.png"
/// );
/// assert!(artifact_filename("blur", &"a".repeat(300)).is_err());
/// ```
pub fn artifact_filename(
    filter_name: &str,
    original_filename: &str,
) -> Result<String, CoreError> {
    let name = format!("{filter_name}-{original_filename}");
    if name.len() > MAX_ARTIFACT_NAME_BYTES {
        return Err(CoreError::Validation(format!(
            "Upload filename is too long: the stored name would be {} bytes, at most \
             {MAX_ARTIFACT_NAME_BYTES} are allowed",
            name.len()
        )));
    }
    Ok(name)
}

/// Public URL for an artifact name. The name is percent-encoded as a single
/// path segment.
pub fn artifact_url(artifact_name: &str) -> String {
    format!("{ARTIFACT_URL_PREFIX}/{}", encode_path_segment(artifact_name))
}

fn encode_path_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
