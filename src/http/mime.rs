//! Content type lookup by file extension.

/// Sent for unknown or missing extensions.
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

/// Maps an extension (without the dot) to its content type.
pub fn content_type_for_extension(ext: &str) -> Option<&'static str> {
    match ext {
        "html" => Some("text/html;charset=utf-8"),
        "jpg" => Some("image/jpeg"),
        "css" => Some("text/css"),
        "js" => Some("text/javascript; charset=UTF-8"),
        "txt" => Some("text/plain"),
        "ico" => Some("image/x-icon"),
        "gif" => Some("image/gif"),
        "png" => Some("image/png"),
        _ => None,
    }
}

/// Content type for a path, taken from whatever follows its last `.`.
///
/// The suffix is not restricted to the final path component, so
/// `dir.v2/file` yields the unknown extension `v2/file`.
pub fn content_type_for_path(path: &str) -> &'static str {
    path.rsplit_once('.')
        .and_then(|(_, ext)| content_type_for_extension(ext))
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}
