//! Fixed extension to content-type table.

use std::path::Path;

/// Content type for anything the table does not list.
pub const FALLBACK: &str = "application/octet-stream";

pub const HTML: &str = "text/html; charset=utf-8";

const TABLE: &[(&str, &str)] = &[
    (".html", HTML),
    (".css", "text/css; charset=utf-8"),
    (".js", "text/javascript; charset=utf-8"),
    (".json", "application/json; charset=utf-8"),
    (".png", "image/png"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".svg", "image/svg+xml; charset=utf-8"),
    (".ico", "image/x-icon"),
    (".txt", "text/plain; charset=utf-8"),
    (".map", "application/json; charset=utf-8"),
];

/// Lowercased extension including the leading dot, or `None` when the file
/// name has no extension.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
}

/// Look up an extension (with the dot, already lowercased).
pub fn content_type_for_extension(ext: &str) -> Option<&'static str> {
    TABLE.iter().find(|(known, _)| *known == ext).map(|(_, ty)| *ty)
}

/// Content type for a file path, falling back to [`FALLBACK`].
pub fn content_type_for(path: &Path) -> &'static str {
    extension_of(path)
        .and_then(|ext| content_type_for_extension(&ext))
        .unwrap_or(FALLBACK)
}
