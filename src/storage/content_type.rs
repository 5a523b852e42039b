// file: src/storage/content_type.rs
// description: MIME type resolution from file extensions
// reference: https://docs.rs/mime_guess

/// MIME type for a file path, falling back to application/octet-stream
/// for unknown extensions.
pub fn resolve(path: &str) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Whether a MIME type carries an implied UTF-8 charset. Matches node's
/// mime charset rule: all text types plus JSON and JavaScript.
pub fn is_utf8_charset(content_type: &str) -> bool {
    content_type.starts_with("text/")
        || content_type.starts_with("application/json")
        || content_type.starts_with("application/javascript")
}
