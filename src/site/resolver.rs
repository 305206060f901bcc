//! Static file lookup.

use std::path::Path;

use crate::http::mime;

/// Contents of a static file, ready to be served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFile {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("resource not found")]
pub struct NotFound;

/// Reads the regular file at `path`.
///
/// Missing paths, directories, unreadable files and empty files all come back
/// as [`NotFound`].
pub async fn resolve(path: &Path) -> Result<StaticFile, NotFound> {
    let meta = tokio::fs::metadata(path).await.map_err(|_| NotFound)?;
    if !meta.is_file() {
        return Err(NotFound);
    }

    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) if !bytes.is_empty() => bytes,
        Ok(_) => return Err(NotFound),
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to read static file");
            return Err(NotFound);
        }
    };

    Ok(StaticFile {
        bytes,
        content_type: mime::content_type_for_path(&path.to_string_lossy()),
    })
}
