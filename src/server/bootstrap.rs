//! Startup work done once before the listener accepts anything.

use anyhow::Context;

use crate::config::Config;
use crate::http::mime;
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::site::Site;

/// Builds the shared [`Site`] from configuration.
///
/// Creates the uploads directory and loads the not-found image. A missing
/// image only downgrades 404s to a bare status line.
pub async fn build_site(cfg: &Config) -> anyhow::Result<Site> {
    let files = &cfg.static_files;

    let uploads = files.uploads_path();
    tokio::fs::create_dir_all(&uploads)
        .await
        .with_context(|| format!("failed to create uploads directory {}", uploads.display()))?;

    let mut site = Site::new(files.webroot_path(), &files.default_document, uploads);

    if let Some(path) = files.not_found_image_path() {
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let content_type = mime::content_type_for_path(&path.to_string_lossy());
                site = site.with_not_found(not_found_page(bytes, content_type));
                tracing::info!(image = %path.display(), "Loaded not-found image");
            }
            Err(e) => {
                tracing::warn!(
                    image = %path.display(),
                    error = %e,
                    "Not-found image unavailable, sending bare 404s"
                );
            }
        }
    }

    Ok(site)
}

fn not_found_page(bytes: Vec<u8>, content_type: &str) -> Response {
    ResponseBuilder::new(StatusCode::NotFound)
        .header("Content-Type", content_type)
        .header("Content-Length", bytes.len().to_string())
        .header("Connection", "close")
        .body(bytes)
        .build()
}
