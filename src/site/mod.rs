//! The immutable view of what the server publishes.
//!
//! A [`Site`] is assembled once at startup (see `server::bootstrap`), wrapped
//! in an `Arc` and shared read-only by every connection. It owns the webroot
//! layout, the table of reserved paths answered with fixed responses, and the
//! response sent whenever a file is missing.

pub mod resolver;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::http::response::{Response, StatusCode};

#[derive(Debug, Clone)]
pub struct Site {
    webroot: PathBuf,
    default_document: PathBuf,
    uploads_dir: PathBuf,
    fixed: HashMap<String, Response>,
    not_found: Response,
}

impl Site {
    /// Creates a site with the standard reserved paths and a bare 404.
    pub fn new(
        webroot: impl Into<PathBuf>,
        default_document: impl AsRef<Path>,
        uploads_dir: impl Into<PathBuf>,
    ) -> Self {
        let webroot = webroot.into();
        let default_document = webroot.join(default_document);

        Self {
            webroot,
            default_document,
            uploads_dir: uploads_dir.into(),
            fixed: default_fixed_responses(),
            not_found: Response::not_found(),
        }
    }

    /// Replaces the response sent for missing files.
    pub fn with_not_found(mut self, response: Response) -> Self {
        self.not_found = response;
        self
    }

    pub fn webroot(&self) -> &Path {
        &self.webroot
    }

    pub fn default_document(&self) -> &Path {
        &self.default_document
    }

    pub fn uploads_dir(&self) -> &Path {
        &self.uploads_dir
    }

    pub fn fixed_response(&self, path: &str) -> Option<&Response> {
        self.fixed.get(path)
    }

    pub fn not_found(&self) -> &Response {
        &self.not_found
    }
}

fn default_fixed_responses() -> HashMap<String, Response> {
    HashMap::from([
        ("/forbidden".to_string(), Response::empty(StatusCode::Forbidden)),
        ("/moved".to_string(), Response::moved("/")),
        ("/error".to_string(), Response::empty(StatusCode::InternalServerError)),
        (
            "/legal".to_string(),
            Response::empty(StatusCode::UnavailableForLegalReasons),
        ),
    ])
}
