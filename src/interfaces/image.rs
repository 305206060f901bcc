//! Image upload and download against the uploads directory.

use crate::http::mime;
use crate::http::response::{Response, StatusCode};
use crate::interfaces::{Outcome, Params, parse_query, plain_file_name};
use crate::site::Site;

/// `POST /upload?file-name=NAME` stores the request body as `NAME`.
pub fn upload(params: Params, site: &Site) -> Outcome {
    let Params::WithBody { query, body } = params else {
        return Outcome::Unsupported;
    };

    let Some(name) = requested_name(&query, "file-name") else {
        return Outcome::Response(Response::bad_request());
    };
    if body.is_empty() {
        return Outcome::Response(Response::bad_request());
    }

    let path = site.uploads_dir().join(&name);
    match std::fs::write(&path, &body) {
        Ok(()) => {
            tracing::info!(file = %path.display(), bytes = body.len(), "Stored upload");
            Outcome::Response(Response::empty(StatusCode::Ok))
        }
        Err(e) => {
            tracing::error!(file = %path.display(), error = %e, "Failed to store upload");
            Outcome::Response(Response::internal_error())
        }
    }
}

/// `GET /image?image-name=NAME` returns a previously uploaded file.
pub fn image(params: Params, site: &Site) -> Outcome {
    let Params::Query(query) = params else {
        return Outcome::Unsupported;
    };

    let Some(name) = requested_name(&query, "image-name") else {
        return Outcome::Response(Response::bad_request());
    };

    let path = site.uploads_dir().join(&name);
    let response = match std::fs::read(&path) {
        Ok(bytes) if !bytes.is_empty() => {
            Response::file(bytes, mime::content_type_for_path(&name))
        }
        _ => {
            tracing::info!(file = %path.display(), "Requested image not found");
            site.not_found().clone()
        }
    };

    Outcome::Response(response)
}

fn requested_name(query: &str, key: &str) -> Option<String> {
    let mut pairs = parse_query(query)?;
    let name = pairs.remove(key)?;
    plain_file_name(&name)?;
    Some(name)
}
