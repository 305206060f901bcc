//! Decides what a parsed request is asking for.
//!
//! A target with a `?` (or any POST) names an interface; everything else is
//! a reserved path or a file under the webroot.

use std::path::PathBuf;

use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};
use crate::interfaces::Params;
use crate::site::Site;

#[derive(Debug)]
pub enum RouteDecision {
    /// Serve the file at this path.
    Static(PathBuf),
    /// Call the named interface.
    Dynamic { name: String, params: Params },
    /// Reserved path, answered without touching the filesystem.
    Fixed(Response),
    Rejected(StatusCode),
}

pub fn route(request: Request, site: &Site) -> RouteDecision {
    let Some(query) = request.query() else {
        return match request.method {
            // POST always has to name an interface
            Method::POST => RouteDecision::Rejected(StatusCode::BadRequest),
            Method::GET => route_static(&request.target, site),
        };
    };

    let name = handler_name(request.path());
    let query = query.to_string();
    let params = match request.method {
        Method::POST => Params::WithBody {
            query,
            body: request.body,
        },
        Method::GET => Params::Query(query),
    };

    RouteDecision::Dynamic { name, params }
}

/// `/calculate-area` becomes `calculate_area`.
pub fn handler_name(path: &str) -> String {
    path.strip_prefix('/').unwrap_or(path).replace('-', "_")
}

fn route_static(target: &str, site: &Site) -> RouteDecision {
    if let Some(response) = site.fixed_response(target) {
        return RouteDecision::Fixed(response.clone());
    }

    if target == "/" {
        return RouteDecision::Static(site.default_document().to_path_buf());
    }

    // keep lookups inside the webroot
    if !target.starts_with('/') || target.split('/').any(|segment| segment == "..") {
        return RouteDecision::Rejected(StatusCode::Forbidden);
    }

    RouteDecision::Static(site.webroot().join(target.trim_start_matches('/')))
}
