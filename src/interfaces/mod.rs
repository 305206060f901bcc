//! Named interfaces reachable as `/<name-with-dashes>?<query>`.
//!
//! The set is closed: [`Registry::builtin`] lists every interface the server
//! exposes, and an unknown name is a plain lookup miss. Interfaces build the
//! whole response themselves, status included.

mod calculate;
mod image;

use std::collections::HashMap;

use url::form_urlencoded;

use crate::http::response::Response;
use crate::site::Site;

pub use calculate::{calculate_area, calculate_next};
pub use image::{image, upload};

/// What an interface is called with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Params {
    /// GET: the raw query string.
    Query(String),
    /// POST: the raw query string and the request body.
    WithBody { query: String, body: Vec<u8> },
}

impl Params {
    pub fn query(&self) -> &str {
        match self {
            Params::Query(query) => query,
            Params::WithBody { query, .. } => query,
        }
    }
}

#[derive(Debug)]
pub enum Outcome {
    Response(Response),
    /// The interface exists but does not take this kind of call.
    Unsupported,
}

pub type Handler = fn(Params, &Site) -> Outcome;

#[derive(Default)]
pub struct Registry {
    handlers: HashMap<&'static str, Handler>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every interface the server ships with.
    pub fn builtin() -> Self {
        Self::new()
            .register("calculate_next", calculate_next)
            .register("calculate_area", calculate_area)
            .register("upload", upload)
            .register("image", image)
    }

    pub fn register(mut self, name: &'static str, handler: Handler) -> Self {
        self.handlers.insert(name, handler);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Calls `name`, or returns `None` if no such interface is registered.
    pub fn invoke(&self, name: &str, params: Params, site: &Site) -> Option<Outcome> {
        self.handlers.get(name).map(|handler| handler(params, site))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }
}

/// Decodes `a=1&b=2` into a map.
///
/// Every `&`-separated pair has to contain `=`, otherwise the whole query is
/// rejected. Repeated keys keep the last value.
pub fn parse_query(query: &str) -> Option<HashMap<String, String>> {
    if query.split('&').any(|pair| !pair.contains('=')) {
        return None;
    }
    Some(form_urlencoded::parse(query.as_bytes()).into_owned().collect())
}

/// Accepts `name` only if it is a bare file name.
pub(crate) fn plain_file_name(name: &str) -> Option<&str> {
    let valid = !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0']);
    valid.then_some(name)
}
