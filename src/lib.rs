//! webroot - a small HTTP/1.1 server
//!
//! Serves static files from a webroot and exposes a fixed set of named
//! interfaces (arithmetic, image upload/download) under
//! `/<interface-name>?<query>`.

pub mod config;
pub mod http;
pub mod interfaces;
pub mod router;
pub mod server;
pub mod site;
