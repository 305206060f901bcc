use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncWrite};

use crate::config::ServerConfig;
use crate::http::parser::{ParseError, parse_request};
use crate::http::reader::StreamReader;
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::http::writer::ResponseWriter;
use crate::interfaces::{Outcome, Params, Registry};
use crate::router::{RouteDecision, route};
use crate::site::{Site, resolver};

/// Per-connection read limits.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub read_timeout: Duration,
    pub max_line_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self::from(&ServerConfig::default())
    }
}

impl From<&ServerConfig> for Limits {
    fn from(cfg: &ServerConfig) -> Self {
        Self {
            read_timeout: cfg.read_timeout(),
            max_line_bytes: cfg.max_line_bytes,
        }
    }
}

/// One request/response exchange on an accepted stream.
///
/// The connection is not reused: after the response is written `run` returns
/// and the caller drops the stream.
pub struct Connection<S> {
    stream: S,
    site: Arc<Site>,
    registry: Arc<Registry>,
    limits: Limits,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, site: Arc<Site>, registry: Arc<Registry>, limits: Limits) -> Self {
        Self {
            stream,
            site,
            registry,
            limits,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await {
                        Ok(req) => ConnectionState::Processing(req),
                        Err(e) => Self::reject(&e),
                    };
                }

                ConnectionState::Processing(req) => {
                    let response = self.handle_request(req).await;
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(mut writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    pub async fn read_request(&mut self) -> Result<Request, ParseError> {
        let mut reader = StreamReader::new(
            &mut self.stream,
            self.limits.read_timeout,
            self.limits.max_line_bytes,
        );
        parse_request(&mut reader).await
    }

    fn reject(err: &ParseError) -> ConnectionState {
        match err.status() {
            Some(status) => {
                tracing::info!(error = %err, status = status.as_u16(), "Rejecting request");
                ConnectionState::Writing(ResponseWriter::new(&Response::empty(status)))
            }
            None => {
                tracing::warn!(error = %err, "Closing connection without a response");
                ConnectionState::Closed
            }
        }
    }

    async fn handle_request(&self, req: Request) -> Response {
        let method = req.method;
        let target = req.target.clone();
        tracing::debug!(host = req.header("Host").unwrap_or("-"), target = %target, "Request received");

        let response = match route(req, &self.site) {
            RouteDecision::Fixed(response) => response,
            RouteDecision::Rejected(status) => Response::empty(status),
            RouteDecision::Static(path) => match resolver::resolve(&path).await {
                Ok(file) => Response::file(file.bytes, file.content_type),
                Err(_) => self.site.not_found().clone(),
            },
            RouteDecision::Dynamic { name, params } => self.dispatch(name, params).await,
        };

        tracing::info!(
            method = %method,
            target = %target,
            status = response.status.as_u16(),
            bytes = response.body.len(),
            "Request handled"
        );
        response
    }

    async fn dispatch(&self, name: String, params: Params) -> Response {
        if !self.registry.has(&name) {
            tracing::warn!(handler = %name, "Unknown interface");
            return Response::bad_request();
        }

        let registry = Arc::clone(&self.registry);
        let site = Arc::clone(&self.site);
        let handler = name.clone();

        // interfaces do blocking file I/O
        let outcome =
            tokio::task::spawn_blocking(move || registry.invoke(&handler, params, &site)).await;

        match outcome {
            Ok(Some(Outcome::Response(response))) => response,
            Ok(Some(Outcome::Unsupported)) => {
                tracing::info!(handler = %name, "Interface does not support this call");
                Response::empty(StatusCode::NotImplemented)
            }
            Ok(None) => Response::bad_request(),
            Err(e) => {
                tracing::error!(handler = %name, error = %e, "Interface failed");
                Response::internal_error()
            }
        }
    }
}
