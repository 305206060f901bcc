//! Request parsing straight off the stream.
//!
//! Request line, then headers up to the blank line, then exactly
//! `Content-Length` body bytes. No step looks ahead or backtracks.

use tokio::io::AsyncRead;

use crate::http::headers::Headers;
use crate::http::reader::{ReadError, StreamReader};
use crate::http::request::{Method, Request};
use crate::http::response::StatusCode;

/// Requests carrying more header lines than this are rejected.
pub const MAX_HEADERS: usize = 100;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("malformed request line")]
    MalformedRequestLine,
    #[error("unsupported method {0:?}")]
    InvalidMethod(String),
    #[error("unsupported protocol {0:?}")]
    InvalidProtocol(String),
    #[error("invalid Content-Length {0:?}")]
    InvalidContentLength(String),
    #[error("too many header lines")]
    TooManyHeaders,
    #[error(transparent)]
    Read(#[from] ReadError),
}

impl ParseError {
    /// Status to answer with, or `None` when the connection should just be closed.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ParseError::Read(ReadError::TimedOut(_)) | ParseError::Read(ReadError::Io(_)) => None,
            ParseError::MalformedRequestLine
            | ParseError::InvalidMethod(_)
            | ParseError::InvalidProtocol(_)
            | ParseError::InvalidContentLength(_)
            | ParseError::TooManyHeaders
            | ParseError::Read(ReadError::Truncated)
            | ParseError::Read(ReadError::LineTooLong { .. }) => Some(StatusCode::BadRequest),
        }
    }
}

/// Parsed request line: method, target, protocol token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: Method,
    pub target: String,
    pub version: String,
}

/// Reads one full request off `reader`.
pub async fn parse_request<R>(reader: &mut StreamReader<R>) -> Result<Request, ParseError>
where
    R: AsyncRead + Unpin,
{
    let line = reader.read_until_crlf().await?;
    let RequestLine {
        method,
        target,
        version,
    } = parse_request_line(&line)?;

    let mut headers = Headers::new();
    let mut count = 0;
    loop {
        let raw = reader.read_until_crlf().await?;
        let line = String::from_utf8_lossy(&raw);
        if line.trim().is_empty() {
            break;
        }

        count += 1;
        if count > MAX_HEADERS {
            return Err(ParseError::TooManyHeaders);
        }

        match parse_header_line(&line) {
            Some((name, value)) => headers.insert(name, value),
            None => tracing::debug!(line = %line.trim_end(), "Ignoring header line without a colon"),
        }
    }

    let length = content_length(&headers)?;
    let body = reader.read_exact(length).await?;

    Ok(Request {
        method,
        target,
        version,
        headers,
        body,
    })
}

/// Validates the request line.
///
/// Exactly three tokens separated by single spaces, a case-sensitive `GET`
/// or `POST`, and a protocol token starting with `http` in any case.
pub fn parse_request_line(raw: &[u8]) -> Result<RequestLine, ParseError> {
    let line = std::str::from_utf8(raw).map_err(|_| ParseError::MalformedRequestLine)?;
    let tokens: Vec<&str> = line.trim().split(' ').collect();

    let [method, target, version] = tokens.as_slice() else {
        return Err(ParseError::MalformedRequestLine);
    };

    let method =
        Method::from_token(method).ok_or_else(|| ParseError::InvalidMethod(method.to_string()))?;

    let is_http = version
        .get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("http"));
    if !is_http {
        return Err(ParseError::InvalidProtocol(version.to_string()));
    }

    Ok(RequestLine {
        method,
        target: target.to_string(),
        version: version.to_string(),
    })
}

/// Splits a header line on its first colon, trimming both halves.
pub fn parse_header_line(line: &str) -> Option<(&str, &str)> {
    line.split_once(':')
        .map(|(name, value)| (name.trim(), value.trim()))
}

/// Declared body length. Absent means zero; negative or non-numeric is an error.
pub fn content_length(headers: &Headers) -> Result<usize, ParseError> {
    match headers.get("Content-Length") {
        None => Ok(0),
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| ParseError::InvalidContentLength(raw.to_string())),
    }
}
