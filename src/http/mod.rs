//! HTTP protocol implementation.
//!
//! A deliberately narrow HTTP/1.1 subset: one request per connection, GET and
//! POST only, bodies framed by `Content-Length`.
//!
//! # Architecture
//!
//! - **`reader`**: Buffered "read through CRLF" / "read exactly n" primitives with an idle timeout
//! - **`parser`**: Parses the request line, headers and body off a reader
//! - **`request`**: HTTP request representation
//! - **`headers`**: Ordered header list, last occurrence wins
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//! - **`connection`**: Drives one request through parse, route, respond
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Parse one request off the stream
//!        └──────┬──────┘
//!               │ Request parsed          (parse error → Writing 400, or Closed on timeout)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route to a fixed response, a static file or an interface
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!            Closed
//! ```

pub mod connection;
pub mod headers;
pub mod mime;
pub mod parser;
pub mod reader;
pub mod request;
pub mod response;
pub mod writer;
