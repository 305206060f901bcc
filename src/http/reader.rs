//! Buffered reads off a client stream.
//!
//! Callers see two primitives, "read up to and including the next CRLF" and
//! "read exactly n bytes". Internally the stream is read in chunks into a
//! `BytesMut`; anything left over once the request is parsed is dropped with
//! the reader.

use std::time::Duration;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::time::timeout;

const READ_CHUNK: usize = 4096;
const MAX_RESERVE: usize = 64 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("stream ended before the expected data arrived")]
    Truncated,
    #[error("read timed out after {0:?}")]
    TimedOut(Duration),
    #[error("line longer than {limit} bytes")]
    LineTooLong { limit: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub struct StreamReader<R> {
    inner: R,
    buffer: BytesMut,
    read_timeout: Duration,
    max_line_bytes: usize,
}

impl<R> StreamReader<R>
where
    R: AsyncRead + Unpin,
{
    pub fn new(inner: R, read_timeout: Duration, max_line_bytes: usize) -> Self {
        Self {
            inner,
            buffer: BytesMut::with_capacity(READ_CHUNK),
            read_timeout,
            max_line_bytes,
        }
    }

    /// Reads through the next `\r\n`, returning the line including the delimiter.
    pub async fn read_until_crlf(&mut self) -> Result<Vec<u8>, ReadError> {
        let mut scanned: usize = 0;

        loop {
            // step back one byte so a CR at the end of the last chunk still pairs up
            let from = scanned.saturating_sub(1);
            if let Some(pos) = self.buffer[from..].windows(2).position(|w| w == b"\r\n") {
                let end = from + pos + 2;
                if end > self.max_line_bytes {
                    return Err(ReadError::LineTooLong {
                        limit: self.max_line_bytes,
                    });
                }
                return Ok(self.buffer.split_to(end).to_vec());
            }

            scanned = self.buffer.len();
            if scanned >= self.max_line_bytes {
                return Err(ReadError::LineTooLong {
                    limit: self.max_line_bytes,
                });
            }

            self.buffer.reserve(READ_CHUNK);
            self.fill().await?;
        }
    }

    /// Reads exactly `n` bytes. `n == 0` returns immediately without touching the stream.
    pub async fn read_exact(&mut self, n: usize) -> Result<Vec<u8>, ReadError> {
        while self.buffer.len() < n {
            let missing = n - self.buffer.len();
            self.buffer.reserve(missing.min(MAX_RESERVE));
            self.fill().await?;
        }

        Ok(self.buffer.split_to(n).to_vec())
    }

    async fn fill(&mut self) -> Result<(), ReadError> {
        let n = timeout(self.read_timeout, self.inner.read_buf(&mut self.buffer))
            .await
            .map_err(|_| ReadError::TimedOut(self.read_timeout))??;

        if n == 0 {
            return Err(ReadError::Truncated);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncWriteExt;

    const TIMEOUT: Duration = Duration::from_secs(2);

    #[tokio::test]
    async fn reads_lines_then_exact_bytes() {
        let data: &[u8] = b"GET / HTTP/1.1\r\nHost: x\r\n\r\nbody";
        let mut reader = StreamReader::new(data, TIMEOUT, 1024);

        assert_eq!(reader.read_until_crlf().await.unwrap(), b"GET / HTTP/1.1\r\n");
        assert_eq!(reader.read_until_crlf().await.unwrap(), b"Host: x\r\n");
        assert_eq!(reader.read_until_crlf().await.unwrap(), b"\r\n");
        assert_eq!(reader.read_exact(4).await.unwrap(), b"body");
    }

    #[tokio::test]
    async fn crlf_split_across_reads() {
        let (mut client, server) = tokio::io::duplex(64);
        let mut reader = StreamReader::new(server, TIMEOUT, 1024);

        tokio::spawn(async move {
            client.write_all(b"abc\r").await.unwrap();
            tokio::time::sleep(Duration::from_millis(20)).await;
            client.write_all(b"\nrest").await.unwrap();
        });

        assert_eq!(reader.read_until_crlf().await.unwrap(), b"abc\r\n");
    }

    #[tokio::test]
    async fn eof_before_delimiter_is_truncated() {
        let data: &[u8] = b"GET / HTTP/1.1";
        let mut reader = StreamReader::new(data, TIMEOUT, 1024);

        assert!(matches!(reader.read_until_crlf().await, Err(ReadError::Truncated)));
    }

    #[tokio::test]
    async fn short_body_is_truncated() {
        let data: &[u8] = b"hel";
        let mut reader = StreamReader::new(data, TIMEOUT, 1024);

        assert!(matches!(reader.read_exact(5).await, Err(ReadError::Truncated)));
    }

    #[tokio::test]
    async fn zero_length_read_does_not_touch_stream() {
        // the peer never writes; a real read would hit the timeout
        let (_client, server) = tokio::io::duplex(64);
        let mut reader = StreamReader::new(server, Duration::from_millis(10), 1024);

        assert!(reader.read_exact(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn idle_stream_times_out() {
        let (_client, server) = tokio::io::duplex(64);
        let mut reader = StreamReader::new(server, Duration::from_millis(20), 1024);

        assert!(matches!(
            reader.read_until_crlf().await,
            Err(ReadError::TimedOut(_))
        ));
    }

    #[tokio::test]
    async fn overlong_line_is_rejected() {
        let data = vec![b'a'; 100];
        let mut reader = StreamReader::new(data.as_slice(), TIMEOUT, 16);

        assert!(matches!(
            reader.read_until_crlf().await,
            Err(ReadError::LineTooLong { limit: 16 })
        ));
    }
}
