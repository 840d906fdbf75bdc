//! Minimal HTTP/1.1 framing: one request in, one response out, then close.

use crate::RequestError;
use http::header::{CONNECTION, CONTENT_LENGTH, EXPECT, TRANSFER_ENCODING};
use http::{Request, Response, Version};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Upper bound on request line plus headers.
pub const MAX_HEAD_BYTES: usize = 64 * 1024;

const READ_CHUNK: usize = 8 * 1024;

const CONTINUE: &[u8] = b"HTTP/1.1 100 Continue\r\n\r\n";

fn find_head_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

/// Parse a request line and header block (without the terminating blank line).
pub fn parse_head(head: &[u8]) -> Result<Request<()>, RequestError> {
    let head = std::str::from_utf8(head)
        .map_err(|_| RequestError::Malformed("request head is not valid UTF-8".into()))?;
    let mut lines = head.split("\r\n");

    let request_line = lines.next().unwrap_or_default();
    let mut parts = request_line.split(' ');
    let (method, target, version) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(method), Some(target), Some(version), None)
            if !method.is_empty() && !target.is_empty() =>
        {
            (method, target, version)
        }
        _ => {
            return Err(RequestError::Malformed(format!(
                "bad request line: {request_line:?}"
            )));
        }
    };
    let version = match version {
        "HTTP/1.1" => Version::HTTP_11,
        "HTTP/1.0" => Version::HTTP_10,
        other => {
            return Err(RequestError::Malformed(format!("unsupported version: {other}")));
        }
    };

    let mut builder = Request::builder().method(method).uri(target).version(version);
    for line in lines {
        if line.starts_with(' ') || line.starts_with('\t') {
            return Err(RequestError::Malformed("folded header line".into()));
        }
        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| RequestError::Malformed(format!("bad header line: {line:?}")))?;
        builder = builder.header(name, value.trim());
    }

    builder
        .body(())
        .map_err(|e| RequestError::Malformed(e.to_string()))
}

/// Declared body length, zero when absent.
fn content_length(request: &Request<()>) -> Result<usize, RequestError> {
    if request.headers().contains_key(TRANSFER_ENCODING) {
        return Err(RequestError::Malformed(
            "transfer-encoding is not supported".into(),
        ));
    }
    let mut values = request.headers().get_all(CONTENT_LENGTH).iter();
    let Some(value) = values.next() else {
        return Ok(0);
    };
    if values.next().is_some() {
        return Err(RequestError::Malformed("repeated content-length".into()));
    }
    value
        .to_str()
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .ok_or_else(|| RequestError::Malformed("invalid content-length".into()))
}

/// HTTP/1.1 client holding its body back until the server agrees to take it.
fn expects_continue(request: &Request<()>) -> bool {
    request.version() == Version::HTTP_11
        && request
            .headers()
            .get(EXPECT)
            .is_some_and(|v| v.as_bytes().eq_ignore_ascii_case(b"100-continue"))
}

/// Read one request from `stream`.
///
/// Bodies are only delimited by `Content-Length`. A declared length above
/// `max_body_bytes` is refused before any of the body is read. A client that
/// sent `Expect: 100-continue` is told to go ahead once its length is accepted.
pub async fn read_request<S: AsyncRead + AsyncWrite + Unpin>(
    stream: &mut S,
    max_body_bytes: usize,
) -> Result<Request<Vec<u8>>, crate::ServerError> {
    let mut buf = Vec::with_capacity(READ_CHUNK);
    let head_end = loop {
        if let Some(end) = find_head_end(&buf) {
            break end;
        }
        if buf.len() > MAX_HEAD_BYTES {
            return Err(RequestError::HeadTooLarge.into());
        }
        let mut chunk = [0u8; READ_CHUNK];
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Err(if buf.is_empty() {
                RequestError::Closed
            } else {
                RequestError::Malformed("connection closed inside request head".into())
            }
            .into());
        }
        buf.extend_from_slice(&chunk[..n]);
    };
    if head_end > MAX_HEAD_BYTES {
        return Err(RequestError::HeadTooLarge.into());
    }

    let head = parse_head(&buf[..head_end])?;
    let length = content_length(&head)?;
    if length > max_body_bytes {
        return Err(RequestError::BodyTooLarge {
            limit: max_body_bytes,
            got: length,
        }
        .into());
    }

    let mut body = buf.split_off(head_end + 4);
    body.truncate(length);
    if body.len() < length {
        let already = body.len();
        if already == 0 && expects_continue(&head) {
            stream.write_all(CONTINUE).await?;
            stream.flush().await?;
        }
        body.resize(length, 0);
        match stream.read_exact(&mut body[already..]).await {
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                return Err(RequestError::Malformed("connection closed inside body".into()).into());
            }
            Err(e) => return Err(e.into()),
        }
    }

    let (parts, ()) = head.into_parts();
    Ok(Request::from_parts(parts, body))
}

/// Serialize a response as HTTP/1.1 with `Content-Length` and `Connection: close`.
pub fn encode_response(response: &Response<Vec<u8>>) -> Vec<u8> {
    let status = response.status();
    let mut out = format!(
        "HTTP/1.1 {} {}\r\n",
        status.as_u16(),
        status.canonical_reason().unwrap_or("")
    )
    .into_bytes();

    for (name, value) in response.headers() {
        if name == CONTENT_LENGTH || name == CONNECTION {
            continue;
        }
        out.extend_from_slice(name.as_str().as_bytes());
        out.extend_from_slice(b": ");
        out.extend_from_slice(value.as_bytes());
        out.extend_from_slice(b"\r\n");
    }
    out.extend_from_slice(format!("content-length: {}\r\n", response.body().len()).as_bytes());
    out.extend_from_slice(b"connection: close\r\n\r\n");
    out.extend_from_slice(response.body());
    out
}

pub async fn write_response<W: AsyncWrite + Unpin>(
    writer: &mut W,
    response: &Response<Vec<u8>>,
) -> std::io::Result<()> {
    writer.write_all(&encode_response(response)).await?;
    writer.flush().await
}
