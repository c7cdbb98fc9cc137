// src/core/net.rs
// HTTP/1.0 GET over TCP. The server closes the connection at the end, so
// there is no chunked transfer to deal with. No TLS.

use std::{
    io::{Read, Write},
    net::TcpStream,
    time::Duration,
};

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::LoadError;

/// `http://host[:port]/prefix` split into its parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpBase {
    pub host: String,
    pub port: u16,
    /// Always starts and ends with `/`.
    pub prefix: String,
}

impl HttpBase {
    /// `None` unless `base` is a plain `http://` URL.
    pub fn parse(base: &str) -> Option<Self> {
        let rest = base.strip_prefix("http://")?;
        let (authority, path) = match rest.find('/') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, "/"),
        };
        let (host, port) = match authority.rsplit_once(':') {
            Some((h, p)) => (h, p.parse().ok()?),
            None => (authority, 80),
        };
        if host.is_empty() {
            return None;
        }
        let mut prefix = s!(path);
        if !prefix.ends_with('/') {
            prefix.push('/');
        }
        Some(Self { host: s!(host), port, prefix })
    }

    pub fn path_for(&self, page: &str) -> String {
        join!(&self.prefix, page.trim_start_matches('/'))
    }
}

pub fn http_get(host: &str, port: u16, path: &str) -> Result<String, LoadError> {
    let location = format!("http://{host}:{port}{path}");
    let io_err = |source| LoadError::Io { location: location.clone(), source };

    let mut s = TcpStream::connect((host, port)).map_err(io_err)?;
    s.set_read_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS))).map_err(io_err)?;
    s.set_write_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS))).map_err(io_err)?;

    let req = format!(
        "GET {path} HTTP/1.0\r\nHost: {host}\r\nUser-Agent: {USER_AGENT}\r\nConnection: close\r\n\r\n"
    );
    s.write_all(req.as_bytes()).map_err(io_err)?;
    s.flush().map_err(io_err)?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf).map_err(io_err)?;
    let resp = String::from_utf8_lossy(&buf);

    split_response(&resp, &location)
}

/// Status check + body split for a raw HTTP/1.x response.
pub fn split_response(resp: &str, location: &str) -> Result<String, LoadError> {
    let status = resp.split("\r\n").next().unwrap_or("");
    let code = status.split_whitespace().nth(1).unwrap_or("");
    if code != "200" {
        return Err(LoadError::Http { location: s!(location), status: s!(status) });
    }
    let body_idx = resp
        .find("\r\n\r\n")
        .ok_or_else(|| LoadError::MalformedResponse { location: s!(location) })?
        + 4;
    Ok(s!(&resp[body_idx..]))
}
