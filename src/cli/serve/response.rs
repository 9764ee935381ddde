//! HTTP responses.
//!
//! Handlers build a [`Reply`]; [`send`] turns it into a `tiny_http` response.
//! `HEAD` requests get the status and headers without a body.

use anyhow::{Result, anyhow};
use serde::Serialize;
use tiny_http::{Header, Method, Request, Response, StatusCode};

use crate::utils::mime::{JSON, PLAIN, XML};

#[derive(Debug)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn xml(body: String) -> Self {
        Self::new(200, XML, body.into_bytes())
    }

    pub fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self::new(status, JSON, body),
            Err(e) => Self::error(&e.into()),
        }
    }

    pub fn text(status: u16, text: &str) -> Self {
        Self::new(status, PLAIN, text.as_bytes().to_vec())
    }

    pub fn not_found() -> Self {
        Self::text(404, "404 Not Found")
    }

    /// 500 with the full error chain as text.
    pub fn error(error: &anyhow::Error) -> Self {
        Self::text(500, &format!("{error:#}"))
    }

    /// 503 Service Unavailable (server shutting down).
    pub fn unavailable() -> Self {
        Self::text(503, "503 Service Unavailable")
    }

    pub fn method_not_allowed() -> Self {
        Self::text(405, "405 Method Not Allowed")
    }

    fn new(status: u16, content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            status,
            content_type,
            body,
        }
    }
}

pub fn is_readable_method(method: &Method) -> bool {
    matches!(method, Method::Get | Method::Head)
}

pub fn send(request: Request, reply: Reply) -> Result<()> {
    let mut headers = vec![
        make_header("Content-Type", reply.content_type)?,
        make_header("Cache-Control", "no-store")?,
    ];
    if reply.status == 405 {
        headers.push(make_header("Allow", "GET, HEAD")?);
    }

    let status = StatusCode(reply.status);
    if request.method() == &Method::Head {
        let mut response = Response::empty(status);
        for header in headers {
            response.add_header(header);
        }
        request.respond(response)?;
    } else {
        let mut response = Response::from_data(reply.body).with_status_code(status);
        for header in headers {
            response.add_header(header);
        }
        request.respond(response)?;
    }
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Result<Header> {
    Header::from_bytes(key, value).map_err(|()| anyhow!("invalid header `{key}: {value}`"))
}
