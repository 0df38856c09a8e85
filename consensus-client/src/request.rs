//! Request descriptors
//!
//! One [`RequestDescriptor`] describes one outgoing call: method, path and a
//! body tagged with how it must be serialized.

use http::Method;
use serde::Serialize;

use crate::error::{ClientError, ClientResult};

/// Body serialization tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Json,
    FormUrlEncoded,
    Multipart,
}

impl ContentKind {
    /// `Content-Type` the dispatcher sets explicitly.
    ///
    /// Multipart has none: the boundary is generated by the transport.
    pub fn header_value(self) -> Option<&'static str> {
        match self {
            Self::Json => Some("application/json"),
            Self::FormUrlEncoded => Some("application/x-www-form-urlencoded"),
            Self::Multipart => None,
        }
    }
}

/// One part of a multipart body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// Transport-agnostic multipart form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    parts: Vec<Part>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plain text field
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(Part {
            name: name.into(),
            file_name: None,
            content_type: None,
            data: value.into().into_bytes(),
        });
        self
    }

    /// Add a file field.
    ///
    /// `content_type` must parse as a media type; it is stored normalized.
    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: &str,
        data: Vec<u8>,
    ) -> ClientResult<Self> {
        let mime: mime_guess::Mime = content_type.parse().map_err(|_| {
            ClientError::InvalidRequest(format!("invalid part content type: {content_type:?}"))
        })?;
        self.parts.push(Part {
            name: name.into(),
            file_name: Some(file_name.into()),
            content_type: Some(mime.to_string()),
            data,
        });
        Ok(self)
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<Part> {
        self.parts
    }

    /// Render as `multipart/form-data` with the given boundary
    pub fn encode(&self, boundary: &str) -> Vec<u8> {
        let mut out = Vec::new();
        for part in &self.parts {
            out.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
            let mut disposition = format!(
                "Content-Disposition: form-data; name=\"{}\"",
                escape_quoted(&part.name)
            );
            if let Some(file_name) = &part.file_name {
                disposition.push_str(&format!("; filename=\"{}\"", escape_quoted(file_name)));
            }
            out.extend_from_slice(disposition.as_bytes());
            out.extend_from_slice(b"\r\n");
            if let Some(content_type) = &part.content_type {
                out.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
            }
            out.extend_from_slice(b"\r\n");
            out.extend_from_slice(&part.data);
            out.extend_from_slice(b"\r\n");
        }
        out.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
        out
    }
}

fn escape_quoted(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Request body, tagged by serialization kind
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(serde_json::Value),
    /// Already percent-encoded `key=value&...`
    Form(String),
    Multipart(MultipartForm),
}

impl RequestBody {
    pub fn content_kind(&self) -> Option<ContentKind> {
        match self {
            Self::Empty => None,
            Self::Json(_) => Some(ContentKind::Json),
            Self::Form(_) => Some(ContentKind::FormUrlEncoded),
            Self::Multipart(_) => Some(ContentKind::Multipart),
        }
    }
}

/// Description of one outgoing request
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub body: RequestBody,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> ClientResult<Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Attach a form-urlencoded body
    pub fn form<B: Serialize + ?Sized>(mut self, body: &B) -> ClientResult<Self> {
        self.body = RequestBody::Form(serde_urlencoded::to_string(body)?);
        Ok(self)
    }

    /// Attach a multipart body
    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    pub fn content_kind(&self) -> Option<ContentKind> {
        self.body.content_kind()
    }
}
