// consensus-client/src/transport/network.rs
// 网络传输 - reqwest

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use std::time::Duration;

use super::{PreparedBody, PreparedRequest, RawResponse, Transport};
use crate::error::{ClientError, TransportError};
use crate::request::MultipartForm;

/// Network transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct NetworkTransport {
    client: Client,
}

impl NetworkTransport {
    /// Create a transport; `timeout` in seconds, `None` keeps reqwest's default.
    pub fn new(timeout: Option<u64>) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(seconds) = timeout {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build().map_err(TransportError::from)?;
        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

fn to_reqwest_form(form: MultipartForm) -> Result<Form, reqwest::Error> {
    let mut out = Form::new();
    for part in form.into_parts() {
        let mut field = Part::bytes(part.data);
        if let Some(file_name) = part.file_name {
            field = field.file_name(file_name);
        }
        if let Some(content_type) = part.content_type {
            field = field.mime_str(&content_type)?;
        }
        out = out.part(part.name, field);
    }
    Ok(out)
}

#[async_trait]
impl Transport for NetworkTransport {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, TransportError> {
        let mut req = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);

        req = match request.body {
            PreparedBody::Empty => req,
            PreparedBody::Bytes(bytes) => req.body(bytes),
            PreparedBody::Multipart(form) => req.multipart(to_reqwest_form(form)?),
        };

        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        Ok(RawResponse::new(status, body.to_vec()))
    }
}
