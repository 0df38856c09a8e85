// consensus-client/src/transport/oneshot.rs
// Oneshot 传输 - 内存通信
//
// 需要启用 "in-process" feature

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Request};
use tower::ServiceExt;

use super::{PreparedBody, PreparedRequest, RawResponse, Transport};
use crate::error::TransportError;

/// Oneshot transport (内存调用)
///
/// 使用 Tower Service 的 oneshot 模式直接调用 Router，
/// 适用于同进程的服务器-客户端通信，零网络开销。
///
/// 丢弃 URL 的 scheme 和 authority，Router 只看到 path 与 query。
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use consensus_client::{ConsensusClient, OneshotTransport};
///
/// let router: Router = build_app().with_state(state);
/// let client = ConsensusClient::builder()
///     .transport(OneshotTransport::new(router))
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotTransport {
    router: Router,
}

impl OneshotTransport {
    /// 创建新的 Oneshot 传输
    ///
    /// # Arguments
    /// * `router` - 已初始化的 Axum Router (with_state 已调用)
    pub fn new(router: Router) -> Self {
        Self { router }
    }
}

fn path_and_query(url: &str) -> &str {
    match url.find("://") {
        Some(scheme_end) => {
            let rest = &url[scheme_end + 3..];
            rest.find('/').map_or("/", |i| &rest[i..])
        }
        None => url,
    }
}

#[async_trait]
impl Transport for OneshotTransport {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, TransportError> {
        let mut builder = Request::builder()
            .method(request.method)
            .uri(path_and_query(&request.url));

        if let Some(headers) = builder.headers_mut() {
            headers.extend(request.headers);
        }

        let body = match request.body {
            PreparedBody::Empty => Body::empty(),
            PreparedBody::Bytes(bytes) => Body::from(bytes),
            PreparedBody::Multipart(form) => {
                let boundary = format!("consensus-{}", uuid::Uuid::new_v4().simple());
                let content_type =
                    HeaderValue::from_str(&format!("multipart/form-data; boundary={boundary}"))
                        .map_err(|e| TransportError::InProcess(e.to_string()))?;
                if let Some(headers) = builder.headers_mut() {
                    headers.insert(CONTENT_TYPE, content_type);
                }
                Body::from(form.encode(&boundary))
            }
        };

        let request = builder
            .body(body)
            .map_err(|e| TransportError::InProcess(format!("Failed to build request: {e}")))?;

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| TransportError::InProcess(format!("Oneshot call failed: {e}")))?;

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| TransportError::InProcess(format!("Failed to read body: {e}")))?;

        Ok(RawResponse::new(status, body.to_vec()))
    }
}
