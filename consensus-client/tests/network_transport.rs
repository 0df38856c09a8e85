// consensus-client/tests/network_transport.rs
// 真实 socket 上的 reqwest 传输测试

mod common;

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, Method, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::post;
use common::{Backend, user_json};
use consensus_client::{
    ClientConfig, ClientError, ConsensusClient, MemoryTokenStore, NetworkTransport, PhotoUpload,
    RecordingNavigator, TokenStore,
};
use tokio::net::TcpListener;

/// What the upload route parsed out of the multipart body
#[derive(Debug, Clone, Default)]
struct UploadSeen {
    authorization: Option<String>,
    content_type: Option<String>,
    field: Option<String>,
    file_name: Option<String>,
    part_type: Option<String>,
    data: Vec<u8>,
}

async fn upload(
    State(seen): State<Arc<Mutex<UploadSeen>>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut record = UploadSeen {
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
        ..Default::default()
    };

    while let Ok(Some(field)) = multipart.next_field().await {
        record.field = field.name().map(str::to_owned);
        record.file_name = field.file_name().map(str::to_owned);
        record.part_type = field.content_type().map(str::to_owned);
        record.data = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
    }
    *seen.lock().unwrap() = record;

    let mut body = user_json();
    body["photo_url"] = "/static/photos/1.jpg".into();
    (StatusCode::OK, axum::Json(body))
}

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn network_client(base_url: &str, tokens: Arc<MemoryTokenStore>) -> ConsensusClient {
    ConsensusClient::builder()
        .config(ClientConfig::new(base_url).with_timeout(10))
        .transport(NetworkTransport::new(Some(10)).unwrap())
        .token_store(tokens)
        .navigator(Arc::new(RecordingNavigator::new()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_upload_photo_over_network() {
    common::init_tracing();
    let seen = Arc::new(Mutex::new(UploadSeen::default()));
    let router = Router::new()
        .route("/users/me/photo", post(upload))
        .with_state(seen.clone());
    let base_url = serve(router).await;

    let tokens = Arc::new(MemoryTokenStore::with_token("net-token"));
    let client = network_client(&base_url, tokens);

    let user = client
        .upload_photo(PhotoUpload::new("me.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF]))
        .await
        .unwrap();
    assert_eq!(user.photo_url.as_deref(), Some("/static/photos/1.jpg"));

    let seen = seen.lock().unwrap().clone();
    assert_eq!(seen.authorization.as_deref(), Some("Bearer net-token"));
    assert!(
        seen.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("multipart/form-data; boundary="))
    );
    assert_eq!(seen.field.as_deref(), Some("file"));
    assert_eq!(seen.file_name.as_deref(), Some("me.jpg"));
    assert_eq!(seen.part_type.as_deref(), Some("image/jpeg"));
    assert_eq!(seen.data, vec![0xFF, 0xD8, 0xFF]);
}

#[tokio::test]
async fn test_bad_part_content_type_over_network() {
    common::init_tracing();
    let backend = Backend::new();
    let base_url = serve(backend.router()).await;
    let client = network_client(&base_url, Arc::new(MemoryTokenStore::with_token("net")));

    let err = client
        .upload_photo(PhotoUpload::new("a.png", "not a mime\r\n", vec![1]))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidRequest(_)));
    assert!(err.status().is_none());
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_login_and_unauthorized_over_network() {
    common::init_tracing();
    let backend = Backend::new();
    backend.respond_json(
        Method::POST,
        "/auth/login",
        200,
        serde_json::json!({"access_token": "wire", "token_type": "bearer"}),
    );
    backend.respond_json(
        Method::GET,
        "/projects",
        401,
        serde_json::json!({"detail": "Signature has expired"}),
    );
    let base_url = serve(backend.router()).await;

    let tokens = Arc::new(MemoryTokenStore::new());
    let client = network_client(&format!("{base_url}/"), tokens.clone());

    client.login("a@b.c", "pw").await.unwrap();
    assert_eq!(tokens.get().as_deref(), Some("wire"));
    let login = backend.last_request();
    assert_eq!(login.path, "/auth/login");
    assert!(login.header(header::AUTHORIZATION).is_none());

    let err = client.projects().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.message(), Some("Signature has expired"));
    assert!(tokens.get().is_none());
    assert_eq!(
        backend.last_request().header(header::AUTHORIZATION),
        Some("Bearer wire")
    );
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let tokens = Arc::new(MemoryTokenStore::with_token("kept"));
    let client = network_client(&format!("http://{addr}"), tokens.clone());

    let err = client.projects().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
    assert!(err.status().is_none());
    assert_eq!(tokens.get().as_deref(), Some("kept"));

    // result() only swallows server answers
    let err = client.result(1).await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}
