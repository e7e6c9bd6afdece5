//! The reqwest transport against a local one-shot HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use url::Url;

use cpf_lookup::{
    Cpf, HttpClient, LookupConfig, LookupService, LookupSource, RemoteError, RemoteFetcher,
    Transport,
};

/// Accept one connection, capture the request head, reply with `status`/`body`.
async fn serve_once(
    status_line: &'static str,
    body: String,
) -> (SocketAddr, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind TCP listener");
    let addr = listener.local_addr().expect("Failed to get local address");
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept failed");

        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.expect("read failed");
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write failed");
        socket.shutdown().await.ok();

        let _ = tx.send(String::from_utf8_lossy(&head).into_owned());
    });

    (addr, rx)
}

fn config_for(addr: SocketAddr) -> LookupConfig {
    LookupConfig::default().with_endpoint(&format!("http://{}/cpf.php", addr))
}

#[tokio::test]
async fn test_request_line_and_headers() {
    let body = r#"{"DADOS":{"nome":"Test Person"}}"#.to_string();
    let (addr, request) = serve_once("200 OK", body).await;
    let config = config_for(addr);
    let transport: Arc<dyn Transport> = Arc::new(HttpClient::new().unwrap());
    let fetcher = RemoteFetcher::new(&config, transport).unwrap();

    let payload = fetcher.fetch(&Cpf::normalize("123.456.789-00")).await.unwrap();
    assert_eq!(payload.holder_name(), Some("Test Person"));

    let head = request.await.unwrap();
    let request_line = head.lines().next().unwrap();
    assert_eq!(
        request_line,
        format!("GET /cpf.php?token={}&cpf=12345678900 HTTP/1.1", config.token)
    );

    let headers: Vec<String> = head.lines().skip(1).map(|l| l.to_lowercase()).collect();
    assert!(headers.contains(&"accept: application/json".to_string()), "{head}");
    assert!(headers.contains(&"content-type: application/json".to_string()), "{head}");
    assert!(
        headers.iter().any(|h| h.starts_with("user-agent: cpf-lookup/")),
        "{head}"
    );
}

#[tokio::test]
async fn test_status_and_full_body_are_read() {
    let filler = "x".repeat(64 * 1024);
    let body = format!(r#"{{"DADOS":{{"nome":"Test Person","obs":"{}"}}}}"#, filler);
    let (addr, _request) = serve_once("200 OK", body.clone()).await;

    let url = Url::parse(&format!("http://{}/cpf.php", addr)).unwrap();
    let response = HttpClient::new().unwrap().get_json(&url).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.status_text, "OK");
    assert_eq!(response.body.len(), body.len());
    assert_eq!(response.body, body);
}

#[tokio::test]
async fn test_server_error_maps_to_http_status() {
    let (addr, _request) = serve_once("500 Internal Server Error", "{}".to_string()).await;
    let transport: Arc<dyn Transport> = Arc::new(HttpClient::new().unwrap());
    let fetcher = RemoteFetcher::new(&config_for(addr), transport).unwrap();

    let err = fetcher.fetch(&Cpf::normalize("12345678900")).await.unwrap_err();
    match err {
        RemoteError::HttpStatus {
            status,
            status_text,
        } => {
            assert_eq!(status, 500);
            assert_eq!(status_text, "Internal Server Error");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_service_over_http() {
    let body = r#"{"DADOS":{"nome":"Test Person"}}"#.to_string();
    let (addr, _request) = serve_once("200 OK", body).await;
    let service = LookupService::from_config(&config_for(addr)).unwrap();
    let outcome = service.lookup("123.456.789-00").await;
    assert_eq!(outcome.source(), LookupSource::Remote);

    let (addr, _request) = serve_once("503 Service Unavailable", String::new()).await;
    let service = LookupService::from_config(&config_for(addr)).unwrap();
    let outcome = service.lookup("123.456.789-00").await;
    assert_eq!(outcome.source(), LookupSource::Fallback);
    assert_eq!(outcome.into_value()["DADOS"]["cpf"], "12345678900");
}
