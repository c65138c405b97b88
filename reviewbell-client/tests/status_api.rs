use reviewbell_client::{ClientError, StatusClient};
use reviewbell_core::domain::Cursor;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> StatusClient {
    StatusClient::new(format!("{}/api/user_api/homework_statuses/", server.uri()), "secret")
}

#[tokio::test]
async fn fetch_sends_cursor_and_credential() {
    let server = MockServer::start().await;
    let body = json!({
        "homeworks": [{"homework_name": "proj1", "status": "approved"}],
        "current_date": 1000
    });
    Mock::given(method("GET"))
        .and(path("/api/user_api/homework_statuses/"))
        .and(query_param("from_date", "900"))
        .and(header("Authorization", "OAuth secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let payload = client_for(&server)
        .fetch_statuses(Cursor::new(900))
        .await
        .expect("fetch ok");
    assert_eq!(payload, body);
}

#[tokio::test]
async fn fetch_returns_payload_without_validating_it() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["not", "an", "object"])))
        .mount(&server)
        .await;

    let payload = client_for(&server)
        .fetch_statuses(Cursor::new(0))
        .await
        .expect("fetch ok");
    assert!(payload.is_array());
}

#[tokio::test]
async fn fetch_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_statuses(Cursor::new(0))
        .await
        .unwrap_err();
    match err {
        ClientError::EndpointUnavailable { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_fails_on_undecodable_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_statuses(Cursor::new(0))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::MalformedPayload(_)), "{err:?}");
}

#[tokio::test]
async fn fetch_fails_on_connection_refused() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = StatusClient::new(format!("http://{addr}/statuses/"), "secret");
    let err = client.fetch_statuses(Cursor::new(0)).await.unwrap_err();
    assert!(err.is_transport(), "{err:?}");
}
