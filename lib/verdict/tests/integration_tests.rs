//! Integration tests for `ApiClient` using wiremock.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use assert2::{check, let_assert};
use serde::Deserialize;
use verdict::{ApiClient, ClientConfig, DEFAULT_USER_AGENT, Error, HyperClient};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, headers, method, path, query_param},
};

type Logged = Arc<Mutex<Vec<(&'static str, Option<u16>)>>>;

fn client_for(server: &MockServer) -> (ApiClient, Logged) {
    let logged: Logged = Arc::default();
    let sink = Arc::clone(&logged);
    let client = ApiClient::new(HyperClient::new(), server.uri())
        .expect("valid url")
        .with_logger(move |error: &Error| {
            sink.lock()
                .expect("lock")
                .push((error.code(), error.status()));
        });
    (client, logged)
}

fn logged_codes(logged: &Logged) -> Vec<(&'static str, Option<u16>)> {
    logged.lock().expect("lock").clone()
}

#[tokio::test]
async fn test_success_with_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/reference-data/airlines"))
        .and(query_param("airlineCodes", "IB"))
        .and(headers(
            "Accept",
            vec!["application/json", "application/vnd.amadeus+json"],
        ))
        .and(header("User-Agent", DEFAULT_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "meta": { "count": 1 },
            "data": [{ "iataCode": "IB", "businessName": "IBERIA" }]
        })))
        .mount(&mock_server)
        .await;

    let (client, logged) = client_for(&mock_server);
    let response = client
        .get("/v1/reference-data/airlines", &[("airlineCodes", "IB")])
        .await
        .expect("success");

    check!(response.status_code() == 200);
    check!(response.is_parsed());
    check!(response.data().map(<[_]>::len) == Some(1));
    check!(response.result().is_some_and(|r| r.contains_key("meta")));
    check!(logged_codes(&logged).is_empty());
}

#[tokio::test]
async fn test_typed_data() {
    #[derive(Debug, PartialEq, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Airline {
        iata_code: String,
    }

    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/reference-data/airlines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{ "iataCode": "IB" }, { "iataCode": "AF" }]
        })))
        .mount(&mock_server)
        .await;

    let (client, _) = client_for(&mock_server);
    let response = client
        .get("/v1/reference-data/airlines", &[])
        .await
        .expect("success");

    let_assert!(Some(Ok(airlines)) = response.data_as::<Airline>());
    let codes: Vec<_> = airlines.iter().map(|a| a.iata_code.as_str()).collect();
    check!(codes == ["IB", "AF"]);
}

#[tokio::test]
async fn test_vendor_media_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/shopping/flight-offers"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"data":[{"id":"1"}]}"#, "application/vnd.amadeus+json"),
        )
        .mount(&mock_server)
        .await;

    let (client, _) = client_for(&mock_server);
    let response = client
        .get("/v2/shopping/flight-offers", &[])
        .await
        .expect("success");

    check!(response.is_parsed());
    check!(response.data() == Some(&[serde_json::json!({"id": "1"})][..]));
}

#[tokio::test]
async fn test_multiline_body_is_joined() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pretty"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("{\n  \"data\": []\n}\n", "application/json"),
        )
        .mount(&mock_server)
        .await;

    let (client, _) = client_for(&mock_server);
    let response = client.get("/pretty", &[]).await.expect("success");

    check!(response.body() == Some("{  \"data\": []}"));
    check!(response.data() == Some(&[][..]));
}

#[tokio::test]
async fn test_not_found_keeps_parsed_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({ "data": [] })))
        .mount(&mock_server)
        .await;

    let (client, logged) = client_for(&mock_server);
    let result = client.get("/v1/missing", &[]).await;

    let_assert!(Err(Error::NotFound(failure)) = result);
    check!(failure.status() == 404);
    check!(failure.result().is_some());
    check!(failure.body() == Some(r#"{"data":[]}"#));
    check!(logged_codes(&logged) == [("NotFoundError", Some(404))]);
}

#[tokio::test]
async fn test_authentication_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/secure"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": "invalid_client",
            "error_description": "Client credentials are invalid"
        })))
        .mount(&mock_server)
        .await;

    let (client, logged) = client_for(&mock_server);
    let result = client.get("/v1/secure", &[]).await;

    let_assert!(Err(err) = result);
    check!(matches!(err, Error::Authentication(_)));
    insta::assert_snapshot!(
        err.to_string(),
        @"authentication failed [401] Client credentials are invalid"
    );
    check!(logged_codes(&logged) == [("AuthenticationError", Some(401))]);
}

#[tokio::test]
async fn test_forbidden_is_client_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/booking/flight-orders"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "errors": [{
                "status": 403,
                "title": "Forbidden",
                "source": { "parameter": "travelers" }
            }]
        })))
        .mount(&mock_server)
        .await;

    let (client, _) = client_for(&mock_server);
    let result = client
        .post("/v1/booking/flight-orders", r#"{"data":{}}"#)
        .await;

    let_assert!(Err(Error::Client(failure)) = result);
    check!(failure.description().as_deref() == Some("[travelers] Forbidden"));
}

#[tokio::test]
async fn test_server_error_with_text_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/unstable"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let (client, logged) = client_for(&mock_server);
    let result = client.get("/v1/unstable", &[]).await;

    let_assert!(Err(err) = result);
    check!(err.is_server_error());
    check!(err.body() == Some("Service Unavailable"));
    check!(err.result().is_none());
    check!(logged_codes(&logged) == [("ServerError", Some(503))]);
}

#[tokio::test]
async fn test_server_error_with_latin1_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/legacy"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_raw(&b"Erreur interne\r\ncaf\xe9"[..], "text/html; charset=iso-8859-1"),
        )
        .mount(&mock_server)
        .await;

    let (client, logged) = client_for(&mock_server);
    let result = client.get("/v1/legacy", &[]).await;

    let_assert!(Err(Error::Server(failure)) = result);
    check!(failure.body() == Some("Erreur internecaf\u{fffd}"));
    check!(logged_codes(&logged) == [("ServerError", Some(500))]);
}

#[tokio::test]
async fn test_plain_text_success_is_parse_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/text"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":[]}"#))
        .mount(&mock_server)
        .await;

    let (client, logged) = client_for(&mock_server);
    let result = client.get("/v1/text", &[]).await;

    let_assert!(Err(Error::Parse(failure)) = result);
    check!(failure.status() == 200);
    check!(failure.body() == Some(r#"{"data":[]}"#));
    check!(logged_codes(&logged) == [("ParserError", Some(200))]);
}

#[tokio::test]
async fn test_charset_parameter_is_parse_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/charset"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"data":[]}"#, "application/json; charset=utf-8"),
        )
        .mount(&mock_server)
        .await;

    let (client, _) = client_for(&mock_server);
    let result = client.get("/v1/charset", &[]).await;

    // Exact media type matching rejects the parameterized header
    let_assert!(Err(Error::Parse(_)) = result);
}

#[tokio::test]
async fn test_empty_success_is_parse_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/orders/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let (client, _) = client_for(&mock_server);
    let result = client.delete("/v1/orders/1").await;

    let_assert!(Err(Error::Parse(failure)) = result);
    check!(failure.status() == 204);
    check!(failure.body() == Some(""));
}

#[tokio::test]
async fn test_malformed_json_is_not_classified() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/broken"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"data": ["#, "application/json"))
        .mount(&mock_server)
        .await;

    let (client, logged) = client_for(&mock_server);
    let result = client.get("/v1/broken", &[]).await;

    let_assert!(Err(Error::JsonDeserialization { .. }) = result);
    check!(logged_codes(&logged).is_empty());
}

#[tokio::test]
async fn test_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "data": [] }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder()
        .timeout(Duration::from_millis(100))
        .build();
    let client = ApiClient::from_config(mock_server.uri(), config).expect("client");

    let result = client.get("/v1/slow", &[]).await;

    let_assert!(Err(err) = result);
    check!(err.is_timeout());
    check!(err.status().is_none());
}

#[tokio::test]
async fn test_connection_refused() {
    // Reserve a free port, then release it so nothing is listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let address = listener.local_addr().expect("address");
    drop(listener);

    let client = ApiClient::new(HyperClient::new(), format!("http://{address}")).expect("client");
    let result = client.get("/v1/anything", &[]).await;

    let_assert!(Err(err) = result);
    check!(err.is_connection());
    check!(err.code() == "NetworkError");
}
