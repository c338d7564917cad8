//! End-to-end tests over a real listener: transport wiring, content type,
//! envelope contract as seen by an HTTP client.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use anime_api::config::ApiConfig;
use anime_api::dispatch::{Dispatcher, HandlerRegistry};
use anime_api::error::HandlerError;
use anime_api::handlers::{Handler, HandlerId, Invocation};
use anime_api::http::event::ApiRequest;
use anime_api::http::HttpServer;
use anime_api::routing::RouteTable;

struct StaticHandler {
    payload: Value,
}

#[async_trait]
impl Handler for StaticHandler {
    async fn handle(&self, _: &ApiRequest, _: &Invocation) -> Result<Value, HandlerError> {
        Ok(self.payload.clone())
    }
}

/// Spin up the server on an ephemeral port with stub handlers.
async fn start_server() -> String {
    let mut registry = HandlerRegistry::new();
    registry.register(HandlerId::TopTen, &[], || {
        Ok(Arc::new(StaticHandler {
            payload: json!({ "x": 1 }),
        }) as Arc<dyn Handler>)
    });

    let dispatcher = Arc::new(Dispatcher::new(RouteTable::new(vec![]), registry));
    let server = HttpServer::new(&ApiConfig::default(), dispatcher);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_success_envelope_over_http() {
    let base = start_server().await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client.get(format!("{base}/api/top-ten")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers().get("content-type").unwrap(),
        "application/json"
    );
    assert!(res.headers().contains_key("x-request-id"));

    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "success": true, "results": { "x": 1 } }));
}

#[tokio::test]
async fn test_not_found_over_http() {
    let base = start_server().await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client
        .get(format!("{base}/api/does-not-exist"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "success": false, "error": "Not Found" }));
}

#[tokio::test]
async fn test_post_rejected_with_contract_status() {
    let base = start_server().await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client
        .post(format!("{base}/api/top-ten"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 500);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "success": false, "error": "Only GET supported" })
    );
}

#[tokio::test]
async fn test_query_string_parsed_into_event() {
    let base = start_server().await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    // The stub ignores the query; this asserts parsing does not disturb
    // dispatch for query-driven paths.
    let res = client
        .get(format!("{base}/api/top-ten?page=2&sort=rank"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
}
