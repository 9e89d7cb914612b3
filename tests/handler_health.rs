mod common;

use axum_test::TestServer;
use serde_json::Value;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = TestServer::new(common::test_app(common::memory_store())).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["storage"]["status"], "ok");
    assert_eq!(json["checks"]["storage"]["message"], "memory reachable");
}
