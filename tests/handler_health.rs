mod common;

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::create_test_state();
    common::seed_search(&state, "JFK", "LHR").await;

    let server = common::make_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["storage"]["status"], "ok");
    assert_eq!(
        json["checks"]["storage"]["message"],
        "memory reachable, 1 searches"
    );
    assert_eq!(json["checks"]["catalog"]["message"], "7 providers");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = common::make_server(common::create_test_state());

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("storage").is_some());
    assert!(json["checks"].get("catalog").is_some());
}
