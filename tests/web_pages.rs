mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_home_lists_providers_and_searches() {
    let state = common::create_test_state();
    common::seed_search(&state, "JFK", "LHR").await;

    let server = common::make_server(state);

    let response = server.get("/").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("United MileagePlus"));
    assert!(html.contains("Korean Air SKYPASS"));
    assert!(html.contains("JFK → LHR"));
    assert!(html.contains("(1 saved)"));
}

#[tokio::test]
async fn test_home_without_searches() {
    let server = common::make_server(common::create_test_state());

    let html = server.get("/").await.text();

    assert!(html.contains("No searches yet."));
}

#[tokio::test]
async fn test_form_submit_redirects_home() {
    let state = common::create_test_state();
    let server = common::make_server(state.clone());

    let response = server
        .post("/searches")
        .form(&[
            ("origin", "jfk"),
            ("destination", "lhr"),
            ("depart_start", "2025-06-01"),
            ("depart_end", ""),
            ("cabin", "business"),
            ("passengers", "2"),
            ("notes", ""),
        ])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");

    let saved = state.search_service.get_search(1).await.unwrap();
    assert_eq!(saved.origin, "JFK");
    assert_eq!(saved.depart_end, None);
    assert_eq!(saved.notes, None);
    assert_eq!(saved.passengers, 2);
}

#[tokio::test]
async fn test_form_submit_missing_origin() {
    let state = common::create_test_state();
    let server = common::make_server(state.clone());

    let response = server
        .post("/searches")
        .form(&[("origin", "  "), ("destination", "LHR")])
        .await;

    response.assert_status_bad_request();
    assert!(response.text().contains("origin is required"));
    assert_eq!(state.search_service.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_form_submit_negative_passengers() {
    let state = common::create_test_state();
    let server = common::make_server(state.clone());

    let response = server
        .post("/searches")
        .form(&[("origin", "JFK"), ("destination", "LHR"), ("passengers", "-3")])
        .await;

    response.assert_status_bad_request();
    assert!(response.text().contains("passengers must be between 1 and 99"));
    assert_eq!(state.search_service.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_search_page_shows_annotated_links() {
    let state = common::create_test_state();
    let search = state
        .search_service
        .create_search(husky::domain::entities::SearchDraft {
            origin: Some("JFK".into()),
            destination: Some("LHR".into()),
            depart_start: Some("2025-06-01".into()),
            cabin: Some("business".into()),
            passengers: Some(2),
            ..Default::default()
        })
        .await
        .unwrap();

    let server = common::make_server(state);

    let response = server.get(&format!("/searches/{}", search.id)).await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("JFK-LHR 2025-06-01 business x2"));
    assert!(html.contains("#JFK-LHR%202025-06-01%20business%20x2"));
    assert_eq!(html.matches("%20business%20x2").count(), 7);
}

#[tokio::test]
async fn test_search_page_not_found() {
    let server = common::make_server(common::create_test_state());

    let response = server.get("/searches/42").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "Not found");
}

#[tokio::test]
async fn test_form_delete_redirects() {
    let state = common::create_test_state();
    let search = common::seed_search(&state, "JFK", "LHR").await;

    let server = common::make_server(state.clone());

    let response = server
        .post(&format!("/searches/{}/delete", search.id))
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(state.search_service.count().await.unwrap(), 0);

    // Unknown ids redirect too.
    server
        .post("/searches/999/delete")
        .await
        .assert_status(StatusCode::SEE_OTHER);
}
