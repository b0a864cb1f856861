use axum::http::StatusCode;

use serde_json::Value;

use super::harness::{TestHarness, decode_json, header_value};

#[tokio::test]
async fn api_responses_include_security_headers() {
    let harness = TestHarness::setup();

    for path in ["/api/catalogue", "/api/catalogue/search", "/api/catalogue/stats"] {
        let response = harness.get(path).await;
        let headers = response.headers();
        assert_eq!(
            header_value(headers, "x-content-type-options"),
            Some("nosniff"),
            "{path}"
        );
        assert_eq!(header_value(headers, "x-frame-options"), Some("DENY"));
        assert_eq!(header_value(headers, "referrer-policy"), Some("no-referrer"));
        let csp = header_value(headers, "content-security-policy").expect("csp header");
        assert!(csp.contains("default-src 'none'"));
        assert!(csp.contains("frame-ancestors 'none'"));
    }
}

#[tokio::test]
async fn unknown_routes_are_not_found() {
    let harness = TestHarness::setup();
    let response = harness.get("/catalogue").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn undecodable_path_segments_still_get_the_envelope() {
    let harness = TestHarness::setup();

    for path in [
        "/api/catalogue/categories/%FF",
        "/api/catalogue/thinkers/first-international/%FF",
        "/api/catalogue/thinkers/first-international/Karl%20Marx/subjects/%FF",
    ] {
        let response = harness.get(path).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{path}");
        let body: Value = decode_json(response).await;
        assert_eq!(body["success"], false, "{path}");
        assert!(
            body["error"]
                .as_str()
                .is_some_and(|error| error.starts_with("Invalid request")),
            "{path}: {body}"
        );
    }
}

#[tokio::test]
async fn malformed_query_strings_still_get_the_envelope() {
    let harness = TestHarness::setup();
    let response = harness.get("/api/catalogue/search?q=marx&q=lenin").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = decode_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body.get("data").is_none());
}
