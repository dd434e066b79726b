use std::net::SocketAddr;
use std::time::{Duration, Instant};

use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use ventureflow::api::{ApiClient, ApiError, CatalogApi, ListingApi, ListingSubmission, RequestScope};
use ventureflow_core::WizardState;
use ventureflow_domain::{FieldValue, Package, DEFAULT_GRADIENT};

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

fn client(addr: SocketAddr) -> ApiClient {
    ApiClient::new(format!("http://{addr}"), Duration::from_secs(5)).unwrap()
}

fn submitted_state() -> WizardState {
    let mut state = WizardState {
        selected_category_id: Some("accommodation".into()),
        selected_subcategory_id: Some("hotels".into()),
        selected_package: Some(Package::Premium),
        ..WizardState::default()
    };
    state
        .listing_form_data
        .insert("name".into(), FieldValue::text("Lakeview Inn"));
    state
}

#[tokio::test]
async fn categories_are_mapped_and_backfilled() {
    let app = Router::new().route(
        "/categories",
        post(|| async {
            Json(json!([
                {"id": "accommodation", "name": "Stays", "description": "Places to sleep"},
                {"id": "wellness", "name": "Wellness", "gradient": "from-rose-400 to-pink-600",
                 "subcategories": [{"id": "spas", "title": "Spas", "fields": [
                     {"id": "name", "label": "Spa Name", "type": "text", "required": true}
                 ]}]}
            ]))
        }),
    );
    let addr = serve(app).await;
    let client = client(addr);

    let catalog = CatalogApi::new(&client)
        .fetch_categories(&RequestScope::new())
        .await
        .unwrap();

    let stays = catalog.category("accommodation").unwrap();
    assert_eq!(stays.title, "Stays");
    assert_eq!(stays.gradient, DEFAULT_GRADIENT);
    assert_eq!(stays.subcategory("hotels").unwrap().fields.len(), 9);

    let spa = catalog.subcategory("wellness", "spas").unwrap();
    assert!(spa.fields[0].required);
}

#[tokio::test]
async fn duplicate_categories_are_rejected() {
    let app = Router::new().route(
        "/categories",
        post(|| async {
            Json(json!([
                {"id": "tours", "name": "Tours", "subcategories": []},
                {"id": "tours", "name": "More Tours", "subcategories": []}
            ]))
        }),
    );
    let addr = serve(app).await;

    let err = CatalogApi::new(&client(addr))
        .fetch_categories(&RequestScope::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidCatalog(ref reason) if reason.contains("tours")), "{err}");
}

#[tokio::test]
async fn server_errors_surface_status_and_body() {
    let app = Router::new().route(
        "/categories",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
    );
    let addr = serve(app).await;

    let err = CatalogApi::new(&client(addr))
        .fetch_categories(&RequestScope::new())
        .await
        .unwrap_err();
    match err {
        ApiError::Http { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("expected http error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let app = Router::new().route("/categories", post(|| async { "not json" }));
    let addr = serve(app).await;

    let err = CatalogApi::new(&client(addr))
        .fetch_categories(&RequestScope::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "{err}");
}

#[tokio::test]
async fn submission_posts_listing_and_returns_receipt() {
    let app = Router::new().route(
        "/listings",
        post(|Json(body): Json<Value>| async move {
            let accepted = body["subcategoryId"] == "hotels"
                && body["package"] == "premium"
                && body["listingData"]["name"] == "Lakeview Inn"
                && body["submissionId"].is_string();
            let message = if accepted { "Listing created" } else { "unexpected payload" };
            Json(json!({
                "success": accepted,
                "message": message,
                "listingId": "lst-001"
            }))
        }),
    );
    let addr = serve(app).await;
    let client = client(addr);

    let submission = ListingSubmission::from_state(&submitted_state()).unwrap();
    let receipt = ListingApi::new(&client)
        .submit(&submission, &RequestScope::new())
        .await
        .unwrap();
    assert!(receipt.success);
    assert_eq!(receipt.listing_id.as_deref(), Some("lst-001"));
}

#[tokio::test]
async fn unsuccessful_receipt_is_a_rejection() {
    let app = Router::new().route(
        "/listings",
        post(|| async { Json(json!({"success": false, "message": "Duplicate listing"})) }),
    );
    let addr = serve(app).await;
    let client = client(addr);

    let submission = ListingSubmission::from_state(&submitted_state()).unwrap();
    let err = ListingApi::new(&client)
        .submit(&submission, &RequestScope::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Rejected(ref reason) if reason == "Duplicate listing"));
}

#[tokio::test]
async fn cancelling_scope_aborts_slow_request() {
    let app = Router::new().route(
        "/categories",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Json(json!([]))
        }),
    );
    let addr = serve(app).await;
    let client = client(addr);

    let scope = RequestScope::new();
    let handle = scope.handle();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        handle.cancel();
    });

    let started = Instant::now();
    let err = CatalogApi::new(&client).fetch_categories(&scope).await.unwrap_err();
    assert!(matches!(err, ApiError::Cancelled));
    assert!(started.elapsed() < Duration::from_secs(5));
}
