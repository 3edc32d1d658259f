//! End-to-end calls against an in-process stub of the admin backend.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use rentals_admin::{
    ApiCache, ApiClient, ClientError, Config, ErrorKind, Session,
    common::ListParams,
    routes::{
        property_request::{PropertyRequestFilter, PropertyRequestStats},
        user::UserListParams,
    },
};
use serde_json::{Value, json};

#[derive(Debug, Clone)]
struct Hit {
    method: String,
    path: String,
    query: String,
    authorization: Option<String>,
    content_type: Option<String>,
    body: String,
}

#[derive(Clone)]
struct Backend {
    hits: Arc<Mutex<Vec<Hit>>>,
    listings: Arc<Mutex<Vec<Value>>>,
}

impl Backend {
    fn new() -> Self {
        Self {
            hits: Arc::new(Mutex::new(Vec::new())),
            listings: Arc::new(Mutex::new(vec![
                json!({"listing_id": 11, "title": "2-bed flat, Lekki", "status": "pending"}),
                json!({"listing_id": 12, "title": "Studio, Yaba", "status": "approved"}),
            ])),
        }
    }

    fn hits_for(&self, method: &str, path: &str) -> Vec<Hit> {
        self.hits
            .lock()
            .unwrap()
            .iter()
            .filter(|h| h.method == method && h.path == path)
            .cloned()
            .collect()
    }
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn handle(
    State(backend): State<Backend>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let path = uri.path().to_string();
    backend.hits.lock().unwrap().push(Hit {
        method: method.to_string(),
        path: path.clone(),
        query: uri.query().unwrap_or_default().to_string(),
        authorization: header_value(&headers, header::AUTHORIZATION),
        content_type: header_value(&headers, header::CONTENT_TYPE),
        body: body.clone(),
    });

    match (method.as_str(), path.as_str()) {
        ("POST", "/users/loginfunc") => {
            let body: Value = serde_json::from_str(&body).unwrap_or_default();
            let reply = match body["username"].as_str() {
                Some("admin@rentals.test") => json!({
                    "status": true,
                    "data": {
                        "access_token": "tok-admin",
                        "user_data": {"name": "Ada", "roles": [{"role_name": "Admin"}]}
                    }
                }),
                Some("landlord@rentals.test") => json!({
                    "status": true,
                    "data": {
                        "access_token": "tok-landlord",
                        "user_data": {"name": "Lola", "roles": ["Landlord"]}
                    }
                }),
                _ => json!({"status": false, "message": "Invalid username or password"}),
            };
            Json(reply).into_response()
        }
        ("GET", "/usermanagement/list") => Json(json!({
            "status": true,
            "data": {
                "users": [{"user_id": 1, "name": "Ada", "roles": ["Admin"], "status": true}],
                "pagination": {"page": 1, "limit": 20, "total": 1, "total_pages": 1}
            }
        }))
        .into_response(),
        ("GET", "/listingmanagement/list") => {
            let listings = backend.listings.lock().unwrap().clone();
            Json(json!({"status": true, "data": {"listings": listings}})).into_response()
        }
        ("POST", "/listingmanagement/approve") => {
            let body: Value = serde_json::from_str(&body).unwrap_or_default();
            let id = body["listing_id"].as_str().unwrap_or_default().to_string();
            let mut listings = backend.listings.lock().unwrap();
            match listings.iter_mut().find(|l| l["listing_id"].to_string() == id) {
                Some(listing) => {
                    listing["status"] = json!("approved");
                    Json(json!({"status": true, "message": "Listing approved"})).into_response()
                }
                None => Json(json!({"status": false, "message": "Listing not found"}))
                    .into_response(),
            }
        }
        ("GET", "/kycmanagement/stats") => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"status": false, "message": "database unavailable"})),
        )
            .into_response(),
        ("GET", "/dashboard/stats") => "<html>maintenance</html>".into_response(),
        ("POST", "/companyagents/updateStatus") => {
            Json(json!({"status": false, "message": "Request already processed"})).into_response()
        }
        ("GET", "/propertyrequests/browse") => Json(json!({
            "status": true,
            "data": {"requests": [
                {"request_id": 1, "user_id": "u1", "status": "active", "state": "Lagos"},
                {"request_id": 2, "user_id": "u2", "status": "closed", "state": "Lagos"},
                {"request_id": "3", "user_id": 7, "status": "active", "state": "Lagos"}
            ]}
        }))
        .into_response(),
        ("DELETE", p) if p.starts_with("/settings/") => {
            Json(json!({"status": true, "message": "Setting deleted"})).into_response()
        }
        ("POST", p) if p.starts_with("/subscriptionmanagement/send_reminder/") => {
            Json(json!({"status": true, "message": "Reminder sent"})).into_response()
        }
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"status": false, "message": "Not found"})),
        )
            .into_response(),
    }
}

async fn spawn_backend() -> (Backend, String) {
    let backend = Backend::new();
    let app = Router::new().fallback(handle).with_state(backend.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (backend, format!("http://{}", addr))
}

fn client_for(base_url: &str, cache: ApiCache) -> ApiClient {
    ApiClient::new(
        Config::with_base_url(base_url),
        Arc::new(Session::in_memory()),
        Arc::new(cache),
    )
    .unwrap()
}

async fn signed_in(base_url: &str) -> ApiClient {
    let client = client_for(base_url, ApiCache::new());
    client.login("admin@rentals.test", "secret").await.unwrap();
    client
}

#[tokio::test]
async fn login_keeps_token_and_sends_bearer() {
    let (backend, url) = spawn_backend().await;
    let client = signed_in(&url).await;

    assert_eq!(client.session().access_token().await.as_deref(), Some("tok-admin"));
    assert_eq!(client.current_admin().await.unwrap().name, "Ada");

    let login = &backend.hits_for("POST", "/users/loginfunc")[0];
    let body: Value = serde_json::from_str(&login.body).unwrap();
    assert_eq!(
        body,
        json!({"username": "admin@rentals.test", "password": "secret", "requestID": "rid_2006"})
    );

    let page = client.get_users(&UserListParams::default(), false).await.unwrap();
    assert_eq!(page.users[0].user_id, "1");

    let list = &backend.hits_for("GET", "/usermanagement/list")[0];
    assert_eq!(list.authorization.as_deref(), Some("Bearer tok-admin"));
    assert_eq!(list.content_type.as_deref(), Some("application/json"));
    // GETs carry no correlation id
    assert_eq!(list.query, "");
}

#[tokio::test]
async fn non_admin_login_is_turned_away() {
    let (_backend, url) = spawn_backend().await;
    let client = client_for(&url, ApiCache::new());

    let err = client.login("landlord@rentals.test", "secret").await.unwrap_err();
    assert!(matches!(err, ClientError::AccessDenied));
    assert_eq!(err.to_string(), "Access denied: Admin role required");
    assert_eq!(client.session().access_token().await, None);
    assert!(matches!(
        client.current_admin().await,
        Err(ClientError::Unauthenticated)
    ));
}

#[tokio::test]
async fn bad_credentials_surface_backend_message() {
    let (_backend, url) = spawn_backend().await;
    let client = client_for(&url, ApiCache::new());

    let err = client.login("nobody@rentals.test", "x").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Backend);
    assert_eq!(err.user_message(true), "Invalid username or password");
}

#[tokio::test]
async fn anonymous_requests_have_no_bearer() {
    let (backend, url) = spawn_backend().await;
    let client = client_for(&url, ApiCache::new());

    client.get_users(&UserListParams::default(), false).await.unwrap();
    let hit = &backend.hits_for("GET", "/usermanagement/list")[0];
    assert_eq!(hit.authorization, None);
}

#[tokio::test]
async fn approval_is_visible_on_the_next_list_read() {
    let (backend, url) = spawn_backend().await;
    let client = signed_in(&url).await;
    let params = ListParams::default();

    let before = client.get_listings(&params, false).await.unwrap();
    assert_eq!(before.listings[0].status, "pending");
    // served from cache
    client.get_listings(&params, false).await.unwrap();
    assert_eq!(backend.hits_for("GET", "/listingmanagement/list").len(), 1);

    let ack = client.approve_listing("11").await.unwrap();
    assert_eq!(ack.message.as_deref(), Some("Listing approved"));
    let approve = &backend.hits_for("POST", "/listingmanagement/approve")[0];
    let body: Value = serde_json::from_str(&approve.body).unwrap();
    assert_eq!(body, json!({"listing_id": "11", "requestID": "rid_2006"}));

    let after = client.get_listings(&params, false).await.unwrap();
    assert_eq!(after.listings[0].status, "approved");
    assert_eq!(backend.hits_for("GET", "/listingmanagement/list").len(), 2);
}

#[tokio::test]
async fn delete_carries_request_id_in_query() {
    let (backend, url) = spawn_backend().await;
    let client = signed_in(&url).await;

    client.delete_setting("site_name").await.unwrap();
    let hit = &backend.hits_for("DELETE", "/settings/site_name")[0];
    assert_eq!(hit.query, "requestID=rid_2006");
}

#[tokio::test]
async fn multipart_posts_skip_json_content_type() {
    let (backend, url) = spawn_backend().await;
    let client = signed_in(&url).await;

    let ack = client.send_subscription_reminder("sub_9").await.unwrap();
    assert_eq!(ack.message.as_deref(), Some("Reminder sent"));

    let hit = &backend.hits_for("POST", "/subscriptionmanagement/send_reminder/sub_9")[0];
    let content_type = hit.content_type.as_deref().unwrap();
    assert!(content_type.starts_with("multipart/form-data"), "{}", content_type);
    assert!(hit.body.contains("name=\"requestID\""));
    assert!(hit.body.contains("rid_2006"));
}

#[tokio::test]
async fn server_error_keeps_backend_message() {
    let (_backend, url) = spawn_backend().await;
    let client = signed_in(&url).await;

    let err = client.get_kyc_stats(false).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Backend { status: Some(500), ref message } if message == "database unavailable"
    ));
    assert!(client.cache().get("kyc:stats").is_none());
}

#[tokio::test]
async fn html_body_is_a_transport_failure() {
    let (_backend, url) = spawn_backend().await;
    let client = signed_in(&url).await;

    let err = client.get_dashboard_stats(false).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.user_message(false), "Failed to load data. Please retry.");
}

#[tokio::test]
async fn rate_limited_reads_never_reach_the_backend() {
    let (backend, url) = spawn_backend().await;
    let cache = ApiCache::with_limits(Duration::from_secs(300), 2, Duration::from_secs(60));
    let client = client_for(&url, cache);
    let params = UserListParams::default();

    client.get_users(&params, true).await.unwrap();
    client.get_users(&params, true).await.unwrap();
    let err = client.get_users(&params, true).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RateLimited);
    assert!(err.to_string().starts_with("Rate limit exceeded. Try again in"));
    assert_eq!(backend.hits_for("GET", "/usermanagement/list").len(), 2);
}

#[tokio::test]
async fn agent_rejection_needs_a_reason() {
    let (backend, url) = spawn_backend().await;
    let client = signed_in(&url).await;

    let err = client.reject_company_agent(4, "   ").await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert!(backend.hits_for("POST", "/companyagents/updateStatus").is_empty());

    let err = client.reject_company_agent(4, "CAC number mismatch").await.unwrap_err();
    assert_eq!(err.to_string(), "Request already processed");
    let hit = &backend.hits_for("POST", "/companyagents/updateStatus")[0];
    let body: Value = serde_json::from_str(&hit.body).unwrap();
    assert_eq!(
        body,
        json!({
            "request_id": 4,
            "status": "rejected",
            "rejection_reason": "CAC number mismatch",
            "requestID": "rid_2006"
        })
    );
}

#[tokio::test]
async fn property_requests_and_counters() {
    let (backend, url) = spawn_backend().await;
    let client = signed_in(&url).await;

    let filter = PropertyRequestFilter {
        status: None,
        state: Some("Lagos".into()),
    };
    let requests = client.browse_property_requests(&filter).await.unwrap();
    let stats = PropertyRequestStats::from_requests(&requests);

    assert_eq!(requests[2].request_id, "3");
    assert_eq!(requests[2].user_id, "7");
    assert_eq!((stats.total, stats.active, stats.closed), (3, 2, 1));
    assert_eq!(backend.hits_for("GET", "/propertyrequests/browse")[0].query, "state=Lagos");
}

#[tokio::test]
async fn logout_forgets_session_and_cache() {
    let (_backend, url) = spawn_backend().await;
    let client = signed_in(&url).await;
    client.get_users(&UserListParams::default(), false).await.unwrap();
    assert!(!client.cache().is_empty());

    client.logout().await.unwrap();
    assert!(client.cache().is_empty());
    assert!(!client.session().is_authenticated().await);
}
