//! Integration test: real `HttpGateway` against an axum mock of the backend
//! on an ephemeral port.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};

use kconnect_client::dashboard::aggregate;
use kconnect_client::{
    ActionOutcome, ClientConfig, ClientError, CookieJar, CredentialStore, Dashboard, Gateway,
    HttpGateway, MemoryStore, Prompt, ReportsView, Session, ViewContext,
};
use kconnect_core::models::{RegisterRequest, Role};

const ADMIN_EMAIL: &str = "root@kconnect.io";
const EMPLOYEE_EMAIL: &str = "ana@kconnect.io";
const PASSWORD: &str = "hunter2";

#[derive(Clone)]
struct Mock {
    calls: Arc<Mutex<Vec<String>>>,
    admin_token: String,
    employee_token: String,
}

enum Caller {
    Admin,
    Employee,
}

fn issue(email: &str, role: &str, name: &str, id: i64) -> String {
    encode(
        &Header::default(),
        &json!({"sub": email, "role": role, "name": name, "id": id, "exp": 4_102_444_800i64}),
        &EncodingKey::from_secret(b"integration-secret"),
    )
    .expect("sign token")
}

impl Mock {
    fn new() -> Self {
        Self {
            calls: Arc::default(),
            admin_token: issue(ADMIN_EMAIL, "ADMIN", "Root", 1),
            employee_token: issue(EMPLOYEE_EMAIL, "EMPLOYEE", "Ana Ruiz", 7),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, method: &Method, uri: &Uri) {
        let path = uri.path().trim_start_matches("/kconnect");
        self.calls.lock().unwrap().push(format!("{method} {path}"));
    }

    fn authorize(&self, headers: &HeaderMap) -> Result<Caller, StatusCode> {
        let bearer = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));
        match bearer {
            Some(t) if t == self.admin_token => Ok(Caller::Admin),
            Some(t) if t == self.employee_token => Ok(Caller::Employee),
            _ => Err(StatusCode::UNAUTHORIZED),
        }
    }

    fn admin_only(&self, headers: &HeaderMap) -> Result<(), StatusCode> {
        match self.authorize(headers)? {
            Caller::Admin => Ok(()),
            Caller::Employee => Err(StatusCode::FORBIDDEN),
        }
    }
}

fn reports() -> Vec<Value> {
    vec![
        json!({"id": 10, "title": "Q1", "description": "solid", "score": 80, "employeeId": 7, "departmentId": 1}),
        json!({"id": 11, "title": "Q2", "description": "great", "score": 100, "employeeId": 7, "departmentId": 1}),
        json!({"id": 12, "title": "Q1", "description": "slow", "score": 55, "employeeId": 8, "departmentId": 2}),
    ]
}

async fn login(
    State(mock): State<Mock>,
    method: Method,
    uri: Uri,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    mock.record(&method, &uri);
    if body["password"] != PASSWORD {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let token = match body["email"].as_str() {
        Some(ADMIN_EMAIL) => &mock.admin_token,
        Some(EMPLOYEE_EMAIL) => &mock.employee_token,
        _ => return Err(StatusCode::UNAUTHORIZED),
    };
    Ok(Json(json!({ "token": token })))
}

async fn register(
    State(mock): State<Mock>,
    method: Method,
    uri: Uri,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    mock.record(&method, &uri);
    match body["email"].as_str() {
        Some(ADMIN_EMAIL | EMPLOYEE_EMAIL) => Err(StatusCode::CONFLICT),
        Some(_) => Ok(Json(json!({ "token": "fresh" }))),
        None => Err(StatusCode::BAD_REQUEST),
    }
}

async fn departments(
    State(mock): State<Mock>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    mock.record(&method, &uri);
    mock.admin_only(&headers)?;
    Ok(Json(json!([
        {"id": 1, "name": "Eng", "description": "Engineering"},
        {"id": 2, "name": "Ops", "description": "Operations"},
    ])))
}

async fn department_stats(
    State(mock): State<Mock>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    mock.record(&method, &uri);
    mock.admin_only(&headers)?;
    Ok(Json(json!([
        {"id": 1, "name": "Eng", "employeeCount": 3},
        {"id": 2, "name": "Ops", "employeeCount": 1},
    ])))
}

async fn reports_by_department(
    State(mock): State<Mock>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Value>, StatusCode> {
    mock.record(&method, &uri);
    mock.admin_only(&headers)?;
    let scoped: Vec<Value> = reports()
        .into_iter()
        .filter(|r| r["departmentId"] == id)
        .collect();
    Ok(Json(Value::Array(scoped)))
}

async fn my_reports(
    State(mock): State<Mock>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    mock.record(&method, &uri);
    let scoped: Vec<Value> = match mock.authorize(&headers)? {
        Caller::Admin => reports(),
        Caller::Employee => reports()
            .into_iter()
            .filter(|r| r["employeeId"] == 7)
            .collect(),
    };
    Ok(Json(Value::Array(scoped)))
}

async fn delete_report(
    State(mock): State<Mock>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    mock.record(&method, &uri);
    mock.admin_only(&headers)?;
    if reports().iter().any(|r| r["id"] == id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

/// Serve the mock and return its base URL.
async fn serve(mock: Mock) -> String {
    let api = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/departments", get(departments))
        .route("/departments/stats", get(department_stats))
        .route("/reports", get(my_reports))
        .route("/reports/{id}", delete(delete_report))
        .route("/reports/department/{id}", get(reports_by_department));
    let app = Router::new().nest("/kconnect", api).with_state(mock);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock backend");
    });
    format!("http://{addr}/kconnect")
}

async fn setup() -> (Mock, HttpGateway) {
    let mock = Mock::new();
    let base_url = serve(mock.clone()).await;
    let config = ClientConfig::new(&base_url, "unused".into()).expect("config");
    let gateway = HttpGateway::new(&config).expect("gateway");
    (mock, gateway)
}

struct Quiet;

impl Prompt for Quiet {
    fn alert(&self, _message: &str) {}
    fn confirm(&self, _question: &str) -> bool {
        true
    }
}

#[tokio::test]
async fn admin_dashboard_fans_out_per_department() {
    let (mock, gateway) = setup().await;
    let mut session = Session::init(MemoryStore::new());
    session
        .login(&gateway, ADMIN_EMAIL, PASSWORD)
        .await
        .expect("admin login");
    let identity = session.identity().expect("identity").clone();
    assert_eq!(identity.role, Role::Admin);

    let authed = gateway.with_credential(session.credential());
    let dashboard = aggregate(&authed, &identity).await.expect("aggregate");

    let mut calls = mock.calls();
    calls.sort();
    assert_eq!(
        calls,
        vec![
            "GET /departments/stats",
            "GET /reports/department/1",
            "GET /reports/department/2",
            "POST /auth/login",
        ]
    );

    let Dashboard::Admin(overview) = dashboard else {
        panic!("expected admin dashboard");
    };
    let averages: Vec<f64> = overview.averages.iter().map(|a| a.average).collect();
    assert_eq!(averages, vec![90.0, 55.0]);
    assert_eq!(overview.summary.total_employees, 4);
    assert_eq!(overview.summary.total_reports, 3);
    assert_eq!(overview.summary.overall_average, 72.5);
}

#[tokio::test]
async fn employee_dashboard_is_one_reports_call() {
    let (mock, gateway) = setup().await;
    let mut session = Session::init(MemoryStore::new());
    let identity = session
        .login(&gateway, EMPLOYEE_EMAIL, PASSWORD)
        .await
        .expect("employee login")
        .clone();
    assert_eq!(identity.id, 7);

    let authed = gateway.with_credential(session.credential());
    let dashboard = aggregate(&authed, &identity).await.expect("aggregate");

    assert_eq!(mock.calls(), vec!["POST /auth/login", "GET /reports"]);
    let Dashboard::Employee(overview) = dashboard else {
        panic!("expected employee dashboard");
    };
    assert_eq!(overview.reports.len(), 2);
    assert_eq!(overview.average, 90.0);
    assert_eq!(overview.best, 100);
}

#[tokio::test]
async fn missing_bearer_maps_to_unauthorized() {
    let (_mock, gateway) = setup().await;
    let err = gateway.my_reports().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized(_)), "{err:?}");
}

#[tokio::test]
async fn status_codes_map_onto_error_kinds() {
    let (mock, gateway) = setup().await;

    let mut session = Session::init(MemoryStore::new());
    let bad_login = session
        .login(&gateway, ADMIN_EMAIL, "wrong")
        .await
        .unwrap_err();
    assert!(bad_login.is_unauthorized());
    assert!(!session.is_authenticated());

    let employee = gateway.clone().with_token(mock.employee_token.clone());
    let forbidden = employee.department_stats().await.unwrap_err();
    assert!(matches!(forbidden, ClientError::Forbidden(_)), "{forbidden:?}");

    let taken = RegisterRequest {
        full_name: "Ana".into(),
        email: EMPLOYEE_EMAIL.into(),
        password: PASSWORD.into(),
        ..RegisterRequest::default()
    };
    let conflict = gateway.register(&taken).await.unwrap_err();
    assert!(matches!(conflict, ClientError::Conflict(_)), "{conflict:?}");
}

#[tokio::test]
async fn delete_accepts_no_content() {
    let (mock, gateway) = setup().await;
    let admin = gateway.with_token(mock.admin_token.clone());

    admin.delete_report(10).await.expect("204 is success");
    let missing = admin.delete_report(99).await.unwrap_err();
    assert!(matches!(missing, ClientError::NotFound(_)), "{missing:?}");
    assert_eq!(mock.calls(), vec!["DELETE /reports/10", "DELETE /reports/99"]);
}

#[tokio::test]
async fn reports_view_defaults_to_first_department() {
    let (mock, gateway) = setup().await;
    let mut session = Session::init(MemoryStore::new());
    session
        .login(&gateway, ADMIN_EMAIL, PASSWORD)
        .await
        .expect("admin login");

    let authed = gateway.with_credential(session.credential());
    let ctx = ViewContext::for_session(&session, authed, Quiet).expect("logged in");
    let mut view = ReportsView::mount(ctx).await;

    assert_eq!(view.current_filter(), Some(1));
    assert_eq!(view.reports().len(), 2);
    assert_eq!(view.delete(10).await, ActionOutcome::Completed);
    assert_eq!(view.reports().len(), 1);
    assert_eq!(
        mock.calls(),
        vec![
            "POST /auth/login",
            "GET /departments",
            "GET /reports/department/1",
            "DELETE /reports/10",
        ]
    );
}

#[tokio::test]
async fn credential_survives_restart_through_cookie_jar() {
    let (_mock, gateway) = setup().await;
    let dir = tempfile::tempdir().expect("tempdir");
    let jar = dir.path().join("kconnect").join("cookies");

    let mut session = Session::init(CookieJar::new(&jar));
    session
        .login(&gateway, EMPLOYEE_EMAIL, PASSWORD)
        .await
        .expect("login");

    let restored = Session::init(CookieJar::new(&jar));
    let identity = restored.identity().expect("restored identity");
    assert_eq!(identity.email, EMPLOYEE_EMAIL);
    assert_eq!(identity.role, Role::Employee);

    let mut restored = restored;
    restored.logout();
    assert_eq!(CookieJar::new(&jar).load().expect("read jar"), None);
}
