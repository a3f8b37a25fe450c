use api_client::{ApiClient, MemoryStore};
use axum::{
    extract::{Multipart, Path, Query, Request, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

pub const USER_EMAIL: &str = "ana@example.com";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const PASSWORD: &str = "secret1";

/// Start time of the seeded booking on court `c-1`.
pub const TAKEN_START: &str = "2025-03-10T14:00:00";
pub const SLOT_TAKEN: &str = "Time slot already reserved";

/// One request as the mock backend saw it.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
}

/// In-memory stand-in for the reservation backend.
#[derive(Default)]
pub struct MockState {
    seen: Mutex<Vec<SeenRequest>>,
    users: Mutex<HashMap<String, Value>>,
    tokens: Mutex<HashMap<String, String>>,
    courts: Mutex<Vec<Value>>,
    reservations: Mutex<Vec<Value>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|e| e.into_inner())
}

impl MockState {
    fn seeded() -> Self {
        let state = Self::default();
        {
            let mut users = lock(&state.users);
            users.insert(USER_EMAIL.into(), user_json("u-1", USER_EMAIL, "Ana", "Lopez", "USER"));
            users.insert(ADMIN_EMAIL.into(), user_json("u-admin", ADMIN_EMAIL, "Ada", "Admin", "ADMIN"));
        }
        *lock(&state.courts) = vec![
            json!({
                "id": "c-1",
                "name": "Center Court",
                "sport_id": "s-1",
                "sport": {"id": "s-1", "name": "Tennis"},
                "description": "Clay surface",
                "location": "North Wing",
                "capacity": 4,
                "price_per_hour": 25.0,
                "image_url": "https://img.example.com/c1.png",
                "is_active": true
            }),
            json!({
                "id": "c-2",
                "name": "Court 2",
                "location": "",
                "capacity": 10,
                "price_per_hour": 40.0,
                "is_active": true
            }),
        ];
        *lock(&state.reservations) = vec![
            reservation_json("r-1", "u-1", "c-1", TAKEN_START, "2025-03-10T15:00:00", "CONFIRMED"),
            reservation_json("r-2", "u-1", "c-2", "2025-03-11T09:00:00", "2025-03-11T10:00:00", "CONFIRMED"),
            reservation_json("r-3", "u-1", "c-1", "2025-02-01T18:00:00", "2025-02-01T19:00:00", "COMPLETED"),
            reservation_json("r-9", "u-other", "c-2", "2025-03-12T08:00:00", "2025-03-12T09:00:00", "CONFIRMED"),
        ];
        state
    }

    fn issue_token(&self, email: &str) -> String {
        let token = format!("tok-{}", uuid::Uuid::new_v4());
        lock(&self.tokens).insert(token.clone(), email.to_string());
        token
    }

    fn caller(&self, headers: &HeaderMap) -> Option<Value> {
        let token = headers
            .get(AUTHORIZATION)?
            .to_str()
            .ok()?
            .strip_prefix("Bearer ")?
            .to_string();
        let email = lock(&self.tokens).get(&token)?.clone();
        lock(&self.users).get(&email).cloned()
    }

    fn court(&self, id: &str) -> Option<Value> {
        lock(&self.courts).iter().find(|c| c["id"] == id).cloned()
    }

    fn with_court(&self, mut reservation: Value) -> Value {
        if let Some(id) = reservation["court_id"].as_str() {
            if let Some(court) = self.court(id) {
                reservation["court"] = court;
            }
        }
        reservation
    }
}

pub fn user_json(id: &str, email: &str, first: &str, last: &str, role: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "first_name": first,
        "last_name": last,
        "phone": null,
        "role": role,
        "created_at": "2025-01-01T10:00:00"
    })
}

fn reservation_json(id: &str, user: &str, court: &str, start: &str, end: &str, status: &str) -> Value {
    json!({
        "id": id,
        "court_id": court,
        "user_id": user,
        "date": format!("{}T00:00:00", &start[..10]),
        "start_time": start,
        "end_time": end,
        "notes": null,
        "status": status,
        "total_price": 25.0,
        "created_at": "2025-03-01T09:00:00"
    })
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

fn not_authenticated() -> Response {
    detail(StatusCode::UNAUTHORIZED, "Could not validate credentials")
}

fn require_admin(state: &MockState, headers: &HeaderMap) -> Result<Value, Response> {
    let user = state.caller(headers).ok_or_else(not_authenticated)?;
    if user["role"] == "ADMIN" {
        Ok(user)
    } else {
        Err(detail(StatusCode::FORBIDDEN, "Not enough permissions"))
    }
}

async fn record(State(state): State<Arc<MockState>>, req: Request, next: Next) -> Response {
    let authorization = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    lock(&state.seen).push(SeenRequest {
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        query: req.uri().query().map(str::to_string),
        authorization,
    });
    next.run(req).await
}

async fn register(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default().to_string();
    let mut users = lock(&state.users);
    if users.contains_key(&email) {
        return detail(StatusCode::BAD_REQUEST, "Email already registered");
    }
    let mut user = user_json(
        &uuid::Uuid::new_v4().to_string(),
        &email,
        body["first_name"].as_str().unwrap_or_default(),
        body["last_name"].as_str().unwrap_or_default(),
        "USER",
    );
    user["phone"] = body["phone"].clone();
    users.insert(email, user.clone());
    (StatusCode::CREATED, Json(user)).into_response()
}

/// OAuth2 password form: every account shares [`PASSWORD`].
async fn login(State(state): State<Arc<MockState>>, mut form: Multipart) -> Response {
    let mut fields = HashMap::new();
    while let Ok(Some(field)) = form.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let value = field.text().await.unwrap_or_default();
        fields.insert(name, value);
    }
    let username = fields.get("username").cloned().unwrap_or_default();
    let password = fields.get("password").cloned().unwrap_or_default();

    let known = lock(&state.users).contains_key(&username);
    if !known || password != PASSWORD {
        return detail(StatusCode::UNAUTHORIZED, "Incorrect email or password");
    }
    let token = state.issue_token(&username);
    Json(json!({ "access_token": token, "token_type": "bearer" })).into_response()
}

async fn me(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    match state.caller(&headers) {
        Some(user) => Json(user).into_response(),
        None => not_authenticated(),
    }
}

async fn list_courts(State(state): State<Arc<MockState>>) -> Response {
    Json(lock(&state.courts).clone()).into_response()
}

async fn get_court(State(state): State<Arc<MockState>>, Path(id): Path<String>) -> Response {
    match state.court(&id) {
        Some(court) => Json(court).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Court not found"),
    }
}

async fn create_court(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> Response {
    if let Err(resp) = require_admin(&state, &headers) {
        return resp;
    }
    body["id"] = json!(uuid::Uuid::new_v4().to_string());
    body["is_active"] = json!(true);
    lock(&state.courts).push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn update_court(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if let Err(resp) = require_admin(&state, &headers) {
        return resp;
    }
    let mut courts = lock(&state.courts);
    let Some(court) = courts.iter_mut().find(|c| c["id"] == id) else {
        return detail(StatusCode::NOT_FOUND, "Court not found");
    };
    if let (Some(target), Some(changes)) = (court.as_object_mut(), body.as_object()) {
        for (key, value) in changes {
            target.insert(key.clone(), value.clone());
        }
    }
    Json(court.clone()).into_response()
}

async fn delete_court(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(resp) = require_admin(&state, &headers) {
        return resp;
    }
    let mut courts = lock(&state.courts);
    let before = courts.len();
    courts.retain(|c| c["id"] != id);
    if courts.len() == before {
        return detail(StatusCode::NOT_FOUND, "Court not found");
    }
    StatusCode::NO_CONTENT.into_response()
}

/// The seeded 14:00 booking is missing from 2025-03-10.
async fn available_slots(
    State(state): State<Arc<MockState>>,
    Path(id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if state.court(&id).is_none() {
        return detail(StatusCode::NOT_FOUND, "Court not found");
    }
    let Some(date) = query.get("date") else {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "detail": [{"loc": ["query", "date"], "msg": "field required", "type": "value_error.missing"}]
            })),
        )
            .into_response();
    };
    let hours: &[u32] = if date == "2025-03-10" { &[9, 10, 15] } else { &[9, 10, 14, 15] };
    let slots: Vec<Value> = hours
        .iter()
        .map(|h| {
            json!({
                "start": format!("{h:02}:00"),
                "end": format!("{:02}:00", h + 1),
                "label": format!("{h:02}:00 - {:02}:00", h + 1),
            })
        })
        .collect();
    Json(json!({
        "court_id": id,
        "date": date,
        "available_slots": slots,
        "reserved_count": 4 - hours.len(),
    }))
    .into_response()
}

async fn create_reservation(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let Some(user) = state.caller(&headers) else {
        return not_authenticated();
    };
    let Some(court) = state.court(body["court_id"].as_str().unwrap_or_default()) else {
        return detail(StatusCode::NOT_FOUND, "Court not found");
    };
    let mut reservations = lock(&state.reservations);
    let clash = reservations.iter().any(|r| {
        r["court_id"] == body["court_id"]
            && r["start_time"] == body["start_time"]
            && r["status"] != "CANCELLED"
    });
    if clash {
        return detail(StatusCode::BAD_REQUEST, SLOT_TAKEN);
    }
    let mut created = body.clone();
    created["id"] = json!(uuid::Uuid::new_v4().to_string());
    created["user_id"] = user["id"].clone();
    created["status"] = json!("CONFIRMED");
    created["total_price"] = court["price_per_hour"].clone();
    created["created_at"] = json!("2025-03-01T09:00:00");
    reservations.push(created.clone());
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn my_reservations(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    let Some(user) = state.caller(&headers) else {
        return not_authenticated();
    };
    let mine: Vec<Value> = lock(&state.reservations)
        .iter()
        .filter(|r| r["user_id"] == user["id"])
        .cloned()
        .collect();
    let detailed: Vec<Value> = mine.into_iter().map(|r| state.with_court(r)).collect();
    Json(detailed).into_response()
}

async fn all_reservations(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    if let Err(resp) = require_admin(&state, &headers) {
        return resp;
    }
    let users = lock(&state.users).clone();
    let all = lock(&state.reservations).clone();
    let detailed: Vec<Value> = all
        .into_iter()
        .map(|r| {
            let mut r = state.with_court(r);
            if let Some(user) = users.values().find(|u| u["id"] == r["user_id"]) {
                r["user"] = user.clone();
            }
            r
        })
        .collect();
    Json(detailed).into_response()
}

fn find_owned(state: &MockState, headers: &HeaderMap, id: &str) -> Result<Value, Response> {
    let user = state.caller(headers).ok_or_else(not_authenticated)?;
    lock(&state.reservations)
        .iter()
        .find(|r| r["id"] == id && (r["user_id"] == user["id"] || user["role"] == "ADMIN"))
        .cloned()
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, "Reservation not found"))
}

async fn get_reservation(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    match find_owned(&state, &headers, &id) {
        Ok(r) => Json(state.with_court(r)).into_response(),
        Err(resp) => resp,
    }
}

async fn cancel_reservation(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(resp) = find_owned(&state, &headers, &id) {
        return resp;
    }
    if let Some(r) = lock(&state.reservations).iter_mut().find(|r| r["id"] == id) {
        r["status"] = json!("CANCELLED");
    }
    Json(json!({ "message": "Reservation cancelled successfully" })).into_response()
}

async fn health() -> &'static str {
    "ok"
}

fn router(state: Arc<MockState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/auth/register", axum::routing::post(register))
        .route("/api/auth/login", axum::routing::post(login))
        .route("/api/auth/me", get(me))
        .route("/api/courts", get(list_courts).post(create_court))
        .route(
            "/api/courts/{id}",
            get(get_court).put(update_court).delete(delete_court),
        )
        .route("/api/courts/{id}/available-slots", get(available_slots))
        .route("/api/reservations", axum::routing::post(create_reservation))
        .route("/api/reservations/my-reservations", get(my_reservations))
        .route("/api/reservations/all", get(all_reservations))
        .route(
            "/api/reservations/{id}",
            get(get_reservation).delete(cancel_reservation),
        )
        .layer(middleware::from_fn_with_state(state.clone(), record))
        .with_state(state)
}

/// A mock backend listening on an ephemeral local port.
pub struct MockBackend {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::seeded());
        let app = router(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Failed to read mock backend address");
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(error = %e, "mock backend stopped");
            }
        });
        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// A fresh client with an empty in-memory store.
    pub fn client(&self) -> (ApiClient, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (ApiClient::new(&self.base_url, store.clone()), store)
    }

    /// A bearer token the backend accepts for `email`.
    pub fn token_for(&self, email: &str) -> String {
        self.state.issue_token(email)
    }

    pub fn seen(&self) -> Vec<SeenRequest> {
        lock(&self.state.seen).clone()
    }

    pub fn last_request(&self, path: &str) -> Option<SeenRequest> {
        self.seen().into_iter().rev().find(|r| r.path == path)
    }

    pub fn reservation_status(&self, id: &str) -> Option<String> {
        lock(&self.state.reservations)
            .iter()
            .find(|r| r["id"] == id)
            .and_then(|r| r["status"].as_str().map(str::to_string))
    }
}
