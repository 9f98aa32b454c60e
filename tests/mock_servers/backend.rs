//! Mock camera-monitoring backend for testing
//!
//! Simulates the REST surface: OAuth2 password login, cameras, persons with
//! face uploads, and stream processors. Everything except login and
//! registration requires `Authorization: Bearer <MockBackend::TOKEN>`.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Form, Json, Router};
use camera_dashboard::api::{Camera, Face, Id, NewCamera, NewPerson, NewStream, Person, StreamProcessor};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Mock backend state
#[derive(Default)]
struct MockState {
    users: HashMap<String, String>,
    cameras: Vec<Camera>,
    persons: Vec<Person>,
    streams: Vec<StreamProcessor>,
    next_id: i64,
    /// Number of GET /cameras/ requests served
    camera_list_calls: usize,
    /// Authorization header of the most recent request
    last_authorization: Option<String>,
    /// Filenames received by the most recent face upload
    last_upload: Vec<String>,
    /// Answer face uploads with 422, as for photos without a face
    reject_uploads: bool,
}

impl MockState {
    fn next_id(&mut self) -> Id {
        self.next_id += 1;
        Id::from(self.next_id)
    }
}

type Shared = Arc<RwLock<MockState>>;

/// Mock backend server
pub struct MockBackend {
    addr: SocketAddr,
    state: Shared,
    handle: JoinHandle<()>,
}

impl MockBackend {
    pub const TOKEN: &'static str = "mock-token";

    /// Start a mock backend on a random port
    pub async fn start() -> Self {
        let state = Arc::new(RwLock::new(MockState {
            next_id: 100,
            ..Default::default()
        }));

        let app = Router::new()
            .route("/auth/token", post(token))
            .route("/auth/register", post(register))
            .route("/cameras/", get(list_cameras).post(create_camera))
            .route(
                "/cameras/{id}",
                get(get_camera).put(update_camera).delete(delete_camera),
            )
            .route("/cameras/camera/{id}/log/download", get(download_logs))
            .route("/persons/", get(list_persons).post(create_person))
            .route(
                "/persons/{id}",
                get(get_person).put(update_person).delete(delete_person),
            )
            .route("/faces/upload/{id}", post(upload_faces))
            .route("/kubernetes/stream-processors", get(list_streams))
            .route("/kubernetes/stream-processor", post(create_stream))
            .route("/kubernetes/stream-processor/{name}", delete(delete_stream))
            .route(
                "/kubernetes/stream-processor/{name}/status",
                get(stream_status),
            )
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL with a trailing slash, as the client expects
    pub fn base_url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub async fn add_user(&self, username: &str, password: &str) {
        let mut state = self.state.write().await;
        state
            .users
            .insert(username.to_string(), password.to_string());
    }

    pub async fn add_camera(&self, id: Id, name: &str) {
        let mut state = self.state.write().await;
        state.cameras.push(Camera {
            id,
            name: name.to_string(),
            url: format!("rtsp://mock/{name}"),
            description: None,
            is_active: true,
        });
    }

    pub async fn set_camera_active(&self, name: &str, active: bool) {
        let mut state = self.state.write().await;
        if let Some(camera) = state.cameras.iter_mut().find(|c| c.name == name) {
            camera.is_active = active;
        }
    }

    pub async fn add_person(&self, id: Id, name: &str, faces: usize) {
        let mut state = self.state.write().await;
        let faces = (0..faces)
            .map(|i| Face {
                id: Id::new(format!("{id}-{i}")),
                person_id: Some(id.clone()),
            })
            .collect();
        state.persons.push(Person {
            id,
            name: name.to_string(),
            faces,
        });
    }

    pub async fn add_stream(&self, name: &str, camera_id: i64) {
        let mut state = self.state.write().await;
        state.streams.push(StreamProcessor {
            name: name.to_string(),
            camera_id: Some(Id::from(camera_id)),
        });
    }

    pub async fn cameras(&self) -> Vec<Camera> {
        self.state.read().await.cameras.clone()
    }

    pub async fn persons(&self) -> Vec<Person> {
        self.state.read().await.persons.clone()
    }

    pub async fn streams(&self) -> Vec<StreamProcessor> {
        self.state.read().await.streams.clone()
    }

    pub async fn camera_list_calls(&self) -> usize {
        self.state.read().await.camera_list_calls
    }

    pub async fn last_authorization(&self) -> Option<String> {
        self.state.read().await.last_authorization.clone()
    }

    pub async fn reject_uploads(&self, reject: bool) {
        self.state.write().await.reject_uploads = reject;
    }

    pub async fn last_upload(&self) -> Vec<String> {
        self.state.read().await.last_upload.clone()
    }

    /// Stop the mock server
    pub async fn stop(self) {
        self.handle.abort();
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

/// Record the Authorization header and check it carries the mock token.
async fn authorize(state: &Shared, headers: &HeaderMap) -> Result<(), Response> {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let expected = format!("Bearer {}", MockBackend::TOKEN);
    let ok = auth.as_deref() == Some(expected.as_str());
    state.write().await.last_authorization = auth;
    if ok {
        Ok(())
    } else {
        Err(detail(StatusCode::UNAUTHORIZED, "Not authenticated"))
    }
}

// =============================================================================
// Auth
// =============================================================================

async fn token(State(state): State<Shared>, Form(form): Form<HashMap<String, String>>) -> Response {
    let state = state.read().await;
    let username = form.get("username").cloned().unwrap_or_default();
    let password = form.get("password").cloned().unwrap_or_default();
    let grant = form.get("grant_type").map(String::as_str);

    if grant != Some("password") {
        return detail(StatusCode::UNPROCESSABLE_ENTITY, "grant_type must be password");
    }
    match state.users.get(&username) {
        Some(expected) if *expected == password => Json(json!({
            "access_token": MockBackend::TOKEN,
            "token_type": "bearer",
        }))
        .into_response(),
        _ => detail(StatusCode::UNAUTHORIZED, "Incorrect username or password"),
    }
}

async fn register(State(state): State<Shared>, Json(body): Json<serde_json::Value>) -> Response {
    let mut state = state.write().await;
    let username = body["username"].as_str().unwrap_or_default().to_string();
    let password = body["password"].as_str().unwrap_or_default().to_string();
    if username.is_empty() || password.is_empty() {
        return detail(StatusCode::UNPROCESSABLE_ENTITY, "Username and password are required");
    }
    if state.users.contains_key(&username) {
        return detail(StatusCode::BAD_REQUEST, "Username already registered");
    }
    state.users.insert(username.clone(), password);
    let id = state.next_id();
    Json(json!({
        "id": id,
        "username": username,
        "email": body["email"],
        "is_active": true,
    }))
    .into_response()
}

// =============================================================================
// Cameras
// =============================================================================

async fn list_cameras(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(resp) = authorize(&state, &headers).await {
        return resp;
    }
    let mut state = state.write().await;
    state.camera_list_calls += 1;
    Json(state.cameras.clone()).into_response()
}

async fn get_camera(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(resp) = authorize(&state, &headers).await {
        return resp;
    }
    let state = state.read().await;
    match state.cameras.iter().find(|c| c.id.as_str() == id) {
        Some(camera) => Json(camera.clone()).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Camera not found"),
    }
}

async fn create_camera(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(draft): Json<NewCamera>,
) -> Response {
    if let Err(resp) = authorize(&state, &headers).await {
        return resp;
    }
    let mut state = state.write().await;
    let camera = Camera {
        id: state.next_id(),
        name: draft.name,
        url: draft.url,
        description: Some(draft.description),
        is_active: draft.is_active,
    };
    state.cameras.push(camera.clone());
    Json(camera).into_response()
}

async fn update_camera(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(draft): Json<NewCamera>,
) -> Response {
    if let Err(resp) = authorize(&state, &headers).await {
        return resp;
    }
    let mut state = state.write().await;
    match state.cameras.iter_mut().find(|c| c.id.as_str() == id) {
        Some(camera) => {
            camera.name = draft.name;
            camera.url = draft.url;
            camera.description = Some(draft.description);
            camera.is_active = draft.is_active;
            Json(camera.clone()).into_response()
        }
        None => detail(StatusCode::NOT_FOUND, "Camera not found"),
    }
}

async fn delete_camera(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(resp) = authorize(&state, &headers).await {
        return resp;
    }
    let mut state = state.write().await;
    let before = state.cameras.len();
    state.cameras.retain(|c| c.id.as_str() != id);
    if state.cameras.len() == before {
        return detail(StatusCode::NOT_FOUND, "Camera not found");
    }
    Json(json!({ "detail": "Camera deleted" })).into_response()
}

async fn download_logs(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(resp) = authorize(&state, &headers).await {
        return resp;
    }
    let state = state.read().await;
    if !state.cameras.iter().any(|c| c.id.as_str() == id) {
        return detail(StatusCode::NOT_FOUND, "Camera not found");
    }
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"camera_{id}_report.pdf\""),
            ),
        ],
        Bytes::from_static(b"%PDF-1.4 mock report"),
    )
        .into_response()
}

// =============================================================================
// Persons / Faces
// =============================================================================

async fn list_persons(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(resp) = authorize(&state, &headers).await {
        return resp;
    }
    Json(state.read().await.persons.clone()).into_response()
}

async fn get_person(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(resp) = authorize(&state, &headers).await {
        return resp;
    }
    let state = state.read().await;
    match state.persons.iter().find(|p| p.id.as_str() == id) {
        Some(person) => Json(person.clone()).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Person not found"),
    }
}

async fn create_person(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(draft): Json<NewPerson>,
) -> Response {
    if let Err(resp) = authorize(&state, &headers).await {
        return resp;
    }
    let mut state = state.write().await;
    let person = Person {
        id: state.next_id(),
        name: draft.name,
        faces: Vec::new(),
    };
    state.persons.push(person.clone());
    Json(person).into_response()
}

async fn update_person(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(draft): Json<NewPerson>,
) -> Response {
    if let Err(resp) = authorize(&state, &headers).await {
        return resp;
    }
    let mut state = state.write().await;
    match state.persons.iter_mut().find(|p| p.id.as_str() == id) {
        Some(person) => {
            person.name = draft.name;
            Json(person.clone()).into_response()
        }
        None => detail(StatusCode::NOT_FOUND, "Person not found"),
    }
}

async fn delete_person(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(resp) = authorize(&state, &headers).await {
        return resp;
    }
    let mut state = state.write().await;
    let before = state.persons.len();
    state.persons.retain(|p| p.id.as_str() != id);
    if state.persons.len() == before {
        return detail(StatusCode::NOT_FOUND, "Person not found");
    }
    StatusCode::NO_CONTENT.into_response()
}

/// Pull `filename="..."` values out of a multipart body. Enough for counting
/// the uploaded parts without a multipart parser.
fn multipart_filenames(body: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(body);
    text.split("filename=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_string)
        .collect()
}

async fn upload_faces(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    if let Err(resp) = authorize(&state, &headers).await {
        return resp;
    }
    let is_multipart = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("multipart/form-data"));
    if !is_multipart {
        return detail(StatusCode::UNSUPPORTED_MEDIA_TYPE, "Expected multipart/form-data");
    }

    let filenames = multipart_filenames(&body);
    let mut state = state.write().await;
    state.last_upload = filenames.clone();
    if state.reject_uploads {
        return detail(StatusCode::UNPROCESSABLE_ENTITY, "No face found in photo");
    }
    let Some(person) = state.persons.iter_mut().find(|p| p.id.as_str() == id) else {
        return detail(StatusCode::NOT_FOUND, "Person not found");
    };
    let person_id = person.id.clone();
    let start = person.faces.len();
    for i in 0..filenames.len() {
        person.faces.push(Face {
            id: Id::new(format!("{person_id}-{}", start + i)),
            person_id: Some(person_id.clone()),
        });
    }
    Json(json!({
        "processed": filenames.len(),
        "message": "Faces uploaded",
    }))
    .into_response()
}

// =============================================================================
// Stream processors
// =============================================================================

async fn list_streams(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(resp) = authorize(&state, &headers).await {
        return resp;
    }
    Json(state.read().await.streams.clone()).into_response()
}

async fn create_stream(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(draft): Json<NewStream>,
) -> Response {
    if let Err(resp) = authorize(&state, &headers).await {
        return resp;
    }
    let mut state = state.write().await;
    if state.streams.iter().any(|s| s.name == draft.name) {
        return detail(StatusCode::CONFLICT, "Stream processor already exists");
    }
    state.streams.push(StreamProcessor {
        name: draft.name.clone(),
        camera_id: draft.camera_id.map(Id::from),
    });
    Json(json!({
        "name": draft.name,
        "container_name": format!("{}-container", draft.name),
        "status": "created",
    }))
    .into_response()
}

async fn delete_stream(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> Response {
    if let Err(resp) = authorize(&state, &headers).await {
        return resp;
    }
    let mut state = state.write().await;
    let before = state.streams.len();
    state.streams.retain(|s| s.name != name);
    if state.streams.len() == before {
        return detail(StatusCode::NOT_FOUND, "Stream processor not found");
    }
    Json(json!({ "detail": format!("Stream processor {name} deleted") })).into_response()
}

async fn stream_status(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> Response {
    if let Err(resp) = authorize(&state, &headers).await {
        return resp;
    }
    let state = state.read().await;
    if !state.streams.iter().any(|s| s.name == name) {
        return detail(StatusCode::NOT_FOUND, "Stream processor not found");
    }
    Json(json!({
        "name": name,
        "status": "Running",
        "details": "1/1 replicas ready",
    }))
    .into_response()
}
