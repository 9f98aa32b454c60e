//! HTTP client for the camera-monitoring backend.
//!
//! One request per call: no retry, no timeout, no backoff. Writes send JSON
//! (or multipart for face photos); every request carries
//! `Authorization: Bearer <token>` once a session exists.

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use super::error::{extract_detail, ApiError};
use super::models::*;
use crate::store::UploadedFile;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
    token: Option<String>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.token == other.token
    }
}

impl ApiClient {
    /// Create a client for the backend at `base_url`.
    ///
    /// A relative base such as `/backend/` is resolved against the page
    /// origin. A missing trailing slash is added so endpoint paths join below
    /// the base rather than replacing its last segment.
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        let mut base = match Url::parse(base_url) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Url::parse(&page_origin())?.join(base_url)?
            }
            Err(e) => return Err(e),
        };
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base,
            token: None,
        })
    }

    /// Same client, authenticating with `token`. Clones share one connection
    /// pool, so a per-request copy is cheap.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base.join(path)?)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(path)?;
        tracing::debug!("{} {}", method, url);
        let mut rb = self.http.request(method, url).header(ACCEPT, "application/json");
        if let Some(ref token) = self.token {
            rb = rb.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        Ok(rb)
    }

    /// Send and turn any non-2xx answer into [`ApiError::Status`].
    async fn send(&self, rb: RequestBuilder, action: &'static str) -> Result<Response, ApiError> {
        let resp = rb
            .send()
            .await
            .map_err(|source| ApiError::Transport { action, source })?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        let detail =
            extract_detail(&body).or_else(|| status.canonical_reason().map(str::to_string));
        tracing::debug!("{} rejected with {}: {:?}", action, status, detail);
        Err(ApiError::Status {
            action,
            status: status.as_u16(),
            detail,
        })
    }

    async fn decode<T: DeserializeOwned>(resp: Response, action: &'static str) -> Result<T, ApiError> {
        let body = resp
            .text()
            .await
            .map_err(|source| ApiError::Transport { action, source })?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode { action, source })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, action: &'static str) -> Result<T, ApiError> {
        let rb = self.request(Method::GET, path)?;
        let resp = self.send(rb, action).await?;
        Self::decode(resp, action).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        action: &'static str,
    ) -> Result<T, ApiError> {
        let rb = self.request(method, path)?.json(body);
        let resp = self.send(rb, action).await?;
        Self::decode(resp, action).await
    }

    /// DELETE, ignoring whatever confirmation body the backend sends back.
    async fn delete(&self, path: &str, action: &'static str) -> Result<(), ApiError> {
        let rb = self.request(Method::DELETE, path)?;
        self.send(rb, action).await?;
        Ok(())
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Exchange credentials for a bearer token (OAuth2 password form).
    pub async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        const ACTION: &str = "login";
        let form = [
            ("grant_type", "password"),
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
        ];
        let rb = self.request(Method::POST, "auth/token")?.form(&form);
        let resp = self.send(rb, ACTION).await?;
        Self::decode(resp, ACTION).await
    }

    pub async fn register(&self, registration: &Registration) -> Result<RegisteredUser, ApiError> {
        self.send_json(Method::POST, "auth/register", registration, "registration")
            .await
    }

    // =========================================================================
    // Cameras
    // =========================================================================

    pub async fn list_cameras(&self) -> Result<Vec<Camera>, ApiError> {
        self.get_json("cameras/", "fetch cameras").await
    }

    pub async fn get_camera(&self, id: &Id) -> Result<Camera, ApiError> {
        self.get_json(&format!("cameras/{}", segment(id)), "fetch camera details")
            .await
    }

    pub async fn create_camera(&self, camera: &NewCamera) -> Result<Camera, ApiError> {
        self.send_json(Method::POST, "cameras/", camera, "add camera")
            .await
    }

    pub async fn update_camera(&self, id: &Id, camera: &NewCamera) -> Result<Camera, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("cameras/{}", segment(id)),
            camera,
            "update camera",
        )
        .await
    }

    pub async fn delete_camera(&self, id: &Id) -> Result<(), ApiError> {
        self.delete(&format!("cameras/{}", segment(id)), "delete camera")
            .await
    }

    /// Download the detection log report for a camera.
    pub async fn download_camera_logs(&self, id: &Id) -> Result<DownloadedFile, ApiError> {
        const ACTION: &str = "download camera logs";
        let path = format!("cameras/camera/{}/log/download", segment(id));
        let rb = self
            .request(Method::GET, &path)?
            .header(ACCEPT, "application/pdf, application/json");
        let resp = self.send(rb, ACTION).await?;

        let header = |name| {
            resp.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let content_type = header(CONTENT_TYPE);
        let name = header(CONTENT_DISPOSITION)
            .and_then(|h| disposition_filename(&h))
            .unwrap_or_else(|| format!("camera_{}_logs.pdf", id));

        let data = resp
            .bytes()
            .await
            .map_err(|source| ApiError::Transport {
                action: ACTION,
                source,
            })?
            .to_vec();

        Ok(DownloadedFile {
            name,
            content_type,
            data,
        })
    }

    // =========================================================================
    // Persons / Faces
    // =========================================================================

    pub async fn list_persons(&self) -> Result<Vec<Person>, ApiError> {
        self.get_json("persons/", "fetch staff").await
    }

    pub async fn get_person(&self, id: &Id) -> Result<Person, ApiError> {
        self.get_json(&format!("persons/{}", segment(id)), "fetch staff member")
            .await
    }

    pub async fn create_person(&self, person: &NewPerson) -> Result<Person, ApiError> {
        self.send_json(Method::POST, "persons/", person, "add staff member")
            .await
    }

    pub async fn update_person(&self, id: &Id, person: &NewPerson) -> Result<Person, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("persons/{}", segment(id)),
            person,
            "update staff member",
        )
        .await
    }

    pub async fn delete_person(&self, id: &Id) -> Result<(), ApiError> {
        self.delete(&format!("persons/{}", segment(id)), "delete staff member")
            .await
    }

    /// Upload face photos for a person as one multipart request.
    pub async fn upload_faces(
        &self,
        person_id: &Id,
        files: &[UploadedFile],
    ) -> Result<FaceUploadResult, ApiError> {
        const ACTION: &str = "upload face photos";
        let mut form = reqwest::multipart::Form::new();
        for file in files {
            let mut part =
                reqwest::multipart::Part::bytes(file.data.to_vec()).file_name(file.name.clone());
            if let Some(ref mime) = file.content_type {
                part = part
                    .mime_str(mime)
                    .map_err(|source| ApiError::Transport {
                        action: ACTION,
                        source,
                    })?;
            }
            form = form.part("files", part);
        }

        let path = format!("faces/upload/{}", segment(person_id));
        let rb = self.request(Method::POST, &path)?.multipart(form);
        let resp = self.send(rb, ACTION).await?;
        Self::decode(resp, ACTION).await
    }

    // =========================================================================
    // Stream processors
    // =========================================================================

    pub async fn list_streams(&self) -> Result<Vec<StreamProcessor>, ApiError> {
        self.get_json("kubernetes/stream-processors", "fetch streams")
            .await
    }

    pub async fn create_stream(&self, stream: &NewStream) -> Result<StreamDeployment, ApiError> {
        self.send_json(
            Method::POST,
            "kubernetes/stream-processor",
            stream,
            "add stream",
        )
        .await
    }

    pub async fn delete_stream(&self, name: &str) -> Result<(), ApiError> {
        self.delete(
            &format!("kubernetes/stream-processor/{}", urlencoding::encode(name)),
            "delete stream",
        )
        .await
    }

    pub async fn stream_status(&self, name: &str) -> Result<StreamStatus, ApiError> {
        self.get_json(
            &format!(
                "kubernetes/stream-processor/{}/status",
                urlencoding::encode(name)
            ),
            "fetch stream status",
        )
        .await
    }
}

fn segment(id: &Id) -> String {
    urlencoding::encode(id.as_str()).into_owned()
}

/// Origin used to resolve a relative base URL.
#[cfg(target_arch = "wasm32")]
fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> String {
    "http://localhost".to_string()
}
