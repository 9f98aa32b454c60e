//! Backend API: typed records, error normalization and the HTTP client.

mod client;
mod error;
mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    Camera, Credentials, DownloadedFile, Entity, Face, FaceUploadResult, Id, NewCamera, NewPerson,
    NewStream, Person, RegisteredUser, Registration, StreamDeployment, StreamProcessor,
    StreamStatus, TokenResponse,
};
