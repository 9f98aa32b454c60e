//! Mock servers for integration testing
//!
//! These mock servers simulate the camera-monitoring backend so the API
//! client, session handling and proxy can be exercised end to end.

pub mod backend;

pub use backend::MockBackend;
