//! Camera Dashboard
//!
//! Administrative web dashboard for a camera-monitoring backend.
//!
//! This library provides:
//! - A typed client for the backend REST API (cameras, staff, faces, streams)
//! - Session handling with explicit expiry
//! - The application store and per-domain data collections
//! - Camera grid paging and layout
//! - Client-side camera settings
//! - The Dioxus UI (`app`) and, on the server, a backend pass-through proxy

pub mod api;
pub mod app;
pub mod collection;
pub mod config;
pub mod grid;
pub mod nav;
pub mod report;
pub mod session;
pub mod settings;
pub mod storage;
pub mod store;

#[cfg(feature = "server")]
pub mod proxy;
