//! Networking modules for the surveillance backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` classifies failures for display,
//! and `types` defines the backend's JSON shapes.

pub mod api;
pub mod error;
pub mod types;
