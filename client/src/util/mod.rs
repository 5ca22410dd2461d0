//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, media,
//! downloads) from page and component logic to improve reuse and testability.

pub mod auth;
pub mod config;
pub mod download;
pub mod format;
pub mod frame_capture;
pub mod preferences;
pub mod session;
pub mod storage;
pub mod theme;
