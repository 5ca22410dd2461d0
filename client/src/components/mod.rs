//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome and monitoring widgets while reading and
//! writing shared state from Leptos context providers.

pub mod camera_sidebar;
pub mod confirm_dialog;
pub mod header;
pub mod incident_card;
pub mod recent_incidents;
pub mod video_feed;
