//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod about;
pub mod home;
pub mod incident_detail;
pub mod incident_list;
pub mod login;
pub mod register;
pub mod settings;
