//! Client-side reactive state modules.
//!
//! DESIGN
//! ======
//! Each struct is wrapped in a `RwSignal` and provided through Leptos context
//! by `app::App`. Transient page data (lists being fetched) lives in
//! `remote::Remote` values owned by the page itself.

pub mod auth;
pub mod cameras;
pub mod feed;
pub mod remote;
