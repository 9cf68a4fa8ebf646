//! # Grande Charte Backend
//!
//! Contact-form backend for the Grande Charte website.
//!
//! Three HTTP endpoints over a document store: a fixed status message, a
//! store-connectivity diagnostic, and a contact-form submission that
//! validates and persists a single record per request.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`schemas`]: record shapes exchanged with clients and stored in the
//!   database, with field-level validation
//! - [`db`]: persistence gateway: repository trait, MongoDB and in-memory
//!   implementations, typed service operations
//! - [`http`]: axum-based HTTP server, routes and request handlers
//! - [`notify`]: operator-notification capability (delivery is a designed-in
//!   no-op)
//!
//! Request flow is strictly linear: handler → validation → service →
//! repository → response. The repository is constructed once at startup and
//! shared behind an [`std::sync::Arc`]; no other state crosses requests.

pub mod db;
pub mod http;
pub mod notify;
pub mod schemas;
