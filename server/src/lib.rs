//! In-memory portfolio API server
//!
//! CRUD endpoints over process-local profile and project stores. No
//! persistence: data lives in memory and is lost on restart. Intended for
//! single-process, low-concurrency deployments; concurrent saves to the
//! same project follow last-write-wins.

pub mod auth;
pub mod profile;
pub mod project;
pub mod routes;
pub mod store;

pub use routes::service_handler;
pub use store::Store;
