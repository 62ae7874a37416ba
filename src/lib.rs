//! collection-api - A JSON-file backed HTTP service for tracking media
//!
//! - `record`: the record model, validator and seed set
//! - `store`: whole-collection persistence and seeding
//! - `http_server`: axum routes and server
//! - `cli`: process entry point and configuration

pub mod cli;
pub mod http_server;
pub mod record;
pub mod store;
