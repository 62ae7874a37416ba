//! # HTTP Server Module
//!
//! Axum server exposing the record collection.
//!
//! # Endpoints
//!
//! - `GET /` - Liveness string
//! - `GET /api/records` - List all records, newest first
//! - `POST /api/records` - Create a record
//! - `PUT /api/records/:id` - Replace a record's fields
//! - `DELETE /api/records/:id` - Delete a record

pub mod config;
pub mod errors;
pub mod record_routes;
pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use errors::{ApiError, ApiResult};
pub use record_routes::RecordsState;
pub use server::HttpServer;
