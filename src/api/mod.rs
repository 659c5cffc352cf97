//! API Module
//!
//! HTTP handlers and routing that expose the cache store over REST.
//!
//! # Endpoints
//! - `PUT /set` - Store a JSON value with optional TTL
//! - `GET /get/:key` - Retrieve a value by key
//! - `DELETE /del/:key` - Delete a key
//! - `GET /exists/:key` - Check presence (ignores expiry)
//! - `POST /flush` - Remove every key
//! - `GET /keys` - Count stored keys
//! - `PUT /capacity` - Set the advisory capacity ceiling
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
