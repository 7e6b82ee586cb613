//! Inbound HTTP API: `GET /cadastre/{number}` → canonical record JSON.

pub mod routes;

pub use routes::{AppState, app};
