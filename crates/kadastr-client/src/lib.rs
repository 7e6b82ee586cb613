//! Upstream geoportal client and the lookup service that ties
//! validation, fetching, and normalization together.

pub mod geoportal;
pub mod service;

pub use geoportal::{DEFAULT_BASE_URL, FetchError, GeoportalClient};
pub use service::{CadastreService, LookupError};
