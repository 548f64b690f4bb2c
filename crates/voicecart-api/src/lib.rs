pub mod api;

pub use api::models::{CommandResponse, ErrorResponse};
pub use api::server::{ApiConfig, ApiServer};
