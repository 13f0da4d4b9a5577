//! Camp signups: REST backend for campers, activities and the signups that link them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppError, ConfigError};
pub use routes::{api_routes, app, common_routes};
pub use state::AppState;
pub use store::{connect, ensure_tables, seed};
