pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod service;

pub use api::build_router;
pub use config::AppConfig;
pub use error::{OrderError, OrderResult};
pub use models::{CleanedOrder, InputOrder};
pub use service::process_orders;
