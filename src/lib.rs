pub mod config;
pub mod error;
pub mod observability;
pub mod routes;
pub mod submission;

pub use config::Config;
pub use routes::{AppState, router};
