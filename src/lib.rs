pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod state;
pub mod store;

pub use app::{build_app, serve};
pub use state::AppState;
