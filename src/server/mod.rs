//! HTTP server implementation
//!
//! REST transport over the RBAC facade.

pub mod builder;
pub mod routes;
pub mod server;
pub mod state;


pub use builder::{ServerBuilder, run_server};
pub use server::HttpServer;
pub use state::AppState;
