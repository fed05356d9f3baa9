//! # plughub-api
//!
//! Host HTTP surface. Assembles the host router, nests each plugin's
//! endpoint group under `/api`, and maps [`AppError`](plughub_core::AppError)
//! into HTTP responses.

pub mod app;
pub mod error;
pub mod router;
pub mod state;

pub use app::run_server;
pub use router::build_router;
pub use state::AppState;
